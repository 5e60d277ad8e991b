use crate::render::Line;

/// Find the element owning the row at `y`, given the index of the first
/// visible row. Returns None below the last row.
pub fn hit_test(lines: &[Line], scroll: usize, y: u16) -> Option<String> {
    lines
        .get(scroll + y as usize)
        .map(|line| line.id.clone())
}
