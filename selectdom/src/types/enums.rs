/// Inline display state of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    Inline,
    /// Not laid out at all; hides the element and its subtree.
    Hidden,
}

impl Display {
    pub fn is_hidden(self) -> bool {
        self == Self::Hidden
    }
}

impl std::fmt::Display for Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Block => "block",
            Self::Inline => "inline",
            Self::Hidden => "none",
        };
        f.write_str(s)
    }
}
