//! Native single-choice control semantics on top of the document.
//!
//! Selectedness is carried by the `selected` attribute of each `option`.
//! When no option carries it, the first enabled option counts as selected.

use crate::document::Document;

impl Document {
    /// Option ids of a `select`, in document order (including `optgroup` children).
    pub fn select_options(&self, select: &str) -> Vec<String> {
        self.descendants_by_tag(select, "option")
    }

    /// Value of an option: its `value` attribute, or its text when unset.
    pub fn option_value(&self, option: &str) -> Option<String> {
        if !self.exists(option) {
            return None;
        }
        Some(
            self.attr(option, "value")
                .map(str::to_string)
                .unwrap_or_else(|| self.text_content(option)),
        )
    }

    pub fn is_option_disabled(&self, option: &str) -> bool {
        self.has_attr(option, "disabled")
            || self
                .parent(option)
                .is_some_and(|p| self.tag(p) == Some("optgroup") && self.has_attr(p, "disabled"))
    }

    /// Index of the selected option, or `None` when the control has no options
    /// it could select.
    pub fn selected_index(&self, select: &str) -> Option<usize> {
        let options = self.select_options(select);
        options
            .iter()
            .rposition(|o| self.has_attr(o, "selected"))
            .or_else(|| options.iter().position(|o| !self.is_option_disabled(o)))
    }

    /// Value of the selected option.
    pub fn select_value(&self, select: &str) -> Option<String> {
        let options = self.select_options(select);
        let index = self.selected_index(select)?;
        self.option_value(&options[index])
    }

    /// Select the option at `index`, deselecting the rest.
    ///
    /// Returns false and leaves the control untouched when out of range.
    pub fn set_selected_index(&mut self, select: &str, index: usize) -> bool {
        let options = self.select_options(select);
        if index >= options.len() {
            return false;
        }
        for (i, option) in options.iter().enumerate() {
            if i == index {
                self.set_attr(option, "selected", "");
            } else {
                self.remove_attr(option, "selected");
            }
        }
        true
    }

    /// Select the first option whose value equals `value`, deselecting the rest.
    ///
    /// Returns false and leaves the control untouched when no option matches.
    pub fn set_select_value(&mut self, select: &str, value: &str) -> bool {
        let options = self.select_options(select);
        let Some(index) = options
            .iter()
            .position(|o| self.option_value(o).as_deref() == Some(value))
        else {
            log::debug!("[dom] {select}: no option with value {value:?}");
            return false;
        };
        self.set_selected_index(select, index)
    }
}
