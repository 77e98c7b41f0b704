/// A single entry in a selection control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value, not shown to the user
    pub value: String,
    /// Visible label
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// A single-selection dropdown, modeled as plain data so population logic
/// can be exercised without a UI.
///
/// Mirrors native select semantics: the first appended option becomes the
/// current selection, and clearing the options clears the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectControl {
    options: Vec<SelectOption>,
    selected: Option<usize>,
}

impl SelectControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a control from `(value, label)` pairs, selecting the first entry.
    pub fn with_options(options: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut control = Self::new();
        for (value, label) in options {
            control.append_option(value, label);
        }
        control
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Visible label of the current selection, or the empty string when
    /// nothing is selected.
    pub fn selected_text(&self) -> &str {
        self.selected
            .and_then(|idx| self.options.get(idx))
            .map(|opt| opt.label.as_str())
            .unwrap_or("")
    }

    /// Value of the current selection, if any.
    pub fn selected_value(&self) -> Option<&str> {
        self.selected
            .and_then(|idx| self.options.get(idx))
            .map(|opt| opt.value.as_str())
    }

    /// Move the selection. Out-of-range indices are ignored.
    pub fn select(&mut self, index: Option<usize>) {
        match index {
            Some(idx) if idx < self.options.len() => self.selected = Some(idx),
            None => self.selected = None,
            _ => {}
        }
    }

    /// Remove all options and drop the selection.
    pub fn clear(&mut self) {
        self.options.clear();
        self.selected = None;
    }

    /// Append an option; the first one appended becomes the selection.
    pub fn append_option(&mut self, value: impl Into<String>, label: impl Into<String>) {
        self.options.push(SelectOption::new(value, label));
        if self.selected.is_none() {
            self.selected = Some(0);
        }
    }
}
