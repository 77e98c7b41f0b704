use super::select::SelectControl;

/// Prefix prepended to every prepop option value before it lands in the
/// dropdown, matching what the deploy form expects on submission.
pub const TEMPLATE_VALUE_PREFIX: &str = "template:";

/// One entry of a decoded prepop-setting response. The key is opaque and
/// only the value is used when rebuilding the dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepopEntry {
    pub key: String,
    pub value: String,
}

impl PrepopEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Replace the contents of the prepop-options dropdown with the given
/// entries, in order: one option per entry, value `template:<v>`, label `<v>`.
///
/// Callers invoke this only on a successful refresh; on failure the control
/// is left exactly as it was.
pub fn rebuild_options(control: &mut SelectControl, entries: &[PrepopEntry]) {
    control.clear();
    for entry in entries {
        control.append_option(
            format!("{TEMPLATE_VALUE_PREFIX}{}", entry.value),
            entry.value.clone(),
        );
    }
}
