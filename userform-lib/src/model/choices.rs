//! Fixed choice lists for the gender radio group and the state select.

/// State value meaning "no state picked yet".
pub const STATE_NOT_SELECTED: &str = "NA";

/// One selectable option: the stored value and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

impl Choice {
    const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }
}

/// Options offered for [`Field::Gender`](super::Field::Gender).
pub const GENDERS: &[Choice] = &[
    Choice::new("male", "Male"),
    Choice::new("female", "Female"),
    Choice::new("others", "Others"),
    Choice::new("na", "Prefer not to specify"),
];

/// Options offered for [`Field::State`](super::Field::State). The first entry is the sentinel.
pub const STATES: &[Choice] = &[
    Choice::new(STATE_NOT_SELECTED, "Select a State"),
    Choice::new("DL", "Delhi"),
    Choice::new("UP", "Uttar Pradesh"),
    Choice::new("BH", "Bihar"),
    Choice::new("HR", "Haryana"),
];

/// Looks up the display label for a stored value.
pub fn label_for(choices: &[Choice], value: &str) -> Option<&'static str> {
    choices.iter().find(|c| c.value == value).map(|c| c.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_sentinel_is_first() {
        assert_eq!(STATES[0].value, STATE_NOT_SELECTED);
        assert_eq!(label_for(STATES, "NA"), Some("Select a State"));
    }

    #[test]
    fn test_label_lookup() {
        assert_eq!(label_for(STATES, "UP"), Some("Uttar Pradesh"));
        assert_eq!(label_for(GENDERS, "na"), Some("Prefer not to specify"));
        assert_eq!(label_for(GENDERS, "unknown"), None);
    }
}
