//! Plain-text rendering of a form snapshot.

use std::fmt::Write;

use userform_lib::model::Section;
use userform_lib::model::choices::{GENDERS, STATES, label_for};
use userform_lib::{Field, FormState};

/// Renders every fieldset with values and inline error text.
pub fn render_state(state: &FormState) -> String {
    let mut out = String::new();
    let mut section: Option<Section> = None;

    for (field, value) in state.values.iter() {
        if section != Some(field.section()) {
            section = Some(field.section());
            let _ = writeln!(out, "[{}]", field.section().title());
        }
        let _ = writeln!(out, "  {:<24} {}", field.label(), display_value(field, value));
        match state.errors.message(field) {
            Ok(message) if !message.is_empty() => {
                let _ = writeln!(out, "  {:<24} ! {}", "", message);
            }
            _ => {}
        }
    }

    if let Some(notice) = &state.notice {
        let _ = writeln!(out, "\n{}", notice.message);
    }
    out
}

/// Lists the accepted values for the choice fields.
pub fn render_options() -> String {
    let mut out = String::new();
    for (field, choices) in [(Field::Gender, GENDERS), (Field::State, STATES)] {
        let _ = writeln!(out, "{}:", field.name());
        for choice in choices {
            let _ = writeln!(out, "  {:<8} {}", choice.value, choice.label);
        }
    }
    out
}

pub fn render_help() -> String {
    let mut out = String::from(
        "Commands:\n  set <field> <value>   change a field\n  clear <field>         empty a field\n  submit                validate and submit\n  reset                 restore defaults\n  show                  print the form\n  json                  print the form as JSON\n  options               list gender/state choices\n  quit                  leave\nFields:",
    );
    for field in Field::ALL {
        let _ = write!(out, " {}", field.name());
    }
    out.push('\n');
    out
}

fn display_value(field: Field, value: &str) -> String {
    let label = match field {
        Field::Gender => label_for(GENDERS, value),
        Field::State => label_for(STATES, value),
        _ => None,
    };
    match label {
        Some(label) => format!("{} ({})", label, value),
        None if value.is_empty() => "-".to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use userform_lib::{FormConfig, FormEvent, Validator};

    use super::*;

    #[test]
    fn test_render_defaults() {
        let out = render_state(&FormState::new());
        assert!(out.starts_with("[Personal Info]\n"));
        assert!(out.contains("[Residential Address]"));
        assert!(out.contains("Select a State (NA)"));
        assert!(!out.contains('!'));
    }

    #[test]
    fn test_render_errors_inline() {
        let state = FormState::new().apply(FormEvent::Submit, &Validator::new(), &FormConfig::new());
        let out = render_state(&state);
        assert!(out.contains("! First name is required."));
        assert!(out.contains("! State is required."));
        assert_eq!(out.matches('!').count(), 9);
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(Field::Gender, "female"), "Female (female)");
        assert_eq!(display_value(Field::City, ""), "-");
        assert_eq!(display_value(Field::Gender, "robot"), "robot");
    }

    #[test]
    fn test_options_lists_states() {
        let out = render_options();
        assert!(out.contains("HR       Haryana"));
        assert!(out.contains("na       Prefer not to specify"));
    }
}
