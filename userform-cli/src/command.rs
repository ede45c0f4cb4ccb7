//! Shell command parsing.

use userform_lib::Field;

use crate::error::CliError;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: Field, value: String },
    Clear(Field),
    Submit,
    Reset,
    Show,
    Json,
    Options,
    Help,
    Quit,
}

impl Command {
    /// Parse a line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CliError> {
        let line = line.trim_start();
        if line.is_empty() {
            return Ok(None);
        }
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        let command = match verb {
            "set" => {
                // Value is the rest of the line, verbatim.
                let rest = rest.trim_start();
                let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if name.is_empty() {
                    return Err(CliError::Usage("set <field> <value>"));
                }
                let field = name.parse::<Field>()?;
                if value.is_empty() {
                    return Err(CliError::Usage("set <field> <value> (use 'clear <field>' to empty it)"));
                }
                Command::Set {
                    field,
                    value: value.to_string(),
                }
            }
            "clear" => {
                let name = rest.trim();
                if name.is_empty() {
                    return Err(CliError::Usage("clear <field>"));
                }
                Command::Clear(name.parse::<Field>()?)
            }
            "submit" => Command::Submit,
            "reset" => Command::Reset,
            "show" => Command::Show,
            "json" => Command::Json,
            "options" => Command::Options,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CliError::UnknownCommand(other.to_string())),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use userform_lib::FormError;

    use super::*;

    #[test]
    fn test_blank_line() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn test_set_keeps_value_verbatim() {
        assert_eq!(
            Command::parse("set houseAddress 12  Rose Villa ").unwrap(),
            Some(Command::Set {
                field: Field::HouseAddress,
                value: "12  Rose Villa ".to_string()
            })
        );
    }

    #[test]
    fn test_set_whitespace_only_value() {
        assert_eq!(
            Command::parse("set city   ").unwrap(),
            Some(Command::Set {
                field: Field::City,
                value: "  ".to_string()
            })
        );
    }

    #[test]
    fn test_set_unknown_field() {
        let err = Command::parse("set fname Asha").unwrap_err();
        assert!(matches!(err, CliError::Form(FormError::UnknownField(f)) if f == "fname"));
    }

    #[test]
    fn test_set_without_value() {
        assert!(matches!(
            Command::parse("set city"),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn test_clear() {
        assert_eq!(
            Command::parse("clear phone").unwrap(),
            Some(Command::Clear(Field::Phone))
        );
    }

    #[test]
    fn test_simple_verbs() {
        assert_eq!(Command::parse("submit").unwrap(), Some(Command::Submit));
        assert_eq!(Command::parse(" reset ").unwrap(), Some(Command::Reset));
        assert_eq!(Command::parse("q").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(
            Command::parse("send"),
            Err(CliError::UnknownCommand(c)) if c == "send"
        ));
    }
}
