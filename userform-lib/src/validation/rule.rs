//! Per-field rule table.

use std::sync::LazyLock;

use chrono::{DateTime, Local, NaiveDate};
use regex::Regex;

use crate::model::Field;
use crate::model::choices::STATE_NOT_SELECTED;

/// Exactly ten ASCII digits. `\d` would also accept non-ASCII digits.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

/// `something@something.something`, searched anywhere in the value.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Date format produced by a date input.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validation rule attached to one field.
///
/// Every rule that has a format check also has a `required` message, and the
/// emptiness check always runs first.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Value must be non-empty.
    Required { required: &'static str },

    /// Value must not equal the "nothing selected" sentinel.
    Selected {
        sentinel: &'static str,
        required: &'static str,
    },

    /// Value must be non-empty and match a pattern.
    Pattern {
        required: &'static str,
        pattern: &'static LazyLock<Regex>,
        invalid: &'static str,
    },

    /// Value must be non-empty and, when it parses as a date, not lie after today.
    /// A value that does not parse is not compared and passes.
    PastDate {
        required: &'static str,
        future: &'static str,
    },
}

impl Rule {
    /// Returns the rule for a field, or `None` for fields that are never validated.
    pub fn for_field(field: Field) -> Option<Rule> {
        let rule = match field {
            Field::FirstName => Rule::Required {
                required: "First name is required.",
            },
            Field::MiddleName => return None,
            Field::LastName => Rule::Required {
                required: "Last name is required.",
            },
            Field::Gender => Rule::Required {
                required: "Gender is required.",
            },
            Field::DateOfBirth => Rule::PastDate {
                required: "Date of Birth is required.",
                future: "Date of Birth cannot be in the future.",
            },
            Field::Phone => Rule::Pattern {
                required: "Phone number is required.",
                pattern: &PHONE_REGEX,
                invalid: "Phone number must be 10 digits only.",
            },
            Field::Email => Rule::Pattern {
                required: "Email is required.",
                pattern: &EMAIL_REGEX,
                invalid: "Email address is invalid.",
            },
            Field::HouseAddress => Rule::Required {
                required: "House/Flat No.and Name is required.",
            },
            Field::City => Rule::Required {
                required: "City is required.",
            },
            Field::State => Rule::Selected {
                sentinel: STATE_NOT_SELECTED,
                required: "State is required.",
            },
        };
        Some(rule)
    }

    /// Checks a value, returning the violated message if any.
    pub fn check(&self, value: &str, today: NaiveDate) -> Option<&'static str> {
        match *self {
            Rule::Required { required } => value.is_empty().then_some(required),
            Rule::Selected { sentinel, required } => (value == sentinel).then_some(required),
            Rule::Pattern {
                required,
                pattern,
                invalid,
            } => {
                if value.is_empty() {
                    Some(required)
                } else if !pattern.is_match(value) {
                    Some(invalid)
                } else {
                    None
                }
            }
            Rule::PastDate { required, future } => {
                if value.is_empty() {
                    return Some(required);
                }
                match parse_date(value) {
                    Some(date) if date > today => Some(future),
                    _ => None,
                }
            }
        }
    }
}

/// Parses a plain `YYYY-MM-DD` date, or an RFC 3339 timestamp converted to
/// the local date of that instant.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok().or_else(|| {
        DateTime::parse_from_rfc3339(value)
            .ok()
            .map(|dt| dt.with_timezone(&Local).date_naive())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn check(field: Field, value: &str) -> Option<&'static str> {
        Rule::for_field(field).unwrap().check(value, today())
    }

    #[test]
    fn test_middle_name_has_no_rule() {
        assert!(Rule::for_field(Field::MiddleName).is_none());
    }

    #[test]
    fn test_every_validated_field_has_rule() {
        for field in Field::VALIDATED {
            assert!(Rule::for_field(field).is_some(), "{field} has no rule");
        }
    }

    #[test]
    fn test_required_accepts_whitespace() {
        assert_eq!(check(Field::City, " "), None);
        assert_eq!(check(Field::City, ""), Some("City is required."));
    }

    #[test]
    fn test_phone_digits() {
        assert_eq!(check(Field::Phone, "0123456789"), None);
        assert_eq!(
            check(Field::Phone, "12345 67890"),
            Some("Phone number must be 10 digits only.")
        );
        assert_eq!(
            check(Field::Phone, "١٢٣٤٥٦٧٨٩٠"),
            Some("Phone number must be 10 digits only.")
        );
        assert_eq!(
            check(Field::Phone, "+911234567"),
            Some("Phone number must be 10 digits only.")
        );
    }

    #[test]
    fn test_email_pattern_is_unanchored() {
        assert_eq!(check(Field::Email, "name <a@b.co>"), None);
        assert_eq!(check(Field::Email, "a@b"), Some("Email address is invalid."));
        assert_eq!(check(Field::Email, "a @b.c"), Some("Email address is invalid."));
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(parse_date("2000-01-31"), NaiveDate::from_ymd_opt(2000, 1, 31));
        assert_eq!(parse_date("31/01/2000"), None);
        assert_eq!(parse_date("2000-02-30"), None);
    }

    #[test]
    fn test_timestamp_uses_local_date_of_instant() {
        // Same instant written in two offsets lands on the same local date.
        assert_eq!(
            parse_date("2025-03-11T01:00:00+14:00"),
            parse_date("2025-03-10T11:00:00Z")
        );
        assert!(parse_date("2000-01-31T23:00:00+05:30").is_some());
    }

    #[test]
    fn test_unparseable_date_passes() {
        assert_eq!(check(Field::DateOfBirth, "yesterday"), None);
        assert_eq!(check(Field::DateOfBirth, "03/10/1990"), None);
    }

    #[test]
    fn test_date_boundary() {
        assert_eq!(check(Field::DateOfBirth, "2024-06-15"), None);
        assert_eq!(
            check(Field::DateOfBirth, "2024-06-16"),
            Some("Date of Birth cannot be in the future.")
        );
    }
}
