//! Form field identifiers and metadata.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// A single field of the user form.
///
/// Variants are declared in form order, so the derived `Ord` sorts fields the
/// way they are laid out on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    MiddleName,
    LastName,
    Gender,
    DateOfBirth,
    Phone,
    Email,
    HouseAddress,
    City,
    State,
}

/// The fieldset a field is grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    PersonalInfo,
    Gender,
    ContactInfo,
    ResidentialAddress,
}

impl Section {
    /// Heading shown above the fieldset.
    pub fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::Gender => "Gender",
            Self::ContactInfo => "Contact Info",
            Self::ResidentialAddress => "Residential Address",
        }
    }
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 10] = [
        Field::FirstName,
        Field::MiddleName,
        Field::LastName,
        Field::Gender,
        Field::DateOfBirth,
        Field::Phone,
        Field::Email,
        Field::HouseAddress,
        Field::City,
        Field::State,
    ];

    /// Fields that carry a validation rule. Middle name is optional and never checked.
    pub const VALIDATED: [Field; 9] = [
        Field::FirstName,
        Field::LastName,
        Field::Gender,
        Field::DateOfBirth,
        Field::Phone,
        Field::Email,
        Field::HouseAddress,
        Field::City,
        Field::State,
    ];

    /// Canonical camelCase name, as used on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::MiddleName => "middleName",
            Self::LastName => "lastName",
            Self::Gender => "gender",
            Self::DateOfBirth => "dateOfBirth",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::HouseAddress => "houseAddress",
            Self::City => "city",
            Self::State => "state",
        }
    }

    /// Human-readable label rendered next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::MiddleName => "Middle Name",
            Self::LastName => "Last Name",
            Self::Gender => "Gender",
            Self::DateOfBirth => "Date of Birth",
            Self::Phone => "Phone No.",
            Self::Email => "Email address",
            Self::HouseAddress => "House/Flat No.and Name",
            Self::City => "City",
            Self::State => "State",
        }
    }

    pub fn section(self) -> Section {
        match self {
            Self::FirstName | Self::MiddleName | Self::LastName => Section::PersonalInfo,
            Self::Gender => Section::Gender,
            Self::DateOfBirth | Self::Phone | Self::Email => Section::ContactInfo,
            Self::HouseAddress | Self::City | Self::State => Section::ResidentialAddress,
        }
    }

    /// Whether submit runs a rule for this field.
    pub fn is_validated(self) -> bool {
        self != Self::MiddleName
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FormError::unknown_field(s))
    }
}
