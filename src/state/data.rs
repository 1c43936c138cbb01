/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the dataset loader, the screen state machine and the UI layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a profile, unique within the loaded collection
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProfileId(pub u32);

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Gender as shown on a profile
///
/// The five named variants are the ones offered by the edit form.
/// Anything else found in the dataset is kept verbatim as `Custom`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Male,
    Female,
    Transgender,
    RatherNotSay,
    Other,
    Custom(String),
}

impl Gender {
    /// Options offered by the gender drop-down, in display order
    pub fn options() -> Vec<Gender> {
        vec![
            Gender::Male,
            Gender::Female,
            Gender::Transgender,
            Gender::RatherNotSay,
            Gender::Other,
        ]
    }

    pub fn as_str(&self) -> &str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Transgender => "Transgender",
            Gender::RatherNotSay => "Rather not say",
            Gender::Other => "Other",
            Gender::Custom(label) => label,
        }
    }

    /// True for the free-text variant that the drop-down cannot select
    pub fn is_custom(&self) -> bool {
        matches!(self, Gender::Custom(_))
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        match value.trim() {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            "Transgender" => Gender::Transgender,
            "Rather not say" => Gender::RatherNotSay,
            "Other" => Gender::Other,
            _ => Gender::Custom(value),
        }
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        match value {
            Gender::Custom(label) => label,
            named => named.as_str().to_string(),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single display-ready profile
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: ProfileId,
    /// First name
    pub first: String,
    /// Last name
    pub last: String,
    pub date_of_birth: NaiveDate,
    /// Derived at load time as `current year - birth year`.
    /// Only changes afterwards when overridden through the edit form.
    pub age: u32,
    pub gender: Gender,
    pub country: String,
    pub description: String,
    /// Picture reference (URL or local path)
    pub picture: String,
}

impl Profile {
    /// "first last", the string the search bar matches against
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    /// Up to two uppercase initials for the avatar badge
    pub fn initials(&self) -> String {
        self.first
            .chars()
            .next()
            .into_iter()
            .chain(self.last.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Fields that can be changed from the edit form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Age,
    Gender,
    Country,
    Description,
}

impl ProfileField {
    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Age => "Age:",
            ProfileField::Gender => "Gender:",
            ProfileField::Country => "Country:",
            ProfileField::Description => "Description:",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Male", Gender::Male)]
    #[case("Female", Gender::Female)]
    #[case("Transgender", Gender::Transgender)]
    #[case("Rather not say", Gender::RatherNotSay)]
    #[case("Other", Gender::Other)]
    #[case("Non-binary", Gender::Custom("Non-binary".to_string()))]
    fn test_gender_from_label(#[case] label: &str, #[case] expected: Gender) {
        assert_eq!(Gender::from(label.to_string()), expected);
    }

    #[test]
    fn test_gender_keeps_display_label() {
        let json = serde_json::to_string(&Gender::RatherNotSay).unwrap();
        assert_eq!(json, "\"Rather not say\"");

        let custom: Gender = serde_json::from_str("\"Agender\"").unwrap();
        assert!(custom.is_custom());
        assert_eq!(custom.to_string(), "Agender");
    }

    #[test]
    fn test_options_exclude_custom() {
        let options = Gender::options();
        assert_eq!(options.len(), 5);
        assert!(options.iter().all(|g| !g.is_custom()));
    }

    #[test]
    fn test_initials() {
        let profile = Profile {
            id: ProfileId(1),
            first: "ann".to_string(),
            last: "Lee".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1991, 3, 14).unwrap(),
            age: 35,
            gender: Gender::Female,
            country: "South Korea".to_string(),
            description: String::new(),
            picture: String::new(),
        };

        assert_eq!(profile.initials(), "AL");
        assert_eq!(profile.full_name(), "ann Lee");
    }
}
