/// Bundled profile dataset
///
/// The profile collection ships inside the binary as JSON and is
/// turned into display-ready `Profile`s exactly once, when the screen
/// is created. Age is derived from the birth year at that moment.

use chrono::{Datelike, Local, NaiveDate};
use serde::Deserialize;
use thiserror::Error;

use super::data::{Gender, Profile, ProfileId};

/// The static dataset, embedded at compile time
const BUNDLED_PROFILES: &str = include_str!("../../assets/celebrities.json");

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Bundled dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate profile id {0} in dataset")]
    DuplicateId(ProfileId),
}

/// One record as stored in the dataset file
#[derive(Deserialize, Debug, Clone)]
struct ProfileRecord {
    id: ProfileId,
    first: String,
    last: String,
    dob: NaiveDate,
    gender: Gender,
    picture: String,
    country: String,
    description: String,
}

impl ProfileRecord {
    fn into_profile(self, current_year: i32) -> Profile {
        Profile {
            id: self.id,
            first: self.first,
            last: self.last,
            date_of_birth: self.dob,
            age: age_in(current_year, self.dob),
            gender: self.gender,
            country: self.country,
            description: self.description,
            picture: self.picture,
        }
    }
}

/// Age by calendar year only, clamped at zero for future birth dates
pub fn age_in(current_year: i32, date_of_birth: NaiveDate) -> u32 {
    u32::try_from(current_year - date_of_birth.year()).unwrap_or(0)
}

/// Load the bundled dataset using the local calendar year
pub fn load_bundled() -> Result<Vec<Profile>, DatasetError> {
    parse_profiles(BUNDLED_PROFILES, Local::now().year())
}

/// Parse a JSON array of profile records, deriving each age against `current_year`
///
/// Record order is preserved; it becomes the list order on screen.
pub fn parse_profiles(json: &str, current_year: i32) -> Result<Vec<Profile>, DatasetError> {
    let records: Vec<ProfileRecord> = serde_json::from_str(json)?;

    let mut profiles: Vec<Profile> = Vec::with_capacity(records.len());
    for record in records {
        if profiles.iter().any(|p| p.id == record.id) {
            return Err(DatasetError::DuplicateId(record.id));
        }
        profiles.push(record.into_profile(current_year));
    }

    log::debug!("parsed {} profile records", profiles.len());
    Ok(profiles)
}
