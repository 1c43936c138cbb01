use super::data::Profile;

/// Profiles whose "first last" contains `query`, ignoring case.
///
/// An empty query matches everything. Collection order is preserved.
pub fn filter_by_name<'a>(profiles: &'a [Profile], query: &str) -> Vec<&'a Profile> {
    let needle = query.to_lowercase();

    profiles
        .iter()
        .filter(|profile| profile.full_name().to_lowercase().contains(&needle))
        .collect()
}
