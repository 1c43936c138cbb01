/// Screen state for the profile list
///
/// Owns the working collection, the search query and the selection,
/// and is the only place where they change. Every user interaction
/// maps onto exactly one method here.

use super::data::{Gender, Profile, ProfileField, ProfileId};
use super::dataset::{self, DatasetError};
use super::filter::filter_by_name;
use super::selection::{EditError, Selection};

/// Answer to the delete confirmation prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Cancel,
    Delete,
}

#[derive(Debug, Clone, Default)]
pub struct ScreenState {
    /// Working collection, in dataset order
    profiles: Vec<Profile>,
    query: String,
    selection: Selection,
}

impl ScreenState {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles,
            query: String::new(),
            selection: Selection::Collapsed,
        }
    }

    /// Build the screen from the bundled dataset
    pub fn load() -> Result<Self, DatasetError> {
        Ok(Self::new(dataset::load_bundled()?))
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn profile(&self, id: ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn expanded(&self) -> Option<ProfileId> {
        self.selection.expanded()
    }

    pub fn is_editing(&self) -> bool {
        self.selection.is_editing()
    }

    /// Profiles matching the current query, in collection order
    pub fn visible(&self) -> Vec<&Profile> {
        filter_by_name(&self.profiles, &self.query)
    }

    pub fn set_query(&mut self, query: String) {
        log::debug!("search query: {:?}", query);
        self.query = query;
    }

    /// Row header tap
    pub fn toggle(&mut self, id: ProfileId) {
        if self.is_editing() {
            log::debug!("ignoring header tap on {} while editing", id);
        }
        self.selection = std::mem::take(&mut self.selection).toggle(id);
        log::debug!("expanded: {:?}", self.expanded());
    }

    /// Edit button. Refused for minors, unknown ids, or while another edit is open.
    pub fn begin_edit(&mut self, id: ProfileId) -> Result<(), EditError> {
        let profile = self.profile(id).cloned().ok_or(EditError::UnknownProfile)?;

        match std::mem::take(&mut self.selection).begin_edit(&profile) {
            Ok(selection) => {
                log::info!("✏️  editing {} ({})", profile.full_name(), id);
                self.selection = selection;
                Ok(())
            }
            Err((selection, err)) => {
                if let EditError::Underage { age } = err {
                    log::warn!("edit of {} refused: age {} is below the minimum", id, age);
                } else {
                    log::warn!("edit of {} refused: {}", id, err);
                }
                self.selection = selection;
                Err(err)
            }
        }
    }

    /// Text typed into one of the form fields
    pub fn edit_field(&mut self, field: ProfileField, value: String) -> Result<(), EditError> {
        self.selection.edit_field(field, value)
    }

    /// Option picked from the gender drop-down
    pub fn select_gender(&mut self, gender: Gender) -> Result<(), EditError> {
        self.edit_field(ProfileField::Gender, gender.into())
    }

    /// Write the draft back into the collection, keyed by id
    pub fn save(&mut self) -> Result<ProfileId, EditError> {
        let (selection, saved) = match std::mem::take(&mut self.selection).save() {
            Ok(done) => done,
            Err((selection, err)) => {
                log::warn!("save refused: {}", err);
                self.selection = selection;
                return Err(err);
            }
        };

        let id = saved.id;
        match self.profiles.iter_mut().find(|p| p.id == id) {
            Some(slot) => {
                log::info!("💾 saved {} ({})", saved.full_name(), id);
                *slot = saved;
                self.selection = selection;
                Ok(id)
            }
            None => {
                self.selection = Selection::Collapsed;
                Err(EditError::UnknownProfile)
            }
        }
    }

    /// Discard the draft; the collection was never touched while editing
    pub fn cancel(&mut self) {
        self.selection = std::mem::take(&mut self.selection).cancel();
        log::debug!("edit cancelled, expanded: {:?}", self.expanded());
    }

    /// Apply the answer to a delete prompt.
    ///
    /// Returns the removed profile when the deletion happened. Any
    /// expanded or edit state pointing at it is cleared.
    pub fn delete(&mut self, id: ProfileId, answer: Confirmation) -> Option<Profile> {
        if answer == Confirmation::Cancel {
            log::debug!("delete of {} declined", id);
            return None;
        }

        let index = self.profiles.iter().position(|p| p.id == id)?;
        let removed = self.profiles.remove(index);
        self.selection = std::mem::take(&mut self.selection).forget(id);

        log::info!("🗑️  deleted {} ({})", removed.full_name(), id);
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATASET: &str = r#"[
        {"id": 1, "first": "Ann", "last": "Lee", "dob": "1991-03-14",
         "gender": "Female", "picture": "", "country": "South Korea",
         "description": "Film editor"},
        {"id": 2, "first": "Lucia", "last": "Ferreira", "dob": "2011-05-30",
         "gender": "Female", "picture": "", "country": "Brazil",
         "description": "Chess prodigy"},
        {"id": 3, "first": "Henrik", "last": "Dahl", "dob": "1958-09-17",
         "gender": "Male", "picture": "", "country": "Norway",
         "description": "Explorer"}
    ]"#;

    fn screen() -> ScreenState {
        ScreenState::new(dataset::parse_profiles(DATASET, 2026).unwrap())
    }

    fn ids(screen: &ScreenState) -> Vec<u32> {
        screen.profiles().iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn test_bundled_load() {
        let screen = ScreenState::load().unwrap();
        assert!(!screen.profiles().is_empty());
        assert_eq!(screen.visible().len(), screen.profiles().len());
        assert_eq!(screen.selection(), &Selection::Collapsed);
    }

    #[test]
    fn test_query_narrows_visible() {
        let mut screen = screen();
        screen.set_query("ANN".to_string());

        let visible: Vec<u32> = screen.visible().iter().map(|p| p.id.0).collect();
        assert_eq!(visible, vec![1]);

        screen.set_query(String::new());
        assert_eq!(screen.visible().len(), 3);
    }

    #[test]
    fn test_single_expanded_row() {
        let mut screen = screen();
        screen.toggle(ProfileId(1));
        screen.toggle(ProfileId(3));
        assert_eq!(screen.expanded(), Some(ProfileId(3)));

        screen.toggle(ProfileId(3));
        assert_eq!(screen.expanded(), None);
    }

    #[test]
    fn test_minor_cannot_edit() {
        let mut screen = screen();
        screen.toggle(ProfileId(2));
        let before = screen.profiles().to_vec();

        let err = screen.begin_edit(ProfileId(2)).unwrap_err();

        assert_eq!(err, EditError::Underage { age: 15 });
        assert_eq!(screen.profiles(), before.as_slice());
        assert_eq!(screen.selection(), &Selection::Expanded(ProfileId(2)));
    }

    #[test]
    fn test_cancel_keeps_original_country() {
        let mut screen = screen();
        screen.toggle(ProfileId(1));
        screen.begin_edit(ProfileId(1)).unwrap();
        screen.edit_field(ProfileField::Country, "X".to_string()).unwrap();

        screen.cancel();

        assert!(!screen.is_editing());
        assert_eq!(screen.expanded(), Some(ProfileId(1)));
        assert_eq!(screen.profile(ProfileId(1)).unwrap().country, "South Korea");
    }

    #[test]
    fn test_save_writes_description() {
        let mut screen = screen();
        screen.toggle(ProfileId(1));
        screen.begin_edit(ProfileId(1)).unwrap();
        screen.edit_field(ProfileField::Description, "Y".to_string()).unwrap();
        screen.select_gender(Gender::Other).unwrap();

        assert_eq!(screen.save(), Ok(ProfileId(1)));

        let saved = screen.profile(ProfileId(1)).unwrap();
        assert_eq!(saved.description, "Y");
        assert_eq!(saved.gender, Gender::Other);
        assert_eq!(screen.selection(), &Selection::Expanded(ProfileId(1)));
        assert_eq!(ids(&screen), vec![1, 2, 3]);
    }

    #[test]
    fn test_edits_are_staged_until_save() {
        let mut screen = screen();
        screen.begin_edit(ProfileId(3)).unwrap();
        screen.edit_field(ProfileField::Description, "Changed".to_string()).unwrap();

        assert_eq!(screen.profile(ProfileId(3)).unwrap().description, "Explorer");
        assert_eq!(screen.selection().session().unwrap().draft.description, "Changed");
    }

    #[test]
    fn test_invalid_age_keeps_editing() {
        let mut screen = screen();
        screen.begin_edit(ProfileId(1)).unwrap();
        screen.edit_field(ProfileField::Age, "abc".to_string()).unwrap();

        assert_eq!(screen.save(), Err(EditError::InvalidAge("abc".to_string())));
        assert!(screen.is_editing());
        assert_eq!(screen.profile(ProfileId(1)).unwrap().age, 35);
    }

    #[test]
    fn test_edit_unknown_profile() {
        let mut screen = screen();
        assert_eq!(screen.begin_edit(ProfileId(99)), Err(EditError::UnknownProfile));
        assert_eq!(screen.selection(), &Selection::Collapsed);
    }

    #[test]
    fn test_delete_declined_keeps_collection() {
        let mut screen = screen();
        assert!(screen.delete(ProfileId(1), Confirmation::Cancel).is_none());
        assert_eq!(ids(&screen), vec![1, 2, 3]);
    }

    #[test]
    fn test_delete_confirmed_removes_only_target() {
        let mut screen = screen();
        screen.toggle(ProfileId(1));

        let removed = screen.delete(ProfileId(2), Confirmation::Delete).unwrap();

        assert_eq!(removed.id, ProfileId(2));
        assert_eq!(ids(&screen), vec![1, 3]);
        assert_eq!(screen.expanded(), Some(ProfileId(1)));
    }

    #[test]
    fn test_delete_clears_dangling_edit() {
        let mut screen = screen();
        screen.begin_edit(ProfileId(3)).unwrap();

        screen.delete(ProfileId(3), Confirmation::Delete).unwrap();

        assert_eq!(screen.selection(), &Selection::Collapsed);
        assert_eq!(ids(&screen), vec![1, 2]);
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut screen = screen();
        assert!(screen.delete(ProfileId(42), Confirmation::Delete).is_none());
        assert_eq!(ids(&screen), vec![1, 2, 3]);
    }
}
