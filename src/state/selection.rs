/// Accordion and edit-mode state machine
///
/// `Selection` is a plain value that only moves forward through its
/// consuming transitions. The expanded profile while editing is the
/// session's original profile, so "editing something that is not
/// expanded" has no representation.
///
/// ```text
///   Collapsed <--toggle--> Expanded(id) --begin_edit--> Editing(session)
///                               ^                             |
///                               +-------- save / cancel ------+
/// ```

use thiserror::Error;

use super::data::{Gender, Profile, ProfileField, ProfileId};
use crate::config::MIN_EDIT_AGE;

/// Why a transition was refused. The message is shown to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("You are not allowed to edit your information.")]
    Underage { age: u32 },
    #[error("Finish editing the open profile first.")]
    Busy,
    #[error("That profile no longer exists.")]
    UnknownProfile,
    #[error("Nothing is being edited.")]
    NotEditing,
    #[error("Age must be a whole number, got \"{0}\".")]
    InvalidAge(String),
}

/// Staged, unsaved values of the editable fields
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDraft {
    /// Age exactly as typed; parsed on save
    pub age: String,
    pub gender: Gender,
    pub country: String,
    pub description: String,
}

impl ProfileDraft {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            age: profile.age.to_string(),
            gender: profile.gender.clone(),
            country: profile.country.clone(),
            description: profile.description.clone(),
        }
    }

    /// Overwrite a single field with text from the form
    pub fn set(&mut self, field: ProfileField, value: String) {
        match field {
            ProfileField::Age => self.age = value,
            ProfileField::Gender => self.gender = Gender::from(value),
            ProfileField::Country => self.country = value,
            ProfileField::Description => self.description = value,
        }
    }

    /// Produce the saved profile: `original` with every draft field applied
    pub fn apply(&self, original: &Profile) -> Result<Profile, EditError> {
        let age = self
            .age
            .trim()
            .parse::<u32>()
            .map_err(|_| EditError::InvalidAge(self.age.clone()))?;

        Ok(Profile {
            age,
            gender: self.gender.clone(),
            country: self.country.clone(),
            description: self.description.clone(),
            ..original.clone()
        })
    }
}

/// An open edit: the pre-edit snapshot plus the working copy
#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    pub original: Profile,
    pub draft: ProfileDraft,
}

impl EditSession {
    pub fn id(&self) -> ProfileId {
        self.original.id
    }
}

/// Which profile is open, and whether it is being edited
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    #[default]
    Collapsed,
    Expanded(ProfileId),
    Editing(EditSession),
}

impl Selection {
    /// The single expanded profile, if any
    pub fn expanded(&self) -> Option<ProfileId> {
        match self {
            Selection::Collapsed => None,
            Selection::Expanded(id) => Some(*id),
            Selection::Editing(session) => Some(session.id()),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Selection::Editing(_))
    }

    pub fn session(&self) -> Option<&EditSession> {
        match self {
            Selection::Editing(session) => Some(session),
            _ => None,
        }
    }

    /// Header tap. Ignored while editing so staged changes survive.
    pub fn toggle(self, id: ProfileId) -> Selection {
        match self {
            Selection::Expanded(open) if open == id => Selection::Collapsed,
            Selection::Collapsed | Selection::Expanded(_) => Selection::Expanded(id),
            editing @ Selection::Editing(_) => editing,
        }
    }

    /// Enter edit mode on `profile`, expanding it.
    ///
    /// On refusal the unchanged selection is handed back with the reason.
    pub fn begin_edit(self, profile: &Profile) -> Result<Selection, (Selection, EditError)> {
        if self.is_editing() {
            return Err((self, EditError::Busy));
        }
        if profile.age < MIN_EDIT_AGE {
            return Err((self, EditError::Underage { age: profile.age }));
        }

        Ok(Selection::Editing(EditSession {
            original: profile.clone(),
            draft: ProfileDraft::from_profile(profile),
        }))
    }

    /// Change one draft field. The collection and the snapshot are untouched.
    pub fn edit_field(&mut self, field: ProfileField, value: String) -> Result<(), EditError> {
        match self {
            Selection::Editing(session) => {
                session.draft.set(field, value);
                Ok(())
            }
            _ => Err(EditError::NotEditing),
        }
    }

    /// Leave edit mode keeping the draft.
    ///
    /// Returns the profile to write back into the collection; the
    /// selection stays expanded on it. On refusal (bad age) the session
    /// is handed back intact.
    pub fn save(self) -> Result<(Selection, Profile), (Selection, EditError)> {
        let session = match self {
            Selection::Editing(session) => session,
            other => return Err((other, EditError::NotEditing)),
        };

        match session.draft.apply(&session.original) {
            Ok(saved) => Ok((Selection::Expanded(saved.id), saved)),
            Err(err) => Err((Selection::Editing(session), err)),
        }
    }

    /// Leave edit mode discarding the draft; the original stays expanded.
    pub fn cancel(self) -> Selection {
        match self {
            Selection::Editing(session) => Selection::Expanded(session.id()),
            other => other,
        }
    }

    /// Drop any reference to a profile that has been removed
    pub fn forget(self, removed: ProfileId) -> Selection {
        if self.expanded() == Some(removed) {
            Selection::Collapsed
        } else {
            self
        }
    }
}
