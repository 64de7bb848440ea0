//! Profile editor state

use crate::config::ProfileConfig;
use crate::types::PickResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileField {
    #[default]
    Name,
    Bio,
}

impl ProfileField {
    pub fn label(self) -> &'static str {
        match self {
            ProfileField::Name => "Name",
            ProfileField::Bio => "Bio",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ProfileField::Name => ProfileField::Bio,
            ProfileField::Bio => ProfileField::Name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub bio: String,
    /// Location of the chosen picture, if any
    pub picture: Option<String>,
    pub editing: bool,
}

impl ProfileForm {
    pub fn new(name: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bio: bio.into(),
            picture: None,
            editing: false,
        }
    }

    pub fn from_config(config: &ProfileConfig) -> Self {
        Self::new(config.name.clone(), config.bio.clone())
    }

    /// Switch between view and edit mode
    ///
    /// Leaving edit mode this way keeps whatever was typed.
    pub fn toggle_editing(&mut self) {
        self.editing = !self.editing;
    }

    pub fn value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Name => &self.name,
            ProfileField::Bio => &self.bio,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        match field {
            ProfileField::Name => self.name = value.into(),
            ProfileField::Bio => self.bio = value.into(),
        }
    }

    pub fn push_char(&mut self, field: ProfileField, c: char) {
        match field {
            ProfileField::Name => self.name.push(c),
            ProfileField::Bio => self.bio.push(c),
        }
    }

    pub fn pop_char(&mut self, field: ProfileField) {
        match field {
            ProfileField::Name => self.name.pop(),
            ProfileField::Bio => self.bio.pop(),
        };
    }

    /// Apply a picker result; a cancelled pick leaves the picture alone.
    /// Returns true if the picture changed.
    pub fn apply_pick(&mut self, result: PickResult) -> bool {
        match result {
            PickResult::Picked { uri } => {
                self.picture = Some(uri);
                true
            }
            PickResult::Cancelled => false,
        }
    }

    pub fn save(&mut self) {
        self.editing = false;
        tracing::debug!(name = %self.name, "Profile saved");
    }

    /// First character of the name, drawn when there is no picture
    pub fn avatar_initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::from_config(&ProfileConfig::default())
    }
}
