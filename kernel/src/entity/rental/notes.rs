use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RentalNotes(String);

impl RentalNotes {
    pub fn new(notes: impl Into<String>) -> Self {
        Self(notes.into())
    }
}
