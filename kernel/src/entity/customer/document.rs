use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// National identification document, unique per customer remotely.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct CustomerDocument(String);

impl CustomerDocument {
    pub fn new(document: impl Into<String>) -> Self {
        Self(document.into())
    }
}
