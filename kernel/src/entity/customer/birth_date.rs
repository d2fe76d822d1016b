use serde::{Deserialize, Serialize};
use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BirthDate(Date);

impl BirthDate {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}
