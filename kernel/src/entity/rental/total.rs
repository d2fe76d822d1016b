use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Charged amount in currency minor-unit precision.
///
/// Absent means "to be computed"; once present it may have been
/// overridden by hand and is not re-derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct TotalAmount(f64);

impl TotalAmount {
    pub fn new(amount: impl Into<f64>) -> Self {
        Self(amount.into())
    }
}
