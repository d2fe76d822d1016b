use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Non-negative price for a full rental day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct DailyRate(f64);

impl DailyRate {
    pub fn new(rate: impl Into<f64>) -> Self {
        Self(rate.into())
    }

    /// Price for one rented hour, 1/24 of the daily rate.
    pub fn hourly(&self) -> f64 {
        self.0 / 24.0
    }
}
