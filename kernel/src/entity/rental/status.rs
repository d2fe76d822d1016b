use serde::{Deserialize, Serialize};

/// Lifecycle position of a rental.
///
/// `Closed` and `Cancelled` are terminal, nothing transitions out of
/// them. The reconciler only ever produces `Closed`; `Cancelled` is
/// recorded on explicit user action.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalStatus {
    Open,
    InProgress,
    Closed,
    Cancelled,
}

impl RentalStatus {
    /// Accruing time, eligible for automatic expiry.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Open | Self::InProgress)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed | Self::Cancelled)
    }
}

#[cfg(test)]
mod test {
    use super::RentalStatus;

    #[test]
    fn active_and_terminal_are_disjoint_and_exhaustive() {
        let all = [
            RentalStatus::Open,
            RentalStatus::InProgress,
            RentalStatus::Closed,
            RentalStatus::Cancelled,
        ];
        for status in all {
            assert_ne!(status.is_active(), status.is_terminal());
        }
    }

    #[test]
    fn wire_names_are_snake_case() {
        let json = serde_json::to_string(&RentalStatus::InProgress).unwrap();
        assert_eq!(json, r#""in_progress""#);
        let back: RentalStatus = serde_json::from_str(r#""cancelled""#).unwrap();
        assert_eq!(back, RentalStatus::Cancelled);
    }
}
