//! FlagStatus value object.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Whether a person is flagged for priority display.
///
/// Ordering puts flagged before not flagged, so an ascending stable sort on
/// this key moves flagged persons to the front and keeps their relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagStatus(bool);

impl FlagStatus {
    pub const FLAGGED: FlagStatus = FlagStatus(true);
    pub const NOT_FLAGGED: FlagStatus = FlagStatus(false);

    pub fn new(flagged: bool) -> Self {
        Self(flagged)
    }

    pub fn is_flagged(self) -> bool {
        self.0
    }
}

impl From<bool> for FlagStatus {
    fn from(flagged: bool) -> Self {
        Self(flagged)
    }
}

impl Ord for FlagStatus {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

impl PartialOrd for FlagStatus {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for FlagStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 {
            write!(f, "Flagged")
        } else {
            write!(f, "Not Flagged")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flagged_orders_first() {
        assert!(FlagStatus::FLAGGED < FlagStatus::NOT_FLAGGED);
        assert_eq!(FlagStatus::FLAGGED.cmp(&FlagStatus::FLAGGED), Ordering::Equal);

        let mut statuses = vec![FlagStatus::NOT_FLAGGED, FlagStatus::FLAGGED];
        statuses.sort();
        assert_eq!(statuses, vec![FlagStatus::FLAGGED, FlagStatus::NOT_FLAGGED]);
    }

    #[test]
    fn test_flag_status_default_and_display() {
        assert!(!FlagStatus::default().is_flagged());
        assert_eq!(FlagStatus::FLAGGED.to_string(), "Flagged");
        assert_eq!(FlagStatus::NOT_FLAGGED.to_string(), "Not Flagged");
    }

    #[test]
    fn test_flag_status_serde() {
        assert_eq!(serde_json::to_string(&FlagStatus::FLAGGED).unwrap(), "true");
        let status: FlagStatus = serde_json::from_str("false").unwrap();
        assert_eq!(status, FlagStatus::NOT_FLAGGED);
    }
}
