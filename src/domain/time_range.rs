use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::time_utils::days_to_ms;

/// Trailing window applied to the market series before plotting.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum TimeRange {
    Last7Days,
    #[default]
    Last30Days,
    Last90Days,
    FullDataset,
}

impl TimeRange {
    /// Window length in days, `None` for the unfiltered dataset.
    pub fn window_days(&self) -> Option<i64> {
        match self {
            TimeRange::Last7Days => Some(7),
            TimeRange::Last30Days => Some(30),
            TimeRange::Last90Days => Some(90),
            TimeRange::FullDataset => None,
        }
    }

    pub fn window_ms(&self) -> Option<i64> {
        self.window_days().map(days_to_ms)
    }

    /// Short form used in chart titles ("30 Days", "Full Dataset").
    pub fn title(&self) -> &'static str {
        match self {
            TimeRange::Last7Days => "7 Days",
            TimeRange::Last30Days => "30 Days",
            TimeRange::Last90Days => "90 Days",
            TimeRange::FullDataset => "Full Dataset",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRange::Last7Days => write!(f, "Last 7 Days"),
            TimeRange::Last30Days => write!(f, "Last 30 Days"),
            TimeRange::Last90Days => write!(f, "Last 90 Days"),
            TimeRange::FullDataset => write!(f, "Full Dataset"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::TimeUtils;
    use strum::IntoEnumIterator;

    #[test]
    fn test_windows() {
        assert_eq!(TimeRange::Last7Days.window_ms(), Some(7 * TimeUtils::MS_IN_D));
        assert_eq!(TimeRange::Last90Days.window_days(), Some(90));
        assert_eq!(TimeRange::FullDataset.window_ms(), None);
    }

    #[test]
    fn test_labels_and_default() {
        assert_eq!(TimeRange::default(), TimeRange::Last30Days);
        let labels: Vec<String> = TimeRange::iter().map(|r| r.to_string()).collect();
        assert_eq!(
            labels,
            vec!["Last 7 Days", "Last 30 Days", "Last 90 Days", "Full Dataset"]
        );
        assert_eq!(TimeRange::Last30Days.title(), "30 Days");
    }
}
