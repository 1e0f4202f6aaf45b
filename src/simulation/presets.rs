use serde::{Deserialize, Serialize};
use std::fmt;

/// Named shortcuts that pre-fill the amplitude and frequency sliders.
/// Picking one never locks the sliders.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum Preset {
    #[default]
    Custom,
    Stable,
    MediumRisk,
    HighRisk,
}

impl Preset {
    /// `(amplitude, frequency)` for the preset, `None` for Custom.
    pub fn params(&self) -> Option<(f64, f64)> {
        match self {
            Preset::Custom => None,
            Preset::Stable => Some((5.0, 1.0)),
            Preset::MediumRisk => Some((15.0, 3.0)),
            Preset::HighRisk => Some((30.0, 6.0)),
        }
    }

    /// Slider values after picking this preset. Custom keeps `current`.
    pub fn seed_sliders(&self, current: (f64, f64)) -> (f64, f64) {
        self.params().unwrap_or(current)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::Custom => write!(f, "Custom"),
            Preset::Stable => write!(f, "Stable"),
            Preset::MediumRisk => write!(f, "Medium Risk"),
            Preset::HighRisk => write!(f, "High Risk"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_table() {
        assert_eq!(Preset::Custom.params(), None);
        assert_eq!(Preset::Stable.params(), Some((5.0, 1.0)));
        assert_eq!(Preset::MediumRisk.params(), Some((15.0, 3.0)));
        assert_eq!(Preset::HighRisk.params(), Some((30.0, 6.0)));
    }

    #[test]
    fn test_custom_leaves_sliders_alone() {
        assert_eq!(Preset::Custom.seed_sliders((42.0, 7.0)), (42.0, 7.0));
        assert_eq!(Preset::HighRisk.seed_sliders((42.0, 7.0)), (30.0, 6.0));
    }
}
