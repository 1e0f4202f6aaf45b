//! Toy waveform generator used to visualize volatility.

pub mod comparison;
pub mod presets;
pub mod waveform;

pub use comparison::{ComparisonCurves, compare};
pub use presets::Preset;
pub use waveform::{Pattern, SimulatedCurve, SimulationParams, VolatilityLevel, simulate};
