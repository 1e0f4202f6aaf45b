//! Waveform simulator configuration

use crate::simulation::{Pattern, SimulationParams};

/// Inclusive slider bounds plus the value used when nothing else applies.
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

/// Amplitude thresholds used to pick the colour of the simulated curve.
pub struct VolatilityThresholds {
    /// Below this the curve is drawn as calm
    pub calm_below: f64,
    /// Below this (and above `calm_below`) the curve is drawn as elevated
    pub elevated_below: f64,
}

/// The Master Simulation Configuration
pub struct SimulationConfig {
    pub sample_count: usize,
    pub t_start: f64,
    pub t_end: f64,
    /// Fraction of samples hit by a shock (rounded down)
    pub shock_fraction: f64,

    pub amplitude: SliderConfig,
    pub frequency: SliderConfig,
    pub drift: SliderConfig,

    pub volatility: VolatilityThresholds,

    // Comparison mode literals
    pub stable_reference: SimulationParams,
    pub volatile_reference: SimulationParams,
}

pub const SIMULATION: SimulationConfig = SimulationConfig {
    sample_count: 300,
    t_start: 0.0,
    t_end: 10.0,
    shock_fraction: 0.10,

    amplitude: SliderConfig {
        min: 1.0,
        max: 50.0,
        default: 10.0,
    },
    frequency: SliderConfig {
        min: 1.0,
        max: 10.0,
        default: 2.0,
    },
    drift: SliderConfig {
        min: -5.0,
        max: 5.0,
        default: 0.0,
    },

    volatility: VolatilityThresholds {
        calm_below: 10.0,
        elevated_below: 25.0,
    },

    stable_reference: SimulationParams {
        pattern: Pattern::Sine,
        amplitude: 5.0,
        frequency: 1.0,
        drift: 0.0,
        shock: false,
    },
    volatile_reference: SimulationParams {
        pattern: Pattern::Sine,
        amplitude: 30.0,
        frequency: 5.0,
        drift: 0.0,
        shock: true,
    },
};
