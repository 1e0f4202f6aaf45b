use rand::Rng;
use rand::distributions::Distribution;
use serde::{Deserialize, Serialize};
use statrs::distribution::Normal;
use std::fmt;

use crate::config::SIMULATION;
use crate::utils::maths_utils::{self, linspace};

/// Base shape of the simulated price curve.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize, strum_macros::EnumIter,
)]
pub enum Pattern {
    #[default]
    Sine,
    Cosine,
    Noise,
    /// sin(f·t) + 0.5·cos(2f·t)
    Combined,
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Sine => write!(f, "Sine Wave"),
            Pattern::Cosine => write!(f, "Cosine Wave"),
            Pattern::Noise => write!(f, "Random Noise"),
            Pattern::Combined => write!(f, "Combined"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SimulationParams {
    pub pattern: Pattern,
    pub amplitude: f64,
    pub frequency: f64,
    pub drift: f64,
    pub shock: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            pattern: Pattern::default(),
            amplitude: SIMULATION.amplitude.default,
            frequency: SIMULATION.frequency.default,
            drift: SIMULATION.drift.default,
            shock: false,
        }
    }
}

/// How the curve should be coloured; derived from amplitude alone.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum VolatilityLevel {
    Calm,
    Elevated,
    Extreme,
}

impl VolatilityLevel {
    pub fn from_amplitude(amplitude: f64) -> Self {
        let thresholds = &SIMULATION.volatility;
        if amplitude < thresholds.calm_below {
            VolatilityLevel::Calm
        } else if amplitude < thresholds.elevated_below {
            VolatilityLevel::Elevated
        } else {
            VolatilityLevel::Extreme
        }
    }
}

/// Aligned `t` and `price` samples.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct SimulatedCurve {
    pub t: Vec<f64>,
    pub price: Vec<f64>,
}

impl SimulatedCurve {
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// `[t, price]` pairs for plotting.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.t
            .iter()
            .zip(&self.price)
            .map(|(&t, &price)| [t, price])
            .collect()
    }

    pub fn mean_price(&self) -> f64 {
        maths_utils::mean(&self.price)
    }

    /// Population standard deviation of the simulated prices.
    pub fn price_std_dev(&self) -> f64 {
        maths_utils::population_std_dev(&self.price)
    }
}

fn base_price<R: Rng + ?Sized>(params: &SimulationParams, t: f64, rng: &mut R, normal: &Normal) -> f64 {
    let (a, f) = (params.amplitude, params.frequency);
    match params.pattern {
        Pattern::Sine => a * (f * t).sin(),
        Pattern::Cosine => a * (f * t).cos(),
        Pattern::Noise => a * normal.sample(rng),
        Pattern::Combined => a * ((f * t).sin() + 0.5 * (2.0 * f * t).cos()),
    }
}

/// Generates the curve for `params`: base pattern plus `drift·t`, then (when
/// `shock` is set) a Normal(0, amplitude/2) kick on a random 10% of samples,
/// each sample hit at most once.
///
/// Randomness comes only from `rng`; Sine, Cosine and Combined without shock
/// never touch it. Every real input is accepted.
pub fn simulate<R: Rng + ?Sized>(params: &SimulationParams, rng: &mut R) -> SimulatedCurve {
    let n = SIMULATION.sample_count;
    let t = linspace(SIMULATION.t_start, SIMULATION.t_end, n);
    let standard_normal = Normal::standard();

    let mut price: Vec<f64> = t
        .iter()
        .map(|&ti| base_price(params, ti, rng, &standard_normal) + params.drift * ti)
        .collect();

    if params.shock {
        let shock_count = ((n as f64 * SIMULATION.shock_fraction).floor() as usize).min(n);
        let half_amplitude = params.amplitude / 2.0;
        for idx in rand::seq::index::sample(rng, n, shock_count).iter() {
            price[idx] += half_amplitude * standard_normal.sample(rng);
        }
    }

    SimulatedCurve { t, price }
}
