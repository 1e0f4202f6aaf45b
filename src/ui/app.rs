use eframe::{Frame, egui};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::config::{PLOT_CONFIG, SIMULATION};
use crate::data::{LoadStatus, LoadedSeries};
use crate::domain::TimeRange;
use crate::models::{OhlcvTimeSeries, TimeSeriesSlice};
use crate::simulation::{
    ComparisonCurves, Pattern, Preset, SimulatedCurve, SimulationParams, compare, simulate,
};
use crate::ui::utils::setup_custom_visuals;
use crate::utils::maths_utils::stride_indices;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Every widget value the user can set. This is the only state persisted
/// between sessions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Controls {
    pub time_range: TimeRange,
    pub pattern: Pattern,
    pub preset: Preset,
    pub amplitude: f64,
    pub frequency: f64,
    pub drift: f64,
    pub shock: bool,
    pub compare: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            time_range: TimeRange::default(),
            pattern: Pattern::default(),
            preset: Preset::default(),
            amplitude: SIMULATION.amplitude.default,
            frequency: SIMULATION.frequency.default,
            drift: SIMULATION.drift.default,
            shock: false,
            compare: false,
        }
    }
}

impl Controls {
    pub fn simulation_params(&self) -> SimulationParams {
        SimulationParams {
            pattern: self.pattern,
            amplitude: self.amplitude,
            frequency: self.frequency,
            drift: self.drift,
            shock: self.shock,
        }
    }

    /// Selects `preset` and seeds the amplitude/frequency sliders from it.
    pub fn apply_preset(&mut self, preset: Preset) {
        self.preset = preset;
        (self.amplitude, self.frequency) = preset.seed_sliders((self.amplitude, self.frequency));
    }

    /// Pulls slider values back inside their ranges. Persisted state from an
    /// older build may hold anything.
    pub fn clamped(mut self) -> Self {
        let clamp = |value: f64, min: f64, max: f64, default: f64| {
            if value.is_finite() { value.clamp(min, max) } else { default }
        };
        let (a, f, d) = (&SIMULATION.amplitude, &SIMULATION.frequency, &SIMULATION.drift);
        self.amplitude = clamp(self.amplitude, a.min, a.max, a.default);
        self.frequency = clamp(self.frequency, f.min, f.max, f.default);
        self.drift = clamp(self.drift, d.min, d.max, d.default);
        self
    }
}

/// Filtered market window plus everything derived from it. Stores indices
/// rather than a borrowed slice so the app can own it next to the series.
#[derive(Clone, Debug, PartialEq)]
pub struct MarketView {
    pub time_range: TimeRange,
    pub range: (usize, usize),
    /// High - Low, co-indexed with the window
    pub volatility: Vec<f64>,
    /// Offsets into the window that actually get plotted
    pub plot_indices: Vec<usize>,
}

impl MarketView {
    pub fn build(series: &OhlcvTimeSeries, time_range: TimeRange) -> Self {
        let slice = series.filter_by_range(time_range);
        Self {
            time_range,
            range: slice.range,
            volatility: slice.volatility_index(),
            plot_indices: stride_indices(slice.len(), PLOT_CONFIG.max_plot_points),
        }
    }

    pub fn slice<'a>(&self, series: &'a OhlcvTimeSeries) -> TimeSeriesSlice<'a> {
        series.slice(self.range)
    }
}

/// The user's curve plus the optional comparison pair.
#[derive(Clone, Debug)]
pub struct SimulationView {
    pub params: SimulationParams,
    pub curve: SimulatedCurve,
    pub comparison: Option<ComparisonCurves>,
}

pub struct VolatilityApp {
    pub(super) controls: Controls,

    // Runtime only
    pub(super) series: OhlcvTimeSeries,
    pub(super) load_status: LoadStatus,
    pub(super) rng: StdRng,
    pub(super) market_view: Option<MarketView>,
    pub(super) simulation_view: Option<SimulationView>,
    pub(super) show_help: bool,
}

impl VolatilityApp {
    pub fn new(cc: &eframe::CreationContext<'_>, loaded: LoadedSeries) -> Self {
        let controls = Self::restore_controls(cc.storage);
        Self::with_controls(loaded, controls, StdRng::from_entropy())
    }

    /// Controls saved by a previous session, clamped back into range. Fields
    /// missing from the saved blob take their defaults.
    pub(super) fn restore_controls(storage: Option<&dyn eframe::Storage>) -> Controls {
        match storage {
            Some(storage) => match eframe::get_value::<Controls>(storage, eframe::APP_KEY) {
                Some(controls) => {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_state_serde {
                        log::info!("Successfully loaded persisted controls: {:?}", controls);
                    }
                    controls.clamped()
                }
                None => {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_state_serde {
                        log::info!("No persisted controls in storage. Using defaults.");
                    }
                    Controls::default()
                }
            },
            None => Controls::default(),
        }
    }

    /// Builds the app without an eframe context.
    pub fn with_controls(loaded: LoadedSeries, controls: Controls, rng: StdRng) -> Self {
        let mut app = Self {
            controls,
            series: loaded.series,
            load_status: loaded.status,
            rng,
            market_view: None,
            simulation_view: None,
            show_help: false,
        };
        app.refresh_views();
        app
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn market_view(&self) -> Option<&MarketView> {
        self.market_view.as_ref()
    }

    pub fn simulation_view(&self) -> Option<&SimulationView> {
        self.simulation_view.as_ref()
    }

    pub(super) fn reset_controls(&mut self) {
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Controls reset to defaults");
        }
        self.controls = Controls::default();
    }

    /// Throws away the cached curve so the next refresh draws fresh randomness.
    pub(super) fn reroll(&mut self) {
        self.simulation_view = None;
    }

    /// Rebuilds whichever cached view no longer matches the controls.
    pub(super) fn refresh_views(&mut self) {
        let time_range = self.controls.time_range;
        if self.market_view.as_ref().map(|view| view.time_range) != Some(time_range) {
            let view = MarketView::build(&self.series, time_range);
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_simulation_events {
                log::info!(
                    "Market view rebuilt for {}: {} records, {} plotted",
                    time_range,
                    view.volatility.len(),
                    view.plot_indices.len()
                );
            }
            self.market_view = Some(view);
        }

        let params = self.controls.simulation_params();
        let compare_wanted = self.controls.compare;
        let up_to_date = self.simulation_view.as_ref().is_some_and(|view| {
            view.params == params && view.comparison.is_some() == compare_wanted
        });
        if !up_to_date {
            let curve = simulate(&params, &mut self.rng);
            let comparison = compare_wanted.then(|| compare(&mut self.rng));
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_simulation_events {
                log::info!("Simulation rebuilt: {:?} (compare: {})", params, compare_wanted);
            }
            self.simulation_view = Some(SimulationView {
                params,
                curve,
                comparison,
            });
        }
    }
}

impl eframe::App for VolatilityApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.controls);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.handle_global_shortcuts(ctx);

        self.render_side_panel(ctx);
        self.refresh_views();

        self.render_status_panel(ctx);
        self.render_central_panel(ctx);
        if self.show_help {
            self.render_help_panel(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Candle;
    use crate::utils::TimeUtils;

    const DAY: i64 = TimeUtils::MS_IN_D;

    fn loaded(days: usize) -> LoadedSeries {
        let end_ms = 1_760_000_000_000;
        let candles = (0..days)
            .map(|i| {
                let ts = end_ms - (days - 1 - i) as i64 * DAY;
                let p = 100.0 + i as f64;
                Candle::new(ts, p, p + 3.0, p - 1.0, p, 1_000.0)
            })
            .collect();
        LoadedSeries {
            series: OhlcvTimeSeries::from_candles("TEST", candles),
            status: LoadStatus::SyntheticOnly,
        }
    }

    fn app(controls: Controls) -> VolatilityApp {
        VolatilityApp::with_controls(loaded(500), controls, StdRng::seed_from_u64(1))
    }

    #[test]
    fn test_default_controls() {
        let controls = Controls::default();
        assert_eq!(controls.time_range, TimeRange::Last30Days);
        assert_eq!(controls.preset, Preset::Custom);
        assert_eq!(
            controls.simulation_params(),
            SimulationParams {
                pattern: Pattern::Sine,
                amplitude: 10.0,
                frequency: 2.0,
                drift: 0.0,
                shock: false,
            }
        );
    }

    #[test]
    fn test_preset_seeds_but_does_not_lock() {
        let mut controls = Controls::default();
        controls.apply_preset(Preset::HighRisk);
        assert_eq!((controls.amplitude, controls.frequency), (30.0, 6.0));

        controls.amplitude = 42.0;
        assert_eq!(controls.preset, Preset::HighRisk);
        assert_eq!(controls.simulation_params().amplitude, 42.0);

        controls.apply_preset(Preset::Custom);
        assert_eq!((controls.amplitude, controls.frequency), (42.0, 6.0));
    }

    #[test]
    fn test_clamped_restores_ranges() {
        let controls = Controls {
            amplitude: 500.0,
            frequency: f64::NAN,
            drift: -9.0,
            ..Controls::default()
        }
        .clamped();
        assert_eq!(controls.amplitude, 50.0);
        assert_eq!(controls.frequency, 2.0);
        assert_eq!(controls.drift, -5.0);
    }

    #[derive(Default)]
    struct MemoryStorage(std::collections::HashMap<String, String>);

    impl eframe::Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
        fn set_string(&mut self, key: &str, value: String) {
            self.0.insert(key.to_string(), value);
        }
        fn flush(&mut self) {}
    }

    #[test]
    fn test_saved_controls_are_restored() {
        let saved = Controls {
            time_range: TimeRange::Last90Days,
            pattern: Pattern::Noise,
            preset: Preset::MediumRisk,
            amplitude: 15.0,
            frequency: 3.0,
            drift: -2.0,
            shock: true,
            compare: true,
        };
        let mut storage = MemoryStorage::default();
        eframe::set_value(&mut storage, eframe::APP_KEY, &saved);

        assert_eq!(VolatilityApp::restore_controls(Some(&storage)), saved);
    }

    #[test]
    fn test_partial_saved_controls_fill_defaults() {
        let mut storage = MemoryStorage::default();
        eframe::Storage::set_string(
            &mut storage,
            eframe::APP_KEY,
            "(pattern: Combined, amplitude: 500.0, retired_setting: 3)".to_string(),
        );

        let controls = VolatilityApp::restore_controls(Some(&storage));
        assert_eq!(controls.pattern, Pattern::Combined);
        assert_eq!(controls.amplitude, SIMULATION.amplitude.max);
        assert_eq!(controls.time_range, TimeRange::Last30Days);
        assert_eq!(controls.frequency, SIMULATION.frequency.default);
        assert!(!controls.compare);
    }

    #[test]
    fn test_unreadable_or_missing_controls_use_defaults() {
        let mut storage = MemoryStorage::default();
        assert_eq!(VolatilityApp::restore_controls(Some(&storage)), Controls::default());
        assert_eq!(VolatilityApp::restore_controls(None), Controls::default());

        eframe::Storage::set_string(&mut storage, eframe::APP_KEY, "not ron at all {".to_string());
        assert_eq!(VolatilityApp::restore_controls(Some(&storage)), Controls::default());
    }

    #[test]
    fn test_initial_views_are_built() {
        let app = app(Controls::default());

        let market = app.market_view().expect("market view");
        assert_eq!(market.volatility.len(), 31);
        assert!(market.volatility.iter().all(|v| (v - 4.0).abs() < 1e-9));
        assert_eq!(market.plot_indices.len(), 31);

        let simulation = app.simulation_view().expect("simulation view");
        assert_eq!(simulation.curve.len(), SIMULATION.sample_count);
        assert!(simulation.comparison.is_none());
    }

    #[test]
    fn test_refresh_only_rebuilds_on_change() {
        let mut app = app(Controls {
            pattern: Pattern::Noise,
            ..Controls::default()
        });
        let before = app.simulation_view().map(|view| view.curve.clone());

        app.refresh_views();
        assert_eq!(app.simulation_view().map(|view| view.curve.clone()), before);

        app.controls.time_range = TimeRange::FullDataset;
        app.refresh_views();
        assert_eq!(app.market_view().map(|view| view.range), Some((0, 500)));
        // Market change leaves the random curve alone
        assert_eq!(app.simulation_view().map(|view| view.curve.clone()), before);

        app.reroll();
        app.refresh_views();
        assert_ne!(app.simulation_view().map(|view| view.curve.clone()), before);
    }

    #[test]
    fn test_compare_toggle_builds_reference_curves() {
        let mut app = app(Controls::default());
        app.controls.compare = true;
        app.refresh_views();

        let comparison = app
            .simulation_view()
            .and_then(|view| view.comparison.clone())
            .expect("comparison curves");
        let stable = simulate(&SIMULATION.stable_reference, &mut StdRng::seed_from_u64(0));
        assert_eq!(comparison.stable, stable);
        assert_eq!(comparison.volatile.len(), SIMULATION.sample_count);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut app = app(Controls::default());
        app.controls.apply_preset(Preset::Stable);
        app.controls.shock = true;
        app.reset_controls();
        assert_eq!(app.controls(), &Controls::default());
    }
}
