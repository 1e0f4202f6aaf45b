use eframe::egui::{ComboBox, Slider, Ui};
use strum::IntoEnumIterator;

use crate::config::SIMULATION;
use crate::config::simulation::SliderConfig;
use crate::domain::TimeRange;
use crate::simulation::{Pattern, Preset};
use crate::ui::app::Controls;
use crate::ui::config::UI_TEXT;
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::{section_heading, spaced_separator};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// Panel choosing the trailing window of the market charts
pub struct MarketDataPanel {
    selected_range: TimeRange,
}

impl MarketDataPanel {
    pub fn new(time_range: TimeRange) -> Self {
        Self {
            selected_range: time_range,
        }
    }
}

impl Panel for MarketDataPanel {
    type Event = TimeRange;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.market_controls_heading);

        ui.label_subheader(UI_TEXT.time_range_heading);
        ComboBox::from_id_salt("time_range")
            .selected_text(self.selected_range.to_string())
            .show_ui(ui, |ui| {
                for range_variant in TimeRange::iter() {
                    if ui
                        .selectable_value(
                            &mut self.selected_range,
                            range_variant,
                            range_variant.to_string(),
                        )
                        .clicked()
                    {
                        events.push(self.selected_range);
                    }
                }
            });

        ui.add_space(10.0);
        events
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimulationEvent {
    Pattern(Pattern),
    Preset(Preset),
    Amplitude(f64),
    Frequency(f64),
    Drift(f64),
    Shock(bool),
    Compare(bool),
    Reroll,
    Reset,
}

/// Panel for the waveform controls. Works on a copy of the controls and
/// reports what changed.
pub struct SimulationPanel {
    controls: Controls,
}

impl SimulationPanel {
    pub fn new(controls: Controls) -> Self {
        Self { controls }
    }

    fn render_pattern_selector(&mut self, ui: &mut Ui) -> Option<Pattern> {
        let mut changed = None;
        ui.label_subheader(UI_TEXT.pattern_heading);
        ComboBox::from_id_salt("pattern")
            .selected_text(self.controls.pattern.to_string())
            .show_ui(ui, |ui| {
                for pattern in Pattern::iter() {
                    if ui
                        .selectable_value(&mut self.controls.pattern, pattern, pattern.to_string())
                        .clicked()
                    {
                        changed = Some(pattern);
                    }
                }
            });
        changed
    }

    fn render_preset_selector(&mut self, ui: &mut Ui) -> Option<Preset> {
        let mut changed = None;
        ui.add_space(5.0);
        ui.label_subheader(UI_TEXT.preset_heading);
        ui.horizontal_wrapped(|ui| {
            for preset in Preset::iter() {
                if ui
                    .radio_value(&mut self.controls.preset, preset, preset.to_string())
                    .clicked()
                {
                    changed = Some(preset);
                }
            }
        });
        ui.label_subdued(UI_TEXT.preset_helper);
        changed
    }

    fn render_slider(ui: &mut Ui, label: &str, value: &mut f64, config: &SliderConfig) -> bool {
        ui.add_space(5.0);
        ui.label_subheader(label);
        ui.add(Slider::new(value, config.min..=config.max).step_by(1.0))
            .changed()
    }
}

impl Panel for SimulationPanel {
    type Event = SimulationEvent;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        section_heading(ui, UI_TEXT.simulation_controls_heading);

        if let Some(pattern) = self.render_pattern_selector(ui) {
            events.push(SimulationEvent::Pattern(pattern));
        }
        if let Some(preset) = self.render_preset_selector(ui) {
            events.push(SimulationEvent::Preset(preset));
        }
        spaced_separator(ui);

        let controls = &mut self.controls;
        if Self::render_slider(ui, UI_TEXT.amplitude_label, &mut controls.amplitude, &SIMULATION.amplitude) {
            events.push(SimulationEvent::Amplitude(controls.amplitude));
        }
        if Self::render_slider(ui, UI_TEXT.frequency_label, &mut controls.frequency, &SIMULATION.frequency) {
            events.push(SimulationEvent::Frequency(controls.frequency));
        }
        if Self::render_slider(ui, UI_TEXT.drift_label, &mut controls.drift, &SIMULATION.drift) {
            events.push(SimulationEvent::Drift(controls.drift));
        }
        spaced_separator(ui);

        if ui.checkbox(&mut controls.shock, UI_TEXT.shock_label).changed() {
            events.push(SimulationEvent::Shock(controls.shock));
        }
        if ui.checkbox(&mut controls.compare, UI_TEXT.compare_label).changed() {
            events.push(SimulationEvent::Compare(controls.compare));
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button(UI_TEXT.reroll_button).clicked() {
                events.push(SimulationEvent::Reroll);
            }
            if ui.button(UI_TEXT.reset_button).clicked() {
                events.push(SimulationEvent::Reset);
            }
        });

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions && !events.is_empty() {
            log::info!("Simulation panel events: {:?}", events);
        }

        ui.add_space(20.0);
        events
    }
}
