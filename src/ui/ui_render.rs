use eframe::egui::{
    CentralPanel, Context, Frame, Grid, Key, Margin, RichText, ScrollArea, SidePanel,
    TopBottomPanel, Ui, Window,
};

use crate::config::PLOT_CONFIG;
use crate::simulation::VolatilityLevel;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{MarketDataPanel, Panel, SimulationEvent, SimulationPanel};
use crate::ui::plot_layers::LineLayer;
use crate::ui::ui_plot_view::{show_curve_chart, show_market_charts, simulated_price_layer};
use crate::ui::utils::{format_price, section_heading, spaced_separator};
use crate::utils::time_utils::epoch_ms_to_utc;

use super::app::VolatilityApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl VolatilityApp {
    pub(super) fn render_side_panel(&mut self, ctx: &Context) {
        let side_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        SidePanel::left("left_panel")
            .min_width(UI_CONFIG.side_panel_min_width)
            .frame(side_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical().id_salt("controls").show(ui, |ui| {
                    for time_range in self.market_data_panel(ui) {
                        #[cfg(debug_assertions)]
                        if DEBUG_FLAGS.print_ui_interactions {
                            log::info!("Time range selected: {}", time_range);
                        }
                        self.controls.time_range = time_range;
                    }

                    spaced_separator(ui);

                    for event in self.simulation_panel(ui) {
                        self.handle_simulation_event(event);
                    }
                });
            });
    }

    pub(super) fn handle_simulation_event(&mut self, event: SimulationEvent) {
        match event {
            SimulationEvent::Pattern(pattern) => self.controls.pattern = pattern,
            SimulationEvent::Preset(preset) => self.controls.apply_preset(preset),
            SimulationEvent::Amplitude(amplitude) => self.controls.amplitude = amplitude,
            SimulationEvent::Frequency(frequency) => self.controls.frequency = frequency,
            SimulationEvent::Drift(drift) => self.controls.drift = drift,
            SimulationEvent::Shock(shock) => self.controls.shock = shock,
            SimulationEvent::Compare(compare) => self.controls.compare = compare,
            SimulationEvent::Reroll => self.reroll(),
            SimulationEvent::Reset => self.reset_controls(),
        }
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(12));
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                ScrollArea::vertical().id_salt("dashboard").show(ui, |ui| {
                    ui.heading(RichText::new(UI_TEXT.app_title).strong());
                    self.render_market_section(ui);
                    spaced_separator(ui);
                    self.render_simulation_section(ui);
                });
            });
    }

    fn render_market_section(&self, ui: &mut Ui) {
        section_heading(
            ui,
            format!("{} · {}", UI_TEXT.market_heading, self.series.name),
        );
        if let Some(view) = &self.market_view {
            show_market_charts(
                ui,
                view.slice(&self.series),
                &view.volatility,
                &view.plot_indices,
                view.time_range.title(),
            );
        }
    }

    fn render_simulation_section(&self, ui: &mut Ui) {
        let Some(view) = &self.simulation_view else {
            return;
        };
        let params = &view.params;

        section_heading(ui, UI_TEXT.playground_heading);
        let title = format!(
            "{} | Amplitude: {} | Frequency: {} | Drift: {}",
            params.pattern, params.amplitude, params.frequency, params.drift
        );
        show_curve_chart(
            ui,
            "simulation_chart",
            title,
            simulated_price_layer(&view.curve, VolatilityLevel::from_amplitude(params.amplitude)),
            PLOT_CONFIG.simulation_chart_height,
        );

        section_heading(ui, UI_TEXT.metrics_heading);
        let mean = view.curve.mean_price();
        let std_dev = view.curve.price_std_dev();
        ui.columns(3, |columns| {
            columns[0].metric_card(
                UI_TEXT.metric_mean_price,
                &format_price(mean),
                Some(&format!("± {:.2}", std_dev)),
            );
            columns[1].metric_card(UI_TEXT.metric_volatility_index, &format!("{:.2}", std_dev), None);
            columns[2].metric_card(UI_TEXT.metric_drift, &format!("{}", params.drift), None);
        });

        if let Some(comparison) = &view.comparison {
            section_heading(ui, UI_TEXT.comparison_heading);
            ui.columns(2, |columns| {
                show_curve_chart(
                    &mut columns[0],
                    "stable_chart",
                    UI_TEXT.stable_coin.to_string(),
                    LineLayer::new(
                        UI_TEXT.stable_coin,
                        comparison.stable.points(),
                        PLOT_CONFIG.stable_coin_color,
                    ),
                    PLOT_CONFIG.comparison_chart_height,
                );
                show_curve_chart(
                    &mut columns[1],
                    "volatile_chart",
                    UI_TEXT.volatile_coin.to_string(),
                    LineLayer::new(
                        UI_TEXT.volatile_coin,
                        comparison.volatile.points(),
                        PLOT_CONFIG.volatile_coin_color,
                    ),
                    PLOT_CONFIG.comparison_chart_height,
                );
            });
        }
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal_wrapped(|ui| {
                    // 1. Data source
                    let source_color = if self.load_status.is_synthetic() {
                        UI_CONFIG.colors.status_fallback
                    } else {
                        UI_CONFIG.colors.status_file
                    };
                    ui.metric(UI_TEXT.status_source, &self.load_status.to_string(), source_color);
                    ui.separator();

                    // 2. Record counts
                    let filtered = self
                        .market_view
                        .as_ref()
                        .map(|view| view.volatility.len())
                        .unwrap_or(0);
                    ui.metric(
                        UI_TEXT.status_records,
                        &format!("{} / {}", filtered, self.series.len()),
                        UI_CONFIG.colors.metric_value,
                    );

                    // 3. Span of the full series
                    if let (Some(first), Some(last)) =
                        (self.series.first_timestamp_ms(), self.series.last_timestamp_ms())
                    {
                        ui.separator();
                        ui.metric(
                            UI_TEXT.status_span,
                            &format!("{} → {}", epoch_ms_to_utc(first), epoch_ms_to_utc(last)),
                            UI_CONFIG.colors.metric_value,
                        );
                    }

                    ui.separator();
                    ui.label_subdued("H: help");
                });
            });
    }

    fn render_shortcut_rows(ui: &mut Ui, rows: &[(&str, &str)]) {
        for (key, description) in rows {
            ui.label(RichText::new(*key).monospace().strong());
            ui.label(*description);
            ui.end_row();
        }
    }

    pub(super) fn render_help_panel(&mut self, ctx: &Context) {
        Window::new(UI_TEXT.help_title)
            .open(&mut self.show_help)
            .resizable(false)
            .collapsible(false)
            .default_width(360.0)
            .show(ctx, |ui| {
                ui.label("Press any key to execute the command:");
                ui.add_space(5.0);

                let shortcuts = [
                    ("H", UI_TEXT.label_help_toggle),
                    ("C", UI_TEXT.label_help_compare),
                    ("S", UI_TEXT.label_help_shock),
                    ("N", UI_TEXT.label_help_reroll),
                    ("R", UI_TEXT.label_help_reset),
                ];

                Grid::new("shortcuts_grid")
                    .num_columns(2)
                    .spacing([20.0, 8.0])
                    .striped(true)
                    .show(ui, |ui| {
                        Self::render_shortcut_rows(ui, &shortcuts);
                    });
            });
    }

    fn market_data_panel(&mut self, ui: &mut Ui) -> Vec<crate::domain::TimeRange> {
        let mut panel = MarketDataPanel::new(self.controls.time_range);
        panel.render(ui)
    }

    fn simulation_panel(&mut self, ui: &mut Ui) -> Vec<SimulationEvent> {
        let mut panel = SimulationPanel::new(self.controls);
        panel.render(ui)
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        // Keys typed into a focused widget belong to that widget
        if ctx.memory(|memory| memory.focused().is_some()) {
            return;
        }

        let mut events = Vec::new();
        ctx.input(|i| {
            if i.key_pressed(Key::H) {
                self.show_help = !self.show_help;
            }
            if i.key_pressed(Key::Escape) && self.show_help {
                self.show_help = false;
            }
            if i.key_pressed(Key::C) {
                events.push(SimulationEvent::Compare(!self.controls.compare));
            }
            if i.key_pressed(Key::S) {
                events.push(SimulationEvent::Shock(!self.controls.shock));
            }
            if i.key_pressed(Key::N) {
                events.push(SimulationEvent::Reroll);
            }
            if i.key_pressed(Key::R) {
                events.push(SimulationEvent::Reset);
            }
        });

        for event in events {
            self.handle_simulation_event(event);
        }
    }
}
