use eframe::egui::{self, Color32, RichText};
use egui_plot::{AxisHints, Corner, HPlacement, Legend, Plot};

use crate::config::PLOT_CONFIG;
use crate::models::TimeSeriesSlice;
use crate::simulation::{SimulatedCurve, VolatilityLevel};
use crate::ui::config::UI_TEXT;
use crate::ui::plot_layers::{LineLayer, PlotLayer, VolumeBarsLayer};
use crate::ui::styles::UiStyleExt;
use crate::utils::time_utils::epoch_ms_to_utc_with_format;
use crate::utils::{TimeUtils, maths_utils};

/// What the x values of a chart mean.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XAxisKind {
    /// Milliseconds since the Unix epoch, labelled as dates
    EpochMs,
    /// Simulation time
    Time,
}

/// One chart: a title, a height and a stack of layers drawn back to front.
pub struct ChartView<'a> {
    pub id: &'a str,
    pub title: String,
    pub y_label: &'a str,
    pub x_axis: XAxisKind,
    pub height: f32,
    pub layers: Vec<Box<dyn PlotLayer + 'a>>,
}

impl<'a> ChartView<'a> {
    pub fn show(self, ui: &mut egui::Ui) {
        ui.label(RichText::new(&self.title).strong());
        let legend = Legend::default().position(Corner::LeftTop);

        Plot::new(self.id)
            .height(self.height)
            .legend(legend)
            .custom_x_axes(vec![create_x_axis(self.x_axis)])
            .custom_y_axes(vec![create_y_axis(self.y_label)])
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for layer in &self.layers {
                    layer.render(plot_ui);
                }
            });
    }
}

fn create_x_axis(kind: XAxisKind) -> AxisHints<'static> {
    match kind {
        XAxisKind::EpochMs => AxisHints::new_x()
            .label(UI_TEXT.plot_x_axis_date)
            .formatter(|grid_mark, range| {
                // Show the time of day once the visible span drops below a few days
                let format = if range.end() - range.start() < 3.0 * TimeUtils::MS_IN_D as f64 {
                    TimeUtils::DETAILED_TIME_FORMAT
                } else {
                    TimeUtils::STANDARD_TIME_FORMAT
                };
                epoch_ms_to_utc_with_format(grid_mark.value as i64, format)
            }),
        XAxisKind::Time => AxisHints::new_x()
            .label(UI_TEXT.plot_x_axis_time)
            .formatter(|grid_mark, _range| format!("{:.1}", grid_mark.value)),
    }
}

fn create_y_axis(label: &str) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(label.to_string())
        .placement(HPlacement::Left)
}

/// `[timestamp, value]` for the plotted subset of a window column.
fn sampled_points(timestamps_ms: &[i64], values: &[f64], indices: &[usize]) -> Vec<[f64; 2]> {
    indices
        .iter()
        .filter_map(|&i| Some([*timestamps_ms.get(i)? as f64, *values.get(i)?]))
        .collect()
}

/// Width of one bar given the plotted x positions.
fn bar_width(points: &[[f64; 2]]) -> f64 {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if points.len() > 1 => {
            (last[0] - first[0]) / (points.len() - 1) as f64 * 0.8
        }
        _ => TimeUtils::MS_IN_D as f64 * 0.8,
    }
}

/// Market charts for a filtered window. `volatility` is co-indexed with
/// `slice`; only `plot_indices` are drawn.
pub fn show_market_charts(
    ui: &mut egui::Ui,
    slice: TimeSeriesSlice,
    volatility: &[f64],
    plot_indices: &[usize],
    range_title: &str,
) {
    if slice.is_empty() {
        ui.label_warning(UI_TEXT.no_records_in_range);
        return;
    }

    let timestamps = slice.timestamps_ms();
    let close = sampled_points(timestamps, slice.close_prices(), plot_indices);
    let close_floor = maths_utils::get_min(slice.close_prices());
    let height = PLOT_CONFIG.market_chart_height;

    ui.columns(2, |columns| {
        ChartView {
            id: "close_chart",
            title: format!("{} ({})", UI_TEXT.close_chart_title, range_title),
            y_label: UI_TEXT.plot_y_axis_price,
            x_axis: XAxisKind::EpochMs,
            height,
            layers: vec![Box::new(
                LineLayer::new(UI_TEXT.label_close, close, PLOT_CONFIG.close_price_color)
                    .filled(close_floor),
            )],
        }
        .show(&mut columns[0]);

        let volume = sampled_points(timestamps, slice.volumes(), plot_indices);
        ChartView {
            id: "volume_chart",
            title: format!("{} ({})", UI_TEXT.volume_chart_title, range_title),
            y_label: UI_TEXT.plot_y_axis_volume,
            x_axis: XAxisKind::EpochMs,
            height,
            layers: vec![Box::new(VolumeBarsLayer {
                name: UI_TEXT.label_volume.to_string(),
                bar_width: bar_width(&volume),
                points: volume,
            })],
        }
        .show(&mut columns[1]);
    });

    ui.add_space(10.0);
    ui.columns(2, |columns| {
        ChartView {
            id: "high_low_chart",
            title: format!("{} ({})", UI_TEXT.high_low_chart_title, range_title),
            y_label: UI_TEXT.plot_y_axis_price,
            x_axis: XAxisKind::EpochMs,
            height,
            layers: vec![
                Box::new(LineLayer::new(
                    UI_TEXT.label_high,
                    sampled_points(timestamps, slice.high_prices(), plot_indices),
                    PLOT_CONFIG.high_price_color,
                )),
                Box::new(LineLayer::new(
                    UI_TEXT.label_low,
                    sampled_points(timestamps, slice.low_prices(), plot_indices),
                    PLOT_CONFIG.low_price_color,
                )),
            ],
        }
        .show(&mut columns[0]);

        ChartView {
            id: "volatility_chart",
            title: UI_TEXT.volatility_chart_title.to_string(),
            y_label: UI_TEXT.plot_y_axis_volatility,
            x_axis: XAxisKind::EpochMs,
            height,
            layers: vec![Box::new(
                LineLayer::new(
                    UI_TEXT.label_volatility,
                    sampled_points(timestamps, volatility, plot_indices),
                    PLOT_CONFIG.volatility_index_color,
                )
                .filled(0.0),
            )],
        }
        .show(&mut columns[1]);
    });
}

pub fn volatility_color(level: VolatilityLevel) -> Color32 {
    match level {
        VolatilityLevel::Calm => PLOT_CONFIG.sim_calm_color,
        VolatilityLevel::Elevated => PLOT_CONFIG.sim_elevated_color,
        VolatilityLevel::Extreme => PLOT_CONFIG.sim_extreme_color,
    }
}

/// The playground curve, shaded down to zero in its volatility colour.
pub fn simulated_price_layer(curve: &SimulatedCurve, level: VolatilityLevel) -> LineLayer {
    LineLayer::new(
        UI_TEXT.label_simulated_price,
        curve.points(),
        volatility_color(level),
    )
    .filled(0.0)
}

/// Single simulated curve with its own title.
pub fn show_curve_chart(ui: &mut egui::Ui, id: &str, title: String, layer: LineLayer, height: f32) {
    ChartView {
        id,
        title,
        y_label: UI_TEXT.plot_y_axis_price,
        x_axis: XAxisKind::Time,
        height,
        layers: vec![Box::new(layer)],
    }
    .show(ui);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sampled_points_follow_indices() {
        let ts = [10, 20, 30, 40];
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(
            sampled_points(&ts, &values, &[0, 2, 3]),
            vec![[10.0, 1.0], [30.0, 3.0], [40.0, 4.0]]
        );
        // Out of range indices are skipped
        assert_eq!(sampled_points(&ts, &values, &[5]), Vec::<[f64; 2]>::new());
    }

    #[test]
    fn test_bar_width_from_spacing() {
        let points = [[0.0, 1.0], [10.0, 1.0], [20.0, 1.0]];
        assert!((bar_width(&points) - 8.0).abs() < 1e-9);
        assert!((bar_width(&[[5.0, 1.0]]) - TimeUtils::MS_IN_D as f64 * 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_simulated_price_layer_fills_to_zero() {
        let curve = SimulatedCurve {
            t: vec![0.0, 1.0],
            price: vec![100.0, 101.0],
        };
        let layer = simulated_price_layer(&curve, VolatilityLevel::Extreme);

        assert_eq!(layer.name, UI_TEXT.label_simulated_price);
        assert_eq!(layer.fill_to, Some(0.0));
        assert_eq!(layer.color, PLOT_CONFIG.sim_extreme_color);
        assert_eq!(layer.points, vec![[0.0, 100.0], [1.0, 101.0]]);
    }

    #[test]
    fn test_volatility_colors_by_level() {
        assert_eq!(volatility_color(VolatilityLevel::Calm), PLOT_CONFIG.sim_calm_color);
        assert_eq!(
            volatility_color(VolatilityLevel::from_amplitude(30.0)),
            PLOT_CONFIG.sim_extreme_color
        );
    }
}
