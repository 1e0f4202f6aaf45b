use colorgrad::Gradient;
use eframe::egui::Color32;
use egui_plot::{Bar, BarChart, Line, PlotPoints, PlotUi};

use crate::config::PLOT_CONFIG;
use crate::utils::maths_utils;

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi);
}

// ============================================================================
// 1. LINE LAYER (prices, volatility, simulated curves)
// ============================================================================
pub struct LineLayer {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub color: Color32,
    /// Shade the area between the line and this y value
    pub fill_to: Option<f64>,
}

impl LineLayer {
    pub fn new(name: impl Into<String>, points: Vec<[f64; 2]>, color: Color32) -> Self {
        Self {
            name: name.into(),
            points,
            color,
            fill_to: None,
        }
    }

    pub fn filled(mut self, y_reference: f64) -> Self {
        self.fill_to = Some(y_reference);
        self
    }
}

impl PlotLayer for LineLayer {
    fn render(&self, plot_ui: &mut PlotUi) {
        let mut line = Line::new(&self.name, PlotPoints::from(self.points.clone()))
            .color(self.color)
            .width(PLOT_CONFIG.line_width);
        if let Some(y_reference) = self.fill_to {
            line = line.fill(y_reference as f32);
        }
        plot_ui.line(line);
    }
}

// ============================================================================
// 2. VOLUME LAYER (bars coloured by relative volume)
// ============================================================================
pub struct VolumeBarsLayer {
    pub name: String,
    /// `[x, volume]`
    pub points: Vec<[f64; 2]>,
    pub bar_width: f64,
}

impl VolumeBarsLayer {
    /// Bar colour per point. Falls back to a flat colour if the gradient
    /// can't be built or is switched off.
    pub fn bar_colors(&self) -> Vec<Color32> {
        let gradient = PLOT_CONFIG
            .volume_gradient_viridis
            .then(|| {
                colorgrad::GradientBuilder::new()
                    .html_colors(PLOT_CONFIG.volume_gradient_colors)
                    .build::<colorgrad::CatmullRomGradient>()
                    .ok()
            })
            .flatten();

        let Some(gradient) = gradient else {
            return vec![PLOT_CONFIG.default_bar_color; self.points.len()];
        };

        let volumes: Vec<f64> = self.points.iter().map(|p| p[1]).collect();
        maths_utils::normalize_max(&volumes)
            .into_iter()
            .map(|v| to_egui_color(gradient.at(v as f32)))
            .collect()
    }
}

impl PlotLayer for VolumeBarsLayer {
    fn render(&self, plot_ui: &mut PlotUi) {
        let bars: Vec<Bar> = self
            .points
            .iter()
            .zip(self.bar_colors())
            .map(|(&[x, volume], color)| Bar::new(x, volume).width(self.bar_width).fill(color))
            .collect();
        plot_ui.bar_chart(BarChart::new(&self.name, bars));
    }
}

fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_colors_one_per_point() {
        let layer = VolumeBarsLayer {
            name: "Volume".to_string(),
            points: vec![[0.0, 1.0], [1.0, 5.0], [2.0, 10.0]],
            bar_width: 0.8,
        };
        let colors = layer.bar_colors();
        assert_eq!(colors.len(), 3);
        // Low and high volume land on opposite ends of the gradient
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn test_bar_colors_empty() {
        let layer = VolumeBarsLayer {
            name: "Volume".to_string(),
            points: Vec::new(),
            bar_width: 0.8,
        };
        assert!(layer.bar_colors().is_empty());
    }
}
