//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    pub close_price_color: Color32,
    pub high_price_color: Color32,
    pub low_price_color: Color32,
    pub volatility_index_color: Color32,
    // Simulated curve colours, chosen by volatility level
    pub sim_calm_color: Color32,
    pub sim_elevated_color: Color32,
    pub sim_extreme_color: Color32,
    // Comparison mode
    pub stable_coin_color: Color32,
    pub volatile_coin_color: Color32,
    /// Colour volume bars along `volume_gradient_colors` (low volume first).
    /// When `false` every bar uses `default_bar_color`.
    pub volume_gradient_viridis: bool,
    pub volume_gradient_colors: &'static [&'static str],
    pub default_bar_color: Color32,
    pub line_width: f32,
    /// Height of each market chart in points
    pub market_chart_height: f32,
    pub simulation_chart_height: f32,
    pub comparison_chart_height: f32,
    /// Series longer than this are stride-decimated before plotting.
    /// Full minute-level files otherwise make egui_plot crawl.
    pub max_plot_points: usize,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    close_price_color: Color32::from_rgb(102, 126, 234), // Periwinkle
    high_price_color: Color32::from_rgb(0, 255, 136),    // Mint
    low_price_color: Color32::from_rgb(255, 68, 68),     // Red
    volatility_index_color: Color32::from_rgb(255, 107, 107), // Coral
    sim_calm_color: Color32::from_rgb(0, 255, 136),
    sim_elevated_color: Color32::from_rgb(255, 170, 0), // Amber
    sim_extreme_color: Color32::from_rgb(255, 68, 68),
    stable_coin_color: Color32::from_rgb(0, 255, 136),
    volatile_coin_color: Color32::from_rgb(255, 68, 68),
    volume_gradient_viridis: true,
    // Viridis stops
    volume_gradient_colors: &["#440154", "#3b528b", "#21918c", "#5ec962", "#fde725"],
    default_bar_color: Color32::from_rgb(255, 165, 0),
    line_width: 2.0,
    market_chart_height: 260.0,
    simulation_chart_height: 320.0,
    comparison_chart_height: 240.0,
    max_plot_points: 5_000,
};
