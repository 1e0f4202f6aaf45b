/// Every user-visible string in one place.
pub struct UiText {
    pub app_title: &'static str,

    // Side panel
    pub market_controls_heading: &'static str,
    pub time_range_heading: &'static str,
    pub simulation_controls_heading: &'static str,
    pub pattern_heading: &'static str,
    pub preset_heading: &'static str,
    pub amplitude_label: &'static str,
    pub frequency_label: &'static str,
    pub drift_label: &'static str,
    pub shock_label: &'static str,
    pub compare_label: &'static str,
    pub reroll_button: &'static str,
    pub reset_button: &'static str,
    pub preset_helper: &'static str,

    // Market section
    pub market_heading: &'static str,
    pub close_chart_title: &'static str,
    pub volume_chart_title: &'static str,
    pub high_low_chart_title: &'static str,
    pub volatility_chart_title: &'static str,
    pub label_close: &'static str,
    pub label_volume: &'static str,
    pub label_high: &'static str,
    pub label_low: &'static str,
    pub label_volatility: &'static str,
    pub no_records_in_range: &'static str,

    // Simulation section
    pub playground_heading: &'static str,
    pub label_simulated_price: &'static str,
    pub metrics_heading: &'static str,
    pub metric_mean_price: &'static str,
    pub metric_volatility_index: &'static str,
    pub metric_drift: &'static str,
    pub comparison_heading: &'static str,
    pub stable_coin: &'static str,
    pub volatile_coin: &'static str,

    // Axes
    pub plot_x_axis_date: &'static str,
    pub plot_x_axis_time: &'static str,
    pub plot_y_axis_price: &'static str,
    pub plot_y_axis_volume: &'static str,
    pub plot_y_axis_volatility: &'static str,

    // Status bar
    pub status_source: &'static str,
    pub status_records: &'static str,
    pub status_span: &'static str,

    // Help
    pub help_title: &'static str,
    pub label_help_toggle: &'static str,
    pub label_help_compare: &'static str,
    pub label_help_shock: &'static str,
    pub label_help_reroll: &'static str,
    pub label_help_reset: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "Crypto Volatility Visualizer",

    market_controls_heading: "Market Data",
    time_range_heading: "Time Range",
    simulation_controls_heading: "Simulation",
    pattern_heading: "Price Pattern",
    preset_heading: "Preset",
    amplitude_label: "Amplitude (swing size)",
    frequency_label: "Frequency (swing speed)",
    drift_label: "Drift (long-term slope)",
    shock_label: "Inject random shocks",
    compare_label: "Compare stable vs volatile",
    reroll_button: "🎲 Re-roll",
    reset_button: "↺ Reset controls",
    preset_helper: "Presets fill the sliders; you can still adjust them.",

    market_heading: "Market Data",
    close_chart_title: "Close Price",
    volume_chart_title: "Trading Volume",
    high_low_chart_title: "High vs Low",
    volatility_chart_title: "Volatility Index (High - Low)",
    label_close: "Close",
    label_volume: "Volume",
    label_high: "High",
    label_low: "Low",
    label_volatility: "Volatility",
    no_records_in_range: "No records in the selected range.",

    playground_heading: "Volatility Playground",
    label_simulated_price: "Simulated Price",
    metrics_heading: "Key Metrics",
    metric_mean_price: "Mean Price",
    metric_volatility_index: "Volatility Index (σ)",
    metric_drift: "Drift",
    comparison_heading: "Stable vs Volatile",
    stable_coin: "Stable Coin",
    volatile_coin: "Volatile Coin",

    plot_x_axis_date: "Date",
    plot_x_axis_time: "Time",
    plot_y_axis_price: "Price (USD)",
    plot_y_axis_volume: "Volume",
    plot_y_axis_volatility: "High - Low (USD)",

    status_source: "Source",
    status_records: "Records",
    status_span: "Span",

    help_title: "⌨️ Keyboard Shortcuts",
    label_help_toggle: "Toggle this help panel",
    label_help_compare: "Toggle comparison mode",
    label_help_shock: "Toggle random shocks",
    label_help_reroll: "Re-roll the random draws",
    label_help_reset: "Reset all controls",
};
