//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every check is further gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit file/synthetic load details (paths, row counts, timings).
    pub print_serde: bool,
    /// Emit UI interaction logs (time range switches, preset picks, resets).
    pub print_ui_interactions: bool,
    /// Emit a line every time the simulated curve or market view is rebuilt.
    pub print_simulation_events: bool,
    /// Emit details of persisted control state serialization.
    pub print_state_serde: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_serde: true,
    print_ui_interactions: true,
    print_simulation_events: false,
    print_state_serde: false,
};
