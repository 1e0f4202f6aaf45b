//! Configuration module for the volatility dashboard.

pub mod data;

mod debug; // Private: files use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod plot;
pub mod simulation;

// Re-export commonly used items
pub use data::DATA;
pub use persistence::APP_STATE_PATH;
pub use plot::PLOT_CONFIG;
pub use simulation::SIMULATION;
