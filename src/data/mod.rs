// Data loading and persistence
pub mod pre_main;
pub mod timeseries;

// Re-export commonly used types
pub use pre_main::{LoadOptions, fetch_series};
pub use timeseries::{LoadError, LoadStatus, LoadedSeries};
