// Domain types and value objects
pub mod candle;
pub mod time_range;

// Re-export commonly used types
pub use candle::Candle;
pub use time_range::TimeRange;
