pub mod types;

// Re-export the most important types for easy access from other crates.
pub use types::{AnnotatedBar, CrossoverEvent, MaBar, PriceBar, Regime, Series};
