pub mod engine;
pub mod export;
pub mod types;

pub use engine::AnalyticsEngine;
pub use export::{OPEN_POSITION_MARKER, render_csv};
pub use types::{Report, Trade};
