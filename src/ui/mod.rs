// Module declarations
mod app;
pub mod charts;
pub mod dashboard;
pub mod glyphs;
// Re-exports for external use
pub use app::{App, UIConfig, run};
