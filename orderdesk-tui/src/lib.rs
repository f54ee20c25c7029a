pub mod app;
pub mod cli;
pub mod mode;
pub mod tracing_setup;
pub mod ui;

// Re-export commonly used types
pub use app::{App, StatusMessage};
pub use mode::{AppMode, Pane};
pub use ui::UI;
