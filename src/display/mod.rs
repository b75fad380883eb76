//! Display formatting for terminal output
//!
//! Plain-text layouts for the history sections and the balance summary.

pub mod history;
pub mod summary;

pub use history::format_history;
pub use summary::format_summary;
