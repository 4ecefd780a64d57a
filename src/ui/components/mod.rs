//! UI Components
//!
//! Reusable TUI widgets for the login list screen.

pub mod header;
pub mod list;
pub mod metadata;
pub mod searchbar;
pub mod statusline;

// Re-exports
pub use header::{Header, UserIdentity};
pub use list::{EmptyState, ListViewState, LoginList, LoginRow};
pub use metadata::{total_label, Metadata};
pub use searchbar::SearchBar;
pub use statusline::{HelpBar, StatusLine};
