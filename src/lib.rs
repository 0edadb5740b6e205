//! Focus-driven item picker for remote-control style interfaces.
//!
//! The [`picker`] module holds the headless overlay model; [`tui`] draws it
//! with ratatui and maps crossterm key events onto remote input.
//!
//! ```ignore
//! let presented = present_picker(&mut navigator, "Example Picker", None, items, 0, |item, index| {
//!     println!("{} selected at index {}", item, index);
//! });
//! ```

pub mod config;
pub mod error;
pub mod log;
pub mod picker;
pub mod tui;
