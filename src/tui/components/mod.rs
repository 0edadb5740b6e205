//! UI components for the TUI.
//!
//! - `picker_overlay` - Picker header, cell row and cancel control

mod picker_overlay;

pub use picker_overlay::render_picker_overlay;
