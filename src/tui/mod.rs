//! Terminal front end for the picker.
//!
//! - `components` - rendering
//! - `input` - key event mapping
//! - `terminal` - raw mode and alternate screen handling
//! - `theme` - colours

pub mod components;
pub mod input;
pub mod terminal;
pub mod theme;
