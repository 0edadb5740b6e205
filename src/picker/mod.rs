//! Focus-driven item picker
//!
//! A presentable overlay with a title, an optional subtitle, a horizontal
//! row of selectable cells and a cancel control. The model here is headless;
//! `crate::tui` draws it and maps key events onto [`PickerInput`].
//!
//! - `layout` - content width, insets and scroll geometry
//! - `animation` - spring scale transitions
//! - `cell` - cell feedback state machine and recycling pool
//! - `focus` - traversal between cells and the cancel control
//! - `host` - push or modal presentation
//! - `sink` - result delegate
//! - `controller` - the overlay itself

mod animation;
mod cell;
mod controller;
mod focus;
mod host;
mod layout;
mod sink;
mod traits;

pub use animation::{ScaleAnimator, Spring};
pub use cell::{CellPool, CellVisualState, PickerCell, DEFAULT_FOCUSED_SCALE, DEFAULT_PRESSED_SCALE};
pub use controller::{
    CANCEL_TITLE, PickerController, PickerEvent, PickerInput, PresentedPicker, ScrollRequest,
    present_picker,
};
pub use focus::{Direction, FocusGuide, FocusModel, FocusTarget, GuideTarget};
pub use host::{HostContext, Navigator, Presentation};
pub use layout::{
    CellFrame, CellMetrics, ColumnWidth, Insets, ListLayout, ScrollMode, Size, TextMeasure,
    cell_size, compute_content_width, section_insets,
};
pub use sink::{PickerResultSink, SelectHandler};
pub use traits::Picker;
