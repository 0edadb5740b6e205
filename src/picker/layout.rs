//! Content-dependent list geometry.
//!
//! Everything here is pure arithmetic over measured text widths. Units are
//! whatever the caller's [`TextMeasure`] returns: points for a graphical
//! host, display columns for the terminal.

use std::ops::Range;

use serde::Deserialize;
use unicode_width::UnicodeWidthStr;

/// Measures the rendered width of a label under the body text style.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> f64;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> f64,
{
    fn measure(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Terminal text measurement: one unit per display column.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnWidth;

impl TextMeasure for ColumnWidth {
    fn measure(&self, text: &str) -> f64 {
        UnicodeWidthStr::width(text) as f64
    }
}

/// Fixed padding applied around every cell.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CellMetrics {
    /// Added to the measured text width
    pub horizontal_padding: f64,
    /// Subtracted from the container height
    pub vertical_padding: f64,
    /// Gap drawn between adjacent cells (not part of the content width)
    pub item_spacing: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            horizontal_padding: 80.0,
            vertical_padding: 40.0,
            item_spacing: 10.0,
        }
    }
}

impl CellMetrics {
    /// Metrics scaled down to terminal columns and rows.
    pub fn terminal() -> Self {
        Self {
            horizontal_padding: 4.0,
            vertical_padding: 2.0,
            item_spacing: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Horizontal section insets of the list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub leading: f64,
    pub trailing: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMode {
    /// Content fits: centered by a leading inset, never scrolls
    Centered,
    /// Content overflows: no inset, focused cell is scrolled to the center
    Scrolling,
}

/// Size of the cell displaying `text`.
pub fn cell_size(
    text: &str,
    container_height: f64,
    metrics: &CellMetrics,
    measure: &dyn TextMeasure,
) -> Size {
    Size {
        width: cell_width(text, metrics, measure),
        height: (container_height - metrics.vertical_padding).max(0.0),
    }
}

fn cell_width(text: &str, metrics: &CellMetrics, measure: &dyn TextMeasure) -> f64 {
    (measure.measure(text) + metrics.horizontal_padding).max(0.0)
}

/// Sum of all cell widths.
///
/// Item spacing is not part of the sum even though it is drawn between
/// cells. The centering decision and inset are based on this sum alone.
pub fn compute_content_width<S: AsRef<str>>(
    items: &[S],
    metrics: &CellMetrics,
    measure: &dyn TextMeasure,
) -> f64 {
    items
        .iter()
        .map(|item| cell_width(item.as_ref(), metrics, measure))
        .sum()
}

/// Insets and scroll behaviour for a list of `content_width` inside a
/// container of `container_width`.
pub fn section_insets(content_width: f64, container_width: f64) -> (Insets, ScrollMode) {
    if content_width > container_width {
        return (Insets::default(), ScrollMode::Scrolling);
    }

    let insets = Insets {
        leading: (container_width - content_width) / 2.0,
        trailing: 0.0,
    };
    (insets, ScrollMode::Centered)
}

/// Position of one cell along the list, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellFrame {
    pub x: f64,
    pub width: f64,
    pub height: f64,
}

impl CellFrame {
    pub fn center(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// Resolved geometry of the whole list for one container size.
#[derive(Debug, Clone, PartialEq)]
pub struct ListLayout {
    frames: Vec<CellFrame>,
    content_width: f64,
    insets: Insets,
    mode: ScrollMode,
    container: Size,
    item_spacing: f64,
}

impl ListLayout {
    pub fn compute<S: AsRef<str>>(
        items: &[S],
        container: Size,
        metrics: &CellMetrics,
        measure: &dyn TextMeasure,
    ) -> Self {
        let content_width = compute_content_width(items, metrics, measure);
        let (insets, mode) = section_insets(content_width, container.width);
        let item_spacing = metrics.item_spacing.max(0.0);

        let mut cursor = insets.leading;
        let frames = items
            .iter()
            .map(|item| {
                let size = cell_size(item.as_ref(), container.height, metrics, measure);
                let frame = CellFrame {
                    x: cursor,
                    width: size.width,
                    height: size.height,
                };
                cursor += size.width + item_spacing;
                frame
            })
            .collect();

        Self {
            frames,
            content_width,
            insets,
            mode,
            container,
            item_spacing,
        }
    }

    pub fn frames(&self) -> &[CellFrame] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<&CellFrame> {
        self.frames.get(index)
    }

    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn mode(&self) -> ScrollMode {
        self.mode
    }

    pub fn container(&self) -> Size {
        self.container
    }

    /// Full scrollable width including insets and the visual spacing.
    pub fn extent(&self) -> f64 {
        let gaps = self.frames.len().saturating_sub(1) as f64 * self.item_spacing;
        self.insets.leading + self.content_width + gaps + self.insets.trailing
    }

    pub fn max_offset(&self) -> f64 {
        (self.extent() - self.container.width).max(0.0)
    }

    /// Scroll offset that puts the cell at `index` in the horizontal center.
    pub fn centered_offset(&self, index: usize) -> f64 {
        match (self.mode, self.frames.get(index)) {
            (ScrollMode::Scrolling, Some(frame)) => {
                (frame.center() - self.container.width / 2.0).clamp(0.0, self.max_offset())
            }
            _ => 0.0,
        }
    }

    /// Indices of the cells intersecting the viewport at `offset`.
    pub fn visible_range(&self, offset: f64) -> Range<usize> {
        let right = offset + self.container.width;
        let start = self.frames.partition_point(|f| f.x + f.width <= offset);
        let end = self.frames.partition_point(|f| f.x < right);
        start..end.max(start)
    }
}
