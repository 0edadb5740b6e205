//! Picker cells and the pool that recycles them.

use std::collections::BTreeMap;
use std::ops::Range;
use std::time::Instant;

use super::animation::{ScaleAnimator, Spring};

pub const DEFAULT_FOCUSED_SCALE: f64 = 1.2;
pub const DEFAULT_PRESSED_SCALE: f64 = 0.9;

/// Visual feedback state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellVisualState {
    #[default]
    Idle,
    Focused,
    Pressed,
}

/// One focusable, pressable cell showing a single label.
///
/// Every transition method returns `true` only when the state actually
/// changed, so calling one twice in the same state is a no-op.
#[derive(Debug, Clone)]
pub struct PickerCell {
    label: Option<String>,
    state: CellVisualState,
    scale: ScaleAnimator,
    focused_scale: f64,
    pressed_scale: f64,
}

impl Default for PickerCell {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUSED_SCALE, DEFAULT_PRESSED_SCALE)
    }
}

impl PickerCell {
    pub fn new(focused_scale: f64, pressed_scale: f64) -> Self {
        Self {
            label: None,
            state: CellVisualState::Idle,
            scale: ScaleAnimator::new(Spring::default()),
            focused_scale,
            pressed_scale,
        }
    }

    pub fn set_item(&mut self, text: impl Into<String>) {
        self.label = Some(text.into());
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn current_visual_state(&self) -> CellVisualState {
        self.state
    }

    /// Background is filled while the cell holds focus (pressed included).
    pub fn is_highlighted(&self) -> bool {
        self.state != CellVisualState::Idle
    }

    pub fn target_scale(&self) -> f64 {
        self.scale.target()
    }

    pub fn scale_at(&self, now: Instant) -> f64 {
        self.scale.value_at(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.scale.is_animating(now)
    }

    /// Focus moved onto this cell.
    pub fn focus(&mut self, now: Instant) -> bool {
        if self.state != CellVisualState::Idle {
            return false;
        }
        self.state = CellVisualState::Focused;
        self.scale.animate_to(self.focused_scale, now);
        true
    }

    /// Focus moved away; also ends a press that was still held.
    pub fn unfocus(&mut self, now: Instant) -> bool {
        if self.state == CellVisualState::Idle {
            return false;
        }
        self.state = CellVisualState::Idle;
        self.scale.animate_to(1.0, now);
        true
    }

    pub fn press_begin(&mut self, now: Instant) -> bool {
        if self.state != CellVisualState::Focused {
            return false;
        }
        self.state = CellVisualState::Pressed;
        self.scale.animate_to(self.pressed_scale, now);
        true
    }

    pub fn press_end(&mut self, now: Instant) -> bool {
        if self.state != CellVisualState::Pressed {
            return false;
        }
        self.state = CellVisualState::Focused;
        self.scale.animate_to(self.focused_scale, now);
        true
    }

    /// Reset before showing a different item: no label, idle, unscaled.
    pub fn prepare_for_reuse(&mut self) {
        self.label = None;
        self.state = CellVisualState::Idle;
        self.scale.snap(1.0);
    }
}

/// Recycling pool binding item indices to cell instances.
#[derive(Debug)]
pub struct CellPool {
    cells: Vec<PickerCell>,
    bound: BTreeMap<usize, usize>,
    free: Vec<usize>,
    focused_scale: f64,
    pressed_scale: f64,
}

impl Default for CellPool {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUSED_SCALE, DEFAULT_PRESSED_SCALE)
    }
}

impl CellPool {
    pub fn new(focused_scale: f64, pressed_scale: f64) -> Self {
        Self {
            cells: vec![],
            bound: BTreeMap::new(),
            free: vec![],
            focused_scale,
            pressed_scale,
        }
    }

    /// Cell showing item `index`, reusing a free cell when one exists.
    pub fn dequeue(&mut self, index: usize, text: &str) -> &mut PickerCell {
        let slot = match self.bound.get(&index).copied() {
            Some(slot) => slot,
            None => {
                let slot = match self.free.pop() {
                    Some(slot) => {
                        self.cells[slot].prepare_for_reuse();
                        slot
                    }
                    None => {
                        self.cells
                            .push(PickerCell::new(self.focused_scale, self.pressed_scale));
                        self.cells.len() - 1
                    }
                };
                self.cells[slot].set_item(text);
                self.bound.insert(index, slot);
                slot
            }
        };
        &mut self.cells[slot]
    }

    /// Release the cell bound to item `index`, if any.
    pub fn recycle(&mut self, index: usize) {
        if let Some(slot) = self.bound.remove(&index) {
            self.free.push(slot);
        }
    }

    /// Recycle every bound cell whose item is outside `visible`.
    pub fn retain_visible(&mut self, visible: &Range<usize>) {
        let gone: Vec<usize> = self
            .bound
            .keys()
            .copied()
            .filter(|index| !visible.contains(index))
            .collect();
        for index in gone {
            self.recycle(index);
        }
    }

    pub fn cell(&self, index: usize) -> Option<&PickerCell> {
        self.bound.get(&index).map(|&slot| &self.cells[slot])
    }

    pub fn cell_mut(&mut self, index: usize) -> Option<&mut PickerCell> {
        self.bound.get(&index).map(|&slot| &mut self.cells[slot])
    }

    /// Bound cells in item order.
    pub fn bound(&self) -> impl Iterator<Item = (usize, &PickerCell)> {
        self.bound
            .iter()
            .map(|(&index, &slot)| (index, &self.cells[slot]))
    }

    /// Number of cell instances ever created.
    pub fn allocated(&self) -> usize {
        self.cells.len()
    }
}
