//! Focus traversal between the cell list and the cancel control.

/// Something in the overlay that can hold focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Cell(usize),
    Cancel,
}

/// Directional input from the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideTarget {
    List,
    Cancel,
}

/// Transparent passthrough region spanning the list width on the cancel
/// row. Vertical moves that cross it are redirected to its preferred
/// target, so focus never has to line up with the cancel control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusGuide {
    preferred: GuideTarget,
}

impl Default for FocusGuide {
    fn default() -> Self {
        Self {
            preferred: GuideTarget::Cancel,
        }
    }
}

impl FocusGuide {
    pub fn preferred(&self) -> GuideTarget {
        self.preferred
    }

    /// Point the guide at whichever side does not currently hold focus.
    pub fn update(&mut self, focused: FocusTarget) {
        self.preferred = match focused {
            FocusTarget::Cancel => GuideTarget::List,
            FocusTarget::Cell(_) => GuideTarget::Cancel,
        };
    }
}

/// Focus state of one overlay.
#[derive(Debug, Clone)]
pub struct FocusModel {
    item_count: usize,
    default_index: Option<usize>,
    current: FocusTarget,
    last_cell: Option<usize>,
    guide: FocusGuide,
}

impl FocusModel {
    pub fn new(item_count: usize, initial_selection: usize) -> Self {
        let default_index = (initial_selection < item_count).then_some(initial_selection);
        let mut model = Self {
            item_count,
            default_index,
            current: FocusTarget::Cancel,
            last_cell: None,
            guide: FocusGuide::default(),
        };
        model.set(model.initial_target());
        model
    }

    /// Cell that should receive focus first; `None` when the requested
    /// initial selection is out of range.
    pub fn preferred_focus(&self) -> Option<usize> {
        self.default_index
    }

    /// Where focus starts: the preferred cell, else the first cell, else
    /// the cancel control for an empty list.
    pub fn initial_target(&self) -> FocusTarget {
        match (self.default_index, self.item_count) {
            (Some(index), _) => FocusTarget::Cell(index),
            (None, 0) => FocusTarget::Cancel,
            (None, _) => FocusTarget::Cell(0),
        }
    }

    pub fn current(&self) -> FocusTarget {
        self.current
    }

    pub fn guide(&self) -> &FocusGuide {
        &self.guide
    }

    /// Target reached by moving in `direction`, or `None` when focus stays.
    pub fn resolve(&self, direction: Direction) -> Option<FocusTarget> {
        match (self.current, direction) {
            (FocusTarget::Cell(index), Direction::Left) => {
                index.checked_sub(1).map(FocusTarget::Cell)
            }
            (FocusTarget::Cell(index), Direction::Right) => {
                (index + 1 < self.item_count).then_some(FocusTarget::Cell(index + 1))
            }
            // The guide points at cancel whenever a cell holds focus
            (FocusTarget::Cell(_), Direction::Down) => Some(FocusTarget::Cancel),
            (FocusTarget::Cancel, Direction::Up) => match self.guide.preferred {
                GuideTarget::List if self.item_count > 0 => {
                    let index = self.last_cell.or(self.default_index).unwrap_or(0);
                    Some(FocusTarget::Cell(index))
                }
                _ => None,
            },
            _ => None,
        }
    }

    /// Move focus to `target`, returning the previous target.
    pub fn set(&mut self, target: FocusTarget) -> FocusTarget {
        let previous = self.current;
        self.current = target;
        if let FocusTarget::Cell(index) = target {
            self.last_cell = Some(index);
        }
        self.guide.update(target);
        previous
    }
}
