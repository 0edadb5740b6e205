//! Picker trait definition
//!
//! A generic trait for focus-driven list selection.

/// A generic picker trait for list selection
///
/// Focus moves one item at a time and stops at either end; a remote's focus
/// engine does not wrap around.
///
/// # Example
///
/// ```ignore
/// struct Row {
///     items: Vec<String>,
///     focused: usize,
/// }
///
/// impl Picker for Row {
///     type Item = String;
///
///     fn items(&self) -> &[Self::Item] {
///         &self.items
///     }
///
///     fn focused_index(&self) -> Option<usize> {
///         Some(self.focused)
///     }
///
///     fn focus_index(&mut self, index: usize) {
///         self.focused = index;
///     }
/// }
/// ```
pub trait Picker {
    /// The type of items in the picker
    type Item;

    /// Get the list of items
    fn items(&self) -> &[Self::Item];

    /// Index of the focused item, `None` when focus is elsewhere
    fn focused_index(&self) -> Option<usize>;

    /// Move focus to the item at `index`
    fn focus_index(&mut self, index: usize);

    /// Get the number of items
    fn len(&self) -> usize {
        self.items().len()
    }

    /// Check if the picker is empty
    fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Focus the next item, staying on the last one
    fn focus_next(&mut self) {
        if let Some(index) = self.focused_index() {
            if index + 1 < self.len() {
                self.focus_index(index + 1);
            }
        }
    }

    /// Focus the previous item, staying on the first one
    fn focus_prev(&mut self) {
        if let Some(index) = self.focused_index().and_then(|i| i.checked_sub(1)) {
            self.focus_index(index);
        }
    }

    /// Get the focused item
    fn focused_item(&self) -> Option<&Self::Item> {
        self.items().get(self.focused_index()?)
    }
}
