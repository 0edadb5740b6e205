//! Result delivery.

/// Consumer of a picker's outcome.
///
/// The controller only ever holds a weak reference to its sink, so a sink
/// that has been dropped simply stops receiving events.
pub trait PickerResultSink {
    fn on_select(&self, item: &str, index: usize);

    /// Dismissal is automatic; most sinks have nothing to do here.
    fn on_cancel(&self) {}
}

/// Adapts a plain `on_select` closure into a sink.
pub struct SelectHandler<F> {
    on_select: F,
}

impl<F> SelectHandler<F>
where
    F: Fn(&str, usize),
{
    pub fn new(on_select: F) -> Self {
        Self { on_select }
    }
}

impl<F> PickerResultSink for SelectHandler<F>
where
    F: Fn(&str, usize),
{
    fn on_select(&self, item: &str, index: usize) {
        (self.on_select)(item, index);
    }
}

impl<F> std::fmt::Debug for SelectHandler<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectHandler").finish_non_exhaustive()
    }
}
