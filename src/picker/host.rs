//! Presentation hosts.
//!
//! The overlay is pushed when the host has a navigation stack and shown as
//! a modal otherwise. Either way the event contract is the same.

/// How an overlay was presented, and so how it is torn down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    Pushed,
    Modal,
}

/// Whatever the picker is presented from.
pub trait HostContext {
    fn has_navigation_stack(&self) -> bool;

    fn push_overlay(&mut self, title: &str);

    fn pop_overlay(&mut self);

    fn present_modal(&mut self, title: &str);

    fn dismiss_modal(&mut self);
}

/// Show an overlay on `host`, picking the strategy it supports.
pub fn present_on(host: &mut dyn HostContext, title: &str) -> Presentation {
    if host.has_navigation_stack() {
        host.push_overlay(title);
        Presentation::Pushed
    } else {
        host.present_modal(title);
        Presentation::Modal
    }
}

/// Tear down an overlay the same way it was shown.
pub fn dismiss_on(host: &mut dyn HostContext, presentation: Presentation) {
    match presentation {
        Presentation::Pushed => host.pop_overlay(),
        Presentation::Modal => host.dismiss_modal(),
    }
}

/// A host with an optional route stack and a single modal slot.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    stack: Option<Vec<String>>,
    modal: Option<String>,
}

impl Navigator {
    /// Host with a navigation stack rooted at `root`.
    pub fn with_stack(root: impl Into<String>) -> Self {
        Self {
            stack: Some(vec![root.into()]),
            modal: None,
        }
    }

    /// Host without a navigation stack; overlays are modal.
    pub fn modal_only() -> Self {
        Self::default()
    }

    /// Topmost pushed route.
    pub fn top(&self) -> Option<&str> {
        self.stack.as_ref()?.last().map(String::as_str)
    }

    pub fn depth(&self) -> usize {
        self.stack.as_ref().map_or(0, Vec::len)
    }

    pub fn modal(&self) -> Option<&str> {
        self.modal.as_deref()
    }
}

impl HostContext for Navigator {
    fn has_navigation_stack(&self) -> bool {
        self.stack.is_some()
    }

    fn push_overlay(&mut self, title: &str) {
        if let Some(stack) = &mut self.stack {
            stack.push(title.to_string());
        }
    }

    fn pop_overlay(&mut self) {
        if let Some(stack) = &mut self.stack {
            // Root stays
            if stack.len() > 1 {
                stack.pop();
            }
        }
    }

    fn present_modal(&mut self, title: &str) {
        self.modal = Some(title.to_string());
    }

    fn dismiss_modal(&mut self) {
        self.modal = None;
    }
}
