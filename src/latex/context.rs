//! Enter-step results and pending closers.
//!
//! Many nodes can only decide their closing markup while they are being
//! entered: a title closes differently depending on its parent, a target
//! only closes the anchors it actually opened. The enter step returns that
//! text as a [`Closer`] and the walker appends it after the children, so
//! every opened closer is emitted exactly once, in tree order.

use std::borrow::Cow;

/// Closing text computed when a node is entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Closer(Cow<'static, str>);

impl Closer {
    /// A closer that emits nothing.
    pub const NONE: Closer = Closer(Cow::Borrowed(""));

    pub fn new(text: &'static str) -> Self {
        Closer(Cow::Borrowed(text))
    }

    pub fn owned(text: String) -> Self {
        Closer(Cow::Owned(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// What the walker does after a node's enter step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The node is terminal: its output is complete, children are not
    /// visited and no exit step runs.
    Skip,
    /// Visit the children, run the exit step, then emit the closer.
    Descend(Closer),
}

impl Step {
    /// Descend with a fixed closing text.
    pub fn close_with(text: &'static str) -> Self {
        Step::Descend(Closer::new(text))
    }

    /// Descend without closing text.
    pub fn descend() -> Self {
        Step::Descend(Closer::NONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closer_none_is_empty() {
        assert!(Closer::NONE.is_empty());
        assert_eq!(Closer::default(), Closer::NONE);
    }

    #[test]
    fn test_step_constructors() {
        assert_eq!(Step::close_with("}"), Step::Descend(Closer::new("}")));
        assert_eq!(Step::descend(), Step::Descend(Closer::NONE));
        assert_eq!(Closer::owned("]x".to_string()).as_str(), "]x");
    }
}
