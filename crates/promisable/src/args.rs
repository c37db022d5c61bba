/// Ordered positional arguments for a callback-style call.
///
/// `has_trailing_callback_slot` marks that the last entry is the caller's
/// reserved callback position rather than a real argument; it is dropped
/// before forwarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallArgs<A> {
    args: Vec<A>,
    has_trailing_callback_slot: bool,
}

impl<A> CallArgs<A> {
    /// Arguments that are all forwarded.
    pub fn new(args: Vec<A>) -> Self {
        Self {
            args,
            has_trailing_callback_slot: false,
        }
    }

    /// Arguments whose last entry is a callback slot.
    pub fn with_callback_slot(args: Vec<A>) -> Self {
        Self {
            args,
            has_trailing_callback_slot: true,
        }
    }

    pub fn has_trailing_callback_slot(&self) -> bool {
        self.has_trailing_callback_slot
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Consumes the list, returning the arguments to forward.
    pub fn forwarded(mut self) -> Vec<A> {
        if self.has_trailing_callback_slot {
            self.args.pop();
        }
        self.args
    }
}

impl<A> From<Vec<A>> for CallArgs<A> {
    fn from(args: Vec<A>) -> Self {
        Self::new(args)
    }
}

impl<A> Default for CallArgs<A> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
