pub const SETTLE_DELAY_MS: u32 = 50;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelayoutCause {
    VisibilityChange,
    Resize,
}

impl RelayoutCause {
    pub fn delay_ms(self) -> u32 {
        match self {
            RelayoutCause::VisibilityChange => SETTLE_DELAY_MS,
            RelayoutCause::Resize => RESIZE_DEBOUNCE_MS,
        }
    }
}

/// Single-slot model of the deferred full-grid relayout. Arming replaces any
/// pending entry; the host mirrors that by cancelling its one-shot timer and
/// starting a new one, so at most one timer is ever pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RelayoutScheduler {
    pending: Option<RelayoutCause>,
}

impl RelayoutScheduler {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Records a pending relayout and returns the delay the host timer must
    /// wait before firing it.
    pub fn arm(&mut self, cause: RelayoutCause) -> u32 {
        self.pending = Some(cause);
        cause.delay_ms()
    }

    pub fn fire(&mut self) -> Option<RelayoutCause> {
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<RelayoutCause> {
        self.pending
    }
}

impl Default for RelayoutScheduler {
    fn default() -> Self {
        Self::new()
    }
}
