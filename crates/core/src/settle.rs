/// Busy gate that rejects moves while the previous one is still settling.
///
/// Time is supplied by the caller in milliseconds from any monotonic origin.
#[derive(Debug, Clone)]
pub struct SettleGate {
    delay_ms: u64,
    busy_until_ms: Option<u64>,
}

impl SettleGate {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            busy_until_ms: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Whether a move arriving at `now_ms` must be rejected.
    pub fn is_settling(&self, now_ms: u64) -> bool {
        self.busy_until_ms.is_some_and(|until| now_ms < until)
    }

    /// Mark a move as started at `now_ms`.
    pub fn arm(&mut self, now_ms: u64) {
        if self.delay_ms == 0 {
            self.busy_until_ms = None;
            return;
        }
        self.busy_until_ms = Some(now_ms.saturating_add(self.delay_ms));
    }

    /// Drop the busy flag if the delay has elapsed. Returns true if it was cleared.
    pub fn settle(&mut self, now_ms: u64) -> bool {
        match self.busy_until_ms {
            Some(until) if now_ms >= until => {
                self.busy_until_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.busy_until_ms = None;
    }
}
