/// Hands out increasing sequence numbers to fetches so that only the
/// newest one is allowed to render.
#[derive(Debug, Default)]
pub struct RefreshSequence {
    issued: u64,
    settled: u64,
}

impl RefreshSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch and get its ticket.
    pub fn begin(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether the result for `seq` may be applied. A ticket is only
    /// current while no newer fetch has been started; it can settle once.
    pub fn accept(&mut self, seq: u64) -> bool {
        if seq == self.issued && seq > self.settled {
            self.settled = seq;
            true
        } else {
            false
        }
    }

    /// A fetch was started and its result has not arrived yet.
    pub fn in_flight(&self) -> bool {
        self.issued > self.settled
    }

    pub fn latest(&self) -> u64 {
        self.issued
    }
}
