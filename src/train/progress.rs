/// Progress signal emitted by `train_network`.
///
/// One value is sent each time the number of completed iterations crosses a
/// 10% boundary, so a run with at least one iteration emits exactly ten of
/// them (10, 20, ..., 100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainProgress {
    /// Iterations completed so far.
    pub completed: usize,
    /// Total iterations requested for this run.
    pub total: usize,
    /// Decile reached, as a percentage.
    pub percent: u8,
}
