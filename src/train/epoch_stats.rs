use serde::{Serialize, Deserialize};

/// Per-epoch training statistics produced by `train_loop`.
///
/// Serializable so callers can stream progress as JSON lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean per-example error over the epoch, measured on each example just
    /// before its own update.
    pub train_error: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
