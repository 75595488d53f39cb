use serde::{Serialize, Deserialize};

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`        — number of full passes over the training data
/// - `learning_rate` — step size handed to every backpropagation step
/// - `shuffle`       — visit examples in a fresh random order each epoch
/// - `log_interval`  — emit an `info` event every this many epochs; 0 disables
/// - `target_error`  — stop early once an epoch's mean error drops below this
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    #[serde(default)]
    pub shuffle: bool,
    #[serde(default)]
    pub log_interval: usize,
    #[serde(default)]
    pub target_error: Option<f64>,
}

impl TrainConfig {
    /// Creates a config that visits examples in order, never logs and never
    /// stops early.
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig {
            epochs,
            learning_rate,
            shuffle: false,
            log_interval: 0,
            target_error: None,
        }
    }

    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    pub fn log_interval(mut self, every: usize) -> Self {
        self.log_interval = every;
        self
    }

    pub fn target_error(mut self, target: f64) -> Self {
        self.target_error = Some(target);
        self
    }
}
