use std::time::Instant;

use rand::seq::SliceRandom;
use tracing::info;

use crate::error::{NetworkError, Result};
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::backprop;

/// Trains `network` for up to `config.epochs` epochs of online SGD and
/// returns the statistics of every completed epoch.
///
/// Each example is a separate backpropagation step with an immediate update;
/// nothing is batched.
///
/// # Early termination
/// Stops after the first epoch whose mean error is below
/// `config.target_error`, if one is set.
///
/// # Errors
/// Rejects empty or mismatched datasets and any example of the wrong width
/// before the first update, so an `Err` leaves `network` untouched.
pub fn train_loop(
    network: &mut Network,
    inputs: &[Vec<f64>],
    labels: &[Vec<f64>],
    config: &TrainConfig,
) -> Result<Vec<EpochStats>> {
    if inputs.len() != labels.len() {
        return Err(NetworkError::DatasetMismatch {
            inputs: inputs.len(),
            labels: labels.len(),
        });
    }
    if inputs.is_empty() {
        return Err(NetworkError::EmptyDataset);
    }
    for (input, label) in inputs.iter().zip(labels) {
        network.check_input(input)?;
        network.check_expected(label)?;
    }

    let mut history = Vec::with_capacity(config.epochs);
    let mut order: Vec<usize> = (0..inputs.len()).collect();
    let mut rng = rand::thread_rng();

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        if config.shuffle {
            order.shuffle(&mut rng);
        }

        let mut total = 0.0;
        for &idx in &order {
            total += backprop(network, &inputs[idx], &labels[idx], config.learning_rate)?.error;
        }

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            train_error: total / inputs.len() as f64,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };

        if config.log_interval > 0 && epoch % config.log_interval == 0 {
            info!(epoch, error = stats.train_error, "epoch complete");
        }

        let reached = config.target_error.is_some_and(|target| stats.train_error < target);
        history.push(stats);

        if reached {
            info!(epoch, "target error reached, stopping early");
            break;
        }
    }

    Ok(history)
}
