use serde::Serialize;

use crate::{
    error::Result,
    loss::mse::MseLoss,
    network::network::Network,
    optim::sgd::Sgd,
};

/// Result of one backpropagation step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainStep {
    /// Activations of every stage from the forward pass that preceded the
    /// update; `outputs[0]` is the input, the last entry the prediction.
    pub outputs: Vec<Vec<f64>>,
    /// Half squared error of the prediction, averaged over the outputs.
    pub error: f64,
}

impl TrainStep {
    /// The network's prediction before the update.
    pub fn output(&self) -> &[f64] {
        self.outputs.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Trains `network` on one labelled example and updates every weight in place.
///
/// All deltas are computed from the unmodified weights before any update is
/// applied. Shape errors are reported before anything is written.
pub fn backprop(
    network: &mut Network,
    input: &[f64],
    expected: &[f64],
    learning_rate: f64,
) -> Result<TrainStep> {
    let pass = network.forward(input)?;
    network.check_expected(expected)?;

    let activation = network.activation;
    let last = network.layers().len() - 1;
    let output = &pass.activations[last + 1];
    let error = MseLoss::loss(output, expected)?;

    let mut deltas: Vec<Vec<f64>> = vec![Vec::new(); last + 1];

    // Output layer: slope at the weighted input times the raw error.
    deltas[last] = MseLoss::derivative(output, expected)?
        .into_iter()
        .zip(&pass.weighted_inputs[last])
        .map(|(err, &z)| activation.derivative_at(z) * err)
        .collect();

    // Hidden layers, last to first. Weight i + 1 of a downstream neuron is the
    // one reading neuron i of this layer.
    for l in (0..last).rev() {
        let downstream = &network.layers()[l + 1];
        let downstream_deltas = &deltas[l + 1];

        let current = pass.weighted_inputs[l]
            .iter()
            .enumerate()
            .map(|(i, &z)| {
                let carried: f64 = downstream
                    .neurons()
                    .iter()
                    .zip(downstream_deltas)
                    .map(|(neuron, delta)| neuron.weights()[i + 1] * delta)
                    .sum();
                activation.derivative_at(z) * carried
            })
            .collect();

        deltas[l] = current;
    }

    // Every width below was fixed by the forward pass, so no step can fail
    // after an earlier layer has been written.
    let optimizer = Sgd::new(learning_rate);
    for (l, layer) in network.layers_mut().iter_mut().enumerate() {
        optimizer.step(layer, &pass.activations[l], &deltas[l])?;
    }

    Ok(TrainStep {
        outputs: pass.activations,
        error,
    })
}
