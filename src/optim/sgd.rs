use crate::error::{NetworkError, Result};
use crate::layers::dense::Layer;

/// Plain stochastic gradient descent: every example updates the weights
/// immediately, scaled by `learning_rate`.
#[derive(Debug, Clone, Copy)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one update to `layer`.
    ///
    /// `inputs` is the activation vector the layer consumed during the forward
    /// pass and `deltas` holds one error signal per neuron. Widths are checked
    /// before any weight is written.
    pub fn step(&self, layer: &mut Layer, inputs: &[f64], deltas: &[f64]) -> Result<()> {
        if inputs.len() != layer.input_size() {
            return Err(NetworkError::InputWidthMismatch {
                expected: layer.input_size(),
                actual: inputs.len(),
            });
        }
        if deltas.len() != layer.size() {
            return Err(NetworkError::DeltaWidthMismatch {
                expected: layer.size(),
                actual: deltas.len(),
            });
        }

        for (neuron, &delta) in layer.neurons_mut().iter_mut().zip(deltas) {
            neuron.update_unchecked(inputs, self.learning_rate, delta);
        }
        Ok(())
    }
}
