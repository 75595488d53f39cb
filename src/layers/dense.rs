use rand::Rng;

use crate::activation::Activation;
use crate::error::{NetworkError, Result};
use crate::layers::neuron::Neuron;

/// A fully connected layer: neurons that all read the same input vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    /// Callers guarantee `size > 0`; `Network` validates sizes first.
    pub(crate) fn new<R: Rng + ?Sized>(size: usize, input_size: usize, rng: &mut R) -> Layer {
        assert!(size > 0, "a layer needs at least one neuron");
        let neurons = (0..size).map(|_| Neuron::random(input_size, rng)).collect();
        Layer { neurons }
    }

    /// Groups existing neurons into a layer.
    ///
    /// Fails if there are no neurons or they disagree on input width.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Layer> {
        let width = neurons.first().ok_or(NetworkError::NoNeurons)?.input_size();
        if let Some(neuron) = neurons.iter().position(|n| n.input_size() != width) {
            return Err(NetworkError::RaggedLayer {
                neuron,
                expected: width,
                actual: neurons[neuron].input_size(),
            });
        }
        Ok(Layer { neurons })
    }

    /// Number of neurons, which is also the width of this layer's output.
    #[inline]
    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    /// Width of the input vector every neuron reads.
    #[inline]
    pub fn input_size(&self) -> usize {
        self.neurons[0].input_size()
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub(crate) fn neurons_mut(&mut self) -> &mut [Neuron] {
        &mut self.neurons
    }

    /// Weighted input of every neuron, before activation.
    pub fn weighted_inputs(&self, input: &[f64]) -> Result<Vec<f64>> {
        self.check_width(input)?;
        Ok(self.weighted_inputs_unchecked(input))
    }

    /// Weighted inputs passed through `activation`.
    pub fn feed_from(&self, input: &[f64], activation: &Activation) -> Result<Vec<f64>> {
        Ok(self
            .weighted_inputs(input)?
            .into_iter()
            .map(|z| activation.apply(z))
            .collect())
    }

    pub(crate) fn weighted_inputs_unchecked(&self, input: &[f64]) -> Vec<f64> {
        self.neurons.iter().map(|n| n.input_unchecked(input)).collect()
    }

    fn check_width(&self, input: &[f64]) -> Result<()> {
        if input.len() != self.input_size() {
            return Err(NetworkError::InputWidthMismatch {
                expected: self.input_size(),
                actual: input.len(),
            });
        }
        Ok(())
    }
}
