use rand::Rng;
use tracing::debug;

use crate::activation::Activation;
use crate::error::{NetworkError, Result};
use crate::layers::dense::Layer;
use crate::loss::MseLoss;
use crate::train::trainer::{backprop, TrainStep};

/// A layered feedforward network with one shared activation.
///
/// The input stage is not materialised; `layers[0]` is the first hidden
/// layer and the last entry is the output layer.
///
/// Training mutates weights in place through `&mut self`. Sharing one network
/// between threads requires external synchronisation (a `Mutex` held for the
/// whole `train` call) or one network per worker.
#[derive(Debug, Clone)]
pub struct Network {
    /// Activation and derivative used by every layer. Replace it freely
    /// between calls; the pair travels together.
    pub activation: Activation,
    layers: Vec<Layer>,
}

/// Everything a single forward pass produces.
///
/// `activations[0]` is the raw input and `activations[k]` the output of layer
/// `k - 1`; `weighted_inputs[k]` holds layer `k`'s sums before activation.
#[derive(Debug, Clone)]
pub(crate) struct ForwardPass {
    pub activations: Vec<Vec<f64>>,
    pub weighted_inputs: Vec<Vec<f64>>,
}

impl Network {
    /// Builds a network with `inputs` inputs and one layer per entry of
    /// `layer_sizes`, weights drawn uniformly from [0, 1) with the thread RNG.
    pub fn new(inputs: usize, layer_sizes: &[usize]) -> Result<Network> {
        Network::with_rng(inputs, layer_sizes, &mut rand::thread_rng())
    }

    /// Same as [`Network::new`] but draws weights from `rng`.
    pub fn with_rng<R: Rng + ?Sized>(
        inputs: usize,
        layer_sizes: &[usize],
        rng: &mut R,
    ) -> Result<Network> {
        if inputs == 0 {
            return Err(NetworkError::NoInputs);
        }
        if layer_sizes.is_empty() {
            return Err(NetworkError::NoLayers);
        }
        if let Some(layer) = layer_sizes.iter().position(|&size| size == 0) {
            return Err(NetworkError::EmptyLayer { layer });
        }

        let mut previous = inputs;
        let layers = layer_sizes
            .iter()
            .map(|&size| {
                let layer = Layer::new(size, previous, rng);
                previous = size;
                layer
            })
            .collect();

        debug!(inputs, ?layer_sizes, "built network");

        Ok(Network {
            activation: Activation::SIGMOID,
            layers,
        })
    }

    /// Assembles a network from existing layers, checking that each layer
    /// reads exactly as many values as the one before it produces.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Network> {
        if layers.is_empty() {
            return Err(NetworkError::NoLayers);
        }
        if layers[0].input_size() == 0 {
            return Err(NetworkError::NoInputs);
        }
        for (i, pair) in layers.windows(2).enumerate() {
            if pair[1].input_size() != pair[0].size() {
                return Err(NetworkError::LayerWidthMismatch {
                    layer: i + 1,
                    expected: pair[1].input_size(),
                    actual: pair[0].size(),
                });
            }
        }

        Ok(Network {
            activation: Activation::SIGMOID,
            layers,
        })
    }

    /// Replaces the activation pair, builder style.
    pub fn with_activation(mut self, activation: Activation) -> Network {
        self.activation = activation;
        self
    }

    #[inline]
    pub fn input_size(&self) -> usize {
        self.layers[0].input_size()
    }

    #[inline]
    pub fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1].size()
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Weights of neuron `neuron` in layer `layer`, bias first. Values may be
    /// edited in place; the shape stays fixed.
    pub fn weights_mut(&mut self, layer: usize, neuron: usize) -> Option<&mut [f64]> {
        self.layers
            .get_mut(layer)?
            .neurons_mut()
            .get_mut(neuron)
            .map(|n| n.weights_mut())
    }

    pub(crate) fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    /// Total number of weights, biases included.
    pub fn weight_count(&self) -> usize {
        self.layers
            .iter()
            .map(|l| l.size() * (l.input_size() + 1))
            .sum()
    }

    /// Output of the last layer for `input`.
    pub fn run(&self, input: &[f64]) -> Result<Vec<f64>> {
        let mut outputs = self.all_outputs(input)?;
        Ok(outputs.pop().unwrap_or_default())
    }

    /// Activations of every stage: index 0 is `input` itself, index `k` the
    /// output of layer `k - 1`.
    pub fn all_outputs(&self, input: &[f64]) -> Result<Vec<Vec<f64>>> {
        Ok(self.forward(input)?.activations)
    }

    /// One step of backpropagation on a single labelled example.
    ///
    /// Weights are updated in place. The returned outputs are those computed
    /// before the update.
    pub fn train(&mut self, input: &[f64], expected: &[f64], learning_rate: f64) -> Result<TrainStep> {
        backprop(self, input, expected, learning_rate)
    }

    /// Mean per-example error over a dataset, without touching the weights.
    pub fn evaluate(&self, inputs: &[Vec<f64>], labels: &[Vec<f64>]) -> Result<f64> {
        if inputs.len() != labels.len() {
            return Err(NetworkError::DatasetMismatch {
                inputs: inputs.len(),
                labels: labels.len(),
            });
        }
        if inputs.is_empty() {
            return Err(NetworkError::EmptyDataset);
        }

        let mut total = 0.0;
        for (input, label) in inputs.iter().zip(labels) {
            let output = self.run(input)?;
            self.check_expected(label)?;
            total += MseLoss::loss(&output, label)?;
        }
        Ok(total / inputs.len() as f64)
    }

    pub(crate) fn check_expected(&self, expected: &[f64]) -> Result<()> {
        if expected.len() != self.output_size() {
            return Err(NetworkError::OutputWidthMismatch {
                expected: self.output_size(),
                actual: expected.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn check_input(&self, input: &[f64]) -> Result<()> {
        if input.len() != self.input_size() {
            return Err(NetworkError::InputWidthMismatch {
                expected: self.input_size(),
                actual: input.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn forward(&self, input: &[f64]) -> Result<ForwardPass> {
        self.check_input(input)?;

        let mut activations = Vec::with_capacity(self.layers.len() + 1);
        let mut weighted_inputs = Vec::with_capacity(self.layers.len());
        activations.push(input.to_vec());

        for layer in &self.layers {
            // Widths were checked at construction; only the input needs checking.
            let z = layer.weighted_inputs_unchecked(&activations[activations.len() - 1]);
            activations.push(z.iter().map(|&v| self.activation.apply(v)).collect());
            weighted_inputs.push(z);
        }

        Ok(ForwardPass { activations, weighted_inputs })
    }
}
