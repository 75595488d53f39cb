use thiserror::Error;

/// Everything that can go wrong while building, running or training a network.
///
/// All checks run before any weight is touched, so an `Err` always leaves the
/// network exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("a network needs at least one layer")]
    NoLayers,

    #[error("a network needs at least one input")]
    NoInputs,

    #[error("layer {layer} has no neurons")]
    EmptyLayer { layer: usize },

    #[error("a layer needs at least one neuron")]
    NoNeurons,

    #[error("a neuron needs at least a bias weight")]
    NoBias,

    #[error("neuron {neuron} reads {actual} inputs, but the layer reads {expected}")]
    RaggedLayer { neuron: usize, expected: usize, actual: usize },

    #[error("an output vector must not be empty")]
    EmptyOutput,

    #[error("got {actual} deltas for a layer of {expected} neurons")]
    DeltaWidthMismatch { expected: usize, actual: usize },

    #[error("layer count mismatch: expected {expected} inputs, but got {actual}")]
    InputWidthMismatch { expected: usize, actual: usize },

    #[error("expected output has {actual} values, but the output layer has {expected} neurons")]
    OutputWidthMismatch { expected: usize, actual: usize },

    #[error("layer {layer} expects {expected} inputs, but the previous stage produces {actual}")]
    LayerWidthMismatch { layer: usize, expected: usize, actual: usize },

    #[error("dataset has {inputs} inputs but {labels} labels")]
    DatasetMismatch { inputs: usize, labels: usize },

    #[error("dataset is empty")]
    EmptyDataset,
}

pub type Result<T> = std::result::Result<T, NetworkError>;
