use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{NetworkError, Result};
use crate::network::network::Network;

/// Architecture of a network without its weights.
///
/// Fields:
/// - `inputs` — width of the input vector
/// - `layers` — neuron count of each layer, first hidden layer to output layer
///
/// Serializable so it can sit inside a caller's own configuration. It never
/// carries trained weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub inputs: usize,
    pub layers: Vec<usize>,
}

impl NetworkSpec {
    pub fn new(inputs: usize) -> NetworkSpec {
        NetworkSpec { inputs, layers: Vec::new() }
    }

    /// Appends a layer of `size` neurons.
    pub fn layer(mut self, size: usize) -> NetworkSpec {
        self.layers.push(size);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.inputs == 0 {
            return Err(NetworkError::NoInputs);
        }
        if self.layers.is_empty() {
            return Err(NetworkError::NoLayers);
        }
        if let Some(layer) = self.layers.iter().position(|&size| size == 0) {
            return Err(NetworkError::EmptyLayer { layer });
        }
        Ok(())
    }

    pub fn build(&self) -> Result<Network> {
        self.validate()?;
        Network::new(self.inputs, &self.layers)
    }

    pub fn build_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Network> {
        self.validate()?;
        Network::with_rng(self.inputs, &self.layers, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_layers() {
        let spec = NetworkSpec::new(2).layer(4).layer(1);
        assert_eq!(spec.layers, vec![4, 1]);

        let network = spec.build().unwrap();
        assert_eq!(network.input_size(), 2);
        assert_eq!(network.output_size(), 1);
    }

    #[test]
    fn validate_rejects_bad_shapes() {
        assert_eq!(NetworkSpec::new(2).validate(), Err(NetworkError::NoLayers));
        assert_eq!(NetworkSpec::new(0).layer(1).validate(), Err(NetworkError::NoInputs));
        assert_eq!(
            NetworkSpec::new(1).layer(3).layer(0).validate(),
            Err(NetworkError::EmptyLayer { layer: 1 })
        );
    }

    #[test]
    fn reads_from_json() {
        let spec: NetworkSpec = serde_json::from_str(r#"{"inputs": 1, "layers": [10, 1]}"#).unwrap();
        assert_eq!(spec, NetworkSpec::new(1).layer(10).layer(1));
    }
}
