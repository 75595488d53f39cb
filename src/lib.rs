//! A minimal multilayer feedforward network trained with backpropagation.
//!
//! ```no_run
//! use backprop_nn::Network;
//!
//! let mut network = Network::new(2, &[3, 1]).unwrap();
//! let step = network.train(&[0.0, 1.0], &[1.0], 0.5).unwrap();
//! println!("error before update: {}", step.error);
//! println!("prediction now: {:?}", network.run(&[0.0, 1.0]).unwrap());
//! ```

pub mod activation;
pub mod error;
pub mod layers;
pub mod loss;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::{sigmoid, sigmoid_prime, threshold, Activation};
pub use error::{NetworkError, Result};
pub use layers::{Layer, Neuron};
pub use loss::MseLoss;
pub use network::{Network, NetworkSpec};
pub use optim::Sgd;
pub use train::{backprop, train_loop, EpochStats, TrainConfig, TrainStep};
