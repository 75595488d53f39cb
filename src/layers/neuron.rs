use rand::Rng;

use crate::error::{NetworkError, Result};

/// A single unit: one bias weight followed by one weight per input.
///
/// `weights[0]` is the bias, `weights[i + 1]` scales input `i`. The length is
/// fixed at construction; training only rewrites values.
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<f64>,
}

impl Neuron {
    /// A neuron for `input_size` inputs, every weight (bias included) drawn
    /// uniformly from [0, 1).
    pub fn random<R: Rng + ?Sized>(input_size: usize, rng: &mut R) -> Neuron {
        let weights = (0..=input_size).map(|_| rng.gen::<f64>()).collect();
        Neuron { weights }
    }

    /// Builds a neuron from explicit weights, bias first.
    ///
    /// Fails with `NoBias` if `weights` is empty.
    pub fn from_weights(weights: Vec<f64>) -> Result<Neuron> {
        if weights.is_empty() {
            return Err(NetworkError::NoBias);
        }
        Ok(Neuron { weights })
    }

    /// Number of inputs this neuron consumes (its weight count minus the bias).
    #[inline]
    pub fn input_size(&self) -> usize {
        self.weights.len() - 1
    }

    #[inline]
    pub fn bias(&self) -> f64 {
        self.weights[0]
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Mutable view of the weights. A slice, so values may change but the
    /// length may not.
    pub fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }

    /// Weighted input: `bias + Σ weight[i + 1] * inputs[i]`.
    pub fn input(&self, inputs: &[f64]) -> Result<f64> {
        self.check_width(inputs)?;
        Ok(self.input_unchecked(inputs))
    }

    /// Gradient step: `bias += rate * delta`, `weight[i + 1] += rate * inputs[i] * delta`.
    pub fn update(&mut self, inputs: &[f64], rate: f64, delta: f64) -> Result<()> {
        self.check_width(inputs)?;
        self.update_unchecked(inputs, rate, delta);
        Ok(())
    }

    #[inline]
    pub(crate) fn input_unchecked(&self, inputs: &[f64]) -> f64 {
        self.weights[1..]
            .iter()
            .zip(inputs)
            .fold(self.weights[0], |sum, (w, x)| sum + w * x)
    }

    #[inline]
    pub(crate) fn update_unchecked(&mut self, inputs: &[f64], rate: f64, delta: f64) {
        let step = rate * delta;
        self.weights[0] += step;
        for (w, x) in self.weights[1..].iter_mut().zip(inputs) {
            *w += step * x;
        }
    }

    fn check_width(&self, inputs: &[f64]) -> Result<()> {
        if inputs.len() != self.input_size() {
            return Err(NetworkError::InputWidthMismatch {
                expected: self.input_size(),
                actual: inputs.len(),
            });
        }
        Ok(())
    }
}
