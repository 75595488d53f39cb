use std::f64::consts::E;
use std::fmt;

/// Hard step: 0 for negative input, 1 otherwise.
///
/// Not differentiable, so it never appears in an [`Activation`] pair.
pub fn threshold(x: f64) -> f64 {
    if x < 0.0 { 0.0 } else { 1.0 }
}

/// Logistic sigmoid, `1 / (1 + e^-x)`.
///
/// Large magnitudes saturate to 0 or 1; that is floating-point behaviour,
/// not an error.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of [`sigmoid`], evaluated at the weighted input `x`.
pub fn sigmoid_prime(x: f64) -> f64 {
    let fx = sigmoid(x);
    fx * (1.0 - fx)
}

fn tanh(x: f64) -> f64 {
    x.tanh()
}

fn tanh_prime(x: f64) -> f64 {
    let t = x.tanh();
    1.0 - t * t
}

fn identity(x: f64) -> f64 {
    x
}

fn identity_prime(_: f64) -> f64 {
    1.0
}

/// An activation function travelling together with its derivative.
///
/// The network applies `function` to every weighted input on the way forward
/// and `derivative` to the same weighted input on the way back. Keeping the
/// two in one value means swapping the activation always swaps both.
#[derive(Clone, Copy)]
pub struct Activation {
    pub function: fn(f64) -> f64,
    pub derivative: fn(f64) -> f64,
}

impl Activation {
    pub const SIGMOID: Activation = Activation {
        function: sigmoid,
        derivative: sigmoid_prime,
    };

    pub const TANH: Activation = Activation {
        function: tanh,
        derivative: tanh_prime,
    };

    pub const IDENTITY: Activation = Activation {
        function: identity,
        derivative: identity_prime,
    };

    /// Pairs a custom activation with its derivative.
    ///
    /// The caller guarantees that `derivative` is the exact derivative of
    /// `function`. Nothing here can verify that; a mismatched pair makes
    /// backpropagation follow the wrong gradient.
    pub fn new(function: fn(f64) -> f64, derivative: fn(f64) -> f64) -> Activation {
        Activation { function, derivative }
    }

    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        (self.function)(x)
    }

    #[inline]
    pub fn derivative_at(&self, x: f64) -> f64 {
        (self.derivative)(x)
    }
}

impl Default for Activation {
    fn default() -> Self {
        Activation::SIGMOID
    }
}

impl fmt::Debug for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Activation").finish_non_exhaustive()
    }
}
