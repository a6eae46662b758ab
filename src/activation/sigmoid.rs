use std::f64::consts::E;

/// Logistic sigmoid, squashes any real value into (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// Derivative of the sigmoid expressed in terms of its own output.
///
/// `a` must already be activated, i.e. `a = sigmoid(z)`; the result is
/// `sigmoid'(z) = a * (1 - a)`.
pub fn sigmoid_prime(a: f64) -> f64 {
    a * (1.0 - a)
}
