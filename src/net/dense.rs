use serde::{Serialize, Deserialize};
use crate::net::{activation::Activation, matrix::Matrix};

/// One dense layer. `weights` is `(input_size × size)`, `biases` is
/// `(1 × size)`, matching the artifact layout.
///
/// Inference never mutates a layer, so `feed` borrows immutably and a loaded
/// network can be shared across request threads without a lock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer {
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: Activation,
}

impl Layer {
    /// Number of values this layer consumes.
    pub fn input_size(&self) -> usize {
        self.weights.rows
    }

    /// Number of values this layer produces.
    pub fn size(&self) -> usize {
        self.weights.cols
    }

    /// Computes `activation(x · W + b)` for one input row.
    pub fn feed(&self, input: &[f64]) -> Vec<f64> {
        let mut z = self.biases.data[0].clone();
        for (i, &x) in input.iter().enumerate() {
            for (j, zj) in z.iter_mut().enumerate() {
                *zj += x * self.weights.data[i][j];
            }
        }
        self.activator.apply(z)
    }
}
