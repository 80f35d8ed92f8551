use serde::{Serialize, Deserialize};

/// Activation applied by a dense layer after its affine transform.
///
/// `Softmax` is vector-valued, so activations are applied to the whole
/// pre-activation vector at once; the element-wise variants simply map each
/// value independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Activation {
    Sigmoid,
    ReLU,
    Identity,
    Softmax,
}

impl Activation {
    /// Applies the activation to a full pre-activation vector.
    pub fn apply(&self, z: Vec<f64>) -> Vec<f64> {
        match self {
            Activation::Sigmoid => z.into_iter().map(|x| 1.0 / (1.0 + (-x).exp())).collect(),
            Activation::ReLU => z.into_iter().map(|x| if x > 0.0 { x } else { 0.0 }).collect(),
            Activation::Identity => z,
            Activation::Softmax => softmax(z),
        }
    }
}

/// Numerically stable softmax: shift by the max before exponentiating.
fn softmax(z: Vec<f64>) -> Vec<f64> {
    let max = z.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = z.into_iter().map(|x| (x - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}
