pub mod activation;
pub mod dense;
pub mod matrix;
pub mod network;

pub use activation::Activation;
pub use dense::Layer;
pub use matrix::Matrix;
pub use network::{InputShape, ModelMetadata, Network};
