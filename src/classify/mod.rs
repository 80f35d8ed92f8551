use crate::net::{InputShape, Network};
use crate::vision::{preprocess, DecodedImage};

/// Index and probability mass selected from a probability vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub class_index: usize,
    pub confidence: f64,
}

/// The classifier adapter: a decoded photo in, a deterministic top-1
/// prediction out. Resizing and normalization happen here so callers never
/// see pixel vectors.
#[derive(Debug, Clone)]
pub struct Classifier {
    network: Network,
}

impl Classifier {
    pub fn new(network: Network) -> Classifier {
        Classifier { network }
    }

    pub fn input_shape(&self) -> InputShape {
        self.network.input_shape()
    }

    pub fn output_width(&self) -> usize {
        self.network.output_width()
    }

    /// True when the network's output layer yields a probability
    /// distribution (softmax).
    pub fn has_probability_output(&self) -> bool {
        self.network.has_softmax_output()
    }

    /// Full probability distribution over the label indices.
    pub fn probabilities(&self, photo: &DecodedImage) -> Vec<f64> {
        let input = preprocess::to_model_input(photo, self.input_shape());
        self.network.forward(input)
    }

    /// Top-1 prediction for a photo.
    pub fn predict(&self, photo: &DecodedImage) -> Prediction {
        argmax(&self.probabilities(photo))
    }
}

/// Selects the highest-probability index.
///
/// The scan keeps the first maximum it sees (strictly-greater comparison),
/// so exact ties resolve to the lowest index and the same vector always
/// yields the same prediction.
pub fn argmax(probabilities: &[f64]) -> Prediction {
    let mut class_index = 0;
    let mut confidence = probabilities.first().copied().unwrap_or(0.0);
    for (i, &p) in probabilities.iter().enumerate().skip(1) {
        if p > confidence {
            class_index = i;
            confidence = p;
        }
    }
    Prediction {
        class_index,
        confidence,
    }
}
