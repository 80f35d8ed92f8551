// Writes a randomly-initialized model artifact matching
// `model/class_names.json`, so the app can be exercised end-to-end before
// trained weights exist. Predictions from it are noise; the artifact's value
// is that it satisfies every shape and integrity check.
//
// Run with:
//   cargo run --bin gen-model
//
// Produces `model/kaloriku_net.json`: 64x64 RGB input, one hidden ReLU
// layer, softmax output as wide as the label list.

use std::path::Path;

use rand::prelude::*;

use kaloriku::net::{Activation, InputShape, Layer, Matrix, ModelMetadata, Network};
use kaloriku::LabelSet;

const INPUT: InputShape = InputShape {
    width: 64,
    height: 64,
};
const HIDDEN: usize = 16;

fn main() {
    if let Err(message) = run() {
        eprintln!("gen-model: {}", message);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let labels =
        LabelSet::load_json(Path::new("model/class_names.json")).map_err(|e| e.to_string())?;

    let network = Network {
        layers: vec![
            random_layer(INPUT.flat_len(), HIDDEN, Activation::ReLU),
            random_layer(HIDDEN, labels.len(), Activation::Softmax),
        ],
        metadata: ModelMetadata { input: INPUT },
    };

    let out = Path::new("model/kaloriku_net.json");
    network
        .save_json(out)
        .map_err(|e| format!("could not write '{}': {}", out.display(), e))?;

    println!(
        "wrote {} ({} -> {} -> {} softmax)",
        out.display(),
        INPUT.flat_len(),
        HIDDEN,
        labels.len()
    );
    Ok(())
}

/// Uniform weights and biases in [-1, 1].
fn random_layer(input_size: usize, size: usize, activator: Activation) -> Layer {
    let mut rng = rand::thread_rng();
    let weights = (0..input_size)
        .map(|_| (0..size).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect())
        .collect();
    let biases = vec![(0..size).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect()];
    Layer {
        weights: Matrix::from_data(weights),
        biases: Matrix::from_data(biases),
        activator,
    }
}
