use std::path::Path;
use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::net::activation::Activation;
use crate::net::dense::Layer;

/// Pixel dimensions the model expects its RGB input resized to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputShape {
    pub width: u32,
    pub height: u32,
}

impl InputShape {
    /// Flattened input length: three channel values per pixel.
    pub fn flat_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }
}

/// Metadata stored alongside the weights in the model artifact. The input
/// shape is part of the artifact's external contract, so it travels with the
/// weights rather than living in application config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub input: InputShape,
}

/// A pre-trained feed-forward network loaded from a JSON weights artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Layer>,
    pub metadata: ModelMetadata,
}

impl Network {
    /// Loads a model artifact, checking that its internal shapes line up.
    ///
    /// Every failure is `ModelUnavailable`: there is no inference without the
    /// model, so callers treat it as fatal at startup.
    pub fn load_json(path: &Path) -> Result<Network> {
        let unavailable = |reason: String| Error::ModelUnavailable {
            path: path.display().to_string(),
            reason,
        };
        let file = std::fs::File::open(path).map_err(|e| unavailable(e.to_string()))?;
        let reader = std::io::BufReader::new(file);
        let network: Network =
            serde_json::from_reader(reader).map_err(|e| unavailable(e.to_string()))?;
        network.check_shapes().map_err(unavailable)?;
        Ok(network)
    }

    /// Serializes the network to a pretty-printed JSON artifact.
    pub fn save_json(&self, path: &Path) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Forward pass. The network is immutable; each layer writes its
    /// activations into a fresh vector.
    pub fn forward(&self, input: Vec<f64>) -> Vec<f64> {
        let mut current = input;
        for layer in &self.layers {
            current = layer.feed(&current);
        }
        current
    }

    pub fn input_shape(&self) -> InputShape {
        self.metadata.input
    }

    /// Width of the output vector, i.e. the number of classes.
    pub fn output_width(&self) -> usize {
        self.layers.last().map(|l| l.size()).unwrap_or(0)
    }

    /// True when the final layer produces a probability distribution.
    pub fn has_softmax_output(&self) -> bool {
        self.layers
            .last()
            .map(|l| l.activator == Activation::Softmax)
            .unwrap_or(false)
    }

    fn check_shapes(&self) -> std::result::Result<(), String> {
        if self.layers.is_empty() {
            return Err("artifact contains no layers".to_owned());
        }
        for (i, layer) in self.layers.iter().enumerate() {
            if !layer.weights.is_consistent() {
                return Err(format!(
                    "layer {} weights do not match their declared {}x{} shape",
                    i + 1,
                    layer.weights.rows,
                    layer.weights.cols
                ));
            }
            if layer.biases.rows != 1
                || !layer.biases.is_consistent()
                || layer.biases.cols != layer.size()
            {
                return Err(format!(
                    "layer {} biases must be a 1x{} row",
                    i + 1,
                    layer.size()
                ));
            }
        }
        for (i, pair) in self.layers.windows(2).enumerate() {
            if pair[1].input_size() != pair[0].size() {
                return Err(format!(
                    "layer {} produces {} values but layer {} expects {}",
                    i + 1,
                    pair[0].size(),
                    i + 2,
                    pair[1].input_size()
                ));
            }
        }
        let declared = self.metadata.input.flat_len();
        if self.layers[0].input_size() != declared {
            return Err(format!(
                "first layer expects {} inputs but the declared {}x{} RGB input flattens to {}",
                self.layers[0].input_size(),
                self.metadata.input.width,
                self.metadata.input.height,
                declared
            ));
        }
        Ok(())
    }
}
