use image::imageops::FilterType;

use crate::net::InputShape;
use crate::vision::validate::DecodedImage;

/// Converts a decoded photo into the flat vector the classifier consumes:
/// resized to the model's declared dimensions with Lanczos3 and flattened as
/// `[r, g, b, r, g, b, ...]`, normalized to [0, 1].
pub fn to_model_input(photo: &DecodedImage, shape: InputShape) -> Vec<f64> {
    let resized = image::imageops::resize(
        photo.raster(),
        shape.width,
        shape.height,
        FilterType::Lanczos3,
    );
    resized
        .pixels()
        .flat_map(|p| p.0.iter().map(|&c| c as f64 / 255.0))
        .collect()
}
