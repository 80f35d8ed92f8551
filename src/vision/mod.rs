pub mod preprocess;
pub mod validate;

pub use preprocess::to_model_input;
pub use validate::{content_type_of, decode_upload, DecodedImage, UploadedImage};
