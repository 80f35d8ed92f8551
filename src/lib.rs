pub mod calories;
pub mod classify;
pub mod error;
pub mod estimate;
pub mod labels;
pub mod net;
pub mod vision;
pub mod wizard;

// Convenience re-exports
pub use calories::{CalorieEntry, CalorieTable};
pub use classify::{argmax, Classifier, Prediction};
pub use error::{Error, Result};
pub use estimate::{Estimate, Estimator};
pub use labels::LabelSet;
pub use net::Network;
pub use vision::{decode_upload, DecodedImage, UploadedImage};
pub use wizard::{Session, TransitionError, WizardState, MIN_LOADING_PAUSE};
