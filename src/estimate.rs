use std::path::Path;

use crate::calories::CalorieTable;
use crate::classify::{Classifier, Prediction};
use crate::error::{Error, Result};
use crate::labels::{display_name, LabelSet};
use crate::net::{InputShape, Network};
use crate::vision::DecodedImage;

/// What the Result step shows: the predicted label, its human-readable name,
/// the calorie range for 100 g, and the classifier's confidence in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub label: String,
    pub display_name: String,
    pub min_kcal: u32,
    pub max_kcal: u32,
    pub confidence: f64,
}

/// The immutable resource bundle: classifier, label list, and calorie table.
///
/// Built eagerly at process start so that every integrity problem is a
/// startup failure instead of a mid-session surprise. Never mutated after
/// construction; the app shares it across request threads in an `Arc`.
#[derive(Debug)]
pub struct Estimator {
    classifier: Classifier,
    labels: LabelSet,
    calories: CalorieTable,
}

impl Estimator {
    /// Loads the model artifact, label list, and calorie reference, then
    /// cross-validates them.
    pub fn load(
        model_path: &Path,
        class_names_path: &Path,
        calorie_csv_path: &Path,
    ) -> Result<Estimator> {
        let network = Network::load_json(model_path)?;
        let labels = LabelSet::load_json(class_names_path)?;
        let calories = CalorieTable::load_csv(calorie_csv_path)?;
        Estimator::from_parts(Classifier::new(network), labels, calories)
    }

    /// Assembles an estimator from already-loaded parts, enforcing the
    /// startup invariants: the label list must be exactly as wide as the
    /// network output, the output must be a probability distribution, and
    /// every label must have a calorie entry.
    pub fn from_parts(
        classifier: Classifier,
        labels: LabelSet,
        calories: CalorieTable,
    ) -> Result<Estimator> {
        if classifier.output_width() != labels.len() {
            return Err(Error::DataIntegrity(format!(
                "label count mismatch: model outputs {} classes, label list has {}",
                classifier.output_width(),
                labels.len()
            )));
        }
        if !classifier.has_probability_output() {
            return Err(Error::DataIntegrity(
                "model output layer is not softmax, so it does not produce a probability \
                 distribution"
                    .to_owned(),
            ));
        }
        calories.validate_labels(&labels)?;
        Ok(Estimator {
            classifier,
            labels,
            calories,
        })
    }

    pub fn labels(&self) -> &LabelSet {
        &self.labels
    }

    pub fn calories(&self) -> &CalorieTable {
        &self.calories
    }

    pub fn input_shape(&self) -> InputShape {
        self.classifier.input_shape()
    }

    /// Classifies a photo and looks up its calorie range.
    ///
    /// After startup validation the lookup cannot miss; if it somehow does,
    /// the `UnknownLabel` error propagates so the caller can abort the
    /// session instead of rendering a partial result.
    pub fn analyze(&self, photo: &DecodedImage) -> Result<Estimate> {
        let Prediction {
            class_index,
            confidence,
        } = self.classifier.predict(photo);
        let label = self.labels.get(class_index).ok_or_else(|| {
            Error::DataIntegrity(format!(
                "classifier selected index {} outside the label list",
                class_index
            ))
        })?;
        let entry = self.calories.lookup(label)?;
        Ok(Estimate {
            label: label.to_owned(),
            display_name: display_name(label),
            min_kcal: entry.min_kcal,
            max_kcal: entry.max_kcal,
            confidence,
        })
    }
}
