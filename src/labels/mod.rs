use std::path::Path;

use crate::error::{Error, Result};

/// The fixed, ordered list of food labels the classifier predicts over.
///
/// Index position matches the classifier's output dimension, so the order in
/// `class_names.json` is part of the model's external contract and never
/// changes after load.
#[derive(Debug, Clone)]
pub struct LabelSet {
    names: Vec<String>,
}

impl LabelSet {
    /// Builds a label set, rejecting empty lists, empty names, and
    /// duplicates (a duplicate would make the calorie lookup ambiguous).
    pub fn new(names: Vec<String>) -> Result<LabelSet> {
        if names.is_empty() {
            return Err(Error::DataIntegrity("label list is empty".to_owned()));
        }
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(Error::DataIntegrity(format!("label {} is blank", i + 1)));
            }
            if names[..i].contains(name) {
                return Err(Error::DataIntegrity(format!("duplicate label '{}'", name)));
            }
        }
        Ok(LabelSet { names })
    }

    /// Reads the label list from a JSON array of strings.
    pub fn load_json(path: &Path) -> Result<LabelSet> {
        let problem = |reason: String| {
            Error::DataIntegrity(format!(
                "label list '{}' could not be loaded: {}",
                path.display(),
                reason
            ))
        };
        let file = std::fs::File::open(path).map_err(|e| problem(e.to_string()))?;
        let reader = std::io::BufReader::new(file);
        let names: Vec<String> =
            serde_json::from_reader(reader).map_err(|e| problem(e.to_string()))?;
        LabelSet::new(names)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// Human-readable form of a label: "nasi_goreng" → "Nasi Goreng".
pub fn display_name(label: &str) -> String {
    label
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
