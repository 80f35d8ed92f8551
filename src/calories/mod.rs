use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::labels::LabelSet;

/// Calorie range for 100 g of one food class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalorieEntry {
    pub min_kcal: u32,
    pub max_kcal: u32,
}

/// Immutable label → calorie-range mapping, loaded once at startup from the
/// reference CSV.
///
/// Expected format, UTF-8 with a header row:
///
/// ```text
/// label,kalori_min_100g,kalori_max_100g
/// rendang,450,600
/// ```
///
/// Double-quoted fields are handled, blank lines are skipped, and any
/// malformed row is a load-time error; a half-parsed reference table would
/// surface as wrong numbers in front of the user.
#[derive(Debug, Clone)]
pub struct CalorieTable {
    entries: HashMap<String, CalorieEntry>,
}

impl CalorieTable {
    pub fn load_csv(path: &Path) -> Result<CalorieTable> {
        let bytes = std::fs::read(path).map_err(|e| {
            Error::DataIntegrity(format!(
                "calorie reference '{}' could not be read: {}",
                path.display(),
                e
            ))
        })?;
        CalorieTable::parse(&bytes)
    }

    /// Parses the reference CSV from raw bytes.
    pub fn parse(data: &[u8]) -> Result<CalorieTable> {
        let text = std::str::from_utf8(data)
            .map_err(|_| Error::DataIntegrity("calorie reference is not valid UTF-8".to_owned()))?;

        let mut entries = HashMap::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let cells = parse_csv_row(line);
            if cells.len() != 3 {
                return Err(Error::DataIntegrity(format!(
                    "calorie reference row {}: expected 3 columns (label, min, max), got {}",
                    idx + 1,
                    cells.len()
                )));
            }
            // Header row: the numeric columns carry column names instead of
            // numbers. Only the first row may do this.
            if idx == 0 && cells[1].trim().parse::<u32>().is_err() {
                continue;
            }

            let label = cells[0].trim();
            if label.is_empty() {
                return Err(Error::DataIntegrity(format!(
                    "calorie reference row {}: blank label",
                    idx + 1
                )));
            }
            let min_kcal = parse_kcal(&cells[1], idx + 1)?;
            let max_kcal = parse_kcal(&cells[2], idx + 1)?;
            if min_kcal > max_kcal {
                return Err(Error::DataIntegrity(format!(
                    "calorie reference row {}: min {} exceeds max {}",
                    idx + 1,
                    min_kcal,
                    max_kcal
                )));
            }
            let previous = entries.insert(label.to_owned(), CalorieEntry { min_kcal, max_kcal });
            if previous.is_some() {
                return Err(Error::DataIntegrity(format!(
                    "calorie reference row {}: duplicate label '{}'",
                    idx + 1,
                    label
                )));
            }
        }

        if entries.is_empty() {
            return Err(Error::DataIntegrity(
                "calorie reference contains no data rows".to_owned(),
            ));
        }
        Ok(CalorieTable { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    /// Exact-match lookup.
    pub fn lookup(&self, label: &str) -> Result<CalorieEntry> {
        self.entries
            .get(label)
            .copied()
            .ok_or_else(|| Error::UnknownLabel(label.to_owned()))
    }

    /// Startup cross-validation: every label the classifier can produce must
    /// have an entry here, otherwise the process refuses to start.
    pub fn validate_labels(&self, labels: &LabelSet) -> Result<()> {
        let missing: Vec<&str> = labels
            .names()
            .iter()
            .map(String::as_str)
            .filter(|label| !self.entries.contains_key(*label))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::DataIntegrity(format!(
                "calorie table has no entry for label(s): {}",
                missing.join(", ")
            )))
        }
    }
}

fn parse_kcal(cell: &str, row_num: usize) -> Result<u32> {
    cell.trim().parse::<u32>().map_err(|_| {
        Error::DataIntegrity(format!(
            "calorie reference row {}: '{}' is not a non-negative whole kcal value",
            row_num,
            cell.trim()
        ))
    })
}

/// Splits a single CSV row, handling double-quoted fields with embedded
/// commas and `""` escapes.
fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '"' => {
                if in_quotes && i + 1 < chars.len() && chars[i + 1] == '"' {
                    current.push('"');
                    i += 2;
                    continue;
                }
                in_quotes = !in_quotes;
            }
            ',' if !in_quotes => {
                fields.push(current.clone());
                current.clear();
            }
            c => current.push(c),
        }
        i += 1;
    }
    fields.push(current);
    fields
}
