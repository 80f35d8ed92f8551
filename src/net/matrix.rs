use serde::{Serialize, Deserialize};

/// Row-major matrix of f64 values.
///
/// Weights and biases arrive deserialized from the model artifact, so this
/// type is storage plus the shape bookkeeping inference needs; there is no
/// initialization or gradient machinery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        Matrix {
            rows: data.len(),
            cols: data.first().map(|row| row.len()).unwrap_or(0),
            data,
        }
    }

    /// True when `data` actually has the declared `rows × cols` shape.
    /// Deserialized artifacts carry all three fields independently, so a
    /// hand-edited file can disagree with itself.
    pub fn is_consistent(&self) -> bool {
        self.data.len() == self.rows && self.data.iter().all(|row| row.len() == self.cols)
    }
}
