//! Tabular input data for the polygon estimators.
//!
//! This module defines `Frame`, a named-column matrix of `f64` values.
//! Charts reference features by name; a `Frame` carries the names alongside
//! the values so axis resolution is a lookup, not a convention. Helpers for
//! row selection, column appending, and train/test splitting support the
//! model-selection workflows the estimators are built for.
use ndarray::{s, Array2, Axis};
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::error::{ModelError, Result};

/// A named-column table of `f64` values, the `X` of every estimator call.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    names: Vec<String>,
    values: Array2<f64>,
}

impl Frame {
    /// Build a frame from column names and a value matrix.
    ///
    /// # Errors
    ///
    /// `NameCountMismatch` when the name list and the matrix width disagree.
    pub fn new(names: Vec<String>, values: Array2<f64>) -> Result<Self> {
        if names.len() != values.ncols() {
            return Err(ModelError::NameCountMismatch {
                names: names.len(),
                columns: values.ncols(),
            });
        }
        Ok(Frame { names, values })
    }

    /// Build a frame from a bare matrix, naming columns by position
    /// ("0", "1", ...). Charts drawn against positional data use these
    /// stringified positions as their axis names.
    pub fn from_array(values: Array2<f64>) -> Self {
        let names = (0..values.ncols()).map(|i| i.to_string()).collect();
        Frame { names, values }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn nrows(&self) -> usize {
        self.values.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.values.ncols()
    }

    /// Position of a named column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[[row, col]]
    }

    /// New frame holding the given rows, in the given order.
    pub fn select_rows(&self, indices: &[usize]) -> Frame {
        Frame {
            names: self.names.clone(),
            values: self.values.select(Axis(0), indices),
        }
    }

    /// New frame with extra columns appended after the existing ones.
    ///
    /// # Errors
    ///
    /// `NameCountMismatch` when `names` and `values` widths disagree,
    /// `RowCountMismatch` when the new columns have a different row count.
    pub fn append_columns(&self, names: &[String], values: Array2<f64>) -> Result<Frame> {
        if names.len() != values.ncols() {
            return Err(ModelError::NameCountMismatch {
                names: names.len(),
                columns: values.ncols(),
            });
        }
        if values.nrows() != self.nrows() {
            return Err(ModelError::RowCountMismatch {
                rows: self.nrows(),
                new_rows: values.nrows(),
            });
        }

        let mut combined = Array2::zeros((self.nrows(), self.ncols() + values.ncols()));
        combined.slice_mut(s![.., ..self.ncols()]).assign(&self.values);
        combined.slice_mut(s![.., self.ncols()..]).assign(&values);

        let mut all_names = self.names.clone();
        all_names.extend(names.iter().cloned());
        Ok(Frame {
            names: all_names,
            values: combined,
        })
    }

    /// Split rows into a train and a test frame.
    ///
    /// # Arguments
    ///
    /// * `train_fraction` - Fraction of rows assigned to the train frame.
    /// * `shuffle` - Shuffle rows before splitting; with `false` the split
    ///   is a deterministic prefix/suffix cut.
    pub fn split(&self, train_fraction: f64, shuffle: bool) -> (Frame, Frame) {
        let n_samples = self.nrows();
        let mut indices: Vec<usize> = (0..n_samples).collect();

        if shuffle {
            let mut rng = thread_rng();
            indices.shuffle(&mut rng);
        }

        let n_train = ((n_samples as f64 * train_fraction) as usize).min(n_samples);
        let train = self.select_rows(&indices[..n_train]);
        let test = self.select_rows(&indices[n_train..]);
        (train, test)
    }
}
