//! Flat tensors handed to the learner.

use serde::{Deserialize, Serialize};

/// Flat row-major tensor with its shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor (e.g., [rows, features] or [features]).
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a zero-filled tensor with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    /// Get the total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    /// Check if the tensor is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    /// Get element at a flat index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }

    /// Set element at a flat index; out-of-range writes are dropped.
    pub fn set(&mut self, index: usize, value: f32) {
        if let Some(slot) = self.tensor.get_mut(index) {
            *slot = value;
        }
    }

    /// Row `row` of a 2-D tensor.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[f32]> {
        let width = *self.shape.get(1)?;
        self.tensor.get(row * width..(row + 1) * width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros_shape() {
        let t = EncodedState::zeros(vec![3, 4]);
        assert_eq!(t.len(), 12);
        assert!(t.tensor.iter().all(|&v| v == 0.0));
        assert!(!t.is_empty());
    }

    #[test]
    fn test_set_out_of_range_is_noop() {
        let mut t = EncodedState::zeros(vec![2]);
        t.set(1, 0.5);
        t.set(5, 1.0);
        assert_eq!(t.tensor, vec![0.0, 0.5]);
        assert_eq!(t.get(5), None);
    }

    #[test]
    fn test_row_access() {
        let mut t = EncodedState::zeros(vec![2, 3]);
        t.set(4, 1.0);
        assert_eq!(t.row(1), Some(&[0.0, 1.0, 0.0][..]));
        assert_eq!(t.row(2), None);
        assert_eq!(EncodedState::zeros(vec![3]).row(0), None);
    }
}
