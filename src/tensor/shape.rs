//! Tensor shape and dimension handling

use crate::error::{Result, TensorError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents the shape of a tensor
///
/// An empty dimension list is a scalar holding one element. A zero in any
/// dimension means the tensor holds no elements.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u64>", into = "Vec<u64>"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TensorShape {
    dimensions: Vec<u64>,
}

impl TensorShape {
    /// Create a new tensor shape from dimensions
    ///
    /// Fails if the element count does not fit in `u64`. A shape with a zero
    /// dimension is always accepted.
    pub fn new(dimensions: Vec<u64>) -> Result<Self> {
        let fits = dimensions.contains(&0)
            || dimensions.iter().try_fold(1u64, |acc, &dim| acc.checked_mul(dim)).is_some();
        if !fits {
            return Err(TensorError::InvalidTensorData(format!(
                "Element count of shape {:?} overflows",
                dimensions
            )));
        }
        Ok(Self { dimensions })
    }

    /// Create a scalar shape (no dimensions, one element)
    pub fn scalar() -> Self {
        Self { dimensions: Vec::new() }
    }

    /// Get the number of dimensions
    pub fn ndim(&self) -> usize {
        self.dimensions.len()
    }

    /// Get the dimensions as a slice
    pub fn dims(&self) -> &[u64] {
        &self.dimensions
    }

    /// Get a specific dimension
    pub fn dim(&self, index: usize) -> Option<u64> {
        self.dimensions.get(index).copied()
    }

    /// Calculate the total number of elements
    pub fn element_count(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        // Overflow of non-empty shapes is rejected at construction
        self.dimensions.iter().product()
    }

    /// Check if this is a scalar (no dimensions)
    pub fn is_scalar(&self) -> bool {
        self.dimensions.is_empty()
    }

    /// Check if the shape holds no elements
    pub fn is_empty(&self) -> bool {
        self.dimensions.contains(&0)
    }

    /// Calculate strides for row-major ordering
    ///
    /// Strides of empty shapes saturate at `u64::MAX`.
    pub fn strides(&self) -> Vec<u64> {
        let mut strides = vec![1u64; self.ndim()];

        if self.ndim() > 1 {
            for i in (0..self.ndim() - 1).rev() {
                strides[i] = strides[i + 1].saturating_mul(self.dimensions[i + 1]);
            }
        }

        strides
    }

    /// Row-major flat index of a multi-index, `None` if out of bounds
    pub fn flat_index(&self, index: &[u64]) -> Option<u64> {
        if index.len() != self.ndim() || self.is_empty() {
            return None;
        }
        let mut flat = 0u64;
        for (&i, &dim) in index.iter().zip(&self.dimensions) {
            if i >= dim {
                return None;
            }
            flat = flat * dim + i;
        }
        Some(flat)
    }
}

impl TryFrom<Vec<u64>> for TensorShape {
    type Error = TensorError;

    fn try_from(dimensions: Vec<u64>) -> Result<Self> {
        Self::new(dimensions)
    }
}

impl From<TensorShape> for Vec<u64> {
    fn from(shape: TensorShape) -> Vec<u64> {
        shape.dimensions
    }
}

impl std::fmt::Display for TensorShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, dim) in self.dimensions.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", dim)?;
        }
        write!(f, "]")
    }
}
