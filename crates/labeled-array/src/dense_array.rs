//! Dense N-D storage backed by mdarray.

use mdarray::{DynRank, Shape, Tensor};

use crate::error::{LabeledArrayError, Result};
use crate::label_index::IndexTuples;

/// Dense storage for array elements, wrapping mdarray's Tensor with dynamic rank.
///
/// Elements are laid out in row-major order: the last axis varies fastest.
#[derive(Debug, Clone)]
pub struct DenseArray<T>(Tensor<T, DynRank>);

impl<T> DenseArray<T> {
    /// Create a new DenseArray from a Vec with explicit shape.
    ///
    /// # Errors
    /// Returns [`LabeledArrayError::LengthMismatch`] if the product of dims
    /// doesn't match `vec.len()`.
    pub fn from_vec_with_shape(vec: Vec<T>, dims: &[usize]) -> Result<Self> {
        let expected: usize = dims.iter().product();
        if vec.len() != expected {
            return Err(LabeledArrayError::LengthMismatch {
                expected,
                actual: vec.len(),
            });
        }
        let tensor = Tensor::from(vec).into_shape(DynRank::from_dims(dims));
        Ok(Self(tensor))
    }

    /// Get the shape (dimensions) of the array.
    pub fn dims(&self) -> Vec<usize> {
        self.0.shape().with_dims(|d| d.to_vec())
    }

    /// Get the rank (number of dimensions).
    pub fn rank(&self) -> usize {
        self.0.rank()
    }

    /// Get the total number of elements.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the array is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get underlying data as a slice, in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.0[..]
    }

    /// Get underlying data as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0[..]
    }

    /// Get a reference to the underlying tensor.
    pub fn tensor(&self) -> &Tensor<T, DynRank> {
        &self.0
    }

    /// Convert to Vec, consuming the array.
    pub fn into_vec(self) -> Vec<T> {
        self.0.into_vec()
    }

    /// Row-major linear offset of a multi-index.
    pub fn linear_offset(&self, index: &[usize]) -> Result<usize> {
        linear_offset(index, &self.dims())
    }
}

impl<T: Clone> DenseArray<T> {
    /// Create an array of the given shape with every element set to `value`.
    pub fn filled(dims: &[usize], value: T) -> Self {
        let len = dims.iter().product();
        let tensor = Tensor::from(vec![value; len]).into_shape(DynRank::from_dims(dims));
        Self(tensor)
    }

    /// Create an array by evaluating `f` at every multi-index.
    pub fn from_fn<F>(dims: &[usize], mut f: F) -> Self
    where
        F: FnMut(&[usize]) -> T,
    {
        let data: Vec<T> = IndexTuples::new(dims).map(|index| f(&index)).collect();
        let tensor = Tensor::from(data).into_shape(DynRank::from_dims(dims));
        Self(tensor)
    }

    /// Get element at a multi-index.
    pub fn get(&self, index: &[usize]) -> Result<T> {
        let offset = self.linear_offset(index)?;
        Ok(self.as_slice()[offset].clone())
    }

    /// Set element at a multi-index.
    pub fn set(&mut self, index: &[usize], value: T) -> Result<()> {
        let offset = self.linear_offset(index)?;
        self.as_mut_slice()[offset] = value;
        Ok(())
    }

    /// Set every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.as_mut_slice().fill(value);
    }
}

impl<T: PartialEq> PartialEq for DenseArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dims() == other.dims() && self.as_slice() == other.as_slice()
    }
}

/// Row-major linear offset of `index` within `dims`.
pub(crate) fn linear_offset(index: &[usize], dims: &[usize]) -> Result<usize> {
    if index.len() != dims.len() || index.iter().zip(dims).any(|(&i, &d)| i >= d) {
        return Err(LabeledArrayError::IndexOutOfBounds {
            index: index.to_vec(),
            shape: dims.to_vec(),
        });
    }
    Ok(index
        .iter()
        .zip(dims)
        .fold(0, |offset, (&i, &d)| offset * d + i))
}
