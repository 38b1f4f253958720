//! Labeled array with dense storage.

use std::fmt;

use log::{debug, trace};

use crate::dense_array::DenseArray;
use crate::error::Result;
use crate::key::LabelKey;
use crate::label_index::LabelIndex;
use crate::labeled::{collect_entries, infer_axes, Backend, LabeledArray};
use crate::scalar::Scalar;
use crate::sparse::SparseLabeledArray;
use crate::sparse_storage::SparseSource;

/// Labeled array holding one value per cell.
///
/// # Example
/// ```
/// use labeled_array::{DenseLabeledArray, LabeledArray};
///
/// let mut a = DenseLabeledArray::new([vec!["a", "b", "c"], vec!["d", "e"]], 1.0).unwrap();
/// a.set(&["a", "d"], 2.0).unwrap();
///
/// let raw = a.to_raw_array();
/// assert_eq!(raw.dims(), vec![3, 2]);
/// assert_eq!(raw.as_slice(), &[2.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseLabeledArray<T> {
    index: LabelIndex,
    array: DenseArray<T>,
    fill_value: T,
}

impl<T: Scalar> DenseLabeledArray<T> {
    /// Create an array over the given axes with every cell set to `fill_value`.
    ///
    /// # Errors
    /// Returns [`crate::LabeledArrayError::DuplicatedLabel`] if an axis repeats a label.
    pub fn new<A, L>(axes: A, fill_value: T) -> Result<Self>
    where
        A: IntoIterator<Item = L>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Ok(Self::from_index(LabelIndex::new(axes)?, fill_value))
    }

    /// Pair a label index with storage of the same shape.
    pub(crate) fn from_parts(index: LabelIndex, array: DenseArray<T>, fill_value: T) -> Self {
        debug_assert_eq!(index.shape(), array.dims().as_slice());
        Self {
            index,
            array,
            fill_value,
        }
    }

    /// Create an array over an existing label index.
    pub fn from_index(index: LabelIndex, fill_value: T) -> Self {
        let array = DenseArray::filled(index.shape(), fill_value);
        debug!("created dense labeled array with shape {:?}", index.shape());
        Self {
            index,
            array,
            fill_value,
        }
    }

    /// Build from a mapping over explicitly declared axes.
    ///
    /// Cells missing from the mapping hold `fill_value`. Entries whose key does
    /// not address a cell of the declared axes are ignored.
    pub fn from_map_with_labels<A, L, I, K>(axes: A, entries: I, fill_value: T) -> Result<Self>
    where
        A: IntoIterator<Item = L>,
        L: IntoIterator,
        L::Item: Into<String>,
        I: IntoIterator<Item = (K, T)>,
        K: LabelKey,
    {
        let mut array = Self::new(axes, fill_value)?;
        for (key, value) in entries {
            match array.index.translate(&key) {
                Ok(offsets) => array.set_at(&offsets, value)?,
                Err(err) => trace!("skipping entry {:?}: {err}", key.labels()),
            }
        }
        Ok(array)
    }

    /// Build from a mapping, inferring each axis' labels from the keys.
    ///
    /// Labels of an axis are the sorted union of that key component.
    ///
    /// # Errors
    /// - [`crate::LabeledArrayError::EmptyMapping`] if `entries` is empty
    /// - [`crate::LabeledArrayError::WrongDimension`] if keys differ in length
    pub fn from_map<I, K>(entries: I, fill_value: T) -> Result<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: LabelKey,
    {
        let entries = collect_entries(entries);
        let axes = infer_axes(&entries)?;
        Self::from_map_with_labels(axes, entries, fill_value)
    }

    /// Shared reference to the backing array; no copy is made.
    pub fn to_raw_array(&self) -> &DenseArray<T> {
        &self.array
    }

    /// Mutable row-major view of the backing array; writes are visible through
    /// labels. The shape cannot be changed through this view.
    pub fn to_raw_array_mut(&mut self) -> &mut [T] {
        self.array.as_mut_slice()
    }

    /// Consume the array, returning its backing storage.
    pub fn into_raw_array(self) -> DenseArray<T> {
        self.array
    }

    /// Independent copy of the backing array.
    pub fn to_dense_array(&self) -> DenseArray<T> {
        self.array.clone()
    }

    /// New dense array over the same labels, backed by `new_array`.
    ///
    /// # Errors
    /// - [`crate::LabeledArrayError::WrongDimension`] if the rank differs
    /// - [`crate::LabeledArrayError::WrongShape`] if the per-axis sizes differ
    pub fn generate(&self, new_array: DenseArray<T>) -> Result<Self> {
        self.index.check_shape(&new_array.dims())?;
        debug!("generated dense labeled array with shape {:?}", self.index.shape());
        Ok(Self::from_parts(
            self.index.clone(),
            new_array,
            self.fill_value,
        ))
    }

    /// New sparse array over the same labels, backed by `new_array`.
    ///
    /// Dense input is converted using this array's fill value.
    pub fn generate_sparse<S>(&self, new_array: S) -> Result<SparseLabeledArray<T>>
    where
        S: Into<SparseSource<T>>,
    {
        let source = new_array.into();
        self.index.check_shape(&source.dims())?;
        Ok(SparseLabeledArray::from_parts(
            self.index.clone(),
            source.into_dok(self.fill_value),
        ))
    }

    /// Sparse copy of this array.
    pub fn to_sparse(&self) -> SparseLabeledArray<T> {
        SparseLabeledArray::from_dense(self)
    }
}

impl<T: Scalar> LabeledArray<T> for DenseLabeledArray<T> {
    fn label_index(&self) -> &LabelIndex {
        &self.index
    }

    fn fill_value(&self) -> T {
        self.fill_value
    }

    fn backend(&self) -> Backend {
        Backend::Dense
    }

    fn get_at(&self, index: &[usize]) -> Result<T> {
        self.array.get(index)
    }

    fn set_at(&mut self, index: &[usize], value: T) -> Result<()> {
        self.array.set(index, value)
    }

    fn values(&self) -> Vec<T> {
        self.array.as_slice().to_vec()
    }
}

impl<T> fmt::Display for DenseLabeledArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<DenseLabeledArray: dimensions (")?;
        write_dims(f, self.index.shape())?;
        write!(f, ")>")
    }
}

pub(crate) fn write_dims(f: &mut fmt::Formatter<'_>, dims: &[usize]) -> fmt::Result {
    for (i, d) in dims.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{d}")?;
    }
    Ok(())
}
