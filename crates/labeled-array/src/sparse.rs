//! Labeled array with dictionary-of-keys sparse storage.

use std::fmt;

use log::{debug, trace};

use crate::dense::{write_dims, DenseLabeledArray};
use crate::dense_array::DenseArray;
use crate::error::{LabeledArrayError, Result};
use crate::key::LabelKey;
use crate::label_index::LabelIndex;
use crate::labeled::{collect_entries, infer_axes, Backend, LabeledArray};
use crate::scalar::Scalar;
use crate::sparse_storage::{CooArray, DokArray, DokArrayMut, SparseSource};

/// Labeled array storing only cells that differ from its fill value.
///
/// Shares label translation and validation with [`DenseLabeledArray`]; only
/// storage differs. Unset cells read as the fill value at no storage cost.
///
/// # Example
/// ```
/// use labeled_array::{LabeledArray, SparseLabeledArray};
///
/// let mut a = SparseLabeledArray::new([vec!["a", "b", "c", "d"]], 100.0).unwrap();
/// a.set("a", 1.0).unwrap();
/// a.set(&["d"], 2.5).unwrap();
///
/// assert_eq!(a.get(&["a"]).unwrap(), 1.0);
/// assert_eq!(a.get("b").unwrap(), 100.0);
/// assert_eq!(a.nnz(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SparseLabeledArray<T> {
    index: LabelIndex,
    dok: DokArray<T>,
}

impl<T: Scalar> SparseLabeledArray<T> {
    /// Create an array over the given axes where every cell reads as `fill_value`.
    ///
    /// # Errors
    /// Returns [`LabeledArrayError::DuplicatedLabel`] if an axis repeats a label.
    pub fn new<A, L>(axes: A, fill_value: T) -> Result<Self>
    where
        A: IntoIterator<Item = L>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Ok(Self::from_index(LabelIndex::new(axes)?, fill_value))
    }

    /// Create an empty array over an existing label index.
    pub fn from_index(index: LabelIndex, fill_value: T) -> Self {
        let dok = DokArray::new(index.shape(), fill_value);
        debug!("created sparse labeled array with shape {:?}", index.shape());
        Self { index, dok }
    }

    /// Pair a label index with storage of the same shape.
    pub(crate) fn from_parts(index: LabelIndex, dok: DokArray<T>) -> Self {
        debug_assert_eq!(index.shape(), dok.shape());
        debug!(
            "generated sparse labeled array with shape {:?} ({} stored entries)",
            index.shape(),
            dok.nnz()
        );
        Self { index, dok }
    }

    /// Build from a mapping over explicitly declared axes.
    ///
    /// Cells missing from the mapping read as `fill_value`. Entries whose key
    /// does not address a cell of the declared axes are ignored.
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
                Ok(offsets) => array.dok.set(&offsets, value)?,
                Err(err) => trace!("skipping entry {:?}: {err}", key.labels()),
            }
        }
        Ok(array)
    }

    /// Build from a mapping, inferring each axis' labels from the keys.
    ///
    /// # Errors
    /// - [`LabeledArrayError::EmptyMapping`] if `entries` is empty
    /// - [`LabeledArrayError::WrongDimension`] if keys differ in length
    pub fn from_map<I, K>(entries: I, fill_value: T) -> Result<Self>
    where
        I: IntoIterator<Item = (K, T)>,
        K: LabelKey,
    {
        let entries = collect_entries(entries);
        let axes = infer_axes(&entries)?;
        Self::from_map_with_labels(axes, entries, fill_value)
    }

    /// Copy a dense array cell by cell, using its fill value as background.
    ///
    /// Visits all [`LabeledArray::size`] cells.
    pub fn from_dense(dense: &DenseLabeledArray<T>) -> Self {
        let dok = DokArray::from_dense(dense.to_raw_array(), dense.fill_value());
        debug!(
            "converted dense labeled array to sparse: {} cells, {} stored",
            dense.size(),
            dok.nnz()
        );
        Self {
            index: dense.label_index().clone(),
            dok,
        }
    }

    /// Copy any labeled array into sparse storage.
    ///
    /// # Errors
    /// Returns [`LabeledArrayError::AlreadySparse`] if `source` is sparse.
    pub fn from_labeled<A: LabeledArray<T>>(source: &A) -> Result<Self> {
        if source.backend() == Backend::Sparse {
            return Err(LabeledArrayError::AlreadySparse);
        }
        let index = source.label_index().clone();
        let mut dok = DokArray::new(index.shape(), source.fill_value());
        for (offsets, value) in index.iter_indices().zip(source.values()) {
            dok.set(&offsets, value)?;
        }
        Ok(Self::from_parts(index, dok))
    }

    /// Number of explicitly stored cells
    pub fn nnz(&self) -> usize {
        self.dok.nnz()
    }

    /// Materialize every cell into a new dense array.
    pub fn to_dense_array(&self) -> DenseArray<T> {
        self.dok.to_dense()
    }

    /// Immutable coordinate-list copy of the stored cells.
    pub fn to_coo(&self) -> CooArray<T> {
        self.dok.to_coo()
    }

    /// Shared reference to the backing sparse storage; no copy is made.
    pub fn to_dok(&self) -> &DokArray<T> {
        &self.dok
    }

    /// Mutable handle to the backing sparse storage; cells can be written but
    /// the shape is fixed.
    pub fn to_dok_mut(&mut self) -> DokArrayMut<'_, T> {
        DokArrayMut::new(&mut self.dok)
    }

    /// Consume the array, returning its backing storage.
    pub fn into_dok(self) -> DokArray<T> {
        self.dok
    }

    /// Dense copy of this array over the same labels.
    pub fn to_dense(&self) -> DenseLabeledArray<T> {
        debug!(
            "converting sparse labeled array to dense: {} cells",
            self.index.size()
        );
        DenseLabeledArray::from_parts(
            self.index.clone(),
            self.dok.to_dense(),
            self.dok.fill_value(),
        )
    }

    /// New sparse array over the same labels, backed by `new_array`.
    ///
    /// Dictionary-of-keys input is used as is; coordinate-list input keeps its
    /// own fill value; dense input is converted using this array's fill value.
    ///
    /// # Errors
    /// - [`LabeledArrayError::WrongDimension`] if the rank differs
    /// - [`LabeledArrayError::WrongShape`] if the per-axis sizes differ
    pub fn generate<S>(&self, new_array: S) -> Result<Self>
    where
        S: Into<SparseSource<T>>,
    {
        let source = new_array.into();
        self.index.check_shape(&source.dims())?;
        Ok(Self::from_parts(
            self.index.clone(),
            source.into_dok(self.dok.fill_value()),
        ))
    }

    /// New dense array over the same labels, `new_array` materialized first.
    pub fn generate_dense<S>(&self, new_array: S) -> Result<DenseLabeledArray<T>>
    where
        S: Into<SparseSource<T>>,
    {
        let source = new_array.into();
        self.index.check_shape(&source.dims())?;
        Ok(DenseLabeledArray::from_parts(
            self.index.clone(),
            source.into_dense(),
            self.dok.fill_value(),
        ))
    }
}

impl<T: Scalar> LabeledArray<T> for SparseLabeledArray<T> {
    fn label_index(&self) -> &LabelIndex {
        &self.index
    }

    fn fill_value(&self) -> T {
        self.dok.fill_value()
    }

    fn backend(&self) -> Backend {
        Backend::Sparse
    }

    fn get_at(&self, index: &[usize]) -> Result<T> {
        self.dok.get(index)
    }

    fn set_at(&mut self, index: &[usize], value: T) -> Result<()> {
        self.dok.set(index, value)
    }

    fn values(&self) -> Vec<T> {
        self.dok.to_dense().into_vec()
    }
}

impl<T> fmt::Display for SparseLabeledArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<SparseLabeledArray: dimensions (")?;
        write_dims(f, self.index.shape())?;
        write!(f, ")>")
    }
}
