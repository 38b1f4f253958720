//! Dictionary-style interface shared by the dense and sparse containers.

use std::collections::{BTreeSet, HashMap};

use crate::error::{LabeledArrayError, Result};
use crate::key::{LabelKey, LabelTuple};
use crate::label_index::{LabelIndex, LabelTuples};
use crate::scalar::Scalar;

/// Storage backend of a labeled array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// One stored value per cell
    Dense,
    /// Only cells that differ from the fill value are stored
    Sparse,
}

/// Label-keyed access to a rectangular N-D array.
///
/// Implementors provide the label index and label-free element access; key
/// translation, dimension checks and enumeration are shared.
///
/// # Example
/// ```
/// use labeled_array::{DenseLabeledArray, LabeledArray};
///
/// let mut a = DenseLabeledArray::new([vec!["a", "b", "c"], vec!["d", "e"]], 1.0).unwrap();
/// a.set(&["a", "d"], 2.0).unwrap();
/// assert_eq!(a.get(&["a", "d"]).unwrap(), 2.0);
/// assert_eq!(a.get(&["b", "e"]).unwrap(), 1.0);
/// assert_eq!(a.keys().len(), 6);
/// ```
pub trait LabeledArray<T: Scalar> {
    /// Label index translating keys into offsets
    fn label_index(&self) -> &LabelIndex;

    /// Value of cells never written since construction
    fn fill_value(&self) -> T;

    /// Storage backend
    fn backend(&self) -> Backend;

    /// Read a cell by integer offsets.
    fn get_at(&self, index: &[usize]) -> Result<T>;

    /// Write a cell by integer offsets.
    fn set_at(&mut self, index: &[usize], value: T) -> Result<()>;

    /// Current value of every cell, in enumeration order.
    fn values(&self) -> Vec<T>;

    /// Number of axes
    fn rank(&self) -> usize {
        self.label_index().rank()
    }

    /// Number of labels per axis
    fn shape(&self) -> &[usize] {
        self.label_index().shape()
    }

    /// Total number of cells
    fn size(&self) -> usize {
        self.label_index().size()
    }

    /// Total number of cells (same as [`Self::size`])
    fn len(&self) -> usize {
        self.size()
    }

    /// Returns true if some axis has no labels
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Ordered labels of every axis
    fn axis_labels(&self) -> &[Vec<String>] {
        self.label_index().axis_labels()
    }

    /// Read the cell addressed by `key`.
    ///
    /// # Errors
    /// - [`LabeledArrayError::WrongDimension`] if the key length differs from the rank
    /// - [`LabeledArrayError::UnknownLabel`] if a label is not declared on its axis
    fn get<K: LabelKey + ?Sized>(&self, key: &K) -> Result<T> {
        let index = self.label_index().translate(key)?;
        self.get_at(&index)
    }

    /// Write the cell addressed by `key`.
    ///
    /// Fails with the same errors as [`Self::get`], before anything is written.
    fn set<K: LabelKey + ?Sized>(&mut self, key: &K, value: T) -> Result<()> {
        let index = self.label_index().translate(key)?;
        self.set_at(&index, value)
    }

    /// Returns true if `key` addresses a cell of this array.
    fn contains_key<K: LabelKey + ?Sized>(&self, key: &K) -> bool {
        self.label_index().translate(key).is_ok()
    }

    /// Lazily enumerate all label tuples, first axis slowest.
    fn iter_keys(&self) -> LabelTuples<'_> {
        self.label_index().iter_keys()
    }

    /// All label tuples, in enumeration order.
    fn keys(&self) -> Vec<LabelTuple> {
        self.iter_keys().collect()
    }

    /// All `(label tuple, value)` pairs, in enumeration order.
    fn items(&self) -> Vec<(LabelTuple, T)> {
        self.iter_keys().zip(self.values()).collect()
    }

    /// Materialize the full label tuple to value mapping.
    ///
    /// The mapping holds [`Self::size`] entries.
    fn to_map(&self) -> HashMap<LabelTuple, T> {
        self.iter_keys().zip(self.values()).collect()
    }

    /// Merging a mapping into the array is not supported.
    ///
    /// Always returns [`LabeledArrayError::Unsupported`]; rebuild the array or
    /// use `generate` instead.
    fn update<I>(&mut self, _entries: I) -> Result<()>
    where
        I: IntoIterator<Item = (LabelTuple, T)>,
    {
        Err(LabeledArrayError::Unsupported("update"))
    }
}

/// Owned entries of a caller mapping, keys converted to label tuples.
pub(crate) fn collect_entries<I, K, T>(entries: I) -> Vec<(LabelTuple, T)>
where
    I: IntoIterator<Item = (K, T)>,
    K: LabelKey,
{
    entries
        .into_iter()
        .map(|(key, value)| {
            let labels = key.labels().into_iter().map(str::to_string).collect();
            (labels, value)
        })
        .collect()
}

/// Infer per-axis label lists from the keys of a mapping.
///
/// Labels of each axis are the union of that component over all keys, sorted.
pub(crate) fn infer_axes<T>(entries: &[(LabelTuple, T)]) -> Result<Vec<Vec<String>>> {
    let rank = entries
        .first()
        .map(|(key, _)| key.len())
        .ok_or(LabeledArrayError::EmptyMapping)?;

    let mut axes = vec![BTreeSet::new(); rank];
    for (key, _) in entries {
        if key.len() != rank {
            return Err(LabeledArrayError::WrongDimension {
                expected: rank,
                actual: key.len(),
            });
        }
        for (labels, label) in axes.iter_mut().zip(key) {
            labels.insert(label.clone());
        }
    }

    Ok(axes
        .into_iter()
        .map(|labels| labels.into_iter().collect())
        .collect())
}
