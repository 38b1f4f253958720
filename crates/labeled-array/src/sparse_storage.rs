//! Sparse N-D storage: a mutable dictionary-of-keys form and an immutable
//! coordinate-list form.
//!
//! Both forms carry a declared shape and a fill value. Cells that hold no
//! explicit entry read as the fill value.

use std::collections::BTreeMap;
use std::ops::Deref;

use rand::Rng;

use crate::dense_array::{linear_offset, DenseArray};
use crate::error::{LabeledArrayError, Result};
use crate::label_index::IndexTuples;
use crate::scalar::Scalar;

/// Dictionary-of-keys sparse array.
///
/// Entries are kept sorted by multi-index. Writing the fill value removes the
/// entry, so only cells that differ from the fill value cost storage.
///
/// # Example
/// ```
/// use labeled_array::DokArray;
///
/// let mut dok = DokArray::new(&[3, 2], 1.0);
/// dok.set(&[2, 0], 5.0).unwrap();
/// assert_eq!(dok.get(&[2, 0]).unwrap(), 5.0);
/// assert_eq!(dok.get(&[1, 1]).unwrap(), 1.0);
/// assert_eq!(dok.nnz(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DokArray<T> {
    shape: Vec<usize>,
    fill_value: T,
    data: BTreeMap<Vec<usize>, T>,
}

impl<T: Scalar> DokArray<T> {
    /// Create an empty array: every cell reads as `fill_value`.
    pub fn new(shape: &[usize], fill_value: T) -> Self {
        Self {
            shape: shape.to_vec(),
            fill_value,
            data: BTreeMap::new(),
        }
    }

    /// Convert a dense array, storing only elements that differ from `fill_value`.
    pub fn from_dense(dense: &DenseArray<T>, fill_value: T) -> Self {
        let shape = dense.dims();
        let data = IndexTuples::new(&shape)
            .zip(dense.as_slice())
            .filter(|(_, value)| !value.is_identical(&fill_value))
            .map(|(index, value)| (index, *value))
            .collect();
        Self {
            shape,
            fill_value,
            data,
        }
    }

    /// Convert a coordinate-list array, keeping its fill value.
    pub fn from_coo(coo: &CooArray<T>) -> Self {
        let mut dok = Self::new(&coo.shape, coo.fill_value);
        for (index, &value) in coo.coords.iter().zip(&coo.data) {
            if !value.is_identical(&coo.fill_value) {
                dok.data.insert(index.clone(), value);
            }
        }
        dok
    }

    /// Shape of the array
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of dimensions
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Value of every cell without an explicit entry
    pub fn fill_value(&self) -> T {
        self.fill_value
    }

    /// Number of explicitly stored entries
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Iterate over stored entries in index order
    pub fn iter(&self) -> impl Iterator<Item = (&Vec<usize>, &T)> {
        self.data.iter()
    }

    /// Get element at a multi-index.
    pub fn get(&self, index: &[usize]) -> Result<T> {
        linear_offset(index, &self.shape)?;
        Ok(self.data.get(index).copied().unwrap_or(self.fill_value))
    }

    /// Set element at a multi-index.
    ///
    /// Writing a value bitwise identical to the fill value removes the entry;
    /// `-0.0` under a `0.0` fill is stored.
    pub fn set(&mut self, index: &[usize], value: T) -> Result<()> {
        linear_offset(index, &self.shape)?;
        if value.is_identical(&self.fill_value) {
            self.data.remove(index);
        } else {
            self.data.insert(index.to_vec(), value);
        }
        Ok(())
    }

    /// Materialize every cell into a dense array.
    pub fn to_dense(&self) -> DenseArray<T> {
        let mut dense = DenseArray::filled(&self.shape, self.fill_value);
        let slice = dense.as_mut_slice();
        for (index, &value) in &self.data {
            // Entries are validated on insertion
            if let Ok(offset) = linear_offset(index, &self.shape) {
                slice[offset] = value;
            }
        }
        dense
    }

    /// Coordinate-list copy of the stored entries.
    pub fn to_coo(&self) -> CooArray<T> {
        let (coords, data) = self
            .data
            .iter()
            .map(|(index, &value)| (index.clone(), value))
            .unzip();
        CooArray {
            shape: self.shape.clone(),
            fill_value: self.fill_value,
            coords,
            data,
        }
    }
}

impl<T: Scalar> DokArray<T> {
    /// Generate a random sparse array with fill value zero.
    ///
    /// Each cell is stored independently with probability `density`, holding a
    /// value produced by `sample`.
    pub fn random_with<R, F>(
        shape: &[usize],
        density: f64,
        rng: &mut R,
        mut sample: F,
    ) -> Result<Self>
    where
        R: Rng + ?Sized,
        F: FnMut(&mut R) -> T,
    {
        if !(0.0..=1.0).contains(&density) {
            return Err(LabeledArrayError::InvalidDensity(density));
        }
        let mut dok = Self::new(shape, T::zero());
        for index in IndexTuples::new(shape) {
            if rng.random_bool(density) {
                let value = sample(rng);
                if !value.is_identical(&dok.fill_value) {
                    dok.data.insert(index, value);
                }
            }
        }
        Ok(dok)
    }

    /// Generate a random sparse array with values uniform in `[0, 1)`.
    ///
    /// # Example
    /// ```
    /// use labeled_array::DokArray;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(42);
    /// let dok = DokArray::<f64>::random(&[3, 2], 0.5, &mut rng).unwrap();
    /// assert_eq!(dok.shape(), &[3, 2]);
    /// assert!(dok.nnz() <= 6);
    /// ```
    pub fn random<R: Rng + ?Sized>(shape: &[usize], density: f64, rng: &mut R) -> Result<Self> {
        Self::random_with(shape, density, rng, |rng| T::from_f64(rng.random::<f64>()))
    }
}

/// Mutable handle to a [`DokArray`] owned by a labeled array.
///
/// Reads go through [`Deref`]; writes are limited to [`DokArrayMut::set`], so the
/// shape and fill value stay those of the owner.
#[derive(Debug)]
pub struct DokArrayMut<'a, T>(&'a mut DokArray<T>);

impl<'a, T: Scalar> DokArrayMut<'a, T> {
    pub(crate) fn new(dok: &'a mut DokArray<T>) -> Self {
        Self(dok)
    }

    /// Set element at a multi-index.
    pub fn set(&mut self, index: &[usize], value: T) -> Result<()> {
        self.0.set(index, value)
    }
}

impl<T> Deref for DokArrayMut<'_, T> {
    type Target = DokArray<T>;

    fn deref(&self) -> &DokArray<T> {
        self.0
    }
}

/// Immutable coordinate-list sparse array.
///
/// Coordinates are sorted lexicographically; `data[i]` is the value at `coords[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct CooArray<T> {
    shape: Vec<usize>,
    fill_value: T,
    coords: Vec<Vec<usize>>,
    data: Vec<T>,
}

impl<T: Scalar> CooArray<T> {
    /// Shape of the array
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Value of every cell without an explicit entry
    pub fn fill_value(&self) -> T {
        self.fill_value
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Stored coordinates, sorted
    pub fn coords(&self) -> &[Vec<usize>] {
        &self.coords
    }

    /// Stored values, parallel to [`Self::coords`]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Get element at a multi-index.
    pub fn get(&self, index: &[usize]) -> Result<T> {
        linear_offset(index, &self.shape)?;
        Ok(match self.coords.binary_search_by(|c| c.as_slice().cmp(index)) {
            Ok(pos) => self.data[pos],
            Err(_) => self.fill_value,
        })
    }

    /// Materialize every cell into a dense array.
    pub fn to_dense(&self) -> DenseArray<T> {
        let mut dense = DenseArray::filled(&self.shape, self.fill_value);
        let slice = dense.as_mut_slice();
        for (index, &value) in self.coords.iter().zip(&self.data) {
            if let Ok(offset) = linear_offset(index, &self.shape) {
                slice[offset] = value;
            }
        }
        dense
    }
}

/// Replacement array accepted by sparse `generate`.
#[derive(Debug, Clone)]
pub enum SparseSource<T> {
    /// Dense array, converted on use
    Dense(DenseArray<T>),
    /// Dictionary-of-keys array, used as is
    Dok(DokArray<T>),
    /// Coordinate-list array, converted on use
    Coo(CooArray<T>),
}

impl<T: Scalar> SparseSource<T> {
    /// Shape of the wrapped array
    pub fn dims(&self) -> Vec<usize> {
        match self {
            Self::Dense(a) => a.dims(),
            Self::Dok(a) => a.shape().to_vec(),
            Self::Coo(a) => a.shape().to_vec(),
        }
    }

    /// Materialize into dense form.
    pub fn into_dense(self) -> DenseArray<T> {
        match self {
            Self::Dense(a) => a,
            Self::Dok(a) => a.to_dense(),
            Self::Coo(a) => a.to_dense(),
        }
    }

    /// Convert into dictionary-of-keys form; dense input uses `fill_value`.
    pub fn into_dok(self, fill_value: T) -> DokArray<T> {
        match self {
            Self::Dense(a) => DokArray::from_dense(&a, fill_value),
            Self::Dok(a) => a,
            Self::Coo(a) => DokArray::from_coo(&a),
        }
    }
}

impl<T> From<DenseArray<T>> for SparseSource<T> {
    fn from(array: DenseArray<T>) -> Self {
        Self::Dense(array)
    }
}

impl<T> From<DokArray<T>> for SparseSource<T> {
    fn from(array: DokArray<T>) -> Self {
        Self::Dok(array)
    }
}

impl<T> From<CooArray<T>> for SparseSource<T> {
    fn from(array: CooArray<T>) -> Self {
        Self::Coo(array)
    }
}
