//! Dictionary-style access to rectangular N-D arrays indexed by string labels.
//!
//! Every axis of an array is declared as an ordered list of unique labels.
//! Cells are then read and written by label tuples instead of integer
//! offsets, e.g. `region x product` instead of `(3, 7)`.
//!
//! # Overview
//!
//! - [`LabelIndex`]: per-axis label to offset mapping, shape and size
//! - [`DenseLabeledArray`]: one stored value per cell ([`DenseArray`], built on mdarray)
//! - [`SparseLabeledArray`]: only cells differing from the fill value are stored ([`DokArray`])
//! - [`LabeledArray`]: the shared get/set/enumeration interface
//!
//! # Quick Start
//!
//! ```
//! use labeled_array::{DenseLabeledArray, LabeledArray};
//!
//! let mut a = DenseLabeledArray::new([vec!["a", "b", "c"], vec!["d", "e"]], 1.0).unwrap();
//! assert_eq!(a.size(), 6);
//! assert_eq!(a.shape(), &[3, 2]);
//!
//! a.set(&["a", "d"], 2.0).unwrap();
//! assert_eq!(
//!     a.to_raw_array().as_slice(),
//!     &[2.0, 1.0, 1.0, 1.0, 1.0, 1.0]
//! );
//! ```
//!
//! # Converting between backends
//!
//! ```
//! use labeled_array::{DenseLabeledArray, LabeledArray, SparseLabeledArray};
//!
//! let mut dense = DenseLabeledArray::new([vec!["x", "y"]], 0.0).unwrap();
//! dense.set("y", 3.0).unwrap();
//!
//! let sparse = SparseLabeledArray::from_dense(&dense);
//! assert_eq!(sparse.nnz(), 1);
//! assert_eq!(sparse.to_dense(), dense);
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result`] with [`LabeledArrayError`]:
//!
//! ```
//! use labeled_array::{LabeledArray, LabeledArrayError, SparseLabeledArray};
//!
//! let a = SparseLabeledArray::new([vec!["a", "b"], vec!["c", "d"]], 0.0).unwrap();
//!
//! let result = a.get(&["a"]);
//! assert!(matches!(result, Err(LabeledArrayError::WrongDimension { expected: 2, actual: 1 })));
//!
//! let result = SparseLabeledArray::<f64>::new([vec!["a", "a"]], 0.0);
//! assert!(matches!(result, Err(LabeledArrayError::DuplicatedLabel { .. })));
//! ```

mod builder;
mod dense;
mod dense_array;
mod error;
mod key;
mod label_index;
mod labeled;
mod scalar;
mod sparse;
mod sparse_storage;

pub use builder::LabeledArrayBuilder;
pub use dense::DenseLabeledArray;
pub use dense_array::DenseArray;
pub use error::{LabeledArrayError, Result};
pub use key::{LabelKey, LabelTuple};
pub use label_index::{IndexTuples, LabelIndex, LabelTuples};
pub use labeled::{Backend, LabeledArray};
pub use scalar::Scalar;
pub use sparse::SparseLabeledArray;
pub use sparse_storage::{CooArray, DokArray, DokArrayMut, SparseSource};

/// Re-export of the dense array crate used for [`DenseArray`].
pub use mdarray;
