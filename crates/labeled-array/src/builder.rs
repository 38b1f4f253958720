//! Builder for labeled arrays.

use crate::dense::DenseLabeledArray;
use crate::error::Result;
use crate::label_index::LabelIndex;
use crate::scalar::Scalar;
use crate::sparse::SparseLabeledArray;

/// Builder for [`DenseLabeledArray`] and [`SparseLabeledArray`].
///
/// # Example
/// ```
/// use labeled_array::{LabeledArray, LabeledArrayBuilder};
///
/// let sparse = LabeledArrayBuilder::new([vec!["a", "b"], vec!["x", "y", "z"]])
///     .with_fill_value(-1.0)
///     .build_sparse()
///     .unwrap();
/// assert_eq!(sparse.shape(), &[2, 3]);
/// assert_eq!(sparse.get(&["b", "z"]).unwrap(), -1.0);
/// ```
#[derive(Debug, Clone)]
pub struct LabeledArrayBuilder<T> {
    axes: Vec<Vec<String>>,
    fill_value: T,
}

impl<T: Scalar> LabeledArrayBuilder<T> {
    /// Create a builder for the given axes, with a zero fill value.
    pub fn new<A, L>(axes: A) -> Self
    where
        A: IntoIterator<Item = L>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            axes: axes
                .into_iter()
                .map(|labels| labels.into_iter().map(Into::into).collect())
                .collect(),
            fill_value: T::zero(),
        }
    }

    /// Set the value of cells not explicitly written.
    pub fn with_fill_value(mut self, fill_value: T) -> Self {
        self.fill_value = fill_value;
        self
    }

    /// Build the label index only.
    pub fn build_index(self) -> Result<LabelIndex> {
        LabelIndex::new(self.axes)
    }

    /// Build a dense labeled array.
    pub fn build_dense(self) -> Result<DenseLabeledArray<T>> {
        DenseLabeledArray::new(self.axes, self.fill_value)
    }

    /// Build a sparse labeled array.
    pub fn build_sparse(self) -> Result<SparseLabeledArray<T>> {
        SparseLabeledArray::new(self.axes, self.fill_value)
    }
}
