//! Per-axis label to offset translation.

use std::collections::HashMap;

use crate::error::{LabeledArrayError, Result};
use crate::key::{LabelKey, LabelTuple};

/// Bidirectional mapping between label tuples and integer index tuples.
///
/// Built once from one ordered label list per axis. The offset of a label
/// is its position in the list of its axis.
///
/// # Example
/// ```
/// use labeled_array::LabelIndex;
///
/// let index = LabelIndex::new([vec!["a", "b", "c"], vec!["d", "e"]]).unwrap();
/// assert_eq!(index.rank(), 2);
/// assert_eq!(index.shape(), &[3, 2]);
/// assert_eq!(index.size(), 6);
/// assert_eq!(index.translate(&["c", "d"]).unwrap(), vec![2, 0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LabelIndex {
    /// Ordered labels for each axis
    axis_labels: Vec<Vec<String>>,
    /// label_to_offset[axis][label] -> position along that axis
    label_to_offset: Vec<HashMap<String, usize>>,
    /// Number of labels per axis
    shape: Vec<usize>,
    /// Product of the shape
    size: usize,
}

impl LabelIndex {
    /// Build an index from one label list per axis.
    ///
    /// # Errors
    /// Returns [`LabeledArrayError::DuplicatedLabel`] if a label appears twice on one axis.
    pub fn new<A, L>(axes: A) -> Result<Self>
    where
        A: IntoIterator<Item = L>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        let axis_labels: Vec<Vec<String>> = axes
            .into_iter()
            .map(|labels| labels.into_iter().map(Into::into).collect())
            .collect();

        let mut label_to_offset = Vec::with_capacity(axis_labels.len());
        for (axis, labels) in axis_labels.iter().enumerate() {
            let mut offsets = HashMap::with_capacity(labels.len());
            for (offset, label) in labels.iter().enumerate() {
                if offsets.insert(label.clone(), offset).is_some() {
                    return Err(LabeledArrayError::DuplicatedLabel {
                        axis,
                        label: label.clone(),
                    });
                }
            }
            label_to_offset.push(offsets);
        }

        let shape: Vec<usize> = axis_labels.iter().map(Vec::len).collect();
        let size = shape.iter().product();

        Ok(Self {
            axis_labels,
            label_to_offset,
            shape,
            size,
        })
    }

    /// Number of axes
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Number of labels per axis
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Total number of addressable cells
    pub fn size(&self) -> usize {
        self.size
    }

    /// Ordered labels of every axis
    pub fn axis_labels(&self) -> &[Vec<String>] {
        &self.axis_labels
    }

    /// Ordered labels of one axis, or `None` if the axis does not exist
    pub fn labels(&self, axis: usize) -> Option<&[String]> {
        self.axis_labels.get(axis).map(Vec::as_slice)
    }

    /// Offset of `label` along `axis`.
    pub fn offset(&self, axis: usize, label: &str) -> Result<usize> {
        self.label_to_offset
            .get(axis)
            .and_then(|offsets| offsets.get(label))
            .copied()
            .ok_or_else(|| LabeledArrayError::UnknownLabel {
                axis,
                label: label.to_string(),
            })
    }

    /// Check that a key or array of rank `actual` fits this index.
    pub fn check_rank(&self, actual: usize) -> Result<()> {
        if actual != self.rank() {
            return Err(LabeledArrayError::WrongDimension {
                expected: self.rank(),
                actual,
            });
        }
        Ok(())
    }

    /// Check rank first, then per-axis sizes, of a replacement array.
    pub fn check_shape(&self, dims: &[usize]) -> Result<()> {
        self.check_rank(dims.len())?;
        if dims != self.shape.as_slice() {
            return Err(LabeledArrayError::WrongShape {
                expected: self.shape.clone(),
                actual: dims.to_vec(),
            });
        }
        Ok(())
    }

    /// Translate a label key into integer offsets.
    ///
    /// # Errors
    /// - [`LabeledArrayError::WrongDimension`] if the key length differs from the rank
    /// - [`LabeledArrayError::UnknownLabel`] if a label is not declared on its axis
    pub fn translate<K: LabelKey + ?Sized>(&self, key: &K) -> Result<Vec<usize>> {
        let labels = key.labels();
        self.check_rank(labels.len())?;
        labels
            .iter()
            .enumerate()
            .map(|(axis, label)| self.offset(axis, label))
            .collect()
    }

    /// Labels addressing the cell at `index`, or `None` if it is out of range.
    pub fn labels_at(&self, index: &[usize]) -> Option<LabelTuple> {
        if index.len() != self.rank() {
            return None;
        }
        index
            .iter()
            .zip(&self.axis_labels)
            .map(|(&i, labels)| labels.get(i).cloned())
            .collect()
    }

    /// Lazily enumerate all integer index tuples in row-major order.
    pub fn iter_indices(&self) -> IndexTuples {
        IndexTuples::new(&self.shape)
    }

    /// Lazily enumerate all label tuples in row-major order.
    ///
    /// The first axis varies slowest. Every call starts a fresh enumeration.
    pub fn iter_keys(&self) -> LabelTuples<'_> {
        LabelTuples {
            index: self,
            indices: self.iter_indices(),
        }
    }
}

/// Iterator over all tuples of a shape (Cartesian product of ranges).
#[derive(Debug, Clone)]
pub struct IndexTuples {
    dims: Vec<usize>,
    current: Vec<usize>,
    done: bool,
}

impl IndexTuples {
    /// Start enumerating the tuples of `dims`.
    pub fn new(dims: &[usize]) -> Self {
        Self {
            dims: dims.to_vec(),
            current: vec![0; dims.len()],
            done: dims.contains(&0),
        }
    }
}

impl Iterator for IndexTuples {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.current.clone();

        // Advance (odometer style, last axis fastest)
        let mut carried = true;
        for i in (0..self.dims.len()).rev() {
            self.current[i] += 1;
            if self.current[i] < self.dims[i] {
                carried = false;
                break;
            }
            self.current[i] = 0;
        }
        if carried {
            self.done = true;
        }

        Some(result)
    }
}

/// Iterator over all label tuples of a [`LabelIndex`].
#[derive(Debug, Clone)]
pub struct LabelTuples<'a> {
    index: &'a LabelIndex,
    indices: IndexTuples,
}

impl Iterator for LabelTuples<'_> {
    type Item = LabelTuple;

    fn next(&mut self) -> Option<Self::Item> {
        let offsets = self.indices.next()?;
        Some(
            offsets
                .iter()
                .zip(self.index.axis_labels())
                .map(|(&i, labels)| labels[i].clone())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LabelIndex {
        LabelIndex::new([vec!["a", "b", "c"], vec!["d", "e"]]).unwrap()
    }

    #[test]
    fn test_shape_and_size() {
        let index = sample();
        assert_eq!(index.rank(), 2);
        assert_eq!(index.shape(), &[3, 2]);
        assert_eq!(index.size(), 6);
        assert_eq!(index.labels(1).unwrap(), &["d", "e"]);
        assert!(index.labels(2).is_none());
    }

    #[test]
    fn test_duplicated_label() {
        let result = LabelIndex::new([vec!["a", "b"], vec!["c", "c"]]);
        assert_eq!(
            result,
            Err(LabeledArrayError::DuplicatedLabel {
                axis: 1,
                label: "c".to_string()
            })
        );
    }

    #[test]
    fn test_same_label_on_different_axes() {
        let index = LabelIndex::new([vec!["a", "b"], vec!["a", "b"]]).unwrap();
        assert_eq!(index.translate(&["b", "a"]).unwrap(), vec![1, 0]);
    }

    #[test]
    fn test_translate() {
        let index = sample();
        assert_eq!(index.translate(&["a", "d"]).unwrap(), vec![0, 0]);
        assert_eq!(index.translate(&["c", "e"]).unwrap(), vec![2, 1]);
    }

    #[test]
    fn test_translate_unknown_label() {
        let index = sample();
        assert!(matches!(
            index.translate(&["a", "x"]),
            Err(LabeledArrayError::UnknownLabel { axis: 1, .. })
        ));
        // Labels of another axis are not accepted
        assert!(matches!(
            index.translate(&["d", "d"]),
            Err(LabeledArrayError::UnknownLabel { axis: 0, .. })
        ));
    }

    #[test]
    fn test_translate_wrong_dimension() {
        let index = sample();
        assert_eq!(
            index.translate("a"),
            Err(LabeledArrayError::WrongDimension {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_bare_label_rank_one() {
        let index = LabelIndex::new([vec!["a", "b", "c", "d"]]).unwrap();
        assert_eq!(index.translate("c").unwrap(), vec![2]);
        assert_eq!(index.translate(&["c"]).unwrap(), vec![2]);
    }

    #[test]
    fn test_check_shape() {
        let index = sample();
        assert!(index.check_shape(&[3, 2]).is_ok());
        assert!(matches!(
            index.check_shape(&[3]),
            Err(LabeledArrayError::WrongDimension { .. })
        ));
        assert!(matches!(
            index.check_shape(&[2, 3]),
            Err(LabeledArrayError::WrongShape { .. })
        ));
    }

    #[test]
    fn test_iter_keys_order() {
        let index = sample();
        let keys: Vec<LabelTuple> = index.iter_keys().collect();
        let expected: Vec<LabelTuple> = [
            ["a", "d"],
            ["a", "e"],
            ["b", "d"],
            ["b", "e"],
            ["c", "d"],
            ["c", "e"],
        ]
        .iter()
        .map(|k| k.iter().map(|s| s.to_string()).collect())
        .collect();
        assert_eq!(keys, expected);
        // Restartable
        assert_eq!(index.iter_keys().count(), 6);
    }

    #[test]
    fn test_labels_at() {
        let index = sample();
        assert_eq!(
            index.labels_at(&[1, 1]),
            Some(vec!["b".to_string(), "e".to_string()])
        );
        assert_eq!(index.labels_at(&[3, 0]), None);
        assert_eq!(index.labels_at(&[0]), None);
    }

    #[test]
    fn test_empty_axis_enumerates_nothing() {
        let index = LabelIndex::new([vec!["a", "b"], Vec::<&str>::new()]).unwrap();
        assert_eq!(index.size(), 0);
        assert_eq!(index.iter_keys().count(), 0);
    }

    #[test]
    fn test_rank_zero_has_one_cell() {
        let index = LabelIndex::new(Vec::<Vec<&str>>::new()).unwrap();
        assert_eq!(index.size(), 1);
        assert_eq!(index.iter_indices().collect::<Vec<_>>(), vec![Vec::<usize>::new()]);
    }
}
