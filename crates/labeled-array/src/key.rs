//! Label keys addressing a single cell.

/// Owned label tuple, one label per axis.
pub type LabelTuple = Vec<String>;

/// Conversion from caller keys into a sequence of labels.
///
/// A bare string is a one-element key, so a rank-1 array accepts
/// `"a"` and `["a"]` interchangeably.
///
/// # Example
/// ```
/// use labeled_array::LabelKey;
///
/// assert_eq!("a".labels(), vec!["a"]);
/// assert_eq!(["a", "d"].labels(), vec!["a", "d"]);
/// assert_eq!(vec!["b".to_string()].labels(), vec!["b"]);
/// ```
pub trait LabelKey {
    /// Labels in axis order.
    fn labels(&self) -> Vec<&str>;
}

impl LabelKey for str {
    fn labels(&self) -> Vec<&str> {
        vec![self]
    }
}

impl LabelKey for String {
    fn labels(&self) -> Vec<&str> {
        vec![self.as_str()]
    }
}

impl<S: AsRef<str>> LabelKey for [S] {
    fn labels(&self) -> Vec<&str> {
        self.iter().map(AsRef::as_ref).collect()
    }
}

impl<S: AsRef<str>, const N: usize> LabelKey for [S; N] {
    fn labels(&self) -> Vec<&str> {
        self.as_slice().labels()
    }
}

impl<S: AsRef<str>> LabelKey for Vec<S> {
    fn labels(&self) -> Vec<&str> {
        self.as_slice().labels()
    }
}

impl<K: LabelKey + ?Sized> LabelKey for &K {
    fn labels(&self) -> Vec<&str> {
        (**self).labels()
    }
}
