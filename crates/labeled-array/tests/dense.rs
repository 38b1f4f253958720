use std::collections::HashMap;

use labeled_array::{
    DenseArray, DenseLabeledArray, LabelTuple, LabeledArray, LabeledArrayError,
};

fn key(labels: &[&str]) -> LabelTuple {
    labels.iter().map(|s| s.to_string()).collect()
}

fn sample() -> DenseLabeledArray<f64> {
    DenseLabeledArray::new([vec!["a", "b", "c"], vec!["d", "e"]], 1.0).unwrap()
}

#[test]
fn test_initialization() {
    let a = sample();
    assert_eq!(a.rank(), 2);
    assert_eq!(a.shape(), &[3, 2]);
    assert_eq!(a.len(), 6);
    assert_eq!(a.to_dense_array(), DenseArray::filled(&[3, 2], 1.0));
}

#[test]
fn test_initialization_with_duplicated_keys() {
    let result = DenseLabeledArray::<f64>::new([vec!["a", "a"], vec!["b", "c"]], 0.0);
    assert_eq!(
        result.unwrap_err(),
        LabeledArrayError::DuplicatedLabel {
            axis: 0,
            label: "a".to_string()
        }
    );
}

#[test]
fn test_getitem() {
    let mut a = sample();
    a.set(&["a", "d"], 2.0).unwrap();
    assert_eq!(a.get(&["a", "d"]).unwrap(), 2.0);
    a.set(&["a", "e"], 1.0).unwrap();
    assert_eq!(a.get(&["a", "e"]).unwrap(), 1.0);
}

#[test]
fn test_getitem_wrong_dimension() {
    let a = sample();
    assert_eq!(
        a.get(&["a"]),
        Err(LabeledArrayError::WrongDimension {
            expected: 2,
            actual: 1
        })
    );
}

#[test]
fn test_setitem() {
    let mut a = sample();
    a.set(&["b", "e"], 3.0).unwrap();
    assert_eq!(a.get(&["b", "e"]).unwrap(), 3.0);
    assert_eq!(a.to_raw_array().get(&[1, 1]).unwrap(), 3.0);
}

#[test]
fn test_setitem_wrong_dimension() {
    let mut a = sample();
    assert_eq!(
        a.set(&["a", "b", "c"], 1.0),
        Err(LabeledArrayError::WrongDimension {
            expected: 2,
            actual: 3
        })
    );
}

#[test]
fn test_unknown_label() {
    let a = sample();
    assert_eq!(
        a.get(&["z", "d"]),
        Err(LabeledArrayError::UnknownLabel {
            axis: 0,
            label: "z".to_string()
        })
    );
    assert!(!a.contains_key(&["z", "d"]));
    assert!(a.contains_key(&["c", "e"]));
}

#[test]
fn test_iteration() {
    let a = sample();
    let keys: Vec<LabelTuple> = a.iter_keys().collect();
    assert_eq!(keys.len(), 6);
    assert!(keys.contains(&key(&["a", "d"])));
    assert!(keys.contains(&key(&["c", "e"])));
    assert_eq!(keys.first(), Some(&key(&["a", "d"])));
    assert_eq!(keys.last(), Some(&key(&["c", "e"])));
}

#[test]
fn test_keys() {
    let a = sample();
    let keys = a.keys();
    assert_eq!(keys.len(), 6);
    assert!(keys.contains(&key(&["a", "d"])));
}

#[test]
fn test_values() {
    let mut a = sample();
    a.set(&["a", "d"], 5.0).unwrap();
    a.set(&["c", "e"], 6.0).unwrap();
    let values = a.values();
    assert_eq!(values, vec![5.0, 1.0, 1.0, 1.0, 1.0, 6.0]);
}

#[test]
fn test_items() {
    let mut a = sample();
    a.set(&["a", "d"], 7.0).unwrap();
    let items = a.items();
    assert!(items.contains(&(key(&["a", "d"]), 7.0)));
    assert!(items.contains(&(key(&["b", "d"]), 1.0)));
}

#[test]
fn test_to_map() {
    let mut a = sample();
    a.set(&["a", "d"], 8.0).unwrap();
    let map = a.to_map();
    assert_eq!(map.len(), 6);
    assert_eq!(map[&key(&["a", "d"])], 8.0);
    assert_eq!(map[&key(&["b", "e"])], 1.0);
}

#[test]
fn test_from_map() {
    let map = HashMap::from([(key(&["a", "x"]), 1.0), (key(&["b", "y"]), 2.0)]);
    let a = DenseLabeledArray::from_map(map, 0.0).unwrap();
    assert_eq!(a.axis_labels(), &[key(&["a", "b"]), key(&["x", "y"])]);
    assert_eq!(a.get(&["a", "x"]).unwrap(), 1.0);
    assert_eq!(a.get(&["b", "y"]).unwrap(), 2.0);
    assert_eq!(a.get(&["a", "y"]).unwrap(), 0.0);
    assert_eq!(a.get(&["b", "x"]).unwrap(), 0.0);
}

#[test]
fn test_from_map_empty() {
    let map: HashMap<LabelTuple, f64> = HashMap::new();
    assert_eq!(
        DenseLabeledArray::from_map(map, 0.0).unwrap_err(),
        LabeledArrayError::EmptyMapping
    );
}

#[test]
fn test_from_map_with_labels() {
    let map = HashMap::from([(key(&["a", "x"]), 1.0)]);
    let a =
        DenseLabeledArray::from_map_with_labels([vec!["a", "b"], vec!["x", "y"]], map, -1.0)
            .unwrap();
    assert_eq!(a.get(&["a", "x"]).unwrap(), 1.0);
    assert_eq!(a.get(&["b", "y"]).unwrap(), -1.0);
}

#[test]
fn test_from_map_with_labels_ignores_foreign_keys() {
    let entries = vec![(key(&["a", "x"]), 1.0), (key(&["q", "x"]), 5.0), (key(&["a"]), 6.0)];
    let a = DenseLabeledArray::from_map_with_labels([vec!["a", "b"], vec!["x"]], entries, 0.0)
        .unwrap();
    assert_eq!(a.values(), vec![1.0, 0.0]);
}

#[test]
fn test_display() {
    let a = sample();
    assert_eq!(a.to_string(), "<DenseLabeledArray: dimensions (3, 2)>");
}

#[test]
fn test_update() {
    let mut a = sample();
    assert_eq!(
        a.update(vec![(key(&["a", "d"]), 1.0)]),
        Err(LabeledArrayError::Unsupported("update"))
    );
    assert_eq!(a.get(&["a", "d"]).unwrap(), 1.0);
}

#[test]
fn test_generate() {
    let a = sample();
    let new_array = DenseArray::filled(&[3, 2], 0.0);
    let b = a.generate(new_array.clone()).unwrap();
    assert_eq!(b.to_raw_array(), &new_array);
    assert_eq!(b.shape(), a.shape());
    assert_eq!(b.axis_labels(), a.axis_labels());
}

#[test]
fn test_generate_wrong_shape() {
    let a = sample();
    assert_eq!(
        a.generate(DenseArray::filled(&[2, 3], 0.0)).unwrap_err(),
        LabeledArrayError::WrongShape {
            expected: vec![3, 2],
            actual: vec![2, 3]
        }
    );
}

#[test]
fn test_generate_wrong_dimension() {
    let a = sample();
    assert_eq!(
        a.generate(DenseArray::filled(&[3, 2, 1], 0.0)).unwrap_err(),
        LabeledArrayError::WrongDimension {
            expected: 2,
            actual: 3
        }
    );
}

#[test]
fn test_generate_sparse() {
    let a = sample();
    let values = DenseArray::from_vec_with_shape(vec![1.0, 2.0, 1.0, 1.0, 3.0, 1.0], &[3, 2])
        .unwrap();
    let sparse = a.generate_sparse(values).unwrap();
    assert_eq!(sparse.fill_value(), 1.0);
    assert_eq!(sparse.nnz(), 2);
    assert_eq!(sparse.get(&["a", "e"]).unwrap(), 2.0);
    assert_eq!(sparse.get(&["c", "d"]).unwrap(), 3.0);
}

#[test]
fn test_raw_array_shared_not_copied() {
    let mut a = sample();
    a.to_raw_array_mut().fill(4.0);
    assert!(a.values().iter().all(|&v| v == 4.0));
    let copy = a.to_dense_array();
    a.set(&["a", "d"], 0.0).unwrap();
    assert_eq!(copy.get(&[0, 0]).unwrap(), 4.0);
}

#[test]
fn test_from_map_reference_scenario() {
    let map = HashMap::from([(key(&["a", "d"]), 10.0), (key(&["c", "e"]), 20.0)]);
    let a = DenseLabeledArray::from_map_with_labels(
        [vec!["a", "b", "c"], vec!["d", "e"]],
        map,
        -1.0,
    )
    .unwrap();
    assert_eq!(a.get(&["b", "d"]).unwrap(), -1.0);
    assert_eq!(a.get(&["a", "d"]).unwrap(), 10.0);
    assert_eq!(a.get(&["c", "e"]).unwrap(), 20.0);
}

#[test]
fn test_raw_view_keeps_shape() {
    let mut a = sample();
    let raw = a.to_raw_array_mut();
    assert_eq!(raw.len(), 6);
    raw[1] = 7.0;
    assert_eq!(a.to_raw_array().dims(), vec![3, 2]);
    assert_eq!(a.get(&["a", "e"]).unwrap(), 7.0);
    assert_eq!(a.values().len(), a.keys().len());
    assert_eq!(a.items().len(), a.size());
}
