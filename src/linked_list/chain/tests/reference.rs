extern crate std;

use std::vec::Vec;

use alloc::collections::LinkedList;

use crate::{error::ChainError, linked_list::chain::traits::OrderedList};

fn reference_of(values: &[i32]) -> LinkedList<Option<i32>> {
    values.iter().copied().map(Some).collect()
}

fn slots(list: &LinkedList<Option<i32>>) -> Vec<Option<i32>> {
    list.iter().copied().collect()
}

#[test]
fn test_reference_insert_and_remove() {
    let mut list = reference_of(&[10, 20, 30]);

    OrderedList::insert(&mut list, 1, Some(15)).unwrap();
    assert_eq!(slots(&list), [Some(10), Some(15), Some(20), Some(30)]);

    OrderedList::insert(&mut list, 4, Some(40)).unwrap();
    assert_eq!(OrderedList::len(&list), 5);

    assert_eq!(OrderedList::remove(&mut list, 0), Ok(Some(10)));
    assert_eq!(OrderedList::remove(&mut list, 3), Ok(Some(40)));
    assert_eq!(slots(&list), [Some(15), Some(20), Some(30)]);
}

#[test]
fn test_reference_bounds() {
    let mut list = reference_of(&[1, 2, 3]);
    let out_of_range = ChainError::OutOfRange { index: 3, len: 3 };

    assert_eq!(OrderedList::get(&list, 3), Err(out_of_range));
    assert_eq!(OrderedList::remove(&mut list, 3), Err(out_of_range));
    assert_eq!(OrderedList::set(&mut list, 3, None), Err(out_of_range));
    assert!(OrderedList::insert(&mut list, 4, None).is_err());
    assert!(OrderedList::insert(&mut list, 3, None).is_ok());
}

#[test]
fn test_reference_lookups() {
    let mut list = reference_of(&[1, 2, 1]);
    OrderedList::push(&mut list, None);

    assert!(OrderedList::contains(&list, None));
    assert_eq!(OrderedList::index_of(&list, Some(&1)), Some(0));
    assert_eq!(OrderedList::last_index_of(&list, Some(&1)), Some(2));
    assert_eq!(OrderedList::last_index_of(&list, None), Some(3));
    assert_eq!(OrderedList::set(&mut list, 3, Some(4)), Ok(None));

    assert!(OrderedList::remove_value(&mut list, Some(&1)));
    assert_eq!(slots(&list), [Some(2), Some(1), Some(4)]);
    assert!(!OrderedList::remove_value(&mut list, None));
}
