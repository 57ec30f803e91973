#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::iter;
use std::panic::{self, AssertUnwindSafe};

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn contents<T: Clone>(list: &SinglyLinkedList<T>) -> Box<[T]> {
    (0..list.len()).map(|i| list.get(i).clone()).collect()
}

#[test]
fn test_push_and_get() {
    let mut list = SinglyLinkedList::new();
    assert!(list.is_empty());
    assert_eq!(list.front(), None);

    for i in 0..10 {
        list.push_back(i * 2);
    }
    list.verify_links();

    assert_eq!(list.len(), 10);
    for i in 0..10 {
        assert_eq!(
            *list.get(i),
            i as i32 * 2,
            "Elements should be returned in insertion order."
        );
    }
    assert_eq!(list.front(), Some(&0));

    list.push_front(-1);
    list.verify_links();
    assert_eq!(list[0], -1, "Pushing to the front should replace the head.");
    assert_eq!(list[1], 0);
    assert_eq!(list.len(), 11);
}

#[test]
fn test_insert_and_remove() {
    let mut list = SinglyLinkedList::new();
    list.push_back(5);
    list.push_back(10);
    list.push_back(3);

    list.insert(1, 7);
    list.verify_links();
    assert_eq!(*contents(&list), [5, 7, 10, 3], "Following elements should shift back.");
    assert_eq!(list.len(), 4);
    assert_eq!(list[2], 10);

    assert_eq!(list.remove(1), 7);
    list.verify_links();
    assert_eq!(*contents(&list), [5, 10, 3], "Removing should relink around the node.");

    list.insert(0, 1);
    list.insert(4, 9);
    list.verify_links();
    assert_eq!(*contents(&list), [1, 5, 10, 3, 9], "Inserting at 0 and len should work.");

    assert_eq!(list.remove(0), 1, "Removing the head should promote its successor.");
    assert_eq!(list.remove(3), 9, "Removing the last node should terminate the chain.");
    list.verify_links();
    assert_eq!(*contents(&list), [5, 10, 3]);
}

#[test]
fn test_bounds() {
    let mut list: SinglyLinkedList<_> = [5, 10, 3].into_iter().collect();

    assert_eq!(
        list.try_get(3),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "An index equal to len should be out of bounds."
    );
    assert_eq!(list.try_set(3, 0), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(list.try_remove(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(list.try_insert(4, 0), Err(IndexOutOfBounds { index: 4, len: 3 }));
    assert_eq!(*contents(&list), [5, 10, 3], "Failed operations shouldn't mutate the list.");
    list.verify_links();

    let mut empty = SinglyLinkedList::<u8>::new();
    assert_eq!(empty.try_remove(0), Err(IndexOutOfBounds { index: 0, len: 0 }));
    assert_eq!(empty.pop_front(), None);

    assert_panics!({
        let list: SinglyLinkedList<u8> = SinglyLinkedList::new();
        list.get(0);
    });
    assert_panics!({
        let mut list: SinglyLinkedList<_> = (0..3).collect();
        list.remove(3);
    }, "Index 3 out of bounds for collection with 3 elements!");
    assert_panics!({
        let mut list: SinglyLinkedList<_> = (0..3).collect();
        list.insert(5, 0);
    });
}

#[test]
fn test_set() {
    let mut list: SinglyLinkedList<_> = "abc".chars().collect();

    assert_eq!(list.set(1, 'x'), 'b', "Setting should return the replaced element.");
    *list.get_mut(2) = 'y';
    list[0] = 'w';
    if let Some(front) = list.front_mut() {
        *front = front.to_ascii_uppercase();
    }

    assert_eq!(*contents(&list), ['W', 'x', 'y']);
    assert_eq!(list.len(), 3, "Setting shouldn't change the length.");
}

#[test]
fn test_sort() {
    let mut list: SinglyLinkedList<i32> = [9, -3, 5, 5, 0, 12, -7, 1].into_iter().collect();
    list.sort();
    list.verify_links();

    for i in 0..list.len() - 1 {
        assert!(list[i] <= list[i + 1], "Sorted elements should be in ascending order.");
    }
    assert_eq!(*contents(&list), [-7, -3, 0, 1, 5, 5, 9, 12]);

    let mut list: SinglyLinkedList<_> = (0..20_i32).rev().collect();
    list.sort();
    assert_eq!(*contents(&list), *(0..20_i32).collect::<Box<[_]>>());

    let mut list: SinglyLinkedList<_> = ["one"].into_iter().collect();
    list.sort();
    assert_eq!(list.to_string(), "(one)", "Single element lists are already sorted.");

    let mut list = SinglyLinkedList::<u8>::new();
    list.sort();
    assert!(list.is_empty());
}

#[test]
fn test_clear() {
    let mut list = SinglyLinkedList::new();
    assert!(list.is_empty());
    list.push_back(1);
    assert!(!list.is_empty());

    list.clear();
    assert!(list.is_empty(), "Clearing should leave the list empty.");
    assert!(list.head.is_none(), "Clearing should release the head.");
    assert_eq!(list.try_get(0), Err(IndexOutOfBounds { index: 0, len: 0 }));

    list.push_back(2);
    assert_eq!(*contents(&list), [2], "A cleared list should be reusable.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut list: SinglyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(list.remove(4));
    assert_eq!(counter.count(), 1, "The removed element should be returned, then dropped.");

    list.set(0, counter.clone());
    assert_eq!(counter.count(), 2, "The replaced element should be dropped.");

    list.clear();
    assert_eq!(counter.count(), 11, "Clearing should drop every element.");

    list.extend(iter::repeat_with(|| counter.clone()).take(5));
    drop(list);
    assert_eq!(counter.count(), 16, "Dropping the list should drop every element.");
}

#[test]
fn test_extend_interrupted() {
    let mut list: SinglyLinkedList<_> = (0..2).collect();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        list.extend((2..10).map(|i| if i == 5 { panic!("source exhausted early") } else { i }));
    }));
    assert!(result.is_err());

    list.verify_links();
    assert_eq!(
        *contents(&list),
        [0, 1, 2, 3, 4],
        "Nodes linked before the iterator panicked should be counted in the length."
    );

    list.push_back(5);
    list.verify_links();
    assert_eq!(list.len(), 6);
}

#[test]
fn test_long_chain_drop() {
    let mut list: SinglyLinkedList<_> = (0..200_000_u32).collect();
    assert_eq!(list.len(), 200_000);
    list.clear();

    let list: SinglyLinkedList<_> = (0..200_000_u32).collect();
    drop(list);
}

#[test]
fn test_search() {
    let list: SinglyLinkedList<_> = [4, 8, 15, 16, 23, 42, 8].into_iter().collect();

    assert_eq!(list.index_of(&8), Some(1), "The first match should be found.");
    assert_eq!(list.index_of(&99), None);
    assert!(list.contains(&42));
    assert!(!list.contains(&0));
}

#[test]
fn test_equality_and_hash() {
    let a: SinglyLinkedList<_> = (0_usize..5).collect();
    let mut b = SinglyLinkedList::new();
    for i in (0_usize..5).rev() {
        b.push_front(i);
    }

    assert_eq!(a, b, "Different construction methods should produce equal results.");
    let state = RandomState::new();
    assert_eq!(state.hash_one(&a), state.hash_one(&b), "Equal lists should hash equally.");

    let mut c = a.clone();
    assert_eq!(a, c, "Cloned lists should be equal.");
    c.push_back(5);
    assert_ne!(a, c);
}

#[test]
fn test_formatting() {
    let list: SinglyLinkedList<_> = [5, 10, 3].into_iter().collect();

    assert_eq!(list.to_string(), "(5) -> (10) -> (3)");
    assert_eq!(format!("{list:?}"), "SinglyLinkedList { contents: [5, 10, 3], len: 3 }");
    assert_eq!(SinglyLinkedList::<u8>::new().to_string(), "");
}
