use linear_collections::collections::contiguous::ArrayList;
use linear_collections::collections::linked::SinglyLinkedList;

fn main() {
    println!("\n[SinglyLinkedList]\n");

    let mut list = SinglyLinkedList::new();

    list.push_back(5);
    list.push_back(10);
    list.push_back(3);
    list.insert(1, 7);

    assert_eq!(list.len(), 4);
    assert_eq!(list.get(2), &10);

    list.remove(1);
    assert!(!list.is_empty());

    println!("List items:");
    for i in 0..list.len() {
        println!("{}", list.get(i));
    }

    list.sort();
    println!("Sorted: {list}");

    list.set(1, 15);
    println!("{list:?}");

    list.clear();
    assert!(list.is_empty());

    println!("\n[ArrayList]\n");

    let mut arr = ArrayList::with_cap(1);
    for i in [5, 10, 3] {
        arr.push(i);
        println!("{arr:?}");
    }

    arr.insert(1, 7);
    println!("{arr}");
    let removed = arr.remove_item(&10);
    println!("{removed:?}, {arr}");

    arr.sort();
    println!("Sorted: {arr}");

    arr.clear();
    assert!(arr.is_empty());

    println!("\nTesting completed successfully.");
}
