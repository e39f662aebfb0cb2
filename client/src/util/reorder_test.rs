use super::*;

#[test]
fn move_item_forward_shifts_elements_back() {
    let mut items = vec!['a', 'b', 'c', 'd'];
    assert!(move_item(&mut items, 0, 2));
    assert_eq!(items, vec!['b', 'c', 'a', 'd']);
}

#[test]
fn move_item_backward_shifts_elements_forward() {
    let mut items = vec!['a', 'b', 'c', 'd'];
    assert!(move_item(&mut items, 3, 1));
    assert_eq!(items, vec!['a', 'd', 'b', 'c']);
}

#[test]
fn move_item_ignores_same_index_and_out_of_range() {
    let mut items = vec![1, 2, 3];
    assert!(!move_item(&mut items, 1, 1));
    assert!(!move_item(&mut items, 3, 0));
    assert!(!move_item(&mut items, 0, 3));
    assert_eq!(items, vec![1, 2, 3]);
}
