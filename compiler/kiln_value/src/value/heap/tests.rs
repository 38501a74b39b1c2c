use super::*;

#[test]
fn heap_deref() {
    let h = Heap::new(42i64);
    assert_eq!(*h, 42);
}

#[test]
fn clones_share_the_allocation() {
    let h1 = Heap::new(vec![1, 2, 3]);
    let h2 = h1.clone();
    assert_eq!(*h1, *h2);
    assert!(Heap::ptr_eq(&h1, &h2));
}

#[test]
fn equality_is_by_content() {
    let a = Heap::from_arc(Arc::<str>::from("sym"));
    let b = Heap::from_arc(Arc::<str>::from("sym"));
    assert_eq!(a, b);
    assert!(!Heap::ptr_eq(&a, &b));
}

#[test]
fn make_mut_copies_on_write() {
    let mut h1 = Heap::new(vec![1, 2]);
    let h2 = h1.clone();
    h1.make_mut().push(3);
    assert_eq!(*h1, vec![1, 2, 3]);
    assert_eq!(*h2, vec![1, 2]);
}

#[test]
fn into_inner_without_sharing() {
    let h = Heap::new(String::from("abc"));
    assert_eq!(h.into_inner(), "abc");
}
