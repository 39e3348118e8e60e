use ndgrid::{IndexVector, IxVec, Ixs, MAX_NDIM};

#[test]
fn construction() {
    let v = IxVec::zeros(3);
    assert_eq!(v[..], [0, 0, 0][..]);

    let v = IxVec::copy_from(&[1, -2, 3]);
    assert_eq!(v.len(), 3);
    assert_eq!(v[1], -2);

    assert_eq!(IxVec::from([1, 2]), IxVec::copy_from(&[1, 2]));

    let v: IxVec = (0..4).map(|x| x as Ixs).collect();
    assert_eq!(v[..], [0, 1, 2, 3][..]);

    assert!(IxVec::default().is_empty());
}

#[test]
fn push_appends() {
    let mut v = IxVec::default();
    v.push(7);
    v.push(-1);
    assert_eq!(v[..], [7, -1][..]);
    assert_eq!(v.len(), 2);
}

#[should_panic]
#[test]
fn push_past_capacity_panics() {
    let mut v = IxVec::zeros(MAX_NDIM);
    v.push(0);
}

#[should_panic]
#[test]
fn oversized_zeros_panics() {
    IxVec::zeros(MAX_NDIM + 1);
}

#[test]
fn elementwise_ops() {
    let a = IxVec::from([5, 3]);
    let b = IxVec::from([1, -1]);
    assert_eq!(a - b, IxVec::from([4, 4]));
    assert_eq!(a + b, IxVec::from([6, 2]));

    let mut c = a;
    c -= &b;
    assert_eq!(c[..], [4, 4][..]);
}

#[test]
fn products() {
    assert_eq!(IxVec::default().product(), 1);
    assert_eq!(IxVec::from([2, 3, 4]).product(), 24);
    assert_eq!(IxVec::from([2, 0]).product(), 0);

    assert_eq!(IxVec::from([2, 3]).product_checked(), Some(6));
    assert_eq!(IxVec::from([-1, 3]).product_checked(), None);
    assert_eq!(IxVec::from([isize::MAX, 2]).product_checked(), None);
}

#[should_panic]
#[test]
fn product_of_negative_entries_panics() {
    IxVec::from([-1, 3]).product();
}

#[test]
fn comparisons() {
    let a = IxVec::from([2, 3]);
    assert!(a.all_eq(&a));
    assert!(!a.all_eq(&IxVec::from([2])));
    assert!(a.all_ge(&a));
    assert!(a.all_ge(&IxVec::from([2, 2])));
    assert!(!a.all_ge(&IxVec::from([3, 0])));
    assert!(!a.all_ge(&IxVec::from([2])));
}

#[test]
fn iteration_and_indexing() {
    let mut v = IxVec::from([3, 1, 4]);
    assert_eq!(v.iter().sum::<Ixs>(), 8);
    assert_eq!(v[1..], [1, 4][..]);

    v[0] = -3;
    assert_eq!(v[0], -3);

    let doubled: Vec<Ixs> = v.iter().map(|x| x * 2).collect();
    assert_eq!(doubled, [-6, 2, 8]);
}
