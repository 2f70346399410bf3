use super::*;

#[test]
fn merge_covers_both() {
    let a = Span::new(3, 5);
    let b = Span::new(10, 12);
    assert_eq!(a.merge(b), Span::new(3, 12));
    assert_eq!(b.merge(a), Span::new(3, 12));
}

#[test]
fn len_and_empty() {
    assert_eq!(Span::new(2, 9).len(), 7);
    assert!(Span::point(4).is_empty());
    assert!(!Span::new(4, 5).is_empty());
}

#[test]
fn range_round_trip() {
    let span = Span::from_range(4..11);
    assert_eq!(span, Span::new(4, 11));
    assert_eq!(span.to_range(), 4..11);
}

#[test]
fn debug_and_display() {
    assert_eq!(format!("{:?}", Span::new(1, 2)), "1..2");
    assert_eq!(Span::new(1, 2).to_string(), "1..2");
}
