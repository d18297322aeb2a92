use super::*;
use pretty_assertions::assert_eq;

#[test]
fn len_counts_bytes() {
    assert_eq!(Span::new(1, 6).len(), 5);
}

#[test]
fn point_is_empty() {
    assert!(Span::point(3).is_empty());
    assert_eq!(format!("{:?}", Span::point(3)), "3..3");
}

#[test]
fn line_col_counts_from_one() {
    let source = "new x := 1\nwrite y";
    assert_eq!(Span::new(0, 3).line_col(source), (1, 1));
    assert_eq!(Span::new(17, 18).line_col(source), (2, 7));
}

#[test]
fn line_col_clamps_past_end() {
    assert_eq!(Span::point(100).line_col("ab"), (1, 3));
}
