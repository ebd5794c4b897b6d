//! Orderings for `oxrdf` terms that do not implement [`Ord`] themselves.

use oxrdf::Literal;
use std::cmp::Ordering;

/// Orders literals by lexical value, then datatype IRI, then language tag.
pub fn cmp_literals(a: &Literal, b: &Literal) -> Ordering {
    a.value()
        .cmp(b.value())
        .then_with(|| a.datatype().cmp(&b.datatype()))
        .then_with(|| a.language().cmp(&b.language()))
}

/// Lexicographic extension of [`cmp_literals`] to slices.
pub(crate) fn cmp_literal_slices(a: &[Literal], b: &[Literal]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        let order = cmp_literals(x, y);
        if order != Ordering::Equal {
            return order;
        }
    }
    a.len().cmp(&b.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::vocab::xsd;

    #[test]
    fn test_literal_order() {
        let a = Literal::new_simple_literal("a");
        let a_int = Literal::new_typed_literal("a", xsd::INTEGER);
        let b = Literal::new_simple_literal("b");
        assert_eq!(cmp_literals(&a, &b), Ordering::Less);
        assert_ne!(cmp_literals(&a, &a_int), Ordering::Equal);
        assert_eq!(cmp_literals(&a, &a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_slice_order_prefers_shorter_prefix() {
        let a = Literal::new_simple_literal("a");
        let b = Literal::new_simple_literal("b");
        assert_eq!(
            cmp_literal_slices(&[a.clone()], &[a.clone(), b.clone()]),
            Ordering::Less
        );
        assert_eq!(cmp_literal_slices(&[b], &[a]), Ordering::Greater);
    }
}
