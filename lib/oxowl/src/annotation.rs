//! Annotations attached to axioms and to annotation subjects.

use crate::entity::AnnotationProperty;
use crate::order::cmp_literals;
use oxrdf::{BlankNode, Literal, NamedNode};
use std::cmp::Ordering;

/// The value of an annotation: an IRI, a literal or an anonymous individual.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationValue {
    Iri(NamedNode),
    Literal(Literal),
    Anonymous(BlankNode),
}

impl AnnotationValue {
    fn rank(&self) -> u8 {
        match self {
            Self::Iri(_) => 0,
            Self::Literal(_) => 1,
            Self::Anonymous(_) => 2,
        }
    }
}

impl Ord for AnnotationValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Iri(a), Self::Iri(b)) => a.cmp(b),
            (Self::Literal(a), Self::Literal(b)) => cmp_literals(a, b),
            (Self::Anonymous(a), Self::Anonymous(b)) => a.as_str().cmp(b.as_str()),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for AnnotationValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<NamedNode> for AnnotationValue {
    fn from(iri: NamedNode) -> Self {
        Self::Iri(iri)
    }
}

impl From<Literal> for AnnotationValue {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<BlankNode> for AnnotationValue {
    fn from(node: BlankNode) -> Self {
        Self::Anonymous(node)
    }
}

/// The subject of an annotation assertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnnotationSubject {
    Iri(NamedNode),
    Anonymous(BlankNode),
}

impl Ord for AnnotationSubject {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Iri(a), Self::Iri(b)) => a.cmp(b),
            (Self::Anonymous(a), Self::Anonymous(b)) => a.as_str().cmp(b.as_str()),
            (Self::Iri(_), Self::Anonymous(_)) => Ordering::Less,
            (Self::Anonymous(_), Self::Iri(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for AnnotationSubject {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<NamedNode> for AnnotationSubject {
    fn from(iri: NamedNode) -> Self {
        Self::Iri(iri)
    }
}

impl From<BlankNode> for AnnotationSubject {
    fn from(node: BlankNode) -> Self {
        Self::Anonymous(node)
    }
}

/// An annotation `property value`, possibly itself annotated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation {
    pub property: AnnotationProperty,
    pub value: AnnotationValue,
    pub annotations: Vec<Annotation>,
}

impl Annotation {
    pub fn new(property: impl Into<AnnotationProperty>, value: impl Into<AnnotationValue>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            annotations: Vec::new(),
        }
    }

    /// Adds a nested annotation.
    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

impl Ord for Annotation {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.property, &self.value, &self.annotations).cmp(&(
            &other.property,
            &other.value,
            &other.annotations,
        ))
    }
}

impl PartialOrd for Annotation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotation_order() {
        let label = AnnotationProperty::new(NamedNode::new_unchecked(
            "http://www.w3.org/2000/01/rdf-schema#label",
        ));
        let b = Annotation::new(label.clone(), Literal::new_simple_literal("b"));
        let a = Annotation::new(label.clone(), Literal::new_simple_literal("a"));
        let iri = Annotation::new(label, NamedNode::new_unchecked("http://example.org/z"));
        let mut annotations = vec![b.clone(), a.clone(), iri.clone()];
        annotations.sort();
        assert_eq!(annotations, vec![iri, a, b]);
    }

    #[test]
    fn test_nested_annotation() {
        let comment = AnnotationProperty::new(NamedNode::new_unchecked(
            "http://www.w3.org/2000/01/rdf-schema#comment",
        ));
        let inner = Annotation::new(comment.clone(), Literal::new_simple_literal("source"));
        let outer =
            Annotation::new(comment, Literal::new_simple_literal("text")).with_annotation(inner);
        assert_eq!(outer.annotations.len(), 1);
    }
}
