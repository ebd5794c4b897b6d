//! OWL 2 structural model.
//!
//! This crate provides the entities, class expressions, data ranges, annotations,
//! axioms and SWRL rules of the [OWL 2 structural specification](https://www.w3.org/TR/owl2-syntax/).
//! Every type that may occur as an unordered operand implements [`Ord`], so that
//! consumers such as renderers can emit operands in a stable order.
//!
//! # Example
//! ```
//! use oxowl::{Axiom, ClassExpression, ObjectProperty, OwlClass};
//! use oxrdf::NamedNode;
//!
//! let pizza = OwlClass::new(NamedNode::new("http://example.org/Pizza")?);
//! let topping = OwlClass::new(NamedNode::new("http://example.org/Topping")?);
//! let has_topping = ObjectProperty::new(NamedNode::new("http://example.org/hasTopping")?);
//!
//! let axiom = Axiom::subclass_of(
//!     pizza,
//!     ClassExpression::some_values_from(has_topping, topping.into()),
//! );
//! assert_eq!(axiom.kind(), "SubClassOf");
//! # Result::<_, Box<dyn std::error::Error>>::Ok(())
//! ```

mod annotation;
mod axiom;
mod entity;
mod expression;
mod order;
mod swrl;
pub mod vocab;

pub use annotation::{Annotation, AnnotationSubject, AnnotationValue};
pub use axiom::Axiom;
pub use entity::{
    AnnotationProperty, DataProperty, Datatype, Entity, EntityRef, Individual, ObjectProperty,
    OwlClass,
};
pub use expression::{
    ClassExpression, DataRange, Facet, FacetRestriction, ObjectPropertyExpression,
};
pub use order::cmp_literals;
pub use swrl::{Atom, DArgument, IArgument, SwrlRule};
