//! Named entities and individuals.

use crate::vocab::owl;
use oxrdf::vocab::rdfs;
use oxrdf::{BlankNode, IriParseError, NamedNode, NamedNodeRef, Term};
use std::cmp::Ordering;
use std::fmt;

macro_rules! iri_entity {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(NamedNode);

        impl $name {
            #[doc = concat!("Creates a new `", stringify!($name), "` from a named node.")]
            #[inline]
            pub fn new(iri: NamedNode) -> Self {
                Self(iri)
            }

            #[doc = concat!("Creates a new `", stringify!($name), "` from an IRI string.")]
            #[inline]
            pub fn new_from_iri(iri: impl Into<String>) -> Result<Self, IriParseError> {
                Ok(Self(NamedNode::new(iri)?))
            }

            #[inline]
            pub fn iri(&self) -> &NamedNode {
                &self.0
            }

            #[inline]
            pub fn into_inner(self) -> NamedNode {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl From<NamedNode> for $name {
            fn from(node: NamedNode) -> Self {
                Self(node)
            }
        }

        impl From<NamedNodeRef<'_>> for $name {
            fn from(node: NamedNodeRef<'_>) -> Self {
                Self(node.into_owned())
            }
        }

        impl From<$name> for NamedNode {
            fn from(entity: $name) -> Self {
                entity.0
            }
        }

        impl From<$name> for Term {
            fn from(entity: $name) -> Self {
                entity.0.into()
            }
        }

        impl AsRef<NamedNode> for $name {
            fn as_ref(&self) -> &NamedNode {
                &self.0
            }
        }
    };
}

iri_entity!(
    /// A named class, rendered through the short-form provider.
    OwlClass
);

iri_entity!(
    /// A property between two individuals.
    ObjectProperty
);

iri_entity!(
    /// A property from an individual to a literal.
    DataProperty
);

iri_entity!(
    /// A property of annotations, such as `rdfs:label`.
    AnnotationProperty
);

iri_entity!(
    /// A datatype (rdfs:Datatype) such as `xsd:integer`.
    Datatype
);

impl OwlClass {
    /// owl:Thing, the class of all individuals.
    #[inline]
    pub fn thing() -> Self {
        Self(owl::THING.into_owned())
    }

    /// owl:Nothing, the empty class.
    #[inline]
    pub fn nothing() -> Self {
        Self(owl::NOTHING.into_owned())
    }

    /// Returns `true` for owl:Thing.
    #[inline]
    pub fn is_thing(&self) -> bool {
        self.0.as_ref() == owl::THING
    }
}

impl Datatype {
    /// rdfs:Literal, the top datatype.
    #[inline]
    pub fn rdfs_literal() -> Self {
        Self(rdfs::LITERAL.into_owned())
    }
}

/// An individual.
///
/// Anonymous individuals are rendered with their blank node identifier, never through the
/// short-form provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Individual {
    Named(NamedNode),
    Anonymous(BlankNode),
}

impl Individual {
    #[inline]
    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    #[inline]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous(_))
    }

    #[inline]
    pub fn as_named(&self) -> Option<&NamedNode> {
        match self {
            Self::Named(n) => Some(n),
            Self::Anonymous(_) => None,
        }
    }

    #[inline]
    pub fn as_anonymous(&self) -> Option<&BlankNode> {
        match self {
            Self::Named(_) => None,
            Self::Anonymous(b) => Some(b),
        }
    }
}

impl Ord for Individual {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Named(a), Self::Named(b)) => a.cmp(b),
            (Self::Anonymous(a), Self::Anonymous(b)) => a.as_str().cmp(b.as_str()),
            (Self::Named(_), Self::Anonymous(_)) => Ordering::Less,
            (Self::Anonymous(_), Self::Named(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Individual {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(n) => n.fmt(f),
            Self::Anonymous(b) => b.fmt(f),
        }
    }
}

impl From<NamedNode> for Individual {
    fn from(node: NamedNode) -> Self {
        Self::Named(node)
    }
}

impl From<BlankNode> for Individual {
    fn from(node: BlankNode) -> Self {
        Self::Anonymous(node)
    }
}

impl From<Individual> for Term {
    fn from(individual: Individual) -> Self {
        match individual {
            Individual::Named(n) => n.into(),
            Individual::Anonymous(b) => b.into(),
        }
    }
}

/// Any named OWL entity, as declared by a `Declaration` axiom.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Entity {
    Class(OwlClass),
    ObjectProperty(ObjectProperty),
    DataProperty(DataProperty),
    AnnotationProperty(AnnotationProperty),
    Datatype(Datatype),
    NamedIndividual(NamedNode),
}

impl Entity {
    /// Returns the IRI of this entity.
    #[inline]
    pub fn iri(&self) -> &NamedNode {
        match self {
            Self::Class(e) => e.iri(),
            Self::ObjectProperty(e) => e.iri(),
            Self::DataProperty(e) => e.iri(),
            Self::AnnotationProperty(e) => e.iri(),
            Self::Datatype(e) => e.iri(),
            Self::NamedIndividual(e) => e,
        }
    }

    /// Returns a borrowed view of this entity.
    #[inline]
    pub fn as_ref(&self) -> EntityRef<'_> {
        match self {
            Self::Class(e) => EntityRef::Class(e),
            Self::ObjectProperty(e) => EntityRef::ObjectProperty(e),
            Self::DataProperty(e) => EntityRef::DataProperty(e),
            Self::AnnotationProperty(e) => EntityRef::AnnotationProperty(e),
            Self::Datatype(e) => EntityRef::Datatype(e),
            Self::NamedIndividual(e) => EntityRef::NamedIndividual(e),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_ref().fmt(f)
    }
}

impl From<OwlClass> for Entity {
    fn from(e: OwlClass) -> Self {
        Self::Class(e)
    }
}

impl From<ObjectProperty> for Entity {
    fn from(e: ObjectProperty) -> Self {
        Self::ObjectProperty(e)
    }
}

impl From<DataProperty> for Entity {
    fn from(e: DataProperty) -> Self {
        Self::DataProperty(e)
    }
}

impl From<AnnotationProperty> for Entity {
    fn from(e: AnnotationProperty) -> Self {
        Self::AnnotationProperty(e)
    }
}

impl From<Datatype> for Entity {
    fn from(e: Datatype) -> Self {
        Self::Datatype(e)
    }
}

/// A borrowed [`Entity`].
///
/// This is what short form providers receive: the entity kind is kept so that
/// a provider may name a class and a property sharing an IRI differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRef<'a> {
    Class(&'a OwlClass),
    ObjectProperty(&'a ObjectProperty),
    DataProperty(&'a DataProperty),
    AnnotationProperty(&'a AnnotationProperty),
    Datatype(&'a Datatype),
    NamedIndividual(&'a NamedNode),
}

impl<'a> EntityRef<'a> {
    /// Returns the IRI of this entity.
    #[inline]
    pub fn iri(self) -> NamedNodeRef<'a> {
        match self {
            Self::Class(e) => e.iri().as_ref(),
            Self::ObjectProperty(e) => e.iri().as_ref(),
            Self::DataProperty(e) => e.iri().as_ref(),
            Self::AnnotationProperty(e) => e.iri().as_ref(),
            Self::Datatype(e) => e.iri().as_ref(),
            Self::NamedIndividual(e) => e.as_ref(),
        }
    }

    /// Converts this reference into an owned entity.
    #[inline]
    pub fn into_owned(self) -> Entity {
        match self {
            Self::Class(e) => Entity::Class(e.clone()),
            Self::ObjectProperty(e) => Entity::ObjectProperty(e.clone()),
            Self::DataProperty(e) => Entity::DataProperty(e.clone()),
            Self::AnnotationProperty(e) => Entity::AnnotationProperty(e.clone()),
            Self::Datatype(e) => Entity::Datatype(e.clone()),
            Self::NamedIndividual(e) => Entity::NamedIndividual(e.clone()),
        }
    }
}

impl fmt::Display for EntityRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iri().fmt(f)
    }
}

impl<'a> From<&'a Entity> for EntityRef<'a> {
    fn from(entity: &'a Entity) -> Self {
        entity.as_ref()
    }
}

impl<'a> From<&'a OwlClass> for EntityRef<'a> {
    fn from(e: &'a OwlClass) -> Self {
        Self::Class(e)
    }
}

impl<'a> From<&'a ObjectProperty> for EntityRef<'a> {
    fn from(e: &'a ObjectProperty) -> Self {
        Self::ObjectProperty(e)
    }
}

impl<'a> From<&'a DataProperty> for EntityRef<'a> {
    fn from(e: &'a DataProperty) -> Self {
        Self::DataProperty(e)
    }
}

impl<'a> From<&'a AnnotationProperty> for EntityRef<'a> {
    fn from(e: &'a AnnotationProperty) -> Self {
        Self::AnnotationProperty(e)
    }
}

impl<'a> From<&'a Datatype> for EntityRef<'a> {
    fn from(e: &'a Datatype) -> Self {
        Self::Datatype(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owl_class() {
        let iri = NamedNode::new_unchecked("http://example.org/Person");
        let class = OwlClass::new(iri.clone());
        assert_eq!(class.iri(), &iri);
        assert_eq!(class.to_string(), iri.to_string());
        assert!(!class.is_thing());
        assert!(OwlClass::thing().is_thing());
    }

    #[test]
    fn test_new_from_iri_rejects_relative() {
        assert!(ObjectProperty::new_from_iri("knows").is_err());
        assert!(DataProperty::new_from_iri("http://example.org/age").is_ok());
    }

    #[test]
    fn test_individual_order() {
        let named = Individual::Named(NamedNode::new_unchecked("http://example.org/b"));
        let other = Individual::Named(NamedNode::new_unchecked("http://example.org/a"));
        let anonymous = Individual::Anonymous(BlankNode::new_unchecked("a"));
        let mut individuals = vec![anonymous.clone(), named.clone(), other.clone()];
        individuals.sort();
        assert_eq!(individuals, vec![other, named, anonymous]);
    }

    #[test]
    fn test_entity_ref_round_trip() {
        let datatype = Datatype::rdfs_literal();
        let entity = Entity::Datatype(datatype.clone());
        assert_eq!(entity.as_ref(), EntityRef::Datatype(&datatype));
        assert_eq!(entity.as_ref().into_owned(), entity);
        assert_eq!(entity.iri().as_ref(), rdfs::LITERAL);
    }
}
