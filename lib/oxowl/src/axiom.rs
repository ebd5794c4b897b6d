//! The closed set of axioms.

use crate::annotation::{Annotation, AnnotationSubject};
use crate::entity::{AnnotationProperty, DataProperty, Datatype, Entity, Individual, OwlClass};
use crate::expression::{ClassExpression, DataRange, ObjectPropertyExpression};
use crate::swrl::SwrlRule;
use oxrdf::{Literal, NamedNode};

/// An OWL 2 axiom.
///
/// Operands of the n-ary variants (equivalences, disjointness, same and different
/// individuals, keys) carry no meaningful order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Axiom {
    /// `C SubClassOf D`
    SubClassOf {
        sub_class: ClassExpression,
        super_class: ClassExpression,
    },
    EquivalentClasses(Vec<ClassExpression>),
    DisjointClasses(Vec<ClassExpression>),

    /// `C DisjointUnionOf D, E`
    DisjointUnion {
        class: OwlClass,
        disjoint_classes: Vec<ClassExpression>,
    },
    SubObjectPropertyOf {
        sub_property: ObjectPropertyExpression,
        super_property: ObjectPropertyExpression,
    },

    /// `p o q SubPropertyOf r`
    SubPropertyChainOf {
        property_chain: Vec<ObjectPropertyExpression>,
        super_property: ObjectPropertyExpression,
    },
    EquivalentObjectProperties(Vec<ObjectPropertyExpression>),
    DisjointObjectProperties(Vec<ObjectPropertyExpression>),

    /// `p InverseOf q`
    InverseObjectProperties(ObjectPropertyExpression, ObjectPropertyExpression),
    ObjectPropertyDomain {
        property: ObjectPropertyExpression,
        domain: ClassExpression,
    },
    ObjectPropertyRange {
        property: ObjectPropertyExpression,
        range: ClassExpression,
    },
    FunctionalObjectProperty(ObjectPropertyExpression),
    InverseFunctionalObjectProperty(ObjectPropertyExpression),
    ReflexiveObjectProperty(ObjectPropertyExpression),
    IrreflexiveObjectProperty(ObjectPropertyExpression),
    SymmetricObjectProperty(ObjectPropertyExpression),
    AsymmetricObjectProperty(ObjectPropertyExpression),
    TransitiveObjectProperty(ObjectPropertyExpression),
    SubDataPropertyOf {
        sub_property: DataProperty,
        super_property: DataProperty,
    },
    EquivalentDataProperties(Vec<DataProperty>),
    DisjointDataProperties(Vec<DataProperty>),
    DataPropertyDomain {
        property: DataProperty,
        domain: ClassExpression,
    },
    DataPropertyRange {
        property: DataProperty,
        range: DataRange,
    },
    FunctionalDataProperty(DataProperty),

    /// Rendered as nothing
    DatatypeDefinition { datatype: Datatype, range: DataRange },
    ClassAssertion {
        class: ClassExpression,
        individual: Individual,
    },
    ObjectPropertyAssertion {
        property: ObjectPropertyExpression,
        source: Individual,
        target: Individual,
    },

    /// `not (a p b)`
    NegativeObjectPropertyAssertion {
        property: ObjectPropertyExpression,
        source: Individual,
        target: Individual,
    },
    DataPropertyAssertion {
        property: DataProperty,
        source: Individual,
        target: Literal,
    },
    NegativeDataPropertyAssertion {
        property: DataProperty,
        source: Individual,
        target: Literal,
    },
    SameIndividual(Vec<Individual>),
    DifferentIndividuals(Vec<Individual>),

    /// `C HasKey p, d`
    HasKey {
        class: ClassExpression,
        object_properties: Vec<ObjectPropertyExpression>,
        data_properties: Vec<DataProperty>,
    },
    Declaration(Entity),
    AnnotationAssertion {
        subject: AnnotationSubject,
        annotation: Annotation,
    },
    SubAnnotationPropertyOf {
        sub_property: AnnotationProperty,
        super_property: AnnotationProperty,
    },
    AnnotationPropertyDomain {
        property: AnnotationProperty,
        domain: NamedNode,
    },
    AnnotationPropertyRange {
        property: AnnotationProperty,
        range: NamedNode,
    },

    /// `p(?x, ?y), q(?y, ?z) -> r(?x, ?z)`
    Rule(SwrlRule),
}

impl Axiom {
    pub fn subclass_of(sub: impl Into<ClassExpression>, sup: impl Into<ClassExpression>) -> Self {
        Self::SubClassOf {
            sub_class: sub.into(),
            super_class: sup.into(),
        }
    }

    pub fn class_assertion(
        class: impl Into<ClassExpression>,
        individual: impl Into<Individual>,
    ) -> Self {
        Self::ClassAssertion {
            class: class.into(),
            individual: individual.into(),
        }
    }

    pub fn equivalent_classes(classes: impl IntoIterator<Item = ClassExpression>) -> Self {
        Self::EquivalentClasses(classes.into_iter().collect())
    }

    pub fn disjoint_classes(classes: impl IntoIterator<Item = ClassExpression>) -> Self {
        Self::DisjointClasses(classes.into_iter().collect())
    }

    pub fn declaration(entity: impl Into<Entity>) -> Self {
        Self::Declaration(entity.into())
    }

    pub fn object_property_assertion(
        property: impl Into<ObjectPropertyExpression>,
        source: impl Into<Individual>,
        target: impl Into<Individual>,
    ) -> Self {
        Self::ObjectPropertyAssertion {
            property: property.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn data_property_assertion(
        property: impl Into<DataProperty>,
        source: impl Into<Individual>,
        target: impl Into<Literal>,
    ) -> Self {
        Self::DataPropertyAssertion {
            property: property.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn annotation_assertion(
        subject: impl Into<AnnotationSubject>,
        annotation: Annotation,
    ) -> Self {
        Self::AnnotationAssertion {
            subject: subject.into(),
            annotation,
        }
    }

    /// The functional-syntax name of this axiom kind, e.g. `SubClassOf`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SubClassOf { .. } => "SubClassOf",
            Self::EquivalentClasses(_) => "EquivalentClasses",
            Self::DisjointClasses(_) => "DisjointClasses",
            Self::DisjointUnion { .. } => "DisjointUnion",
            Self::SubObjectPropertyOf { .. } | Self::SubPropertyChainOf { .. } => {
                "SubObjectPropertyOf"
            }
            Self::EquivalentObjectProperties(_) => "EquivalentObjectProperties",
            Self::DisjointObjectProperties(_) => "DisjointObjectProperties",
            Self::InverseObjectProperties(..) => "InverseObjectProperties",
            Self::ObjectPropertyDomain { .. } => "ObjectPropertyDomain",
            Self::ObjectPropertyRange { .. } => "ObjectPropertyRange",
            Self::FunctionalObjectProperty(_) => "FunctionalObjectProperty",
            Self::InverseFunctionalObjectProperty(_) => "InverseFunctionalObjectProperty",
            Self::ReflexiveObjectProperty(_) => "ReflexiveObjectProperty",
            Self::IrreflexiveObjectProperty(_) => "IrreflexiveObjectProperty",
            Self::SymmetricObjectProperty(_) => "SymmetricObjectProperty",
            Self::AsymmetricObjectProperty(_) => "AsymmetricObjectProperty",
            Self::TransitiveObjectProperty(_) => "TransitiveObjectProperty",
            Self::SubDataPropertyOf { .. } => "SubDataPropertyOf",
            Self::EquivalentDataProperties(_) => "EquivalentDataProperties",
            Self::DisjointDataProperties(_) => "DisjointDataProperties",
            Self::DataPropertyDomain { .. } => "DataPropertyDomain",
            Self::DataPropertyRange { .. } => "DataPropertyRange",
            Self::FunctionalDataProperty(_) => "FunctionalDataProperty",
            Self::DatatypeDefinition { .. } => "DatatypeDefinition",
            Self::ClassAssertion { .. } => "ClassAssertion",
            Self::ObjectPropertyAssertion { .. } => "ObjectPropertyAssertion",
            Self::NegativeObjectPropertyAssertion { .. } => "NegativeObjectPropertyAssertion",
            Self::DataPropertyAssertion { .. } => "DataPropertyAssertion",
            Self::NegativeDataPropertyAssertion { .. } => "NegativeDataPropertyAssertion",
            Self::SameIndividual(_) => "SameIndividual",
            Self::DifferentIndividuals(_) => "DifferentIndividuals",
            Self::HasKey { .. } => "HasKey",
            Self::Declaration(_) => "Declaration",
            Self::AnnotationAssertion { .. } => "AnnotationAssertion",
            Self::SubAnnotationPropertyOf { .. } => "SubAnnotationPropertyOf",
            Self::AnnotationPropertyDomain { .. } => "AnnotationPropertyDomain",
            Self::AnnotationPropertyRange { .. } => "AnnotationPropertyRange",
            Self::Rule(_) => "DLSafeRule",
        }
    }
}

impl From<SwrlRule> for Axiom {
    fn from(rule: SwrlRule) -> Self {
        Self::Rule(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let a = OwlClass::new(NamedNode::new_unchecked("http://example.org/A"));
        let b = OwlClass::new(NamedNode::new_unchecked("http://example.org/B"));
        let axiom = Axiom::subclass_of(a.clone(), b);
        assert_eq!(axiom.kind(), "SubClassOf");
        assert_eq!(
            Axiom::declaration(a.clone()),
            Axiom::Declaration(Entity::Class(a))
        );
    }

    #[test]
    fn test_property_chain_kind() {
        let p = ObjectPropertyExpression::from(crate::ObjectProperty::new(
            NamedNode::new_unchecked("http://example.org/p"),
        ));
        let axiom = Axiom::SubPropertyChainOf {
            property_chain: vec![p.clone(), p.clone()],
            super_property: p,
        };
        assert_eq!(axiom.kind(), "SubObjectPropertyOf");
    }
}
