//! Anonymous class expressions, property expressions and data ranges.

use crate::entity::{DataProperty, Datatype, Individual, ObjectProperty, OwlClass};
use crate::order::{cmp_literal_slices, cmp_literals};
use oxrdf::{Literal, NamedNodeRef};
use std::cmp::Ordering;

/// A class, named or built from other expressions.
///
/// Cardinality restrictions without a filler are unqualified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClassExpression {
    Class(OwlClass),

    /// `C and D`
    ObjectIntersectionOf(Vec<ClassExpression>),

    /// `C or D`
    ObjectUnionOf(Vec<ClassExpression>),

    /// `not C`
    ObjectComplementOf(Box<ClassExpression>),

    /// `{a, b}`
    ObjectOneOf(Vec<Individual>),

    /// `p some C`
    ObjectSomeValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },

    /// `p only C`
    ObjectAllValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },

    /// `p value a`
    ObjectHasValue {
        property: ObjectPropertyExpression,
        individual: Individual,
    },

    /// `p min n C`
    ObjectMinCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },
    ObjectExactCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },
    ObjectMaxCardinality {
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },

    /// `p Self`
    ObjectHasSelf(ObjectPropertyExpression),
    DataSomeValuesFrom {
        property: DataProperty,
        filler: DataRange,
    },
    DataAllValuesFrom {
        property: DataProperty,
        filler: DataRange,
    },
    DataHasValue {
        property: DataProperty,
        value: Literal,
    },
    DataMinCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: Option<DataRange>,
    },
    DataExactCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: Option<DataRange>,
    },
    DataMaxCardinality {
        cardinality: u32,
        property: DataProperty,
        filler: Option<DataRange>,
    },
}

impl ClassExpression {
    pub fn class(c: impl Into<OwlClass>) -> Self {
        Self::Class(c.into())
    }

    pub fn intersection(classes: impl IntoIterator<Item = ClassExpression>) -> Self {
        Self::ObjectIntersectionOf(classes.into_iter().collect())
    }

    pub fn union(classes: impl IntoIterator<Item = ClassExpression>) -> Self {
        Self::ObjectUnionOf(classes.into_iter().collect())
    }

    pub fn complement(c: ClassExpression) -> Self {
        Self::ObjectComplementOf(Box::new(c))
    }

    /// Creates an enumeration of individuals.
    pub fn one_of(individuals: impl IntoIterator<Item = Individual>) -> Self {
        Self::ObjectOneOf(individuals.into_iter().collect())
    }

    pub fn some_values_from(
        property: impl Into<ObjectPropertyExpression>,
        filler: ClassExpression,
    ) -> Self {
        Self::ObjectSomeValuesFrom {
            property: property.into(),
            filler: Box::new(filler),
        }
    }

    pub fn all_values_from(
        property: impl Into<ObjectPropertyExpression>,
        filler: ClassExpression,
    ) -> Self {
        Self::ObjectAllValuesFrom {
            property: property.into(),
            filler: Box::new(filler),
        }
    }

    /// Creates a has-value restriction.
    pub fn has_value(
        property: impl Into<ObjectPropertyExpression>,
        individual: impl Into<Individual>,
    ) -> Self {
        Self::ObjectHasValue {
            property: property.into(),
            individual: individual.into(),
        }
    }

    /// Creates a qualified minimum cardinality restriction.
    pub fn min_cardinality(
        cardinality: u32,
        property: impl Into<ObjectPropertyExpression>,
        filler: Option<ClassExpression>,
    ) -> Self {
        Self::ObjectMinCardinality {
            cardinality,
            property: property.into(),
            filler: filler.map(Box::new),
        }
    }

    /// Creates a qualified exact cardinality restriction.
    pub fn exact_cardinality(
        cardinality: u32,
        property: impl Into<ObjectPropertyExpression>,
        filler: Option<ClassExpression>,
    ) -> Self {
        Self::ObjectExactCardinality {
            cardinality,
            property: property.into(),
            filler: filler.map(Box::new),
        }
    }

    /// Creates a qualified maximum cardinality restriction.
    pub fn max_cardinality(
        cardinality: u32,
        property: impl Into<ObjectPropertyExpression>,
        filler: Option<ClassExpression>,
    ) -> Self {
        Self::ObjectMaxCardinality {
            cardinality,
            property: property.into(),
            filler: filler.map(Box::new),
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    /// Returns true for every constructor other than a named class.
    pub fn is_anonymous(&self) -> bool {
        !self.is_named()
    }

    /// Returns true for intersections and unions.
    pub fn is_boolean_connective(&self) -> bool {
        matches!(self, Self::ObjectIntersectionOf(_) | Self::ObjectUnionOf(_))
    }

    pub fn as_class(&self) -> Option<&OwlClass> {
        match self {
            Self::Class(c) => Some(c),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Class(_) => 0,
            Self::ObjectIntersectionOf(_) => 1,
            Self::ObjectUnionOf(_) => 2,
            Self::ObjectComplementOf(_) => 3,
            Self::ObjectOneOf(_) => 4,
            Self::ObjectSomeValuesFrom { .. } => 5,
            Self::ObjectAllValuesFrom { .. } => 6,
            Self::ObjectHasValue { .. } => 7,
            Self::ObjectMinCardinality { .. } => 8,
            Self::ObjectExactCardinality { .. } => 9,
            Self::ObjectMaxCardinality { .. } => 10,
            Self::ObjectHasSelf(_) => 11,
            Self::DataSomeValuesFrom { .. } => 12,
            Self::DataAllValuesFrom { .. } => 13,
            Self::DataHasValue { .. } => 14,
            Self::DataMinCardinality { .. } => 15,
            Self::DataExactCardinality { .. } => 16,
            Self::DataMaxCardinality { .. } => 17,
        }
    }
}

impl Ord for ClassExpression {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Class(a), Self::Class(b)) => a.cmp(b),
            (Self::ObjectIntersectionOf(a), Self::ObjectIntersectionOf(b))
            | (Self::ObjectUnionOf(a), Self::ObjectUnionOf(b)) => a.cmp(b),
            (Self::ObjectComplementOf(a), Self::ObjectComplementOf(b)) => a.cmp(b),
            (Self::ObjectOneOf(a), Self::ObjectOneOf(b)) => a.cmp(b),
            (
                Self::ObjectSomeValuesFrom {
                    property: p1,
                    filler: f1,
                },
                Self::ObjectSomeValuesFrom {
                    property: p2,
                    filler: f2,
                },
            )
            | (
                Self::ObjectAllValuesFrom {
                    property: p1,
                    filler: f1,
                },
                Self::ObjectAllValuesFrom {
                    property: p2,
                    filler: f2,
                },
            ) => (p1, f1).cmp(&(p2, f2)),
            (
                Self::ObjectHasValue {
                    property: p1,
                    individual: i1,
                },
                Self::ObjectHasValue {
                    property: p2,
                    individual: i2,
                },
            ) => (p1, i1).cmp(&(p2, i2)),
            (
                Self::ObjectMinCardinality {
                    cardinality: n1,
                    property: p1,
                    filler: f1,
                },
                Self::ObjectMinCardinality {
                    cardinality: n2,
                    property: p2,
                    filler: f2,
                },
            )
            | (
                Self::ObjectExactCardinality {
                    cardinality: n1,
                    property: p1,
                    filler: f1,
                },
                Self::ObjectExactCardinality {
                    cardinality: n2,
                    property: p2,
                    filler: f2,
                },
            )
            | (
                Self::ObjectMaxCardinality {
                    cardinality: n1,
                    property: p1,
                    filler: f1,
                },
                Self::ObjectMaxCardinality {
                    cardinality: n2,
                    property: p2,
                    filler: f2,
                },
            ) => (n1, p1, f1).cmp(&(n2, p2, f2)),
            (Self::ObjectHasSelf(a), Self::ObjectHasSelf(b)) => a.cmp(b),
            (
                Self::DataSomeValuesFrom {
                    property: p1,
                    filler: f1,
                },
                Self::DataSomeValuesFrom {
                    property: p2,
                    filler: f2,
                },
            )
            | (
                Self::DataAllValuesFrom {
                    property: p1,
                    filler: f1,
                },
                Self::DataAllValuesFrom {
                    property: p2,
                    filler: f2,
                },
            ) => (p1, f1).cmp(&(p2, f2)),
            (
                Self::DataHasValue {
                    property: p1,
                    value: v1,
                },
                Self::DataHasValue {
                    property: p2,
                    value: v2,
                },
            ) => p1.cmp(p2).then_with(|| cmp_literals(v1, v2)),
            (
                Self::DataMinCardinality {
                    cardinality: n1,
                    property: p1,
                    filler: f1,
                },
                Self::DataMinCardinality {
                    cardinality: n2,
                    property: p2,
                    filler: f2,
                },
            )
            | (
                Self::DataExactCardinality {
                    cardinality: n1,
                    property: p1,
                    filler: f1,
                },
                Self::DataExactCardinality {
                    cardinality: n2,
                    property: p2,
                    filler: f2,
                },
            )
            | (
                Self::DataMaxCardinality {
                    cardinality: n1,
                    property: p1,
                    filler: f1,
                },
                Self::DataMaxCardinality {
                    cardinality: n2,
                    property: p2,
                    filler: f2,
                },
            ) => (n1, p1, f1).cmp(&(n2, p2, f2)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for ClassExpression {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<OwlClass> for ClassExpression {
    fn from(c: OwlClass) -> Self {
        Self::Class(c)
    }
}

/// An object property or the inverse of one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ObjectPropertyExpression {
    ObjectProperty(ObjectProperty),

    /// `inverse p`
    ObjectInverseOf(ObjectProperty),
}

impl ObjectPropertyExpression {
    pub fn inverse(property: ObjectProperty) -> Self {
        Self::ObjectInverseOf(property)
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Self::ObjectProperty(_))
    }

    /// The property, inverted or not.
    pub fn base_property(&self) -> &ObjectProperty {
        match self {
            Self::ObjectProperty(p) | Self::ObjectInverseOf(p) => p,
        }
    }
}

impl From<ObjectProperty> for ObjectPropertyExpression {
    fn from(p: ObjectProperty) -> Self {
        Self::ObjectProperty(p)
    }
}

/// An XSD constraining facet usable in a datatype restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Facet {
    Length,
    MinLength,
    MaxLength,
    Pattern,
    LangRange,
    MinInclusive,
    MinExclusive,
    MaxInclusive,
    MaxExclusive,
    TotalDigits,
    FractionDigits,
}

impl Facet {
    /// The facet IRI.
    pub const fn iri(self) -> NamedNodeRef<'static> {
        NamedNodeRef::new_unchecked(match self {
            Self::Length => "http://www.w3.org/2001/XMLSchema#length",
            Self::MinLength => "http://www.w3.org/2001/XMLSchema#minLength",
            Self::MaxLength => "http://www.w3.org/2001/XMLSchema#maxLength",
            Self::Pattern => "http://www.w3.org/2001/XMLSchema#pattern",
            Self::LangRange => "http://www.w3.org/1999/02/22-rdf-syntax-ns#langRange",
            Self::MinInclusive => "http://www.w3.org/2001/XMLSchema#minInclusive",
            Self::MinExclusive => "http://www.w3.org/2001/XMLSchema#minExclusive",
            Self::MaxInclusive => "http://www.w3.org/2001/XMLSchema#maxInclusive",
            Self::MaxExclusive => "http://www.w3.org/2001/XMLSchema#maxExclusive",
            Self::TotalDigits => "http://www.w3.org/2001/XMLSchema#totalDigits",
            Self::FractionDigits => "http://www.w3.org/2001/XMLSchema#fractionDigits",
        })
    }

    /// The form used by the Manchester syntax, e.g. `>=` for `xsd:minInclusive`.
    pub const fn symbolic_form(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Pattern => "pattern",
            Self::LangRange => "langRange",
            Self::MinInclusive => ">=",
            Self::MinExclusive => ">",
            Self::MaxInclusive => "<=",
            Self::MaxExclusive => "<",
            Self::TotalDigits => "totalDigits",
            Self::FractionDigits => "fractionDigits",
        }
    }

    /// Looks up a facet from its IRI.
    pub fn from_iri(iri: NamedNodeRef<'_>) -> Option<Self> {
        [
            Self::Length,
            Self::MinLength,
            Self::MaxLength,
            Self::Pattern,
            Self::LangRange,
            Self::MinInclusive,
            Self::MinExclusive,
            Self::MaxInclusive,
            Self::MaxExclusive,
            Self::TotalDigits,
            Self::FractionDigits,
        ]
        .into_iter()
        .find(|facet| facet.iri() == iri)
    }
}

/// A facet paired with its constraining value, e.g. `>= 18`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FacetRestriction {
    pub facet: Facet,
    pub value: Literal,
}

impl FacetRestriction {
    pub fn new(facet: Facet, value: impl Into<Literal>) -> Self {
        Self {
            facet,
            value: value.into(),
        }
    }
}

impl Ord for FacetRestriction {
    fn cmp(&self, other: &Self) -> Ordering {
        self.facet
            .cmp(&other.facet)
            .then_with(|| cmp_literals(&self.value, &other.value))
    }
}

impl PartialOrd for FacetRestriction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A set of literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataRange {
    Datatype(Datatype),
    DataIntersectionOf(Vec<DataRange>),
    DataUnionOf(Vec<DataRange>),
    DataComplementOf(Box<DataRange>),

    /// `{"a", "b"}`
    DataOneOf(Vec<Literal>),

    /// `integer[>= 0, < 10]`
    DatatypeRestriction {
        datatype: Datatype,
        facets: Vec<FacetRestriction>,
    },
}

impl DataRange {
    pub fn datatype(dt: impl Into<Datatype>) -> Self {
        Self::Datatype(dt.into())
    }

    pub fn as_datatype(&self) -> Option<&Datatype> {
        match self {
            Self::Datatype(dt) => Some(dt),
            _ => None,
        }
    }

    /// Returns true if this is a named datatype.
    pub fn is_datatype(&self) -> bool {
        matches!(self, Self::Datatype(_))
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Datatype(_) => 0,
            Self::DataIntersectionOf(_) => 1,
            Self::DataUnionOf(_) => 2,
            Self::DataComplementOf(_) => 3,
            Self::DataOneOf(_) => 4,
            Self::DatatypeRestriction { .. } => 5,
        }
    }
}

impl Ord for DataRange {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Datatype(a), Self::Datatype(b)) => a.cmp(b),
            (Self::DataIntersectionOf(a), Self::DataIntersectionOf(b))
            | (Self::DataUnionOf(a), Self::DataUnionOf(b)) => a.cmp(b),
            (Self::DataComplementOf(a), Self::DataComplementOf(b)) => a.cmp(b),
            (Self::DataOneOf(a), Self::DataOneOf(b)) => cmp_literal_slices(a, b),
            (
                Self::DatatypeRestriction {
                    datatype: d1,
                    facets: f1,
                },
                Self::DatatypeRestriction {
                    datatype: d2,
                    facets: f2,
                },
            ) => (d1, f1).cmp(&(d2, f2)),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for DataRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<Datatype> for DataRange {
    fn from(datatype: Datatype) -> Self {
        Self::Datatype(datatype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::NamedNode;
    use oxrdf::vocab::xsd;

    fn class(name: &str) -> ClassExpression {
        ClassExpression::class(NamedNode::new_unchecked(format!("http://example.org/{name}")))
    }

    fn property(name: &str) -> ObjectProperty {
        ObjectProperty::new(NamedNode::new_unchecked(format!(
            "http://example.org/{name}"
        )))
    }

    #[test]
    fn test_named_classes_sort_before_restrictions() {
        let mut operands = vec![
            ClassExpression::all_values_from(property("p"), class("A")),
            ClassExpression::some_values_from(property("q"), class("B")),
            class("Z"),
        ];
        operands.sort();
        assert_eq!(operands[0], class("Z"));
        assert!(matches!(
            operands[1],
            ClassExpression::ObjectSomeValuesFrom { .. }
        ));
        assert!(matches!(
            operands[2],
            ClassExpression::ObjectAllValuesFrom { .. }
        ));
    }

    #[test]
    fn test_same_kind_orders_structurally() {
        let a = ClassExpression::some_values_from(property("p"), class("A"));
        let b = ClassExpression::some_values_from(property("p"), class("B"));
        assert!(a < b);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_anonymous() {
        assert!(class("A").is_named());
        assert!(ClassExpression::complement(class("A")).is_anonymous());
        assert!(ClassExpression::union([class("A"), class("B")]).is_boolean_connective());
    }

    #[test]
    fn test_facet_lookup() {
        assert_eq!(
            Facet::from_iri(NamedNodeRef::new_unchecked(
                "http://www.w3.org/2001/XMLSchema#minInclusive"
            )),
            Some(Facet::MinInclusive)
        );
        assert_eq!(Facet::MaxExclusive.symbolic_form(), "<");
        assert_eq!(Facet::from_iri(xsd::INTEGER), None);
    }

    #[test]
    fn test_inverse_base_property() {
        let inverse = ObjectPropertyExpression::inverse(property("p"));
        assert!(!inverse.is_named());
        assert_eq!(inverse.base_property(), &property("p"));
    }
}
