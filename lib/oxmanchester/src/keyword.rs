/// How a keyword is laid out relative to its surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// ` kw ` between two operands.
    Infix,
    /// `kw ` before its operand.
    Prefix,
    /// ` kw` after its operand.
    Postfix,
    /// `kw: ` starting a section, preceded by a space unless it starts a line.
    Section,
    /// `kw: ` starting a frame.
    Frame,
}

/// The Manchester syntax keywords produced by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Keyword {
    // Class expression operators
    Some,
    Only,
    Value,
    Min,
    Max,
    Exactly,
    HasSelf,
    And,
    Or,
    Not,
    Inverse,
    Chain,
    // Axiom infixes
    SubClassOf,
    EquivalentTo,
    DisjointWith,
    DisjointUnionOf,
    SubPropertyOf,
    InverseOf,
    Domain,
    Range,
    Type,
    SameAs,
    DifferentFrom,
    HasKey,
    // Sections
    Functional,
    InverseFunctional,
    Reflexive,
    Irreflexive,
    Symmetric,
    Asymmetric,
    Transitive,
    EquivalentClasses,
    DisjointClasses,
    EquivalentProperties,
    DisjointProperties,
    SameIndividual,
    DifferentIndividuals,
    Annotations,
    // Frames
    Class,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    Individual,
    Datatype,
}

impl Keyword {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Some => "some",
            Self::Only => "only",
            Self::Value => "value",
            Self::Min => "min",
            Self::Max => "max",
            Self::Exactly => "exactly",
            Self::HasSelf => "Self",
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
            Self::Inverse => "inverse",
            Self::Chain => "o",
            Self::SubClassOf => "SubClassOf",
            Self::EquivalentTo => "EquivalentTo",
            Self::DisjointWith => "DisjointWith",
            Self::DisjointUnionOf => "DisjointUnionOf",
            Self::SubPropertyOf => "SubPropertyOf",
            Self::InverseOf => "InverseOf",
            Self::Domain => "Domain",
            Self::Range => "Range",
            Self::Type => "Type",
            Self::SameAs => "SameAs",
            Self::DifferentFrom => "DifferentFrom",
            Self::HasKey => "HasKey",
            Self::Functional => "Functional",
            Self::InverseFunctional => "InverseFunctional",
            Self::Reflexive => "Reflexive",
            Self::Irreflexive => "Irreflexive",
            Self::Symmetric => "Symmetric",
            Self::Asymmetric => "Asymmetric",
            Self::Transitive => "Transitive",
            Self::EquivalentClasses => "EquivalentClasses",
            Self::DisjointClasses => "DisjointClasses",
            Self::EquivalentProperties => "EquivalentProperties",
            Self::DisjointProperties => "DisjointProperties",
            Self::SameIndividual => "SameIndividual",
            Self::DifferentIndividuals => "DifferentIndividuals",
            Self::Annotations => "Annotations",
            Self::Class => "Class",
            Self::ObjectProperty => "ObjectProperty",
            Self::DataProperty => "DataProperty",
            Self::AnnotationProperty => "AnnotationProperty",
            Self::Individual => "Individual",
            Self::Datatype => "Datatype",
        }
    }

    pub(crate) const fn placement(self) -> Placement {
        match self {
            Self::Not | Self::Inverse => Placement::Prefix,
            Self::HasSelf => Placement::Postfix,
            Self::Functional
            | Self::InverseFunctional
            | Self::Reflexive
            | Self::Irreflexive
            | Self::Symmetric
            | Self::Asymmetric
            | Self::Transitive
            | Self::EquivalentClasses
            | Self::DisjointClasses
            | Self::EquivalentProperties
            | Self::DisjointProperties
            | Self::SameIndividual
            | Self::DifferentIndividuals
            | Self::Annotations => Placement::Section,
            Self::Class
            | Self::ObjectProperty
            | Self::DataProperty
            | Self::AnnotationProperty
            | Self::Individual
            | Self::Datatype => Placement::Frame,
            _ => Placement::Infix,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement() {
        assert_eq!(Keyword::Some.placement(), Placement::Infix);
        assert_eq!(Keyword::Not.placement(), Placement::Prefix);
        assert_eq!(Keyword::HasSelf.placement(), Placement::Postfix);
        assert_eq!(Keyword::Transitive.placement(), Placement::Section);
        assert_eq!(Keyword::Datatype.placement(), Placement::Frame);
        assert_eq!(Keyword::HasSelf.as_str(), "Self");
    }
}
