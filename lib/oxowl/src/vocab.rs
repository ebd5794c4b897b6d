//! IRIs of the OWL 2 and SWRL vocabularies not provided by [`oxrdf::vocab`].

pub mod owl {
    //! [OWL 2](https://www.w3.org/TR/owl2-syntax/) vocabulary.
    use oxrdf::NamedNodeRef;

    /// The class of all individuals.
    pub const THING: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Thing");
    /// The empty class.
    pub const NOTHING: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#Nothing");
    /// The top object property.
    pub const TOP_OBJECT_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#topObjectProperty");
    /// The top data property.
    pub const TOP_DATA_PROPERTY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#topDataProperty");
}

pub mod rdf {
    //! Parts of the RDF vocabulary used by OWL 2 but missing from [`oxrdf::vocab::rdf`].
    use oxrdf::NamedNodeRef;

    /// `rdf:PlainLiteral`, the datatype of plain literals in OWL 2.
    pub const PLAIN_LITERAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/1999/02/22-rdf-syntax-ns#PlainLiteral");
}

pub mod swrl {
    //! [SWRL](https://www.w3.org/submissions/SWRL/) namespaces.

    /// Namespace of the SWRL built-ins.
    pub const BUILT_INS: &str = "http://www.w3.org/2003/11/swrlb#";
    /// Namespaces conventionally used for rule variables.
    pub const VARIABLE_NAMESPACES: [&str; 2] = ["urn:swrl:var#", "urn:swrl#"];
}
