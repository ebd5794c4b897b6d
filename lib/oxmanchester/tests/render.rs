#![cfg(test)]
#![allow(clippy::panic_in_result_fn)]

use oxmanchester::{
    ManchesterRenderer, PrefixShortFormProvider, RenderNode, SimpleShortFormProvider,
    to_manchester_string,
};
use oxowl::{
    Annotation, AnnotationProperty, Axiom, ClassExpression, DataProperty, DataRange, Datatype,
    Entity, Facet, FacetRestriction, Individual, ObjectProperty, ObjectPropertyExpression,
    OwlClass,
};
use oxrdf::vocab::{rdfs, xsd};
use oxrdf::{Literal, NamedNode};
use std::io;

fn iri(name: &str) -> NamedNode {
    NamedNode::new_unchecked(format!("http://example.com/{name}"))
}

fn class(name: &str) -> ClassExpression {
    OwlClass::new(iri(name)).into()
}

fn property(name: &str) -> ObjectProperty {
    ObjectProperty::new(iri(name))
}

fn individual(name: &str) -> Individual {
    iri(name).into()
}

fn render<'a>(node: impl Into<RenderNode<'a>>) -> String {
    to_manchester_string(node, SimpleShortFormProvider).unwrap()
}

fn render_unwrapped<'a>(node: impl Into<RenderNode<'a>>) -> io::Result<String> {
    let mut renderer = ManchesterRenderer::new()
        .with_short_form_provider(SimpleShortFormProvider)
        .without_wrapping()
        .for_writer(Vec::new());
    renderer.render(node)?;
    Ok(String::from_utf8_lossy(&renderer.finish()?).into_owned())
}

fn restrictions() -> ClassExpression {
    ClassExpression::intersection([
        ClassExpression::all_values_from(property("p"), class("A")),
        ClassExpression::some_values_from(property("q"), class("B")),
    ])
}

#[test]
fn test_wrapped_intersection() {
    assert_eq!(render(&restrictions()), "(q some B)\n and (p only A)");
}

#[test]
fn test_default_prefix() -> Result<(), Box<dyn std::error::Error>> {
    let short_forms = PrefixShortFormProvider::new().with_default_prefix("http://example.com/")?;
    assert_eq!(
        to_manchester_string(&restrictions(), short_forms)?,
        "(:q some :B)\n and (:p only :A)"
    );
    Ok(())
}

#[test]
fn test_default_short_forms_are_quoted_iris() -> io::Result<()> {
    let mut renderer = ManchesterRenderer::new().for_writer(Vec::new());
    renderer.render(&ClassExpression::complement(class("A")))?;
    assert_eq!(renderer.finish()?, b"not <http://example.com/A>");
    Ok(())
}

#[test]
fn test_nested_union_is_parenthesized() -> io::Result<()> {
    let expression =
        ClassExpression::intersection([ClassExpression::union([class("C"), class("B")]), class("D")]);
    assert_eq!(render_unwrapped(&expression)?, "D and (B or C)");
    Ok(())
}

#[test]
fn test_flat_operands_are_not_parenthesized() -> io::Result<()> {
    let expression = ClassExpression::union([class("B"), class("A"), class("C")]);
    assert_eq!(render_unwrapped(&expression)?, "A or B or C");
    Ok(())
}

#[test]
fn test_intersection_inside_union_is_parenthesized() -> io::Result<()> {
    let expression = ClassExpression::union([
        ClassExpression::intersection([class("C"), class("B")]),
        class("D"),
    ]);
    assert_eq!(render_unwrapped(&expression)?, "D or (B and C)");
    let expression = ClassExpression::intersection([
        ClassExpression::union([class("C"), class("B")]),
        ClassExpression::intersection([class("E"), class("F")]),
    ]);
    assert_eq!(render_unwrapped(&expression)?, "(E and F) and (B or C)");
    Ok(())
}

#[test]
fn test_complement_of_anonymous_expression() {
    let expression = ClassExpression::complement(ClassExpression::union([class("A"), class("B")]));
    assert_eq!(render(&expression), "not (A or B)");
}

#[test]
fn test_cardinality_restrictions() {
    assert_eq!(
        render(&ClassExpression::min_cardinality(2, property("p"), None)),
        "p min 2"
    );
    assert_eq!(
        render(&ClassExpression::exact_cardinality(
            1,
            ObjectPropertyExpression::inverse(property("p")),
            Some(ClassExpression::complement(class("A")))
        )),
        "inverse (p) exactly 1 (not A)"
    );
    assert_eq!(
        render(&ClassExpression::max_cardinality(3, property("p"), Some(class("A")))),
        "p max 3 A"
    );
}

#[test]
fn test_has_value_and_self() {
    assert_eq!(
        render(&ClassExpression::has_value(property("p"), individual("a"))),
        "p value a"
    );
    assert_eq!(
        render(&ClassExpression::ObjectHasSelf(property("p").into())),
        "p Self"
    );
}

#[test]
fn test_object_one_of_is_sorted() {
    let expression = ClassExpression::one_of([individual("b"), individual("a")]);
    assert_eq!(render(&expression), "{a, b}");
}

#[test]
fn test_data_ranges() {
    let integer = Datatype::new(xsd::INTEGER.into_owned());
    let age = DataProperty::new(iri("age"));
    let restriction = DataRange::DatatypeRestriction {
        datatype: integer.clone(),
        facets: vec![
            FacetRestriction::new(Facet::MaxExclusive, 10),
            FacetRestriction::new(Facet::MinInclusive, 0),
        ],
    };
    assert_eq!(
        render(&ClassExpression::DataSomeValuesFrom {
            property: age.clone(),
            filler: restriction,
        }),
        "age some integer[>= 0, < 10]"
    );
    assert_eq!(
        render(&DataRange::DataComplementOf(Box::new(DataRange::DataUnionOf(vec![
            DataRange::Datatype(Datatype::new(xsd::STRING.into_owned())),
            DataRange::Datatype(integer),
        ])))),
        "not ((integer or string))"
    );
    assert_eq!(
        render(&DataRange::DataOneOf(vec![
            Literal::new_simple_literal("b"),
            Literal::new_simple_literal("a"),
        ])),
        "{\"a\", \"b\"}"
    );
    assert_eq!(
        render(&ClassExpression::DataHasValue {
            property: age,
            value: Literal::new_typed_literal("33.3", xsd::DECIMAL),
        }),
        "age value 33.3"
    );
}

#[test]
fn test_literals() {
    assert_eq!(render(&Literal::new_typed_literal("2.0", xsd::FLOAT)), "2.0f");
    assert_eq!(render(&Literal::new_typed_literal("33.3", xsd::DECIMAL)), "33.3");
    assert_eq!(
        render(&Literal::new_language_tagged_literal_unchecked("chat", "fr")),
        "\"chat\"@fr"
    );
    assert_eq!(
        render(&Literal::new_simple_literal("a \"b\" \\ c")),
        "\"a \\\"b\\\" \\\\ c\""
    );
}

#[test]
fn test_binary_and_nary_disjointness() {
    assert_eq!(
        render(&Axiom::disjoint_classes([class("B"), class("A")])),
        "A DisjointWith B"
    );
    assert_eq!(
        render(&Axiom::disjoint_classes([class("C"), class("A"), class("B")])),
        "DisjointClasses: A, B, C"
    );
    assert_eq!(
        render(&Axiom::SameIndividual(vec![individual("b"), individual("a")])),
        "a SameAs b"
    );
    assert_eq!(
        render(&Axiom::DifferentIndividuals(vec![
            individual("c"),
            individual("b"),
            individual("a")
        ])),
        "DifferentIndividuals: a, b, c"
    );
}

#[test]
fn test_axioms_are_single_line() {
    let axiom = Axiom::equivalent_classes([
        class("A"),
        ClassExpression::intersection([
            class("B"),
            ClassExpression::some_values_from(
                property("p"),
                ClassExpression::union([class("C"), class("D")]),
            ),
        ]),
    ]);
    assert_eq!(render(&axiom), "A EquivalentTo B and (p some (C or D))");
}

#[test]
fn test_property_axioms() {
    assert_eq!(
        render(&Axiom::SubPropertyChainOf {
            property_chain: vec![property("q").into(), property("p").into()],
            super_property: property("r").into(),
        }),
        "q o p SubPropertyOf r"
    );
    assert_eq!(
        render(&Axiom::TransitiveObjectProperty(property("p").into())),
        "Transitive: p"
    );
    assert_eq!(
        render(&Axiom::InverseObjectProperties(
            property("p").into(),
            property("q").into()
        )),
        "p InverseOf q"
    );
    assert_eq!(
        render(&Axiom::ObjectPropertyDomain {
            property: property("p").into(),
            domain: class("A"),
        }),
        "p Domain A"
    );
}

#[test]
fn test_assertions() {
    assert_eq!(
        render(&Axiom::class_assertion(class("A"), individual("a"))),
        "a Type A"
    );
    assert_eq!(
        render(&Axiom::object_property_assertion(
            property("p"),
            individual("a"),
            individual("b")
        )),
        "a p b"
    );
    assert_eq!(
        render(&Axiom::NegativeObjectPropertyAssertion {
            property: property("p").into(),
            source: individual("a"),
            target: individual("b"),
        }),
        "not (a p b)"
    );
    assert_eq!(
        render(&Axiom::data_property_assertion(
            DataProperty::new(iri("age")),
            individual("a"),
            42
        )),
        "a age 42"
    );
}

#[test]
fn test_has_key() {
    let axiom = Axiom::HasKey {
        class: class("A"),
        object_properties: vec![property("q").into(), property("p").into()],
        data_properties: vec![DataProperty::new(iri("d"))],
    };
    assert_eq!(render(&axiom), "A HasKey p, q, d");
}

#[test]
fn test_declarations() {
    assert_eq!(
        render(&Axiom::declaration(OwlClass::new(iri("A")))),
        "Class: A"
    );
    assert_eq!(
        render(&Axiom::declaration(Entity::NamedIndividual(iri("a")))),
        "Individual: a"
    );
    assert_eq!(
        render(&Axiom::declaration(Datatype::new(iri("d")))),
        "Datatype: d"
    );
    assert_eq!(
        render(&Axiom::declaration(AnnotationProperty::new(iri("note")))),
        "AnnotationProperty: note"
    );
}

#[test]
fn test_datatype_definition_renders_nothing() {
    let axiom = Axiom::DatatypeDefinition {
        datatype: Datatype::new(iri("adult_age")),
        range: DataRange::Datatype(Datatype::new(xsd::INTEGER.into_owned())),
    };
    assert_eq!(render(&axiom), "");
}

#[test]
fn test_annotation_block_layout() {
    let comment = AnnotationProperty::new(rdfs::COMMENT.into_owned());
    let label = AnnotationProperty::new(rdfs::LABEL.into_owned());
    let annotation = Annotation::new(label, Literal::new_simple_literal("x"))
        .with_annotation(Annotation::new(comment, Literal::new_simple_literal("y")));
    let indent = " ".repeat("Annotations: ".len());
    assert_eq!(
        render(&annotation),
        format!("\nAnnotations: comment \"y\"\n{indent}\n{indent}label \"x\"")
    );
    assert_eq!(
        render(&Axiom::annotation_assertion(iri("a"), annotation)),
        "<http://example.com/a> \nAnnotations: comment \"y\"\n\nlabel \"x\""
    );
}

#[test]
fn test_annotation_property_range_is_quoted_iri() {
    let axiom = Axiom::AnnotationPropertyRange {
        property: AnnotationProperty::new(iri("note")),
        range: xsd::STRING.into_owned(),
    };
    assert_eq!(
        render(&axiom),
        "note Range <http://www.w3.org/2001/XMLSchema#string>"
    );
}

#[test]
fn test_renders_are_appended() -> io::Result<()> {
    let mut renderer = ManchesterRenderer::new()
        .with_short_form_provider(SimpleShortFormProvider)
        .for_writer(Vec::new());
    renderer.render(&OwlClass::new(iri("A")))?;
    renderer.render(&property("p"))?;
    assert_eq!(renderer.finish()?, b"Ap");
    Ok(())
}
