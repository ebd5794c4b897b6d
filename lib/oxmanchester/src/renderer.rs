use crate::keyword::{Keyword, Placement};
use crate::layout::{ColumnWriter, Layout};
use crate::short_form::{QuotedIriShortFormProvider, ShortFormProvider};
use oxowl::vocab::rdf;
use oxowl::{
    Annotation, AnnotationSubject, AnnotationValue, AnnotationProperty, Atom, Axiom,
    ClassExpression, DataProperty, DataRange, Datatype, Entity, EntityRef, FacetRestriction,
    Individual, ObjectProperty, ObjectPropertyExpression, OwlClass, SwrlRule,
};
use oxrdf::vocab::xsd;
use oxrdf::{Literal, NamedNode};
use std::io::{self, Write};
use std::sync::Arc;

/// A [Manchester syntax](https://www.w3.org/TR/owl2-manchester-syntax/) renderer
/// for axioms, expressions and the other elements of the OWL 2 structural model.
///
/// Operands of unordered constructs (intersections, equivalences, one-of enumerations, …)
/// are written in their [`Ord`] order so that the output does not depend on how the model
/// was built.
///
/// ```
/// use oxmanchester::{ManchesterRenderer, SimpleShortFormProvider};
/// use oxowl::{ClassExpression, ObjectProperty, OwlClass};
/// use oxrdf::NamedNode;
///
/// let has_topping = ObjectProperty::new(NamedNode::new("http://example.com/hasTopping")?);
/// let cheese = OwlClass::new(NamedNode::new("http://example.com/Cheese")?);
/// let expression = ClassExpression::some_values_from(has_topping, cheese.into());
///
/// let mut renderer = ManchesterRenderer::new()
///     .with_short_form_provider(SimpleShortFormProvider)
///     .for_writer(Vec::new());
/// renderer.render(&expression)?;
/// assert_eq!(renderer.finish()?, b"hasTopping some Cheese");
/// # Result::<_,Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Clone)]
#[must_use]
pub struct ManchesterRenderer {
    short_forms: Arc<dyn ShortFormProvider + Send + Sync>,
    wrap: bool,
    tab: bool,
    explicit_xsd_string: bool,
}

impl ManchesterRenderer {
    /// Builds a new [`ManchesterRenderer`] printing quoted IRIs, with line wrapping and
    /// tabbing enabled.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how entities are named.
    #[inline]
    pub fn with_short_form_provider(
        mut self,
        short_forms: impl ShortFormProvider + Send + Sync + 'static,
    ) -> Self {
        self.short_forms = Arc::new(short_forms);
        self
    }

    /// Keeps intersections and restriction fillers on a single line.
    #[inline]
    pub fn without_wrapping(mut self) -> Self {
        self.wrap = false;
        self
    }

    /// Does not indent the lines started by wrapping.
    #[inline]
    pub fn without_tabbing(mut self) -> Self {
        self.tab = false;
        self
    }

    /// Writes the `^^xsd:string` suffix of plain string literals.
    #[inline]
    pub fn with_explicit_xsd_string(mut self) -> Self {
        self.explicit_xsd_string = true;
        self
    }

    /// Renders to a [`Write`] implementation.
    ///
    /// This writer does unbuffered writes.
    pub fn for_writer<W: Write>(self, writer: W) -> WriterManchesterRenderer<W> {
        WriterManchesterRenderer {
            out: ColumnWriter::new(writer),
            layout: Layout {
                wrap: self.wrap,
                tab: self.tab,
                indent: 0,
            },
            short_forms: self.short_forms,
            explicit_xsd_string: self.explicit_xsd_string,
        }
    }
}

impl Default for ManchesterRenderer {
    #[inline]
    fn default() -> Self {
        Self {
            short_forms: Arc::new(QuotedIriShortFormProvider),
            wrap: true,
            tab: true,
            explicit_xsd_string: false,
        }
    }
}

/// Renders Manchester syntax to a [`Write`] implementation.
///
/// Can be built using [`ManchesterRenderer::for_writer`].
#[must_use]
pub struct WriterManchesterRenderer<W: Write> {
    pub(crate) out: ColumnWriter<W>,
    layout: Layout,
    short_forms: Arc<dyn ShortFormProvider + Send + Sync>,
    explicit_xsd_string: bool,
}

impl<W: Write> WriterManchesterRenderer<W> {
    /// Writes a node.
    ///
    /// Nothing is written between two successive nodes.
    pub fn render<'a>(&mut self, node: impl Into<RenderNode<'a>>) -> io::Result<()> {
        let layout = self.layout;
        match node.into() {
            RenderNode::Axiom(axiom) => self.axiom(axiom, layout),
            RenderNode::ClassExpression(expression) => self.class_expression(expression, layout),
            RenderNode::ObjectPropertyExpression(property) => {
                self.object_property_expression(property)
            }
            RenderNode::DataRange(range) => self.data_range(range),
            RenderNode::Entity(entity) => self.entity(entity),
            RenderNode::Individual(individual) => self.individual(individual),
            RenderNode::Literal(literal) => self.literal(literal),
            RenderNode::Annotation(annotation) => self.annotation(annotation, layout),
            RenderNode::FacetRestriction(restriction) => self.facet_restriction(restriction),
            RenderNode::SwrlRule(rule) => self.swrl_rule(rule, layout),
            RenderNode::Atom(atom) => self.atom(atom, layout),
            RenderNode::Iri(iri) => self.iri(iri),
        }
    }

    /// Ends the write process and returns the underlying [`Write`].
    pub fn finish(self) -> io::Result<W> {
        self.out.finish()
    }

    pub(crate) fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.out.write_str(s)
    }

    pub(crate) fn keyword(&mut self, keyword: Keyword) -> io::Result<()> {
        let name = keyword.as_str();
        match keyword.placement() {
            Placement::Infix => {
                self.write_str(" ")?;
                self.write_str(name)?;
                self.write_str(" ")
            }
            Placement::Prefix => {
                self.write_str(name)?;
                self.write_str(" ")
            }
            Placement::Postfix => {
                self.write_str(" ")?;
                self.write_str(name)
            }
            Placement::Section => {
                if self.out.column() > 0 {
                    self.write_str(" ")?;
                }
                self.write_str(name)?;
                self.write_str(": ")
            }
            Placement::Frame => {
                self.write_str(name)?;
                self.write_str(": ")
            }
        }
    }

    /// Writes `items` separated by `separator`.
    pub(crate) fn separated<'b, T: 'b>(
        &mut self,
        items: impl IntoIterator<Item = &'b T>,
        separator: &str,
        mut render: impl FnMut(&mut Self, &'b T) -> io::Result<()>,
    ) -> io::Result<()> {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.write_str(separator)?;
            }
            render(self, item)?;
        }
        Ok(())
    }

    pub(crate) fn entity(&mut self, entity: EntityRef<'_>) -> io::Result<()> {
        let short_form = self.short_forms.short_form(entity);
        self.write_str(&short_form)
    }

    pub(crate) fn individual(&mut self, individual: &Individual) -> io::Result<()> {
        match individual {
            Individual::Named(iri) => self.entity(EntityRef::NamedIndividual(iri)),
            Individual::Anonymous(node) => self.write_str(&node.to_string()),
        }
    }

    pub(crate) fn iri(&mut self, iri: &NamedNode) -> io::Result<()> {
        self.write_str(&iri.to_string())
    }

    pub(crate) fn literal(&mut self, literal: &Literal) -> io::Result<()> {
        let datatype = literal.datatype();
        if datatype == xsd::DECIMAL || datatype == xsd::INTEGER || datatype == xsd::BOOLEAN {
            return self.write_str(literal.value());
        }
        if datatype == xsd::FLOAT {
            self.write_str(literal.value())?;
            return self.write_str("f");
        }
        let mut quoted = String::with_capacity(literal.value().len() + 2);
        quoted.push('"');
        for c in literal.value().chars() {
            if matches!(c, '"' | '\\') {
                quoted.push('\\');
            }
            quoted.push(c);
        }
        quoted.push('"');
        self.write_str(&quoted)?;
        if let Some(language) = literal.language() {
            self.write_str("@")?;
            self.write_str(language)
        } else if datatype == rdf::PLAIN_LITERAL
            || (datatype == xsd::STRING && !self.explicit_xsd_string)
        {
            Ok(())
        } else {
            self.write_str("^^")?;
            self.write_str(&datatype.to_string())
        }
    }

    pub(crate) fn facet_restriction(&mut self, restriction: &FacetRestriction) -> io::Result<()> {
        self.write_str(restriction.facet.symbolic_form())?;
        self.write_str(" ")?;
        self.literal(&restriction.value)
    }

    pub(crate) fn annotation_subject(&mut self, subject: &AnnotationSubject) -> io::Result<()> {
        match subject {
            AnnotationSubject::Iri(iri) => self.iri(iri),
            AnnotationSubject::Anonymous(node) => self.write_str(&node.to_string()),
        }
    }

    pub(crate) fn annotation(&mut self, annotation: &Annotation, layout: Layout) -> io::Result<()> {
        self.annotations(&annotation.annotations, layout)?;
        self.entity(EntityRef::AnnotationProperty(&annotation.property))?;
        self.write_str(" ")?;
        match &annotation.value {
            AnnotationValue::Iri(iri) => self.iri(iri),
            AnnotationValue::Literal(literal) => self.literal(literal),
            AnnotationValue::Anonymous(node) => self.write_str(&node.to_string()),
        }
    }

    /// Writes an `Annotations:` block, followed by a blank line. Writes nothing if there are
    /// no annotations.
    fn annotations(&mut self, annotations: &[Annotation], layout: Layout) -> io::Result<()> {
        if annotations.is_empty() {
            return Ok(());
        }
        self.out.new_line(layout)?;
        self.write_str(Keyword::Annotations.as_str())?;
        self.write_str(": ")?;
        let inner = layout.at(self.out.column());
        for (i, annotation) in sorted(annotations).into_iter().enumerate() {
            if i > 0 {
                self.write_str(", ")?;
                self.out.new_line(inner)?;
            }
            self.annotation(annotation, inner)?;
        }
        self.out.new_line(inner)?;
        self.out.new_line(inner)
    }
}

/// Returns references to `items` in their [`Ord`] order.
pub(crate) fn sorted<T: Ord>(items: &[T]) -> Vec<&T> {
    let mut sorted = items.iter().collect::<Vec<_>>();
    sorted.sort();
    sorted
}

/// A borrowed element of the OWL 2 structural model that can be rendered.
#[derive(Debug, Clone, Copy)]
pub enum RenderNode<'a> {
    Axiom(&'a Axiom),
    ClassExpression(&'a ClassExpression),
    ObjectPropertyExpression(&'a ObjectPropertyExpression),
    DataRange(&'a DataRange),
    Entity(EntityRef<'a>),
    Individual(&'a Individual),
    Literal(&'a Literal),
    Annotation(&'a Annotation),
    FacetRestriction(&'a FacetRestriction),
    SwrlRule(&'a SwrlRule),
    Atom(&'a Atom),
    /// A bare IRI, written between angle brackets
    Iri(&'a NamedNode),
}

macro_rules! render_node_from {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for RenderNode<'a> {
                #[inline]
                fn from(node: &'a $ty) -> Self {
                    Self::$variant(node)
                }
            }
        )*
    };
}

render_node_from!(
    Axiom(Axiom),
    ClassExpression(ClassExpression),
    ObjectPropertyExpression(ObjectPropertyExpression),
    DataRange(DataRange),
    Individual(Individual),
    Literal(Literal),
    Annotation(Annotation),
    FacetRestriction(FacetRestriction),
    SwrlRule(SwrlRule),
    Atom(Atom),
    Iri(NamedNode),
);

macro_rules! render_node_from_entity {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> From<&'a $ty> for RenderNode<'a> {
                #[inline]
                fn from(entity: &'a $ty) -> Self {
                    Self::Entity(entity.into())
                }
            }
        )*
    };
}

render_node_from_entity!(
    Entity,
    OwlClass,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    Datatype,
);

impl<'a> From<EntityRef<'a>> for RenderNode<'a> {
    #[inline]
    fn from(entity: EntityRef<'a>) -> Self {
        Self::Entity(entity)
    }
}

/// Renders a single node into a string using the default layout.
///
/// ```
/// use oxmanchester::{to_manchester_string, QuotedIriShortFormProvider};
/// use oxrdf::Literal;
///
/// assert_eq!(
///     to_manchester_string(&Literal::new_language_tagged_literal_unchecked("chat", "fr"), QuotedIriShortFormProvider)?,
///     "\"chat\"@fr"
/// );
/// # Result::<_,Box<dyn std::error::Error>>::Ok(())
/// ```
pub fn to_manchester_string<'a>(
    node: impl Into<RenderNode<'a>>,
    short_forms: impl ShortFormProvider + Send + Sync + 'static,
) -> io::Result<String> {
    let mut renderer = ManchesterRenderer::new()
        .with_short_form_provider(short_forms)
        .for_writer(Vec::new());
    renderer.render(node)?;
    String::from_utf8(renderer.finish()?)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
