use crate::keyword::Keyword;
use crate::layout::Layout;
use crate::renderer::{WriterManchesterRenderer, sorted};
use oxowl::{
    ClassExpression, DataProperty, DataRange, EntityRef, ObjectPropertyExpression, cmp_literals,
};
use std::io::{self, Write};

/// Extra indentation of a wrapped restriction filler.
const FILLER_INDENT: usize = 4;

impl<W: Write> WriterManchesterRenderer<W> {
    pub(crate) fn class_expression(
        &mut self,
        expression: &ClassExpression,
        layout: Layout,
    ) -> io::Result<()> {
        match expression {
            ClassExpression::Class(class) => self.entity(EntityRef::Class(class)),
            ClassExpression::ObjectIntersectionOf(operands) => {
                self.intersection(operands, layout)
            }
            ClassExpression::ObjectUnionOf(operands) => self.union(operands, layout),
            ClassExpression::ObjectComplementOf(operand) => {
                self.keyword(Keyword::Not)?;
                self.operand(operand, layout)
            }
            ClassExpression::ObjectOneOf(individuals) => {
                self.write_str("{")?;
                self.separated(sorted(individuals), ", ", Self::individual)?;
                self.write_str("}")
            }
            ClassExpression::ObjectSomeValuesFrom { property, filler } => {
                self.object_property_expression(property)?;
                self.keyword(Keyword::Some)?;
                self.filler(filler, layout)
            }
            ClassExpression::ObjectAllValuesFrom { property, filler } => {
                self.object_property_expression(property)?;
                self.keyword(Keyword::Only)?;
                self.filler(filler, layout)
            }
            ClassExpression::ObjectHasValue {
                property,
                individual,
            } => {
                self.object_property_expression(property)?;
                self.keyword(Keyword::Value)?;
                self.individual(individual)
            }
            ClassExpression::ObjectMinCardinality {
                cardinality,
                property,
                filler,
            } => self.object_cardinality(
                property,
                Keyword::Min,
                *cardinality,
                filler.as_deref(),
                layout,
            ),
            ClassExpression::ObjectExactCardinality {
                cardinality,
                property,
                filler,
            } => self.object_cardinality(
                property,
                Keyword::Exactly,
                *cardinality,
                filler.as_deref(),
                layout,
            ),
            ClassExpression::ObjectMaxCardinality {
                cardinality,
                property,
                filler,
            } => self.object_cardinality(
                property,
                Keyword::Max,
                *cardinality,
                filler.as_deref(),
                layout,
            ),
            ClassExpression::ObjectHasSelf(property) => {
                self.object_property_expression(property)?;
                self.keyword(Keyword::HasSelf)
            }
            ClassExpression::DataSomeValuesFrom { property, filler } => {
                self.entity(EntityRef::DataProperty(property))?;
                self.keyword(Keyword::Some)?;
                self.data_range(filler)
            }
            ClassExpression::DataAllValuesFrom { property, filler } => {
                self.entity(EntityRef::DataProperty(property))?;
                self.keyword(Keyword::Only)?;
                self.data_range(filler)
            }
            ClassExpression::DataHasValue { property, value } => {
                self.entity(EntityRef::DataProperty(property))?;
                self.keyword(Keyword::Value)?;
                self.literal(value)
            }
            ClassExpression::DataMinCardinality {
                cardinality,
                property,
                filler,
            } => self.data_cardinality(
                property,
                Keyword::Min,
                *cardinality,
                filler.as_ref(),
            ),
            ClassExpression::DataExactCardinality {
                cardinality,
                property,
                filler,
            } => self.data_cardinality(
                property,
                Keyword::Exactly,
                *cardinality,
                filler.as_ref(),
            ),
            ClassExpression::DataMaxCardinality {
                cardinality,
                property,
                filler,
            } => self.data_cardinality(
                property,
                Keyword::Max,
                *cardinality,
                filler.as_ref(),
            ),
        }
    }

    /// Each operand after the first starts a new line when wrapping is enabled.
    fn intersection(&mut self, operands: &[ClassExpression], layout: Layout) -> io::Result<()> {
        let inner = layout.at(self.out.column());
        for (i, operand) in sorted(operands).into_iter().enumerate() {
            if i > 0 {
                if inner.wrap {
                    self.out.new_line(inner)?;
                }
                self.keyword(Keyword::And)?;
            }
            self.operand(operand, inner)?;
        }
        Ok(())
    }

    fn union(&mut self, operands: &[ClassExpression], layout: Layout) -> io::Result<()> {
        for (i, operand) in sorted(operands).into_iter().enumerate() {
            if i > 0 {
                self.keyword(Keyword::Or)?;
            }
            self.operand(operand, layout)?;
        }
        Ok(())
    }

    /// Parenthesizes anonymous expressions.
    pub(crate) fn operand(
        &mut self,
        expression: &ClassExpression,
        layout: Layout,
    ) -> io::Result<()> {
        if expression.is_anonymous() {
            self.write_str("(")?;
            self.class_expression(expression, layout)?;
            self.write_str(")")
        } else {
            self.class_expression(expression, layout)
        }
    }

    /// Filler of an existential or universal restriction.
    ///
    /// A wrapped intersection or union filler starts on its own, further indented, line.
    fn filler(&mut self, filler: &ClassExpression, layout: Layout) -> io::Result<()> {
        if layout.wrap && filler.is_boolean_connective() {
            let inner = layout.indented(FILLER_INDENT);
            self.out.new_line(inner)?;
            self.operand(filler, inner)
        } else {
            self.operand(filler, layout)
        }
    }

    fn object_cardinality(
        &mut self,
        property: &ObjectPropertyExpression,
        keyword: Keyword,
        cardinality: u32,
        filler: Option<&ClassExpression>,
        layout: Layout,
    ) -> io::Result<()> {
        self.object_property_expression(property)?;
        self.keyword(keyword)?;
        self.write_str(&cardinality.to_string())?;
        if let Some(filler) = filler {
            self.write_str(" ")?;
            self.operand(filler, layout)?;
        }
        Ok(())
    }

    fn data_cardinality(
        &mut self,
        property: &DataProperty,
        keyword: Keyword,
        cardinality: u32,
        filler: Option<&DataRange>,
    ) -> io::Result<()> {
        self.entity(EntityRef::DataProperty(property))?;
        self.keyword(keyword)?;
        self.write_str(&cardinality.to_string())?;
        if let Some(filler) = filler {
            self.write_str(" ")?;
            self.data_range(filler)?;
        }
        Ok(())
    }

    pub(crate) fn object_property_expression(
        &mut self,
        property: &ObjectPropertyExpression,
    ) -> io::Result<()> {
        match property {
            ObjectPropertyExpression::ObjectProperty(property) => {
                self.entity(EntityRef::ObjectProperty(property))
            }
            ObjectPropertyExpression::ObjectInverseOf(property) => {
                self.keyword(Keyword::Inverse)?;
                self.write_str("(")?;
                self.entity(EntityRef::ObjectProperty(property))?;
                self.write_str(")")
            }
        }
    }

    pub(crate) fn data_range(&mut self, range: &DataRange) -> io::Result<()> {
        match range {
            DataRange::Datatype(datatype) => self.entity(EntityRef::Datatype(datatype)),
            DataRange::DataIntersectionOf(operands) => {
                self.data_connective(operands, Keyword::And)
            }
            DataRange::DataUnionOf(operands) => self.data_connective(operands, Keyword::Or),
            DataRange::DataComplementOf(operand) => {
                self.keyword(Keyword::Not)?;
                if operand.is_datatype() {
                    self.data_range(operand)
                } else {
                    self.write_str("(")?;
                    self.data_range(operand)?;
                    self.write_str(")")
                }
            }
            DataRange::DataOneOf(values) => {
                let mut values = values.iter().collect::<Vec<_>>();
                values.sort_by(|a, b| cmp_literals(a, b));
                self.write_str("{")?;
                self.separated(values, ", ", Self::literal)?;
                self.write_str("}")
            }
            DataRange::DatatypeRestriction { datatype, facets } => {
                self.entity(EntityRef::Datatype(datatype))?;
                self.write_str("[")?;
                self.separated(sorted(facets), ", ", Self::facet_restriction)?;
                self.write_str("]")
            }
        }
    }

    /// `(A and B)` or `(A or B)`: the parentheses make nested data ranges unambiguous.
    fn data_connective(
        &mut self,
        operands: &[DataRange],
        keyword: Keyword,
    ) -> io::Result<()> {
        self.write_str("(")?;
        for (i, operand) in sorted(operands).into_iter().enumerate() {
            if i > 0 {
                self.keyword(keyword)?;
            }
            self.data_range(operand)?;
        }
        self.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use crate::{ManchesterRenderer, SimpleShortFormProvider};
    use oxowl::{ClassExpression, ObjectProperty, OwlClass};
    use oxrdf::NamedNode;
    use std::io;

    fn class(name: &str) -> ClassExpression {
        OwlClass::new(NamedNode::new_unchecked(format!("http://example.com/{name}"))).into()
    }

    fn property(name: &str) -> ObjectProperty {
        ObjectProperty::new(NamedNode::new_unchecked(format!(
            "http://example.com/{name}"
        )))
    }

    #[test]
    fn test_wrapped_filler_is_indented() -> io::Result<()> {
        let expression = ClassExpression::some_values_from(
            property("p"),
            ClassExpression::intersection([class("A"), class("B")]),
        );
        let mut renderer = ManchesterRenderer::new()
            .with_short_form_provider(SimpleShortFormProvider)
            .for_writer(Vec::new());
        renderer.render(&expression)?;
        assert_eq!(
            String::from_utf8_lossy(&renderer.finish()?),
            "p some \n    (A\n      and B)"
        );
        Ok(())
    }

    #[test]
    fn test_unwrapped_filler_stays_inline() -> io::Result<()> {
        let expression = ClassExpression::some_values_from(
            property("p"),
            ClassExpression::union([class("B"), class("A")]),
        );
        let mut renderer = ManchesterRenderer::new()
            .with_short_form_provider(SimpleShortFormProvider)
            .without_wrapping()
            .for_writer(Vec::new());
        renderer.render(&expression)?;
        assert_eq!(
            String::from_utf8_lossy(&renderer.finish()?),
            "p some (A or B)"
        );
        Ok(())
    }
}
