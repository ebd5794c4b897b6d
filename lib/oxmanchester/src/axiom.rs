use crate::keyword::Keyword;
use crate::layout::Layout;
use crate::renderer::{WriterManchesterRenderer, sorted};
use oxowl::{Axiom, Entity, EntityRef, Individual, ObjectPropertyExpression};
use std::io::{self, Write};

impl<W: Write> WriterManchesterRenderer<W> {
    /// Writes an axiom as a single line frame, whatever the ambient layout is.
    pub(crate) fn axiom(&mut self, axiom: &Axiom, layout: Layout) -> io::Result<()> {
        let layout = layout.single_line();
        match axiom {
            Axiom::SubClassOf {
                sub_class,
                super_class,
            } => {
                self.class_expression(sub_class, layout)?;
                self.keyword(Keyword::SubClassOf)?;
                self.class_expression(super_class, layout)
            }
            Axiom::EquivalentClasses(classes) => self.binary_or_nary(
                classes,
                Keyword::EquivalentTo,
                Keyword::EquivalentClasses,
                |this, class| this.class_expression(class, layout),
            ),
            Axiom::DisjointClasses(classes) => self.binary_or_nary(
                classes,
                Keyword::DisjointWith,
                Keyword::DisjointClasses,
                |this, class| this.class_expression(class, layout),
            ),
            Axiom::DisjointUnion {
                class,
                disjoint_classes,
            } => {
                self.entity(EntityRef::Class(class))?;
                self.keyword(Keyword::DisjointUnionOf)?;
                self.separated(sorted(disjoint_classes), ", ", |this, class| {
                    this.class_expression(class, layout)
                })
            }
            Axiom::SubObjectPropertyOf {
                sub_property,
                super_property,
            } => {
                self.object_property_expression(sub_property)?;
                self.keyword(Keyword::SubPropertyOf)?;
                self.object_property_expression(super_property)
            }
            Axiom::SubPropertyChainOf {
                property_chain,
                super_property,
            } => {
                // The chain order is meaningful
                for (i, property) in property_chain.iter().enumerate() {
                    if i > 0 {
                        self.keyword(Keyword::Chain)?;
                    }
                    self.object_property_expression(property)?;
                }
                self.keyword(Keyword::SubPropertyOf)?;
                self.object_property_expression(super_property)
            }
            Axiom::EquivalentObjectProperties(properties) => self.binary_or_nary(
                properties,
                Keyword::EquivalentTo,
                Keyword::EquivalentProperties,
                Self::object_property_expression,
            ),
            Axiom::DisjointObjectProperties(properties) => self.binary_or_nary(
                properties,
                Keyword::DisjointWith,
                Keyword::DisjointProperties,
                Self::object_property_expression,
            ),
            Axiom::InverseObjectProperties(first, second) => {
                self.object_property_expression(first)?;
                self.keyword(Keyword::InverseOf)?;
                self.object_property_expression(second)
            }
            Axiom::ObjectPropertyDomain { property, domain } => {
                self.object_property_expression(property)?;
                self.keyword(Keyword::Domain)?;
                self.class_expression(domain, layout)
            }
            Axiom::ObjectPropertyRange { property, range } => {
                self.object_property_expression(property)?;
                self.keyword(Keyword::Range)?;
                self.class_expression(range, layout)
            }
            Axiom::FunctionalObjectProperty(property) => {
                self.characteristic(Keyword::Functional, property)
            }
            Axiom::InverseFunctionalObjectProperty(property) => {
                self.characteristic(Keyword::InverseFunctional, property)
            }
            Axiom::ReflexiveObjectProperty(property) => {
                self.characteristic(Keyword::Reflexive, property)
            }
            Axiom::IrreflexiveObjectProperty(property) => {
                self.characteristic(Keyword::Irreflexive, property)
            }
            Axiom::SymmetricObjectProperty(property) => {
                self.characteristic(Keyword::Symmetric, property)
            }
            Axiom::AsymmetricObjectProperty(property) => {
                self.characteristic(Keyword::Asymmetric, property)
            }
            Axiom::TransitiveObjectProperty(property) => {
                self.characteristic(Keyword::Transitive, property)
            }
            Axiom::SubDataPropertyOf {
                sub_property,
                super_property,
            } => {
                self.entity(EntityRef::DataProperty(sub_property))?;
                self.keyword(Keyword::SubPropertyOf)?;
                self.entity(EntityRef::DataProperty(super_property))
            }
            Axiom::EquivalentDataProperties(properties) => self.binary_or_nary(
                properties,
                Keyword::EquivalentTo,
                Keyword::EquivalentProperties,
                |this, property| this.entity(EntityRef::DataProperty(property)),
            ),
            Axiom::DisjointDataProperties(properties) => self.binary_or_nary(
                properties,
                Keyword::DisjointWith,
                Keyword::DisjointProperties,
                |this, property| this.entity(EntityRef::DataProperty(property)),
            ),
            Axiom::DataPropertyDomain { property, domain } => {
                self.entity(EntityRef::DataProperty(property))?;
                self.keyword(Keyword::Domain)?;
                self.class_expression(domain, layout)
            }
            Axiom::DataPropertyRange { property, range } => {
                self.entity(EntityRef::DataProperty(property))?;
                self.keyword(Keyword::Range)?;
                self.data_range(range)
            }
            Axiom::FunctionalDataProperty(property) => {
                self.keyword(Keyword::Functional)?;
                self.entity(EntityRef::DataProperty(property))
            }
            // Datatype definitions have no standalone rendering
            Axiom::DatatypeDefinition { .. } => Ok(()),
            Axiom::ClassAssertion { class, individual } => {
                self.individual(individual)?;
                self.keyword(Keyword::Type)?;
                self.class_expression(class, layout)
            }
            Axiom::ObjectPropertyAssertion {
                property,
                source,
                target,
            } => self.object_assertion(source, property, target),
            Axiom::NegativeObjectPropertyAssertion {
                property,
                source,
                target,
            } => {
                self.keyword(Keyword::Not)?;
                self.write_str("(")?;
                self.object_assertion(source, property, target)?;
                self.write_str(")")
            }
            Axiom::DataPropertyAssertion {
                property,
                source,
                target,
            } => {
                self.individual(source)?;
                self.write_str(" ")?;
                self.entity(EntityRef::DataProperty(property))?;
                self.write_str(" ")?;
                self.literal(target)
            }
            Axiom::NegativeDataPropertyAssertion {
                property,
                source,
                target,
            } => {
                self.keyword(Keyword::Not)?;
                self.write_str("(")?;
                self.individual(source)?;
                self.write_str(" ")?;
                self.entity(EntityRef::DataProperty(property))?;
                self.write_str(" ")?;
                self.literal(target)?;
                self.write_str(")")
            }
            Axiom::SameIndividual(individuals) => self.binary_or_nary(
                individuals,
                Keyword::SameAs,
                Keyword::SameIndividual,
                Self::individual,
            ),
            Axiom::DifferentIndividuals(individuals) => self.binary_or_nary(
                individuals,
                Keyword::DifferentFrom,
                Keyword::DifferentIndividuals,
                Self::individual,
            ),
            Axiom::HasKey {
                class,
                object_properties,
                data_properties,
            } => {
                self.class_expression(class, layout)?;
                self.keyword(Keyword::HasKey)?;
                self.separated(
                    sorted(object_properties),
                    ", ",
                    Self::object_property_expression,
                )?;
                if !object_properties.is_empty() && !data_properties.is_empty() {
                    self.write_str(", ")?;
                }
                self.separated(sorted(data_properties), ", ", |this, property| {
                    this.entity(EntityRef::DataProperty(property))
                })
            }
            Axiom::Declaration(entity) => {
                self.keyword(match entity {
                    Entity::Class(_) => Keyword::Class,
                    Entity::ObjectProperty(_) => Keyword::ObjectProperty,
                    Entity::DataProperty(_) => Keyword::DataProperty,
                    Entity::AnnotationProperty(_) => Keyword::AnnotationProperty,
                    Entity::Datatype(_) => Keyword::Datatype,
                    Entity::NamedIndividual(_) => Keyword::Individual,
                })?;
                self.entity(entity.as_ref())
            }
            Axiom::AnnotationAssertion {
                subject,
                annotation,
            } => {
                self.annotation_subject(subject)?;
                self.write_str(" ")?;
                self.annotation(annotation, layout)
            }
            Axiom::SubAnnotationPropertyOf {
                sub_property,
                super_property,
            } => {
                self.entity(EntityRef::AnnotationProperty(sub_property))?;
                self.keyword(Keyword::SubPropertyOf)?;
                self.entity(EntityRef::AnnotationProperty(super_property))
            }
            Axiom::AnnotationPropertyDomain { property, domain } => {
                self.entity(EntityRef::AnnotationProperty(property))?;
                self.keyword(Keyword::Domain)?;
                self.iri(domain)
            }
            Axiom::AnnotationPropertyRange { property, range } => {
                self.entity(EntityRef::AnnotationProperty(property))?;
                self.keyword(Keyword::Range)?;
                self.iri(range)
            }
            Axiom::Rule(rule) => self.swrl_rule(rule, layout),
        }
    }

    /// `A binary B` for exactly two operands, `nary: A, B, C` otherwise.
    fn binary_or_nary<T: Ord>(
        &mut self,
        operands: &[T],
        binary: Keyword,
        nary: Keyword,
        mut render: impl FnMut(&mut Self, &T) -> io::Result<()>,
    ) -> io::Result<()> {
        let operands = sorted(operands);
        if let [first, second] = operands.as_slice() {
            render(self, *first)?;
            self.keyword(binary)?;
            render(self, *second)
        } else {
            self.keyword(nary)?;
            self.separated(operands, ", ", render)
        }
    }

    fn characteristic(
        &mut self,
        keyword: Keyword,
        property: &ObjectPropertyExpression,
    ) -> io::Result<()> {
        self.keyword(keyword)?;
        self.object_property_expression(property)
    }

    fn object_assertion(
        &mut self,
        source: &Individual,
        property: &ObjectPropertyExpression,
        target: &Individual,
    ) -> io::Result<()> {
        self.individual(source)?;
        self.write_str(" ")?;
        self.object_property_expression(property)?;
        self.write_str(" ")?;
        self.individual(target)
    }
}
