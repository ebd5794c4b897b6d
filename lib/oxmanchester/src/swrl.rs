use crate::keyword::Keyword;
use crate::layout::Layout;
use crate::renderer::WriterManchesterRenderer;
use oxowl::vocab::swrl;
use oxowl::{Atom, DArgument, DataRange, EntityRef, IArgument, SwrlRule};
use oxrdf::NamedNode;
use std::io::{self, Write};

impl<W: Write> WriterManchesterRenderer<W> {
    /// Writes `body1, body2 -> head1`, on a single line.
    pub(crate) fn swrl_rule(&mut self, rule: &SwrlRule, layout: Layout) -> io::Result<()> {
        let layout = layout.single_line();
        self.separated(&rule.body, ", ", |this, atom| this.atom(atom, layout))?;
        self.write_str(" -> ")?;
        self.separated(&rule.head, ", ", |this, atom| this.atom(atom, layout))
    }

    pub(crate) fn atom(&mut self, atom: &Atom, layout: Layout) -> io::Result<()> {
        match atom {
            Atom::Class {
                predicate,
                argument,
            } => {
                self.operand(predicate, layout)?;
                self.write_str("(")?;
                self.i_argument(argument)?;
                self.write_str(")")
            }
            Atom::DataRange {
                predicate,
                argument,
            } => {
                // Data intersections and unions already bring their parentheses
                if matches!(
                    predicate,
                    DataRange::Datatype(_)
                        | DataRange::DataIntersectionOf(_)
                        | DataRange::DataUnionOf(_)
                ) {
                    self.data_range(predicate)?;
                } else {
                    self.write_str("(")?;
                    self.data_range(predicate)?;
                    self.write_str(")")?;
                }
                self.write_str("(")?;
                self.d_argument(argument)?;
                self.write_str(")")
            }
            Atom::ObjectProperty {
                predicate,
                subject,
                object,
            } => {
                self.object_property_expression(predicate)?;
                self.write_str("(")?;
                self.i_argument(subject)?;
                self.write_str(", ")?;
                self.i_argument(object)?;
                self.write_str(")")
            }
            Atom::DataProperty {
                predicate,
                subject,
                object,
            } => {
                self.entity(EntityRef::DataProperty(predicate))?;
                self.write_str("(")?;
                self.i_argument(subject)?;
                self.write_str(", ")?;
                self.d_argument(object)?;
                self.write_str(")")
            }
            Atom::BuiltIn {
                predicate,
                arguments,
            } => {
                if let Some(name) = Atom::built_in_local_name(predicate) {
                    self.write_str("swrlb:")?;
                    self.write_str(name)?;
                } else {
                    self.iri(predicate)?;
                }
                self.write_str("(")?;
                self.separated(arguments, ", ", Self::d_argument)?;
                self.write_str(")")
            }
            Atom::SameIndividual(first, second) => {
                self.binary_atom(Keyword::SameAs, first, second)
            }
            Atom::DifferentIndividuals(first, second) => {
                self.binary_atom(Keyword::DifferentFrom, first, second)
            }
        }
    }

    fn binary_atom(
        &mut self,
        keyword: Keyword,
        first: &IArgument,
        second: &IArgument,
    ) -> io::Result<()> {
        self.write_str(keyword.as_str())?;
        self.write_str("(")?;
        self.i_argument(first)?;
        self.write_str(", ")?;
        self.i_argument(second)?;
        self.write_str(")")
    }

    fn i_argument(&mut self, argument: &IArgument) -> io::Result<()> {
        match argument {
            IArgument::Variable(variable) => self.variable(variable),
            IArgument::Individual(individual) => self.individual(individual),
        }
    }

    fn d_argument(&mut self, argument: &DArgument) -> io::Result<()> {
        match argument {
            DArgument::Variable(variable) => self.variable(variable),
            DArgument::Literal(literal) => self.literal(literal),
        }
    }

    fn variable(&mut self, variable: &NamedNode) -> io::Result<()> {
        self.write_str("?")?;
        let local_name = swrl::VARIABLE_NAMESPACES
            .iter()
            .find_map(|namespace| variable.as_str().strip_prefix(namespace))
            .filter(|name| !name.is_empty());
        match local_name {
            Some(name) => self.write_str(name),
            None => self.iri(variable),
        }
    }
}
