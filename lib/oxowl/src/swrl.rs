//! SWRL rules: `body -> head` implications over atoms.

use crate::entity::{DataProperty, Individual};
use crate::expression::{ClassExpression, DataRange, ObjectPropertyExpression};
use crate::vocab::swrl;
use oxrdf::{Literal, NamedNode};

/// An argument ranging over individuals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IArgument {
    Variable(NamedNode),
    Individual(Individual),
}

impl From<Individual> for IArgument {
    fn from(individual: Individual) -> Self {
        Self::Individual(individual)
    }
}

/// An argument ranging over data values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DArgument {
    Variable(NamedNode),
    Literal(Literal),
}

impl From<Literal> for DArgument {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

/// A SWRL atom.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Atom {
    /// `C(?x)`
    Class {
        predicate: ClassExpression,
        argument: IArgument,
    },
    /// `D(?v)`
    DataRange {
        predicate: DataRange,
        argument: DArgument,
    },
    /// `p(?x, ?y)`
    ObjectProperty {
        predicate: ObjectPropertyExpression,
        subject: IArgument,
        object: IArgument,
    },
    /// `d(?x, ?v)`
    DataProperty {
        predicate: DataProperty,
        subject: IArgument,
        object: DArgument,
    },
    /// `swrlb:op(?v1, ..., ?vn)`, arguments kept in call order
    BuiltIn {
        predicate: NamedNode,
        arguments: Vec<DArgument>,
    },
    SameIndividual(IArgument, IArgument),
    DifferentIndividuals(IArgument, IArgument),
}

impl Atom {
    /// Returns the name of a built-in predicate within the `swrlb:` vocabulary.
    pub fn built_in_local_name(predicate: &NamedNode) -> Option<&str> {
        predicate
            .as_str()
            .strip_prefix(swrl::BUILT_INS)
            .filter(|name| !name.is_empty())
    }
}

/// A rule `body -> head`. Atom order is meaningful and preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SwrlRule {
    pub body: Vec<Atom>,
    pub head: Vec<Atom>,
}

impl SwrlRule {
    pub fn new(
        body: impl IntoIterator<Item = Atom>,
        head: impl IntoIterator<Item = Atom>,
    ) -> Self {
        Self {
            body: body.into_iter().collect(),
            head: head.into_iter().collect(),
        }
    }

    /// Returns every variable occurring in the rule, in first-occurrence order.
    pub fn variables(&self) -> Vec<&NamedNode> {
        let mut variables = Vec::new();
        for atom in self.body.iter().chain(&self.head) {
            match atom {
                Atom::Class { argument, .. } => push_i_variable(&mut variables, argument),
                Atom::DataRange { argument, .. } => push_d_variable(&mut variables, argument),
                Atom::ObjectProperty {
                    subject, object, ..
                }
                | Atom::SameIndividual(subject, object)
                | Atom::DifferentIndividuals(subject, object) => {
                    push_i_variable(&mut variables, subject);
                    push_i_variable(&mut variables, object);
                }
                Atom::DataProperty {
                    subject, object, ..
                } => {
                    push_i_variable(&mut variables, subject);
                    push_d_variable(&mut variables, object);
                }
                Atom::BuiltIn { arguments, .. } => {
                    for argument in arguments {
                        push_d_variable(&mut variables, argument);
                    }
                }
            }
        }
        variables
    }
}

fn push_i_variable<'a>(variables: &mut Vec<&'a NamedNode>, argument: &'a IArgument) {
    if let IArgument::Variable(v) = argument {
        if !variables.contains(&v) {
            variables.push(v);
        }
    }
}

fn push_d_variable<'a>(variables: &mut Vec<&'a NamedNode>, argument: &'a DArgument) {
    if let DArgument::Variable(v) = argument {
        if !variables.contains(&v) {
            variables.push(v);
        }
    }
}
