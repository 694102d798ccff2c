//! Term access traits
//!
//! The store never looks inside a term directly. Anything that can report
//! a [`TermKind`] and its structural fields through [`TermLike`] can be
//! stored and queried, which lets values from different term models be
//! compared with each other.

use super::types::{BlankNode, Literal, NamedNode, Quad, Term, Variable};
use std::fmt;

/// Discriminator reported by a term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermKind {
    NamedNode,
    BlankNode,
    Literal,
    Variable,
    DefaultGraph,
    /// Quoted quad (RDF-star)
    Quad,
    /// An identifier that is already canonical
    Canonical,
    /// A kind outside the recognised set, named by the foreign term model
    Other(&'static str),
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermKind::NamedNode => f.write_str("NamedNode"),
            TermKind::BlankNode => f.write_str("BlankNode"),
            TermKind::Literal => f.write_str("Literal"),
            TermKind::Variable => f.write_str("Variable"),
            TermKind::DefaultGraph => f.write_str("DefaultGraph"),
            TermKind::Quad => f.write_str("Quad"),
            TermKind::Canonical => f.write_str("Canonical"),
            TermKind::Other(name) => f.write_str(name),
        }
    }
}

/// Borrowed view of the four components of a quoted quad
#[derive(Clone, Copy)]
pub struct NestedQuad<'a> {
    pub subject: &'a dyn TermLike,
    pub predicate: &'a dyn TermLike,
    pub object: &'a dyn TermLike,
    pub graph: &'a dyn TermLike,
}

/// Structural access to a term
pub trait TermLike {
    /// The kind of this term
    fn kind(&self) -> TermKind;

    /// IRI, blank node label, lexical form or variable name.
    /// Empty for the default graph and for quoted quads.
    fn value(&self) -> &str;

    /// Language tag of a literal
    fn language(&self) -> Option<&str> {
        None
    }

    /// Datatype IRI of a literal
    fn datatype(&self) -> Option<&str> {
        None
    }

    /// Components of a quoted quad
    fn nested(&self) -> Option<NestedQuad<'_>> {
        None
    }
}

/// Structural access to the four positions of a quad
pub trait QuadLike {
    fn subject(&self) -> &dyn TermLike;
    fn predicate(&self) -> &dyn TermLike;
    fn object(&self) -> &dyn TermLike;
    fn graph(&self) -> &dyn TermLike;
}

/// Default graph marker usable wherever a `&dyn TermLike` is needed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DefaultGraph;

impl TermLike for DefaultGraph {
    fn kind(&self) -> TermKind {
        TermKind::DefaultGraph
    }

    fn value(&self) -> &str {
        ""
    }
}

/// A canonical identifier standing in for the term it was made from.
/// It canonicalizes to itself, so identifiers read back from a store (for
/// example through `graphs()`) can be used in lookups and patterns.
///
/// The string is not checked. An identifier no store has produced simply
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalId<'a>(&'a str);

impl<'a> CanonicalId<'a> {
    pub fn new(id: &'a str) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl TermLike for CanonicalId<'_> {
    fn kind(&self) -> TermKind {
        TermKind::Canonical
    }

    fn value(&self) -> &str {
        self.0
    }
}

/// Identifiers in subject, predicate, object, graph order
impl QuadLike for [CanonicalId<'_>; 4] {
    fn subject(&self) -> &dyn TermLike {
        &self[0]
    }

    fn predicate(&self) -> &dyn TermLike {
        &self[1]
    }

    fn object(&self) -> &dyn TermLike {
        &self[2]
    }

    fn graph(&self) -> &dyn TermLike {
        &self[3]
    }
}

impl<T: TermLike + ?Sized> TermLike for &T {
    fn kind(&self) -> TermKind {
        (**self).kind()
    }

    fn value(&self) -> &str {
        (**self).value()
    }

    fn language(&self) -> Option<&str> {
        (**self).language()
    }

    fn datatype(&self) -> Option<&str> {
        (**self).datatype()
    }

    fn nested(&self) -> Option<NestedQuad<'_>> {
        (**self).nested()
    }
}

impl TermLike for NamedNode {
    fn kind(&self) -> TermKind {
        TermKind::NamedNode
    }

    fn value(&self) -> &str {
        self.as_str()
    }
}

impl TermLike for BlankNode {
    fn kind(&self) -> TermKind {
        TermKind::BlankNode
    }

    fn value(&self) -> &str {
        self.as_str()
    }
}

impl TermLike for Literal {
    fn kind(&self) -> TermKind {
        TermKind::Literal
    }

    fn value(&self) -> &str {
        Literal::value(self)
    }

    fn language(&self) -> Option<&str> {
        Literal::language(self)
    }

    fn datatype(&self) -> Option<&str> {
        Some(self.inner().datatype().as_str())
    }
}

impl TermLike for Variable {
    fn kind(&self) -> TermKind {
        TermKind::Variable
    }

    fn value(&self) -> &str {
        self.as_str()
    }
}

impl TermLike for Term {
    fn kind(&self) -> TermKind {
        match self {
            Term::NamedNode(_) => TermKind::NamedNode,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::Literal(_) => TermKind::Literal,
            Term::Variable(_) => TermKind::Variable,
            Term::DefaultGraph => TermKind::DefaultGraph,
            Term::Quad(_) => TermKind::Quad,
        }
    }

    fn value(&self) -> &str {
        match self {
            Term::NamedNode(n) => n.as_str(),
            Term::BlankNode(b) => b.as_str(),
            Term::Literal(l) => l.value(),
            Term::Variable(v) => v.as_str(),
            Term::DefaultGraph | Term::Quad(_) => "",
        }
    }

    fn language(&self) -> Option<&str> {
        match self {
            Term::Literal(l) => l.language(),
            _ => None,
        }
    }

    fn datatype(&self) -> Option<&str> {
        match self {
            Term::Literal(l) => TermLike::datatype(l),
            _ => None,
        }
    }

    fn nested(&self) -> Option<NestedQuad<'_>> {
        match self {
            Term::Quad(q) => Some(NestedQuad {
                subject: &q.subject,
                predicate: &q.predicate,
                object: &q.object,
                graph: &q.graph,
            }),
            _ => None,
        }
    }
}

impl QuadLike for Quad {
    fn subject(&self) -> &dyn TermLike {
        &self.subject
    }

    fn predicate(&self) -> &dyn TermLike {
        &self.predicate
    }

    fn object(&self) -> &dyn TermLike {
        &self.object
    }

    fn graph(&self) -> &dyn TermLike {
        &self.graph
    }
}

impl<Q: QuadLike + ?Sized> QuadLike for &Q {
    fn subject(&self) -> &dyn TermLike {
        (**self).subject()
    }

    fn predicate(&self) -> &dyn TermLike {
        (**self).predicate()
    }

    fn object(&self) -> &dyn TermLike {
        (**self).object()
    }

    fn graph(&self) -> &dyn TermLike {
        (**self).graph()
    }
}
