//! oxrdf values as store terms
//!
//! Lets a store hold `oxrdf::Quad` values directly and lets oxrdf terms be
//! used in patterns against a store of crate [`Quad`](super::Quad)s.
//! Quoted triples map to the quoted-quad kind in the default graph.

use super::term::{DefaultGraph, NestedQuad, QuadLike, TermKind, TermLike};
use oxrdf::{BlankNode, GraphName, Literal, NamedNode, Quad, Subject, Term, Triple, Variable};

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
        Some(Literal::datatype(self).as_str())
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

impl TermLike for Triple {
    fn kind(&self) -> TermKind {
        TermKind::Quad
    }

    fn value(&self) -> &str {
        ""
    }

    fn nested(&self) -> Option<NestedQuad<'_>> {
        Some(NestedQuad {
            subject: &self.subject,
            predicate: &self.predicate,
            object: &self.object,
            graph: &DefaultGraph,
        })
    }
}

impl TermLike for Subject {
    fn kind(&self) -> TermKind {
        match self {
            Subject::NamedNode(_) => TermKind::NamedNode,
            Subject::BlankNode(_) => TermKind::BlankNode,
            Subject::Triple(_) => TermKind::Quad,
            #[allow(unreachable_patterns)]
            _ => TermKind::Other("oxrdf::Subject"),
        }
    }

    fn value(&self) -> &str {
        match self {
            Subject::NamedNode(n) => n.as_str(),
            Subject::BlankNode(b) => b.as_str(),
            #[allow(unreachable_patterns)]
            _ => "",
        }
    }

    fn nested(&self) -> Option<NestedQuad<'_>> {
        match self {
            Subject::Triple(t) => (**t).nested(),
            _ => None,
        }
    }
}

impl TermLike for Term {
    fn kind(&self) -> TermKind {
        match self {
            Term::NamedNode(_) => TermKind::NamedNode,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::Literal(_) => TermKind::Literal,
            Term::Triple(_) => TermKind::Quad,
            #[allow(unreachable_patterns)]
            _ => TermKind::Other("oxrdf::Term"),
        }
    }

    fn value(&self) -> &str {
        match self {
            Term::NamedNode(n) => n.as_str(),
            Term::BlankNode(b) => b.as_str(),
            Term::Literal(l) => l.value(),
            #[allow(unreachable_patterns)]
            _ => "",
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
            Term::Literal(l) => Some(l.datatype().as_str()),
            _ => None,
        }
    }

    fn nested(&self) -> Option<NestedQuad<'_>> {
        match self {
            Term::Triple(t) => (**t).nested(),
            _ => None,
        }
    }
}

impl TermLike for GraphName {
    fn kind(&self) -> TermKind {
        match self {
            GraphName::NamedNode(_) => TermKind::NamedNode,
            GraphName::BlankNode(_) => TermKind::BlankNode,
            GraphName::DefaultGraph => TermKind::DefaultGraph,
            #[allow(unreachable_patterns)]
            _ => TermKind::Other("oxrdf::GraphName"),
        }
    }

    fn value(&self) -> &str {
        match self {
            GraphName::NamedNode(n) => n.as_str(),
            GraphName::BlankNode(b) => b.as_str(),
            #[allow(unreachable_patterns)]
            _ => "",
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
        &self.graph_name
    }
}

/// A triple is stored as a quad in the default graph
impl QuadLike for Triple {
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
        &DefaultGraph
    }
}
