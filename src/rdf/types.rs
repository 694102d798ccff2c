//! RDF term model
//!
//! Newtypes around the oxrdf primitives plus the [`Term`] and [`Quad`]
//! values the store keeps. A [`Term`] can itself hold a quad, which is how
//! RDF-star quoted triples are represented.

use oxrdf::{
    BlankNode as OxBlankNode, Literal as OxLiteral, NamedNode as OxNamedNode,
    Variable as OxVariable,
};
use std::fmt;
use thiserror::Error;

/// Raised when a term is built from text oxrdf rejects
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TermError {
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    #[error("Invalid blank node: {0}")]
    InvalidBlankNode(String),

    /// Usually a malformed BCP47 language tag
    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),

    #[error("Invalid variable: {0}")]
    InvalidVariable(String),
}

pub type TermResult<T> = Result<T, TermError>;

/// An absolute IRI. Canonicalizes to the IRI text itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedNode(OxNamedNode);

impl NamedNode {
    /// Parses and validates `iri`; relative references are rejected
    pub fn new(iri: &str) -> TermResult<Self> {
        OxNamedNode::new(iri)
            .map(Self)
            .map_err(|e| TermError::InvalidIri(format!("{iri}: {e}")))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn inner(&self) -> &OxNamedNode {
        &self.0
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}

impl From<OxNamedNode> for NamedNode {
    fn from(node: OxNamedNode) -> Self {
        Self(node)
    }
}

/// A blank node, identified by its label within one store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlankNode(OxBlankNode);

impl BlankNode {
    /// Fresh node with a random label that will not clash with others
    pub fn new() -> Self {
        Self(OxBlankNode::default())
    }

    /// Node with a caller-chosen label, written without the `_:` prefix
    pub fn from_label(label: &str) -> TermResult<Self> {
        OxBlankNode::new(label)
            .map(Self)
            .map_err(|e| TermError::InvalidBlankNode(format!("{label}: {e}")))
    }

    /// Label without the `_:` prefix
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn inner(&self) -> &OxBlankNode {
        &self.0
    }
}

impl Default for BlankNode {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.as_str())
    }
}

impl From<OxBlankNode> for BlankNode {
    fn from(node: OxBlankNode) -> Self {
        Self(node)
    }
}

/// A literal: lexical form plus either a language tag or a datatype
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal(OxLiteral);

impl Literal {
    /// Plain string literal, typed `xsd:string`
    pub fn new_simple_literal(value: impl Into<String>) -> Self {
        Self(OxLiteral::new_simple_literal(value))
    }

    pub fn new_language_tagged_literal(
        value: impl Into<String>,
        language: impl Into<String>,
    ) -> TermResult<Self> {
        OxLiteral::new_language_tagged_literal(value, language)
            .map(Self)
            .map_err(|e| TermError::InvalidLiteral(e.to_string()))
    }

    /// Literal with an explicit datatype. Passing `xsd:string` gives the
    /// same literal as [`Literal::new_simple_literal`].
    pub fn new_typed_literal(value: impl Into<String>, datatype: NamedNode) -> Self {
        Self(OxLiteral::new_typed_literal(value, datatype.0))
    }

    /// Lexical form, unescaped
    pub fn value(&self) -> &str {
        self.0.value()
    }

    pub fn language(&self) -> Option<&str> {
        self.0.language()
    }

    /// `rdf:langString` for tagged literals
    pub fn datatype(&self) -> NamedNode {
        NamedNode(self.0.datatype().into_owned())
    }

    pub fn inner(&self) -> &OxLiteral {
        &self.0
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // oxrdf takes care of escaping the lexical form
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<OxLiteral> for Literal {
    fn from(lit: OxLiteral) -> Self {
        Self(lit)
    }
}

/// Query variable (`?name`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable(OxVariable);

impl Variable {
    /// `name` is given without the leading `?`
    pub fn new(name: &str) -> TermResult<Self> {
        OxVariable::new(name)
            .map(Self)
            .map_err(|e| TermError::InvalidVariable(format!("{name}: {e}")))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.as_str())
    }
}

impl From<OxVariable> for Variable {
    fn from(var: OxVariable) -> Self {
        Self(var)
    }
}

/// Any RDF term that can sit in a quad position
///
/// `Quad` holds a quoted quad. Nesting is finite by construction, the
/// canonicalizer additionally bounds how deep it will descend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
    Literal(Literal),
    Variable(Variable),
    /// Only meaningful in the graph position
    DefaultGraph,
    /// Quoted quad (RDF-star)
    Quad(Box<Quad>),
}

impl Term {
    pub fn is_named_node(&self) -> bool {
        matches!(self, Term::NamedNode(_))
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    pub fn is_default_graph(&self) -> bool {
        matches!(self, Term::DefaultGraph)
    }

    pub fn is_quad(&self) -> bool {
        matches!(self, Term::Quad(_))
    }
}

impl Default for Term {
    fn default() -> Self {
        Term::DefaultGraph
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::NamedNode(n) => write!(f, "{}", n),
            Term::BlankNode(b) => write!(f, "{}", b),
            Term::Literal(l) => write!(f, "{}", l),
            Term::Variable(v) => write!(f, "{}", v),
            Term::DefaultGraph => Ok(()),
            Term::Quad(q) => {
                write!(f, "<< {} {} {}", q.subject, q.predicate, q.object)?;
                if !q.graph.is_default_graph() {
                    write!(f, " {}", q.graph)?;
                }
                write!(f, " >>")
            }
        }
    }
}

impl From<NamedNode> for Term {
    fn from(node: NamedNode) -> Self {
        Term::NamedNode(node)
    }
}

impl From<BlankNode> for Term {
    fn from(node: BlankNode) -> Self {
        Term::BlankNode(node)
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

impl From<Variable> for Term {
    fn from(var: Variable) -> Self {
        Term::Variable(var)
    }
}

impl From<Quad> for Term {
    fn from(quad: Quad) -> Self {
        Term::Quad(Box::new(quad))
    }
}

/// The unit a store holds; also usable as a quoted term via `Term::from`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quad {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
    /// `Term::DefaultGraph` outside any named graph
    pub graph: Term,
}

impl Quad {
    pub fn new(
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
        graph: impl Into<Term>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            graph: graph.into(),
        }
    }

    /// Quad in the default graph
    pub fn triple(
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
    ) -> Self {
        Self::new(subject, predicate, object, Term::DefaultGraph)
    }

    pub fn in_default_graph(&self) -> bool {
        self.graph.is_default_graph()
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_default_graph() {
            write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
        } else {
            write!(
                f,
                "{} {} {} {} .",
                self.subject, self.predicate, self.object, self.graph
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_node() {
        let node = NamedNode::new("http://example.org/alice").unwrap();
        assert_eq!(node.as_str(), "http://example.org/alice");
        assert_eq!(node.to_string(), "<http://example.org/alice>");

        assert!(matches!(
            NamedNode::new("not an iri"),
            Err(TermError::InvalidIri(_))
        ));
    }

    #[test]
    fn test_blank_node() {
        let node1 = BlankNode::new();
        let node2 = BlankNode::new();
        assert_ne!(node1, node2);

        let labelled = BlankNode::from_label("b0").unwrap();
        assert_eq!(labelled.to_string(), "_:b0");
    }

    #[test]
    fn test_literal() {
        let lit = Literal::new_simple_literal("Alice");
        assert_eq!(lit.value(), "Alice");
        assert_eq!(lit.language(), None);
        assert_eq!(
            lit.datatype().as_str(),
            "http://www.w3.org/2001/XMLSchema#string"
        );

        let lit = Literal::new_language_tagged_literal("Alice", "en").unwrap();
        assert_eq!(lit.value(), "Alice");
        assert_eq!(lit.language(), Some("en"));

        assert!(Literal::new_language_tagged_literal("Alice", "not a tag").is_err());
    }

    #[test]
    fn test_variable() {
        let var = Variable::new("x").unwrap();
        assert_eq!(var.as_str(), "x");
        assert_eq!(var.to_string(), "?x");
    }

    #[test]
    fn test_quad_display() {
        let s = NamedNode::new("http://example.org/s").unwrap();
        let p = NamedNode::new("http://example.org/p").unwrap();
        let g = NamedNode::new("http://example.org/g").unwrap();

        let triple = Quad::triple(s.clone(), p.clone(), Literal::new_simple_literal("o"));
        assert!(triple.in_default_graph());
        assert_eq!(
            triple.to_string(),
            "<http://example.org/s> <http://example.org/p> \"o\" ."
        );

        let quad = Quad::new(s, p, BlankNode::from_label("o").unwrap(), g);
        assert_eq!(
            quad.to_string(),
            "<http://example.org/s> <http://example.org/p> _:o <http://example.org/g> ."
        );
    }

    #[test]
    fn test_quoted_quad_term() {
        let s = NamedNode::new("http://example.org/s").unwrap();
        let p = NamedNode::new("http://example.org/p").unwrap();
        let o = NamedNode::new("http://example.org/o").unwrap();

        let inner = Quad::triple(s.clone(), p.clone(), o.clone());
        let outer = Quad::triple(inner.clone(), p, o);

        assert!(outer.subject.is_quad());
        assert_eq!(
            outer.subject.to_string(),
            "<< <http://example.org/s> <http://example.org/p> <http://example.org/o> >>"
        );
        assert_eq!(outer.subject, Term::from(inner));
    }
}
