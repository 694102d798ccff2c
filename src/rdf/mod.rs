//! RDF term model
//!
//! This module provides the terms a store can hold:
//! - Named nodes, blank nodes, literals and variables (wrapping oxrdf)
//! - The default graph marker
//! - Quoted quads (RDF-star), nested to any finite depth
//! - Canonical identifiers, the single equality rule the store uses
//!
//! Any other term model joins in by implementing [`TermLike`] and
//! [`QuadLike`]; oxrdf values already do.
//!
//! # Example
//!
//! ```rust
//! use quadstore::rdf::{Canonicalizer, Literal, NamedNode, Quad, Term};
//!
//! let alice = NamedNode::new("http://example.org/alice").unwrap();
//! let name = NamedNode::new("http://xmlns.com/foaf/0.1/name").unwrap();
//! let quad = Quad::triple(alice, name, Literal::new_simple_literal("Alice"));
//!
//! let canon = Canonicalizer::default();
//! assert_eq!(canon.canonicalize(&quad.object).unwrap(), "\"Alice\"");
//! assert_eq!(canon.canonicalize(&quad.graph).unwrap(), "");
//! assert!(Term::from(quad).is_quad());
//! ```

mod canonical;
mod interop;
mod term;
mod types;

pub use types::{
    BlankNode, Literal, NamedNode, Quad, Term, TermError, TermResult, Variable,
};

pub use term::{CanonicalId, DefaultGraph, NestedQuad, QuadLike, TermKind, TermLike};

pub use canonical::{
    CanonicalError, CanonicalResult, Canonicalizer, DEFAULT_MAX_NESTING_DEPTH, XSD_STRING,
};
