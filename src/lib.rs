//! Quadstore
//!
//! An in-memory, indexed store for RDF quads (subject, predicate, object,
//! graph) with RDF-star quoted quads as terms.
//!
//! # Architecture
//!
//! - Terms are reduced to canonical identifier strings (`rdf::Canonicalizer`)
//! - Identifiers are interned into dense integer ids, one interner per store
//! - Each named graph keeps SPO, POS and OSP hash indices over those ids
//! - Pattern matches walk the index whose outer key is the most selective
//!   bound component and return a new, fully indexed store
//!
//! The store is single-threaded and synchronous. Callers that share one
//! across threads wrap it in a lock or clone a snapshot.
//!
//! # Example Usage
//!
//! ```rust
//! use quadstore::{Literal, NamedNode, Quad, QuadPattern, QuadStore};
//!
//! let mut store = QuadStore::new();
//!
//! let alice = NamedNode::new("http://example.org/alice").unwrap();
//! let name = NamedNode::new("http://xmlns.com/foaf/0.1/name").unwrap();
//! let people = NamedNode::new("http://example.org/graph/people").unwrap();
//!
//! let quad = Quad::new(
//!     alice.clone(),
//!     name.clone(),
//!     Literal::new_language_tagged_literal("Alice", "en").unwrap(),
//!     people.clone(),
//! );
//! store.add(quad.clone()).unwrap().add(quad.clone()).unwrap();
//! assert_eq!(store.len(), 1);
//! assert!(store.has(&quad).unwrap());
//!
//! // Query by graph
//! let in_people = store.match_pattern(&QuadPattern::any().graph(&people)).unwrap();
//! assert_eq!(in_people.len(), 1);
//!
//! // A language tag is part of the literal's identity
//! let german = Quad::new(
//!     alice,
//!     name,
//!     Literal::new_language_tagged_literal("Alice", "de").unwrap(),
//!     people,
//! );
//! assert!(!store.has(&german).unwrap());
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod rdf;
pub mod store;

// Re-export main types for convenience
pub use config::{ConfigError, ConfigResult, StoreConfig};

pub use rdf::{
    BlankNode, CanonicalError, CanonicalId, Canonicalizer, DefaultGraph, Literal, NamedNode, Quad,
    QuadLike, Term, TermError, TermKind, TermLike, Variable,
};

pub use store::{
    IndexOrder, QuadIter, QuadPattern, QuadStore, StoreError, StoreResult, TermId,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
