//! Canonical term identifiers
//!
//! Every term maps to one string that encodes its full identity. The store
//! interns these strings and compares terms only through them.
//!
//! | kind          | identifier                                          |
//! |---------------|-----------------------------------------------------|
//! | named node    | the IRI                                             |
//! | blank node    | `_:` label                                          |
//! | variable      | `?` name                                            |
//! | default graph | empty string                                        |
//! | literal       | `"` value `"`, then `@` lang or `^^` datatype       |
//! | quoted quad   | `[` four quoted sub-identifiers, comma separated `]` |
//!
//! A [`CanonicalId`](super::CanonicalId) is already an identifier and is
//! written back unchanged, at any position and any depth.
//!
//! The datatype suffix is omitted for `xsd:string`. Inside a quoted quad
//! each sub-identifier is wrapped in `"` with embedded `"` doubled, so the
//! encoding stays unambiguous at any depth.

use super::term::{TermKind, TermLike};
use thiserror::Error;

/// Plain-string datatype, omitted from literal identifiers
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// Default bound on quoted-quad nesting
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 32;

const BLANK_NODE_PREFIX: &str = "_:";
const VARIABLE_PREFIX: char = '?';
const LANGUAGE_MARKER: char = '@';
const DATATYPE_MARKER: &str = "^^";

/// Canonicalization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    /// The term reported a kind outside the recognised set
    #[error("Unsupported term kind: {0}")]
    UnsupportedTermKind(String),

    /// Quoted quads nested deeper than the configured limit
    #[error("Quoted quads nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
}

pub type CanonicalResult<T> = Result<T, CanonicalError>;

/// Maps terms to canonical identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canonicalizer {
    max_depth: usize,
}

impl Canonicalizer {
    /// Create a canonicalizer that accepts at most `max_depth` levels of
    /// quoted quads
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Canonical identifier of a term
    pub fn canonicalize(&self, term: &dyn TermLike) -> CanonicalResult<String> {
        let mut out = String::new();
        self.write_term(term, 0, &mut out)?;
        Ok(out)
    }

    /// Canonical identifier of an optional term; `None` is the default graph
    pub fn canonicalize_opt(&self, term: Option<&dyn TermLike>) -> CanonicalResult<String> {
        match term {
            Some(term) => self.canonicalize(term),
            None => Ok(String::new()),
        }
    }

    fn write_term(&self, term: &dyn TermLike, depth: usize, out: &mut String) -> CanonicalResult<()> {
        match term.kind() {
            TermKind::NamedNode | TermKind::Canonical => out.push_str(term.value()),
            TermKind::BlankNode => {
                out.push_str(BLANK_NODE_PREFIX);
                out.push_str(term.value());
            }
            TermKind::Variable => {
                out.push(VARIABLE_PREFIX);
                out.push_str(term.value());
            }
            TermKind::DefaultGraph => {}
            TermKind::Literal => write_literal(term, out),
            TermKind::Quad => self.write_quad(term, depth, out)?,
            TermKind::Other(name) => {
                return Err(CanonicalError::UnsupportedTermKind(name.to_string()))
            }
        }
        Ok(())
    }

    fn write_quad(&self, term: &dyn TermLike, depth: usize, out: &mut String) -> CanonicalResult<()> {
        if depth >= self.max_depth {
            return Err(CanonicalError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        // A quad-kind term without components is a broken term model
        let nested = term
            .nested()
            .ok_or_else(|| CanonicalError::UnsupportedTermKind(TermKind::Quad.to_string()))?;

        out.push('[');
        let parts = [nested.subject, nested.predicate, nested.object, nested.graph];
        let mut part = String::new();
        for (i, sub) in parts.into_iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            part.clear();
            self.write_term(sub, depth + 1, &mut part)?;
            out.push('"');
            for c in part.chars() {
                if c == '"' {
                    out.push('"');
                }
                out.push(c);
            }
            out.push('"');
        }
        out.push(']');
        Ok(())
    }
}

impl Default for Canonicalizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_NESTING_DEPTH)
    }
}

fn write_literal(term: &dyn TermLike, out: &mut String) {
    out.push('"');
    out.push_str(term.value());
    out.push('"');
    if let Some(lang) = term.language().filter(|l| !l.is_empty()) {
        out.push(LANGUAGE_MARKER);
        out.push_str(lang);
    } else if let Some(datatype) = term.datatype().filter(|d| *d != XSD_STRING) {
        out.push_str(DATATYPE_MARKER);
        out.push_str(datatype);
    }
}
