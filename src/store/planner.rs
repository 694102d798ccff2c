//! Pattern matching over the graph indices
//!
//! For every candidate graph the planner walks the one index whose outer
//! key is the most selective bound component:
//!
//! | bound          | index | walk order                  |
//! |----------------|-------|-----------------------------|
//! | subject+object | OSP   | object, subject, predicate  |
//! | subject        | SPO   | subject, predicate, object  |
//! | predicate      | POS   | predicate, object, subject  |
//! | object         | OSP   | object, subject, predicate  |
//! | nothing        | SPO   | everything                  |
//!
//! Any index gives the same result set. The choice only limits how many
//! map levels get enumerated.

use super::index::{GraphIndex, GraphTable, IndexOrder, QuadKey};
use super::interner::{Interner, TermId};
use crate::rdf::{CanonicalResult, Canonicalizer, QuadLike, TermLike};
use std::fmt;
use tracing::trace;

/// A quad pattern; unbound components match anything
#[derive(Clone, Copy, Default)]
pub struct QuadPattern<'a> {
    pub subject: Option<&'a dyn TermLike>,
    pub predicate: Option<&'a dyn TermLike>,
    pub object: Option<&'a dyn TermLike>,
    pub graph: Option<&'a dyn TermLike>,
}

impl<'a> QuadPattern<'a> {
    /// Pattern with every component unbound
    pub fn any() -> Self {
        Self::default()
    }

    /// Pattern with every component bound to the given quad's terms
    pub fn exact(quad: &'a dyn QuadLike) -> Self {
        Self {
            subject: Some(quad.subject()),
            predicate: Some(quad.predicate()),
            object: Some(quad.object()),
            graph: Some(quad.graph()),
        }
    }

    pub fn subject(mut self, term: &'a dyn TermLike) -> Self {
        self.subject = Some(term);
        self
    }

    pub fn predicate(mut self, term: &'a dyn TermLike) -> Self {
        self.predicate = Some(term);
        self
    }

    pub fn object(mut self, term: &'a dyn TermLike) -> Self {
        self.object = Some(term);
        self
    }

    pub fn graph(mut self, term: &'a dyn TermLike) -> Self {
        self.graph = Some(term);
        self
    }
}

impl fmt::Debug for QuadPattern<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = |t: &Option<&dyn TermLike>| t.map(|t| t.kind());
        f.debug_struct("QuadPattern")
            .field("subject", &bound(&self.subject))
            .field("predicate", &bound(&self.predicate))
            .field("object", &bound(&self.object))
            .field("graph", &bound(&self.graph))
            .finish()
    }
}

/// A pattern resolved to interned ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundPattern {
    pub subject: Option<TermId>,
    pub predicate: Option<TermId>,
    pub object: Option<TermId>,
    pub graph: Option<TermId>,
}

impl BoundPattern {
    /// Canonicalize and look up every bound component. `Ok(None)` when a
    /// bound term was never interned, since nothing can match it then.
    pub fn resolve(
        pattern: &QuadPattern<'_>,
        canonicalizer: &Canonicalizer,
        interner: &Interner,
    ) -> CanonicalResult<Option<Self>> {
        let lookup = |term: Option<&dyn TermLike>| -> CanonicalResult<Option<Option<TermId>>> {
            match term {
                None => Ok(Some(None)),
                Some(term) => {
                    let id = canonicalizer.canonicalize(term)?;
                    Ok(interner.get(&id).map(Some))
                }
            }
        };

        let Some(subject) = lookup(pattern.subject)? else {
            return Ok(None);
        };
        let Some(predicate) = lookup(pattern.predicate)? else {
            return Ok(None);
        };
        let Some(object) = lookup(pattern.object)? else {
            return Ok(None);
        };
        let Some(graph) = lookup(pattern.graph)? else {
            return Ok(None);
        };
        Ok(Some(Self {
            subject,
            predicate,
            object,
            graph,
        }))
    }

    /// Index to walk for this pattern
    pub fn index_order(&self) -> IndexOrder {
        match (self.subject, self.predicate, self.object) {
            (Some(_), _, Some(_)) => IndexOrder::Osp,
            (Some(_), _, None) => IndexOrder::Spo,
            (None, Some(_), _) => IndexOrder::Pos,
            (None, None, Some(_)) => IndexOrder::Osp,
            (None, None, None) => IndexOrder::Spo,
        }
    }
}

/// Visit the key of every quad in `table` matching `pattern`
pub fn find<Q>(table: &GraphTable<Q>, pattern: &BoundPattern, mut visit: impl FnMut(QuadKey)) {
    let order = pattern.index_order();
    trace!("Matching {:?} with {:?} index", pattern, order);

    let mut walk_graph = |graph_id: TermId, graph: &GraphIndex| {
        graph.walk(
            order,
            pattern.subject,
            pattern.predicate,
            pattern.object,
            |subject, predicate, object| {
                visit(QuadKey {
                    subject,
                    predicate,
                    object,
                    graph: graph_id,
                })
            },
        );
    };

    match pattern.graph {
        Some(graph_id) => {
            if let Some(graph) = table.graph(graph_id) {
                walk_graph(graph_id, graph);
            }
        }
        None => {
            for (graph_id, graph) in table.graphs() {
                walk_graph(graph_id, graph);
            }
        }
    }
}
