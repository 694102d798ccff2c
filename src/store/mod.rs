//! Indexed in-memory quad store
//!
//! [`QuadStore`] keeps set semantics over quads under the canonical
//! identifier rule: two quads are the same when their four canonical
//! identifiers are. The store returns the exact values that were added.
//!
//! Every term is canonicalized and interned into a [`TermId`]; each graph
//! then holds SPO, POS and OSP indices over those ids. Lookups about terms
//! the store has never seen are empty results, not errors.

mod index;
mod interner;
mod planner;

pub use index::IndexOrder;
pub use interner::TermId;
pub use planner::QuadPattern;

use crate::config::StoreConfig;
use crate::rdf::{CanonicalError, Canonicalizer, Quad, QuadLike};
use index::{GraphTable, QuadKey};
use interner::Interner;
use planner::BoundPattern;
use thiserror::Error;
use tracing::{debug, info};

/// Store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A term could not be canonicalized
    #[error(transparent)]
    Canonical(#[from] CanonicalError),

    /// Every available term id has been handed out
    #[error("Term id space exhausted after {0} identifiers")]
    IdSpaceExhausted(usize),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Indexed quad store
///
/// Not synchronized: share it across threads only behind a lock or as a
/// cloned snapshot.
#[derive(Debug, Clone)]
pub struct QuadStore<Q = Quad> {
    config: StoreConfig,
    canonicalizer: Canonicalizer,
    interner: Interner,
    table: GraphTable<Q>,
}

impl<Q: QuadLike> QuadStore<Q> {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::build(StoreConfig::default())
    }

    /// Create a new empty store with custom configuration
    pub fn with_config(config: StoreConfig) -> Self {
        if config != StoreConfig::default() {
            info!(
                "Creating quad store: max_nesting_depth={}, term_capacity={}, graph_capacity={}",
                config.max_nesting_depth, config.term_capacity, config.graph_capacity
            );
        }
        Self::build(config)
    }

    /// Create a store holding `quads`. Duplicates collapse to the first one.
    pub fn from_quads(quads: impl IntoIterator<Item = Q>) -> StoreResult<Self> {
        let mut store = Self::new();
        store.add_all(quads)?;
        Ok(store)
    }

    fn build(config: StoreConfig) -> Self {
        Self {
            canonicalizer: Canonicalizer::new(config.max_nesting_depth),
            interner: Interner::with_capacity(config.term_capacity),
            table: GraphTable::with_capacity(config.graph_capacity),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Add a quad. Adding a quad equal to a stored one keeps the stored
    /// value and changes nothing.
    ///
    /// All four terms are canonicalized before the indices are touched, so
    /// a failing add leaves the store unchanged.
    pub fn add(&mut self, quad: Q) -> StoreResult<&mut Self> {
        let ids = self.canonical_ids(&quad)?;
        let key = QuadKey {
            subject: self.intern(&ids[0])?,
            predicate: self.intern(&ids[1])?,
            object: self.intern(&ids[2])?,
            graph: self.intern(&ids[3])?,
        };
        self.table.insert(key, quad);
        Ok(self)
    }

    /// Add every quad in order, stopping at the first one that fails.
    /// Quads added before the failure stay in the store.
    pub fn add_all(&mut self, quads: impl IntoIterator<Item = Q>) -> StoreResult<&mut Self> {
        for (i, quad) in quads.into_iter().enumerate() {
            if let Err(e) = self.add(quad) {
                debug!("Bulk add stopped at quad {}: {}", i, e);
                return Err(e);
            }
        }
        Ok(self)
    }

    /// Remove the stored quad equal to `quad`, if any
    pub fn delete<T: QuadLike + ?Sized>(&mut self, quad: &T) -> StoreResult<&mut Self> {
        if let Some(key) = self.lookup(quad)? {
            self.table.remove(&key);
        }
        Ok(self)
    }

    /// Check whether a quad equal to `quad` is stored
    pub fn has<T: QuadLike + ?Sized>(&self, quad: &T) -> StoreResult<bool> {
        Ok(self
            .lookup(quad)?
            .is_some_and(|key| self.table.contains(&key)))
    }

    /// Stored value equal to `quad`
    pub fn get<T: QuadLike + ?Sized>(&self, quad: &T) -> StoreResult<Option<&Q>> {
        Ok(self.lookup(quad)?.and_then(|key| self.table.get(&key)))
    }

    /// New store holding the quads that match `pattern`
    pub fn match_pattern(&self, pattern: &QuadPattern<'_>) -> StoreResult<Self>
    where
        Q: Clone,
    {
        let mut matches = Self::build(self.config.clone());
        let Some(bound) = BoundPattern::resolve(pattern, &self.canonicalizer, &self.interner)?
        else {
            return Ok(matches);
        };

        let mut keys = Vec::new();
        planner::find(&self.table, &bound, |key| keys.push(key));
        for key in keys {
            let Some(quad) = self.table.get(&key) else {
                continue;
            };
            // Ids are local to a store, so the result interns the identifiers again
            let result_key = QuadKey {
                subject: matches.intern(self.resolve(key.subject))?,
                predicate: matches.intern(self.resolve(key.predicate))?,
                object: matches.intern(self.resolve(key.object))?,
                graph: matches.intern(self.resolve(key.graph))?,
            };
            matches.table.insert(result_key, quad.clone());
        }
        Ok(matches)
    }

    /// Visit every stored quad matching `pattern` without building a store
    pub fn for_each_match(
        &self,
        pattern: &QuadPattern<'_>,
        mut visit: impl FnMut(&Q),
    ) -> StoreResult<()> {
        if let Some(bound) = BoundPattern::resolve(pattern, &self.canonicalizer, &self.interner)? {
            planner::find(&self.table, &bound, |key| {
                if let Some(quad) = self.table.get(&key) {
                    visit(quad);
                }
            });
        }
        Ok(())
    }

    /// Number of quads in the store
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterate over all quads. The order is stable while the store is not
    /// modified.
    pub fn iter(&self) -> QuadIter<'_, Q> {
        let table = &self.table;
        let inner = table.graphs().flat_map(move |(graph, index)| {
            index
                .index(IndexOrder::Spo)
                .iter()
                .flat_map(move |(&subject, preds)| {
                    preds.iter().flat_map(move |(&predicate, objs)| {
                        objs.iter().filter_map(move |&object| {
                            table.get(&QuadKey {
                                subject,
                                predicate,
                                object,
                                graph,
                            })
                        })
                    })
                })
        });
        QuadIter {
            inner: Box::new(inner),
        }
    }

    /// Canonical identifiers of all non-empty graphs, in creation order
    pub fn graphs(&self) -> impl Iterator<Item = &str> + '_ {
        self.table
            .graphs()
            .map(|(id, _)| self.resolve(id))
    }

    /// Number of distinct canonical identifiers seen so far. This only
    /// grows, even when quads are deleted.
    pub fn term_count(&self) -> usize {
        self.interner.len()
    }

    /// Remove all quads and forget every interned identifier
    pub fn clear(&mut self) {
        self.table.clear();
        self.interner = Interner::with_capacity(self.config.term_capacity);
    }

    fn canonical_ids<T: QuadLike + ?Sized>(&self, quad: &T) -> StoreResult<[String; 4]> {
        Ok([
            self.canonicalizer.canonicalize(quad.subject())?,
            self.canonicalizer.canonicalize(quad.predicate())?,
            self.canonicalizer.canonicalize(quad.object())?,
            self.canonicalizer.canonicalize(quad.graph())?,
        ])
    }

    /// Interned key of `quad`, or `None` if one of its terms was never seen
    fn lookup<T: QuadLike + ?Sized>(&self, quad: &T) -> StoreResult<Option<QuadKey>> {
        let [s, p, o, g] = self.canonical_ids(quad)?;
        let ids = (
            self.interner.get(&s),
            self.interner.get(&p),
            self.interner.get(&o),
            self.interner.get(&g),
        );
        Ok(match ids {
            (Some(subject), Some(predicate), Some(object), Some(graph)) => Some(QuadKey {
                subject,
                predicate,
                object,
                graph,
            }),
            _ => None,
        })
    }

    fn intern(&mut self, id: &str) -> StoreResult<TermId> {
        self.interner
            .intern(id)
            .ok_or(StoreError::IdSpaceExhausted(self.interner.len()))
    }

    fn resolve(&self, id: TermId) -> &str {
        // Every id in the table came from this interner
        self.interner.resolve(id).unwrap_or_default()
    }
}

impl<Q: QuadLike> Default for QuadStore<Q> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the quads of a store
pub struct QuadIter<'a, Q: 'a> {
    inner: Box<dyn Iterator<Item = &'a Q> + 'a>,
}

impl<'a, Q: 'a> Iterator for QuadIter<'a, Q> {
    type Item = &'a Q;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, Q: QuadLike> IntoIterator for &'a QuadStore<Q> {
    type Item = &'a Q;
    type IntoIter = QuadIter<'a, Q>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
