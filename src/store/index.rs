//! Per-graph quad indices
//!
//! Each graph keeps three full indices over its quads, keyed by interned ids:
//! - SPO index: Subject -> Predicate -> Set of Objects
//! - POS index: Predicate -> Object -> Set of Subjects
//! - OSP index: Object -> Subject -> Set of Predicates
//!
//! A quad is present when its deepest key exists. Empty levels are pruned
//! on removal, and a graph entry disappears with its last quad.

use super::interner::TermId;
use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};
use std::cell::Cell;
use tracing::debug;

/// Three-level index: outer -> middle -> set of inner keys
pub type Index = FxHashMap<TermId, FxHashMap<TermId, FxHashSet<TermId>>>;

/// Key order of an index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndexOrder {
    /// subject -> predicate -> object
    Spo,
    /// predicate -> object -> subject
    Pos,
    /// object -> subject -> predicate
    Osp,
}

impl IndexOrder {
    /// Permute (s, p, o) into this index's key order
    pub fn keys<T>(self, s: T, p: T, o: T) -> (T, T, T) {
        match self {
            IndexOrder::Spo => (s, p, o),
            IndexOrder::Pos => (p, o, s),
            IndexOrder::Osp => (o, s, p),
        }
    }

    /// Permute keys in this index's order back into (s, p, o)
    pub fn spo<T>(self, a: T, b: T, c: T) -> (T, T, T) {
        match self {
            IndexOrder::Spo => (a, b, c),
            IndexOrder::Pos => (c, a, b),
            IndexOrder::Osp => (b, c, a),
        }
    }
}

/// Interned ids of one quad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuadKey {
    pub subject: TermId,
    pub predicate: TermId,
    pub object: TermId,
    pub graph: TermId,
}

/// The three indices of one graph
#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    spo: Index,
    pos: Index,
    osp: Index,
}

impl GraphIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self, order: IndexOrder) -> &Index {
        match order {
            IndexOrder::Spo => &self.spo,
            IndexOrder::Pos => &self.pos,
            IndexOrder::Osp => &self.osp,
        }
    }

    /// Add a triple to all three indices. Returns false if it was present.
    pub fn insert(&mut self, s: TermId, p: TermId, o: TermId) -> bool {
        if !insert_into(&mut self.spo, s, p, o) {
            return false;
        }
        insert_into(&mut self.pos, p, o, s);
        insert_into(&mut self.osp, o, s, p);
        true
    }

    /// Remove a triple from all three indices. Returns false if it was absent.
    pub fn remove(&mut self, s: TermId, p: TermId, o: TermId) -> bool {
        if !remove_from(&mut self.spo, s, p, o) {
            return false;
        }
        remove_from(&mut self.pos, p, o, s);
        remove_from(&mut self.osp, o, s, p);
        true
    }

    pub fn contains(&self, s: TermId, p: TermId, o: TermId) -> bool {
        self.spo
            .get(&s)
            .and_then(|preds| preds.get(&p))
            .is_some_and(|objs| objs.contains(&o))
    }

    pub fn is_empty(&self) -> bool {
        self.spo.is_empty()
    }

    /// Number of triples, by walking the SPO index
    pub fn len(&self) -> usize {
        self.spo
            .values()
            .flat_map(|preds| preds.values())
            .map(|objs| objs.len())
            .sum()
    }

    /// Visit every (s, p, o) of the `order` index whose keys agree with the
    /// bound ones. Bound keys are given in (s, p, o) positions.
    pub fn walk(
        &self,
        order: IndexOrder,
        s: Option<TermId>,
        p: Option<TermId>,
        o: Option<TermId>,
        mut visit: impl FnMut(TermId, TermId, TermId),
    ) {
        let (first, second, third) = order.keys(s, p, o);
        for (&a, middle) in level(self.index(order), first) {
            for (&b, leaves) in level(middle, second) {
                match third {
                    Some(c) => {
                        if leaves.contains(&c) {
                            let (s, p, o) = order.spo(a, b, c);
                            visit(s, p, o);
                        }
                    }
                    None => {
                        for &c in leaves {
                            let (s, p, o) = order.spo(a, b, c);
                            visit(s, p, o);
                        }
                    }
                }
            }
        }
    }
}

/// Entries of one index level, restricted to `key` when it is bound
fn level<'a, V>(
    map: &'a FxHashMap<TermId, V>,
    key: Option<TermId>,
) -> Box<dyn Iterator<Item = (&'a TermId, &'a V)> + 'a> {
    match key {
        Some(key) => Box::new(map.get_key_value(&key).into_iter()),
        None => Box::new(map.iter()),
    }
}

fn insert_into(index: &mut Index, a: TermId, b: TermId, c: TermId) -> bool {
    index.entry(a).or_default().entry(b).or_default().insert(c)
}

fn remove_from(index: &mut Index, a: TermId, b: TermId, c: TermId) -> bool {
    let Some(middle) = index.get_mut(&a) else {
        return false;
    };
    let Some(leaves) = middle.get_mut(&b) else {
        return false;
    };
    if !leaves.remove(&c) {
        return false;
    }
    if leaves.is_empty() {
        middle.remove(&b);
    }
    if middle.is_empty() {
        index.remove(&a);
    }
    true
}

/// All graph entries plus the stored quad values
///
/// `quads` holds exactly the keys present in the graph indices. The cached
/// size is dropped on insert and recomputed on demand.
#[derive(Debug, Clone)]
pub struct GraphTable<Q> {
    graphs: IndexMap<TermId, GraphIndex, FxBuildHasher>,
    quads: FxHashMap<QuadKey, Q>,
    size: Cell<Option<usize>>,
}

impl<Q> GraphTable<Q> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(graphs: usize) -> Self {
        Self {
            graphs: IndexMap::with_capacity_and_hasher(graphs, FxBuildHasher),
            quads: FxHashMap::default(),
            size: Cell::new(Some(0)),
        }
    }

    /// Index `quad` under `key`. A key that is already present keeps its
    /// original value and nothing changes.
    pub fn insert(&mut self, key: QuadKey, quad: Q) -> bool {
        let graph = self.graphs.entry(key.graph).or_insert_with(|| {
            debug!("Creating graph entry {}", key.graph);
            GraphIndex::new()
        });
        if !graph.insert(key.subject, key.predicate, key.object) {
            return false;
        }
        self.quads.entry(key).or_insert(quad);
        self.size.set(None);
        true
    }

    /// Remove `key`, returning its stored value
    pub fn remove(&mut self, key: &QuadKey) -> Option<Q> {
        let graph = self.graphs.get_mut(&key.graph)?;
        if !graph.remove(key.subject, key.predicate, key.object) {
            return None;
        }
        if graph.is_empty() {
            debug!("Pruning empty graph entry {}", key.graph);
            self.graphs.shift_remove(&key.graph);
        }
        if let Some(size) = self.size.get() {
            self.size.set(Some(size.saturating_sub(1)));
        }
        self.quads.remove(key)
    }

    pub fn contains(&self, key: &QuadKey) -> bool {
        self.graphs
            .get(&key.graph)
            .is_some_and(|graph| graph.contains(key.subject, key.predicate, key.object))
    }

    pub fn get(&self, key: &QuadKey) -> Option<&Q> {
        self.quads.get(key)
    }

    pub fn graph(&self, graph: TermId) -> Option<&GraphIndex> {
        self.graphs.get(&graph)
    }

    /// Graph entries in creation order
    pub fn graphs(&self) -> impl Iterator<Item = (TermId, &GraphIndex)> + '_ {
        self.graphs.iter().map(|(&id, graph)| (id, graph))
    }

    /// Number of quads across all graphs
    pub fn len(&self) -> usize {
        if let Some(size) = self.size.get() {
            return size;
        }
        let size = self.graphs.values().map(GraphIndex::len).sum();
        debug!("Recomputed store size: {}", size);
        self.size.set(Some(size));
        size
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    pub fn clear(&mut self) {
        self.graphs.clear();
        self.quads.clear();
        self.size.set(Some(0));
    }
}

impl<Q> Default for GraphTable<Q> {
    fn default() -> Self {
        Self::new()
    }
}
