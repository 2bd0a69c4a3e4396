//! # Storage backends
//!
//! ## Description
//! A [`Graph`][crate::Graph] delegates edge ownership to one of two interchangeable
//! backends: the [`AdjacencyList`] (per-source lists of incident edges, multi-edges
//! allowed) and the [`AdjacencyMatrix`] (a dense N×N square of optional cells, at most
//! one edge per ordered vertex pair). Both implement the [`Storage`] trait, which is
//! the only surface the facade and the algorithms ever touch.
//!
//! Edges live in an arena ([`slotmap::SlotMap`]) inside the backend and are addressed
//! by [`EdgeKey`]: a copyable generational handle. A key stays valid exactly as long
//! as its edge is stored; resolving a key whose edge was removed fails, which is how
//! stale handles are rejected. An undirected non-loop edge is shared: the same key is
//! stored under both endpoints (both adjacency lists, or both mirror cells).
pub mod adjacency_list;
pub mod adjacency_matrix;

use std::cell::Cell;
use slotmap::{SlotMap, new_key_type};
use crate::{Directionality, Edge, VertexId, attributes::AttributeCollection, errors::MeshNetsResult};

pub use adjacency_list::AdjacencyList;
pub use adjacency_matrix::AdjacencyMatrix;





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * EDGE IDENTITY                                                                     *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



new_key_type! {
    /// # Edge key
    ///
    /// ## Description
    /// The identity handle of a stored edge. Keys are generational: after the edge is
    /// removed, its key never resolves again, even if the underlying arena slot is
    /// later reused. Comparing keys with `==` is a meaningful identity comparison.
    pub struct EdgeKey;
}

pub(crate) type EdgeArena<EdgeAttributeType> = SlotMap<EdgeKey, Edge<EdgeAttributeType>>;





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * STORAGE TRAIT                                                                     *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Storage backend capability
///
/// ## Description
/// The operations a graph representation must support to sit under the
/// [`Graph`][crate::Graph] facade. The facade validates every vertex ID before it
/// reaches a backend, so the methods below take valid IDs for granted; out-of-range
/// IDs are a caller bug and may panic.
///
/// The directionality of the stored edges is part of the backend type: it decides
/// reciprocal storage, degree composition and edge lookup symmetry.
pub trait Storage<EdgeAttributeType>
where
    Self: Clone + Default,
    EdgeAttributeType: AttributeCollection,
{
    type Directionality: Directionality;

    /// A backend with `n` vertices and no edges.
    fn with_vertices(n: usize) -> Self;
    fn n_vertices(&self) -> usize;
    /// The number of logical edges: undirected edges are counted once.
    fn n_unique_edges(&self) -> usize;
    fn add_vertex(&mut self);
    fn add_vertices(&mut self, n: usize);
    /// Removes the vertex together with all of its incident edges and renumbers the
    /// endpoints of every surviving edge so that IDs stay dense.
    fn remove_vertex(&mut self, vertex_id: VertexId);
    /// Stores a new edge and returns its identity key. The adjacency matrix rejects
    /// an edge into an occupied cell with a *conflict* error.
    fn add_edge(&mut self, first: VertexId, second: VertexId, attributes: EdgeAttributeType) -> MeshNetsResult<EdgeKey>;
    /// Batch insertion of edges sharing the source vertex. Either every edge is
    /// stored or, on conflict, none of them is.
    fn add_edges_from(&mut self, source_id: VertexId, destinations: Vec<(VertexId, EdgeAttributeType)>) -> MeshNetsResult<Vec<EdgeKey>>;
    /// Strict removal by identity: fails with *not found* when no stored edge has
    /// this key.
    fn remove_edge(&mut self, key: EdgeKey) -> MeshNetsResult<()>;
    fn has_edge(&self, first: VertexId, second: VertexId) -> bool;
    /// The first stored edge connecting `first` to `second`, if any.
    fn get_edge(&self, first: VertexId, second: VertexId) -> Option<EdgeKey>;
    /// All stored edges connecting `first` to `second`. For the adjacency matrix the
    /// result is empty or a singleton, since multi-edges are structurally impossible.
    fn get_edges(&self, first: VertexId, second: VertexId) -> Vec<EdgeKey>;
    fn resolve(&self, key: EdgeKey) -> Option<&Edge<EdgeAttributeType>>;
    fn resolve_mut(&mut self, key: EdgeKey) -> Option<&mut Edge<EdgeAttributeType>>;
    /// A lazy, restartable view over the edges incident from `vertex_id`, yielding
    /// each edge once in the backend's native order (insertion order for the list,
    /// ascending other-endpoint ID for the matrix).
    fn adjacent_edges(&self, vertex_id: VertexId) -> EdgeRange<'_, EdgeAttributeType>;
    fn in_degree(&self, vertex_id: VertexId) -> usize;
    fn out_degree(&self, vertex_id: VertexId) -> usize;
    fn degree(&self, vertex_id: VertexId) -> usize;
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * LAZY ADJACENT-EDGE RANGE                                                          *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



#[derive(Clone, Copy)]
pub(crate) enum RangeSource<'a> {
    List(&'a [EdgeKey]),
    MatrixRow(&'a [Option<EdgeKey>]),
}



/// # Adjacent-edge range
///
/// ## Description
/// A finite, restartable view over the edges incident from one vertex. Iterating the
/// range yields `(EdgeKey, &Edge)` pairs, each stored edge exactly once, in the
/// backend's native order. The view is cheap to construct and borrows the graph
/// immutably, so any number of ranges can coexist.
///
/// How often the range counts its elements is a crate feature:
/// * default - lazily, memoized on the first [`EdgeRange::len`] request;
/// * `range-length-eager` - once, at construction;
/// * `range-length-no-cache` - on every request.
pub struct EdgeRange<'a, EdgeAttributeType>
where
    EdgeAttributeType: AttributeCollection,
{
    arena: &'a EdgeArena<EdgeAttributeType>,
    source: RangeSource<'a>,
    cached_len: Cell<Option<usize>>,
}

// EdgeRange::EdgeRange
impl<'a, EdgeAttributeType> EdgeRange<'a, EdgeAttributeType>
where
    EdgeAttributeType: AttributeCollection,
{
    pub(crate) fn new(arena: &'a EdgeArena<EdgeAttributeType>, source: RangeSource<'a>) -> Self {
        let cached_len = if cfg!(feature = "range-length-eager") {
            Cell::new(Some(Self::count_source(&source)))
        } else {
            Cell::new(None)
        };
        EdgeRange { arena, source, cached_len }
    }

    fn count_source(source: &RangeSource<'a>) -> usize {
        match source {
            RangeSource::List(keys) => keys.len(),
            RangeSource::MatrixRow(row) => row.iter().filter(|cell| cell.is_some()).count(),
        }
    }

    pub fn iter(&self) -> EdgeRangeIter<'a, EdgeAttributeType> {
        EdgeRangeIter {
            arena: self.arena,
            source: self.source,
            position: 0,
        }
    }

    /// # Number of edges in the range
    ///
    /// See the type-level documentation for the caching behavior.
    pub fn len(&self) -> usize {
        if cfg!(feature = "range-length-no-cache") {
            return Self::count_source(&self.source);
        }
        match self.cached_len.get() {
            Some(len) => len,
            None => {
                let len = Self::count_source(&self.source);
                self.cached_len.set(Some(len));
                len
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// EdgeRange::IntoIterator
impl<'a, 'r, EdgeAttributeType> IntoIterator for &'r EdgeRange<'a, EdgeAttributeType>
where
    EdgeAttributeType: AttributeCollection,
{
    type Item = (EdgeKey, &'a Edge<EdgeAttributeType>);
    type IntoIter = EdgeRangeIter<'a, EdgeAttributeType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// EdgeRange::IntoIterator (by value)
impl<'a, EdgeAttributeType> IntoIterator for EdgeRange<'a, EdgeAttributeType>
where
    EdgeAttributeType: AttributeCollection,
{
    type Item = (EdgeKey, &'a Edge<EdgeAttributeType>);
    type IntoIter = EdgeRangeIter<'a, EdgeAttributeType>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}



pub struct EdgeRangeIter<'a, EdgeAttributeType>
where
    EdgeAttributeType: AttributeCollection,
{
    arena: &'a EdgeArena<EdgeAttributeType>,
    source: RangeSource<'a>,
    position: usize,
}

// EdgeRangeIter::Iterator
impl<'a, EdgeAttributeType> Iterator for EdgeRangeIter<'a, EdgeAttributeType>
where
    EdgeAttributeType: AttributeCollection,
{
    type Item = (EdgeKey, &'a Edge<EdgeAttributeType>);

    fn next(&mut self) -> Option<Self::Item> {
        match self.source {
            RangeSource::List(keys) => {
                let key = *keys.get(self.position)?;
                self.position += 1;
                Some((key, &self.arena[key]))
            },
            RangeSource::MatrixRow(row) => {
                while self.position < row.len() {
                    let cell = row[self.position];
                    self.position += 1;
                    if let Some(key) = cell {
                        return Some((key, &self.arena[key]));
                    }
                }
                None
            },
        }
    }
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * SHARED BACKEND HELPERS                                                            *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



// An entry of a vertex's adjacency connects `source_id` to `target_id` iff the entry's
// other endpoint relative to `source_id` is `target_id`. Loops connect a vertex only to
// itself.
pub(crate) fn edge_connects<EdgeAttributeType>(
    edge: &Edge<EdgeAttributeType>,
    source_id: VertexId,
    target_id: VertexId,
) -> bool
where
    EdgeAttributeType: AttributeCollection,
{
    if edge.first() == source_id {
        edge.second() == target_id
    } else if edge.second() == source_id {
        edge.first() == target_id
    } else {
        false
    }
}

// Decrements every endpoint ID above the removed one, keeping the ID range dense.
pub(crate) fn shift_endpoints_after_removal<EdgeAttributeType>(
    arena: &mut EdgeArena<EdgeAttributeType>,
    removed_id: VertexId,
) where
    EdgeAttributeType: AttributeCollection,
{
    for edge in arena.values_mut() {
        edge.shift_endpoints_above(removed_id);
    }
}





#[cfg(test)]
mod tests {
    use crate::{UndirectedListGraph, UndirectedMatrixGraph};

    #[test]
    fn edge_range_is_restartable() {
        let mut g = UndirectedListGraph::<(), ()>::with_vertices(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 2).unwrap();
        let range = g.adjacent_edges(0).unwrap();
        let first_pass: Vec<_> = range.iter().map(|(key, _)| key).collect();
        let second_pass: Vec<_> = range.iter().map(|(key, _)| key).collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(range.len(), 2);
        assert_eq!(range.len(), 2);
    }

    #[test]
    fn matrix_range_skips_empty_cells() {
        let mut g = UndirectedMatrixGraph::<(), ()>::with_vertices(4);
        g.add_edge(1, 3).unwrap();
        g.add_edge(1, 0).unwrap();
        let range = g.adjacent_edges(1).unwrap();
        let other_ids: Vec<_> = range.iter().map(|(_, e)| e.incident_vertex(1)).collect();
        // ascending other-endpoint order, regardless of insertion order
        assert_eq!(other_ids, vec![0, 3]);
        assert_eq!(range.len(), 2);
        assert!(!range.is_empty());
    }
}
