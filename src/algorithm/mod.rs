//! # Graph algorithms
//!
//! ## Description
//! This module contains the classical graph algorithms together with the  traversal
//! kernels they are built on.
//!
//! The kernels live in [`search`]: a generic BFS, an iterative DFS, a recursive  DFS
//! and a priority-first search, each parameterized by a  visit  predicate,  a  visit
//! action, an enqueue predicate and optional pre-/post-visit hooks. Everything  else
//! in this module - [coloring][coloring], [Dijkstra][dijkstra], [Prim][mst],
//! [topological sort][topological_sort] and the public search wrappers - is a thin
//! configuration of those kernels.
pub mod coloring;
pub mod dijkstra;
pub mod mst;
pub mod search;
pub mod topological_sort;

use std::cmp::Ordering;
use crate::{VertexId, attributes::{EdgeWeighted, Weightable}};

pub use coloring::{apply_coloring, bipartite_coloring, is_bipartite};
pub use dijkstra::{PathsDescriptor, dijkstra_shortest_paths, reconstruct_path};
pub use mst::{MstDescriptor, prim_mst};
pub use search::{
    breadth_first_search, breadth_first_search_with, depth_first_search,
    depth_first_search_with, recursive_depth_first_search, recursive_depth_first_search_with,
};
pub use topological_sort::topological_sort;





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * SHARED ALGORITHM TYPES                                                            *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Frontier record
///
/// ## Description
/// One entry of a traversal frontier: the vertex to process and the vertex  it  was
/// discovered from. For a traversal root `source_id == id`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VertexInfo {
    pub id: VertexId,
    pub source_id: VertexId,
}

// Implementation of VertexInfo
impl VertexInfo {
    #[inline]
    pub fn root(id: VertexId) -> Self {
        VertexInfo { id, source_id: id }
    }

    #[inline]
    pub fn new(id: VertexId, source_id: VertexId) -> Self {
        VertexInfo { id, source_id }
    }
}



/// # Predecessors descriptor
///
/// ## Description
/// The search tree of a traversal, recorded as one optional parent per  vertex:
/// `predecessors[v] = Some(u)` when `v` was discovered through an edge from  `u`,
/// `predecessors[root] = Some(root)` for every traversal root and `None` for  the
/// vertices the traversal never reached.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PredecessorsDescriptor {
    pub predecessors: Vec<Option<VertexId>>,
}

// Implementation of PredecessorsDescriptor
impl PredecessorsDescriptor {
    pub fn new(n_vertices: usize) -> Self {
        PredecessorsDescriptor { predecessors: vec![None; n_vertices] }
    }

    /// Whether the traversal reached the given vertex.
    #[inline]
    pub fn is_reached(&self, vertex_id: VertexId) -> bool {
        self.predecessors.get(vertex_id).map_or(false, |p| p.is_some())
    }
}



/// The cumulative-distance type induced by an edge attribute record: the weight type
/// for weighted records, `i64` hop counts otherwise.
pub type VertexDistance<EdgeAttributeType> = <EdgeAttributeType as EdgeWeighted>::WeightType;

// Weights are only PartialOrd (floats); incomparable pairs cannot occur for the
// finite non-negative values the algorithms accept.
pub(crate) fn compare_weights<WeightType>(lhs: WeightType, rhs: WeightType) -> Ordering
where
    WeightType: Weightable,
{
    lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal)
}
