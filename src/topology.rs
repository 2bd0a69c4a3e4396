//! # Topology constructors
//!
//! ## Description
//! Ready-made graph shapes: [`clique`], [`biclique`], [`cycle`], [`path`] and
//! [`binary_tree`]. Every constructor works for any graph parameterization  and
//! assigns vertex IDs consecutively from zero.
//!
//! The `bidirectional_*` variants mimic an undirected structure on  a  directed
//! graph by adding the reverse of every edge; on undirected graphs they  fall
//! back to the plain constructor.
use crate::{
    Directionality, Graph, Storage,
    attributes::AttributeCollection,
    errors::MeshNetsResult,
};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * COMPLETE TOPOLOGIES                                                               *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Clique
///
/// ## Description
/// The complete graph on `n_vertices` vertices: one edge per unordered vertex  pair
/// for undirected graphs, one per ordered pair for directed graphs.
pub fn clique<StorageType, VertexAttributeType, EdgeAttributeType>(n_vertices: usize) -> MeshNetsResult<Graph<StorageType, VertexAttributeType, EdgeAttributeType>>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
{
    let mut graph = Graph::with_vertices(n_vertices);

    for source_id in 0..n_vertices {
        for destination_id in 0..source_id {
            graph.add_edge(source_id, destination_id)?;
            if <StorageType::Directionality as Directionality>::IS_DIRECTED {
                graph.add_edge(destination_id, source_id)?;
            }
        }
    }

    Ok(graph)
}



/// # Biclique
///
/// ## Description
/// The complete bipartite graph over the vertex classes `[0, n_vertices_a)`  and
/// `[n_vertices_a, n_vertices_a + n_vertices_b)`: every cross-class pair  is
/// connected, no same-class pair is. Directed graphs get both directions  of  every
/// cross edge.
pub fn biclique<StorageType, VertexAttributeType, EdgeAttributeType>(n_vertices_a: usize, n_vertices_b: usize) -> MeshNetsResult<Graph<StorageType, VertexAttributeType, EdgeAttributeType>>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
{
    let n_vertices = n_vertices_a + n_vertices_b;
    let mut graph = Graph::with_vertices(n_vertices);

    for source_id in 0..n_vertices_a {
        for destination_id in n_vertices_a..n_vertices {
            graph.add_edge(source_id, destination_id)?;
            if <StorageType::Directionality as Directionality>::IS_DIRECTED {
                graph.add_edge(destination_id, source_id)?;
            }
        }
    }

    Ok(graph)
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * CYCLES AND PATHS                                                                  *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Cycle
///
/// ## Description
/// The cycle `0 - 1 - … - (n_vertices - 1) - 0`. A single vertex yields a loop.
pub fn cycle<StorageType, VertexAttributeType, EdgeAttributeType>(n_vertices: usize) -> MeshNetsResult<Graph<StorageType, VertexAttributeType, EdgeAttributeType>>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
{
    let mut graph = Graph::with_vertices(n_vertices);

    for source_id in 0..n_vertices {
        graph.add_edge(source_id, (source_id + 1) % n_vertices)?;
    }

    Ok(graph)
}

/// [`cycle`] with the reverse of every edge added on directed graphs.
pub fn bidirectional_cycle<StorageType, VertexAttributeType, EdgeAttributeType>(n_vertices: usize) -> MeshNetsResult<Graph<StorageType, VertexAttributeType, EdgeAttributeType>>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
{
    if !<StorageType::Directionality as Directionality>::IS_DIRECTED {
        return cycle(n_vertices);
    }

    let mut graph = Graph::with_vertices(n_vertices);
    match n_vertices {
        0 => {},
        // the reverse edges would duplicate the forward ones
        1 => {
            graph.add_edge(0, 0)?;
        },
        2 => {
            graph.add_edge(0, 1)?;
            graph.add_edge(1, 0)?;
        },
        _ => {
            for source_id in 0..n_vertices {
                let target_id = (source_id + 1) % n_vertices;
                graph.add_edge(source_id, target_id)?;
                graph.add_edge(target_id, source_id)?;
            }
        },
    }

    Ok(graph)
}



/// # Path
///
/// ## Description
/// The path `0 - 1 - … - (n_vertices - 1)`.
pub fn path<StorageType, VertexAttributeType, EdgeAttributeType>(n_vertices: usize) -> MeshNetsResult<Graph<StorageType, VertexAttributeType, EdgeAttributeType>>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
{
    let mut graph = Graph::with_vertices(n_vertices);

    for destination_id in 1..n_vertices {
        graph.add_edge(destination_id - 1, destination_id)?;
    }

    Ok(graph)
}

/// [`path`] with the reverse of every edge added on directed graphs.
pub fn bidirectional_path<StorageType, VertexAttributeType, EdgeAttributeType>(n_vertices: usize) -> MeshNetsResult<Graph<StorageType, VertexAttributeType, EdgeAttributeType>>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
{
    if !<StorageType::Directionality as Directionality>::IS_DIRECTED {
        return path(n_vertices);
    }

    let mut graph = Graph::with_vertices(n_vertices);

    for destination_id in 1..n_vertices {
        graph.add_edge(destination_id - 1, destination_id)?;
        graph.add_edge(destination_id, destination_id - 1)?;
    }

    Ok(graph)
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * REGULAR BINARY TREES                                                              *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Regular binary tree
///
/// ## Description
/// The perfect binary tree of the given depth: `2^depth - 1` vertices, every  vertex
/// `i` above the last level parenting `2i + 1` and `2i + 2`. A depth below two  yields
/// a graph of `depth` isolated vertices.
pub fn binary_tree<StorageType, VertexAttributeType, EdgeAttributeType>(depth: usize) -> MeshNetsResult<Graph<StorageType, VertexAttributeType, EdgeAttributeType>>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
{
    if depth < 2 {
        return Ok(Graph::with_vertices(depth));
    }

    let n_vertices = (1usize << depth) - 1;
    let n_source_vertices = n_vertices - (1usize << (depth - 1));
    let mut graph = Graph::with_vertices(n_vertices);

    for source_id in 0..n_source_vertices {
        graph.add_edges_from(source_id, &[2 * source_id + 1, 2 * source_id + 2])?;
    }

    Ok(graph)
}

/// [`binary_tree`] with child-to-parent edges added on directed graphs.
pub fn bidirectional_binary_tree<StorageType, VertexAttributeType, EdgeAttributeType>(depth: usize) -> MeshNetsResult<Graph<StorageType, VertexAttributeType, EdgeAttributeType>>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
{
    if !<StorageType::Directionality as Directionality>::IS_DIRECTED {
        return binary_tree(depth);
    }

    if depth < 2 {
        return Ok(Graph::with_vertices(depth));
    }

    let n_vertices = (1usize << depth) - 1;
    let n_source_vertices = n_vertices - (1usize << (depth - 1));
    let mut graph = Graph::with_vertices(n_vertices);

    for source_id in 0..n_source_vertices {
        let left_id = 2 * source_id + 1;
        let right_id = 2 * source_id + 2;
        graph.add_edges_from(source_id, &[left_id, right_id])?;
        graph.add_edge(left_id, source_id)?;
        graph.add_edge(right_id, source_id)?;
    }

    Ok(graph)
}
