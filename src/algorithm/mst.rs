use binary_heap_plus::BinaryHeap;
use crate::{
    Graph, Storage, Undirected, VertexId,
    attributes::{AttributeCollection, EdgeWeighted, Weightable},
    errors::{ErrorKind, MeshNetsError, MeshNetsResult},
    storage::EdgeKey,
};
use super::{VertexDistance, compare_weights};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * MST DESCRIPTOR                                                                    *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Minimum spanning tree descriptor
///
/// ## Description
/// The edges of a minimum spanning tree together with their cumulative weight. For  a
/// connected graph the descriptor holds exactly `n_vertices - 1` edges; fewer  edges
/// mean the input was disconnected and the descriptor spans the root's component
/// only.
#[derive(Clone, Debug)]
pub struct MstDescriptor<WeightType>
where
    WeightType: Weightable,
{
    pub edges: Vec<EdgeKey>,
    pub weight: WeightType,
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * PRIM MINIMUM SPANNING TREE                                                        *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



struct QueuedEdge<WeightType> {
    key: EdgeKey,
    source_id: VertexId,
    weight: WeightType,
    seq: u64,
}

/// # Prim minimum spanning tree
///
/// ## Description
/// Grow a minimum spanning tree from the root: starting with the root's incident
/// edges in a min-heap, repeatedly take the lightest edge leaving the tree, adopt  it
/// when its other endpoint is still outside and seed the heap with  that  endpoint's
/// incident edges. Only undirected graphs have spanning trees,  which  the  bound  on
/// the storage type enforces at compile time.
///
/// On disconnected input the heap runs dry before all vertices are  adopted  and  the
/// partial tree of the root's component is returned.
///
/// ## Arguments
/// * `graph` - an immutable reference to the (undirected) graph.
/// * `root_id` : `Option<VertexId>` - the vertex to grow the tree from; vertex  0  when
/// `None`.
///
/// ## Returns
/// * `MeshNetsResult<MstDescriptor>` - the spanning tree; an
/// [out-of-range][ErrorKind::OutOfRange] error for an invalid root and  a
/// [negative-weight][ErrorKind::NegativeWeight] error when a negative-weight  edge  is
/// popped.
pub fn prim_mst<StorageType, VertexAttributeType, EdgeAttributeType>(
    graph: &Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
    root_id: Option<VertexId>,
) -> MeshNetsResult<MstDescriptor<VertexDistance<EdgeAttributeType>>>
where
    StorageType: Storage<EdgeAttributeType, Directionality = Undirected>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection + EdgeWeighted,
{
    const FUNCTION_PATH: &str = "algorithm::prim_mst";

    let n_vertices = graph.n_vertices();
    let zero = <VertexDistance<EdgeAttributeType> as Weightable>::zero();
    let mut mst = MstDescriptor {
        edges: Vec::with_capacity(n_vertices.saturating_sub(1)),
        weight: zero,
    };
    if n_vertices == 0 {
        return Ok(mst);
    }

    let root = root_id.unwrap_or(0);
    graph.get_vertex(root)?;

    let mut queue: BinaryHeap<QueuedEdge<VertexDistance<EdgeAttributeType>>, _> =
        BinaryHeap::new_by(|lhs: &QueuedEdge<_>, rhs: &QueuedEdge<_>| {
            // min-heap over the weight, insertion order on ties
            compare_weights(rhs.weight, lhs.weight).then_with(|| rhs.seq.cmp(&lhs.seq))
        });
    let mut next_seq: u64 = 0;
    let mut visited = vec![false; n_vertices];

    // seed the heap with the edges incident to the root
    for (key, edge) in &graph.adjacent_edges(root)? {
        queue.push(QueuedEdge {
            key,
            source_id: root,
            weight: edge.attributes.edge_weight(),
            seq: next_seq,
        });
        next_seq += 1;
    }
    visited[root] = true;
    let mut n_vertices_in_mst = 1;

    while n_vertices_in_mst < n_vertices {
        let entry = match queue.pop() {
            Some(value) => value,
            None => break, // disconnected input: the root's component is spanned
        };

        if entry.weight < zero {
            let edge = graph.edge(entry.key)?;
            return Err(MeshNetsError::new(
                FUNCTION_PATH,
                ErrorKind::NegativeWeight,
                format!("Found an edge with a negative weight: [{}, {} | w = {}].", edge.first(), edge.second(), entry.weight),
            ));
        }

        let target_id = graph.edge(entry.key)?.incident_vertex(entry.source_id);
        if !visited[target_id] {
            // adopt the lightest edge leaving the tree
            mst.edges.push(entry.key);
            mst.weight = mst.weight + entry.weight;
            visited[target_id] = true;
            n_vertices_in_mst += 1;

            // offer every edge of the adopted vertex that leaves the tree
            for (key, edge) in &graph.adjacent_edges(target_id)? {
                if !visited[edge.incident_vertex(target_id)] {
                    queue.push(QueuedEdge {
                        key,
                        source_id: target_id,
                        weight: edge.attributes.edge_weight(),
                        seq: next_seq,
                    });
                    next_seq += 1;
                }
            }
        }
    }

    Ok(mst)
}





#[cfg(test)]
mod tests {
    use rstest::rstest;
    use crate::{
        AdjacencyList, AdjacencyMatrix, Undirected, UndirectedListGraph,
        attributes::Weight,
    };
    use super::*;

    fn weighted_square<StorageType>() -> Graph<StorageType, (), Weight<i64>>
    where
        StorageType: Storage<Weight<i64>, Directionality = Undirected>,
    {
        // square 0-1-2-3 with a heavy diagonal; the MST drops the weight-5 side
        let mut g = Graph::<StorageType, (), Weight<i64>>::with_vertices(4);
        g.add_edge_with(0, 1, Weight::new(1)).unwrap();
        g.add_edge_with(1, 2, Weight::new(2)).unwrap();
        g.add_edge_with(2, 3, Weight::new(3)).unwrap();
        g.add_edge_with(3, 0, Weight::new(5)).unwrap();
        g.add_edge_with(0, 2, Weight::new(9)).unwrap();
        g
    }

    #[rstest]
    #[case::list(weighted_square::<AdjacencyList<Undirected, Weight<i64>>>())]
    #[case::matrix(weighted_square::<AdjacencyMatrix<Undirected, Weight<i64>>>())]
    fn spanning_tree_weight_is_minimal<StorageType>(#[case] g: Graph<StorageType, (), Weight<i64>>)
    where
        StorageType: Storage<Weight<i64>, Directionality = Undirected>,
    {
        let mst = prim_mst(&g, None).unwrap();
        assert_eq!(mst.edges.len(), 3);
        assert_eq!(mst.weight, 6);
        // all adopted edges exist and form no duplicate
        let mut seen = std::collections::HashSet::new();
        for &key in &mst.edges {
            assert!(g.edge(key).is_ok());
            assert!(seen.insert(key));
        }
    }

    #[test]
    fn explicit_root_spans_the_same_weight() {
        let g: UndirectedListGraph<(), Weight<i64>> = weighted_square();
        let mst = prim_mst(&g, Some(2)).unwrap();
        assert_eq!(mst.edges.len(), 3);
        assert_eq!(mst.weight, 6);
        assert!(prim_mst(&g, Some(17)).is_err());
    }

    #[test]
    fn disconnected_input_spans_the_root_component() {
        let mut g = UndirectedListGraph::<(), Weight<i64>>::with_vertices(5);
        g.add_edge_with(0, 1, Weight::new(2)).unwrap();
        g.add_edge_with(1, 2, Weight::new(1)).unwrap();
        g.add_edge_with(3, 4, Weight::new(7)).unwrap();
        let mst = prim_mst(&g, None).unwrap();
        assert_eq!(mst.edges.len(), 2);
        assert_eq!(mst.weight, 3);
    }

    #[test]
    fn negative_weights_are_rejected() {
        let mut g = UndirectedListGraph::<(), Weight<i64>>::with_vertices(3);
        g.add_edge_with(0, 1, Weight::new(1)).unwrap();
        g.add_edge_with(1, 2, Weight::new(-4)).unwrap();
        let error = prim_mst(&g, None).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NegativeWeight);
    }

    #[test]
    fn unweighted_trees_count_edges() {
        let mut g = UndirectedListGraph::<(), ()>::with_vertices(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(2, 0).unwrap();
        let mst = prim_mst(&g, None).unwrap();
        assert_eq!(mst.edges.len(), 2);
        assert_eq!(mst.weight, 2);
    }

    #[test]
    fn empty_graphs_span_nothing() {
        let g = UndirectedListGraph::<(), ()>::new();
        let mst = prim_mst(&g, None).unwrap();
        assert!(mst.edges.is_empty());
        assert_eq!(mst.weight, 0);
    }
}
