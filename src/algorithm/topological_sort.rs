use crate::{
    Directed, Graph, Storage, VertexId,
    attributes::AttributeCollection,
};
use super::{VertexInfo, search::bfs};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * TOPOLOGICAL SORT                                                                  *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Topological sort
///
/// ## Description
/// Order the vertices of a directed graph so that every edge points forward  in  the
/// order (Kahn's algorithm). The frontier starts with all  vertices  of  in-degree
/// zero in ascending ID order; visiting a vertex decrements the in-degree of its
/// successors, which join the frontier the moment theirs reaches zero.
///
/// Loops are ignored for the ordering: a self-loop neither counts  towards  the
/// in-degree of its vertex nor blocks the sort.
///
/// Only directed graphs have topological orders, which the bound  on  the  storage
/// type enforces at compile time.
///
/// ## Arguments
/// * `graph` - an immutable reference to the (directed) graph.
///
/// ## Returns
/// * `Option<Vec<VertexId>>` - `Some(order)` covering every vertex when the graph  is
/// acyclic; `None` when it contains a directed cycle.
pub fn topological_sort<StorageType, VertexAttributeType, EdgeAttributeType>(
    graph: &Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
) -> Option<Vec<VertexId>>
where
    StorageType: Storage<EdgeAttributeType, Directionality = Directed>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
{
    let n_vertices = graph.n_vertices();

    // in-degrees without loops
    let mut in_degrees = vec![0usize; n_vertices];
    for vertex_id in graph.vertex_ids() {
        for (_key, edge) in &graph.adjacent_edges(vertex_id).unwrap() {
            if !edge.is_loop() {
                in_degrees[edge.second()] += 1;
            }
        }
    }

    let initial_frontier: Vec<VertexInfo> = graph
        .vertex_ids()
        .filter(|&vertex_id| in_degrees[vertex_id] == 0)
        .map(VertexInfo::root)
        .collect();

    let mut order: Vec<VertexId> = Vec::with_capacity(n_vertices);

    bfs(
        graph,
        initial_frontier,
        |_| true,
        |vertex_id, _source_id| {
            order.push(vertex_id);
            true
        },
        |vertex_id, _key, in_edge| {
            if in_edge.is_loop() {
                return Some(false);
            }
            in_degrees[vertex_id] -= 1;
            Some(in_degrees[vertex_id] == 0)
        },
        |_| {},
        |_| {},
    );

    if order.len() == n_vertices {
        Some(order)
    } else {
        None
    }
}





#[cfg(test)]
mod tests {
    use rstest::rstest;
    use crate::{
        AdjacencyList, AdjacencyMatrix, Directed, DirectedListGraph,
        topology::cycle,
    };
    use super::*;

    // a path 0 -> 1 -> 2 -> 3 with an extra source 4 -> 1
    fn dag_with_two_sources<StorageType>() -> Graph<StorageType, (), ()>
    where
        StorageType: Storage<(), Directionality = Directed>,
    {
        let mut g = Graph::<StorageType, (), ()>::with_vertices(5);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(2, 3).unwrap();
        g.add_edge(4, 1).unwrap();
        g
    }

    #[rstest]
    #[case::list(dag_with_two_sources::<AdjacencyList<Directed, ()>>())]
    #[case::matrix(dag_with_two_sources::<AdjacencyMatrix<Directed, ()>>())]
    fn sources_are_enumerated_in_ascending_order<StorageType>(#[case] g: Graph<StorageType, (), ()>)
    where
        StorageType: Storage<(), Directionality = Directed>,
    {
        assert_eq!(topological_sort(&g), Some(vec![0, 4, 1, 2, 3]));
    }

    #[test]
    fn every_edge_points_forward() {
        let mut g = DirectedListGraph::<(), ()>::with_vertices(6);
        g.add_edge(5, 2).unwrap();
        g.add_edge(5, 0).unwrap();
        g.add_edge(4, 0).unwrap();
        g.add_edge(4, 1).unwrap();
        g.add_edge(2, 3).unwrap();
        g.add_edge(3, 1).unwrap();
        let order = topological_sort(&g).unwrap();
        assert_eq!(order.len(), 6);
        let position = |id: usize| order.iter().position(|&v| v == id).unwrap();
        for vertex_id in g.vertex_ids() {
            for (_, edge) in &g.adjacent_edges(vertex_id).unwrap() {
                assert!(position(edge.first()) < position(edge.second()));
            }
        }
    }

    #[test]
    fn cycles_have_no_order() {
        let g: DirectedListGraph = cycle(3).unwrap();
        assert_eq!(topological_sort(&g), None);
    }

    #[test]
    fn loops_are_ignored_for_ordering() {
        let mut g = DirectedListGraph::<(), ()>::with_vertices(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        assert_eq!(topological_sort(&g), Some(vec![0, 1, 2]));
    }

    #[test]
    fn empty_graphs_sort_trivially() {
        let g = DirectedListGraph::<(), ()>::new();
        assert_eq!(topological_sort(&g), Some(Vec::new()));
    }
}
