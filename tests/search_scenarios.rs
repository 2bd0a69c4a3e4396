//! End-to-end scenarios over the topology constructors and the search algorithms,
//! pinned across both storage backends.

use rstest::rstest;
use meshnets::{
    AdjacencyList, AdjacencyMatrix, DirectedListGraph, DirectedMatrixGraph, Graph, Storage,
    Undirected, UndirectedListGraph, VertexId,
    algorithm::{
        breadth_first_search_with, depth_first_search_with, is_bipartite,
        recursive_depth_first_search_with, reconstruct_path, topological_sort,
        breadth_first_search,
    },
    topology::{biclique, clique},
};



#[rstest]
#[case::list(clique::<AdjacencyList<Undirected, ()>, (), ()>(4).unwrap())]
#[case::matrix(clique::<AdjacencyMatrix<Undirected, ()>, (), ()>(4).unwrap())]
fn clique_of_four<StorageType>(#[case] g: Graph<StorageType, (), ()>)
where
    StorageType: Storage<()>,
{
    assert_eq!(g.n_vertices(), 4);
    assert_eq!(g.n_unique_edges(), 6);
    assert!(!is_bipartite(&g));
    for vertex_id in g.vertex_ids() {
        assert_eq!(g.degree(vertex_id).unwrap(), 3);
    }
}



#[test]
fn biclique_search_orders() {
    let g: UndirectedListGraph = biclique(3, 2).unwrap();
    assert_eq!(g.n_vertices(), 5);
    assert_eq!(g.n_unique_edges(), 6);
    assert!(is_bipartite(&g));

    let mut bfs_order: Vec<VertexId> = Vec::new();
    breadth_first_search_with(&g, Some(0), |id| bfs_order.push(id), |_| {}).unwrap();
    assert_eq!(bfs_order, vec![0, 3, 4, 1, 2]);

    let mut dfs_order: Vec<VertexId> = Vec::new();
    depth_first_search_with(&g, Some(0), |id| dfs_order.push(id), |_| {}).unwrap();
    assert_eq!(dfs_order, vec![0, 4, 2, 3, 1]);

    let mut rdfs_preorder: Vec<VertexId> = Vec::new();
    let mut rdfs_postorder: Vec<VertexId> = Vec::new();
    recursive_depth_first_search_with(&g, Some(0), |id| rdfs_preorder.push(id), |id| rdfs_postorder.push(id)).unwrap();
    assert_eq!(rdfs_preorder, vec![0, 3, 1, 4, 2]);
    let reversed: Vec<VertexId> = rdfs_preorder.iter().rev().copied().collect();
    assert_eq!(rdfs_postorder, reversed);
}



#[test]
fn topological_sort_scenarios() {
    // a path 0 -> 1 -> 2 -> 3 with an extra source 4 -> 1
    let mut dag = DirectedMatrixGraph::<(), ()>::with_vertices(5);
    dag.add_edge(0, 1).unwrap();
    dag.add_edge(1, 2).unwrap();
    dag.add_edge(2, 3).unwrap();
    dag.add_edge(4, 1).unwrap();
    assert_eq!(topological_sort(&dag), Some(vec![0, 4, 1, 2, 3]));

    let cycle: DirectedListGraph = meshnets::topology::cycle(3).unwrap();
    assert_eq!(topological_sort(&cycle), None);
}



#[test]
fn search_trees_reconstruct_to_walkable_paths() {
    let g: UndirectedListGraph = biclique(3, 2).unwrap();
    let descriptor = breadth_first_search(&g, Some(2)).unwrap();
    for target in g.vertex_ids() {
        let path = reconstruct_path(&descriptor.predecessors, target).unwrap();
        assert_eq!(*path.first().unwrap(), 2);
        assert_eq!(*path.last().unwrap(), target);
        for pair in path.windows(2) {
            assert!(g.has_edge(pair[0], pair[1]).unwrap());
        }
    }
}
