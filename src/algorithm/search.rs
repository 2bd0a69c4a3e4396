//! # Traversal kernels and public search wrappers
//!
//! ## Description
//! All traversals of this library share one structure: a frontier of  [`VertexInfo`]
//! records is drained; each dequeued vertex passes the _visit predicate_ (or is
//! silently skipped), triggers the pre-visit hook, the _visit action_ and the
//! post-visit hook, and its incident edges are offered to the _enqueue predicate_,
//! which decides per candidate whether to extend the frontier.
//!
//! Abort semantics: a visit action returning `false`, or an enqueue predicate
//! returning `None`, stops the kernel immediately with a `false` outcome; no further
//! vertices are visited. An empty initial frontier also yields `false`.
//!
//! The kernels differ only in their frontier discipline: FIFO for [`bfs`], LIFO for
//! [`dfs`], the implementation stack for [`rdfs`] (post-visit after the recursion
//! returns, so post-order is the reverse of pre-order on trees) and a min-heap for
//! [`pfs`], ordered by per-entry priorities frozen at insertion time, with ties
//! broken by insertion order.
use std::{cell::RefCell, cmp::Ordering, collections::VecDeque};
use binary_heap_plus::BinaryHeap;
use crate::{
    Edge, Graph, Storage, VertexId,
    attributes::AttributeCollection,
    errors::MeshNetsResult,
    storage::EdgeKey,
};
use super::{PredecessorsDescriptor, VertexInfo};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * KERNELS                                                                           *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Breadth-first kernel
///
/// ## Description
/// Drains a FIFO frontier seeded with `initial_frontier`. See the  module  docs  for
/// the callback contract.
///
/// ## Returns
/// * `bool` - `false` when the traversal was aborted by a callback or  the  initial
/// frontier was empty, `true` otherwise.
///
/// ## Panics
/// The frontier must only carry valid vertex IDs.
pub fn bfs<StorageType, VertexAttributeType, EdgeAttributeType, VisitPredicate, VisitAction, EnqueuePredicate, PreVisit, PostVisit>(
    graph: &Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
    initial_frontier: Vec<VertexInfo>,
    mut visit_predicate: VisitPredicate,
    mut visit: VisitAction,
    mut enqueue_predicate: EnqueuePredicate,
    mut pre_visit: PreVisit,
    mut post_visit: PostVisit,
) -> bool
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
    VisitPredicate: FnMut(VertexId) -> bool,
    VisitAction: FnMut(VertexId, VertexId) -> bool,
    EnqueuePredicate: FnMut(VertexId, EdgeKey, &Edge<EdgeAttributeType>) -> Option<bool>,
    PreVisit: FnMut(VertexId),
    PostVisit: FnMut(VertexId),
{
    if initial_frontier.is_empty() {
        return false;
    }

    let mut frontier: VecDeque<VertexInfo> = initial_frontier.into();

    while let Some(vinfo) = frontier.pop_front() {
        if !visit_predicate(vinfo.id) {
            continue;
        }

        pre_visit(vinfo.id);
        if !visit(vinfo.id, vinfo.source_id) {
            return false;
        }

        let adjacent = graph.adjacent_edges(vinfo.id).expect("frontier vertex IDs must be valid");
        for (key, edge) in &adjacent {
            let candidate_id = edge.incident_vertex(vinfo.id);
            match enqueue_predicate(candidate_id, key, edge) {
                Some(true) => frontier.push_back(VertexInfo::new(candidate_id, vinfo.id)),
                Some(false) => {},
                None => return false,
            }
        }

        post_visit(vinfo.id);
    }

    true
}



/// # Iterative depth-first kernel
///
/// ## Description
/// Drains a LIFO frontier seeded with the root vertex. A root  rejected  by  the
/// visit predicate makes the kernel a no-op with a `true` outcome.
///
/// ## Panics
/// `root_id` must be a valid vertex ID.
pub fn dfs<StorageType, VertexAttributeType, EdgeAttributeType, VisitPredicate, VisitAction, EnqueuePredicate, PreVisit, PostVisit>(
    graph: &Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
    root_id: VertexId,
    mut visit_predicate: VisitPredicate,
    mut visit: VisitAction,
    mut enqueue_predicate: EnqueuePredicate,
    mut pre_visit: PreVisit,
    mut post_visit: PostVisit,
) -> bool
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
    VisitPredicate: FnMut(VertexId) -> bool,
    VisitAction: FnMut(VertexId, VertexId) -> bool,
    EnqueuePredicate: FnMut(VertexId, EdgeKey, &Edge<EdgeAttributeType>) -> Option<bool>,
    PreVisit: FnMut(VertexId),
    PostVisit: FnMut(VertexId),
{
    if !visit_predicate(root_id) {
        return true;
    }

    let mut frontier: Vec<VertexInfo> = vec![VertexInfo::root(root_id)];

    while let Some(vinfo) = frontier.pop() {
        if !visit_predicate(vinfo.id) {
            continue;
        }

        pre_visit(vinfo.id);
        if !visit(vinfo.id, vinfo.source_id) {
            return false;
        }

        let adjacent = graph.adjacent_edges(vinfo.id).expect("frontier vertex IDs must be valid");
        for (key, edge) in &adjacent {
            let candidate_id = edge.incident_vertex(vinfo.id);
            match enqueue_predicate(candidate_id, key, edge) {
                Some(true) => frontier.push(VertexInfo::new(candidate_id, vinfo.id)),
                Some(false) => {},
                None => return false,
            }
        }

        post_visit(vinfo.id);
    }

    true
}



/// # Recursive depth-first kernel
///
/// ## Description
/// Same callback contract as [`dfs`], but driven by the implementation  stack:  the
/// post-visit hook of a vertex runs after all of its recursive calls return.
///
/// ## Panics
/// `vertex_id` must be a valid vertex ID. Deep graphs can exhaust the stack; use
/// [`dfs`] when the recursion depth is unknown.
pub fn rdfs<StorageType, VertexAttributeType, EdgeAttributeType, VisitPredicate, VisitAction, EnqueuePredicate, PreVisit, PostVisit>(
    graph: &Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
    vertex_id: VertexId,
    source_id: VertexId,
    mut visit_predicate: VisitPredicate,
    mut visit: VisitAction,
    mut enqueue_predicate: EnqueuePredicate,
    mut pre_visit: PreVisit,
    mut post_visit: PostVisit,
) -> bool
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
    VisitPredicate: FnMut(VertexId) -> bool,
    VisitAction: FnMut(VertexId, VertexId) -> bool,
    EnqueuePredicate: FnMut(VertexId, EdgeKey, &Edge<EdgeAttributeType>) -> Option<bool>,
    PreVisit: FnMut(VertexId),
    PostVisit: FnMut(VertexId),
{
    rdfs_impl(
        graph,
        vertex_id,
        source_id,
        &mut visit_predicate,
        &mut visit,
        &mut enqueue_predicate,
        &mut pre_visit,
        &mut post_visit,
    )
}

fn rdfs_impl<StorageType, VertexAttributeType, EdgeAttributeType, VisitPredicate, VisitAction, EnqueuePredicate, PreVisit, PostVisit>(
    graph: &Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
    vertex_id: VertexId,
    source_id: VertexId,
    visit_predicate: &mut VisitPredicate,
    visit: &mut VisitAction,
    enqueue_predicate: &mut EnqueuePredicate,
    pre_visit: &mut PreVisit,
    post_visit: &mut PostVisit,
) -> bool
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
    VisitPredicate: FnMut(VertexId) -> bool,
    VisitAction: FnMut(VertexId, VertexId) -> bool,
    EnqueuePredicate: FnMut(VertexId, EdgeKey, &Edge<EdgeAttributeType>) -> Option<bool>,
    PreVisit: FnMut(VertexId),
    PostVisit: FnMut(VertexId),
{
    if !visit_predicate(vertex_id) {
        return true;
    }

    pre_visit(vertex_id);
    if !visit(vertex_id, source_id) {
        return false;
    }

    let adjacent = graph.adjacent_edges(vertex_id).expect("frontier vertex IDs must be valid");
    for (key, edge) in &adjacent {
        let candidate_id = edge.incident_vertex(vertex_id);
        match enqueue_predicate(candidate_id, key, edge) {
            Some(true) => {
                if !rdfs_impl(graph, candidate_id, vertex_id, visit_predicate, visit, enqueue_predicate, pre_visit, post_visit) {
                    return false;
                }
            },
            Some(false) => {},
            None => return false,
        }
    }

    post_visit(vertex_id);
    true
}



struct PrioritizedVertexInfo<PriorityType> {
    info: VertexInfo,
    priority: PriorityType,
    seq: u64,
}

/// # Priority-first kernel
///
/// ## Description
/// Drains a min-heap frontier. The priority of an entry is assigned by
/// `assign_priority` at the moment the entry joins the frontier  and  is  never
/// recomputed: when the state backing a priority changes later, the old  entry
/// simply goes stale instead of perturbing the heap order, and  a  fresh  entry  is
/// expected to be enqueued. The visit predicate receives the popped entry's  frozen
/// priority next to the vertex ID, which is where stale entries are filtered  out
/// (lazy deletion).
///
/// The entry whose priority compares [`Ordering::Less`] against every other under
/// `compare` is popped first; entries with equal priorities are popped in  insertion
/// order.
///
/// ## Panics
/// The frontier must only carry valid vertex IDs.
pub fn pfs<StorageType, VertexAttributeType, EdgeAttributeType, PriorityType, AssignPriority, ComparePriority, VisitPredicate, VisitAction, EnqueuePredicate, PreVisit, PostVisit>(
    graph: &Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
    mut assign_priority: AssignPriority,
    compare: ComparePriority,
    initial_frontier: Vec<VertexInfo>,
    mut visit_predicate: VisitPredicate,
    mut visit: VisitAction,
    mut enqueue_predicate: EnqueuePredicate,
    mut pre_visit: PreVisit,
    mut post_visit: PostVisit,
) -> bool
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
    AssignPriority: FnMut(&VertexInfo) -> PriorityType,
    ComparePriority: Fn(&PriorityType, &PriorityType) -> Ordering,
    VisitPredicate: FnMut(VertexId, &PriorityType) -> bool,
    VisitAction: FnMut(VertexId, VertexId) -> bool,
    EnqueuePredicate: FnMut(VertexId, EdgeKey, &Edge<EdgeAttributeType>) -> Option<bool>,
    PreVisit: FnMut(VertexId),
    PostVisit: FnMut(VertexId),
{
    if initial_frontier.is_empty() {
        return false;
    }

    // the heap pops its greatest element, so the caller's order is reversed; equal
    // priorities fall back to first-inserted-first-popped
    let mut frontier = BinaryHeap::new_by(move |lhs: &PrioritizedVertexInfo<PriorityType>, rhs: &PrioritizedVertexInfo<PriorityType>| {
        compare(&lhs.priority, &rhs.priority)
            .reverse()
            .then_with(|| rhs.seq.cmp(&lhs.seq))
    });
    let mut next_seq: u64 = 0;

    for info in initial_frontier {
        let priority = assign_priority(&info);
        frontier.push(PrioritizedVertexInfo { info, priority, seq: next_seq });
        next_seq += 1;
    }

    while let Some(entry) = frontier.pop() {
        let vinfo = entry.info;
        if !visit_predicate(vinfo.id, &entry.priority) {
            continue;
        }

        pre_visit(vinfo.id);
        if !visit(vinfo.id, vinfo.source_id) {
            return false;
        }

        let adjacent = graph.adjacent_edges(vinfo.id).expect("frontier vertex IDs must be valid");
        for (key, edge) in &adjacent {
            let candidate_id = edge.incident_vertex(vinfo.id);
            match enqueue_predicate(candidate_id, key, edge) {
                Some(true) => {
                    let info = VertexInfo::new(candidate_id, vinfo.id);
                    let priority = assign_priority(&info);
                    frontier.push(PrioritizedVertexInfo { info, priority, seq: next_seq });
                    next_seq += 1;
                },
                Some(false) => {},
                None => return false,
            }
        }

        post_visit(vinfo.id);
    }

    true
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * PUBLIC SEARCH WRAPPERS                                                            *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Breadth-first search
///
/// ## Description
/// Traverse the graph breadth-first and return the [`PredecessorsDescriptor`] of the
/// search tree. With `root_id = Some(id)` only the component of that vertex  is
/// traversed; with `None` a fresh traversal is started from every  not-yet-visited
/// vertex in ascending ID order, so all components are covered.
///
/// ## Arguments
/// * `graph` - an immutable reference to the graph.
/// * `root_id` : `Option<VertexId>` - the optional traversal root.
///
/// ## Returns
/// * `MeshNetsResult<PredecessorsDescriptor>` - the search tree;  an
/// [out-of-range][crate::errors::ErrorKind::OutOfRange] error when  the  given  root
/// doesn't exist.
pub fn breadth_first_search<StorageType, VertexAttributeType, EdgeAttributeType>(
    graph: &Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
    root_id: Option<VertexId>,
) -> MeshNetsResult<PredecessorsDescriptor>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
{
    breadth_first_search_with(graph, root_id, |_| {}, |_| {})
}

/// [`breadth_first_search`] with pre- and post-visit hooks.
pub fn breadth_first_search_with<StorageType, VertexAttributeType, EdgeAttributeType, PreVisit, PostVisit>(
    graph: &Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
    root_id: Option<VertexId>,
    mut pre_visit: PreVisit,
    mut post_visit: PostVisit,
) -> MeshNetsResult<PredecessorsDescriptor>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
    PreVisit: FnMut(VertexId),
    PostVisit: FnMut(VertexId),
{
    if let Some(root) = root_id {
        graph.get_vertex(root)?;
    }

    let visited = RefCell::new(vec![false; graph.n_vertices()]);
    let mut descriptor = PredecessorsDescriptor::new(graph.n_vertices());
    let roots: Vec<VertexId> = match root_id {
        Some(root) => vec![root],
        None => graph.vertex_ids().collect(),
    };

    for root in roots {
        bfs(
            graph,
            vec![VertexInfo::root(root)],
            |id| !visited.borrow()[id],
            |id, source_id| {
                visited.borrow_mut()[id] = true;
                descriptor.predecessors[id] = Some(source_id);
                true
            },
            |id, _key, _edge| Some(!visited.borrow()[id]),
            &mut pre_visit,
            &mut post_visit,
        );
    }

    Ok(descriptor)
}



/// # Iterative depth-first search
///
/// ## Description
/// The depth-first twin of [`breadth_first_search`]: a LIFO frontier, so the  last
/// discovered candidate is visited first.
pub fn depth_first_search<StorageType, VertexAttributeType, EdgeAttributeType>(
    graph: &Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
    root_id: Option<VertexId>,
) -> MeshNetsResult<PredecessorsDescriptor>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
{
    depth_first_search_with(graph, root_id, |_| {}, |_| {})
}

/// [`depth_first_search`] with pre- and post-visit hooks.
pub fn depth_first_search_with<StorageType, VertexAttributeType, EdgeAttributeType, PreVisit, PostVisit>(
    graph: &Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
    root_id: Option<VertexId>,
    mut pre_visit: PreVisit,
    mut post_visit: PostVisit,
) -> MeshNetsResult<PredecessorsDescriptor>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
    PreVisit: FnMut(VertexId),
    PostVisit: FnMut(VertexId),
{
    if let Some(root) = root_id {
        graph.get_vertex(root)?;
    }

    let visited = RefCell::new(vec![false; graph.n_vertices()]);
    let mut descriptor = PredecessorsDescriptor::new(graph.n_vertices());
    let roots: Vec<VertexId> = match root_id {
        Some(root) => vec![root],
        None => graph.vertex_ids().collect(),
    };

    for root in roots {
        dfs(
            graph,
            root,
            |id| !visited.borrow()[id],
            |id, source_id| {
                visited.borrow_mut()[id] = true;
                descriptor.predecessors[id] = Some(source_id);
                true
            },
            |id, _key, _edge| Some(!visited.borrow()[id]),
            &mut pre_visit,
            &mut post_visit,
        );
    }

    Ok(descriptor)
}



/// # Recursive depth-first search
///
/// ## Description
/// Like [`depth_first_search`], but recursive: the candidates of a vertex are fully
/// explored in enumeration order before its siblings, and the post-visit hook  runs
/// after the recursion returns. On trees the post-order is the reverse of the
/// pre-order.
pub fn recursive_depth_first_search<StorageType, VertexAttributeType, EdgeAttributeType>(
    graph: &Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
    root_id: Option<VertexId>,
) -> MeshNetsResult<PredecessorsDescriptor>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
{
    recursive_depth_first_search_with(graph, root_id, |_| {}, |_| {})
}

/// [`recursive_depth_first_search`] with pre- and post-visit hooks.
pub fn recursive_depth_first_search_with<StorageType, VertexAttributeType, EdgeAttributeType, PreVisit, PostVisit>(
    graph: &Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
    root_id: Option<VertexId>,
    mut pre_visit: PreVisit,
    mut post_visit: PostVisit,
) -> MeshNetsResult<PredecessorsDescriptor>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
    PreVisit: FnMut(VertexId),
    PostVisit: FnMut(VertexId),
{
    if let Some(root) = root_id {
        graph.get_vertex(root)?;
    }

    let visited = RefCell::new(vec![false; graph.n_vertices()]);
    let mut descriptor = PredecessorsDescriptor::new(graph.n_vertices());
    let roots: Vec<VertexId> = match root_id {
        Some(root) => vec![root],
        None => graph.vertex_ids().collect(),
    };

    for root in roots {
        rdfs(
            graph,
            root,
            root,
            |id| !visited.borrow()[id],
            |id, source_id| {
                visited.borrow_mut()[id] = true;
                descriptor.predecessors[id] = Some(source_id);
                true
            },
            |id, _key, _edge| Some(!visited.borrow()[id]),
            &mut pre_visit,
            &mut post_visit,
        );
    }

    Ok(descriptor)
}





#[cfg(test)]
mod tests {
    use rstest::rstest;
    use crate::{UndirectedListGraph, topology::biclique};
    use super::*;

    fn preorder_of<F>(run: F) -> Vec<VertexId>
    where
        F: FnOnce(&mut dyn FnMut(VertexId)),
    {
        let mut order = Vec::new();
        run(&mut |id| order.push(id));
        order
    }

    #[test]
    fn bfs_preorder_on_biclique() {
        let g: UndirectedListGraph = biclique(3, 2).unwrap();
        let order = preorder_of(|record| {
            breadth_first_search_with(&g, Some(0), |id| record(id), |_| {}).unwrap();
        });
        assert_eq!(order, vec![0, 3, 4, 1, 2]);
    }

    #[test]
    fn dfs_preorder_on_biclique() {
        let g: UndirectedListGraph = biclique(3, 2).unwrap();
        let order = preorder_of(|record| {
            depth_first_search_with(&g, Some(0), |id| record(id), |_| {}).unwrap();
        });
        assert_eq!(order, vec![0, 4, 2, 3, 1]);
    }

    #[test]
    fn rdfs_preorder_and_postorder_on_biclique() {
        let g: UndirectedListGraph = biclique(3, 2).unwrap();
        let mut preorder = Vec::new();
        let mut postorder = Vec::new();
        recursive_depth_first_search_with(&g, Some(0), |id| preorder.push(id), |id| postorder.push(id)).unwrap();
        assert_eq!(preorder, vec![0, 3, 1, 4, 2]);
        let reversed: Vec<_> = preorder.iter().rev().copied().collect();
        assert_eq!(postorder, reversed);
    }

    // two components: a triangle and an isolated pair
    fn two_components<StorageType>() -> Graph<StorageType, (), ()>
    where
        StorageType: Storage<()>,
    {
        let mut g = Graph::<StorageType, (), ()>::with_vertices(5);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        g.add_edge(2, 0).unwrap();
        g.add_edge(3, 4).unwrap();
        g
    }

    #[rstest]
    #[case::list(two_components::<crate::AdjacencyList<crate::Undirected, ()>>())]
    #[case::matrix(two_components::<crate::AdjacencyMatrix<crate::Undirected, ()>>())]
    fn rootless_search_covers_every_component<StorageType>(#[case] g: Graph<StorageType, (), ()>)
    where
        StorageType: Storage<()>,
    {
        let descriptor = breadth_first_search(&g, None).unwrap();
        assert!(descriptor.predecessors.iter().all(|p| p.is_some()));
        // every component root is its own predecessor
        assert_eq!(descriptor.predecessors[0], Some(0));
        assert_eq!(descriptor.predecessors[3], Some(3));
        assert_eq!(descriptor.predecessors[4], Some(3));
    }

    #[test]
    fn rooted_search_stays_in_its_component() {
        let mut g = UndirectedListGraph::<(), ()>::with_vertices(4);
        g.add_edge(0, 1).unwrap();
        g.add_edge(2, 3).unwrap();
        let descriptor = depth_first_search(&g, Some(2)).unwrap();
        assert!(!descriptor.is_reached(0));
        assert!(!descriptor.is_reached(1));
        assert!(descriptor.is_reached(2));
        assert!(descriptor.is_reached(3));
        assert!(breadth_first_search(&g, Some(17)).is_err());
    }

    #[test]
    fn visit_action_abort_stops_the_kernel() {
        let mut g = UndirectedListGraph::<(), ()>::with_vertices(3);
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        let mut visits = 0;
        let completed = bfs(
            &g,
            vec![VertexInfo::root(0)],
            |_| true,
            |_, _| {
                visits += 1;
                visits < 2
            },
            |_, _, _| Some(false),
            |_| {},
            |_| {},
        );
        assert!(!completed);
        assert_eq!(visits, 2);
    }

    #[test]
    fn enqueue_abort_stops_the_kernel() {
        let mut g = UndirectedListGraph::<(), ()>::with_vertices(2);
        g.add_edge(0, 1).unwrap();
        let completed = bfs(
            &g,
            vec![VertexInfo::root(0)],
            |_| true,
            |_, _| true,
            |_, _, _| None,
            |_| {},
            |_| {},
        );
        assert!(!completed);
        let empty_frontier = bfs(
            &g,
            Vec::new(),
            |_| true,
            |_, _| true,
            |_, _, _| Some(false),
            |_| {},
            |_| {},
        );
        assert!(!empty_frontier);
    }

    #[test]
    fn pfs_breaks_ties_by_insertion_order() {
        let mut g = UndirectedListGraph::<(), ()>::with_vertices(4);
        g.add_edge(0, 2).unwrap();
        g.add_edge(0, 1).unwrap();
        g.add_edge(0, 3).unwrap();
        let mut order = Vec::new();
        let visited = RefCell::new(vec![false; 4]);
        pfs(
            &g,
            |_| (),
            |_, _| Ordering::Equal,
            vec![VertexInfo::root(0)],
            |id, _| !visited.borrow()[id],
            |id, _| {
                visited.borrow_mut()[id] = true;
                order.push(id);
                true
            },
            |id, _, _| Some(!visited.borrow()[id]),
            |_| {},
            |_| {},
        );
        // all priorities equal: the heap degenerates to a FIFO queue
        assert_eq!(order, vec![0, 2, 1, 3]);
    }

    #[test]
    fn pfs_priorities_are_frozen_at_insertion() {
        // a lighter route to vertex 2 appears only after the heavy entry was pushed
        let mut g = UndirectedListGraph::<(), ()>::with_vertices(3);
        g.add_edge(0, 2).unwrap();
        g.add_edge(0, 1).unwrap();
        g.add_edge(1, 2).unwrap();
        let priorities = RefCell::new(vec![0u64, 1, 9]);
        let visited = RefCell::new(vec![false; 3]);
        let mut popped: Vec<(VertexId, u64)> = Vec::new();
        pfs(
            &g,
            |info: &VertexInfo| priorities.borrow()[info.id],
            |lhs: &u64, rhs: &u64| lhs.cmp(rhs),
            vec![VertexInfo::root(0)],
            |id, frozen| {
                popped.push((id, *frozen));
                *frozen <= priorities.borrow()[id]
            },
            |id, _| {
                visited.borrow_mut()[id] = true;
                if id == 1 {
                    // improve vertex 2 after its first entry is already queued
                    priorities.borrow_mut()[2] = 2;
                }
                true
            },
            |id, _, _| Some(!visited.borrow()[id]),
            |_| {},
            |_| {},
        );
        // the re-enqueued entry carries the improved priority; the first entry for
        // vertex 2 still pops with its old value and is rejected as stale
        assert_eq!(popped, vec![(0, 0), (1, 1), (2, 2), (2, 9)]);
    }
}
