use std::cell::RefCell;
use crate::{
    Graph, Storage, VertexId,
    attributes::{AttributeCollection, EdgeWeighted, Weightable},
    errors::{ErrorKind, MeshNetsError, MeshNetsResult},
};
use super::{VertexDistance, VertexInfo, compare_weights, search::pfs};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * PATHS DESCRIPTOR                                                                  *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Paths descriptor
///
/// ## Description
/// The result of a shortest-path computation: per vertex, the  optional  predecessor
/// on a shortest path from the source and the cumulative distance. The source is  its
/// own predecessor at distance zero; vertices without a predecessor were  unreachable
/// and their distance is meaningless.
#[derive(Clone, Debug)]
pub struct PathsDescriptor<DistanceType>
where
    DistanceType: Weightable,
{
    pub predecessors: Vec<Option<VertexId>>,
    pub distances: Vec<DistanceType>,
}

// Implementation of PathsDescriptor
impl<DistanceType> PathsDescriptor<DistanceType>
where
    DistanceType: Weightable,
{
    /// The distance of the vertex from the source, `None` when unreachable.
    pub fn distance_to(&self, vertex_id: VertexId) -> Option<DistanceType> {
        match self.predecessors.get(vertex_id)? {
            Some(_) => Some(self.distances[vertex_id]),
            None => None,
        }
    }
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * DIJKSTRA SHORTEST PATHS                                                           *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Dijkstra shortest paths
///
/// ## Description
/// Compute the shortest  distances  from  `source_id`  to  every  reachable  vertex
/// together with the predecessor map of the shortest-path  tree.  The  weight  of  an
/// edge is taken from its attribute record  ([`EdgeWeighted`]);  records  without  a
/// weight field contribute the literal one, so the distances degrade to hop counts.
///
/// Driven by the [priority-first kernel][super::search::pfs]  ordered  by  ascending
/// tentative distance. A candidate is (re-)enqueued whenever the edge leading to  it
/// improves its distance; the entry keeps the distance it was enqueued  with,  so  an
/// entry deprecated by a later improvement pops with an outdated distance and is
/// skipped.
///
/// ## Arguments
/// * `graph` - an immutable reference to the graph.
/// * `source_id` : [`VertexId`] - the vertex to measure the distances from.
///
/// ## Returns
/// * `MeshNetsResult<PathsDescriptor>` - the paths descriptor; an
/// [out-of-range][ErrorKind::OutOfRange] error for an invalid source and  a
/// [negative-weight][ErrorKind::NegativeWeight] error as soon as  an  edge  with  a
/// negative weight is encountered.
pub fn dijkstra_shortest_paths<StorageType, VertexAttributeType, EdgeAttributeType>(
    graph: &Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
    source_id: VertexId,
) -> MeshNetsResult<PathsDescriptor<VertexDistance<EdgeAttributeType>>>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection + EdgeWeighted,
{
    const FUNCTION_PATH: &str = "algorithm::dijkstra_shortest_paths";

    graph.get_vertex(source_id)?;
    let n_vertices = graph.n_vertices();
    let zero = <VertexDistance<EdgeAttributeType> as Weightable>::zero();

    let mut predecessors: Vec<Option<VertexId>> = vec![None; n_vertices];
    let distances = RefCell::new(vec![zero; n_vertices]);
    predecessors[source_id] = Some(source_id);

    let mut negative_edge: Option<(VertexId, VertexId, VertexDistance<EdgeAttributeType>)> = None;

    pfs(
        graph,
        // the entry freezes the tentative distance of its vertex at enqueue time
        |info: &VertexInfo| distances.borrow()[info.id],
        |lhs, rhs| compare_weights(*lhs, *rhs),
        vec![VertexInfo::root(source_id)],
        // an entry whose frozen distance was improved upon is stale
        |vertex_id, popped_distance| !(*popped_distance > distances.borrow()[vertex_id]),
        |_, _| true,
        |vertex_id, _key, in_edge| {
            let weight = in_edge.attributes.edge_weight();
            if weight < zero {
                negative_edge = Some((in_edge.first(), in_edge.second(), weight));
                return None;
            }

            let discoverer_id = in_edge.incident_vertex(vertex_id);
            let new_distance = distances.borrow()[discoverer_id] + weight;
            let improves = predecessors[vertex_id].is_none()
                || new_distance < distances.borrow()[vertex_id];
            if improves {
                distances.borrow_mut()[vertex_id] = new_distance;
                predecessors[vertex_id] = Some(discoverer_id);
                Some(true)
            } else {
                Some(false)
            }
        },
        |_| {},
        |_| {},
    );

    if let Some((first_id, second_id, weight)) = negative_edge {
        return Err(MeshNetsError::new(
            FUNCTION_PATH,
            ErrorKind::NegativeWeight,
            format!("Found an edge with a negative weight: [{}, {} | w = {}].", first_id, second_id, weight),
        ));
    }

    Ok(PathsDescriptor {
        predecessors,
        distances: distances.into_inner(),
    })
}



/// # Path reconstruction
///
/// ## Description
/// Walk a predecessor map from `target_id` back to its fixed point  (the  traversal
/// source, which is its own predecessor) and return the path in  source-to-target
/// order.
///
/// ## Arguments
/// * `predecessors` : `&[Option<VertexId>]` - a predecessor map  as  produced  by  the
/// searches and [`dijkstra_shortest_paths`].
/// * `target_id` : [`VertexId`] - the vertex to reconstruct the path to.
///
/// ## Returns
/// * `MeshNetsResult<Vec<VertexId>>` - the path;  an
/// [out-of-range][ErrorKind::OutOfRange] error for an  ID  beyond  the  map  and  an
/// [unreachable][ErrorKind::Unreachable] error for a vertex without a predecessor.
pub fn reconstruct_path(predecessors: &[Option<VertexId>], target_id: VertexId) -> MeshNetsResult<Vec<VertexId>> {
    const FUNCTION_PATH: &str = "algorithm::reconstruct_path";

    match predecessors.get(target_id) {
        None => {
            return Err(MeshNetsError::new(FUNCTION_PATH, ErrorKind::OutOfRange, format!("Vertex with ID {} doesn't exist.", target_id)));
        },
        Some(None) => {
            return Err(MeshNetsError::new(FUNCTION_PATH, ErrorKind::Unreachable, format!("The given vertex is unreachable: {}.", target_id)));
        },
        Some(Some(_)) => {},
    }

    let mut path = vec![target_id];
    let mut current = target_id;
    loop {
        let predecessor = match predecessors[current] {
            Some(value) => value,
            None => return Err(MeshNetsError::new(FUNCTION_PATH, ErrorKind::Unreachable, format!("The given vertex is unreachable: {}.", target_id))),
        };
        if predecessor == current {
            break;
        }
        path.push(predecessor);
        current = predecessor;
    }

    path.reverse();
    Ok(path)
}
