use crate::{
    Graph, Storage,
    attributes::{AttributeCollection, BinaryColor, Colorable},
};
use super::{VertexInfo, search::bfs};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * BIPARTITE COLORING                                                                *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Bipartite coloring
///
/// ## Description
/// Try to split the vertices into two classes so that no  edge  connects  two  vertices
/// of the same class. Every component is colored by a breadth-first sweep:  its  root
/// gets [`BinaryColor::Black`], every newly discovered neighbour the  opposite  color
/// of its discoverer. Loops are skipped; a neighbour already carrying  the  color  of
/// its discoverer proves an odd cycle and aborts the search.
///
/// ## Arguments
/// * `graph` - an immutable reference to the graph.
///
/// ## Returns
/// * `Option<Vec<BinaryColor>>` - `Some(coloring)` with one set color per  vertex  when
/// the graph is bipartite; `None` otherwise.
pub fn bipartite_coloring<StorageType, VertexAttributeType, EdgeAttributeType>(
    graph: &Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
) -> Option<Vec<BinaryColor>>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
{
    let mut coloring = vec![BinaryColor::Unset; graph.n_vertices()];

    for root_id in graph.vertex_ids() {
        if coloring[root_id].is_set() {
            continue;
        }

        // color the component root
        coloring[root_id] = BinaryColor::Black;

        let consistent = bfs(
            graph,
            vec![VertexInfo::root(root_id)],
            |_| true,
            |_, _| true,
            |vertex_id, _key, in_edge| {
                if in_edge.is_loop() {
                    return Some(false);
                }

                let discoverer_id = in_edge.incident_vertex(vertex_id);
                if coloring[vertex_id] == coloring[discoverer_id] {
                    return None; // the graph is not bipartite
                }

                if !coloring[vertex_id].is_set() {
                    coloring[vertex_id] = coloring[discoverer_id].next();
                    Some(true)
                } else {
                    Some(false)
                }
            },
            |_| {},
            |_| {},
        );

        if !consistent {
            return None;
        }
    }

    Some(coloring)
}



/// Whether the graph admits a bipartite coloring.
#[inline]
pub fn is_bipartite<StorageType, VertexAttributeType, EdgeAttributeType>(
    graph: &Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
) -> bool
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
{
    bipartite_coloring(graph).is_some()
}



/// # Store a coloring in the vertex records
///
/// ## Description
/// Write one color per vertex into the graph's [`Colorable`] vertex attribute records.
///
/// ## Returns
/// * `bool` - `false` when the number of colors doesn't match the number of  vertices
/// (the graph is then left untouched), `true` otherwise.
pub fn apply_coloring<StorageType, VertexAttributeType, EdgeAttributeType>(
    graph: &mut Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
    coloring: &[BinaryColor],
) -> bool
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection + Colorable,
    EdgeAttributeType: AttributeCollection,
{
    if coloring.len() != graph.n_vertices() {
        return false;
    }

    for (vertex_id, color) in coloring.iter().enumerate() {
        graph.v_attrs_mut(vertex_id).unwrap().set_color(*color);
    }

    true
}
