use std::{collections::HashSet, marker::PhantomData};
use crate::{
    Directionality, Edge, VertexId,
    attributes::AttributeCollection,
    errors::{ErrorKind, MeshNetsError, MeshNetsResult},
};
use super::{
    EdgeArena, EdgeKey, EdgeRange, RangeSource, Storage, edge_connects,
    shift_endpoints_after_removal,
};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * ADJACENCY LIST                                                                    *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Adjacency list backend
///
/// ## Description
/// Keeps one list of incident edge keys per vertex, indexed by vertex ID. A directed
/// edge is stored only under its source; an undirected non-loop edge is stored under
/// both endpoints and remains a single logical edge (the lists share the key into the
/// edge arena). Parallel edges between the same pair of vertices are allowed.
///
/// Edge enumeration within a vertex follows insertion order.
#[derive(Clone, Default, Debug)]
pub struct AdjacencyList<DirectionalityType, EdgeAttributeType>
where
    DirectionalityType: Directionality,
    EdgeAttributeType: AttributeCollection,
{
    arena: EdgeArena<EdgeAttributeType>,
    list: Vec<Vec<EdgeKey>>,
    n_unique_edges: usize,
    directionality: PhantomData<DirectionalityType>,
}

// AdjacencyList::Storage
impl<DirectionalityType, EdgeAttributeType> Storage<EdgeAttributeType> for AdjacencyList<DirectionalityType, EdgeAttributeType>
where
    DirectionalityType: Directionality,
    EdgeAttributeType: AttributeCollection,
{
    type Directionality = DirectionalityType;

    fn with_vertices(n: usize) -> Self {
        AdjacencyList {
            arena: EdgeArena::default(),
            list: vec![Vec::new(); n],
            n_unique_edges: 0,
            directionality: PhantomData,
        }
    }

    #[inline]
    fn n_vertices(&self) -> usize {
        self.list.len()
    }

    #[inline]
    fn n_unique_edges(&self) -> usize {
        self.n_unique_edges
    }

    #[inline]
    fn add_vertex(&mut self) {
        self.list.push(Vec::new());
    }

    fn add_vertices(&mut self, n: usize) {
        self.list.resize_with(self.list.len() + n, Vec::new);
    }

    fn remove_vertex(&mut self, vertex_id: VertexId) {
        if DirectionalityType::IS_DIRECTED {
            // drop the edges terminating in the vertex from every other list
            let mut dead: Vec<EdgeKey> = Vec::new();
            for source_id in 0..self.list.len() {
                if source_id == vertex_id {
                    continue;
                }
                let arena = &self.arena;
                self.list[source_id].retain(|&key| {
                    if arena[key].is_incident_with(vertex_id) {
                        dead.push(key);
                        false
                    } else {
                        true
                    }
                });
            }
            self.n_unique_edges -= dead.len();
            for key in dead {
                self.arena.remove(key);
            }
        } else {
            // only the lists of vertices incident with the removed one can hold
            // mirror entries
            let mut incident_ids: HashSet<VertexId> = HashSet::new();
            for &key in &self.list[vertex_id] {
                let edge = &self.arena[key];
                if !edge.is_loop() {
                    incident_ids.insert(edge.incident_vertex(vertex_id));
                }
            }
            for &incident_id in &incident_ids {
                let arena = &self.arena;
                self.list[incident_id].retain(|&key| !arena[key].is_incident_with(vertex_id));
            }
        }

        // the vertex's own list holds each remaining incident edge exactly once
        let own = std::mem::take(&mut self.list[vertex_id]);
        self.n_unique_edges -= own.len();
        for key in own {
            self.arena.remove(key);
        }
        self.list.remove(vertex_id);

        shift_endpoints_after_removal(&mut self.arena, vertex_id);
    }

    fn add_edge(&mut self, first: VertexId, second: VertexId, attributes: EdgeAttributeType) -> MeshNetsResult<EdgeKey> {
        let edge = Edge::new(first, second, attributes);
        let reciprocal = DirectionalityType::stores_reciprocal(&edge);
        let key = self.arena.insert(edge);
        self.list[first].push(key);
        if reciprocal {
            self.list[second].push(key);
        }
        self.n_unique_edges += 1;
        Ok(key)
    }

    fn add_edges_from(&mut self, source_id: VertexId, destinations: Vec<(VertexId, EdgeAttributeType)>) -> MeshNetsResult<Vec<EdgeKey>> {
        let mut keys = Vec::with_capacity(destinations.len());
        for (destination_id, attributes) in destinations {
            keys.push(self.add_edge(source_id, destination_id, attributes)?);
        }
        Ok(keys)
    }

    fn remove_edge(&mut self, key: EdgeKey) -> MeshNetsResult<()> {
        const FUNCTION_PATH: &str = "AdjacencyList::Storage::remove_edge";
        let edge = match self.arena.get(key) {
            Some(value) => value,
            None => return Err(MeshNetsError::new(FUNCTION_PATH, ErrorKind::NotFound, "No stored edge has the given key.")),
        };
        let (first, second) = edge.incident_vertex_ids();
        let reciprocal = DirectionalityType::stores_reciprocal(edge);
        self.list[first].retain(|&k| k != key);
        if reciprocal {
            self.list[second].retain(|&k| k != key);
        }
        self.arena.remove(key);
        self.n_unique_edges -= 1;
        Ok(())
    }

    #[inline]
    fn has_edge(&self, first: VertexId, second: VertexId) -> bool {
        self.get_edge(first, second).is_some()
    }

    fn get_edge(&self, first: VertexId, second: VertexId) -> Option<EdgeKey> {
        self.list[first]
            .iter()
            .copied()
            .find(|&key| edge_connects(&self.arena[key], first, second))
    }

    fn get_edges(&self, first: VertexId, second: VertexId) -> Vec<EdgeKey> {
        self.list[first]
            .iter()
            .copied()
            .filter(|&key| edge_connects(&self.arena[key], first, second))
            .collect()
    }

    #[inline]
    fn resolve(&self, key: EdgeKey) -> Option<&Edge<EdgeAttributeType>> {
        self.arena.get(key)
    }

    #[inline]
    fn resolve_mut(&mut self, key: EdgeKey) -> Option<&mut Edge<EdgeAttributeType>> {
        self.arena.get_mut(key)
    }

    fn adjacent_edges(&self, vertex_id: VertexId) -> EdgeRange<'_, EdgeAttributeType> {
        EdgeRange::new(&self.arena, RangeSource::List(&self.list[vertex_id]))
    }

    fn in_degree(&self, vertex_id: VertexId) -> usize {
        if DirectionalityType::IS_DIRECTED {
            self.list
                .iter()
                .map(|adjacent| {
                    adjacent
                        .iter()
                        .filter(|&&key| self.arena[key].second() == vertex_id)
                        .count()
                })
                .sum()
        } else {
            self.degree(vertex_id)
        }
    }

    fn out_degree(&self, vertex_id: VertexId) -> usize {
        if DirectionalityType::IS_DIRECTED {
            self.list[vertex_id].len()
        } else {
            self.degree(vertex_id)
        }
    }

    fn degree(&self, vertex_id: VertexId) -> usize {
        if DirectionalityType::IS_DIRECTED {
            self.in_degree(vertex_id) + self.out_degree(vertex_id)
        } else {
            // every loop contributes twice
            self.list[vertex_id]
                .iter()
                .map(|&key| 1 + usize::from(self.arena[key].is_loop()))
                .sum()
        }
    }
}
