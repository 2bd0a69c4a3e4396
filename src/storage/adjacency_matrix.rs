use std::{collections::HashSet, marker::PhantomData};
use crate::{
    Directionality, Edge, VertexId,
    attributes::AttributeCollection,
    errors::{ErrorKind, MeshNetsError, MeshNetsResult},
};
use super::{EdgeArena, EdgeKey, EdgeRange, RangeSource, Storage, shift_endpoints_after_removal};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * ADJACENCY MATRIX                                                                  *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Adjacency matrix backend
///
/// ## Description
/// Keeps a dense N×N square of optional edge cells. A cell `(u, v)` holds at most one
/// edge, so multi-edges are structurally impossible: adding an edge into an occupied
/// cell fails with a *conflict* error instead of silently replacing the stored edge.
/// For undirected graphs the mirror cells `(u, v)` and `(v, u)` of a non-loop edge
/// hold the same logical edge.
///
/// Edge enumeration within a vertex follows ascending other-endpoint ID (a row scan).
#[derive(Clone, Default, Debug)]
pub struct AdjacencyMatrix<DirectionalityType, EdgeAttributeType>
where
    DirectionalityType: Directionality,
    EdgeAttributeType: AttributeCollection,
{
    arena: EdgeArena<EdgeAttributeType>,
    matrix: Vec<Vec<Option<EdgeKey>>>,
    n_unique_edges: usize,
    directionality: PhantomData<DirectionalityType>,
}

// AdjacencyMatrix::Storage
impl<DirectionalityType, EdgeAttributeType> Storage<EdgeAttributeType> for AdjacencyMatrix<DirectionalityType, EdgeAttributeType>
where
    DirectionalityType: Directionality,
    EdgeAttributeType: AttributeCollection,
{
    type Directionality = DirectionalityType;

    fn with_vertices(n: usize) -> Self {
        AdjacencyMatrix {
            arena: EdgeArena::default(),
            matrix: vec![vec![None; n]; n],
            n_unique_edges: 0,
            directionality: PhantomData,
        }
    }

    #[inline]
    fn n_vertices(&self) -> usize {
        self.matrix.len()
    }

    #[inline]
    fn n_unique_edges(&self) -> usize {
        self.n_unique_edges
    }

    fn add_vertex(&mut self) {
        for row in self.matrix.iter_mut() {
            row.push(None);
        }
        let n = self.matrix.len() + 1;
        self.matrix.push(vec![None; n]);
    }

    fn add_vertices(&mut self, n: usize) {
        let new_n_vertices = self.matrix.len() + n;
        for row in self.matrix.iter_mut() {
            row.resize(new_n_vertices, None);
        }
        self.matrix.resize_with(new_n_vertices, || vec![None; new_n_vertices]);
    }

    fn remove_vertex(&mut self, vertex_id: VertexId) {
        // the removed row accounts for every incident edge exactly once for the
        // undirected matrix and for every outgoing edge for the directed one
        let row = self.matrix.remove(vertex_id);
        for cell in row {
            if let Some(key) = cell {
                self.n_unique_edges -= 1;
                self.arena.remove(key);
            }
        }

        for row in self.matrix.iter_mut() {
            let cell = row.remove(vertex_id);
            if let Some(key) = cell {
                if DirectionalityType::IS_DIRECTED {
                    // a distinct edge terminating in the removed vertex
                    self.n_unique_edges -= 1;
                    self.arena.remove(key);
                }
                // undirected: a mirror of an edge already dropped with the row
            }
        }

        shift_endpoints_after_removal(&mut self.arena, vertex_id);
    }

    fn add_edge(&mut self, first: VertexId, second: VertexId, attributes: EdgeAttributeType) -> MeshNetsResult<EdgeKey> {
        const FUNCTION_PATH: &str = "AdjacencyMatrix::Storage::add_edge";
        if self.matrix[first][second].is_some() {
            return Err(MeshNetsError::new(
                FUNCTION_PATH,
                ErrorKind::Conflict,
                format!("Cannot override the existing edge ({}, {}) without removing it.", first, second),
            ));
        }
        let edge = Edge::new(first, second, attributes);
        let reciprocal = DirectionalityType::stores_reciprocal(&edge);
        let key = self.arena.insert(edge);
        self.matrix[first][second] = Some(key);
        if reciprocal {
            self.matrix[second][first] = Some(key);
        }
        self.n_unique_edges += 1;
        Ok(key)
    }

    fn add_edges_from(&mut self, source_id: VertexId, destinations: Vec<(VertexId, EdgeAttributeType)>) -> MeshNetsResult<Vec<EdgeKey>> {
        const FUNCTION_PATH: &str = "AdjacencyMatrix::Storage::add_edges_from";
        // validate the whole batch before storing anything
        let mut batch: HashSet<VertexId> = HashSet::new();
        for (destination_id, _) in &destinations {
            if self.matrix[source_id][*destination_id].is_some() || !batch.insert(*destination_id) {
                return Err(MeshNetsError::new(
                    FUNCTION_PATH,
                    ErrorKind::Conflict,
                    format!("Cannot override the existing edge ({}, {}) without removing it.", source_id, destination_id),
                ));
            }
        }

        let mut keys = Vec::with_capacity(destinations.len());
        for (destination_id, attributes) in destinations {
            keys.push(self.add_edge(source_id, destination_id, attributes)?);
        }
        Ok(keys)
    }

    fn remove_edge(&mut self, key: EdgeKey) -> MeshNetsResult<()> {
        const FUNCTION_PATH: &str = "AdjacencyMatrix::Storage::remove_edge";
        let edge = match self.arena.get(key) {
            Some(value) => value,
            None => return Err(MeshNetsError::new(FUNCTION_PATH, ErrorKind::NotFound, "No stored edge has the given key.")),
        };
        let (first, second) = edge.incident_vertex_ids();
        let reciprocal = DirectionalityType::stores_reciprocal(edge);
        self.matrix[first][second] = None;
        if reciprocal {
            self.matrix[second][first] = None;
        }
        self.arena.remove(key);
        self.n_unique_edges -= 1;
        Ok(())
    }

    #[cfg_attr(feature = "force-inline", inline(always))]
    #[cfg_attr(not(feature = "force-inline"), inline)]
    fn has_edge(&self, first: VertexId, second: VertexId) -> bool {
        self.matrix[first][second].is_some()
    }

    #[inline]
    fn get_edge(&self, first: VertexId, second: VertexId) -> Option<EdgeKey> {
        self.matrix[first][second]
    }

    fn get_edges(&self, first: VertexId, second: VertexId) -> Vec<EdgeKey> {
        // empty or a singleton: the matrix cannot hold parallel edges
        self.matrix[first][second].into_iter().collect()
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
        EdgeRange::new(&self.arena, RangeSource::MatrixRow(&self.matrix[vertex_id]))
    }

    fn in_degree(&self, vertex_id: VertexId) -> usize {
        if DirectionalityType::IS_DIRECTED {
            self.matrix
                .iter()
                .filter(|row| row[vertex_id].is_some())
                .count()
        } else {
            self.degree(vertex_id)
        }
    }

    fn out_degree(&self, vertex_id: VertexId) -> usize {
        if DirectionalityType::IS_DIRECTED {
            self.matrix[vertex_id]
                .iter()
                .filter(|cell| cell.is_some())
                .count()
        } else {
            self.degree(vertex_id)
        }
    }

    fn degree(&self, vertex_id: VertexId) -> usize {
        if DirectionalityType::IS_DIRECTED {
            self.in_degree(vertex_id) + self.out_degree(vertex_id)
        } else {
            self.matrix[vertex_id]
                .iter()
                .flatten()
                .map(|&key| 1 + usize::from(self.arena[key].is_loop()))
                .sum()
        }
    }
}





#[cfg(test)]
mod tests {
    use crate::{Directed, Undirected};
    use super::*;

    #[test]
    fn occupied_cell_conflicts() {
        let mut storage = AdjacencyMatrix::<Directed, ()>::with_vertices(2);
        storage.add_edge(0, 1, ()).unwrap();
        let error = storage.add_edge(0, 1, ()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Conflict);
        // the reverse cell stays free for directed graphs
        storage.add_edge(1, 0, ()).unwrap();
        assert_eq!(storage.n_unique_edges(), 2);
    }

    #[test]
    fn undirected_mirror_cells_share_the_edge() {
        let mut storage = AdjacencyMatrix::<Undirected, ()>::with_vertices(3);
        let key = storage.add_edge(2, 0, ()).unwrap();
        assert_eq!(storage.get_edge(0, 2), Some(key));
        assert_eq!(storage.get_edge(2, 0), Some(key));
        assert_eq!(storage.n_unique_edges(), 1);
        let error = storage.add_edge(0, 2, ()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn get_edges_is_empty_or_singleton() {
        let mut storage = AdjacencyMatrix::<Undirected, ()>::with_vertices(2);
        assert!(storage.get_edges(0, 1).is_empty());
        let key = storage.add_edge(0, 1, ()).unwrap();
        assert_eq!(storage.get_edges(0, 1), vec![key]);
        assert_eq!(storage.get_edges(1, 0), vec![key]);
    }

    #[test]
    fn directed_degrees_count_rows_and_columns() {
        let mut storage = AdjacencyMatrix::<Directed, ()>::with_vertices(3);
        storage.add_edge(0, 2, ()).unwrap();
        storage.add_edge(1, 2, ()).unwrap();
        storage.add_edge(2, 2, ()).unwrap();
        assert_eq!(storage.in_degree(2), 3);
        assert_eq!(storage.out_degree(2), 1);
        assert_eq!(storage.degree(2), 4);
    }

    #[test]
    fn undirected_loop_counts_twice_in_degree() {
        let mut storage = AdjacencyMatrix::<Undirected, ()>::with_vertices(2);
        storage.add_edge(0, 0, ()).unwrap();
        storage.add_edge(0, 1, ()).unwrap();
        assert_eq!(storage.degree(0), 3);
        assert_eq!(storage.degree(1), 1);
    }

    #[test]
    fn growth_keeps_the_square_shape() {
        let mut storage = AdjacencyMatrix::<Undirected, ()>::with_vertices(1);
        storage.add_vertex();
        storage.add_vertices(2);
        assert_eq!(storage.n_vertices(), 4);
        storage.add_edge(0, 3, ()).unwrap();
        assert!(storage.has_edge(3, 0));
    }

    #[test]
    fn undirected_remove_vertex_counts_each_edge_once() {
        let mut storage = AdjacencyMatrix::<Undirected, ()>::with_vertices(4);
        storage.add_edge(1, 0, ()).unwrap();
        storage.add_edge(1, 2, ()).unwrap();
        storage.add_edge(1, 1, ()).unwrap();
        storage.add_edge(2, 3, ()).unwrap();
        assert_eq!(storage.n_unique_edges(), 4);
        storage.remove_vertex(1);
        assert_eq!(storage.n_vertices(), 3);
        assert_eq!(storage.n_unique_edges(), 1);
        // (2, 3) became (1, 2)
        assert!(storage.has_edge(1, 2));
        assert!(storage.has_edge(2, 1));
    }

    #[test]
    fn directed_remove_vertex_counts_both_directions() {
        let mut storage = AdjacencyMatrix::<Directed, ()>::with_vertices(3);
        storage.add_edge(1, 0, ()).unwrap();
        storage.add_edge(0, 1, ()).unwrap();
        storage.add_edge(2, 0, ()).unwrap();
        storage.remove_vertex(0);
        assert_eq!(storage.n_unique_edges(), 0);
        assert_eq!(storage.n_vertices(), 2);
    }

    #[test]
    fn batch_insertion_is_atomic() {
        let mut storage = AdjacencyMatrix::<Directed, ()>::with_vertices(3);
        storage.add_edge(0, 2, ()).unwrap();
        let error = storage
            .add_edges_from(0, vec![(1, ()), (2, ())])
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Conflict);
        // nothing from the failed batch was stored
        assert!(!storage.has_edge(0, 1));
        assert_eq!(storage.n_unique_edges(), 1);
    }
}
