//! # Graph specification format ("gsf")
//!
//! ## Description
//! A whitespace-separated text format. The opening header line is `D N E VP EP`:
//! the directional flag (`1` = directed), the vertex count, the unique edge  count
//! and the two properties flags. With `VP = 1` the header is followed by `N`
//! attribute records, one per line, in vertex-ID order. The edge section holds  `E`
//! records: `u v` each, extended to `u v <attr>` with `EP = 1`. Undirected  edges
//! appear once, emitted from the endpoint with the lower ID acting as `u`.
//!
//! On load, a mismatch between the stream's directional flag and the requested graph
//! type is a [schema][crate::errors::ErrorKind::Schema] error, as is a raised
//! properties flag for an attribute type that is not
//! [serializable][super::RecordIO::SUPPORTED].
use std::io::{BufRead, Write};
use regex::Regex;
use crate::{
    Directionality, Graph, Storage, VertexId,
    attributes::AttributeCollection,
    errors::{ErrorKind, MeshNetsError, MeshNetsResult},
};
use super::{FormatOptions, RecordIO, stream_failure};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * WRITER                                                                            *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Write a graph as gsf
///
/// ## Description
/// Serialize the graph into the stream. The properties flags of the emitted  header
/// are the requested [`FormatOptions`] attribute flags, masked by  the  record  types'
/// serializability: a graph with unit records always writes `VP = 0` / `EP = 0`,  so
/// the stream stays consistent.
pub fn write_graph<StorageType, VertexAttributeType, EdgeAttributeType, W>(
    graph: &Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
    writer: &mut W,
    options: FormatOptions,
) -> MeshNetsResult<()>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection + RecordIO,
    EdgeAttributeType: AttributeCollection + RecordIO,
    W: Write,
{
    const FUNCTION_PATH: &str = "io::gsf::write_graph";

    let directed = <StorageType::Directionality as Directionality>::IS_DIRECTED;
    let with_vertex_attributes =
        options.contains(FormatOptions::WITH_VERTEX_ATTRIBUTES) && VertexAttributeType::SUPPORTED;
    let with_edge_attributes =
        options.contains(FormatOptions::WITH_EDGE_ATTRIBUTES) && EdgeAttributeType::SUPPORTED;

    writeln!(
        writer,
        "{} {} {} {} {}",
        u8::from(directed),
        graph.n_vertices(),
        graph.n_unique_edges(),
        u8::from(with_vertex_attributes),
        u8::from(with_edge_attributes),
    )
    .map_err(|e| stream_failure(FUNCTION_PATH, e))?;

    if with_vertex_attributes {
        for vertex in graph.vertices() {
            writeln!(writer, "{}", vertex.attributes.record_string())
                .map_err(|e| stream_failure(FUNCTION_PATH, e))?;
        }
    }

    for vertex_id in graph.vertex_ids() {
        for (_key, edge) in &graph.adjacent_edges(vertex_id).unwrap() {
            // emit each logical edge exactly once: directed edges from their source,
            // undirected edges from their lower endpoint
            let (first_id, second_id) = if directed {
                if edge.first() != vertex_id {
                    continue;
                }
                (edge.first(), edge.second())
            } else {
                let other_id = edge.incident_vertex(vertex_id);
                if vertex_id > other_id {
                    continue;
                }
                (vertex_id, other_id)
            };

            if with_edge_attributes {
                writeln!(writer, "{} {} {}", first_id, second_id, edge.attributes.record_string())
            } else {
                writeln!(writer, "{} {}", first_id, second_id)
            }
            .map_err(|e| stream_failure(FUNCTION_PATH, e))?;
        }
    }

    Ok(())
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * READER                                                                            *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



struct LineSource<R>
where
    R: BufRead,
{
    lines: std::io::Lines<R>,
    line_number: usize,
}

impl<R> LineSource<R>
where
    R: BufRead,
{
    fn new(reader: R) -> Self {
        LineSource { lines: reader.lines(), line_number: 0 }
    }

    // the next non-blank line together with its 1-based number
    fn next_content_line(&mut self, function_path: &str) -> MeshNetsResult<(usize, String)> {
        loop {
            self.line_number += 1;
            match self.lines.next() {
                Some(Ok(line)) => {
                    if !line.trim().is_empty() {
                        return Ok((self.line_number, line));
                    }
                },
                Some(Err(error)) => return Err(stream_failure(function_path, error)),
                None => {
                    return Err(MeshNetsError::new(
                        function_path,
                        ErrorKind::Schema,
                        format!("Line {}. Unexpected end of stream.", self.line_number),
                    ));
                },
            }
        }
    }
}

fn split_token(line: &str) -> (&str, &str) {
    let trimmed = line.trim_start();
    match trimmed.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest),
        None => (trimmed, ""),
    }
}

fn parse_count(function_path: &str, integer_regex: &Regex, token: &str, line_number: usize) -> MeshNetsResult<usize> {
    if !integer_regex.is_match(token) {
        return Err(MeshNetsError::new(
            function_path,
            ErrorKind::Schema,
            format!("Line {}. Expected a non-negative integer, found '{}'.", line_number, token),
        ));
    }
    token.parse::<usize>().map_err(|_| {
        MeshNetsError::new(
            function_path,
            ErrorKind::Schema,
            format!("Line {}. Integer out of range: '{}'.", line_number, token),
        )
    })
}

fn parse_flag(function_path: &str, token: &str, line_number: usize) -> MeshNetsResult<bool> {
    match token {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => Err(MeshNetsError::new(
            function_path,
            ErrorKind::Schema,
            format!("Line {}. Expected a flag (0 or 1), found '{}'.", line_number, token),
        )),
    }
}



/// # Read a graph from gsf
///
/// ## Description
/// Parse one graph from the stream. Blank lines are skipped. Errors:
///
/// * [schema][ErrorKind::Schema] - malformed tokens, a directional flag contradicting
/// the requested graph type, or a properties flag raised for a non-serializable
/// record type (all with the offending line number);
/// * [out-of-range][ErrorKind::OutOfRange] - an edge record referencing a vertex  ID
/// beyond the declared vertex count;
/// * [conflict][ErrorKind::Conflict] - duplicate edge records for an adjacency-matrix
/// graph;
/// * [io][ErrorKind::Io] - the underlying stream failed.
pub fn read_graph<StorageType, VertexAttributeType, EdgeAttributeType, R>(
    reader: R,
) -> MeshNetsResult<Graph<StorageType, VertexAttributeType, EdgeAttributeType>>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection + RecordIO,
    EdgeAttributeType: AttributeCollection + RecordIO,
    R: BufRead,
{
    const FUNCTION_PATH: &str = "io::gsf::read_graph";

    let integer_regex = Regex::new(r"^(0|[1-9][0-9]*)$").unwrap();
    let mut source = LineSource::new(reader);

    // header: D N E VP EP
    let (header_line_number, header) = source.next_content_line(FUNCTION_PATH)?;
    let tokens: Vec<&str> = header.split_whitespace().collect();
    if tokens.len() != 5 {
        return Err(MeshNetsError::new(
            FUNCTION_PATH,
            ErrorKind::Schema,
            format!("Line {}. Expected the header 'D N E VP EP', found '{}'.", header_line_number, header.trim()),
        ));
    }

    let directed = parse_flag(FUNCTION_PATH, tokens[0], header_line_number)?;
    if directed != <StorageType::Directionality as Directionality>::IS_DIRECTED {
        return Err(MeshNetsError::new(
            FUNCTION_PATH,
            ErrorKind::Schema,
            format!(
                "Line {}. The directional flag doesn't match: the stream holds {} graph.",
                header_line_number,
                if directed { "a directed" } else { "an undirected" },
            ),
        ));
    }

    let n_vertices = parse_count(FUNCTION_PATH, &integer_regex, tokens[1], header_line_number)?;
    let n_edges = parse_count(FUNCTION_PATH, &integer_regex, tokens[2], header_line_number)?;
    let with_vertex_attributes = parse_flag(FUNCTION_PATH, tokens[3], header_line_number)?;
    let with_edge_attributes = parse_flag(FUNCTION_PATH, tokens[4], header_line_number)?;

    if with_vertex_attributes && !VertexAttributeType::SUPPORTED {
        return Err(MeshNetsError::new(
            FUNCTION_PATH,
            ErrorKind::Schema,
            format!("Line {}. The stream carries vertex attributes but the vertex record type is not deserializable.", header_line_number),
        ));
    }
    if with_edge_attributes && !EdgeAttributeType::SUPPORTED {
        return Err(MeshNetsError::new(
            FUNCTION_PATH,
            ErrorKind::Schema,
            format!("Line {}. The stream carries edge attributes but the edge record type is not deserializable.", header_line_number),
        ));
    }

    let mut graph = Graph::new();

    // vertex section
    if with_vertex_attributes {
        let mut records = Vec::with_capacity(n_vertices);
        for _ in 0..n_vertices {
            let (line_number, line) = source.next_content_line(FUNCTION_PATH)?;
            let record = VertexAttributeType::parse_record(line.trim()).map_err(|error| {
                MeshNetsError::new(FUNCTION_PATH, error.kind(), format!("Line {}. Invalid vertex record.", line_number))
            })?;
            records.push(record);
        }
        graph.add_vertices_with(records);
    } else {
        graph.add_vertices(n_vertices);
    }

    // edge section
    for _ in 0..n_edges {
        let (line_number, line) = source.next_content_line(FUNCTION_PATH)?;
        let (first_token, rest) = split_token(&line);
        let (second_token, rest) = split_token(rest);
        let first_id: VertexId = parse_count(FUNCTION_PATH, &integer_regex, first_token, line_number)?;
        let second_id: VertexId = parse_count(FUNCTION_PATH, &integer_regex, second_token, line_number)?;

        if with_edge_attributes {
            let record = EdgeAttributeType::parse_record(rest.trim()).map_err(|error| {
                MeshNetsError::new(FUNCTION_PATH, error.kind(), format!("Line {}. Invalid edge record.", line_number))
            })?;
            graph.add_edge_with(first_id, second_id, record)?;
        } else {
            if !rest.trim().is_empty() {
                return Err(MeshNetsError::new(
                    FUNCTION_PATH,
                    ErrorKind::Schema,
                    format!("Line {}. Unexpected tokens after the edge record: '{}'.", line_number, rest.trim()),
                ));
            }
            graph.add_edge(first_id, second_id)?;
        }
    }

    Ok(graph)
}





#[cfg(test)]
mod tests {
    use rstest::rstest;
    use crate::{
        AdjacencyList, AdjacencyMatrix, Directed, DirectedListGraph, Undirected,
        UndirectedListGraph, UndirectedMatrixGraph,
        attributes::{Name, Weight},
    };
    use super::*;

    fn written<StorageType, VertexAttributeType, EdgeAttributeType>(
        graph: &Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
        options: FormatOptions,
    ) -> Vec<u8>
    where
        StorageType: Storage<EdgeAttributeType>,
        VertexAttributeType: AttributeCollection + RecordIO,
        EdgeAttributeType: AttributeCollection + RecordIO,
    {
        let mut buffer = Vec::new();
        write_graph(graph, &mut buffer, options).unwrap();
        buffer
    }

    fn weighted_sample<StorageType>() -> Graph<StorageType, Name, Weight<i64>>
    where
        StorageType: Storage<Weight<i64>>,
    {
        let mut g = Graph::<StorageType, Name, Weight<i64>>::new();
        g.add_vertices_with((0..4).map(|i| Name::new(format!("vertex {}", i))));
        g.add_edge_with(0, 1, Weight::new(3)).unwrap();
        g.add_edge_with(2, 1, Weight::new(5)).unwrap();
        g.add_edge_with(3, 3, Weight::new(1)).unwrap();
        g
    }

    #[rstest]
    #[case::directed_list(weighted_sample::<AdjacencyList<Directed, Weight<i64>>>())]
    #[case::directed_matrix(weighted_sample::<AdjacencyMatrix<Directed, Weight<i64>>>())]
    fn directed_round_trip<StorageType>(#[case] g: Graph<StorageType, Name, Weight<i64>>)
    where
        StorageType: Storage<Weight<i64>, Directionality = Directed>,
    {
        let buffer = written(&g, FormatOptions::WITH_VERTEX_ATTRIBUTES | FormatOptions::WITH_EDGE_ATTRIBUTES);
        let loaded: Graph<StorageType, Name, Weight<i64>> = read_graph(&buffer[..]).unwrap();
        assert_eq!(loaded.n_vertices(), g.n_vertices());
        assert_eq!(loaded.n_unique_edges(), g.n_unique_edges());
        for vertex_id in g.vertex_ids() {
            assert_eq!(loaded.v_attrs(vertex_id).unwrap(), g.v_attrs(vertex_id).unwrap());
        }
        let key = loaded.get_edge(2, 1).unwrap().unwrap();
        assert_eq!(loaded.e_attrs(key).unwrap().weight, 5);
        assert!(loaded.has_edge(3, 3).unwrap());
        assert!(!loaded.has_edge(1, 0).unwrap());
    }

    #[rstest]
    #[case::undirected_list(weighted_sample::<AdjacencyList<Undirected, Weight<i64>>>())]
    #[case::undirected_matrix(weighted_sample::<AdjacencyMatrix<Undirected, Weight<i64>>>())]
    fn undirected_edges_are_emitted_once_from_the_lower_endpoint<StorageType>(
        #[case] g: Graph<StorageType, Name, Weight<i64>>,
    ) where
        StorageType: Storage<Weight<i64>, Directionality = Undirected>,
    {
        let buffer = written(&g, FormatOptions::WITH_EDGE_ATTRIBUTES);
        let text = String::from_utf8(buffer.clone()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "0 4 3 0 1");
        // the (2, 1) edge is written from vertex 1
        assert!(lines.contains(&"1 2 5"));
        assert_eq!(lines.len(), 4);

        let loaded: Graph<StorageType, (), Weight<i64>> = read_graph(&buffer[..]).unwrap();
        assert_eq!(loaded.n_unique_edges(), 3);
        assert!(loaded.has_edge(2, 1).unwrap());
        assert_eq!(loaded.degree(3).unwrap(), 2);
    }

    #[test]
    fn directional_mismatch_is_a_schema_error() {
        let g: DirectedListGraph = crate::topology::path(3).unwrap();
        let buffer = written(&g, FormatOptions::empty());
        let error = read_graph::<AdjacencyList<Undirected, ()>, (), (), _>(&buffer[..]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Schema);
    }

    #[test]
    fn properties_flag_with_unit_records_is_a_schema_error() {
        let stream = b"0 2 1 1 0\nrecord\n0 1\n";
        let error = read_graph::<AdjacencyList<Undirected, ()>, (), (), _>(&stream[..]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Schema);
    }

    #[test]
    fn the_writer_never_raises_flags_for_unit_records() {
        let mut g = UndirectedListGraph::<(), ()>::with_vertices(2);
        g.add_edge(0, 1).unwrap();
        let buffer = written(&g, FormatOptions::WITH_VERTEX_ATTRIBUTES | FormatOptions::WITH_EDGE_ATTRIBUTES);
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().next().unwrap(), "0 2 1 0 0");
    }

    #[test]
    fn malformed_streams_report_the_line() {
        let missing_tokens = b"0 2\n";
        let error = read_graph::<AdjacencyList<Undirected, ()>, (), (), _>(&missing_tokens[..]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Schema);
        assert!(error.to_string().contains("Line 1"));

        let bad_edge = b"0 2 1 0 0\n0 x\n";
        let error = read_graph::<AdjacencyList<Undirected, ()>, (), (), _>(&bad_edge[..]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Schema);
        assert!(error.to_string().contains("Line 2"));

        let truncated = b"0 2 1 0 0\n";
        let error = read_graph::<AdjacencyList<Undirected, ()>, (), (), _>(&truncated[..]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Schema);

        let out_of_range = b"0 2 1 0 0\n0 5\n";
        let error = read_graph::<AdjacencyList<Undirected, ()>, (), (), _>(&out_of_range[..]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn duplicate_matrix_edges_conflict_on_load() {
        let stream = b"0 2 2 0 0\n0 1\n0 1\n";
        let error = read_graph::<AdjacencyMatrix<Undirected, ()>, (), (), _>(&stream[..]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Conflict);
        // the adjacency list accepts the same stream as parallel edges
        let loaded: UndirectedListGraph = read_graph(&stream[..]).unwrap();
        assert_eq!(loaded.n_unique_edges(), 2);
        let _: UndirectedMatrixGraph = read_graph(&b"0 2 1 0 0\n0 1\n"[..]).unwrap();
    }

    #[test]
    fn blank_lines_are_skipped() {
        let stream = b"\n0 3 2 0 0\n\n0 1\n\n1 2\n\n";
        let loaded: UndirectedListGraph = read_graph(&stream[..]).unwrap();
        assert_eq!(loaded.n_vertices(), 3);
        assert_eq!(loaded.n_unique_edges(), 2);
    }
}
