//! # Module to handle input/output of graphs
//!
//! ## Description
//! Three layers live here:
//!
//! * the [`RecordIO`] trait, which teaches attribute records  to  round-trip  through
//! the *graph specification format* ("gsf", see [`gsf`]);
//! * human-readable rendering through [`Graph::display`] with  the  [`FormatOptions`]
//! flags (concise or verbose, with or without attribute records);
//! * the filesystem wrappers [`save`], [`save_append`] and [`load`].
pub mod gsf;

use std::{
    fmt::{self, Display},
    fs::{File, OpenOptions},
    io::{BufReader, BufWriter, Write},
    path::Path,
};
use bitflags::bitflags;
use crate::{
    Graph, Storage,
    attributes::{AttributeCollection, BinaryColor, Color, Name, Weight, Weightable},
    errors::{ErrorKind, MeshNetsError, MeshNetsResult},
};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * IO ON ATTRIBUTE RECORD LEVEL                                                      *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Attribute record serialization
///
/// ## Description
/// Attribute records that implement `RecordIO` can travel with their graph through
/// the graph specification format and appear in the rendered  output.  A  record  is
/// written as a single line token sequence and parsed back from it; string  contents
/// are quoted so they may contain whitespace.
///
/// Types that cannot round-trip (the unit record,  the  dynamic  attribute  map)  set
/// [`RecordIO::SUPPORTED`] to `false`: the gsf writer then never raises the  matching
/// properties flag and the reader rejects streams that carry one.
pub trait RecordIO
where
    Self: AttributeCollection,
{
    const SUPPORTED: bool;

    fn record_string(&self) -> String;

    fn parse_record(token: &str) -> MeshNetsResult<Self>
    where
        Self: Sized;
}



// ()::RecordIO
impl RecordIO for () {
    const SUPPORTED: bool = false;

    #[inline]
    fn record_string(&self) -> String {
        String::new()
    }

    fn parse_record(_token: &str) -> MeshNetsResult<Self> {
        const FUNCTION_PATH: &str = "<()>::RecordIO::parse_record";
        Err(MeshNetsError::new(FUNCTION_PATH, ErrorKind::Schema, "The unit record is not serializable."))
    }
}

// Weight::RecordIO
impl<WeightType> RecordIO for Weight<WeightType>
where
    WeightType: Weightable,
{
    const SUPPORTED: bool = true;

    fn record_string(&self) -> String {
        self.weight.to_string()
    }

    fn parse_record(token: &str) -> MeshNetsResult<Self> {
        const FUNCTION_PATH: &str = "Weight::RecordIO::parse_record";
        match token.trim().parse::<WeightType>() {
            Ok(weight) => Ok(Weight::new(weight)),
            Err(_) => Err(MeshNetsError::new(FUNCTION_PATH, ErrorKind::Schema, format!("Expected a numeric weight, found '{}'.", token))),
        }
    }
}

// Color::RecordIO
impl RecordIO for Color {
    const SUPPORTED: bool = true;

    fn record_string(&self) -> String {
        self.color.to_underlying().to_string()
    }

    fn parse_record(token: &str) -> MeshNetsResult<Self> {
        const FUNCTION_PATH: &str = "Color::RecordIO::parse_record";
        match token.trim().parse::<u8>() {
            // out-of-range values clamp to the unset color
            Ok(value) => Ok(Color { color: BinaryColor::from(value) }),
            Err(_) => Err(MeshNetsError::new(FUNCTION_PATH, ErrorKind::Schema, format!("Expected a color value, found '{}'.", token))),
        }
    }
}

// Name::RecordIO
impl RecordIO for Name {
    const SUPPORTED: bool = true;

    fn record_string(&self) -> String {
        format!("{:?}", self.name)
    }

    fn parse_record(token: &str) -> MeshNetsResult<Self> {
        const FUNCTION_PATH: &str = "Name::RecordIO::parse_record";
        match unquote(token.trim()) {
            Some(name) => Ok(Name { name }),
            None => Err(MeshNetsError::new(FUNCTION_PATH, ErrorKind::Schema, format!("Expected a quoted string, found '{}'.", token))),
        }
    }
}

fn unquote(token: &str) -> Option<String> {
    let inner = token.strip_prefix('"')?.strip_suffix('"')?;
    let mut result = String::with_capacity(inner.len());
    let mut characters = inner.chars();
    while let Some(character) = characters.next() {
        if character != '\\' {
            result.push(character);
            continue;
        }
        match characters.next()? {
            'n' => result.push('\n'),
            'r' => result.push('\r'),
            't' => result.push('\t'),
            '"' => result.push('"'),
            '\\' => result.push('\\'),
            other => {
                result.push('\\');
                result.push(other);
            },
        }
    }
    Some(result)
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * HUMAN-READABLE RENDERING                                                          *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



bitflags! {
    /// # Rendering options
    ///
    /// Without [`FormatOptions::VERBOSE`] the rendering is concise: a `<directedness>
    /// N E` header followed by one `- <id> : <e1> <e2> …` line per vertex. The
    /// attribute flags append the records of serializable attribute types.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct FormatOptions: u8 {
        const VERBOSE = 1;
        const WITH_VERTEX_ATTRIBUTES = 1 << 1;
        const WITH_EDGE_ATTRIBUTES = 1 << 2;
    }
}



/// A [`Display`] adapter over a graph; create one with [`Graph::display`].
pub struct GraphDisplay<'a, StorageType, VertexAttributeType, EdgeAttributeType>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
{
    graph: &'a Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
    options: FormatOptions,
}

// Graph::display
impl<StorageType, VertexAttributeType, EdgeAttributeType> Graph<StorageType, VertexAttributeType, EdgeAttributeType>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection + RecordIO,
    EdgeAttributeType: AttributeCollection + RecordIO,
{
    /// # Render the graph
    ///
    /// ## Description
    /// Returns a [`Display`] adapter rendering the graph under the given
    /// [`FormatOptions`].
    pub fn display(&self, options: FormatOptions) -> GraphDisplay<'_, StorageType, VertexAttributeType, EdgeAttributeType> {
        GraphDisplay { graph: self, options }
    }
}

// Graph::Display
//
// The plain rendering never touches the attribute records, so it stays available
// for graphs whose records are not serializable.
impl<StorageType, VertexAttributeType, EdgeAttributeType> Display for Graph<StorageType, VertexAttributeType, EdgeAttributeType>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection,
    EdgeAttributeType: AttributeCollection,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let directedness = if self.is_directed() { "directed" } else { "undirected" };
        writeln!(f, "{} {} {}", directedness, self.n_vertices(), self.n_unique_edges())?;
        for vertex in self.vertices() {
            write!(f, "- {} :", vertex.id())?;
            for (_key, edge) in &self.adjacent_edges(vertex.id()).unwrap() {
                write!(f, " [{}, {}]", edge.first(), edge.second())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// GraphDisplay::Display
impl<StorageType, VertexAttributeType, EdgeAttributeType> Display for GraphDisplay<'_, StorageType, VertexAttributeType, EdgeAttributeType>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection + RecordIO,
    EdgeAttributeType: AttributeCollection + RecordIO,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let directedness = if self.graph.is_directed() { "directed" } else { "undirected" };
        let with_vertex_attributes = self.options.contains(FormatOptions::WITH_VERTEX_ATTRIBUTES) && VertexAttributeType::SUPPORTED;
        let with_edge_attributes = self.options.contains(FormatOptions::WITH_EDGE_ATTRIBUTES) && EdgeAttributeType::SUPPORTED;

        let write_edge = |f: &mut fmt::Formatter<'_>, edge: &crate::Edge<EdgeAttributeType>| -> fmt::Result {
            if with_edge_attributes {
                write!(f, "[{}, {} | {}]", edge.first(), edge.second(), edge.attributes.record_string())
            } else {
                write!(f, "[{}, {}]", edge.first(), edge.second())
            }
        };

        if self.options.contains(FormatOptions::VERBOSE) {
            writeln!(f, "type: {}", directedness)?;
            writeln!(f, "number of vertices: {}", self.graph.n_vertices())?;
            writeln!(f, "number of edges: {}", self.graph.n_unique_edges())?;
            writeln!(f, "vertices:")?;
            for vertex in self.graph.vertices() {
                if with_vertex_attributes {
                    writeln!(f, "- {} {}", vertex.id(), vertex.attributes.record_string())?;
                } else {
                    writeln!(f, "- {}", vertex.id())?;
                }
                writeln!(f, "  adjacent edges:")?;
                for (_key, edge) in &self.graph.adjacent_edges(vertex.id()).unwrap() {
                    write!(f, "\t- ")?;
                    write_edge(f, edge)?;
                    writeln!(f)?;
                }
            }
        } else {
            writeln!(f, "{} {} {}", directedness, self.graph.n_vertices(), self.graph.n_unique_edges())?;
            for vertex in self.graph.vertices() {
                write!(f, "- {}", vertex.id())?;
                if with_vertex_attributes {
                    write!(f, " {}", vertex.attributes.record_string())?;
                }
                write!(f, " :")?;
                for (_key, edge) in &self.graph.adjacent_edges(vertex.id()).unwrap() {
                    write!(f, " ")?;
                    write_edge(f, edge)?;
                }
                writeln!(f)?;
            }
        }

        Ok(())
    }
}





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * FILESYSTEM WRAPPERS                                                               *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



pub(crate) fn stream_failure(function_path: &str, error: std::io::Error) -> MeshNetsError {
    MeshNetsError::new(function_path, ErrorKind::Io, format!("Stream failure: {}.", error))
}

/// # Save a graph to a new file
///
/// ## Description
/// Serialize the graph in the [graph specification format][gsf] into a  new  file.
/// Saving over an existing path is refused with an [I/O][ErrorKind::Io]  error;  use
/// [`save_append`] to extend an existing file.
pub fn save<StorageType, VertexAttributeType, EdgeAttributeType>(
    graph: &Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
    path: impl AsRef<Path>,
    options: FormatOptions,
) -> MeshNetsResult<()>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection + RecordIO,
    EdgeAttributeType: AttributeCollection + RecordIO,
{
    const FUNCTION_PATH: &str = "io::save";
    let path = path.as_ref();
    if path.exists() {
        return Err(MeshNetsError::new(FUNCTION_PATH, ErrorKind::Io, format!("The file '{}' already exists.", path.display())));
    }
    let file = File::create(path).map_err(|e| stream_failure(FUNCTION_PATH, e))?;
    let mut writer = BufWriter::new(file);
    gsf::write_graph(graph, &mut writer, options)?;
    writer.flush().map_err(|e| stream_failure(FUNCTION_PATH, e))?;
    Ok(())
}

/// # Append a graph to an existing file
///
/// ## Description
/// Like [`save`], but the target must already exist and be a regular file.
pub fn save_append<StorageType, VertexAttributeType, EdgeAttributeType>(
    graph: &Graph<StorageType, VertexAttributeType, EdgeAttributeType>,
    path: impl AsRef<Path>,
    options: FormatOptions,
) -> MeshNetsResult<()>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection + RecordIO,
    EdgeAttributeType: AttributeCollection + RecordIO,
{
    const FUNCTION_PATH: &str = "io::save_append";
    let path = path.as_ref();
    if !path.exists() {
        return Err(MeshNetsError::new(FUNCTION_PATH, ErrorKind::Io, format!("The file '{}' doesn't exist.", path.display())));
    }
    if !path.is_file() {
        return Err(MeshNetsError::new(FUNCTION_PATH, ErrorKind::Io, format!("The path '{}' is not a regular file.", path.display())));
    }
    let file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| stream_failure(FUNCTION_PATH, e))?;
    let mut writer = BufWriter::new(file);
    gsf::write_graph(graph, &mut writer, options)?;
    writer.flush().map_err(|e| stream_failure(FUNCTION_PATH, e))?;
    Ok(())
}

/// # Load a graph from a file
///
/// ## Description
/// Parse a graph in the [graph specification format][gsf] from a regular file.  The
/// stream's directional flag must match the requested graph type and  its  attribute
/// flags must match the record types' serializability; see  [`gsf::read_graph`]  for
/// the error taxonomy.
pub fn load<StorageType, VertexAttributeType, EdgeAttributeType>(
    path: impl AsRef<Path>,
) -> MeshNetsResult<Graph<StorageType, VertexAttributeType, EdgeAttributeType>>
where
    StorageType: Storage<EdgeAttributeType>,
    VertexAttributeType: AttributeCollection + RecordIO,
    EdgeAttributeType: AttributeCollection + RecordIO,
{
    const FUNCTION_PATH: &str = "io::load";
    let path = path.as_ref();
    if !path.exists() {
        return Err(MeshNetsError::new(FUNCTION_PATH, ErrorKind::Io, format!("The file '{}' doesn't exist.", path.display())));
    }
    if !path.is_file() {
        return Err(MeshNetsError::new(FUNCTION_PATH, ErrorKind::Io, format!("The path '{}' is not a regular file.", path.display())));
    }
    let file = File::open(path).map_err(|e| stream_failure(FUNCTION_PATH, e))?;
    gsf::read_graph(BufReader::new(file))
}
