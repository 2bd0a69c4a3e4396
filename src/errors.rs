use std::{error::Error, fmt::Display};





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * LIBRARY-SPECIFIC INSTANCE OF RESULT                                               *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



pub type MeshNetsResult<OkType> = Result<OkType, MeshNetsError>;





// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * ERRORS                                                                            *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Error classes
///
/// ## Description
/// Every [`MeshNetsError`] belongs to exactly one of these classes. The class  is  what
/// callers should branch on; the message is for humans.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// A vertex ID outside of the range `[0, n_vertices)`.
    OutOfRange,
    /// An edge key whose edge is no longer (or never was) owned by the graph.
    InvalidReference,
    /// A removal request for an edge that is not stored.
    NotFound,
    /// An attempt to occupy an already occupied adjacency matrix cell.
    Conflict,
    /// An edge with a negative weight fed to an algorithm that forbids them.
    NegativeWeight,
    /// A path reconstruction request for a vertex without a predecessor.
    Unreachable,
    /// A malformed or inconsistent graph specification stream.
    Schema,
    /// A filesystem-level failure.
    Io,
}

// Implementation of Display
impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ErrorKind::OutOfRange => "out of range",
            ErrorKind::InvalidReference => "invalid reference",
            ErrorKind::NotFound => "not found",
            ErrorKind::Conflict => "conflict",
            ErrorKind::NegativeWeight => "negative weight",
            ErrorKind::Unreachable => "unreachable",
            ErrorKind::Schema => "schema",
            ErrorKind::Io => "io",
        })
    }
}



#[derive(Debug)]
pub struct MeshNetsError {
    kind: ErrorKind,
    message: String,
}

// Implementation of MeshNetsError
impl MeshNetsError {
    pub fn new<StringType>(function_path: &str, kind: ErrorKind, message: StringType) -> Self
    where
        StringType: Into<String>
    {
        MeshNetsError { kind, message: format!("{}. {}", function_path, message.into()) }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

// Implementation of Display
impl Display for MeshNetsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(format!("MeshNetsError ({}): {}", self.kind, self.message).as_str())
    }
}

// Implementation of Error
impl Error for MeshNetsError {}
