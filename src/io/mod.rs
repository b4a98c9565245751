/*!
# IO

Reading graphs from the plain-text edge-list format.

An input file consists of a header line `n m` followed by `m` edge lines
`u v`. Blank lines and comment lines are skipped everywhere. Whether the
edge indices are 0-based or 1-based is auto-detected, see
[`EdgeListReader`] for the exact rule.

[`GraphReader`] abstracts over readers for a specific format;
[`EdgeListRead`] is the shorthand for reading with default settings.
*/

pub mod edge_list;

pub use edge_list::*;

use crate::node::*;
use crate::ops::InvalidEdge;

/// Everything that can go wrong between a text source and a valid graph.
///
/// None of these are recovered internally: the per-file driver substitutes
/// an error report for the affected file and moves on.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The underlying source could not be read.
    #[error("cannot read input: {0}")]
    Io(#[from] std::io::Error),

    /// Empty file, bad header, a non-integer token, or a wrong token count.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// An edge endpoint fell outside `0..n` after index normalization.
    #[error("edge endpoint {found} out of range (graph has vertices 0..{n})")]
    IndexOutOfRange { found: i64, n: NumNodes },

    /// The edge list contained a self-loop or a parallel edge.
    #[error(transparent)]
    InvalidEdge(#[from] InvalidEdge),
}

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`](std::io::BufRead) instance and a convenience wrapper to
/// read directly from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid representation
    /// of a graph in the expected format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G, ParseError>
    where
        R: std::io::BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are not a valid representation of a graph in the expected format.
    fn try_read_graph_file<P>(&self, path: P) -> Result<G, ParseError>
    where
        P: AsRef<std::path::Path>,
    {
        self.try_read_graph(std::io::BufReader::new(std::fs::File::open(path)?))
    }
}
