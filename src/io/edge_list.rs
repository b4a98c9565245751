//! # EdgeList
//!
//! The EdgeList-Format consists of a header line `n m`, followed by `m`
//! non-comment lines `u v` each representing one undirected edge.
//!
//! Whether the edges number their vertices `0..n` or `1..=n` is
//! auto-detected from the data: a 0-based index can be at most `n - 1`, so
//! a maximum index equal to `n` can only come from 1-based numbering and
//! all indices are shifted down by one. Any other maximum leaves the
//! indices untouched. The rule cannot tell apart inputs that mix both
//! bases or skip vertex numbers — those are accepted as 0-based as long as
//! every index stays in range.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use super::{GraphReader, ParseError};
use crate::{edge::*, node::*, ops::*};

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = c.into();
        self
    }
}

impl<G: GraphNew + GraphEdgeEditing> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G, ParseError> {
        // gather all data lines first: the base of the edge indices can
        // only be decided once every edge has been seen
        let mut data = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(self.comment_identifier.as_str()) {
                continue;
            }
            data.push(trimmed.to_string());
        }

        if data.is_empty() {
            return Err(ParseError::MalformedInput("file is empty".into()));
        }

        let (n, m) = parse_header(&data[0])?;
        if data.len() - 1 < m as usize {
            return Err(ParseError::MalformedInput(format!(
                "expected {} edge lines, found {}",
                m,
                data.len() - 1
            )));
        }

        let mut raw_edges = Vec::with_capacity(m as usize);
        let mut max_idx: i64 = -1;
        for line in &data[1..1 + m as usize] {
            let (u, v) = parse_int_pair(line, "edge line")?;
            max_idx = max_idx.max(u).max(v);
            raw_edges.push((u, v));
        }

        // 1-based numbering uses 1..=n, so its maximum is n; a 0-based
        // maximum never exceeds n - 1
        let shift = (max_idx == n as i64) as i64;

        let mut graph = G::new(n);
        for (u, v) in raw_edges {
            let (u, v) = (u - shift, v - shift);
            for x in [u, v] {
                if !(0..n as i64).contains(&x) {
                    return Err(ParseError::IndexOutOfRange { found: x, n });
                }
            }
            graph.add_edge(u as Node, v as Node)?;
        }

        Ok(graph)
    }
}

/// Splits a line into exactly two integers
fn parse_int_pair(line: &str, what: &str) -> Result<(i64, i64), ParseError> {
    let mut parts = line.split_whitespace();

    let next_int = |parts: &mut std::str::SplitWhitespace<'_>| {
        let token = parts.next().ok_or_else(|| {
            ParseError::MalformedInput(format!("{what} must contain two integers: `{line}`"))
        })?;
        token.parse::<i64>().map_err(|_| {
            ParseError::MalformedInput(format!("{what} holds a non-integer token `{token}`"))
        })
    };

    let u = next_int(&mut parts)?;
    let v = next_int(&mut parts)?;

    if parts.next().is_some() {
        return Err(ParseError::MalformedInput(format!(
            "{what} must contain exactly two integers: `{line}`"
        )));
    }

    Ok((u, v))
}

/// Parses the header `n m` with `n >= 1` and `m >= 0`
fn parse_header(line: &str) -> Result<(NumNodes, NumEdges), ParseError> {
    let (n, m) = parse_int_pair(line, "header")?;

    if n < 1 || m < 0 {
        return Err(ParseError::MalformedInput(format!(
            "header requires n >= 1 and m >= 0, got n = {n}, m = {m}"
        )));
    }

    let n = NumNodes::try_from(n)
        .map_err(|_| ParseError::MalformedInput(format!("number of nodes {n} is too large")))?;
    let m = NumEdges::try_from(m)
        .map_err(|_| ParseError::MalformedInput(format!("number of edges {m} is too large")))?;

    Ok((n, m))
}

/// Trait for creating graphs from an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self, ParseError>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::classify::Classify;
    use crate::repr::AdjSetUndir;

    fn read(input: &str) -> Result<AdjSetUndir, ParseError> {
        AdjSetUndir::try_read_edge_list(input.as_bytes())
    }

    #[test]
    fn reads_zero_based_input() {
        let g = read("4 4\n0 1\n1 2\n2 3\n3 0\n").unwrap();

        assert_eq!(g.number_of_nodes(), 4);
        assert_eq!(g.number_of_edges(), 4);
        assert!(g.has_edge(3, 0));
    }

    #[test]
    fn one_based_input_is_shifted() {
        // maximum index 4 equals n, which only 1-based numbering produces
        let g = read("4 4\n1 2\n2 3\n3 4\n4 1\n").unwrap();

        assert_eq!(
            g.ordered_edges(true),
            vec![Edge(0, 1), Edge(0, 3), Edge(1, 2), Edge(2, 3)]
        );
    }

    #[test]
    fn both_bases_classify_identically() {
        let one_based = read("4 4\n1 2\n2 3\n3 4\n4 1\n").unwrap();
        let zero_based = read("4 4\n0 1\n1 2\n2 3\n3 0\n").unwrap();

        assert_eq!(one_based.classify().families, zero_based.classify().families);
        assert_eq!(one_based.classify().degrees, zero_based.classify().degrees);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let g = read("# a triangle\n\n3 3\n0 1\n\n  # interleaved comment\n1 2\n2 0\n").unwrap();
        assert_eq!(g.number_of_edges(), 3);
    }

    #[test]
    fn lines_after_the_last_edge_are_ignored() {
        let g = read("2 1\n0 1\nthis line is never parsed\n").unwrap();
        assert_eq!(g.number_of_edges(), 1);
    }

    #[test]
    fn rejects_empty_files() {
        for input in ["", "\n\n", "# only comments\n"] {
            assert!(matches!(read(input), Err(ParseError::MalformedInput(_))));
        }
    }

    #[test]
    fn rejects_bad_headers() {
        for input in ["5\n", "5 4 3\n", "five 4\n", "0 0\n", "4 -1\n"] {
            assert!(matches!(read(input), Err(ParseError::MalformedInput(_))));
        }
    }

    #[test]
    fn rejects_missing_or_bad_edge_lines() {
        assert!(matches!(
            read("3 2\n0 1\n"),
            Err(ParseError::MalformedInput(_))
        ));
        assert!(matches!(
            read("3 1\n0 1 2\n"),
            Err(ParseError::MalformedInput(_))
        ));
        assert!(matches!(
            read("3 1\n0 x\n"),
            Err(ParseError::MalformedInput(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_endpoints() {
        // maximum 7 is neither n nor below it, so no shift is applied
        assert!(matches!(
            read("3 1\n0 7\n"),
            Err(ParseError::IndexOutOfRange { found: 7, n: 3 })
        ));
        assert!(matches!(
            read("3 1\n-1 2\n"),
            Err(ParseError::IndexOutOfRange { found: -1, n: 3 })
        ));
    }

    #[test]
    fn surfaces_graph_model_failures() {
        assert!(matches!(
            read("3 1\n1 1\n"),
            Err(ParseError::InvalidEdge(InvalidEdge::SelfLoop(_)))
        ));
        assert!(matches!(
            read("3 2\n0 1\n1 0\n"),
            Err(ParseError::InvalidEdge(InvalidEdge::Duplicate(_)))
        ));
    }
}
