use itertools::Itertools;

use crate::{edge::*, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V in ascending index order.
    ///
    /// The ascending order is relied upon by all traversal-based algorithms
    /// to keep their outputs deterministic.
    fn vertices(&self) -> std::ops::Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + GraphEdgeOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the degrees of all vertices, index-aligned
    /// with `self.vertices()`
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges of the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        let mut edges = self.edges(only_normalized).collect_vec();
        edges.sort_unstable();
        edges
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes.
    /// ** Panics if `n == 0` **
    fn new(n: NumNodes) -> Self;
}

/// Rejected edge insertions on a simple graph.
///
/// Simple graphs carry neither self-loops nor parallel edges; submitting
/// either is an error of the caller, not of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidEdge {
    /// The edge connects a vertex to itself.
    #[error("self-loops are not allowed: ({0},{0})")]
    SelfLoop(Node),

    /// The edge (in either orientation) is already present.
    #[error("parallel edges are not allowed: {0} already exists")]
    Duplicate(Edge),
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing {
    /// Adds the edge `{u, v}` to the graph.
    ///
    /// Fails with [`InvalidEdge`] if `u == v` or the edge already exists
    /// (checked in either direction).
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node) -> Result<(), InvalidEdge>;

    /// Adds the edge `{u, v}` unless it is a self-loop or already present.
    /// Returns *true* exactly if the edge was inserted.
    /// ** Panics if `u >= n || v >= n` **
    fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        self.add_edge(u, v).is_ok()
    }

    /// Adds all edges in the collection, failing on the first invalid one
    fn add_edges<I, E>(&mut self, edges: I) -> Result<(), InvalidEdge>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v)?;
        }
        Ok(())
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a
/// number of nodes
pub trait GraphFromEdges: Sized {
    /// Creates a graph from a number of nodes and an iterator over edges
    fn try_from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self, InvalidEdge>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromEdges for G {
    fn try_from_edges<I, E>(n: NumNodes, edges: I) -> Result<Self, InvalidEdge>
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        let mut graph = Self::new(n);
        graph.add_edges(edges)?;
        Ok(graph)
    }
}
