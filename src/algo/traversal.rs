/*!
Breadth-first traversal.

The [`Bfs`] iterator visits all nodes reachable from a starting node in
breadth-first order. After a search comes to a hold, it can be restarted at
the smallest yet unvisited node via [`Bfs::try_restart_at_unvisited`] —
always scanning vertices in ascending index order, so traversal-derived
structures (component ids, colorings) are reproducible across runs.
*/

use std::collections::VecDeque;

use crate::{node::*, ops::*};

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
///
/// Maintains an explicit frontier queue of nodes to visit and a bitset of
/// already discovered nodes.
pub struct Bfs<'a, G> {
    graph: &'a G,
    visited: NodeBitSet,
    queue: VecDeque<Node>,
}

impl<'a, G: AdjacencyList> Bfs<'a, G> {
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(start < graph.number_of_nodes());

        let mut visited = graph.vertex_bitset_unset();
        visited.set_bit(start);

        Self {
            graph,
            visited,
            queue: VecDeque::from(vec![start]),
        }
    }

    /// Checks if a given node `u` has already been discovered.
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get_bit(u)
    }

    /// Tries to restart the search at the smallest yet unvisited node and
    /// returns true iff successful. Requires that search came to a hold
    /// earlier, i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.queue.is_empty());
        match self.graph.vertices().find(|&u| !self.visited.get_bit(u)) {
            None => false,
            Some(u) => {
                self.visited.set_bit(u);
                self.queue.push_back(u);
                true
            }
        }
    }
}

impl<G: AdjacencyList> Iterator for Bfs<'_, G> {
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            // set_bit reports whether the bit was set before
            if !self.visited.set_bit(v) {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.graph.len()))
    }
}

/// Provides convenient traversal methods directly on graph values
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use graphkind::{prelude::*, algo::*};
    ///
    /// let g = AdjSetUndir::try_from_edges(3, [(0, 1), (1, 2)]).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> Bfs<'_, Self> {
        Bfs::new(self, start)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
