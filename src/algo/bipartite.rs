/*!
# Bipartite Graph Algorithms

Functionality includes:
- Representing a bipartition of the node set
- Testing whether a graph is bipartite via BFS two-coloring
- Computing the bipartition if one exists
- Verifying that a given bipartition is valid for a graph
*/

use std::collections::VecDeque;
use std::fmt::Debug;

use itertools::Itertools;
use stream_bitset::prelude::*;

use crate::{edge::*, node::*, ops::*};

/// A bipartition of the node set.
///
/// - Nodes with color 0 are considered to be on the **left** (A) side
/// - Nodes with color 1 are considered to be on the **right** (B) side
///
/// Only the set contents are meaningful: which side is "left" depends on
/// the coloring roots, but the two sides always form a disjoint cover of
/// all vertices.
#[derive(Clone)]
pub struct Bipartition {
    /// Set bits mark the right (1) side; all other nodes are on the left.
    right: NodeBitSet,
    n: NumNodes,
}

impl Bipartition {
    /// Returns the number of nodes covered by both sides together
    pub fn number_of_nodes(&self) -> NumNodes {
        self.n
    }

    /// Returns `true` if the node is on the left (0) side of the partition.
    pub fn is_on_left_side(&self, u: Node) -> bool {
        !self.right.get_bit(u)
    }

    /// Returns `true` if the node is on the right (1) side of the partition.
    pub fn is_on_right_side(&self, u: Node) -> bool {
        self.right.get_bit(u)
    }

    /// Returns the left side in ascending order
    pub fn left(&self) -> impl Iterator<Item = Node> + '_ {
        (0..self.n).filter(|&u| !self.right.get_bit(u))
    }

    /// Returns the right side in ascending order
    pub fn right(&self) -> impl Iterator<Item = Node> + '_ {
        self.right.bitmask_stream().iter_set_bits()
    }

    /// Returns the number of nodes on the left side
    pub fn left_size(&self) -> NumNodes {
        self.n - self.right_size()
    }

    /// Returns the number of nodes on the right side
    pub fn right_size(&self) -> NumNodes {
        self.right.cardinality() as NumNodes
    }
}

impl Debug for Bipartition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bipartition")
            .field("left", &self.left().collect_vec())
            .field("right", &self.right().collect_vec())
            .finish()
    }
}

/// A trait for testing and computing bipartitions in graphs.
pub trait BipartiteTest: AdjacencyList + Sized {
    /// Computes a valid bipartition of the graph, if one exists.
    /// Returns `None` if the graph is not bipartite.
    ///
    /// Coloring proceeds by BFS: roots are picked in ascending vertex
    /// order and always receive color 0, neighbors alternate. The search
    /// aborts on the first edge whose endpoints received equal colors.
    ///
    /// # Examples
    /// ```
    /// use graphkind::{prelude::*, algo::*};
    ///
    /// let g = AdjSetUndir::try_from_edges(5, [(0, 2), (0, 3), (0, 4), (1, 2)]).unwrap();
    ///
    /// let bip = g.compute_bipartition().unwrap();
    /// assert_eq!(bip.left().collect::<Vec<_>>(), vec![0, 1]);
    /// assert_eq!(bip.right().collect::<Vec<_>>(), vec![2, 3, 4]);
    /// ```
    fn compute_bipartition(&self) -> Option<Bipartition> {
        let mut visited = self.vertex_bitset_unset();
        let mut right = self.vertex_bitset_unset();
        let mut queue = VecDeque::new();

        for root in self.vertices() {
            if visited.get_bit(root) {
                continue;
            }

            // the root of every BFS tree is colored 0
            visited.set_bit(root);
            queue.push_back(root);

            while let Some(u) = queue.pop_front() {
                let u_on_right = right.get_bit(u);
                for v in self.neighbors_of(u) {
                    if !visited.set_bit(v) {
                        if !u_on_right {
                            right.set_bit(v);
                        }
                        queue.push_back(v);
                    } else if right.get_bit(v) == u_on_right {
                        return None;
                    }
                }
            }
        }

        Some(Bipartition {
            right,
            n: self.number_of_nodes(),
        })
    }

    /// Tests whether the graph is bipartite.
    ///
    /// # Examples
    /// ```
    /// use graphkind::{prelude::*, algo::*};
    ///
    /// let g = AdjSetUndir::try_from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    /// assert!(g.is_bipartite());
    /// ```
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition().is_some()
    }

    /// Tests whether the given candidate partition is valid, i.e. whether
    /// every edge crosses between the two sides.
    fn is_bipartition(&self, bipartition: &Bipartition) -> bool {
        self.edges(true)
            .all(|Edge(u, v)| bipartition.is_on_left_side(u) != bipartition.is_on_left_side(v))
    }
}

impl<G> BipartiteTest for G where G: AdjacencyList + Sized {}
