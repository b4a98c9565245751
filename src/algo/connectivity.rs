/*!
Connected components of an undirected graph.

[`ConnectedComponents`] emits one node list per component by repeatedly
draining a restartable BFS. Component ids assigned by
[`Connectivity::component_labels`] follow the BFS launch order — roots are
picked in ascending vertex order, so ids grow monotonically with the
smallest vertex of each component.
*/

use itertools::Itertools;

use super::traversal::*;
use crate::{node::*, ops::*};

/// Iterator over the connected components of a graph, one `Vec<Node>` per
/// component in BFS launch order.
pub struct ConnectedComponents<'a, G: AdjacencyList> {
    bfs: Bfs<'a, G>,
}

impl<'a, G: AdjacencyList> ConnectedComponents<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self {
            bfs: graph.bfs(0),
        }
    }
}

impl<G: AdjacencyList> Iterator for ConnectedComponents<'_, G> {
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let cc = self.bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !self.bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}

/// The component id of every vertex plus the component count.
///
/// Ids are dense (`0..number_of_components`) and assigned in ascending
/// order of each component's smallest vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentLabels {
    labels: Vec<NumNodes>,
    count: NumNodes,
}

impl ComponentLabels {
    /// Returns the number of connected components
    pub fn number_of_components(&self) -> NumNodes {
        self.count
    }

    /// Returns *true* if the graph consists of exactly one component
    pub fn is_connected(&self) -> bool {
        self.count == 1
    }

    /// Returns the component id of a given vertex.
    /// ** Panics if `u >= n` **
    pub fn label_of(&self, u: Node) -> NumNodes {
        self.labels[u as usize]
    }

    /// Returns the component id of every vertex, index-aligned
    pub fn labels(&self) -> &[NumNodes] {
        &self.labels
    }
}

/// Provides connectivity queries directly on graph values
pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over the connected components of the graph
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Computes the component id of every vertex.
    ///
    /// # Examples
    /// ```
    /// use graphkind::{prelude::*, algo::*};
    ///
    /// let g = AdjSetUndir::try_from_edges(5, [(0, 1), (3, 4)]).unwrap();
    ///
    /// let labels = g.component_labels();
    /// assert_eq!(labels.number_of_components(), 3);
    /// assert_eq!(labels.labels(), [0, 0, 1, 2, 2]);
    /// ```
    fn component_labels(&self) -> ComponentLabels {
        let mut labels = vec![INVALID_NODE; self.len()];
        let mut count = 0;

        for (cid, component) in self.connected_components().enumerate() {
            for u in component {
                labels[u as usize] = cid as NumNodes;
            }
            count += 1;
        }

        ComponentLabels { labels, count }
    }

    /// Returns *true* if the graph is connected.
    ///
    /// # Examples
    /// ```
    /// use graphkind::{prelude::*, algo::*};
    ///
    /// let g = AdjSetUndir::try_from_edges(3, [(0, 1), (1, 2)]).unwrap();
    /// assert!(g.is_connected());
    /// ```
    fn is_connected(&self) -> bool {
        self.component_labels().is_connected()
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}
