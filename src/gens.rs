/*!
# Substructure Generators

Utility methods to wire common **substructures** into an already existing
graph:

- **Paths**
- **Cycles**
- **Stars**
- **Cliques**
- **Bicliques** (complete bipartite subgraphs)

These are the building blocks of the family fixtures used throughout the
test suite.

# Example

```rust
use graphkind::{prelude::*, gens::*};

let mut g = AdjSetUndir::new(5);
g.connect_path([0, 1, 2]).unwrap();
g.connect_cycle([2, 3, 4]).unwrap();

assert_eq!(g.number_of_edges(), 5);
```
*/

use itertools::Itertools;

use crate::{node::*, ops::*};

/// Trait for creating additional **substructures** (paths, cycles, stars,
/// cliques, bicliques) inside an already existing graph.
///
/// Implemented for all graphs that support edge insertion and adjacency
/// queries.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    ///
    /// Each consecutive pair of nodes is connected by a single edge.
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<(), InvalidEdge>
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**.
    ///
    /// - Consecutive nodes are connected by edges.
    /// - Additionally, the last node is connected back to the first.
    ///
    /// At least three distinct nodes are needed for a simple cycle; fewer
    /// produce an [`InvalidEdge`] failure.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<(), InvalidEdge>
    where
        C: IntoIterator<Item = Node>;

    /// Connects `center` to every node in `leaves`, forming a **star**.
    fn connect_star<L>(&mut self, center: Node, leaves: L) -> Result<(), InvalidEdge>
    where
        L: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** (complete subgraph).
    /// Edges that already exist are skipped.
    fn connect_clique(&mut self, nodes: &[Node]) -> Result<(), InvalidEdge>;

    /// Connects every node of `left` with every node of `right`, forming a
    /// **biclique**. Edges that already exist are skipped.
    fn connect_biclique(&mut self, left: &[Node], right: &[Node]) -> Result<(), InvalidEdge>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing + AdjacencyTest,
{
    fn connect_path<P>(&mut self, nodes_on_path: P) -> Result<(), InvalidEdge>
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C) -> Result<(), InvalidEdge>
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        // a rather tedious implementation to avoid cloning the iterator
        if let Some(first) = iter.next() {
            let mut prev = first;
            for cur in iter {
                self.add_edge(prev, cur)?;
                prev = cur;
            }

            self.add_edge(prev, first)?;
        }
        Ok(())
    }

    fn connect_star<L>(&mut self, center: Node, leaves: L) -> Result<(), InvalidEdge>
    where
        L: IntoIterator<Item = Node>,
    {
        for leaf in leaves {
            self.add_edge(center, leaf)?;
        }
        Ok(())
    }

    fn connect_clique(&mut self, nodes: &[Node]) -> Result<(), InvalidEdge> {
        for (i, &u) in nodes.iter().enumerate() {
            for &v in &nodes[i + 1..] {
                if u != v && !self.has_edge(u, v) {
                    self.add_edge(u, v)?;
                }
            }
        }
        Ok(())
    }

    fn connect_biclique(&mut self, left: &[Node], right: &[Node]) -> Result<(), InvalidEdge> {
        for &u in left {
            for &v in right {
                if u != v && !self.has_edge(u, v) {
                    self.add_edge(u, v)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::edge::Edge;
    use crate::repr::AdjSetUndir;

    #[test]
    fn connect_path() {
        {
            let mut g = AdjSetUndir::new(6);
            g.connect_path([]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjSetUndir::new(6);
            g.connect_path([1]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = AdjSetUndir::new(6);
            g.connect_path([0, 3, 1, 4]).unwrap();
            assert_eq!(
                g.ordered_edges(true),
                vec![Edge(0, 3), Edge(1, 3), Edge(1, 4)]
            );
        }
    }

    #[test]
    fn connect_cycle() {
        {
            let mut g = AdjSetUndir::new(6);
            g.connect_cycle([]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            // a single node would need a self-loop to close the cycle
            let mut g = AdjSetUndir::new(6);
            assert_eq!(g.connect_cycle([1]), Err(InvalidEdge::SelfLoop(1)));
        }

        {
            let mut g = AdjSetUndir::new(6);
            g.connect_cycle([0, 3, 1, 4]).unwrap();
            assert_eq!(
                g.ordered_edges(true),
                vec![Edge(0, 3), Edge(0, 4), Edge(1, 3), Edge(1, 4)]
            );
        }
    }

    #[test]
    fn connect_star() {
        let mut g = AdjSetUndir::new(5);
        g.connect_star(2, [0, 1, 3, 4]).unwrap();

        assert_eq!(g.number_of_edges(), 4);
        assert_eq!(g.degree_of(2), 4);
        assert!(g.neighbors_of(2).all(|v| g.degree_of(v) == 1));
    }

    #[test]
    fn connect_clique() {
        let mut g = AdjSetUndir::new(6);
        g.connect_clique(&[1, 2, 4]).unwrap();
        assert_eq!(g.number_of_edges(), 3);

        // overlapping cliques skip the edges that already exist
        g.connect_clique(&[1, 2, 3]).unwrap();
        assert_eq!(g.number_of_edges(), 5);
    }

    #[test]
    fn connect_biclique() {
        let mut g = AdjSetUndir::new(5);
        g.connect_biclique(&[0, 1], &[2, 3, 4]).unwrap();

        assert_eq!(g.number_of_edges(), 6);
        for &u in &[0, 1] {
            for &v in &[2, 3, 4] {
                assert!(g.has_edge(u, v));
            }
        }
        assert!(!g.has_edge(0, 1));
        assert!(!g.has_edge(2, 3));
    }
}
