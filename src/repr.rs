/*!
# Graph Representation

The one storage backend in this crate: an **adjacency-set** representation
of an undirected simple graph. Each vertex owns a hash set of its neighbors,
so duplicate detection on insert is O(1) and degree queries are O(1).

The representation upholds three invariants:
- adjacency is symmetric: `u ∈ adj[v]` iff `v ∈ adj[u]`,
- no self-loops and no parallel edges (insertion fails with
  [`InvalidEdge`] instead),
- the edge counter equals half the sum of all neighbor-set sizes.
*/

use fxhash::FxHashSet;

use crate::{edge::*, node::*, ops::*};

/// An undirected simple graph with one neighbor set per vertex.
///
/// Constructed empty via [`GraphNew::new`] with a fixed node count and
/// mutated only through [`GraphEdgeEditing::add_edge`]; classification
/// treats it as read-only.
#[derive(Debug, Clone)]
pub struct AdjSetUndir {
    nbs: Vec<FxHashSet<Node>>,
    num_edges: NumEdges,
}

impl GraphNew for AdjSetUndir {
    fn new(n: NumNodes) -> Self {
        assert!(n > 0);
        Self {
            nbs: vec![FxHashSet::default(); n as usize],
            num_edges: 0,
        }
    }
}

impl GraphNodeOrder for AdjSetUndir {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl GraphEdgeOrder for AdjSetUndir {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjSetUndir {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for AdjSetUndir {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].contains(&v)
    }
}

impl GraphEdgeEditing for AdjSetUndir {
    fn add_edge(&mut self, u: Node, v: Node) -> Result<(), InvalidEdge> {
        if u == v {
            return Err(InvalidEdge::SelfLoop(u));
        }
        if self.nbs[u as usize].contains(&v) {
            debug_assert!(self.nbs[v as usize].contains(&u));
            return Err(InvalidEdge::Duplicate(Edge(u, v).normalized()));
        }

        self.nbs[u as usize].insert(v);
        self.nbs[v as usize].insert(u);
        self.num_edges += 1;
        Ok(())
    }
}
