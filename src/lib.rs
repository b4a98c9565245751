/*!
`graphkind` reads plain-text descriptions of **u**nlabelled, **u**nweighted,
**u**ndirected simple graphs and decides which of a fixed set of named graph
families each graph belongs to:

- the empty graph (no edges),
- the complete graph `K_n`,
- the cycle `C_n`,
- the star `S_k` (= `K_{1,k}`),
- bipartite graphs,
- the complete bipartite graph `K_{p,q}`.

A graph may match several families at once (every star is bipartite, the
triangle is both complete and a cycle), so all predicates run unconditionally
and the result is the full set of matches.

# Representation

Nodes are `u32` in the range `0..n` where `n` is the number of nodes; edges
are the tuple-struct `Edge(Node, Node)` with `Edge(u, v)` treated as
equivalent to `Edge(v, u)`. The only storage backend is
[`AdjSetUndir`](crate::repr::AdjSetUndir), an adjacency-set representation
that rejects self-loops and parallel edges at insertion time — exactly the
invariants the classification predicates rely on.

# Design

Graphs expose their structure through small capability traits ([`ops`]), and
every algorithm is generic over them: [`algo::Traversal`] for BFS,
[`algo::Connectivity`] for connected components, [`algo::BipartiteTest`] for
two-coloring, and [`classify::Classify`] for the family predicates
themselves. All of them come with blanket impls, so on any graph value you
can directly call `g.bfs(0)`, `g.is_connected()`, `g.is_bipartite()`, or
`g.classify()`.

# Usage

There are *4* submodules you probably want to interact with:
- [`prelude`] includes nodes, edges, the capability traits, and the graph
  representation,
- [`algo`] includes the traversal-based algorithms (BFS, connected
  components, bipartite two-coloring),
- [`classify`] includes the family predicates and the
  [`Classification`](crate::classify::Classification) record,
- [`io`] reads the edge-list input format (with 0-/1-based index
  auto-detection) and [`report`] renders the per-file text report.

```
use graphkind::{prelude::*, classify::*};

let g = AdjSetUndir::try_from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
let result = g.classify();

assert!(result.families.contains(&Family::Cycle { len: 4 }));
assert!(result.families.contains(&Family::Bipartite));
```

In most use-cases, `use graphkind::{prelude::*, algo::*, classify::*};`
suffices for your needs.
*/

pub mod algo;
pub mod classify;
pub mod edge;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod report;
pub mod repr;

/// `graphkind::prelude` includes definitions for nodes and edges, all basic
/// graph operation traits as well as the adjacency-set representation.
pub mod prelude {
    pub use super::{edge::*, node::*, ops::*, repr::*};
}
