/*!
# Graph Algorithms

This module provides the **traversal-based algorithms** the family
classifier builds on. All of them are re-exported at the top level of this
module, so you can simply do:
```rust
use graphkind::algo::*;
```
and gain access to BFS, connected components and bipartite two-coloring.
Where possible, algorithms are provided as **iterators**, making it easy to
consume results lazily.
*/

mod bipartite;
mod connectivity;
mod traversal;

pub use bipartite::*;
pub use connectivity::*;
pub use traversal::*;
