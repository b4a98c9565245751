/*!
# Family Classification

Decides which of the six recognized graph families a graph belongs to:
empty, complete `K_n`, cycle `C_n`, star `S_k`, bipartite, and complete
bipartite `K_{p,q}`.

Each predicate is a total function over any well-formed simple graph,
including the degenerate single-vertex, zero-edge case. The predicates are
not mutually exclusive — [`Classify::classify`] runs all of them
unconditionally and collects every match into a [`Classification`] record.
*/

use std::fmt::{self, Display};

use itertools::Itertools;

use crate::algo::{BipartiteTest, Bipartition, Connectivity};
use crate::{edge::*, node::*, ops::*};

/// One recognized graph family together with its parameters.
///
/// The degenerate single-vertex graph is a member of almost everything:
/// it is empty, complete `K_1`, the star `S_0` and the complete
/// "bipartite" graph with parts of sizes 1 and 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// No edges at all
    Empty { n: NumNodes },
    /// All `n * (n - 1) / 2` edges present
    Complete { n: NumNodes },
    /// Connected, `n >= 3`, every vertex of degree two
    Cycle { len: NumNodes },
    /// One center adjacent to all `leaves` other vertices, which are
    /// pairwise non-adjacent
    Star { leaves: NumNodes },
    /// Two-colorable; the witness lives in [`Classification::bipartition`]
    Bipartite,
    /// Bipartite with every cross pair present; parts sorted ascending
    CompleteBipartite { p: NumNodes, q: NumNodes },
    /// Sentinel carried instead of an empty match list
    Unrecognized,
}

impl Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Empty { n } => write!(f, "empty graph on {n} vertices"),
            Family::Complete { n } => write!(f, "complete K{n}"),
            Family::Cycle { len } => write!(f, "cycle C{len}"),
            Family::Star { leaves } => write!(f, "star S{leaves}"),
            Family::Bipartite => write!(f, "bipartite"),
            Family::CompleteBipartite { p, q } => write!(f, "complete bipartite K{p},{q}"),
            Family::Unrecognized => write!(f, "none of the recognized families"),
        }
    }
}

/// The full classification result for one graph.
///
/// Produced fresh per graph by [`Classify::classify`] and never mutated
/// afterwards.
#[derive(Debug, Clone)]
pub struct Classification {
    /// Number of vertices
    pub n: NumNodes,
    /// Number of edges
    pub m: NumEdges,
    /// Per-vertex degrees, index-aligned with the vertices
    pub degrees: Vec<NumNodes>,
    /// All matched families, or the single [`Family::Unrecognized`] entry
    pub families: Vec<Family>,
    /// The two-coloring witness, present exactly if the graph is bipartite
    pub bipartition: Option<Bipartition>,
}

impl Classification {
    /// Returns *true* if the given family tag was matched
    pub fn matches(&self, family: &Family) -> bool {
        self.families.contains(family)
    }
}

/// The family predicates, available on every graph value.
pub trait Classify: AdjacencyList + BipartiteTest + Connectivity + Sized {
    /// Returns *true* if the graph has no edges
    fn is_empty(&self) -> bool {
        self.number_of_edges() == 0
    }

    /// Returns *true* if the graph is the complete graph `K_n`
    fn is_complete(&self) -> bool {
        let n = self.number_of_nodes() as u64;
        self.number_of_edges() as u64 == n * (n - 1) / 2
            && self.degrees().all(|d| d as u64 == n - 1)
    }

    /// Returns *true* if the graph is the cycle `C_n` (`n >= 3`)
    fn is_cycle(&self) -> bool {
        let n = self.number_of_nodes();
        n >= 3
            && self.number_of_edges() == n
            && self.degrees().all(|d| d == 2)
            && self.is_connected()
    }

    /// Returns `Some(k)` if the graph is the star `S_k`, i.e. one center
    /// of degree `n - 1` and `n - 1` leaves of degree one. The single
    /// vertex counts as `S_0`.
    ///
    /// Note that a lone edge (`n == 2`) is no star under this definition:
    /// both endpoints would qualify as the center.
    fn star_leaves(&self) -> Option<NumNodes> {
        let n = self.number_of_nodes();
        if n == 1 {
            return Some(0);
        }

        let centers = self.degrees().filter(|&d| d == n - 1).count();
        let leaves = self.degrees().filter(|&d| d == 1).count();

        (centers == 1 && leaves == n as usize - 1 && self.number_of_edges() == n - 1)
            .then_some(n - 1)
    }

    /// Returns the part sizes `(p, q)` sorted ascending if the graph is
    /// the complete bipartite graph over the given bipartition, i.e. every
    /// vertex of one side is adjacent to the whole other side.
    ///
    /// The single-vertex graph is trivially complete bipartite and
    /// reports `(1, 0)`.
    fn complete_bipartite_parts(&self, bipartition: &Bipartition) -> Option<(NumNodes, NumNodes)> {
        let (a, b) = (bipartition.left_size(), bipartition.right_size());

        if self.number_of_nodes() == 1 {
            return Some((a.max(b), a.min(b)));
        }

        let all_cross_pairs = bipartition.left().all(|u| self.degree_of(u) == b)
            && bipartition.right().all(|v| self.degree_of(v) == a)
            && self.number_of_edges() as u64 == a as u64 * b as u64;

        all_cross_pairs.then_some((a.min(b), a.max(b)))
    }

    /// Runs all family predicates and collects the matches.
    ///
    /// # Examples
    /// ```
    /// use graphkind::{prelude::*, classify::*};
    ///
    /// let g = AdjSetUndir::try_from_edges(3, [(0, 1), (1, 2), (2, 0)]).unwrap();
    /// let result = g.classify();
    ///
    /// // the triangle is both complete and a cycle, but not bipartite
    /// assert_eq!(
    ///     result.families,
    ///     vec![Family::Complete { n: 3 }, Family::Cycle { len: 3 }]
    /// );
    /// assert!(result.bipartition.is_none());
    /// ```
    fn classify(&self) -> Classification {
        let n = self.number_of_nodes();
        let m = self.number_of_edges();
        let degrees = self.degrees().collect_vec();
        let bipartition = self.compute_bipartition();

        let mut families = Vec::new();

        if self.is_empty() {
            families.push(Family::Empty { n });
        }
        if self.is_complete() {
            families.push(Family::Complete { n });
        }
        if self.is_cycle() {
            families.push(Family::Cycle { len: n });
        }
        if let Some(leaves) = self.star_leaves() {
            families.push(Family::Star { leaves });
        }
        if let Some(bip) = &bipartition {
            families.push(Family::Bipartite);
            if let Some((p, q)) = self.complete_bipartite_parts(bip) {
                families.push(Family::CompleteBipartite { p, q });
            }
        }

        if families.is_empty() {
            families.push(Family::Unrecognized);
        }

        Classification {
            n,
            m,
            degrees,
            families,
            bipartition,
        }
    }
}

impl<G> Classify for G where G: AdjacencyList + Sized {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gens::GeneratorSubstructures;
    use crate::repr::AdjSetUndir;

    fn kinds(graph: &AdjSetUndir) -> Vec<Family> {
        graph.classify().families
    }

    #[test]
    fn edgeless_graphs() {
        for n in 2..8 {
            let graph = AdjSetUndir::new(n);
            let families = kinds(&graph);

            assert!(families.contains(&Family::Empty { n }));
            assert!(families.contains(&Family::Bipartite));
            assert!(!families.contains(&Family::Complete { n }));
            assert!(!families.contains(&Family::Unrecognized));
        }
    }

    #[test]
    fn single_vertex_matches_almost_everything() {
        let graph = AdjSetUndir::new(1);

        assert_eq!(
            kinds(&graph),
            vec![
                Family::Empty { n: 1 },
                Family::Complete { n: 1 },
                Family::Star { leaves: 0 },
                Family::Bipartite,
                Family::CompleteBipartite { p: 1, q: 0 },
            ]
        );
    }

    #[test]
    fn complete_graphs() {
        for n in 3..8 {
            let mut graph = AdjSetUndir::new(n);
            graph.connect_clique(&(0..n).collect::<Vec<_>>()).unwrap();

            let result = graph.classify();
            assert_eq!(result.m, n * (n - 1) / 2);
            assert!(result.matches(&Family::Complete { n }));
            assert!(!result.matches(&Family::Bipartite));
        }
    }

    #[test]
    fn lone_edge_is_complete_but_no_star() {
        let graph = AdjSetUndir::try_from_edges(2, [(0, 1)]).unwrap();

        assert_eq!(
            kinds(&graph),
            vec![
                Family::Complete { n: 2 },
                Family::Bipartite,
                Family::CompleteBipartite { p: 1, q: 1 },
            ]
        );
    }

    #[test]
    fn even_cycles_are_bipartite_odd_ones_not() {
        for n in 3..12 {
            let mut graph = AdjSetUndir::new(n);
            graph.connect_cycle(0..n).unwrap();

            let result = graph.classify();
            assert!(result.matches(&Family::Cycle { len: n }));
            assert_eq!(result.matches(&Family::Bipartite), n % 2 == 0);
            assert_eq!(result.degrees, vec![2; n as usize]);
        }
    }

    #[test]
    fn two_disjoint_triangles_are_no_cycle() {
        let mut graph = AdjSetUndir::new(6);
        graph.connect_cycle(0..3).unwrap();
        graph.connect_cycle(3..6).unwrap();

        // degree sequence and edge count fit C_6, connectivity does not
        assert_eq!(kinds(&graph), vec![Family::Unrecognized]);
    }

    #[test]
    fn stars() {
        for k in 2..8 {
            let mut graph = AdjSetUndir::new(k + 1);
            graph.connect_star(0, 1..=k).unwrap();

            let families = kinds(&graph);
            assert!(families.contains(&Family::Star { leaves: k }));
            assert!(families.contains(&Family::Bipartite));
            assert!(families.contains(&Family::CompleteBipartite { p: 1, q: k }));
            assert!(!families.contains(&Family::Cycle { len: k + 1 }));
        }
    }

    #[test]
    fn complete_bipartite_k23() {
        let mut graph = AdjSetUndir::new(5);
        graph.connect_biclique(&[0, 1], &[2, 3, 4]).unwrap();

        let result = graph.classify();
        assert!(result.matches(&Family::Bipartite));
        assert!(result.matches(&Family::CompleteBipartite { p: 2, q: 3 }));
        assert!(result.families.iter().all(|f| !matches!(f, Family::Star { .. })));

        let bip = result.bipartition.unwrap();
        assert!(graph.is_bipartition(&bip));
        assert_eq!(bip.left_size() + bip.right_size(), 5);
        for Edge(u, v) in graph.edges(true) {
            assert_ne!(bip.is_on_left_side(u), bip.is_on_left_side(v));
        }
    }

    #[test]
    fn bipartite_but_not_complete_bipartite() {
        // a path on four vertices misses the cross pair (0, 3)
        let mut graph = AdjSetUndir::new(4);
        graph.connect_path(0..4).unwrap();

        let families = kinds(&graph);
        assert!(families.contains(&Family::Bipartite));
        assert!(families.iter().all(|f| !matches!(f, Family::CompleteBipartite { .. })));
    }

    #[test]
    fn unrecognized_graph_carries_only_the_sentinel() {
        // 4-cycle plus one diagonal: contains a triangle, matches nothing
        let graph =
            AdjSetUndir::try_from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]).unwrap();

        assert_eq!(kinds(&graph), vec![Family::Unrecognized]);
    }

    #[test]
    fn classification_record_is_complete() {
        let mut graph = AdjSetUndir::new(5);
        graph.connect_star(2, [0, 1, 3, 4]).unwrap();

        let result = graph.classify();
        assert_eq!(result.n, 5);
        assert_eq!(result.m, 4);
        assert_eq!(result.degrees, vec![1, 1, 4, 1, 1]);
        assert!(result.bipartition.is_some());
    }
}
