/*!
# Report Assembly

Pure data-to-text transforms: a [`Classification`] becomes the per-file
report, a [`ParseError`] becomes the per-file error report. No algorithmic
content lives here — the functions only fix the field set and ordering of
the output.
*/

use itertools::Itertools;

use crate::classify::{Classification, Family};
use crate::io::ParseError;

/// Renders the classification report for one input file.
///
/// Layout: file name, vertex and edge counts, the degree sequence in
/// vertex order, the bulleted list of matched families, then — when those
/// families matched — the complete-bipartite part sizes and the
/// bipartition sets.
pub fn format_report(name: &str, result: &Classification) -> String {
    let mut lines = Vec::new();

    lines.push(format!("File: {name}"));
    lines.push(format!("Vertices: n = {}", result.n));
    lines.push(format!("Edges:   m = {}", result.m));
    lines.push(format!("Degrees: {:?}", result.degrees));
    lines.push(String::new());
    lines.push("Graph families (several may match):".to_string());

    for family in &result.families {
        lines.push(format!("  • {family}"));
    }

    if let Some(Family::CompleteBipartite { p, q }) = result
        .families
        .iter()
        .find(|f| matches!(f, Family::CompleteBipartite { .. }))
    {
        lines.push(format!("    (p = {p}, q = {q})"));
    }

    if result.families.contains(&Family::Bipartite) {
        if let Some(bip) = &result.bipartition {
            lines.push(format!(
                "  Bipartition: A = {:?}, B = {:?}",
                bip.left().collect_vec(),
                bip.right().collect_vec()
            ));
        }
    }

    lines.join("\n") + "\n"
}

/// Renders the substitute report for a file that failed to parse.
pub fn format_error_report(name: &str, error: &ParseError) -> String {
    format!("File: {name}\nError: {error}\n")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::classify::Classify;
    use crate::gens::GeneratorSubstructures;
    use crate::ops::{GraphFromEdges, GraphNew, InvalidEdge};
    use crate::repr::AdjSetUndir;

    #[test]
    fn report_for_a_complete_bipartite_graph() {
        let mut graph = AdjSetUndir::new(5);
        graph.connect_biclique(&[0, 1], &[2, 3, 4]).unwrap();

        let text = format_report("k23.txt", &graph.classify());

        assert_eq!(
            text,
            "File: k23.txt\n\
             Vertices: n = 5\n\
             Edges:   m = 6\n\
             Degrees: [3, 3, 2, 2, 2]\n\
             \n\
             Graph families (several may match):\n\
             \u{20} • bipartite\n\
             \u{20} • complete bipartite K2,3\n\
             \u{20}   (p = 2, q = 3)\n\
             \u{20} Bipartition: A = [0, 1], B = [2, 3, 4]\n"
        );
    }

    #[test]
    fn report_for_an_unrecognized_graph() {
        let graph =
            AdjSetUndir::try_from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]).unwrap();

        let text = format_report("odd.txt", &graph.classify());

        assert!(text.contains("• none of the recognized families"));
        assert!(!text.contains("Bipartition:"));
        assert!(!text.contains("(p ="));
    }

    #[test]
    fn report_lists_every_matched_family() {
        let graph = AdjSetUndir::try_from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();

        let text = format_report("c4.txt", &graph.classify());
        assert!(text.contains("• cycle C4"));
        assert!(text.contains("• bipartite"));
    }

    #[test]
    fn error_report() {
        let error = ParseError::InvalidEdge(InvalidEdge::SelfLoop(3));
        let text = format_error_report("bad.txt", &error);

        assert_eq!(
            text,
            "File: bad.txt\nError: self-loops are not allowed: (3,3)\n"
        );
    }
}
