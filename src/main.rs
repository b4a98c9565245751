#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use graphkind::classify::Classify;
use graphkind::io::EdgeListRead;
use graphkind::report::{format_error_report, format_report};
use graphkind::repr::AdjSetUndir;

/// Classify undirected simple graphs into named families.
///
/// Every input file yields one report file; a parse failure in one file
/// never aborts the others.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Graph files, or directories whose immediate files are taken as inputs
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Write all generated report files into this directory
    /// (default: next to each input file)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let files = collect_input_files(&cli.paths)?;
    if files.is_empty() {
        println!("No input files");
        return Ok(());
    }

    if let Some(dir) = &cli.out_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("cannot create output directory {}", dir.display()))?;
    }

    for file in &files {
        let text = process_file(file);
        let out_path = output_path(file, cli.out_dir.as_deref());

        fs::write(&out_path, text)
            .with_context(|| format!("cannot write report {}", out_path.display()))?;
        println!("Done: {}", out_path.display());
    }

    Ok(())
}

/// Expands directory arguments to their immediate regular files
/// (non-recursive, sorted by name); plain paths are taken as given.
fn collect_input_files(paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(path)
                .with_context(|| format!("cannot list directory {}", path.display()))?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file())
                .collect();
            entries.sort();
            files.extend(entries);
        } else {
            files.push(path.clone());
        }
    }

    Ok(files)
}

/// Classifies one input file. Failures never propagate — they become the
/// file's error report instead.
fn process_file(path: &Path) -> String {
    let name = file_name(path);

    match AdjSetUndir::try_read_edge_list_file(path) {
        Ok(graph) => {
            info!(file = %path.display(), "classified");
            format_report(&name, &graph.classify())
        }
        Err(e) => {
            error!(file = %path.display(), error = %e, "classification failed");
            format_error_report(&name, &e)
        }
    }
}

/// The file name component used in report headers and output naming
fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// `<input>.out`, either next to the input or inside `out_dir`
fn output_path(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    match out_dir {
        Some(dir) => dir.join(format!("{}.out", file_name(input))),
        None => {
            let mut path = input.as_os_str().to_owned();
            path.push(".out");
            PathBuf::from(path)
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use super::*;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn processes_a_cycle_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "c4.txt", "4 4\n1 2\n2 3\n3 4\n4 1\n");

        let text = process_file(&path);
        assert!(text.starts_with("File: c4.txt\n"));
        assert!(text.contains("• cycle C4"));
        assert!(text.contains("• bipartite"));
    }

    #[test]
    fn failing_file_yields_an_error_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "bad.txt", "3 1\n1 1\n");

        let text = process_file(&path);
        assert!(text.starts_with("File: bad.txt\nError: "));
        assert!(text.contains("self-loops"));
    }

    #[test]
    fn missing_file_yields_an_error_report() {
        let text = process_file(Path::new("/no/such/file.txt"));
        assert!(text.contains("Error: cannot read input"));
    }

    #[test]
    fn directories_expand_to_their_immediate_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(dir.path(), "a.txt", "1 0\n");
        let b = write_file(dir.path(), "b.txt", "1 0\n");
        fs::create_dir(dir.path().join("nested")).unwrap();
        write_file(&dir.path().join("nested"), "c.txt", "1 0\n");

        let files = collect_input_files(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn output_paths() {
        assert_eq!(
            output_path(Path::new("graphs/c4.txt"), None),
            PathBuf::from("graphs/c4.txt.out")
        );
        assert_eq!(
            output_path(Path::new("graphs/c4.txt"), Some(Path::new("reports"))),
            PathBuf::from("reports/c4.txt.out")
        );
    }
}
