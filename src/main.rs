//! CLI entry point for findfiles

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use findfiles::{
    PruneSet, SearchWalker, WalkConfig, dedup_sorted, print_json, print_matches, warn_duplicates,
};

#[derive(Parser, Debug)]
#[command(name = "findfiles")]
#[command(about = "Locate every directory containing a file with a given name")]
#[command(version)]
struct Args {
    /// Directory to start the search from
    topdir: PathBuf,

    /// Exact file name to search for
    filename: String,

    /// Skip this directory during search (name, glob pattern, or path).
    /// May be used multiple times
    #[arg(long = "prune", value_name = "DIR")]
    prune: Vec<String>,

    /// Search this directory as well. May be used multiple times
    #[arg(long = "add", value_name = "DIR")]
    add: Vec<PathBuf>,

    /// Do not stop scanning a directory once a match has been found
    #[arg(long)]
    deep: bool,

    /// Follow symbolic links to directories
    #[arg(long = "follow-links")]
    follow_links: bool,

    /// Output matches as a JSON array
    #[arg(long)]
    json: bool,
}

/// Canonicalize a search root, exiting on inaccessible paths.
fn resolve_root(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|e| {
        eprintln!("findfiles: cannot access '{}': {}", path.display(), e);
        process::exit(1);
    })
}

fn main() {
    let args = Args::parse();

    let mut roots = vec![resolve_root(&args.topdir)];
    for add in &args.add {
        roots.push(resolve_root(add));
    }

    let config = WalkConfig {
        file_name: args.filename.clone(),
        deep: args.deep,
        follow_links: args.follow_links,
        prune: PruneSet::from_entries(&args.prune),
    };
    let walker = SearchWalker::new(config);

    let mut matches = Vec::new();
    for root in &roots {
        // A pruned root is skipped entirely, scanning message included.
        if walker.config().prune.is_pruned_path(root) {
            continue;
        }
        eprintln!(
            "findfiles: scanning {} for {}",
            root.display(),
            args.filename
        );
        if let Err(e) = walker.walk(root, &mut matches) {
            eprintln!("findfiles: {}", e);
            process::exit(1);
        }
    }

    let (unique, duplicates) = dedup_sorted(matches);
    warn_duplicates(&duplicates);

    let result = if args.json {
        print_json(&unique, &args.filename)
    } else {
        print_matches(&unique)
    };
    if let Err(e) = result {
        eprintln!("findfiles: error writing output: {}", e);
        process::exit(1);
    }
}
