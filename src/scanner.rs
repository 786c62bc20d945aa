use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::{error, warn};
use walkdir::WalkDir;

/// Drop roots that sit inside another root so no file is enumerated twice.
/// Surviving roots keep their first-seen order.
pub fn non_overlapping_roots(roots: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut result: Vec<PathBuf> = Vec::new();

    for root in roots {
        if result.iter().any(|kept| root.starts_with(kept)) {
            continue;
        }
        result.retain(|kept| !kept.starts_with(&root));
        result.push(root);
    }

    result
}

/// Regular files under `roots`, each root walked in file-name order.
///
/// Entries matching an ignore pattern are pruned (a matching directory is not
/// descended into) and `exclude` is left out. Missing roots and unreadable
/// entries are logged and skipped.
pub fn collect_candidates(
    roots: &[PathBuf],
    ignore_globs: &[String],
    exclude: Option<&Path>,
    follow_links: bool,
) -> Vec<PathBuf> {
    let ignore_patterns: Vec<Pattern> = ignore_globs
        .iter()
        .filter_map(|glob| match Pattern::new(glob) {
            Ok(p) => Some(p),
            Err(e) => {
                error!("Invalid glob pattern '{}': {}", glob, e);
                None
            }
        })
        .collect();

    let mut candidates = Vec::new();

    for root in non_overlapping_roots(roots.to_vec()) {
        if !root.is_dir() {
            warn!("Search root '{}' is not a directory", root.display());
            continue;
        }

        let walker = WalkDir::new(&root)
            .follow_links(follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_ignored(entry.path(), &ignore_patterns));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    error!("Error walking '{}': {}", root.display(), err);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            if exclude.is_some_and(|excluded| entry.path() == excluded) {
                continue;
            }
            candidates.push(entry.into_path());
        }
    }

    candidates
}

fn is_ignored(path: &Path, patterns: &[Pattern]) -> bool {
    patterns.iter().any(|pattern| pattern.matches_path(path))
}
