use anyhow::Context;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Normalize a list of file extensions into the `.ext` form.
pub(crate) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| {
            if !ext.starts_with('.') {
                format!(".{ext}")
            } else {
                ext.to_owned()
            }
        })
        .collect()
}

/// Find all files recursively located at or under each of `paths` whose
/// extension is one of `exts`.
///
/// If a single path is given and it names a file, that file is used even if
/// its extension doesn't match.
pub(crate) fn find_graphql_files(
    paths: &[PathBuf],
    exts: &HashSet<String>,
) -> anyhow::Result<Vec<PathBuf>> {
    log::debug!("Scanning {} input paths...", paths.len());

    let mut file_paths = vec![];
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = entry.with_context(|| format!(
                "Failed to scan filesystem entries at/under {}",
                path.display(),
            ))?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }

            let ext = entry_path.extension()
                .map(|ext| format!(".{}", ext.to_string_lossy()));
            if ext.is_some_and(|ext| exts.contains(&ext)) {
                log::trace!("Found file at {entry_path:#?}.");
                file_paths.push(canonicalize(entry_path)?);
            }
        }
    }

    if file_paths.is_empty()
        && paths.len() == 1
        && let Some(first_path) = paths.first()
        && first_path.is_file() {
        let first_path = canonicalize(first_path)?;
        log::warn!(
            "Proceeding with {first_path:#?} even though it doesn't match any of \
            the expected file extensions ({}).",
            exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        file_paths.push(first_path);
    }

    Ok(file_paths)
}

fn canonicalize(path: &std::path::Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path)
        .with_context(|| format!("Failed to canonicalize {}", path.display()))
}
