//! Expansion of a configuration into candidate paths
//!
//! A collection contributes every immediate subdirectory, sorted by name.
//! Standalone repositories are taken as configured. Any collection that cannot
//! be listed aborts the whole expansion, before a single repository has been
//! inspected.

use crate::config::Config;
use crate::error::{ScanError, ScanResult};
use crate::types::{Candidate, Section, SectionKind};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Make `path` absolute against the current working directory and clean it
///
/// Relative paths fail only if the working directory itself is gone.
pub fn resolve_absolute(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(normalize(&std::env::current_dir()?.join(path)))
    }
}

/// Lexically drop `.` segments and fold `..` into its parent
///
/// Symlinks are not resolved; `..` at the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !cleaned.pop() {
                    cleaned.push(component);
                }
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}

/// List the immediate subdirectories of a collection
///
/// Files are skipped. Symlinks count when they point at a directory.
pub fn expand_collection(collection: &Path) -> ScanResult<Vec<Candidate>> {
    let unreadable = |source| ScanError::CollectionUnreadable {
        path: collection.to_path_buf(),
        source,
    };

    let mut members = Vec::new();
    for entry in fs::read_dir(collection).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let path = entry.path();
        // Follows symlinks; a member that cannot be stat'ed fails the collection
        let metadata = fs::metadata(&path).map_err(unreadable)?;
        if !metadata.is_dir() {
            tracing::debug!(path = %path.display(), "skipping non-directory entry");
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        let absolute = resolve_absolute(&path)
            .map_err(|source| ScanError::PathResolution { path, source })?;
        members.push(Candidate::member(absolute, name));
    }

    members.sort_by(|a, b| a.name.cmp(&b.name));
    tracing::debug!(
        collection = %collection.display(),
        members = members.len(),
        "expanded collection"
    );
    Ok(members)
}

/// Expand every configured collection into one section
pub fn collection_section(collections: &[String]) -> ScanResult<Section> {
    let mut candidates = Vec::new();
    for collection in collections {
        candidates.extend(expand_collection(Path::new(collection))?);
    }
    Ok(Section::new(SectionKind::Collections, dedup(candidates)))
}

/// Section of standalone repositories
pub fn repository_section(repositories: &[String]) -> Section {
    let candidates = repositories
        .iter()
        .map(Candidate::repository)
        .collect();
    Section::new(SectionKind::Repositories, dedup(candidates))
}

/// Build the ordered sections for a configuration
pub fn plan(config: &Config) -> ScanResult<Vec<Section>> {
    Ok(vec![
        collection_section(&config.collections)?,
        repository_section(&config.repositories),
    ])
}

/// Drop repeated paths, keeping the first occurrence
fn dedup(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| {
            let key = resolve_absolute(&candidate.path).unwrap_or_else(|_| candidate.path.clone());
            seen.insert(key)
        })
        .collect()
}
