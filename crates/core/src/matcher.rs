//! Filename matching over a single search folder
//!
//! Every call walks the folder from scratch. Nothing is cached between
//! keystrokes, so results always reflect the current state of the disk.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Placeholder list item offering a web search when no file matches
pub const SENTINEL: &str = "No matching files. Search the web?";

/// Maximum number of partial matches shown in the result list
pub const MAX_PARTIAL_MATCHES: usize = 10;

/// Outcome of matching a query against the search folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult {
    /// A file whose stem equals the query; open it right away
    Open(PathBuf),
    /// File names containing the query, or just [`SENTINEL`]
    ShowList(Vec<String>),
    /// Empty query or no usable folder
    Hidden,
}

/// Match `query` against files under `root`.
pub fn search(query: &str, root: Option<&Path>) -> MatchResult {
    let query = query.trim();
    if query.is_empty() {
        return MatchResult::Hidden;
    }
    let Some(root) = root.filter(|r| r.is_dir()) else {
        return MatchResult::Hidden;
    };

    if let Some(path) = find_exact(query, root) {
        return MatchResult::Open(path);
    }

    let names = find_partial(query, root, MAX_PARTIAL_MATCHES);
    if names.is_empty() {
        MatchResult::ShowList(vec![SENTINEL.to_string()])
    } else {
        MatchResult::ShowList(names)
    }
}

/// Walk all files under `root`, sorted by name within each directory.
///
/// Directory links are not descended into; a link to a file counts as a file.
fn files(root: &Path) -> impl Iterator<Item = walkdir::Result<DirEntry>> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter(|entry| match entry {
            Ok(e) => is_file(e),
            Err(_) => true,
        })
}

fn is_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

/// Run `visit` over every file until it returns `Some`. A walk error aborts the scan.
fn scan<T>(
    root: &Path,
    mut visit: impl FnMut(&DirEntry) -> Option<T>,
) -> Result<Option<T>, walkdir::Error> {
    for entry in files(root) {
        if let Some(found) = visit(&entry?) {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

/// First file whose name without extension equals `query`, ignoring case.
pub fn find_exact(query: &str, root: &Path) -> Option<PathBuf> {
    let needle = query.to_lowercase();
    let found = scan(root, |entry| {
        let stem = entry.path().file_stem()?.to_string_lossy().to_lowercase();
        (stem == needle).then(|| entry.path().to_path_buf())
    });

    found.unwrap_or_else(|e| {
        log::warn!("Exact scan of {:?} aborted: {}", root, e);
        None
    })
}

/// Names of up to `limit` files whose name contains `query`, ignoring case.
///
/// Returns an empty list if the walk fails before `limit` names are found.
pub fn find_partial(query: &str, root: &Path, limit: usize) -> Vec<String> {
    let needle = query.to_lowercase();
    let mut names = Vec::new();
    if limit == 0 {
        return names;
    }

    let walked = scan(root, |entry| {
        let name = entry.file_name().to_string_lossy();
        if name.to_lowercase().contains(&needle) {
            names.push(name.into_owned());
        }
        (names.len() >= limit).then_some(())
    });

    match walked {
        Ok(_) => names,
        Err(e) => {
            log::warn!("Partial scan of {:?} aborted: {}", root, e);
            Vec::new()
        }
    }
}

/// First file under `root` named exactly `name`.
pub fn resolve_name(name: &str, root: &Path) -> Option<PathBuf> {
    if !root.is_dir() {
        return None;
    }
    scan(root, |entry| (entry.file_name() == name).then(|| entry.path().to_path_buf()))
        .unwrap_or_else(|e| {
            log::warn!("Lookup of {:?} under {:?} aborted: {}", name, root, e);
            None
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_exact_match_opens_file() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "docs/report.pdf");
        touch(dir.path(), "report-draft.txt");

        for query in ["report", "REPORT", "  Report "] {
            assert_eq!(
                search(query, Some(dir.path())),
                MatchResult::Open(dir.path().join("docs/report.pdf"))
            );
        }
    }

    #[test]
    fn test_exact_match_ignores_only_last_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "backup.tar.gz");

        assert_eq!(
            find_exact("backup.tar", dir.path()),
            Some(dir.path().join("backup.tar.gz"))
        );
        assert_eq!(find_exact("backup", dir.path()), None);
    }

    #[test]
    fn test_partial_matches_capped_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        for i in 1..=12 {
            touch(dir.path(), &format!("a{}.txt", i));
        }

        let expected: Vec<String> = [
            "a1.txt", "a10.txt", "a11.txt", "a12.txt", "a2.txt", "a3.txt", "a4.txt", "a5.txt",
            "a6.txt", "a7.txt",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        assert_eq!(search("a", Some(dir.path())), MatchResult::ShowList(expected));
    }

    #[test]
    fn test_partial_match_includes_extension_and_subfolders() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "notes/Meeting.MD");
        touch(dir.path(), "other.txt");

        assert_eq!(
            search(".md", Some(dir.path())),
            MatchResult::ShowList(vec!["Meeting.MD".to_string()])
        );
    }

    #[test]
    fn test_directories_are_not_matched() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("photos")).unwrap();

        assert_eq!(
            search("photos", Some(dir.path())),
            MatchResult::ShowList(vec![SENTINEL.to_string()])
        );
    }

    #[test]
    fn test_no_match_yields_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "alpha.txt");

        assert_eq!(
            search("zzz", Some(dir.path())),
            MatchResult::ShowList(vec![SENTINEL.to_string()])
        );
    }

    #[test]
    fn test_blank_query_or_missing_folder_hides() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "alpha.txt");

        assert_eq!(search("", Some(dir.path())), MatchResult::Hidden);
        assert_eq!(search("   ", Some(dir.path())), MatchResult::Hidden);
        assert_eq!(search("alpha", None), MatchResult::Hidden);
        assert_eq!(
            search("alpha", Some(dir.path().join("gone").as_path())),
            MatchResult::Hidden
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_file_symlinks_are_matched() {
        let target_dir = tempfile::tempdir().unwrap();
        touch(target_dir.path(), "real/report.pdf");
        let dir = tempfile::tempdir().unwrap();
        std::os::unix::fs::symlink(
            target_dir.path().join("real/report.pdf"),
            dir.path().join("report.pdf"),
        )
        .unwrap();
        std::os::unix::fs::symlink(target_dir.path().join("real"), dir.path().join("linked"))
            .unwrap();

        assert_eq!(
            search("report", Some(dir.path())),
            MatchResult::Open(dir.path().join("report.pdf"))
        );
        // Linked directories are not walked
        assert_eq!(find_partial("pdf", dir.path(), 10), vec!["report.pdf".to_string()]);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_yields_no_matches() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a1.txt");
        touch(dir.path(), "a2.txt");
        touch(dir.path(), "b_locked/a3.txt");
        touch(dir.path(), "c_target.txt");

        let locked = dir.path().join("b_locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        // Root ignores permission bits; nothing to check then
        let skip = fs::read_dir(&locked).is_ok();

        if !skip {
            assert_eq!(
                search("a", Some(dir.path())),
                MatchResult::ShowList(vec![SENTINEL.to_string()])
            );
            assert_eq!(find_exact("c_target", dir.path()), None);
            assert_eq!(resolve_name("c_target.txt", dir.path()), None);
            // Hits found before the locked directory are enough when they fill the limit
            assert_eq!(find_partial("a", dir.path(), 2).len(), 2);
        }

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_resolve_name_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a/plan.txt");
        touch(dir.path(), "b/plan.txt");
        touch(dir.path(), "plan.txt.bak");

        assert_eq!(
            resolve_name("plan.txt", dir.path()),
            Some(dir.path().join("a/plan.txt"))
        );
        assert_eq!(resolve_name("plan", dir.path()), None);
    }

    #[test]
    fn test_search_reflects_new_files() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            search("fresh", Some(dir.path())),
            MatchResult::ShowList(vec![SENTINEL.to_string()])
        );

        touch(dir.path(), "fresh.txt");
        assert_eq!(
            search("fresh", Some(dir.path())),
            MatchResult::Open(dir.path().join("fresh.txt"))
        );
    }
}
