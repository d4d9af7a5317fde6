//! Empty-ancestor cleanup after removals

use std::fs;
use std::path::Path;

/// Remove `start` and its ancestors while they are empty, stopping at `boundary`
///
/// `boundary` itself may be removed when it becomes empty, nothing above it
/// is. Listing or removal failures end the walk silently, and a `start`
/// outside `boundary` is left untouched.
pub fn prune(start: &Path, boundary: &Path) {
    if !start.starts_with(boundary) {
        tracing::debug!(
            start = %start.display(),
            boundary = %boundary.display(),
            "prune start outside boundary"
        );
        return;
    }

    let mut current = start;
    loop {
        let is_empty = match fs::read_dir(current) {
            Ok(mut entries) => entries.next().is_none(),
            Err(_) => return,
        };
        if !is_empty || fs::remove_dir(current).is_err() {
            return;
        }
        tracing::debug!(dir = %current.display(), "pruned empty directory");

        if current == boundary {
            return;
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_prunes_up_to_boundary_inclusive() {
        let temp = TempDir::new().unwrap();
        let boundary = temp.path().join("root");
        let start = boundary.join("a/b/c");
        fs::create_dir_all(&start).unwrap();

        prune(&start, &boundary);

        assert!(!boundary.exists());
        assert!(temp.path().exists());
    }

    #[test]
    fn test_stops_at_non_empty_ancestor() {
        let temp = TempDir::new().unwrap();
        let boundary = temp.path().join("root");
        let start = boundary.join("a/b");
        fs::create_dir_all(&start).unwrap();
        fs::write(boundary.join("a/keep.md"), "k").unwrap();

        prune(&start, &boundary);

        assert!(!start.exists());
        assert!(boundary.join("a/keep.md").exists());
    }

    #[test]
    fn test_never_climbs_above_boundary() {
        let temp = TempDir::new().unwrap();
        let outer = temp.path().join("outer");
        let boundary = outer.join("tool");
        fs::create_dir_all(boundary.join("commands")).unwrap();

        prune(&boundary.join("commands"), &boundary);

        assert!(!boundary.exists());
        assert!(outer.is_dir());
    }

    #[test]
    fn test_start_outside_boundary_is_ignored() {
        let temp = TempDir::new().unwrap();
        let elsewhere = temp.path().join("elsewhere");
        fs::create_dir_all(&elsewhere).unwrap();

        prune(&elsewhere, &temp.path().join("root"));

        assert!(elsewhere.is_dir());
    }

    #[test]
    fn test_missing_start_is_noop() {
        let temp = TempDir::new().unwrap();
        prune(&temp.path().join("gone/deeper"), temp.path());
        assert!(temp.path().exists());
    }
}
