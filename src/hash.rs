//! BLAKE3 hashing for cache fidelity checks
//!
//! Source artifacts and their cached copies are hashed the same way, so a
//! cached skill directory and the skill tree it was copied from produce the
//! same digest exactly when every file matches byte for byte.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Component, Path};

use blake3::Hasher;
use walkdir::WalkDir;

use crate::catalog::SkillTree;
use crate::error::{Result, file_read_failed};

/// Hash prefix for BLAKE3 hashes
pub const HASH_PREFIX: &str = "blake3:";

fn finish(hasher: &Hasher) -> String {
    format!("{}{}", HASH_PREFIX, hasher.finalize().to_hex())
}

/// Calculate BLAKE3 hash of in-memory contents
pub fn hash_bytes(contents: &[u8]) -> String {
    let mut hasher = Hasher::new();
    hasher.update(contents);
    finish(&hasher)
}

/// Calculate BLAKE3 hash of a file
pub fn hash_file(path: &Path) -> Result<String> {
    let mut hasher = Hasher::new();
    update_from_file(&mut hasher, path)?;
    Ok(finish(&hasher))
}

fn update_from_file(hasher: &mut Hasher, path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|e| file_read_failed(path, e))?;

    let mut reader = BufReader::new(file);
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .map_err(|e| file_read_failed(path, e))?;

        if bytes_read == 0 {
            break;
        }

        hasher.update(&buffer[..bytes_read]);
    }

    Ok(())
}

/// Relative path with `/` separators, so digests do not depend on the OS
fn portable(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Calculate BLAKE3 hash of a skill tree
///
/// Files are hashed in path order as `path \0 contents \0`; directories only
/// contribute through the paths of the files they hold.
pub fn hash_tree(tree: &SkillTree) -> String {
    let mut files: Vec<(String, &[u8])> = tree
        .files()
        .map(|(path, contents)| (portable(path), contents))
        .collect();
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let mut hasher = Hasher::new();
    for (path, contents) in files {
        hasher.update(path.as_bytes());
        hasher.update(b"\0");
        hasher.update(contents);
        hasher.update(b"\0");
    }
    finish(&hasher)
}

/// Calculate BLAKE3 hash of a directory's contents, compatible with [`hash_tree`]
///
/// Symlinks are followed, so a directory of links into the cache hashes the
/// same as the cache itself.
pub fn hash_directory(path: &Path) -> Result<String> {
    let mut files: Vec<(String, std::path::PathBuf)> = Vec::new();
    for entry in WalkDir::new(path).follow_links(true) {
        let entry = entry.map_err(|e| file_read_failed(path, e))?;
        if entry.file_type().is_file() {
            let relative = entry.path().strip_prefix(path).unwrap_or(entry.path());
            files.push((portable(relative), entry.path().to_path_buf()));
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let mut hasher = Hasher::new();
    for (relative, file_path) in files {
        hasher.update(relative.as_bytes());
        hasher.update(b"\0");
        update_from_file(&mut hasher, &file_path)?;
        hasher.update(b"\0");
    }
    Ok(finish(&hasher))
}
