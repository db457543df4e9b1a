//! Where configuration values come from.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A source of environment variables.
pub trait Env {
    fn var(&self, key: &str) -> Option<String>;

    /// Like [`var`](Self::var), but an empty value counts as unset.
    fn non_empty(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<K, V> Env for HashMap<K, V>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
{
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(|value| value.as_ref().to_string())
    }
}

/// Loads `.env.<NODE_ENV>` (when `NODE_ENV` is set) and then `.env` from `dir`.
///
/// Variables already in the process environment are never overwritten, so the
/// environment-specific file wins over `.env`. Missing files are skipped; unreadable
/// ones are logged and skipped. Returns the files that were loaded.
pub fn load_env_files(dir: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(node_env) = ProcessEnv.non_empty("NODE_ENV") {
        candidates.push(dir.join(format!(".env.{}", node_env)));
    }
    candidates.push(dir.join(".env"));

    let mut loaded = Vec::new();
    for path in candidates {
        if !path.is_file() {
            continue;
        }
        match dotenvy::from_path(&path) {
            Ok(()) => {
                debug!(path = %path.display(), "Loaded env file");
                loaded.push(path);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "Could not load env file"),
        }
    }
    loaded
}
