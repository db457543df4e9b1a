//! # Record Identifiers
//!
//! Every record held by the host is addressed by a [`RecordId`] of the form
//! `<prefix>_<n>`, where the prefix is fixed per record type (`reg`, `sc`, `prod`, ...)
//! and `n` is a per-actor counter starting at 1.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for host records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Builds the id for the `seq`-th record of a type.
    pub fn new(prefix: &str, seq: u32) -> Self {
        Self(format!("{prefix}_{seq}"))
    }

    /// Derives the id of the `index`-th child (1-based) of this record.
    ///
    /// `fuset_3` with prefix `serzo` and index 1 yields `serzo_3_1`.
    pub fn child(&self, prefix: &str, index: usize) -> Self {
        Self(format!("{prefix}_{}_{index}", self.suffix()))
    }

    /// The part after the type prefix (`"3"` for `fuset_3`), or the whole id if it has none.
    pub fn suffix(&self) -> &str {
        self.0.split_once('_').map_or(self.0.as_str(), |(_, s)| s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_carry_prefix_and_sequence() {
        assert_eq!(RecordId::new("reg", 1).as_str(), "reg_1");
        assert_eq!(RecordId::new("txreg", 12).to_string(), "txreg_12");
    }

    #[test]
    fn test_child_ids_reuse_parent_suffix() {
        let parent = RecordId::new("fuset", 3);
        assert_eq!(parent.child("serzo", 1).as_str(), "serzo_3_1");
        assert_eq!(RecordId::from("bare").child("x", 2).as_str(), "x_bare_2");
    }
}
