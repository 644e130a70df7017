//! Pending transaction state
//!
//! Dispatch only ever appends staged actions; executing them belongs to an
//! external executor, which can consume the serialized form.

use serde::{Deserialize, Serialize};

/// One staged action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum StagedInstall {
    /// A repo package, by full identity.
    Package { nevra: String },
    /// A local rpm file with its payload digest.
    LocalPackage {
        nevra: String,
        path: String,
        checksum: String,
    },
    /// A comps group marker with the member packages pulled in.
    Group { id: String, packages: Vec<String> },
    /// A module stream enablement with its package set.
    Module {
        name: String,
        stream: String,
        packages: Vec<String>,
    },
}

/// Append-only pending transaction.
#[derive(Debug, Default, Serialize)]
pub struct Transaction {
    staged: Vec<StagedInstall>,
}

impl Transaction {
    pub fn stage(&mut self, item: StagedInstall) {
        self.staged.push(item);
    }

    pub fn staged(&self) -> &[StagedInstall] {
        &self.staged
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }
}
