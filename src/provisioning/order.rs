//! Insertion-order bookkeeping for bulk provisioning
//!
//! Entities reference each other by type: a contract needs its client and
//! responsible user to exist first, a drilling plan needs its well. Callers
//! that build datasets in bulk track which types they have already created
//! and ask this module whether the next type is safe to insert. The check is
//! advisory and never touches the database.

use std::collections::HashSet;
use std::fmt;

use crate::provisioning::validator::EntityKind;

/// Prerequisite entity types that must exist before a row of `kind` can be
/// inserted.
pub fn dependencies(kind: EntityKind) -> &'static [EntityKind] {
    match kind {
        EntityKind::User | EntityKind::Client => &[],
        EntityKind::Contract => &[EntityKind::User, EntityKind::Client],
        EntityKind::Field | EntityKind::ContractActivity => &[EntityKind::Contract],
        EntityKind::Well => &[EntityKind::User, EntityKind::Field],
        EntityKind::DrillingPlan | EntityKind::DrillingData | EntityKind::ProductionData => {
            &[EntityKind::Well]
        }
        EntityKind::Report => &[EntityKind::User],
    }
}

/// Raised when a provisioning step runs before its prerequisites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyError {
    message: String,
}

impl DependencyError {
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DependencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for DependencyError {}

/// Check that every prerequisite of `kind` is in the caller's availability
/// set. The error names exactly the prerequisites still missing, in table
/// order.
pub fn check_dependencies(
    kind: EntityKind,
    available: &HashSet<EntityKind>,
) -> Result<(), DependencyError> {
    let missing: Vec<&str> = dependencies(kind)
        .iter()
        .filter(|dep| !available.contains(dep))
        .map(|dep| dep.name())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(DependencyError {
            message: format!(
                "Cannot insert {kind}. Missing dependencies: {}",
                missing.join(", ")
            ),
        })
    }
}
