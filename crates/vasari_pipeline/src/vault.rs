//! Staging area for auxiliary reference material.

use std::sync::Mutex;
use vasari_core::ReferenceMaterials;

/// Holds reference materials staged ahead of a generation run.
///
/// Deposits accumulate by field; the next run withdraws everything at
/// once, emptying the vault. Materials are consumed by exactly one run.
///
/// # Examples
///
/// ```
/// use vasari_core::ReferenceMaterials;
/// use vasari_pipeline::ReferenceVault;
///
/// let vault = ReferenceVault::new();
/// vault.deposit(ReferenceMaterials {
///     info_content: Some("Bees pollinate crops.".to_string()),
///     ..Default::default()
/// });
///
/// assert!(vault.withdraw().is_some());
/// assert!(vault.withdraw().is_none());
/// ```
#[derive(Debug, Default)]
pub struct ReferenceVault {
    slot: Mutex<Option<ReferenceMaterials>>,
}

impl ReferenceVault {
    /// Create an empty vault.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage materials for the next run, overlaying any already present.
    pub fn deposit(&self, materials: ReferenceMaterials) {
        let mut slot = self.slot.lock().unwrap();
        match slot.as_mut() {
            Some(staged) => staged.merge(materials),
            None => *slot = Some(materials),
        }
    }

    /// Take everything staged so far, leaving the vault empty.
    pub fn withdraw(&self) -> Option<ReferenceMaterials> {
        self.slot.lock().unwrap().take()
    }
}
