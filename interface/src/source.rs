use crate::{
    ModuleInfo,
    ProcessId,
    SnapshotResult,
};

/// Cursor over the module entries contained in one snapshot.
///
/// Dropping the cursor releases the underlying OS resource.
pub trait ModuleSnapshot {
    /// Fetch the next module entry.
    ///
    /// `Ok(None)` is the facility's regular end of list. Any error aborts
    /// the enumeration.
    fn next_module(&mut self) -> SnapshotResult<Option<ModuleInfo>>;
}

/// A facility which can take a point-in-time module snapshot of a process.
pub trait SnapshotSource {
    type Snapshot: ModuleSnapshot;

    fn snapshot(&self, process_id: ProcessId) -> SnapshotResult<Self::Snapshot>;
}

/// Enumerate all modules of the given process.
///
/// Takes exactly one snapshot from `source` and releases it before
/// returning, no matter whether the enumeration succeeds.
pub fn list_modules<S: SnapshotSource>(
    source: &S,
    process_id: ProcessId,
) -> SnapshotResult<Vec<ModuleInfo>> {
    let mut snapshot = source.snapshot(process_id)?;
    log::debug!("Module snapshot for process {} created", process_id);

    let mut modules = Vec::new();
    while let Some(module) = snapshot.next_module()? {
        log::trace!("Module entry: {} ({} bytes)", module.name, module.size);
        modules.push(module);
    }

    log::debug!("Enumerated {} modules", modules.len());
    Ok(modules)
}
