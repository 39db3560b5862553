use std::fs;

use crate::{
    ModuleInfo,
    ModuleSnapshot,
    ProcessId,
    SnapshotError,
    SnapshotResult,
    SnapshotSource,
};

/// Module snapshots derived from the memory map the kernel publishes under
/// `/proc/<pid>/maps`.
///
/// Consecutive file backed regions of the same image are folded into one
/// module, so every loaded ELF object shows up once with the span it
/// occupies in the target address space.
pub struct ProcMapsSource;

pub struct ProcMapsSnapshot {
    modules: std::vec::IntoIter<ModuleInfo>,
}

impl SnapshotSource for ProcMapsSource {
    type Snapshot = ProcMapsSnapshot;

    fn snapshot(&self, process_id: ProcessId) -> SnapshotResult<Self::Snapshot> {
        let path = format!("/proc/{}/maps", process_id);
        let contents = fs::read_to_string(&path).map_err(|err| SnapshotError::CreateFailed {
            code: err.raw_os_error().unwrap_or(0) as u32,
            message: format!("failed to read {}: {}", path, err),
        })?;

        Ok(ProcMapsSnapshot {
            modules: parse_modules(&contents).into_iter(),
        })
    }
}

impl ModuleSnapshot for ProcMapsSnapshot {
    fn next_module(&mut self) -> SnapshotResult<Option<ModuleInfo>> {
        Ok(self.modules.next())
    }
}

struct Region<'a> {
    start: u64,
    end: u64,
    inode: u64,
    pathname: &'a str,
}

fn parse_region(line: &str) -> Option<Region<'_>> {
    let mut split = line.splitn(6, ' ');
    let mut range = split.next()?.split('-');
    let start = u64::from_str_radix(range.next()?, 16).ok()?;
    let end = u64::from_str_radix(range.next()?, 16).ok()?;
    let _flags = split.next()?;
    let _offset = split.next()?;
    let _dev = split.next()?;
    let inode = split.next()?.parse().ok()?;
    let pathname = split.next().map_or("", str::trim_start);

    Some(Region {
        start,
        end,
        inode,
        pathname,
    })
}

/* Image mappings carry an absolute path and a real inode. Device files and
 * memfd regions are mapped the same way but are not loadable modules. */
fn is_image(region: &Region) -> bool {
    region.inode != 0
        && region.pathname.starts_with('/')
        && !region.pathname.starts_with("/dev/")
        && !region.pathname.starts_with("/memfd:")
}

fn parse_modules(contents: &str) -> Vec<ModuleInfo> {
    let mut modules = Vec::new();
    let mut current: Option<(String, u64, u64)> = None;

    for line in contents.lines() {
        let Some(region) = parse_region(line) else {
            log::warn!("Skipping unparsable maps line: {:?}", line);
            continue;
        };

        if !is_image(&region) {
            if let Some(image) = current.take() {
                modules.push(build_module(image));
            }
            continue;
        }

        current = Some(match current.take() {
            Some((path, start, _)) if path == region.pathname => (path, start, region.end),
            Some(previous) => {
                modules.push(build_module(previous));
                (region.pathname.to_string(), region.start, region.end)
            }
            None => (region.pathname.to_string(), region.start, region.end),
        });
    }

    if let Some(image) = current.take() {
        modules.push(build_module(image));
    }

    modules
}

fn build_module((path, start, end): (String, u64, u64)) -> ModuleInfo {
    let name = path.rsplit('/').next().unwrap_or(path.as_str()).to_string();
    ModuleInfo {
        name,
        base_address: start,
        /* maps spans can exceed the 32 bit reporting width */
        size: (end - start).min(u64::from(u32::MAX)) as u32,
        path,
    }
}
