use std::mem;

use windows::{
    core::Error,
    Win32::{
        Foundation::ERROR_NO_MORE_FILES,
        System::Diagnostics::ToolHelp::{
            CreateToolhelp32Snapshot,
            Module32FirstW,
            Module32NextW,
            MODULEENTRY32W,
            TH32CS_SNAPMODULE,
        },
    },
};

use crate::{
    handle::OwnedHandle,
    ModuleInfo,
    ModuleSnapshot,
    ProcessId,
    SnapshotError,
    SnapshotResult,
    SnapshotSource,
};

/// Module snapshots backed by the Windows tool help library.
pub struct ToolhelpSource;

pub struct ToolhelpSnapshot {
    handle: OwnedHandle,
    started: bool,
}

impl SnapshotSource for ToolhelpSource {
    type Snapshot = ToolhelpSnapshot;

    fn snapshot(&self, process_id: ProcessId) -> SnapshotResult<Self::Snapshot> {
        let handle = unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPMODULE, process_id) }.map_err(
            |err| SnapshotError::CreateFailed {
                code: win32_code(&err),
                message: format!("CreateToolhelp32Snapshot failed: {}", err),
            },
        )?;

        Ok(ToolhelpSnapshot {
            handle: OwnedHandle::from_raw_handle(handle),
            started: false,
        })
    }
}

impl ModuleSnapshot for ToolhelpSnapshot {
    fn next_module(&mut self) -> SnapshotResult<Option<ModuleInfo>> {
        let mut entry: MODULEENTRY32W = unsafe { mem::zeroed() };
        entry.dwSize = mem::size_of::<MODULEENTRY32W>() as u32;

        let result = if self.started {
            unsafe { Module32NextW(self.handle.raw_handle(), &mut entry) }
        } else {
            self.started = true;
            unsafe { Module32FirstW(self.handle.raw_handle(), &mut entry) }
        };

        match result {
            Ok(()) => Ok(Some(ModuleInfo {
                name: decode_wide(&entry.szModule),
                path: decode_wide(&entry.szExePath),
                base_address: entry.modBaseAddr as u64,
                size: entry.modBaseSize,
            })),
            /* ERROR_NO_MORE_FILES is the regular end of the module list. */
            Err(err) if err.code() == ERROR_NO_MORE_FILES.to_hresult() => Ok(None),
            Err(err) => Err(SnapshotError::EnumerationInterrupted {
                code: win32_code(&err),
                message: err.to_string(),
            }),
        }
    }
}

/* HRESULTs wrapping a Win32 error carry the original code in the low word. */
fn win32_code(err: &Error) -> u32 {
    let hresult = err.code().0 as u32;
    if hresult & 0xFFFF_0000 == 0x8007_0000 {
        hresult & 0xFFFF
    } else {
        hresult
    }
}

/* Tool help string fields are fixed width buffers, terminated by the first NUL. */
fn decode_wide(buffer: &[u16]) -> String {
    let length = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
    String::from_utf16_lossy(&buffer[..length])
}

#[cfg(test)]
mod test {
    use super::ToolhelpSource;
    use crate::{
        list_modules,
        SnapshotError,
    };

    #[test]
    fn test_enumerate_own_process() {
        let modules = list_modules(&ToolhelpSource, std::process::id()).unwrap();

        /* Every process has at least its main image and ntdll loaded. */
        assert!(modules.len() >= 2);
        assert!(modules.iter().all(|module| !module.name.is_empty()));
        assert!(modules.iter().all(|module| module.size > 0));
    }

    #[test]
    fn test_nonexistent_process_fails_at_creation() {
        /* Windows allocates PIDs in multiples of four, this one can never exist. */
        let err = list_modules(&ToolhelpSource, 0xFFFF_FFF1).unwrap_err();

        match err {
            SnapshotError::CreateFailed { code, .. } => assert_ne!(code, 0),
            other => panic!("expected CreateFailed, got {:?}", other),
        }
    }
}
