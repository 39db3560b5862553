use windows::Win32::Foundation::{
    CloseHandle,
    HANDLE,
};

/// Exclusive owner of a raw Win32 handle.
///
/// The handle is closed exactly once, when the owner is dropped.
pub struct OwnedHandle {
    inner: HANDLE,
}

impl OwnedHandle {
    pub fn from_raw_handle(handle: HANDLE) -> Self {
        OwnedHandle { inner: handle }
    }

    pub fn raw_handle(&self) -> HANDLE {
        self.inner
    }
}

impl Drop for OwnedHandle {
    fn drop(&mut self) {
        if let Err(err) = unsafe { CloseHandle(self.inner) } {
            log::debug!("Failed to close handle {:?}: {}", self.inner, err);
        }
    }
}
