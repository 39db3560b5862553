mod error;
pub use error::*;

mod module;
pub use module::*;

mod source;
pub use source::*;

#[cfg(windows)]
mod handle;
#[cfg(windows)]
mod toolhelp;
#[cfg(windows)]
pub use toolhelp::*;

#[cfg(target_os = "linux")]
mod procfs;
#[cfg(target_os = "linux")]
pub use procfs::*;

#[cfg(windows)]
pub use toolhelp::ToolhelpSource as SystemSource;
#[cfg(target_os = "linux")]
pub use procfs::ProcMapsSource as SystemSource;
