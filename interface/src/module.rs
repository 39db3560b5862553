pub type ProcessId = u32;

/// A single module loaded into the target process, as reported by the
/// host's module introspection facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleInfo {
    /// Display name of the module.
    pub name: String,

    /// Full path of the backing image, if the facility reports one.
    pub path: String,

    /// Load address of the module within the target process.
    pub base_address: u64,

    /// In-memory size of the module in bytes.
    pub size: u32,
}
