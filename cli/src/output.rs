use std::fmt;

use modsnap_interface::ModuleInfo;

pub fn print_banner() {
    println!();
    println!(" *** Enumerate Modules in a Process ***");
    println!("          by {}", env!("CARGO_PKG_AUTHORS"));
    println!();
}

/// The module listing as it is printed on a successful run.
pub struct Report<'a> {
    pub process_id: u32,
    pub modules: &'a [ModuleInfo],
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, " Module List for Process ID = {}", self.process_id)?;
        writeln!(f, " ========================================")?;
        writeln!(f)?;
        for module in self.modules {
            writeln!(f, " - {}  ({} bytes)", module.name, module.size)?;
        }
        Ok(())
    }
}
