use modsnap_interface::{
    list_modules,
    SystemSource,
};

pub fn main() -> anyhow::Result<()> {
    env_logger::builder().parse_default_env().init();

    let process_id = std::process::id();
    let modules = list_modules(&SystemSource, process_id)?;

    println!("Process {} has {} modules:", process_id, modules.len());
    for module in modules {
        println!(
            " - {:X} {} ({} bytes)",
            module.base_address, module.name, module.size
        );
    }

    Ok(())
}
