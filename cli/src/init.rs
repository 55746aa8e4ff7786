use crate::config::write_default_config;
use crate::error::{Result, ResultExt};
use crate::ui;
use std::path::Path;

pub fn execute(config: String, force: bool) -> Result<()> {
    let path = Path::new(&config);
    if force && path.exists() {
        ui::warning_message(&format!("Overwriting {}", path.display()));
    }

    write_default_config(path, force)
        .with_context(|| format!("Creating {}", path.display()))?;

    ui::success_message(&format!("Configuration written to {}", path.display()));
    ui::info_message("Edit it to change the default output format and colors");
    Ok(())
}
