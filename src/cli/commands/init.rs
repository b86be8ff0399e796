use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: create the config directory and default file.
pub fn handle() -> AppResult<()> {
    info("Initializing fxsheet…");

    let (path, created) = Config::init()?;

    if created {
        success(format!("Config file created: {}", path.display()));
    } else {
        info(format!("Config file already exists: {}", path.display()));
    }

    Ok(())
}
