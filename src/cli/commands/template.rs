use crate::cli::parser::Commands;
use crate::core::template::TemplateLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Template { target, file } = cmd {
        let path = expand_tilde(file);
        let format = TemplateLogic::write(*target, &path)?;
        success(format!(
            "{:?} template for '{}' written: {}",
            format,
            target.as_str(),
            path.display()
        ));
    }
    Ok(())
}
