use crate::commands::{execute_init, execute_new, execute_release, execute_unreleased};
use crate::core::{
    config::Config,
    error::Result,
    prompt::{MenuAction, Prompter},
};

/// Run without a subcommand: ask which operation to perform.
pub fn execute_menu(config: &Config, prompter: &dyn Prompter) -> Result<MenuAction> {
    let action = prompter.select_action()?;
    log::debug!("Menu selection: {action}");

    match action {
        MenuAction::New => {
            execute_new(config, prompter, None, Vec::new())?;
        }
        MenuAction::Release => {
            execute_release(config, prompter, None, None)?;
        }
        MenuAction::Unreleased => {
            execute_unreleased(config, None)?;
        }
        MenuAction::Init => {
            execute_init(config, false)?;
        }
    }

    Ok(action)
}
