//! Interactive input for arguments left off the command line.
//!
//! Commands ask a [`Prompter`] for anything missing. On a terminal that is
//! [`TerminalPrompter`] (dialoguer menus); otherwise [`NonInteractive`] turns
//! each question into the error the command would have raised anyway.

use crate::core::{
    category::Category,
    error::{ChangelogError, Result},
};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::fmt;
use std::io::IsTerminal;

/// Operations offered by the top-level menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    New,
    Release,
    Unreleased,
    Init,
}

impl MenuAction {
    pub const ALL: [MenuAction; 4] = [
        MenuAction::New,
        MenuAction::Release,
        MenuAction::Unreleased,
        MenuAction::Init,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MenuAction::New => "new",
            MenuAction::Release => "release",
            MenuAction::Unreleased => "unreleased",
            MenuAction::Init => "init",
        }
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait Prompter {
    fn select_action(&self) -> Result<MenuAction>;
    fn select_category(&self) -> Result<Category>;
    fn input_content(&self, category: Category) -> Result<String>;
    fn input_version(&self) -> Result<String>;
}

pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select_action(&self) -> Result<MenuAction> {
        let index = Select::with_theme(&self.theme)
            .with_prompt("Changelog CLI Tool")
            .items(&MenuAction::ALL[..])
            .default(0)
            .interact()?;
        Ok(MenuAction::ALL[index])
    }

    fn select_category(&self) -> Result<Category> {
        let index = Select::with_theme(&self.theme)
            .with_prompt("New Entry")
            .items(&Category::ALL[..])
            .default(0)
            .interact()?;
        Ok(Category::ALL[index])
    }

    fn input_content(&self, category: Category) -> Result<String> {
        let content: String = Input::with_theme(&self.theme)
            .with_prompt(format!("Content ({category})"))
            .interact_text()?;
        Ok(content)
    }

    fn input_version(&self) -> Result<String> {
        let version: String = Input::with_theme(&self.theme)
            .with_prompt("Version")
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                crate::core::format::version_to_folder_name(input)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .interact_text()?;
        Ok(version)
    }
}

/// Used when stdin is not a terminal or `--no-input` was given
pub struct NonInteractive;

impl Prompter for NonInteractive {
    fn select_action(&self) -> Result<MenuAction> {
        Err(ChangelogError::MissingCommand)
    }

    fn select_category(&self) -> Result<Category> {
        Err(ChangelogError::unknown_category(""))
    }

    fn input_content(&self, _category: Category) -> Result<String> {
        Err(ChangelogError::EmptyContent)
    }

    fn input_version(&self) -> Result<String> {
        Err(ChangelogError::MissingVersion)
    }
}

/// Pick the prompter for this process
pub fn prompter_for(no_input: bool) -> Box<dyn Prompter> {
    if !no_input && std::io::stdin().is_terminal() {
        Box::new(TerminalPrompter::new())
    } else {
        log::debug!("Interactive prompts disabled");
        Box::new(NonInteractive)
    }
}
