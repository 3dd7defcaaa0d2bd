//! Interactive collection of the project name and starter choice.
//!
//! The [`Prompter`] trait hides the terminal backend (`dialoguer`). Values
//! already supplied on the command line skip their prompt.

use std::io::IsTerminal;

use anyhow::{Context, Result, anyhow};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use tracing::debug;

use crate::core::types::{Answers, ProjectName, StarterChoice};
use crate::error::ScaffoldError;

pub const NAME_PROMPT: &str = "What is your project name?";
pub const STARTER_PROMPT: &str = "Choose your starter project:";

/// Blocking source of user answers.
pub trait Prompter {
    fn project_name(&self) -> Result<String>;

    /// Pick one of `choices`.
    fn starter(&self, choices: &[StarterChoice]) -> Result<StarterChoice>;
}

/// Terminal prompts via `dialoguer`.
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_terminal() -> Result<()> {
        if !std::io::stdin().is_terminal() {
            return Err(anyhow!(
                "no interactive terminal attached; pass NAME and --starter instead"
            ));
        }
        Ok(())
    }
}

impl Prompter for DialoguerPrompter {
    fn project_name(&self) -> Result<String> {
        Self::ensure_terminal()?;
        Input::<String>::with_theme(&self.theme)
            .with_prompt(NAME_PROMPT)
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("project name must not be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .context("read project name")
    }

    fn starter(&self, choices: &[StarterChoice]) -> Result<StarterChoice> {
        Self::ensure_terminal()?;
        let labels: Vec<&str> = choices.iter().map(|c| c.as_str()).collect();
        let index = Select::with_theme(&self.theme)
            .with_prompt(STARTER_PROMPT)
            .items(&labels)
            .default(0)
            .interact()
            .context("read starter choice")?;
        choices
            .get(index)
            .copied()
            .ok_or_else(|| anyhow!("starter index {index} out of range"))
    }
}

/// Prompt for whatever `name` and `starter` leave unset, name first.
pub fn collect_answers(
    prompter: &dyn Prompter,
    name: Option<String>,
    starter: Option<StarterChoice>,
) -> Result<Answers, ScaffoldError> {
    let raw_name = match name {
        Some(name) => name,
        None => prompter.project_name().map_err(ScaffoldError::Prompt)?,
    };
    let project_name = ProjectName::new(raw_name).map_err(ScaffoldError::InvalidName)?;
    let starter = match starter {
        Some(starter) => starter,
        None => prompter
            .starter(&StarterChoice::ALL)
            .map_err(ScaffoldError::Prompt)?,
    };
    debug!(name = %project_name, %starter, "answers collected");
    Ok(Answers {
        project_name,
        starter,
    })
}
