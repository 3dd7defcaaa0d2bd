//! Baseline file contents written into every new project.

use anyhow::Result;
use minijinja::{AutoEscape, Environment, context};

use crate::core::types::ProjectName;

const README_TEMPLATE: &str = include_str!("templates/readme.md");

/// Ignore-file body. Constant across runs.
pub const GITIGNORE: &str = include_str!("templates/gitignore");

/// Template engine wrapper around minijinja.
pub struct ContentEngine {
    env: Environment<'static>,
}

impl ContentEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        // Names are substituted literally.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.add_template("readme", README_TEMPLATE)
            .expect("readme template should be valid");
        Self { env }
    }

    pub fn render_readme(&self, name: &ProjectName) -> Result<String> {
        let template = self.env.get_template("readme")?;
        let rendered = template.render(context! {
            project_name => name.as_str(),
        })?;
        Ok(rendered)
    }
}

impl Default for ContentEngine {
    fn default() -> Self {
        Self::new()
    }
}
