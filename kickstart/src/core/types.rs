//! Input types collected before any side effect runs.
//!
//! Both values are immutable once constructed; everything downstream derives
//! from them.

use std::fmt;

use anyhow::{Result, anyhow};
use clap::ValueEnum;

/// User-supplied project name. Never empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(anyhow!("project name must not be empty"));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Starter template to extract into the new project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum StarterChoice {
    #[value(name = "full-stack", alias = "FullStackStarter")]
    FullStackStarter,
    #[value(name = "api", alias = "APIStarter")]
    ApiStarter,
    #[value(name = "cli", alias = "CLIStarter")]
    CliStarter,
    #[value(name = "relational", alias = "RelationalStarter")]
    RelationalStarter,
}

impl StarterChoice {
    /// All choices in prompt order.
    pub const ALL: [StarterChoice; 4] = [
        StarterChoice::FullStackStarter,
        StarterChoice::ApiStarter,
        StarterChoice::CliStarter,
        StarterChoice::RelationalStarter,
    ];

    /// Canonical name; also the archive file stem.
    pub fn as_str(self) -> &'static str {
        match self {
            StarterChoice::FullStackStarter => "FullStackStarter",
            StarterChoice::ApiStarter => "APIStarter",
            StarterChoice::CliStarter => "CLIStarter",
            StarterChoice::RelationalStarter => "RelationalStarter",
        }
    }
}

impl fmt::Display for StarterChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completed prompt answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub project_name: ProjectName,
    pub starter: StarterChoice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_blank_names() {
        assert!(ProjectName::new("").is_err());
        assert!(ProjectName::new("   \t").is_err());
    }

    #[test]
    fn keeps_name_verbatim() {
        let name = ProjectName::new(" my app ").expect("name");
        assert_eq!(name.as_str(), " my app ");
    }

    #[test]
    fn canonical_names_match_archive_stems() {
        let names: Vec<&str> = StarterChoice::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "FullStackStarter",
                "APIStarter",
                "CLIStarter",
                "RelationalStarter"
            ]
        );
    }

    #[test]
    fn value_enum_accepts_short_and_canonical_spellings() {
        assert_eq!(
            StarterChoice::from_str("cli", true).expect("short"),
            StarterChoice::CliStarter
        );
        assert_eq!(
            StarterChoice::from_str("APIStarter", true).expect("canonical"),
            StarterChoice::ApiStarter
        );
        assert_eq!(
            StarterChoice::from_str("relationalstarter", true).expect("case-insensitive"),
            StarterChoice::RelationalStarter
        );
    }
}
