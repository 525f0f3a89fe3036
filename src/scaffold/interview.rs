use anyhow::Result;

use crate::runtime::Runtime;
use crate::settings::{Meta, PluginEntry};

/// Answers collected by the project questions, trimmed but otherwise raw.
/// Fallbacks (repository URL, homepage, license) are applied later when the
/// project identity is derived.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectAnswers {
    pub name: String,
    pub description: String,
    pub homepage: String,
    pub license: String,
    pub github_username: String,
    pub author_name: String,
    pub author_email: String,
    pub author_url: String,
}

impl ProjectAnswers {
    /// The subset of answers that feeds the persistent settings merge.
    pub fn meta_candidate(&self) -> Meta {
        Meta {
            github_username: Some(self.github_username.clone()),
            author_name: Some(self.author_name.clone()),
            author_email: Some(self.author_email.clone()),
            author_url: Some(self.author_url.clone()),
        }
    }
}

/// Optional development tooling picked during the interview.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleChoices {
    pub jscs: bool,
    pub release: bool,
}

impl Default for ModuleChoices {
    fn default() -> Self {
        Self {
            jscs: true,
            release: true,
        }
    }
}

/// Ask the eight project questions. Identity questions default to the
/// stored metadata from earlier runs.
#[tracing::instrument(skip(runtime, stored))]
pub fn project_questions<R: Runtime>(
    runtime: &R,
    stored: &Meta,
    default_name: &str,
) -> Result<ProjectAnswers> {
    Ok(ProjectAnswers {
        name: runtime.ask("Project Name", default_name)?,
        description: runtime.ask("Description", "The best project ever.")?,
        homepage: runtime.ask("Homepage", "")?,
        license: runtime.ask("License", "MIT")?,
        github_username: runtime.ask(
            "GitHub username",
            stored.github_username.as_deref().unwrap_or(""),
        )?,
        author_name: runtime.ask("Author's Name", stored.author_name.as_deref().unwrap_or(""))?,
        author_email: runtime.ask(
            "Author's Email",
            stored.author_email.as_deref().unwrap_or(""),
        )?,
        author_url: runtime.ask(
            "Author's Homepage",
            stored.author_url.as_deref().unwrap_or(""),
        )?,
    })
}

/// Ask which development modules to include, both preselected.
#[tracing::instrument(skip(runtime))]
pub fn module_questions<R: Runtime>(runtime: &R) -> Result<ModuleChoices> {
    let choices = vec![
        String::from("jscs (JavaScript Code Style checker)"),
        String::from("release (Bump npm versions with Gulp)"),
    ];
    let picked = runtime.pick("Which modules would you like to include?", &choices, &[0, 1])?;

    Ok(ModuleChoices {
        jscs: picked.contains(&0),
        release: picked.contains(&1),
    })
}

/// Offer the plugin catalog as a multi-select, none preselected. Returns the
/// selected package names in catalog order.
#[tracing::instrument(skip(runtime, catalog))]
pub fn plugin_questions<R: Runtime>(runtime: &R, catalog: &[PluginEntry]) -> Result<Vec<String>> {
    if catalog.is_empty() {
        return Ok(Vec::new());
    }

    let choices: Vec<String> = catalog
        .iter()
        .map(|entry| format!("{} ({})", entry.name, entry.description))
        .collect();
    let picked = runtime.pick(
        "Which hapi plugins would you like to include?",
        &choices,
        &[],
    )?;

    Ok(picked
        .into_iter()
        .filter_map(|index| catalog.get(index))
        .map(|entry| entry.name.clone())
        .collect())
}

/// Ask whether to generate the example plugin skeleton, off by default.
#[tracing::instrument(skip(runtime))]
pub fn custom_plugin_question<R: Runtime>(runtime: &R) -> Result<bool> {
    runtime.confirm(
        "Would you like to include boilerplate for your own hapi plugin?",
        false,
    )
}
