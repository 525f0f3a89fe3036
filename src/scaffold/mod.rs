use anyhow::{Result, bail};
use chrono::Datelike;
use log::{debug, info, warn};
use reqwest::Client;
use std::path::{Path, PathBuf};

use crate::{
    registry::{LatestVersion, NpmRegistry},
    resolver::{ResolvedDependencies, resolve_latest},
    runtime::Runtime,
    settings::SettingsStore,
};

mod interview;
mod paths;
mod project;
mod templates;

pub use interview::{ModuleChoices, ProjectAnswers};
pub use project::Project;

use paths::resolve_settings_path;

const GREETING: &str =
    "Hello, and welcome to the hapi composer generator. Let's be awesome together!";

/// Scaffold a new project, wiring up the real registry client.
#[tracing::instrument(skip(runtime, dir, settings_path, registry_url))]
pub async fn new_project<R: Runtime + 'static>(
    runtime: R,
    dir: Option<PathBuf>,
    skip_install: bool,
    settings_path: Option<PathBuf>,
    registry_url: Option<String>,
) -> Result<()> {
    let client = Client::builder().user_agent("hapigen-cli").build()?;
    let registry = NpmRegistry::new(client, registry_url);
    run(&runtime, &registry, dir, skip_install, settings_path).await
}

/// The full scaffold flow: interview, settings merge, version resolution,
/// layout write, dependency installation.
#[tracing::instrument(skip(runtime, registry, dir, settings_path))]
pub async fn run<R: Runtime, C: LatestVersion>(
    runtime: &R,
    registry: &C,
    dir: Option<PathBuf>,
    skip_install: bool,
    settings_path: Option<PathBuf>,
) -> Result<()> {
    let settings_path = resolve_settings_path(runtime, settings_path)?;
    let mut store = SettingsStore::load(runtime, settings_path)?;

    let target = target_dir(runtime, dir)?;
    let manifest = target.join("package.json");
    if runtime.exists(&manifest) {
        bail!(
            "{} already exists, refusing to scaffold over an existing project",
            manifest.display()
        );
    }

    println!("{}", GREETING);
    println!();

    let default_name = default_project_name(runtime, &target);
    let answers = interview::project_questions(runtime, store.meta(), &default_name)?;
    store.set_meta(&answers.meta_candidate())?;

    let modules = interview::module_questions(runtime)?;
    let selected = interview::plugin_questions(runtime, store.dependencies())?;
    let custom_plugin = interview::custom_plugin_question(runtime)?;

    let resolved = resolve_latest(registry, &selected).await;

    let year = chrono::Local::now().year();
    let project = Project::from_answers(&answers, year);

    write_project(runtime, &target, &project, &modules, &resolved, custom_plugin)?;

    if skip_install {
        debug!("Skipping dependency installation");
    } else {
        install_dependencies(runtime, &target);
    }

    println!();
    println!("Project {} is ready in {}", project.slug, target.display());

    Ok(())
}

/// Print the stored settings: the file location, the remembered answers and
/// the plugin catalog.
#[tracing::instrument(skip(runtime, settings_path))]
pub fn show_settings<R: Runtime>(runtime: &R, settings_path: Option<PathBuf>) -> Result<()> {
    let path = resolve_settings_path(runtime, settings_path)?;
    let store = SettingsStore::load(runtime, path)?;

    println!("Settings file: {}", store.path().display());

    let meta = store.meta();
    println!();
    println!("Stored answers:");
    print_meta_field("GitHub username", meta.github_username.as_deref());
    print_meta_field("Author's Name", meta.author_name.as_deref());
    print_meta_field("Author's Email", meta.author_email.as_deref());
    print_meta_field("Author's Homepage", meta.author_url.as_deref());

    println!();
    println!("Known plugins:");
    for entry in store.dependencies() {
        println!("  {} ({})", entry.name, entry.description);
    }

    Ok(())
}

fn print_meta_field(label: &str, value: Option<&str>) {
    match value {
        Some(value) => println!("  {}: {}", label, value),
        None => println!("  {}: (unset)", label),
    }
}

fn target_dir<R: Runtime>(runtime: &R, dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => runtime.current_dir(),
    }
}

/// Default project name offered in the interview: the target directory's
/// basename, falling back to the working directory's basename.
fn default_project_name<R: Runtime>(runtime: &R, target: &Path) -> String {
    if let Some(name) = target.file_name() {
        return name.to_string_lossy().into_owned();
    }
    runtime
        .current_dir()
        .ok()
        .and_then(|cwd| cwd.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| String::from("app"))
}

#[tracing::instrument(skip(runtime, project, modules, resolved))]
fn write_project<R: Runtime>(
    runtime: &R,
    target: &Path,
    project: &Project,
    modules: &ModuleChoices,
    resolved: &ResolvedDependencies,
    custom_plugin: bool,
) -> Result<()> {
    if !runtime.exists(target) {
        runtime.create_dir_all(target)?;
    }

    for (relative, content) in templates::project_files(project, modules, resolved, custom_plugin)?
    {
        let path = target.join(&relative);
        if let Some(parent) = path.parent()
            && !runtime.exists(parent)
        {
            runtime.create_dir_all(parent)?;
        }
        runtime.write(&path, content.as_bytes())?;
        info!("Created {}", relative.display());
    }

    Ok(())
}

#[tracing::instrument(skip(runtime))]
fn install_dependencies<R: Runtime>(runtime: &R, target: &Path) {
    println!();
    println!("Running npm install...");
    if let Err(e) = runtime.run_command("npm", &[String::from("install")], target) {
        warn!(
            "npm install failed: {:#}. Run it manually in {}",
            e,
            target.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MockLatestVersion;
    use crate::runtime::MockRuntime;
    use crate::test_utils::{test_project_dir, test_settings_path};
    use serde_json::Value;
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};

    type WrittenFiles = Arc<Mutex<Vec<(PathBuf, String)>>>;

    /// Runtime scripted to answer every prompt with the offered default and
    /// to track created directories and written files.
    fn scripted_runtime(written: WrittenFiles) -> MockRuntime {
        let mut runtime = MockRuntime::new();
        let created: Arc<Mutex<HashSet<PathBuf>>> = Arc::new(Mutex::new(HashSet::new()));

        runtime
            .expect_config_dir()
            .returning(|| Some(PathBuf::from("/home/user/.config")));
        runtime
            .expect_current_dir()
            .returning(|| Ok(test_project_dir()));

        let created_for_exists = created.clone();
        runtime.expect_exists().returning(move |path| {
            path == test_project_dir() || created_for_exists.lock().unwrap().contains(path)
        });
        runtime.expect_create_dir_all().returning(move |path| {
            created.lock().unwrap().insert(path.to_path_buf());
            Ok(())
        });
        runtime.expect_write().returning(move |path, contents| {
            written.lock().unwrap().push((
                path.to_path_buf(),
                String::from_utf8_lossy(contents).into_owned(),
            ));
            Ok(())
        });

        runtime
            .expect_ask()
            .returning(|_, default| Ok(default.to_string()));
        runtime
            .expect_pick()
            .returning(|_, _, preselected| Ok(preselected.to_vec()));
        runtime.expect_confirm().returning(|_, default| Ok(default));

        runtime
    }

    fn written_content<'a>(files: &'a [(PathBuf, String)], path: &str) -> &'a str {
        files
            .iter()
            .find(|(p, _)| p.as_path() == Path::new(path))
            .map(|(_, content)| content.as_str())
            .unwrap_or_else(|| panic!("expected write to {}", path))
    }

    #[tokio::test]
    async fn test_run_with_all_defaults() {
        let written: WrittenFiles = Arc::new(Mutex::new(Vec::new()));
        let runtime = scripted_runtime(written.clone());
        // No expectations: resolving an empty selection must not touch it
        let registry = MockLatestVersion::new();

        run(&runtime, &registry, None, true, None).await.unwrap();

        let written = written.lock().unwrap();

        let settings = written_content(&written, "/home/user/.config/hapigen/settings.json");
        let settings: Value = serde_json::from_str(settings).unwrap();
        assert!(settings["meta"].as_object().unwrap().is_empty());
        assert_eq!(settings["dependencies"][0]["name"], "joi");

        let manifest = written_content(
            &written,
            "/home/user/projects/demo-service/package.json",
        );
        let manifest: Value = serde_json::from_str(manifest).unwrap();
        assert_eq!(manifest["name"], "demo-service");
        assert_eq!(manifest["description"], "The best project ever.");
        let dependencies = manifest["dependencies"].as_object().unwrap();
        assert_eq!(dependencies.len(), 1);
        assert!(dependencies.contains_key("hapi"));

        assert!(written.iter().any(|(p, _)| {
            p.as_path() == Path::new("/home/user/projects/demo-service/test/demo-service_test.js")
        }));
        assert!(
            !written
                .iter()
                .any(|(p, _)| p.to_string_lossy().contains("plugins/example"))
        );
    }

    #[tokio::test]
    async fn test_run_keeps_scaffold_when_install_fails() {
        let written: WrittenFiles = Arc::new(Mutex::new(Vec::new()));
        let mut runtime = scripted_runtime(written.clone());
        runtime
            .expect_run_command()
            .withf(|program, args, dir| {
                program == "npm" && args == ["install".to_string()] && dir == test_project_dir()
            })
            .times(1)
            .returning(|_, _, _| Err(anyhow::anyhow!("npm not found")));
        let registry = MockLatestVersion::new();

        run(&runtime, &registry, None, false, None).await.unwrap();

        let written = written.lock().unwrap();
        let manifest = written_content(
            &written,
            "/home/user/projects/demo-service/package.json",
        );
        let manifest: Value = serde_json::from_str(manifest).unwrap();
        assert_eq!(manifest["name"], "demo-service");
    }

    #[tokio::test]
    async fn test_run_refuses_existing_manifest() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_config_dir()
            .returning(|| Some(PathBuf::from("/home/user/.config")));
        runtime
            .expect_current_dir()
            .returning(|| Ok(test_project_dir()));
        // Only the target manifest exists; the settings file does not
        runtime
            .expect_exists()
            .returning(|path| path == test_project_dir().join("package.json"));

        let registry = MockLatestVersion::new();
        let err = run(&runtime, &registry, None, true, None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("package.json already exists"));
    }

    #[test]
    fn test_default_project_name_from_target() {
        let runtime = MockRuntime::new();
        assert_eq!(
            default_project_name(&runtime, Path::new("/tmp/my-api")),
            "my-api"
        );
    }

    #[test]
    fn test_default_project_name_falls_back_to_cwd() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_current_dir()
            .returning(|| Ok(test_project_dir()));
        assert_eq!(
            default_project_name(&runtime, Path::new(".")),
            "demo-service"
        );
    }

    #[test]
    fn test_show_settings_with_stored_file() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_config_dir()
            .returning(|| Some(PathBuf::from("/home/user/.config")));
        runtime.expect_exists().returning(|_| true);
        runtime
            .expect_read_to_string()
            .withf(|path| path == test_settings_path())
            .returning(|_| Ok(crate::test_utils::populated_settings_json()));

        show_settings(&runtime, None).unwrap();
    }
}
