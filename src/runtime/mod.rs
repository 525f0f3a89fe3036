//! Runtime abstraction for system operations.
//!
//! This module provides a trait-based abstraction over system operations,
//! enabling dependency injection and testability.
//!
//! # Structure
//!
//! - `env` - System directories (home, config, working directory)
//! - `fs` - File system operations (read, write, directory)
//! - `process` - Child process execution
//! - `prompt` - User interaction (questions, confirmations, checklists)

mod env;
mod fs;
mod process;
mod prompt;

use anyhow::Result;
use std::path::{Path, PathBuf};

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // File System
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    fn exists(&self, path: &Path) -> bool;

    // Directories
    fn home_dir(&self) -> Option<PathBuf>;
    fn config_dir(&self) -> Option<PathBuf>;
    fn current_dir(&self) -> Result<PathBuf>;

    // Processes
    /// Run a command to completion in `dir`, inheriting stdio. Errors if the
    /// command cannot be spawned or exits with a non-zero status.
    fn run_command(&self, program: &str, args: &[String], dir: &Path) -> Result<()>;

    // User interaction
    /// Ask a free-form question. Returns the trimmed answer, or `default`
    /// when the answer is empty. An empty `default` means no default.
    fn ask(&self, question: &str, default: &str) -> Result<String>;

    /// Ask for confirmation. An empty answer returns `default`; otherwise
    /// true only for y/yes.
    fn confirm(&self, question: &str, default: bool) -> Result<bool>;

    /// Present a numbered checklist and return the selected indices.
    /// An empty answer keeps `preselected`.
    fn pick(&self, question: &str, choices: &[String], preselected: &[usize])
    -> Result<Vec<usize>>;
}

pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.write_impl(path, contents)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.read_to_string_impl(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        self.create_dir_all_impl(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.exists_impl(path)
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir_impl()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir_impl()
    }

    fn current_dir(&self) -> Result<PathBuf> {
        self.current_dir_impl()
    }

    fn run_command(&self, program: &str, args: &[String], dir: &Path) -> Result<()> {
        self.run_command_impl(program, args, dir)
    }

    fn ask(&self, question: &str, default: &str) -> Result<String> {
        self.ask_impl(question, default)
    }

    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        self.confirm_impl(question, default)
    }

    fn pick(
        &self,
        question: &str,
        choices: &[String],
        preselected: &[usize],
    ) -> Result<Vec<usize>> {
        self.pick_impl(question, choices, preselected)
    }
}
