//! Child process execution.

use anyhow::{Context, Result, anyhow};
use std::path::Path;
use std::process::Command;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self))]
    pub(crate) fn run_command_impl(&self, program: &str, args: &[String], dir: &Path) -> Result<()> {
        log::debug!("Running {} {:?} in {}", program, args, dir.display());

        let status = Command::new(program)
            .args(args)
            .current_dir(dir)
            .status()
            .with_context(|| format!("Failed to start {}", program))?;

        if !status.success() {
            return Err(anyhow!("{} exited with {}", program, status));
        }
        Ok(())
    }
}
