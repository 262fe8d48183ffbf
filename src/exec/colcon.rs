//! Colcon invocation building and launching
//!
//! An effective profile configuration plus a package selection becomes one
//! shell-interpreted command line, executed via `bash -c` in the workspace
//! root. The child gets an empty environment, so only the optional
//! `source <extend>/setup.bash &&` prefix establishes one.

use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::config::ProfileConfig;
use crate::error::HatchError;
use crate::workspace::Workspace;

use super::priority::PriorityAdjuster;

/// Environment setup script sourced from an extend path.
const EXTEND_SETUP_SCRIPT: &str = "setup.bash";

/// Cadence of the child liveness / renice polling loop.
const POLL_INTERVAL: Duration = Duration::from_secs(1);

/// A fully resolved external build invocation.
#[derive(Debug)]
pub struct ColconInvocation {
    verb: &'static str,
    build_space: String,
    install_space: String,
    test_result_space: String,
    colcon_args: Vec<String>,
    packages: Vec<String>,
    no_deps: bool,
    extend_path: Option<PathBuf>,
}

impl ColconInvocation {
    /// Start an invocation from an effective configuration.
    pub fn new(verb: &'static str, config: &ProfileConfig) -> Self {
        Self {
            verb,
            build_space: config.build_space.clone(),
            install_space: config.install_space.clone(),
            test_result_space: config.test_result_space.clone(),
            colcon_args: config.colcon_build_args.clone(),
            packages: Vec::new(),
            no_deps: false,
            extend_path: config.extend().map(PathBuf::from),
        }
    }

    /// Restrict the invocation to a package selection. With `no_deps` the
    /// named packages are built alone, otherwise up to and including their
    /// dependencies. An empty selection means "build everything".
    pub fn packages(mut self, packages: Vec<String>, no_deps: bool) -> Self {
        self.packages = packages;
        self.no_deps = no_deps;
        self
    }

    /// The colcon argument vector, before shell rendering.
    pub fn argv(&self) -> Vec<String> {
        let mut argv = vec![
            "colcon".to_string(),
            self.verb.to_string(),
            "--build-base".to_string(),
            self.build_space.clone(),
            "--install-base".to_string(),
            self.install_space.clone(),
            "--test-result-base".to_string(),
            self.test_result_space.clone(),
        ];

        argv.extend(self.colcon_args.iter().cloned());

        if !self.packages.is_empty() {
            if self.no_deps {
                argv.push("--packages-select".to_string());
            } else {
                argv.push("--packages-up-to".to_string());
            }
            argv.extend(self.packages.iter().cloned());
        }

        argv
    }

    /// Render the shell line, including the sourcing prefix when an extend
    /// path is configured. Fails if the extend setup script is missing.
    pub fn render(&self) -> Result<String> {
        let argv = self.argv();
        let line = shlex::try_join(argv.iter().map(String::as_str))
            .context("Failed to quote colcon command line")?;

        match &self.extend_path {
            Some(extend) => {
                let script = extend.join(EXTEND_SETUP_SCRIPT);
                if !script.exists() {
                    return Err(HatchError::ExtendScriptMissing { script }.into());
                }
                Ok(format!("source {} && {line}", script.display()))
            }
            None => Ok(line),
        }
    }

    /// Launch the invocation in the workspace root and wait for it,
    /// re-applying `nice` to the child's process group once per second.
    /// Returns the child's exit code; signal deaths map to `128 + signo`.
    pub fn launch(
        &self,
        workspace: &Workspace,
        nice: i32,
        adjuster: &dyn PriorityAdjuster,
    ) -> Result<i32> {
        let line = self.render()?;
        println!("Running: {line}");

        let mut command = Command::new("bash");
        command
            .arg("-c")
            .arg(&line)
            .current_dir(&workspace.root)
            .env_clear()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Own process group, so renice and interrupt forwarding reach the
        // whole build tree without touching hatch itself.
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        let mut child = command.spawn().context("Failed to launch colcon")?;
        let pgid = child.id() as i32;
        super::forward_interrupts_to(pgid);

        loop {
            match child.try_wait().context("Failed to poll colcon process")? {
                Some(status) => return Ok(exit_code(status)),
                None => {
                    // Advisory housekeeping; a child that just exited or a
                    // denied renice must not fail the build.
                    let _ = adjuster.adjust(pgid, nice);
                    thread::sleep(POLL_INTERVAL);
                }
            }
        }
    }
}

#[cfg(unix)]
fn exit_code(status: std::process::ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .unwrap_or_else(|| 128 + status.signal().unwrap_or(0))
}

#[cfg(not(unix))]
fn exit_code(status: std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_argv_with_defaults() {
        let invocation = ColconInvocation::new("build", &ProfileConfig::default());
        assert_eq!(
            invocation.argv(),
            strings(&[
                "colcon",
                "build",
                "--build-base",
                "build",
                "--install-base",
                "install",
                "--test-result-base",
                "test_results",
            ])
        );
    }

    #[test]
    fn test_argv_packages_select_with_no_deps() {
        let invocation = ColconInvocation::new("build", &ProfileConfig::default())
            .packages(strings(&["a", "b"]), true);
        let argv = invocation.argv();

        let tail = &argv[argv.len() - 3..];
        assert_eq!(tail, strings(&["--packages-select", "a", "b"]));
    }

    #[test]
    fn test_argv_packages_up_to_without_no_deps() {
        let invocation = ColconInvocation::new("build", &ProfileConfig::default())
            .packages(strings(&["a", "b"]), false);
        let argv = invocation.argv();

        let tail = &argv[argv.len() - 3..];
        assert_eq!(tail, strings(&["--packages-up-to", "a", "b"]));
    }

    #[test]
    fn test_argv_no_packages_no_clause() {
        let invocation =
            ColconInvocation::new("build", &ProfileConfig::default()).packages(vec![], true);
        let argv = invocation.argv();

        assert!(!argv.contains(&"--packages-select".to_string()));
        assert!(!argv.contains(&"--packages-up-to".to_string()));
    }

    #[test]
    fn test_argv_includes_colcon_args_before_selection() {
        let config = ProfileConfig {
            colcon_build_args: strings(&["--symlink-install"]),
            ..ProfileConfig::default()
        };
        let invocation = ColconInvocation::new("build", &config).packages(strings(&["a"]), false);
        let argv = invocation.argv();

        let symlink = argv.iter().position(|a| a == "--symlink-install").unwrap();
        let up_to = argv.iter().position(|a| a == "--packages-up-to").unwrap();
        assert!(symlink < up_to);
    }

    #[test]
    fn test_render_without_extend() {
        let invocation = ColconInvocation::new("build", &ProfileConfig::default());
        let line = invocation.render().unwrap();
        assert!(line.starts_with("colcon build "));
        assert!(!line.contains("source"));
    }

    #[test]
    fn test_render_quotes_arguments() {
        let config = ProfileConfig {
            colcon_build_args: strings(&["--cmake-args", "-DFOO=a b"]),
            ..ProfileConfig::default()
        };
        let invocation = ColconInvocation::new("build", &config);
        let line = invocation.render().unwrap();
        assert!(line.contains("'-DFOO=a b'"));
    }

    #[test]
    fn test_render_with_extend_sources_setup_script() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("setup.bash"), "").unwrap();

        let config = ProfileConfig {
            extend_path: temp_dir.path().display().to_string(),
            ..ProfileConfig::default()
        };
        let invocation = ColconInvocation::new("build", &config);
        let line = invocation.render().unwrap();

        assert!(line.starts_with("source "));
        assert!(line.contains("setup.bash && colcon build"));
    }

    #[test]
    fn test_render_missing_extend_script_fails() {
        let temp_dir = TempDir::new().unwrap();
        let config = ProfileConfig {
            extend_path: temp_dir.path().display().to_string(),
            ..ProfileConfig::default()
        };
        let invocation = ColconInvocation::new("build", &config);

        let err = invocation.render().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HatchError>(),
            Some(HatchError::ExtendScriptMissing { .. })
        ));
    }
}
