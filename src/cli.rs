//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use crate::commands::{
    build::BuildCommand, clean::CleanCommand, config::ConfigCommand, init::InitCommand,
    list::ListCommand, profile::ProfileCommand, test::TestCommand,
};
use crate::version;

/// hatch - command line tools for working with the colcon meta-buildsystem
/// and colcon workspaces.
#[derive(Parser, Debug)]
#[command(name = "hatch")]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Prints the hatch version.
    #[arg(long)]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available verbs
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Builds a colcon workspace.
    Build(BuildCommand),

    /// Deletes various products of the build verb.
    Clean(CleanCommand),

    /// Configures a colcon workspace's context.
    Config(ConfigCommand),

    /// Initializes a given folder as a colcon workspace.
    Init(InitCommand),

    /// Lists colcon packages in the workspace or other arbitrary folders.
    List(ListCommand),

    /// Manage config profiles for a colcon workspace.
    Profile(ProfileCommand),

    /// Tests a colcon workspace.
    Test(TestCommand),
}

impl Cli {
    /// Execute the parsed invocation. `colcon_args` is the pass-through
    /// list the pre-parse splitter extracted from the raw argument vector.
    pub fn execute(self, colcon_args: Vec<String>) -> Result<()> {
        if self.version {
            version::print_version();
            return Ok(());
        }

        let Some(command) = self.command else {
            let _ = Cli::command().print_help();
            eprintln!();
            anyhow::bail!("No verb provided.");
        };

        match command {
            Commands::Build(cmd) => cmd.execute(colcon_args),
            Commands::Clean(cmd) => cmd.execute(),
            Commands::Config(cmd) => cmd.execute(colcon_args),
            Commands::Init(cmd) => cmd.execute(),
            Commands::List(cmd) => cmd.execute(),
            Commands::Profile(cmd) => cmd.execute(),
            Commands::Test(cmd) => cmd.execute(colcon_args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_asserts() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_build_with_packages() {
        let cli = Cli::parse_from(["hatch", "build", "pkg_a", "pkg_b", "--no-deps"]);
        let Some(Commands::Build(cmd)) = cli.command else {
            panic!("expected build verb");
        };
        assert_eq!(cmd.pkgs, vec!["pkg_a", "pkg_b"]);
        assert!(cmd.no_deps);
    }

    #[test]
    fn test_parse_config_space_flags() {
        let cli = Cli::parse_from([
            "hatch",
            "config",
            "-w",
            "/tmp/ws",
            "--build-space",
            "out",
            "--space-suffix",
            "-rel",
        ]);
        let Some(Commands::Config(cmd)) = cli.command else {
            panic!("expected config verb");
        };
        assert_eq!(cmd.build_space.as_deref(), Some("out"));
        assert_eq!(cmd.space_suffix.as_deref(), Some("-rel"));
    }

    #[test]
    fn test_version_flag_without_verb() {
        let cli = Cli::parse_from(["hatch", "--version"]);
        assert!(cli.version);
        assert!(cli.command.is_none());
    }
}
