//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rpkg - package installation front-end
///
/// Stage package, group and local rpm file installations against a local
/// resolution engine.
#[derive(Parser, Debug)]
#[command(
    name = "rpkg",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Installation front-end for an RPM-style package resolution engine",
    long_about = "rpkg converts a mixed install request (package specs, @group specs, \
                  local rpm files) into a staged transaction for an external executor, \
                  tolerating or aborting on unresolved targets per the strict policy.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  rpkg install vim @core\n    \
                  rpkg localinstall ./hello-1.0-1.x86_64.rpm\n    \
                  rpkg install-nevra vim-9.1.0-1.fc40.x86_64\n    \
                  rpkg --no-strict install vim doesnotexist"
)]
pub struct Cli {
    /// Configuration file (defaults to ./rpkg.yaml, then the user config dir)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Assume yes for all prompts
    #[arg(long = "assumeyes", short = 'y', global = true)]
    pub assumeyes: bool,

    /// Abort when any requested target cannot be resolved
    #[arg(long, global = true, overrides_with = "no_strict")]
    pub strict: bool,

    /// Tolerate unresolved targets
    #[arg(long = "no-strict", global = true, overrides_with = "strict")]
    pub no_strict: bool,

    /// Only consider packages that carry security advisories
    #[arg(long, global = true)]
    pub security: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Write the staged transaction to this file as YAML
    #[arg(long, global = true, value_name = "FILE")]
    pub out: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Strictness override from the command line, if any.
    pub fn strict_override(&self) -> Option<bool> {
        if self.strict {
            Some(true)
        } else if self.no_strict {
            Some(false)
        } else {
            None
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install packages, @groups or rpm files
    Install(InstallArgs),

    /// Install local rpm files only
    Localinstall(InstallArgs),

    /// Install packages matched by plain name
    InstallN(InstallArgs),

    /// Install packages matched by name.arch
    InstallNa(InstallArgs),

    /// Install packages matched by full name-[epoch:]version-release.arch
    InstallNevra(InstallArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments shared by the install command family
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install a package:\n    rpkg install vim\n\n\
                  Install a group with a package:\n    rpkg install @core vim\n\n\
                  Install a local rpm file:\n    rpkg localinstall ./hello-1.0-1.x86_64.rpm\n\n\
                  Install an exact build:\n    rpkg install-nevra vim-9.1.0-1.fc40.x86_64")]
pub struct InstallArgs {
    /// Packages, @groups or rpm file paths to install
    #[arg(value_name = "PACKAGE", num_args = 1.., required = true)]
    pub packages: Vec<String>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    rpkg completions --shell bash > ~/.bash_completion.d/rpkg\n\n\
                  Generate zsh completions:\n    rpkg completions --shell zsh > ~/.zfunc/_rpkg")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
