use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::app::Options;
use crate::config::Config;
use crate::render::transition::TransitionKind;

#[derive(Parser)]
#[command(name = "ayodeck")]
#[command(author, version, about = "The AYO project pitch deck, presented natively")]
#[command(long_about = "The AYO project pitch deck, presented natively.\n\n\
    Examples:\n  \
    ayodeck                       Present fullscreen\n  \
    ayodeck --windowed            Present in a window\n  \
    ayodeck --slide architecture  Start on a slide (number or id)\n  \
    ayodeck list                  Print the deck outline")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long, global = false)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed number or slide id)
    #[arg(long, global = false)]
    pub slide: Option<String>,

    /// Skip the opening branding animation
    #[arg(long, global = false)]
    pub skip_intro: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the deck outline
    List,

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g. defaults.theme, defaults.auto_advance_ms)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    /// Merge CLI flags over the config file.
    pub fn options(&self, config: &Config) -> Options {
        Options {
            windowed: self.windowed,
            start_slide: self.slide.clone().or_else(|| config.start_slide()),
            skip_intro: self.skip_intro || config.skip_intro(),
            theme: config.theme(),
            transition: TransitionKind::from_name(&config.transition()),
            auto_advance: config.auto_advance(),
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        if self.no_color {
            colored::control::set_override(false);
        }

        match self.command {
            Some(Commands::List) => crate::commands::list::run(),
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                println!("ayodeck {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
            None => {
                let config = Config::load_or_default();
                let options = self.options(&config);
                crate::app::run(options)
            }
        }
    }
}
