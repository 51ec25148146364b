use clap::{Parser, Subcommand, ValueEnum};
use mdreader::Theme;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mdreader")]
#[command(version)]
#[command(about = "A markdown reader: table of contents, search, recent files and theme")]
#[command(
    long_about = "mdreader - the command-line face of a markdown reader.\n\n\
    Examples:\n  \
    mdreader toc README.md             # Show the table of contents\n  \
    mdreader search README.md install  # Find keyword occurrences\n  \
    mdreader open README.md            # Open and record in recent files\n  \
    mdreader recent                    # List recently opened files\n  \
    mdreader theme --toggle            # Switch between Light and Dark\n  \
    mdreader theme --set dark          # Pick a theme explicitly"
)]
pub struct Cli {
    /// Settings file to use instead of the platform default
    ///
    /// Defaults to <config dir>/mdreader/settings.toml.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the table of contents of a markdown file
    Toc {
        /// Markdown file to read
        file: PathBuf,

        /// Output format
        #[arg(short = 'o', long = "output", default_value = "tree")]
        output: OutputFormat,
    },

    /// Search a markdown file's text for a keyword (case-insensitive)
    Search {
        /// Markdown file to read
        file: PathBuf,

        /// Keyword to look for
        keyword: String,

        /// Output format
        #[arg(short = 'o', long = "output", default_value = "plain")]
        output: OutputFormat,
    },

    /// Open a markdown file: record it in recent files and show its outline
    Open {
        /// Markdown file to open
        file: PathBuf,
    },

    /// List recently opened files, newest first
    Recent,

    /// Show the current theme, or change it with --toggle or --set
    Theme {
        /// Switch between Light and Dark and save the choice
        #[arg(long = "toggle")]
        toggle: bool,

        /// Use the given theme (light or dark) and save the choice
        #[arg(long = "set", value_name = "THEME", conflicts_with = "toggle")]
        set: Option<Theme>,
    },

    /// Export a markdown file as a standalone HTML page in the current theme
    Export {
        /// Markdown file to read
        file: PathBuf,

        /// Destination HTML file
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Plain,
    /// JSON for scripting
    Json,
    /// Box-drawing tree
    Tree,
}
