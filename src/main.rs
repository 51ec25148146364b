//! # mdreader
//!
//! Command-line front end for the markdown reader core.
//!
//! ## Usage
//!
//! Show a document's table of contents:
//! ```sh
//! mdreader toc README.md
//! ```
//!
//! Find a keyword:
//! ```sh
//! mdreader search README.md install -o json
//! ```
//!
//! Switch or pick a theme:
//! ```sh
//! mdreader theme --toggle
//! mdreader theme --set dark
//! ```

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, Command, OutputFormat};
use color_eyre::Result;
use mdreader::parser::{self, TocNode, flatten};
use mdreader::{App, SettingsStore, files, search};

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = Cli::parse();

    let store = match args.config {
        Some(path) => SettingsStore::new(path),
        None => SettingsStore::default_location()?,
    };

    match args.command {
        Command::Toc { file, output } => {
            let doc = parser::parse_file(&file)?;
            print_toc(&doc.toc(), output)?;
        }
        Command::Search {
            file,
            keyword,
            output,
        } => {
            let doc = parser::parse_file(&file)?;
            let text = doc.plain_text();
            let result = search(&text, &keyword);

            match output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
                OutputFormat::Plain | OutputFormat::Tree => {
                    println!("{} match(es) for {:?}", result.total_matches, result.keyword);
                    for &position in &result.match_positions {
                        println!("  {:>6}  {}", position, context_line(&text, position));
                    }
                }
            }
        }
        Command::Open { file } => {
            let mut app = App::new(store);
            let doc = app.open(&file)?;
            println!("{}", doc.path.display());
            print_toc(&doc.toc, OutputFormat::Tree)?;
        }
        Command::Recent => {
            let app = App::new(store);
            if app.recent.list().is_empty() {
                println!("No recent files.");
            }
            for (i, path) in app.recent.list().iter().enumerate() {
                println!("{:>2}. {}", i + 1, path);
            }
        }
        Command::Theme { toggle, set } => {
            let mut app = App::new(store);
            if let Some(theme) = set {
                app.theme.set(theme);
            } else if toggle {
                app.toggle_theme();
            }
            println!("Theme: {}", app.theme.current());
        }
        Command::Export { file, output } => {
            let mut app = App::new(store);
            let theme = app.theme.current();
            let page = app.open(&file)?.to_page(theme);
            files::export_html(&page, &output)?;
            println!("Exported {}", output.display());
        }
    }

    Ok(())
}

fn print_toc(toc: &[TocNode], output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(toc)?),
        OutputFormat::Plain => {
            for node in flatten(toc) {
                println!(
                    "{}{} {}  (#{})",
                    "  ".repeat(node.level.saturating_sub(1)),
                    "#".repeat(node.level),
                    node.title,
                    node.anchor_id
                );
            }
        }
        OutputFormat::Tree => {
            for (i, node) in toc.iter().enumerate() {
                print!("{}", node.render_box_tree("", i + 1 == toc.len()));
            }
        }
    }
    Ok(())
}

/// The line of `text` containing byte offset `position`.
fn context_line(text: &str, position: usize) -> &str {
    let start = text[..position].rfind('\n').map_or(0, |i| i + 1);
    let end = text[position..]
        .find('\n')
        .map_or(text.len(), |i| position + i);
    text[start..end].trim()
}
