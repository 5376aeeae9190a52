//! CLI for building study-page links.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use wol_core::config;
use wol_core::ChapterRef;

use commands::{run_chapter, run_completions, run_config, run_man, run_resolve, run_verse};

/// Top-level CLI for wol-link.
#[derive(Debug, Parser)]
#[command(name = "wol-link")]
#[command(about = "Build links to Watchtower Online Library study pages", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the study-page link for a book and chapter token.
    Verse {
        /// Book number token, substituted as given (e.g. 19).
        book: String,
        /// Chapter number token, substituted as given (e.g. 1).
        chapter: String,
        /// Reject tokens containing characters unsafe for a URL path segment.
        #[arg(long)]
        strict: bool,
        /// Percent-encode tokens instead of substituting them raw.
        #[arg(long)]
        encode: bool,
    },

    /// Print the study-page link for a validated reference like 19:1 or 19/1.
    Chapter {
        /// Book and chapter, book in 1..=66.
        reference: ChapterRef,
    },

    /// Resolve site-relative hrefs to absolute links on the configured origin.
    Resolve {
        /// One or more hrefs, e.g. /en/wol/d/r1/lp-e/1001070123.
        #[arg(required = true)]
        hrefs: Vec<String>,
    },

    /// Show the config file path and the effective configuration.
    Config,

    /// Print shell completions to stdout.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print a roff man page to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Completions { shell } => return run_completions(shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Verse {
                book,
                chapter,
                strict,
                encode,
            } => run_verse(&cfg.link, &book, &chapter, strict, encode)?,
            CliCommand::Chapter { reference } => run_chapter(&cfg.link, reference)?,
            CliCommand::Resolve { hrefs } => run_resolve(&cfg.link, &hrefs)?,
            CliCommand::Config => run_config(&cfg)?,
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
