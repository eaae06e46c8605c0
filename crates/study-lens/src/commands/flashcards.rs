//! Flashcards command.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use study_lens_core::analysis;

use super::InputArgs;

/// Arguments for the `flashcards` subcommand.
#[derive(Args, Debug)]
pub struct FlashcardsArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Build flashcards from the keywords of a file.
#[instrument(name = "cmd_flashcards", skip_all, fields(file = %args.input.file))]
pub fn cmd_flashcards(
    args: FlashcardsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing flashcards command");

    let content = args.input.read(max_input_bytes)?;
    let keywords = analysis::extract_keywords(&content);
    let cards = analysis::generate_flashcards(&content, &keywords);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    if cards.is_empty() {
        println!("{}", "No flashcards: no keyword appears in a sentence.".dimmed());
    }
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} {}", "Q:".bold(), card.front);
        println!("{} {}", "A:".dimmed(), card.back);
    }

    Ok(())
}
