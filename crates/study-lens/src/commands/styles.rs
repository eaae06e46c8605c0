//! Styles command: learning-style recommendation.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use study_lens_core::LearningStyle;
use study_lens_core::analysis::{self, StyleScore};

use super::InputArgs;

/// Arguments for the `styles` subcommand.
#[derive(Args, Debug)]
pub struct StylesArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Serialize)]
struct StylesOutput {
    learning_styles: Vec<LearningStyle>,
    scores: Vec<StyleScore>,
}

/// Recommend learning styles for a file.
#[instrument(name = "cmd_styles", skip_all, fields(file = %args.input.file))]
pub fn cmd_styles(
    args: StylesArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing styles command");

    let content = args.input.read(max_input_bytes)?;
    let output = StylesOutput {
        learning_styles: analysis::suggest_learning_style(&content),
        scores: analysis::score_learning_styles(&content),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for (rank, style) in output.learning_styles.iter().enumerate() {
        println!("{}. {} ({})", rank + 1, style.display_name().bold(), style);
    }
    if output.scores.is_empty() {
        println!("{}", "(no style signal; default ranking)".dimmed());
    }

    Ok(())
}
