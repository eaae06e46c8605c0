//! Questions command: self-check questions already present in the text.

use clap::Args;
use tracing::{debug, instrument};

use study_lens_core::analysis;

use super::InputArgs;

/// Arguments for the `questions` subcommand.
#[derive(Args, Debug)]
pub struct QuestionsArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// List up to five questions found in a file.
#[instrument(name = "cmd_questions", skip_all, fields(file = %args.input.file))]
pub fn cmd_questions(
    args: QuestionsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing questions command");

    let content = args.input.read(max_input_bytes)?;
    let questions = analysis::extract_questions(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
    } else {
        for (i, question) in questions.iter().enumerate() {
            println!("{}. {question}", i + 1);
        }
    }

    Ok(())
}
