//! Keywords command.

use clap::Args;
use tracing::{debug, instrument};

use study_lens_core::analysis;

use super::InputArgs;

/// Arguments for the `keywords` subcommand.
#[derive(Args, Debug)]
pub struct KeywordsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// How many keywords to show (1–10).
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub limit: u8,
}

/// Print the most frequent keywords of a file, one per line.
#[instrument(name = "cmd_keywords", skip_all, fields(file = %args.input.file))]
pub fn cmd_keywords(
    args: KeywordsArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(limit = args.limit, "executing keywords command");

    let content = args.input.read(max_input_bytes)?;
    let mut keywords = analysis::extract_keywords(&content);
    keywords.truncate(usize::from(args.limit));

    if global_json {
        println!("{}", serde_json::to_string_pretty(&keywords)?);
    } else {
        for keyword in &keywords {
            println!("{keyword}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    #[test]
    fn keywords_succeed_with_limit() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("notes.txt");
        std::fs::write(&path, "атом атом молекула молекула реакция").unwrap();
        let args = KeywordsArgs {
            input: InputArgs {
                file: Utf8PathBuf::try_from(path).unwrap(),
            },
            limit: 1,
        };
        assert!(cmd_keywords(args, true, None).is_ok());
    }
}
