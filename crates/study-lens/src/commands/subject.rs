//! Subject command: subject detection with the score table behind it.

use anyhow::bail;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use study_lens_core::Subject;
use study_lens_core::analysis::{self, SubjectScore};

use super::InputArgs;

/// Arguments for the `subject` subcommand.
#[derive(Args, Debug)]
pub struct SubjectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Fail unless the detected subject is this one.
    #[arg(long, value_enum)]
    pub expect: Option<Subject>,
}

#[derive(Serialize)]
struct SubjectOutput {
    subject: Subject,
    display_name: &'static str,
    scores: Vec<SubjectScore>,
}

/// Detect the subject of a file.
#[instrument(name = "cmd_subject", skip_all, fields(file = %args.input.file))]
pub fn cmd_subject(
    args: SubjectArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(expect = ?args.expect, "executing subject command");

    let content = args.input.read(max_input_bytes)?;
    let subject = analysis::detect_subject(&content);
    let output = SubjectOutput {
        subject,
        display_name: subject.display_name(),
        scores: analysis::score_subjects(&content),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} ({})", output.display_name.bold(), output.subject);
        for entry in &output.scores {
            println!("  {:<12} {}", entry.subject.as_str().dimmed(), entry.score);
        }
    }

    if let Some(expected) = args.expect
        && expected != subject
    {
        bail!(
            "{} reads as {} but {} was expected",
            args.input.label(),
            subject,
            expected,
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn write_input(dir: &tempfile::TempDir, text: &str) -> InputArgs {
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, text).unwrap();
        InputArgs {
            file: Utf8PathBuf::try_from(path).unwrap(),
        }
    }

    #[test]
    fn expected_subject_passes() {
        let tmp = tempfile::TempDir::new().unwrap();
        let args = SubjectArgs {
            input: write_input(&tmp, "Сила и энергия. Масса тела."),
            expect: Some(Subject::Physics),
        };
        assert!(cmd_subject(args, true, None).is_ok());
    }

    #[test]
    fn unexpected_subject_fails() {
        let tmp = tempfile::TempDir::new().unwrap();
        let args = SubjectArgs {
            input: write_input(&tmp, "Клетка и ген."),
            expect: Some(Subject::History),
        };
        let err = cmd_subject(args, false, None).unwrap_err();
        assert!(err.to_string().contains("reads as biology"));
    }
}
