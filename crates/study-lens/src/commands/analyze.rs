//! Analyze command: full study report for one text.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use study_lens_core::analysis::{self, AnalysisReport};

use super::{InputArgs, check_min, paint_score};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Minimum acceptable readability score (0–100).
    #[arg(long)]
    pub min_readability: Option<f64>,

    /// Minimum acceptable engagement score (0–100).
    #[arg(long)]
    pub min_engagement: Option<i32>,
}

/// Run every analysis over a file and print the report.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.input.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_min_readability: Option<f64>,
    config_min_engagement: Option<i32>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(
        min_readability = ?args.min_readability,
        min_engagement = ?args.min_engagement,
        "executing analyze command"
    );

    let content = args.input.read(max_input_bytes)?;
    let report = analysis::analyze_comprehensive(&content);
    let label = args.input.label();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", label.bold());
        print_report(&report);
    }

    check_min(
        label,
        "readability",
        report.readability_score,
        args.min_readability.or(config_min_readability),
    )?;
    check_min(
        label,
        "engagement",
        report.engagement_score,
        args.min_engagement.or(config_min_engagement),
    )?;

    Ok(())
}

/// Text rendering of a report, section by section.
fn print_report(report: &AnalysisReport) {
    let stats = &report.basic_stats;
    println!(
        "\n  {} {} words, {} sentences, {} unique, {:.1} words/sentence",
        "Stats:".cyan(),
        stats.word_count,
        stats.sentence_count,
        stats.unique_words,
        stats.avg_sentence_length,
    );

    println!(
        "\n  {} {} ({})",
        "Subject:".cyan(),
        report.subject.display_name(),
        report.subject,
    );

    let interpretation = &report.difficulty_interpretation;
    println!(
        "\n  {} {}/100, {}: {}",
        "Readability:".cyan(),
        paint_score(
            report.readability_score,
            &format!("{:.1}", report.readability_score)
        ),
        interpretation.level,
        interpretation.description,
    );
    println!("  {} {}", "Tip:".dimmed(), interpretation.recommendation);

    println!(
        "\n  {} {}/100",
        "Engagement:".cyan(),
        paint_score(
            f64::from(report.engagement_score),
            &report.engagement_score.to_string()
        ),
    );

    let styles: Vec<_> = report
        .learning_styles
        .iter()
        .map(|style| style.display_name())
        .collect();
    println!("\n  {} {}", "Learning styles:".cyan(), styles.join(", "));

    if !report.keywords.is_empty() {
        println!("\n  {} {}", "Keywords:".cyan(), report.keywords.join(", "));
    }

    println!("\n  {}", "Prerequisites:".cyan());
    for prerequisite in &report.prerequisites {
        println!("    - {prerequisite}");
    }

    if !report.flashcards.is_empty() {
        println!("\n  {}", "Flashcards:".cyan());
        for card in &report.flashcards {
            println!("    {} {}", "Q:".bold(), card.front);
            println!("    {} {}", "A:".dimmed(), card.back);
        }
    }

    if !report.questions.is_empty() {
        println!("\n  {}", "Self-check questions:".cyan());
        for question in &report.questions {
            println!("    - {question}");
        }
    }
}
