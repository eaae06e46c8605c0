//! Demo command: analyze a built-in sample and print a short summary.

use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use study_lens_core::analysis;

/// Keywords shown in the summary.
const SUMMARY_KEYWORDS: usize = 5;

/// Introductory paragraph about Python used as the demo input.
pub const SAMPLE_TEXT: &str = "
    Python - это высокоуровневый язык программирования общего назначения.
    Он поддерживает множественные парадигмы программирования, включая процедурное,
    объектно-ориентированное и функциональное программирование. Python широко используется
    для веб-разработки, анализа данных, машинного обучения и автоматизации задач.
    ";

/// Arguments for the `demo` subcommand.
#[derive(Args, Debug, Default)]
pub struct DemoArgs {
    /// Print the sample text before the summary.
    #[arg(long)]
    pub show_text: bool,
}

/// Analyze [`SAMPLE_TEXT`].
#[instrument(name = "cmd_demo", skip_all)]
pub fn cmd_demo(args: DemoArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(show_text = args.show_text, "executing demo command");

    let report = analysis::analyze_comprehensive(SAMPLE_TEXT);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if args.show_text {
        println!("{}\n", SAMPLE_TEXT.trim().dimmed());
    }

    let keywords: Vec<_> = report
        .keywords
        .iter()
        .take(SUMMARY_KEYWORDS)
        .map(String::as_str)
        .collect();
    let styles: Vec<_> = report
        .learning_styles
        .iter()
        .map(|style| style.display_name())
        .collect();

    println!("{}", "=== КОМПЛЕКСНЫЙ АНАЛИЗ ===".bold());
    println!("Предмет: {}", report.subject.display_name());
    println!("Ключевые слова: {}", keywords.join(", "));
    println!(
        "Читабельность: {} - {}",
        report.readability_score, report.difficulty_interpretation.level
    );
    println!("Вовлечённость: {}/100", report.engagement_score);
    println!("Рекомендуемые стили обучения: {}", styles.join(", "));

    Ok(())
}
