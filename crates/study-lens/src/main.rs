//! study-lens CLI
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use study_lens::{Cli, Commands, commands};
use study_lens_core::config::ConfigLoader;
use tracing::debug;

mod observability;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.color.apply();

    if cli.version_only {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // arg_required_else_help ensures we have --version-only or a subcommand
    let Some(command) = cli.command else {
        return Ok(());
    };

    if let Some(ref dir) = cli.chdir {
        std::env::set_current_dir(dir)
            .with_context(|| format!("failed to change directory to {}", dir.display()))?;
    }

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cwd = camino::Utf8PathBuf::try_from(cwd).map_err(|e| {
        anyhow::anyhow!(
            "current directory is not valid UTF-8: {}",
            e.into_path_buf().display()
        )
    })?;
    let mut loader = ConfigLoader::new().with_project_search(&cwd);
    if let Some(ref config_path) = cli.config {
        let config_path = camino::Utf8PathBuf::try_from(config_path.clone()).map_err(|e| {
            anyhow::anyhow!(
                "config path is not valid UTF-8: {}",
                e.into_path_buf().display()
            )
        })?;
        loader = loader.with_file(&config_path);
    }
    let (config, config_sources) = loader.load().context("failed to load configuration")?;

    let obs_config = observability::ObservabilityConfig::from_env_with_overrides(
        config
            .log_dir
            .as_ref()
            .map(|dir| dir.as_std_path().to_path_buf()),
    );
    let env_filter = observability::env_filter(cli.quiet, cli.verbose, config.log_level.as_str());
    let _guard = observability::init_observability(&obs_config, env_filter)
        .context("failed to initialize logging/tracing")?;

    debug!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        json = cli.json,
        color = ?cli.color,
        chdir = ?cli.chdir,
        file_logging = obs_config.file_logging_enabled(),
        "CLI initialized"
    );

    let max_input = config.input_limit();

    let result = match command {
        Commands::Analyze(args) => commands::analyze::cmd_analyze(
            args,
            cli.json,
            config.min_readability,
            config.min_engagement,
            max_input,
        ),
        Commands::Subject(args) => commands::subject::cmd_subject(args, cli.json, max_input),
        Commands::Styles(args) => commands::styles::cmd_styles(args, cli.json, max_input),
        Commands::Readability(args) => commands::readability::cmd_readability(
            args,
            cli.json,
            config.min_readability,
            max_input,
        ),
        Commands::Engagement(args) => commands::engagement::cmd_engagement(
            args,
            cli.json,
            config.min_engagement,
            max_input,
        ),
        Commands::Keywords(args) => commands::keywords::cmd_keywords(args, cli.json, max_input),
        Commands::Flashcards(args) => {
            commands::flashcards::cmd_flashcards(args, cli.json, max_input)
        }
        Commands::Questions(args) => {
            commands::questions::cmd_questions(args, cli.json, max_input)
        }
        Commands::Demo(args) => commands::demo::cmd_demo(args, cli.json),
        Commands::Schema(args) => commands::schema::cmd_schema(args),
        Commands::Info(args) => commands::info::cmd_info(args, cli.json, &config, &config_sources),
    };
    if let Err(ref err) = result {
        tracing::error!(error = %err, "fatal error");
    }
    result
}
