//! Skills dashboard: skill demand charts and skills match scores from job listings

use clap::Parser;
use log::{error, info};
use skills_dashboard::cli::{self, Cli, Commands, ConfigAction, OutputArgs};
use skills_dashboard::config::Config;
use skills_dashboard::engine::selection::Dimension;
use skills_dashboard::engine::DashboardEngine;
use skills_dashboard::error::{Result, SkillsDashboardError};
use skills_dashboard::output::{resolve_save_path, save_report_to_file, Report, ReportGenerator};
use std::path::PathBuf;
use std::process;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config, cli.config, cli.data) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(
    command: Commands,
    config: Config,
    config_path: Option<PathBuf>,
    data: Option<PathBuf>,
) -> Result<()> {
    match command {
        Commands::Chart { filters, threshold, output } => {
            let selections = filters.to_selections()?;
            let report = open_engine(&config, data)?.skill_chart(&selections, threshold)?;
            emit(&Report::SkillChart(report), &output, &config)?;
        }

        Commands::Match { context, skills, output } => {
            let mut engine = open_engine(&config, data)?;
            let context = context.to_selections();
            let skills = skills.to_selections();
            let report = match engine.match_score(&context, &skills) {
                Ok(report) => report,
                Err(SkillsDashboardError::EmptyContextSet) => {
                    println!(
                        "No score: no job listings match the selected country, \
                         employment type and seniority."
                    );
                    return Err(SkillsDashboardError::EmptyContextSet);
                }
                Err(e) => return Err(e),
            };
            emit(&Report::Match(report), &output, &config)?;
        }

        Commands::Options { dimension, output } => {
            let dimensions = match dimension {
                Some(name) => vec![Dimension::parse(&name)?],
                None => Vec::new(),
            };
            let report = open_engine(&config, data)?.options(&dimensions)?;
            emit(&Report::Options(report), &output, &config)?;
        }

        Commands::Candidates { context, output } => {
            let report = open_engine(&config, data)?.candidates(&context.to_selections())?;
            emit(&Report::Candidates(report), &output, &config)?;
        }

        Commands::Config { action } => {
            run_config_command(action, &config, config_path)?;
        }
    }

    Ok(())
}

fn open_engine(config: &Config, data: Option<PathBuf>) -> Result<DashboardEngine> {
    let mut engine = DashboardEngine::new(config)?;
    if let Some(path) = data {
        engine = engine.with_data_path(path);
    }
    info!("Using skills table {}", engine.data_path().display());
    Ok(engine)
}

/// Render a report in the requested format and print or save it.
fn emit(report: &Report, args: &OutputArgs, config: &Config) -> Result<()> {
    let format = match &args.output {
        Some(name) => cli::parse_output_format(name).map_err(SkillsDashboardError::InvalidInput)?,
        None => config.output.format,
    };
    let detailed = args.detailed || config.output.detailed;
    let use_colors = config.output.color_output && args.save.is_none();

    let generator = ReportGenerator::with_options(use_colors, detailed, true, true, true);
    let content = generator.generate_report(report, &format)?;

    match &args.save {
        Some(target) => {
            let path = resolve_save_path(target, &format, report);
            save_report_to_file(&content, &path)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn run_config_command(
    action: Option<ConfigAction>,
    config: &Config,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let path = config_path.unwrap_or_else(Config::config_path);

    match action {
        Some(ConfigAction::Show) | None => {
            println!("⚙️  Current Configuration\n");
            println!("Data File: {}", config.data.path.display());
            println!("Delimiter: '{}'", config.data.delimiter);
            println!("\nChart:");
            println!("  Default Threshold: {}", config.chart.default_threshold);
            match config.chart.max_bars {
                0 => println!("  Max Bars: unlimited"),
                n => println!("  Max Bars: {}", n),
            }
            println!("\nOutput:");
            println!("  Format: {:?}", config.output.format);
            println!("  Detailed: {}", config.output.detailed);
            println!("  Colors: {}", config.output.color_output);
        }

        Some(ConfigAction::Reset) => {
            println!("🔄 Resetting configuration to defaults...");
            Config::default().save_to(&path)?;
            println!("✅ Configuration reset successfully!");
        }

        Some(ConfigAction::Path) => {
            println!("{}", path.display());
        }
    }

    Ok(())
}
