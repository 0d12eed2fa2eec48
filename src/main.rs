//! Skill gap analyzer: resume and job description matching tool

mod analysis;
mod chat;
mod cli;
mod config;
mod error;
mod input;
mod output;

use analysis::analyzer::GapAnalyzer;
use chat::assistant::CareerAssistant;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{Result, SkillGapError};
use input::DocumentReader;
use log::{error, info};
use std::io::{BufRead, Write};
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            output,
            save,
            detailed,
        } => {
            info!("Starting skill gap analysis");

            // Validate input files
            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| SkillGapError::InvalidInput(format!("Resume file: {}", e)))?;

            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| SkillGapError::InvalidInput(format!("Job description file: {}", e)))?;

            // Parse output format
            let output_format = cli::parse_output_format(&output).map_err(SkillGapError::InvalidInput)?;

            println!("🚀 Skill gap analysis");
            println!("📄 Resume: {}", resume.display());
            println!("💼 Job Description: {}", job.display());

            // Extract text from both inputs
            let mut reader = DocumentReader::new();
            let resume_text = reader.read(&resume).await?;
            let job_text = reader.read(&job).await?;

            info!(
                "Extracted {} resume characters, {} job description characters",
                resume_text.len(),
                job_text.len()
            );

            // The core tolerates empty strings; rejecting blank submissions
            // is this layer's job
            if resume_text.trim().is_empty() {
                return Err(SkillGapError::InvalidInput(
                    "Resume text is empty".to_string(),
                ));
            }
            if job_text.trim().is_empty() {
                return Err(SkillGapError::InvalidInput(
                    "Job description text is empty".to_string(),
                ));
            }

            let analyzer =
                GapAnalyzer::with_additional_skills(config.analysis.additional_skills.clone())?;
            info!("Matching against {} known skills", analyzer.skill_count());

            let result = analyzer.analyze(&resume_text, &job_text);

            let formatted = output::formatter::format_result(
                &result,
                output_format,
                detailed || config.output.detailed,
                config.output.color_output,
            )?;

            match save {
                Some(path) => {
                    tokio::fs::write(&path, &formatted).await?;
                    println!("💾 Saved analysis to {}", path.display());
                }
                None => println!("{}", formatted),
            }

            println!("🎯 Analysis complete! Match score: {:.1}%", result.match_score);
        }

        Commands::Chat => {
            let assistant = CareerAssistant::new();

            println!("🤖 {}", assistant.greeting());
            println!("   (type 'exit' or 'quit' to leave)\n");

            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();

            loop {
                print!("You: ");
                stdout.flush()?;

                let mut line = String::new();
                if stdin.lock().read_line(&mut line)? == 0 {
                    break;
                }

                let message = line.trim();
                if message.is_empty() {
                    continue;
                }
                if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
                    break;
                }

                println!("\n🤖 {}\n", assistant.respond(message));
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Output format: {:?}", config.output.format);
                println!("Detailed output: {}", config.output.detailed);
                println!("Color output: {}", config.output.color_output);
                if config.analysis.additional_skills.is_empty() {
                    println!("Additional skills: (none)");
                } else {
                    println!(
                        "Additional skills: {}",
                        config.analysis.additional_skills.join(", ")
                    );
                }
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}
