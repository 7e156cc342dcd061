//! Resume ranker: structured candidate records from resumes, ranked against criteria

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};
use resume_ranker::cli::{parse_output_format, Cli, Commands, ConfigAction};
use resume_ranker::config::{Config, OutputFormat};
use resume_ranker::error::{RankerError, Result};
use resume_ranker::input::InputManager;
use resume_ranker::output::formatter::{save_report_to_file, ReportGenerator};
use resume_ranker::output::{RankingReport, RecordEntry, RecordReport};
use resume_ranker::processing::{CandidateRecord, Criteria, Ranker, RecordBuilder, Scorer};
use resume_ranker::store::{CandidateStore, JsonFileStore};
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let format = match cli.output.as_deref().map(parse_output_format).transpose() {
        Ok(format) => format.unwrap_or(config.output.format),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, format).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config, format: OutputFormat) -> Result<()> {
    let console = format == OutputFormat::Console;

    match command {
        Commands::Ingest { files, dry_run } => {
            for file in &files {
                InputManager::validate(file)?;
            }

            if console {
                println!("📂 Extracting text from {} file(s)...", files.len());
            }
            let texts = extract_all(&files, config.extraction.enable_cache).await?;

            info!("Building {} candidate records", texts.len());
            let extraction = config.extraction.clone();
            let records = tokio::task::spawn_blocking(move || {
                let builder = RecordBuilder::from_config(&extraction);
                build_records(&builder, &texts, extraction.threads)
            })
            .await??;

            let sources = files.iter().map(|file| file.display().to_string());
            let generator = ReportGenerator::with_options(config.output.color_output, true, true, true);

            let entries: Vec<RecordEntry> = if dry_run {
                sources
                    .zip(records)
                    .map(|(source, record)| RecordEntry {
                        id: None,
                        source,
                        record,
                    })
                    .collect()
            } else {
                let mut store = JsonFileStore::open(config.store_path())?;
                let ids = store.insert_many(sources.zip(records))?;
                info!("Stored {} records in {}", ids.len(), store.path().display());
                ids.into_iter()
                    .map(|id| store.get(id).map(RecordEntry::from))
                    .collect::<Result<_>>()?
            };

            println!("{}", generator.records(&RecordReport::new(entries), format)?);
            if console && !dry_run {
                println!("✅ Stored {} candidate(s)", files.len());
            }
        }

        Commands::Rank {
            qualification,
            skills,
            experience,
            count,
            detailed,
            save,
        } => {
            let detailed = detailed || config.output.detailed;
            let criteria = Criteria {
                qualification,
                skills,
                min_experience: experience,
                result_count: count,
            };

            let store = JsonFileStore::open(config.store_path())?;
            let candidates = store.all();
            let population = candidates.len();
            info!("Ranking {} stored candidates", population);

            let ranker = Ranker::new(Scorer::from_config(&config.scoring)).detailed(detailed);
            let ranked = ranker.rank(candidates, &criteria);
            let report = RankingReport::new(criteria, population, ranked);

            let generator = ReportGenerator::with_options(config.output.color_output, detailed, true, true);
            let rendered = generator.ranking(&report, format)?;

            match save {
                Some(path) => {
                    let content = if console {
                        ReportGenerator::with_options(false, detailed, true, true).ranking(&report, format)?
                    } else {
                        rendered
                    };
                    save_report_to_file(&content, &path)?;
                    println!("💾 Ranking saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Show { id } => {
            let store = JsonFileStore::open(config.store_path())?;
            let entry = RecordEntry::from(store.get(id)?);
            let generator = ReportGenerator::with_options(config.output.color_output, true, true, true);
            println!("{}", generator.records(&RecordReport::new(vec![entry]), format)?);
        }

        Commands::Reset => {
            let mut store = JsonFileStore::open(config.store_path())?;
            let removed = store.clear()?;
            println!("🗑️  Removed {} candidate record(s)", removed);
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                let rendered = toml::to_string_pretty(&config).map_err(|e| {
                    RankerError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", rendered);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save()?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Path) => {
                println!("{}", Config::config_path().display());
            }
        },
    }

    Ok(())
}

/// Reads every file in order; undecodable documents come back empty
async fn extract_all(files: &[PathBuf], enable_cache: bool) -> Result<Vec<String>> {
    let mut input_manager = InputManager::new().with_cache(enable_cache);

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{spinner:.cyan} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
            .expect("Invalid progress template")
            .progress_chars("━━╸"),
    );

    let mut texts = Vec::with_capacity(files.len());
    for file in files {
        progress.set_message(file.display().to_string());
        texts.push(input_manager.extract_text_or_empty(file).await?);
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(texts)
}

/// Builds on a dedicated pool when `threads` is set, otherwise on the global one
fn build_records(builder: &RecordBuilder, texts: &[String], threads: usize) -> Result<Vec<CandidateRecord>> {
    if threads == 0 {
        return Ok(builder.build_batch(texts));
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| RankerError::Processing(format!("Failed to start worker pool: {}", e)))?;
    Ok(pool.install(|| builder.build_batch(texts)))
}
