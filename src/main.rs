use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use mindbloom::checkin::{self, Recommendations};
use mindbloom::config::Config;
use mindbloom::gemini::GeminiClient;
use mindbloom::journal::{self, MoodLevel};
use mindbloom::output;
use mindbloom::scoring::calculate_score;
use mindbloom::survey::{run_survey, AnswerSet};

const EXIT_SUCCESS: i32 = 0;
const EXIT_AUTH: i32 = 1;
const EXIT_NETWORK: i32 = 2;
const EXIT_INPUT: i32 = 3;
const EXIT_CONFIG: i32 = 4;
const EXIT_JOURNAL: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take the check-in questionnaire (default if no subcommand)
    Survey {
        /// Do not ask the AI model for recommendations
        #[arg(long)]
        no_recommend: bool,

        /// Do not record the check-in in the journal
        #[arg(long)]
        no_save: bool,
    },
    /// Score an answers file (JSON object of question key to answer, `-` for stdin)
    Score {
        file: PathBuf,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Ask for recommendations for an answers file, whatever its score
    Recommend {
        file: PathBuf,

        /// Open the Nth recommendation link (1-based, as shown) in the browser
        #[arg(long)]
        open: Option<usize>,
    },
    /// List the questionnaire
    Questions,
    /// Show past check-ins, newest first
    History {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Track daily mood
    Mood {
        #[command(subcommand)]
        action: MoodCommand,
    },
}

#[derive(Subcommand, Debug)]
enum MoodCommand {
    /// Record today's mood from 1 (worst) to 5 (best)
    Log {
        #[arg(value_parser = clap::value_parser!(u8).range(1..=5))]
        level: u8,

        #[arg(short, long)]
        note: Option<String>,
    },
    /// Show the last seven days
    Week,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Tsv,
}

#[derive(Parser, Debug)]
#[command(name = "mindbloom")]
#[command(about = "Mental-wellness check-in CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/mindbloom/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn exit_with(code: i32, what: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", what, err);
    std::process::exit(code);
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn gemini_client(config: &Config) -> Result<GeminiClient, (i32, String)> {
    let gemini = config.gemini();
    let key = mindbloom::credentials::resolve_api_key(&gemini)
        .map_err(|e| (EXIT_AUTH, e.to_string()))?;
    GeminiClient::new(&gemini, &key).map_err(|e| (EXIT_NETWORK, format!("{:#}", e)))
}

fn load_answers(file: &Path) -> AnswerSet {
    match AnswerSet::load(file) {
        Ok(a) => a,
        Err(e) => exit_with(EXIT_CONFIG, "Answers error", format!("{:#}", e)),
    }
}

fn load_journal_or_exit(path: &Path) -> journal::Journal {
    match journal::load_journal(path) {
        Ok(j) => j,
        Err(e) => exit_with(EXIT_JOURNAL, "Journal error", format!("{:#}", e)),
    }
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for rustls 0.23+); a provider
    // installed earlier is fine too
    let _ = rustls::crypto::ring::default_provider().install_default();

    let cli = Cli::parse();
    init_logging(cli.verbose);
    let command = cli.command.unwrap_or(Commands::Survey {
        no_recommend: false,
        no_save: false,
    });

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match mindbloom::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => exit_with(EXIT_CONFIG, "Config error", format!("{:#}", e)),
    };

    // Validate questionnaire at startup
    let questionnaire = config.questionnaire();
    if let Err(errors) = mindbloom::scoring::validate_questionnaire(&questionnaire) {
        eprintln!("Questionnaire config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    log::debug!(
        "Questionnaire: {} questions, {} scored",
        questionnaire.len(),
        questionnaire.scorable_count()
    );

    let use_colors = output::should_use_colors();
    let journal_path = config.journal_path();

    match command {
        Commands::Survey {
            no_recommend,
            no_save,
        } => {
            // Read the journal up front so a broken file is reported before
            // any answers are collected
            let mut journal = if no_save {
                None
            } else {
                Some(load_journal_or_exit(&journal_path))
            };

            let answers = match run_survey(
                &questionnaire,
                &mut std::io::stdin().lock(),
                &mut std::io::stdout(),
                use_colors,
            ) {
                Ok(Some(a)) => a,
                Ok(None) => {
                    println!();
                    println!("Survey cancelled. Nothing was saved.");
                    std::process::exit(EXIT_SUCCESS);
                }
                Err(e) => exit_with(EXIT_INPUT, "Input error", format!("{:#}", e)),
            };

            // Credentials are only needed when the tier asks for recommendations
            let wants_recommendations = !no_recommend
                && calculate_score(&questionnaire, &answers)
                    .tier
                    .requests_recommendations();
            let client = if wants_recommendations {
                match gemini_client(&config) {
                    Ok(c) => Some(c),
                    Err((_, msg)) => {
                        log::warn!("{}", msg);
                        None
                    }
                }
            } else {
                None
            };

            let outcome = checkin::run_checkin(&questionnaire, &answers, client.as_ref()).await;

            println!();
            println!("{}", output::format_result(&outcome.result, use_colors));
            if cli.verbose {
                println!("{}", output::format_breakdown(&outcome.result));
            }

            match &outcome.recommendations {
                Recommendations::Ready(reply) => {
                    println!();
                    println!("{}", output::format_recommendations(&reply.items, use_colors));
                }
                Recommendations::Failed(_) => {
                    println!();
                    println!("Could not generate recommendations at this time.");
                }
                Recommendations::Unavailable if !no_recommend => {
                    println!();
                    println!(
                        "Set {} to receive personalized recommendations.",
                        mindbloom::credentials::ENV_API_KEY_VAR
                    );
                }
                _ => {}
            }

            if let Some(journal) = journal.as_mut() {
                let raw = outcome.recommendations.reply().map(|r| r.raw.clone());
                journal.record_checkin(answers, &outcome.result, raw);
                if let Err(e) = journal::save_journal(&journal_path, journal) {
                    exit_with(EXIT_JOURNAL, "Journal error", format!("{:#}", e));
                }
                log::info!("Check-in saved to {}", journal_path.display());
            }
        }
        Commands::Score { file, format } => {
            let answers = load_answers(&file);
            let result = calculate_score(&questionnaire, &answers);

            match format {
                OutputFormat::Text => {
                    println!("{}", output::format_result(&result, use_colors));
                    if cli.verbose {
                        println!("{}", output::format_breakdown(&result));
                    }
                }
                OutputFormat::Json => println!("{}", output::format_json(&result)),
                OutputFormat::Tsv => println!("{}", output::format_tsv(&result)),
            }
        }
        Commands::Recommend { file, open } => {
            let answers = load_answers(&file);
            let client = match gemini_client(&config) {
                Ok(c) => c,
                Err((code, msg)) => exit_with(code, "Credential error", msg),
            };

            let reply = match checkin::fetch_recommendations(&client, &answers).await {
                Ok(r) => r,
                Err(e) => exit_with(EXIT_NETWORK, "Recommendation error", e),
            };

            println!("{}", output::format_recommendations(&reply.items, use_colors));

            if let Some(index) = open {
                let links: Vec<_> = reply.links().collect();
                if index < 1 || index > links.len() {
                    exit_with(
                        EXIT_CONFIG,
                        "Invalid index",
                        format!("{} (must be between 1 and {})", index, links.len()),
                    );
                }
                if let Some(url) = &links[index - 1].url {
                    if let Err(e) = mindbloom::browser::open_url(url) {
                        exit_with(EXIT_NETWORK, "Browser error", format!("{:#}", e));
                    }
                    println!("Opening recommendation {} in browser: {}", index, url);
                }
            }
        }
        Commands::Questions => {
            println!("{}", output::format_questionnaire(&questionnaire, use_colors));
        }
        Commands::History { limit } => {
            let journal = load_journal_or_exit(&journal_path);
            let checkins = journal.recent_checkins(limit);
            println!("{}", output::format_history(&checkins, use_colors));
        }
        Commands::Mood { action } => match action {
            MoodCommand::Log { level, note } => {
                let mood = match MoodLevel::new(level) {
                    Ok(m) => m,
                    Err(e) => exit_with(EXIT_CONFIG, "Mood error", e),
                };
                let mut journal = load_journal_or_exit(&journal_path);
                journal.log_mood(mood, note);
                if let Err(e) = journal::save_journal(&journal_path, &journal) {
                    exit_with(EXIT_JOURNAL, "Journal error", format!("{:#}", e));
                }
                println!("Mood saved: {}", mood.emoji());
            }
            MoodCommand::Week => {
                let journal = load_journal_or_exit(&journal_path);
                let week = journal.mood_week(Local::now().date_naive());
                println!("{}", output::format_mood_week(&week, use_colors));
            }
        },
    }

    std::process::exit(EXIT_SUCCESS);
}
