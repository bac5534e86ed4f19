use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use lift_log::config::{self, Config};
use lift_log::entry::{self, RecordStore, SortOrder};
use lift_log::output;
use lift_log::scoring::{self, ScoreCache, SexCategory};
use lift_log::session::{self, Prompter, SessionOptions};

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_INVALID_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    /// Aligned table with a header row
    Table,
    /// Tab-separated values, no header
    Tsv,
    /// JSON chart series (date, dots, gl)
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a single lift
    Score {
        /// Bodyweight in kg
        #[arg(long, allow_negative_numbers = true)]
        bodyweight: f64,

        /// Sex category: male or female
        #[arg(long)]
        sex: SexCategory,

        /// Total in kg (instead of individual lifts)
        #[arg(
            long,
            allow_negative_numbers = true,
            conflicts_with_all = ["squat", "bench", "deadlift"],
            required_unless_present_all = ["squat", "bench", "deadlift"]
        )]
        total: Option<f64>,

        /// Best squat in kg
        #[arg(long, allow_negative_numbers = true, requires_all = ["bench", "deadlift"])]
        squat: Option<f64>,

        /// Best bench press in kg
        #[arg(long, allow_negative_numbers = true, requires_all = ["squat", "deadlift"])]
        bench: Option<f64>,

        /// Best deadlift in kg
        #[arg(long, allow_negative_numbers = true, requires_all = ["squat", "bench"])]
        deadlift: Option<f64>,
    },
    /// Score every entry in a YAML or JSON entries file
    Report {
        /// Entries file (.yaml, or .json)
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,

        /// List the most recent entry first
        #[arg(long)]
        newest_first: bool,
    },
    /// Log results interactively and watch the scores update
    Session {
        /// Pre-load entries from a file
        #[arg(long)]
        from: Option<PathBuf>,
    },
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "lift-log")]
#[command(about = "Powerlifting results log with DOTS and GL scoring", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/lift-log/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "lift_log=debug"
    } else {
        "lift_log=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_errors(heading: &str, errors: &[String]) {
    eprintln!("{}", heading);
    for error in errors {
        eprintln!("  - {}", error);
    }
}

/// Load and validate config, exiting with EXIT_CONFIG on any problem.
fn load_config_or_exit(path: Option<PathBuf>) -> Config {
    let config = match config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = config::validate_config(&config) {
        print_errors("Config errors:", &errors);
        std::process::exit(EXIT_CONFIG);
    }

    config
}

/// Load an entries file into a fresh store, exiting on IO or validation errors.
fn load_store_or_exit(path: &Path) -> RecordStore {
    let entries = match entry::load_entries(path) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    let mut store = RecordStore::new();
    if let Err(errors) = store.extend(entries) {
        print_errors(&format!("Invalid entries in {}:", path.display()), &errors);
        std::process::exit(EXIT_INVALID_INPUT);
    }
    store
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Score {
            bodyweight,
            sex,
            total,
            squat,
            bench,
            deadlift,
        } => {
            let (total, lifts) = match (total, squat, bench, deadlift) {
                (Some(total), _, _, _) => (total, vec![("total", total)]),
                (None, Some(s), Some(b), Some(d)) => {
                    let lifts = vec![("squat", s), ("bench", b), ("deadlift", d)];
                    (s + b + d, lifts)
                }
                _ => {
                    eprintln!("Provide --total or all of --squat, --bench and --deadlift.");
                    std::process::exit(EXIT_INVALID_INPUT);
                }
            };

            if let Err(errors) = entry::validate_measurements(bodyweight, &lifts) {
                print_errors("Invalid input:", &errors);
                std::process::exit(EXIT_INVALID_INPUT);
            }

            let scores = scoring::score_total(total, bodyweight, sex);
            debug!(total, bodyweight, %sex, dots = scores.dots, gl = scores.gl, "scored lift");
            println!(
                "{}",
                output::format_score_summary(&scores, output::should_use_colors())
            );
        }
        Commands::Report {
            file,
            format,
            newest_first,
        } => {
            let config = load_config_or_exit(cli.config);
            let store = load_store_or_exit(&file);
            let order = if newest_first {
                SortOrder::NewestFirst
            } else {
                config.order()
            };

            let mut cache = ScoreCache::new();
            let view = session::scored_view(&store, &mut cache, order);
            let date_format = config.date_format();

            match format {
                ReportFormat::Table => {
                    let use_colors = output::should_use_colors();
                    if cli.verbose && !view.is_empty() {
                        for scored in &view {
                            println!(
                                "{}",
                                output::format_entry_detail(scored, date_format, use_colors)
                            );
                            println!();
                        }
                    } else {
                        println!(
                            "{}",
                            output::format_entry_table(&view, date_format, use_colors)
                        );
                    }
                }
                ReportFormat::Tsv => {
                    let tsv = output::format_tsv(&view, date_format);
                    if !tsv.is_empty() {
                        println!("{}", tsv);
                    }
                }
                ReportFormat::Json => {
                    let points = output::chart_series(&view, date_format);
                    match output::format_series_json(&points) {
                        Ok(json) => println!("{}", json),
                        Err(e) => {
                            eprintln!("Error: {:#}", e);
                            std::process::exit(EXIT_FAILURE);
                        }
                    }
                }
            }

            debug!(entries = store.len(), "report finished");
        }
        Commands::Session { from } => {
            let config = load_config_or_exit(cli.config);
            let mut store = match from {
                Some(ref path) => load_store_or_exit(path),
                None => RecordStore::new(),
            };
            let mut cache = ScoreCache::new();
            let options = SessionOptions {
                date_format: config.date_format().to_string(),
                order: config.order(),
                default_sex: config.default_sex,
                today: chrono::Local::now().date_naive(),
                use_colors: output::should_use_colors(),
            };

            let stdin = std::io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
            match session::run_session(&mut prompter, &mut store, &mut cache, &options) {
                Ok(added) => {
                    println!(
                        "Logged {} result(s) this session. Entries are not saved.",
                        added
                    );
                }
                Err(e) => {
                    eprintln!("Error: {:#}", e);
                    std::process::exit(EXIT_FAILURE);
                }
            }
        }
        Commands::Init => {
            let default_path = match cli.config {
                Some(path) => path,
                None => match config::get_config_path() {
                    Ok(p) => p,
                    Err(e) => {
                        eprintln!("Config error: {:#}", e);
                        std::process::exit(EXIT_CONFIG);
                    }
                },
            };

            let stdin = std::io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
            if let Err(e) = config::run_init_wizard(&mut prompter, default_path) {
                eprintln!("Error: {:#}", e);
                std::process::exit(EXIT_FAILURE);
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
