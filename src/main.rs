use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use project_ranker::config::{self, Config};
use project_ranker::output;
use project_ranker::{logging, scoring, Analyzer};

const EXIT_SUCCESS: i32 = 0;
const EXIT_BAD_INPUT: i32 = 1;
const EXIT_OUTPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// Ranked table with a summary line
    Table,
    /// JSON payload with totals, summary and ranked projects
    Json,
    /// Tab-separated values, no header
    Tsv,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score and rank the projects in a CSV file
    Analyze {
        /// CSV file to analyze, or "-" for stdin
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Also write the JSON report to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Write a config file with the default weights and thresholds
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "project-ranker")]
#[command(about = "Weighted priority scoring for project lists", long_about = None)]
#[command(version, arg_required_else_help = true)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    /// Path to config file (defaults to ~/.config/project-ranker/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// CSV file to analyze with default options (shorthand for `analyze FILE`)
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// An explicit subcommand wins; a bare file means `analyze FILE`.
fn resolve_command(command: Option<Commands>, file: Option<PathBuf>) -> Option<Commands> {
    command.or_else(|| {
        file.map(|file| Commands::Analyze {
            file,
            format: Format::Table,
            output: None,
            no_color: false,
        })
    })
}

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose, cli.log_json);

    let Some(command) = resolve_command(cli.command, cli.file) else {
        Cli::command()
            .error(
                ErrorKind::MissingSubcommand,
                "a CSV file or a subcommand is required",
            )
            .exit();
    };

    let code = match command {
        Commands::Init { force } => run_init(cli.config, force),
        Commands::Analyze {
            ref file,
            format,
            ref output,
            no_color,
        } => {
            let config = match config::load_config(cli.config.clone()) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Config error: {:#}", e);
                    std::process::exit(EXIT_CONFIG);
                }
            };

            // Validate scoring config at startup
            if let Err(errors) = scoring::validate_scoring(&config.scoring) {
                eprintln!("Scoring config errors:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_CONFIG);
            }

            run_analyze(&config, file, format, output.as_deref(), no_color, cli.verbose)
        }
    };

    std::process::exit(code);
}

fn run_init(path: Option<PathBuf>, force: bool) -> i32 {
    let path = match path.map(Ok).unwrap_or_else(config::get_config_path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            return EXIT_CONFIG;
        }
    };

    match config::write_default_config(&path, force) {
        Ok(()) => {
            println!("Config written to {}", path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("{:#}", e);
            EXIT_CONFIG
        }
    }
}

fn run_analyze(
    config: &Config,
    file: &std::path::Path,
    format: Format,
    output: Option<&std::path::Path>,
    no_color: bool,
    verbose: bool,
) -> i32 {
    let start_time = Instant::now();

    let outcome = config
        .intake
        .read(file)
        .map_err(|e| e.to_string())
        .and_then(|raw| {
            Analyzer::new(config.analysis())
                .analyze(&raw)
                .map_err(|e| e.to_string())
        });

    let result = match outcome {
        Ok(result) => result,
        Err(message) => {
            tracing::warn!(file = %file.display(), "input rejected");
            if format == Format::Json {
                match output::format_error_json(&message) {
                    Ok(json) => println!("{}", json),
                    Err(e) => eprintln!("Failed to serialize error: {}", e),
                }
            } else {
                eprintln!("{}", message);
            }
            return EXIT_BAD_INPUT;
        }
    };

    let use_colors = !no_color && output::should_use_colors();

    match format {
        Format::Table => {
            if verbose {
                for project in &result.projects {
                    println!("{}", output::format_project_detail(project, use_colors));
                    println!();
                }
            } else {
                println!("{}", output::format_ranked_table(&result, use_colors));
                println!();
            }
            println!("{}", output::format_summary(&result, use_colors));
        }
        Format::Json => match output::format_json(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Failed to serialize report: {}", e);
                return EXIT_OUTPUT;
            }
        },
        Format::Tsv => println!("{}", output::format_tsv(&result)),
    }

    if let Some(path) = output {
        if let Err(e) = output::save_report(path, &result) {
            eprintln!("{:#}", e);
            return EXIT_OUTPUT;
        }
    }

    if verbose {
        eprintln!(
            "Analyzed {} projects in {:?}",
            result.total_projects,
            start_time.elapsed()
        );
    }

    EXIT_SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Option<Commands> {
        let cli = Cli::try_parse_from(args).unwrap();
        resolve_command(cli.command, cli.file)
    }

    #[test]
    fn test_bare_file_runs_analyze() {
        match parse(&["project-ranker", "projects.csv"]) {
            Some(Commands::Analyze {
                file,
                format,
                output,
                no_color,
            }) => {
                assert_eq!(file, PathBuf::from("projects.csv"));
                assert_eq!(format, Format::Table);
                assert!(output.is_none());
                assert!(!no_color);
            }
            other => panic!("expected analyze, got {:?}", other),
        }
    }

    #[test]
    fn test_bare_file_with_global_flags() {
        let cli = Cli::try_parse_from(["project-ranker", "-v", "--config", "c.yaml", "-"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("c.yaml")));
        assert!(matches!(
            resolve_command(cli.command, cli.file),
            Some(Commands::Analyze { file, .. }) if file == PathBuf::from("-")
        ));
    }

    #[test]
    fn test_analyze_subcommand() {
        assert!(matches!(
            parse(&["project-ranker", "analyze", "projects.csv", "--format", "json"]),
            Some(Commands::Analyze {
                format: Format::Json,
                ..
            })
        ));
    }

    #[test]
    fn test_init_subcommand() {
        assert!(matches!(
            parse(&["project-ranker", "init", "--force"]),
            Some(Commands::Init { force: true })
        ));
    }

    #[test]
    fn test_no_arguments_shows_help() {
        let err = Cli::try_parse_from(["project-ranker"]).unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }

    #[test]
    fn test_flags_only_resolves_to_nothing() {
        assert!(parse(&["project-ranker", "--verbose"]).is_none());
    }
}
