use clap::{
    parser::ValueSource, ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand, ValueEnum,
};
use ranksum::{compare_samples, descriptive_stats, ComparisonConfig, DescriptiveStats};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ranksum", about = "Mann-Whitney U comparison of two numeric samples")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// JSON config file, e.g. {"alpha": 0.01}
    #[arg(long, global = true, env = "RANKSUM_CONFIG")]
    config: Option<PathBuf>,

    /// Significance threshold; overrides RANKSUM_ALPHA and the config file
    #[arg(long, global = true)]
    alpha: Option<f64>,

    #[arg(long, global = true, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two samples with the Mann-Whitney U test
    Compare {
        /// Comma-separated values of the first sample
        #[arg(long, allow_hyphen_values = true, requires = "y", conflicts_with = "input")]
        x: Option<String>,
        /// Comma-separated values of the second sample
        #[arg(long, allow_hyphen_values = true, requires = "x", conflicts_with = "input")]
        y: Option<String>,
        /// JSON file holding {"x": [...], "y": [...]}
        #[arg(long)]
        input: Option<PathBuf>,
    },
    /// Descriptive statistics of one sample
    Describe {
        /// Comma-separated values
        #[arg(long, allow_hyphen_values = true, default_value = "")]
        values: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Deserialize)]
struct SampleInput {
    x: Vec<f64>,
    y: Vec<f64>,
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let matches = Cli::command().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    match run(&cli, &matches) {
        Ok(output) => println!("{}", output),
        Err(msg) => {
            eprintln!("ERROR: {}", msg);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli, matches: &ArgMatches) -> Result<String, String> {
    match &cli.command {
        Command::Compare { x, y, input } => {
            let config = resolve_config(cli, matches)?;
            let (x, y) = match (x, y, input) {
                (_, _, Some(path)) => read_input(path)?,
                (Some(x), Some(y), None) => (parse_values(x)?, parse_values(y)?),
                _ => return Err("compare needs --x and --y, or --input".to_string()),
            };
            tracing::debug!(
                n1 = x.len(),
                n2 = y.len(),
                alpha = config.alpha,
                "comparing samples"
            );
            let comparison = compare_samples(&x, &y, &config).map_err(|e| e.to_string())?;
            match cli.format {
                OutputFormat::Json => {
                    serde_json::to_string_pretty(&comparison).map_err(|e| e.to_string())
                }
                OutputFormat::Text => Ok(comparison.summary),
            }
        }
        Command::Describe { values } => {
            let values = parse_values(values)?;
            let stats = descriptive_stats(&values).map_err(|e| e.to_string())?;
            match cli.format {
                OutputFormat::Json => {
                    serde_json::to_string_pretty(&stats).map_err(|e| e.to_string())
                }
                OutputFormat::Text => Ok(describe_text(stats.as_ref())),
            }
        }
    }
}

/// Precedence, lowest first: defaults, config file, `RANKSUM_ALPHA`, `--alpha`.
///
/// `RANKSUM_ALPHA` is read only by the library, which ignores bad values with
/// a warning; a bad `--alpha` is a hard error.
fn resolve_config(cli: &Cli, matches: &ArgMatches) -> Result<ComparisonConfig, String> {
    let mut config = match cli.config.as_deref() {
        Some(path) if is_set_on_command_line(matches, "config") => {
            let mut config = ComparisonConfig::from_file(path)
                .map_err(|e| format!("{}: {}", path.display(), e))?;
            config.apply_env_override();
            config
        }
        path => ComparisonConfig::load_or_default(path),
    };
    if let Some(alpha) = cli.alpha {
        config.alpha = alpha;
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn is_set_on_command_line(matches: &ArgMatches, arg: &str) -> bool {
    matches.value_source(arg) == Some(ValueSource::CommandLine)
}

fn read_input(path: &Path) -> Result<(Vec<f64>, Vec<f64>), String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    let input: SampleInput = serde_json::from_str(&content)
        .map_err(|e| format!("failed to parse {}: {}", path.display(), e))?;
    Ok((input.x, input.y))
}

/// Parses `"1, 2.5,-3"`. Blank input is an empty sample.
fn parse_values(raw: &str) -> Result<Vec<f64>, String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<f64>()
                .map_err(|_| format!("invalid number {:?} at position {}", token, i + 1))
        })
        .collect()
}

fn describe_text(stats: Option<&DescriptiveStats>) -> String {
    match stats {
        None => "no data".to_string(),
        Some(s) => format!(
            "n = {}, mean = {:.3}, sd = {:.3}, min = {}, q1 = {}, median = {}, q3 = {}, max = {}",
            s.count, s.mean, s.std_dev, s.min, s.q1, s.median, s.q3, s.max
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_cli(args: &[&str]) -> (Cli, ArgMatches) {
        let matches = Cli::command()
            .try_get_matches_from(args)
            .expect("args should parse");
        let cli = Cli::from_arg_matches(&matches).expect("matches should parse into Cli");
        (cli, matches)
    }

    #[test]
    fn parse_values_accepts_spaces_and_negatives() {
        assert_eq!(parse_values("1, -2.5,3").unwrap(), vec![1.0, -2.5, 3.0]);
        assert!(parse_values("").unwrap().is_empty());
        assert!(parse_values(" , ").unwrap().is_empty());
    }

    #[test]
    fn parse_values_names_bad_token() {
        let err = parse_values("1,two,3").unwrap_err();
        assert!(err.contains("\"two\""), "err={}", err);
        assert!(err.contains("position 2"), "err={}", err);
    }

    #[test]
    fn compare_requires_both_samples() {
        assert!(Cli::command()
            .try_get_matches_from(["ranksum", "compare", "--x", "1,2"])
            .is_err());
    }

    #[test]
    fn alpha_flag_overrides_default() {
        let (cli, matches) = parse_cli(&[
            "ranksum", "--alpha", "0.2", "compare", "--x", "1", "--y", "2",
        ]);
        let config = resolve_config(&cli, &matches).unwrap();
        assert_eq!(config.alpha, 0.2);
    }

    #[test]
    fn out_of_range_alpha_is_an_error() {
        let (cli, matches) = parse_cli(&[
            "ranksum", "compare", "--alpha", "2", "--x", "1", "--y", "2",
        ]);
        assert!(resolve_config(&cli, &matches).is_err());
    }

    #[test]
    fn explicit_missing_config_file_is_an_error() {
        let (cli, matches) = parse_cli(&[
            "ranksum",
            "compare",
            "--config",
            "/definitely/not/here.json",
            "--x",
            "1",
            "--y",
            "2",
        ]);
        let err = resolve_config(&cli, &matches).unwrap_err();
        assert!(err.contains("not/here.json"), "err={}", err);
    }

    #[test]
    fn text_summary_for_describe() {
        let s = descriptive_stats(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(
            describe_text(s.as_ref()),
            "n = 5, mean = 3.000, sd = 1.414, min = 1, q1 = 2, median = 3, q3 = 4, max = 5"
        );
        assert_eq!(describe_text(None), "no data");
    }
}
