//! CLI argument parsing, grounded on `otter_sat`'s `cli::config::parse_args`
//! (hand-rolled `--flag`/`--flag=value` scanning over `std::env::args()`,
//! no clap).

use natded::config::Config;

/// Options relevant only to the CLI, not the engine itself.
pub struct CliOptions {
    /// Path to the input file; `None` means read from stdin.
    pub input: Option<String>,
}

impl Default for CliOptions {
    fn default() -> CliOptions {
        CliOptions { input: None }
    }
}

pub enum ArgError {
    NonSpecific(String),
}

impl std::fmt::Display for ArgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgError::NonSpecific(s) => write!(f, "{s}"),
        }
    }
}

/// Parses `args` (as from `std::env::args().collect()`) into an engine
/// [Config] and [CliOptions]. The final non-flag argument, if any, is
/// taken as the input file path.
pub fn parse_args(args: &[String]) -> Result<(Config, CliOptions), ArgError> {
    let mut cfg = Config::default();
    let mut cli_options = CliOptions::default();

    'arg_examination: for arg in args.iter().skip(1) {
        let mut split = arg.split('=');
        match split.next() {
            Some("--max-lines") => {
                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        cfg.max_lines = value;
                        continue 'arg_examination;
                    }
                }
                return Err(ArgError::NonSpecific(
                    "--max-lines requires a positive integer value".to_string(),
                ));
            }
            Some(flag) if flag.starts_with("--") => {
                return Err(ArgError::NonSpecific(format!("unrecognised option: {flag}")));
            }
            Some(path) => cli_options.input = Some(path.to_string()),
            None => {}
        }
    }

    Ok((cfg, cli_options))
}
