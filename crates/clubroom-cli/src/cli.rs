//! Argument parsing and command dispatch.

use anyhow::anyhow;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clubroom_routes::{
    BASE_URL_ENV, BaseUrl, ConfigError, Params, RouteError, RouteName, RouteTable,
};
use clubroom_telemetry::{DEFAULT_LOG_LEVEL, LogFormat, LoggingConfig, init_logging};
use tracing::debug;

use crate::output::{render_check, render_href, render_resolved, render_routes};

#[derive(Parser, Debug)]
#[command(
    name = "clubroom",
    about = "Inspect the club site route table",
    version
)]
pub(crate) struct Cli {
    /// Path prefix the site is served under.
    #[arg(long, env = BASE_URL_ENV, default_value = "/")]
    pub(crate) base_url: String,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub(crate) output: OutputFormat,
    /// Log level directive; `RUST_LOG` takes precedence.
    #[arg(long, env = "CLUBROOM_LOG_LEVEL", default_value = DEFAULT_LOG_LEVEL)]
    pub(crate) log_level: String,
    /// Log output format (`pretty` or `json`); inferred from the build when unset.
    #[arg(long, env = "CLUBROOM_LOG_FORMAT")]
    pub(crate) log_format: Option<String>,
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// List every route, nested children included.
    Routes,
    /// Resolve a path to its route, props, and breadcrumb trail.
    Resolve(ResolveArgs),
    /// Build the link for a named route.
    Href(HrefArgs),
    /// Validate the table and report the number of routes.
    Check,
}

#[derive(Args, Debug)]
pub(crate) struct ResolveArgs {
    /// App-relative path, or a full location with `--location`.
    pub(crate) path: String,
    /// Title reported by the view, appended to titled breadcrumbs.
    #[arg(long)]
    pub(crate) title: Option<String>,
    /// Treat the path as a browser location that includes the base URL.
    #[arg(long)]
    pub(crate) location: bool,
}

#[derive(Args, Debug)]
pub(crate) struct HrefArgs {
    /// Route name, e.g. `notice` or `classRecord`.
    pub(crate) name: String,
    /// Path parameter as `key=value`; repeatable.
    #[arg(short = 'p', long = "param", value_parser = parse_param)]
    pub(crate) params: Vec<(String, String)>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl From<RouteError> for CliError {
    fn from(err: RouteError) -> Self {
        let message = match &err {
            RouteError::NotFound { path } => format!("{err}: {path}"),
            RouteError::UnknownRoute { name } => format!("{err}: {name}"),
            RouteError::MissingParam { route, param } => {
                format!("{err}: {route} requires `{param}` (pass -p {param}=VALUE)")
            }
            RouteError::InvalidParam { param, value } => format!("{err}: {param}={value}"),
            RouteError::InvalidEncoding { segment } => format!("{err}: {segment}"),
            RouteError::DuplicateName { .. }
            | RouteError::MissingProps { .. }
            | RouteError::MalformedTrail { .. }
            | RouteError::ParameterizedCrumbTarget { .. } => {
                return Self::failure(anyhow!("route table is invalid: {err:?}"));
            }
        };
        Self::validation(message)
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::InvalidBaseUrl { value, reason } => {
                Self::validation(format!("invalid base url `{value}`: {reason}"))
            }
        }
    }
}

fn logging_config(cli: &Cli) -> LoggingConfig<'_> {
    LoggingConfig {
        level: &cli.log_level,
        format: cli
            .log_format
            .as_deref()
            .map_or_else(LogFormat::infer, LogFormat::from_name),
        ..LoggingConfig::default()
    }
}

/// Parses CLI arguments, executes the requested command, and prints its
/// output. Returns the process exit code.
#[must_use]
pub fn run() -> i32 {
    let cli = Cli::parse();
    if let Err(err) = init_logging(&logging_config(&cli)) {
        eprintln!("warning: {err}");
    }

    match execute(&cli) {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(err) => {
            eprintln!("error: {}", err.display_message());
            err.exit_code()
        }
    }
}

pub(crate) fn execute(cli: &Cli) -> CliResult<String> {
    let base = BaseUrl::parse(&cli.base_url)?;
    let table = RouteTable::club(base)?;
    debug!(command = ?cli.command, "dispatching command");

    match &cli.command {
        Command::Routes => render_routes(&table.routes(), cli.output),
        Command::Resolve(args) => {
            let resolved = if args.location {
                table.resolve_location(&args.path)?
            } else {
                table.resolve(&args.path)?
            };
            render_resolved(&resolved, args.title.as_deref(), cli.output)
        }
        Command::Href(args) => {
            let name = args.name.parse::<RouteName>()?;
            let params = args
                .params
                .iter()
                .fold(Params::new(), |params, (key, value)| {
                    params.with(key.as_str(), value.as_str())
                });
            let href = table.href(name, &params)?;
            render_href(&href, cli.output)
        }
        Command::Check => render_check(&table, cli.output),
    }
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err("parameter name cannot be empty".to_string());
    }
    Ok((key.to_string(), value.to_string()))
}
