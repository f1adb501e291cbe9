//! Run sequence.
//!
//! Flags and config are merged into [`Settings`], then one run resolves the
//! column schema, fetches records from docker, applies the find expression
//! and renders the table.

use std::io::{self, Write};

use tracing::{debug, info, warn};

use crate::cli::Cli;
use crate::columns::{self, ColumnDirectives, ColumnSchema, HideList};
use crate::config::Config;
use crate::diagnostics::TracingSink;
use crate::docker::{DockerCli, PsOptions, docker_program, runner::DOCKER_ENV};
use crate::error::AppError;
use crate::fields::FieldUniverse;
use crate::find;
use crate::logging::{self, LogConfig};
use crate::render::{ContainerTable, FALLBACK_WIDTH, TableStyle, write_buffer};
use crate::theme::TableTheme;

/// Process environment that affects a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// `DPS_DOCKER`.
    pub docker: Option<String>,
    /// `NO_COLOR` is set.
    pub no_color: bool,
    /// Stdout is a terminal.
    pub stdout_tty: bool,
    /// Stderr is a terminal.
    pub stderr_tty: bool,
}

impl Environment {
    /// Reads the current process environment.
    #[must_use]
    pub fn current() -> Self {
        Self {
            docker: std::env::var(DOCKER_ENV).ok(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            stdout_tty: atty::is(atty::Stream::Stdout),
            stderr_tty: atty::is(atty::Stream::Stderr),
        }
    }
}

/// Everything a run needs, with flags, environment and config merged.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Docker binary.
    pub docker_program: String,
    /// Options passed to `docker ps`. `size` is filled in from the schema.
    pub ps: PsOptions,
    /// Per-column directives.
    pub directives: ColumnDirectives,
    /// Names hidden regardless of directives.
    pub hide_list: HideList,
    /// Post-fetch find expression.
    pub find: Option<String>,
    /// Print IDs only.
    pub quiet: bool,
    /// Border style.
    pub style: TableStyle,
    /// Table styles.
    pub theme: TableTheme,
    /// ANSI styling on stdout.
    pub color: bool,
    /// Logging setup.
    pub log: LogConfig,
}

impl Settings {
    /// Merges flags over environment over config over defaults.
    #[must_use]
    pub fn resolve(cli: &Cli, config: &Config, env: &Environment) -> Self {
        let universe = FieldUniverse::docker();
        let no_trunc = cli.no_trunc || config.no_trunc;
        let color_allowed = !cli.no_color && !env.no_color && config.color;

        Self {
            docker_program: docker_program(env.docker.as_deref(), config.docker_command.as_deref()),
            ps: PsOptions {
                all: cli.all || config.all,
                last: cli.last,
                latest: cli.latest,
                no_trunc,
                size: false,
                filters: cli
                    .filters
                    .iter()
                    .map(|f| f.trim().to_string())
                    .filter(|f| !f.is_empty())
                    .collect(),
            },
            directives: cli.columns.directives(&universe),
            hide_list: cli.hide_list(&config.hide_columns),
            find: cli.find.clone(),
            quiet: cli.quiet,
            style: cli.style.or(config.style).unwrap_or_default(),
            theme: TableTheme::default()
                .with_header_color(config.header_color)
                .with_border_color(config.border_color)
                .with_no_trunc(no_trunc),
            color: color_allowed && env.stdout_tty,
            log: LogConfig {
                level: cli.log_level.or(config.log_level).unwrap_or_default(),
                to_file: config.log_to_file,
                retention_hours: config.log_retention_hours,
                ansi: color_allowed && env.stderr_tty,
            },
        }
    }

    /// Resolves the column schema, reporting problems through `tracing`.
    #[must_use]
    pub fn schema(&self) -> ColumnSchema {
        columns::resolve(
            &FieldUniverse::docker(),
            &self.directives,
            &self.hide_list,
            &mut TracingSink,
        )
    }
}

/// Parses config, sets up logging and runs once.
///
/// # Errors
/// Returns the first failure; nothing is retried.
pub fn run(cli: &Cli) -> Result<(), AppError> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let env = Environment::current();
    let settings = Settings::resolve(cli, &config, &env);

    logging::init(&settings.log).map_err(AppError::Logging)?;
    debug!("Config: {}", config.config_path.display());

    let width = if env.stdout_tty {
        crossterm::terminal::size().map_or(FALLBACK_WIDTH, |(w, _)| w)
    } else {
        FALLBACK_WIDTH
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&settings, &mut out, width)
}

/// Runs the docker query and writes the result to `out`.
///
/// # Errors
/// Fails if docker fails or output cannot be written.
pub fn execute<W: Write>(settings: &Settings, out: &mut W, width: u16) -> Result<(), AppError> {
    let docker = DockerCli::new(&settings.docker_program);

    if settings.quiet {
        return quiet(settings, &docker, out);
    }

    let schema = settings.schema();
    debug!("Resolved columns: {:?}", schema.pairs());

    let options = PsOptions {
        size: schema.contains("Size"),
        ..settings.ps.clone()
    };
    let mut records = docker.ps(&options)?;

    if records.is_empty() {
        info!("No containers to display.");
    } else if let Some(expr) = &settings.find {
        let before = records.len();
        records = find::filter(records, expr, &mut TracingSink);
        debug!("Find filter kept {} of {} containers", records.len(), before);
        if records.is_empty() {
            info!("No containers matched find filters.");
            return Ok(());
        }
    }

    let table = ContainerTable::new(&schema, &records, settings.theme).style(settings.style);
    if table.is_empty() {
        debug!("No columns selected; nothing to render");
        return Ok(());
    }

    write_buffer(out, &table.to_buffer(width), settings.color)?;
    Ok(())
}

fn quiet<W: Write>(settings: &Settings, docker: &DockerCli, out: &mut W) -> Result<(), AppError> {
    if settings.find.is_some() {
        warn!("Ignoring --find filter in --quiet mode");
    }

    let options = PsOptions {
        size: settings.directives.get("Size") == columns::Directive::Shown,
        ..settings.ps.clone()
    };
    let ids = docker.ps_quiet(&options)?;

    if ids.is_empty() {
        info!("No containers found.");
    } else {
        writeln!(out, "{ids}")?;
        out.flush()?;
    }
    Ok(())
}
