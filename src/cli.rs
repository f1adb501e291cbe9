//! Command line interface.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::columns::{ColumnDirectives, Directive, HideList};
use crate::fields::FieldUniverse;
use crate::logging::LogLevel;
use crate::render::TableStyle;

/// A wrapper for `docker ps` with selectable columns, custom filtering and
/// styled table output.
#[derive(Parser, Debug, Clone)]
#[command(name = "dps", version)]
pub struct Cli {
    /// Show all containers (default shows just running)
    #[arg(short, long)]
    pub all: bool,

    /// Show n last created containers (includes all states)
    #[arg(short = 'n', long, value_name = "N", conflicts_with = "latest")]
    pub last: Option<u32>,

    /// Show the latest created container (includes all states)
    #[arg(short, long)]
    pub latest: bool,

    /// Don't truncate output; also keeps full container IDs
    #[arg(long)]
    pub no_trunc: bool,

    /// Table border style
    #[arg(long, value_enum, ignore_case = true)]
    pub style: Option<TableStyle>,

    /// Logging level
    #[arg(long, value_enum, ignore_case = true, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Docker-side filter (k=v), repeatable or comma-separated
    #[arg(long = "filter", value_name = "FILTER", value_delimiter = ',')]
    pub filters: Vec<String>,

    /// Filter fetched containers with key=pattern pairs, e.g.
    /// 'Status=Up*,Names=web-*'. Patterns with *, ?, [ or ] are globs,
    /// anything else is a case-insensitive substring
    #[arg(short, long, value_name = "EXPR")]
    pub find: Option<String>,

    /// Column names to hide, repeatable or comma-separated
    #[arg(long = "hide-column", value_name = "COLUMNS", value_delimiter = ',')]
    pub hide_columns: Vec<String>,

    /// Only display container IDs; ignores column selection and --find
    #[arg(short, long)]
    pub quiet: bool,

    /// Config file [default: ~/.dpsrc]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(flatten)]
    pub columns: ColumnFlags,
}

impl Cli {
    /// Hide list from `--hide-column` merged with `extra`.
    #[must_use]
    pub fn hide_list(&self, extra: &HideList) -> HideList {
        let mut list = HideList::from_args(&self.hide_columns);
        for name in extra.iter() {
            list.insert(name);
        }
        list
    }
}

/// Per-column `--<flag>` / `--no-<flag>` switches. The last one given wins.
#[derive(Args, Debug, Clone, Default)]
#[command(next_help_heading = "Displayed Columns")]
pub struct ColumnFlags {
    /// Show the ID column
    #[arg(long, overrides_with = "no_id")]
    pub id: bool,
    /// Hide the ID column
    #[arg(long, overrides_with = "id")]
    pub no_id: bool,

    /// Show the Image column
    #[arg(long, overrides_with = "no_image")]
    pub image: bool,
    /// Hide the Image column
    #[arg(long, overrides_with = "image")]
    pub no_image: bool,

    /// Show the Command column
    #[arg(long, overrides_with = "no_command")]
    pub command: bool,
    /// Hide the Command column
    #[arg(long, overrides_with = "command")]
    pub no_command: bool,

    /// Show the Created column
    #[arg(long, overrides_with = "no_created")]
    pub created: bool,
    /// Hide the Created column
    #[arg(long, overrides_with = "created")]
    pub no_created: bool,

    /// Show the Status column
    #[arg(long, overrides_with = "no_status")]
    pub status: bool,
    /// Hide the Status column
    #[arg(long, overrides_with = "status")]
    pub no_status: bool,

    /// Show the Ports column
    #[arg(long, overrides_with = "no_port")]
    pub port: bool,
    /// Hide the Ports column
    #[arg(long, overrides_with = "port")]
    pub no_port: bool,

    /// Show the Names column
    #[arg(long, overrides_with = "no_name")]
    pub name: bool,
    /// Hide the Names column
    #[arg(long, overrides_with = "name")]
    pub no_name: bool,

    /// Show the Size column (adds -s to docker)
    #[arg(long, overrides_with = "no_size")]
    pub size: bool,
    /// Hide the Size column
    #[arg(long, overrides_with = "size")]
    pub no_size: bool,

    /// Show the Health column
    #[arg(long, overrides_with = "no_health")]
    pub health: bool,
    /// Hide the Health column
    #[arg(long, overrides_with = "health")]
    pub no_health: bool,

    /// Show the Labels column
    #[arg(long, overrides_with = "no_label")]
    pub label: bool,
    /// Hide the Labels column
    #[arg(long, overrides_with = "label")]
    pub no_label: bool,
}

impl ColumnFlags {
    /// (flag stem, show, hide) for every switch pair.
    fn switches(&self) -> [(&'static str, bool, bool); 10] {
        [
            ("id", self.id, self.no_id),
            ("image", self.image, self.no_image),
            ("command", self.command, self.no_command),
            ("created", self.created, self.no_created),
            ("status", self.status, self.no_status),
            ("port", self.port, self.no_port),
            ("name", self.name, self.no_name),
            ("size", self.size, self.no_size),
            ("health", self.health, self.no_health),
            ("label", self.label, self.no_label),
        ]
    }

    /// Directives for the fields of `universe`, matched by flag stem.
    #[must_use]
    pub fn directives(&self, universe: &FieldUniverse<'_>) -> ColumnDirectives {
        let switches = self.switches();
        let mut directives = ColumnDirectives::new();
        for field in universe.fields() {
            if let Some((_, show, hide)) = switches.iter().find(|(flag, ..)| *flag == field.flag) {
                directives.set(field.name, Directive::from_flags(*show, *hide));
            }
        }
        directives
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("dps").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&[]);
        assert!(!cli.all && !cli.quiet && !cli.no_trunc);
        assert!(cli.style.is_none());
        assert!(cli.filters.is_empty());
        assert!(cli.columns.directives(&FieldUniverse::docker()).is_empty());
    }

    #[test]
    fn test_docker_flags() {
        let cli = parse(&[
            "-a",
            "-n",
            "5",
            "--no-trunc",
            "--filter",
            "status=running,name=web",
            "--filter",
            "label=env",
        ]);
        assert!(cli.all);
        assert_eq!(cli.last, Some(5));
        assert!(cli.no_trunc);
        assert_eq!(cli.filters, vec!["status=running", "name=web", "label=env"]);
    }

    #[test]
    fn test_last_conflicts_with_latest() {
        assert!(Cli::try_parse_from(["dps", "-n", "2", "-l"]).is_err());
    }

    #[test]
    fn test_find_short_flag() {
        let cli = parse(&["-f", "Status=Up*"]);
        assert_eq!(cli.find.as_deref(), Some("Status=Up*"));
    }

    #[test]
    fn test_style_and_level_are_case_insensitive() {
        let cli = parse(&["--style", "MINIMAL", "--log-level", "debug"]);
        assert_eq!(cli.style, Some(TableStyle::Minimal));
        assert_eq!(cli.log_level, Some(LogLevel::Debug));

        let cli = parse(&["--log-level", "WARNING"]);
        assert_eq!(cli.log_level, Some(LogLevel::Warning));
        assert!(Cli::try_parse_from(["dps", "--style", "heavy"]).is_err());
    }

    #[test]
    fn test_column_switches_last_one_wins() {
        let universe = FieldUniverse::docker();

        let directives = parse(&["--port", "--no-port", "--name"]).columns.directives(&universe);
        assert_eq!(directives.get("Ports"), Directive::Hidden);
        assert_eq!(directives.get("Names"), Directive::Shown);
        assert_eq!(directives.get("Image"), Directive::Unset);

        let directives = parse(&["--no-size", "--size"]).columns.directives(&universe);
        assert_eq!(directives.get("Size"), Directive::Shown);
    }

    #[test]
    fn test_hide_list_merges_config() {
        let cli = parse(&["--hide-column", "Ports,Names", "--hide-column", "image"]);
        let from_config = HideList::from_args(["Labels"]);
        let list = cli.hide_list(&from_config);
        let names: Vec<_> = list.iter().collect();
        assert_eq!(names, vec!["image", "labels", "names", "ports"]);
    }
}
