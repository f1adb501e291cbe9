//! `docker ps` argument building.

/// Output format requesting one JSON object per container.
pub const JSON_FORMAT: &str = "{{json .}}";

/// Options passed through to `docker ps`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PsOptions {
    /// `-a`: include stopped containers.
    pub all: bool,
    /// `-n N`: last N created containers.
    pub last: Option<u32>,
    /// `-l`: latest created container.
    pub latest: bool,
    /// `--no-trunc`: don't truncate output.
    pub no_trunc: bool,
    /// `-s`: request container sizes.
    pub size: bool,
    /// `-f` items, in order.
    pub filters: Vec<String>,
}

impl PsOptions {
    /// Arguments for the JSON listing.
    #[must_use]
    pub fn json_args(&self) -> Vec<String> {
        let mut args = vec![
            "ps".to_string(),
            "--format".to_string(),
            JSON_FORMAT.to_string(),
        ];
        self.push_common(&mut args);
        args
    }

    /// Arguments for `docker ps -q`.
    #[must_use]
    pub fn quiet_args(&self) -> Vec<String> {
        let mut args = vec!["ps".to_string(), "-q".to_string()];
        self.push_common(&mut args);
        args
    }

    fn push_common(&self, args: &mut Vec<String>) {
        if self.all {
            args.push("-a".to_string());
        }
        if let Some(n) = self.last {
            args.push("-n".to_string());
            args.push(n.to_string());
        }
        if self.latest {
            args.push("-l".to_string());
        }
        if self.no_trunc {
            args.push("--no-trunc".to_string());
        }
        if self.size {
            args.push("-s".to_string());
        }
        for filter in &self.filters {
            args.push("-f".to_string());
            args.push(filter.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_json_args() {
        assert_eq!(
            PsOptions::default().json_args(),
            vec!["ps", "--format", "{{json .}}"]
        );
    }

    #[test]
    fn test_json_args_order() {
        let options = PsOptions {
            all: true,
            last: Some(3),
            latest: false,
            no_trunc: true,
            size: true,
            filters: vec!["status=running".to_string(), "label=env=prod".to_string()],
        };
        assert_eq!(
            options.json_args(),
            vec![
                "ps",
                "--format",
                "{{json .}}",
                "-a",
                "-n",
                "3",
                "--no-trunc",
                "-s",
                "-f",
                "status=running",
                "-f",
                "label=env=prod",
            ]
        );
    }

    #[test]
    fn test_size_flag_only_when_requested() {
        let mut options = PsOptions::default();
        assert!(!options.json_args().contains(&"-s".to_string()));
        options.size = true;
        assert!(options.json_args().contains(&"-s".to_string()));
    }

    #[test]
    fn test_quiet_args() {
        let options = PsOptions {
            latest: true,
            filters: vec!["name=web".to_string()],
            ..Default::default()
        };
        assert_eq!(options.quiet_args(), vec!["ps", "-q", "-l", "-f", "name=web"]);
    }
}
