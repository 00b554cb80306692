//! Classify subcommand implementation.
//!
//! Handles the `targetscope classify <target>...` command.

use crate::classifier::{parse_target_list, Classifier};
use crate::cli::OutputFormat;
use crate::config::AppSettings;
use crate::error::{CliError, CliResult};
use crate::output;
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;

/// Classify one or more targets.
#[derive(Parser, Debug)]
pub struct ClassifyCommand {
    /// Targets to classify
    ///
    /// Examples:
    ///   192.168.1.1                       IP address
    ///   github.com/owner/repo             Repository
    ///   git@github.com:owner/repo.git     Repository (SSH)
    ///   example.com                       Web application
    ///   ./src                             Local code directory
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Read additional targets from a file (one per line, '#' starts a comment)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Extra hosts to treat as repository hosts
    #[arg(
        long = "repo-host",
        value_name = "HOST",
        value_delimiter = ',',
        env = "TARGETSCOPE_REPO_HOSTS"
    )]
    pub repo_hosts: Vec<String>,

    /// Treat a leading '~' in paths literally
    #[arg(long)]
    pub no_expand_home: bool,
}

impl ClassifyCommand {
    /// Execute the classify command.
    pub fn execute(&self, settings: AppSettings, quiet: bool) -> CliResult<()> {
        let inputs = self.collect_inputs()?;
        if inputs.is_empty() {
            return Err(CliError::Other(
                "no targets given (pass TARGET arguments or --file)".to_string(),
            ));
        }

        let format = match self.output {
            Some(format) => format,
            None => OutputFormat::from_str(&settings.default_output_format, true)
                .map_err(CliError::Other)?,
        };

        let classifier = Classifier::new(self.apply_overrides(settings));
        tracing::debug!(count = inputs.len(), %format, "classifying targets");
        let report = classifier.classify_all(&inputs);

        output::print_report(&report, format)?;

        if !report.is_clean() {
            return Err(CliError::Other(format!(
                "{} of {} targets rejected",
                report.rejected.len(),
                inputs.len()
            )));
        }

        if !quiet && format == OutputFormat::Plain {
            output::print_info(&report.summary());
        }

        Ok(())
    }

    /// Positional targets followed by those read from `--file`.
    fn collect_inputs(&self) -> CliResult<Vec<String>> {
        let mut inputs = self.targets.clone();

        if let Some(path) = &self.file {
            let contents = fs::read_to_string(path).map_err(|e| {
                CliError::Other(format!("failed to read {}: {}", path.display(), e))
            })?;
            inputs.extend(parse_target_list(&contents));
        }

        Ok(inputs)
    }

    fn apply_overrides(&self, mut settings: AppSettings) -> AppSettings {
        for host in &self.repo_hosts {
            let host = host.trim().to_ascii_lowercase();
            if !host.is_empty() && !settings.is_repository_host(&host) {
                settings.repository_hosts.push(host);
            }
        }
        if self.no_expand_home {
            settings.expand_home = false;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(args: &[&str]) -> ClassifyCommand {
        let mut argv = vec!["classify"];
        argv.extend_from_slice(args);
        ClassifyCommand::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_collect_inputs_merges_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("targets.txt");
        fs::write(&file, "# scope\nexample.com\n\n10.0.0.1\n").unwrap();

        let cmd = command(&["github.com/a/b", "-f", file.to_str().unwrap()]);
        assert_eq!(
            cmd.collect_inputs().unwrap(),
            vec!["github.com/a/b", "example.com", "10.0.0.1"]
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let cmd = command(&["-f", "/nonexistent/targets.txt"]);
        assert!(matches!(cmd.collect_inputs(), Err(CliError::Other(_))));
    }

    #[test]
    fn test_overrides() {
        let cmd = command(&["--repo-host", "Git.Corp.Internal", "--no-expand-home"]);
        let settings = cmd.apply_overrides(AppSettings::default());

        assert!(!settings.expand_home);
        assert!(settings.is_repository_host("git.corp.internal"));
        assert!(settings.is_repository_host("github.com"));
    }

    #[test]
    fn test_no_targets_is_an_error() {
        let cmd = command(&[]);
        let result = cmd.execute(AppSettings::default(), true);
        assert!(matches!(result, Err(CliError::Other(_))));
    }

    #[test]
    fn test_rejected_target_fails_after_report() {
        let cmd = command(&["example.com", "not-a-valid-target", "-o", "json"]);
        let result = cmd.execute(AppSettings::default(), true);

        match result {
            Err(CliError::Other(msg)) => assert_eq!(msg, "1 of 2 targets rejected"),
            other => panic!("expected rejection error, got {:?}", other),
        }
    }
}
