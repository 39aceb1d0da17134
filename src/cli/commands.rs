//! Command implementation for the CLI.

use std::io::{self, BufReader, Write};

use anyhow::Context;
use log::info;

use crate::cli::args::{OutputFormat, RocchioArgs};
use crate::cli::output::{ConsoleReporter, output_report};
use crate::config::AppConfig;
use crate::error::Result;
use crate::feedback::{ConsoleJudge, FeedbackController, FeedbackReport, RelevanceJudge};
use crate::ml::query_expansion::RocchioReformulator;
use crate::search::{GoogleSearchClient, SearchClient};

/// Merge the config file (if any) with command line overrides and validate.
///
/// Nothing is searched unless this succeeds.
pub fn resolve_config(args: &RocchioArgs) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };

    config.feedback.desired_precision = args.precision;
    if let Some(max_iterations) = args.max_iterations {
        config.feedback.max_iterations = max_iterations;
    }

    config.validate()?;
    Ok(config)
}

/// Run one session with the given collaborators.
///
/// The transcript goes to `transcript`; the report is returned rather than
/// printed. Aborting errors carry the query as context.
pub fn run_session<W: Write + 'static>(
    args: &RocchioArgs,
    config: &AppConfig,
    search: Box<dyn SearchClient>,
    judge: Box<dyn RelevanceJudge>,
    transcript: W,
) -> Result<FeedbackReport> {
    let mut reporter = ConsoleReporter::new(
        args.api_key.as_str(),
        args.engine_id.as_str(),
        args.precision,
        transcript,
    );
    reporter.print_parameters(&args.query);

    let reformulator = RocchioReformulator::new(config.rocchio)?;
    let mut controller = FeedbackController::new(
        config.feedback.clone(),
        search,
        judge,
        Box::new(reformulator),
    )?
    .with_observer(Box::new(reporter));

    let report = controller
        .run(&args.query)
        .with_context(|| format!("feedback session for '{}' aborted", args.query))?;
    Ok(report)
}

/// Run an interactive feedback session.
///
/// With `--format json` the transcript and the judgment prompts go to stderr
/// so stdout carries only the JSON report.
pub fn execute_command(args: RocchioArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    info!("Starting feedback session with {config:?}");

    let search = GoogleSearchClient::new(&args.api_key, &args.engine_id, config.search.clone())
        .context("failed to set up the search client")?;

    let report = match args.output_format {
        OutputFormat::Human => run_session(
            &args,
            &config,
            Box::new(search),
            Box::new(ConsoleJudge::stdio()),
            io::stdout(),
        )?,
        OutputFormat::Json => run_session(
            &args,
            &config,
            Box::new(search),
            Box::new(ConsoleJudge::new(BufReader::new(io::stdin()), io::stderr())),
            io::stderr(),
        )?,
    };
    output_report(&report, &args)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::error::RocchioError;
    use crate::search::SearchResult;

    fn args(extra: &[&str]) -> RocchioArgs {
        let mut argv = vec!["rocchio"];
        argv.extend_from_slice(extra);
        argv.extend(["key", "cx", "0.9", "jaguar"]);
        RocchioArgs::try_parse_from(argv).unwrap()
    }

    struct QuotaExceeded;

    impl SearchClient for QuotaExceeded {
        fn search(&mut self, _query: &str, _count: usize) -> Result<Vec<SearchResult>> {
            Err(RocchioError::search("quota exceeded"))
        }

        fn name(&self) -> &str {
            "quota"
        }
    }

    struct NeverAsked;

    impl RelevanceJudge for NeverAsked {
        fn judge(&mut self, _rank: usize, _result: &SearchResult) -> Result<bool> {
            panic!("nothing should be judged");
        }
    }

    #[test]
    fn test_resolve_config_overrides() {
        let args = RocchioArgs::try_parse_from([
            "rocchio",
            "--max-iterations",
            "3",
            "key",
            "cx",
            "0.7",
            "jaguar",
        ])
        .unwrap();

        let config = resolve_config(&args).unwrap();
        assert_eq!(config.feedback.desired_precision, 0.7);
        assert_eq!(config.feedback.max_iterations, 3);
    }

    #[test]
    fn test_resolve_config_rejects_zero_iterations() {
        let args = RocchioArgs::try_parse_from([
            "rocchio",
            "--max-iterations",
            "0",
            "key",
            "cx",
            "0.7",
            "jaguar",
        ])
        .unwrap();

        assert!(matches!(
            resolve_config(&args),
            Err(RocchioError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_aborted_session_names_the_query() {
        let args = args(&["--format", "json"]);
        let config = resolve_config(&args).unwrap();

        let err = run_session(
            &args,
            &config,
            Box::new(QuotaExceeded),
            Box::new(NeverAsked),
            io::sink(),
        )
        .unwrap_err();

        assert!(matches!(err, RocchioError::Anyhow(_)));
        assert_eq!(
            err.to_string(),
            "feedback session for 'jaguar' aborted: Search error: quota exceeded"
        );
    }
}
