//! Console output for the feedback session.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::{OutputFormat, RocchioArgs};
use crate::error::Result;
use crate::feedback::{FeedbackObserver, FeedbackReport, TerminationReason};
use crate::ml::query_expansion::Reformulation;
use crate::search::SearchResult;

/// Hide all but the last four characters of a secret.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let visible: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{visible}", "*".repeat(chars.len() - 4))
}

/// The echoed session parameters.
pub fn format_parameters(api_key: &str, engine_id: &str, precision: f64, query: &str) -> String {
    format!(
        "Parameters:\n\
         Client key  = {}\n\
         Engine id   = {engine_id}\n\
         Precision   = {precision}\n\
         Query       = {query}",
        mask_secret(api_key)
    )
}

/// The block shown for one result before it is judged.
pub fn format_result(rank: usize, result: &SearchResult) -> String {
    let mut out = format!("Result {rank}\n");
    if let Some(file_format) = &result.file_format {
        out.push_str(&format!("{file_format}\n"));
    }
    out.push_str(&format!(
        "[\n URL: {}\n Title: {}\n Description: {}\n]\n",
        result.url,
        result.title(),
        result.description()
    ));
    out
}

/// The closing line for each way the loop can stop.
pub fn termination_message(reason: &TerminationReason) -> String {
    match reason {
        TerminationReason::InsufficientResults {
            requested,
            returned,
        } => format!(
            "Not enough results were found ({returned} of {requested}), done"
        ),
        TerminationReason::AllNonRelevant => {
            "No results were judged relevant in this iteration, done".to_string()
        }
        TerminationReason::TargetReached { .. } => "Desired precision reached, done".to_string(),
        TerminationReason::MaxIterations { iterations } => {
            format!("Stopped after the maximum of {iterations} iterations, done")
        }
        TerminationReason::ExpansionExhausted { detail } => {
            format!("Could not expand the query further ({detail}), done")
        }
    }
}

/// Writes the interactive transcript.
///
/// The session parameters are echoed again after every expansion. Write
/// failures on the transcript are ignored so they never abort a session.
pub struct ConsoleReporter<W: Write> {
    api_key: String,
    engine_id: String,
    precision: f64,
    writer: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new<S: Into<String>>(api_key: S, engine_id: S, precision: f64, writer: W) -> Self {
        Self {
            api_key: api_key.into(),
            engine_id: engine_id.into(),
            precision,
            writer,
        }
    }

    pub fn print_parameters(&mut self, query: &str) {
        let parameters = format_parameters(&self.api_key, &self.engine_id, self.precision, query);
        let _ = writeln!(self.writer, "{parameters}");
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.writer, "{text}");
    }
}

impl<W: Write> FeedbackObserver for ConsoleReporter<W> {
    fn iteration_started(&mut self, iteration: usize, _query: &str) {
        self.line(&format!("Iteration #{iteration}"));
        self.line("Google Search Results:");
        self.line("======================");
    }

    fn result_presented(&mut self, rank: usize, result: &SearchResult) {
        self.line(&format_result(rank, result));
    }

    fn feedback_summary(&mut self, query: &str, precision: f64, _desired_precision: f64) {
        self.line("======================");
        self.line("FEEDBACK SUMMARY");
        self.line(&format!("Query      {}", query.trim()));
        self.line(&format!("Precision  {precision}"));
    }

    fn expanding(&mut self, desired_precision: f64) {
        self.line(&format!(
            "Still below the desired precision of {desired_precision}"
        ));
        self.line("Indexing results ....");
    }

    fn query_expanded(&mut self, reformulation: &Reformulation) {
        self.line(&format!(
            "Augmenting by  {}",
            reformulation.augmenting_terms().join(" ")
        ));
        self.print_parameters(reformulation.query.trim());
    }

    fn terminated(&mut self, reason: &TerminationReason) {
        self.line(&termination_message(reason));
        let _ = self.writer.flush();
    }
}

/// Print the final report in the requested format.
pub fn output_report(report: &FeedbackReport, args: &RocchioArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(report, args),
        OutputFormat::Json => output_json(report, args),
    }
}

fn output_human(report: &FeedbackReport, args: &RocchioArgs) -> Result<()> {
    if args.verbosity() == 0 {
        return Ok(());
    }
    println!();
    println!("Final query: {}", report.final_query.trim());
    println!(
        "Iterations:  {} ({})",
        report.iterations.len(),
        report.termination
    );
    Ok(())
}

fn output_json<T: Serialize>(result: &T, args: &RocchioArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
