//! Relevance judgments.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::error::Result;
use crate::search::SearchResult;

/// Source of binary relevance judgments, asked one result at a time.
pub trait RelevanceJudge: Send {
    /// Judge the result shown at `rank` (1-based).
    fn judge(&mut self, rank: usize, result: &SearchResult) -> Result<bool>;
}

/// Interpret a typed answer.
///
/// Only `y` or `Y` count as relevant. Everything else, including an empty
/// line, "yes" and "maybe", is non-relevant.
pub fn parse_judgment(answer: &str) -> bool {
    let answer = answer
        .strip_suffix('\n')
        .map(|a| a.strip_suffix('\r').unwrap_or(a))
        .unwrap_or(answer);
    answer.eq_ignore_ascii_case("y")
}

/// Prompts on a writer and reads answers line by line.
///
/// End of input reads as an empty answer, i.e. non-relevant.
pub struct ConsoleJudge<R, W> {
    reader: R,
    writer: W,
    prompt: String,
}

impl ConsoleJudge<BufReader<Stdin>, Stdout> {
    /// Judge interactively on the process terminal.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleJudge<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            prompt: "Relevant (Y/N)?".to_string(),
        }
    }

    pub fn with_prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead + Send, W: Write + Send> RelevanceJudge for ConsoleJudge<R, W> {
    fn judge(&mut self, _rank: usize, _result: &SearchResult) -> Result<bool> {
        write!(self.writer, "{}", self.prompt)?;
        self.writer.flush()?;

        let mut answer = String::new();
        self.reader.read_line(&mut answer)?;
        Ok(parse_judgment(&answer))
    }
}
