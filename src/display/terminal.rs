// src/display/terminal.rs
//! Terminal-based report rendering

use crate::batch::{BatchReport, DecodedSentence};
use crate::error::{AppError, Result};
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::Write;

pub struct TerminalReport {
    colored: bool,
}

impl TerminalReport {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    /// Render one status line per sentence followed by a summary.
    pub fn render(&self, out: &mut impl Write, report: &BatchReport) -> Result<()> {
        self.render_header(out)?;

        for decoded in &report.decoded {
            let line = format!(
                "{:>4}  {}\n",
                decoded.record.sentence_type(),
                describe(decoded)
            );
            self.print_colored(out, Color::Green, &line)?;
        }

        for failure in &report.failures {
            let line = format!("FAIL  {} ({})\n", failure.sentence, failure.error);
            self.print_colored(out, Color::Red, &line)?;
        }

        let summary = format!(
            "\n{} sentences: {} decoded, {} failed\n",
            report.total(),
            report.decoded.len(),
            report.failures.len()
        );
        execute!(out, Print(summary)).map_err(|e| AppError::Io(e))?;

        Ok(())
    }

    fn render_header(&self, out: &mut impl Write) -> Result<()> {
        let rule = "=".repeat(60);
        let header = format!("{}\nNMEA Sentence Decoder\n{}\n", rule, rule);
        self.print_colored(out, Color::Green, &header)
    }

    fn print_colored(&self, out: &mut impl Write, color: Color, text: &str) -> Result<()> {
        if self.colored {
            execute!(
                out,
                SetForegroundColor(color),
                Print(text.to_string()),
                ResetColor
            )
            .map_err(|e| AppError::Io(e))?;
        } else {
            execute!(out, Print(text.to_string())).map_err(|e| AppError::Io(e))?;
        }
        Ok(())
    }
}

/// Short one-line description of a decoded record.
fn describe(decoded: &DecodedSentence) -> String {
    match decoded.record.coordinates() {
        Some((latitude, longitude)) => {
            let mut text = format!("{:.6}, {:.6}", latitude, longitude);
            for (name, value) in &decoded.enrichments {
                text.push_str(&format!(" [{}: {}]", name, value));
            }
            text
        }
        None => "decoded".to_string(),
    }
}
