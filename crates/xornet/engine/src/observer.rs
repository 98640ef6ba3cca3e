use crate::types::GenerationReport;
use std::io::{self, Write};

/// Receives one report per generation.
pub trait GenerationObserver {
    fn on_generation(&mut self, report: &GenerationReport) -> io::Result<()>;
}

/// Plain text sink: the best score on one line, the best output vector on
/// the next.
pub struct ConsoleObserver<W: Write> {
    out: W,
}

impl ConsoleObserver<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GenerationObserver for ConsoleObserver<W> {
    fn on_generation(&mut self, report: &GenerationReport) -> io::Result<()> {
        let cells = report
            .best_output
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(self.out, "{}", report.best_score)?;
        writeln!(self.out, "[{}]", cells)?;
        self.out.flush()
    }
}

/// One JSON object per line.
pub struct JsonObserver<W: Write> {
    out: W,
}

impl JsonObserver<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> GenerationObserver for JsonObserver<W> {
    fn on_generation(&mut self, report: &GenerationReport) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, report)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Keeps every report in memory.
#[derive(Default)]
pub struct RecordingObserver {
    pub reports: Vec<GenerationReport>,
}

impl GenerationObserver for RecordingObserver {
    fn on_generation(&mut self, report: &GenerationReport) -> io::Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }
}

/// Discards reports.
pub struct NullObserver;

impl GenerationObserver for NullObserver {
    fn on_generation(&mut self, _report: &GenerationReport) -> io::Result<()> {
        Ok(())
    }
}
