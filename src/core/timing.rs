use crate::domain::model::TimingReport;
use crate::domain::ports::ReportSink;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Name printed in the report
    pub name: String,
}

impl TimingConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Writes each report as one line to the wrapped writer.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn report(&mut self, report: &TimingReport) -> io::Result<()> {
        writeln!(self.writer, "{}", report)?;
        self.writer.flush()
    }
}

pub type StderrSink = WriterSink<io::Stderr>;

impl Default for StderrSink {
    fn default() -> Self {
        WriterSink::new(io::stderr())
    }
}

/// A callable wrapped with wall-clock timing.
///
/// Every call invokes the wrapped callable exactly once and hands its result
/// back untouched. The fallible variants (`try_call*`) only report on `Ok`.
pub struct Timed<F, S = StderrSink> {
    func: F,
    config: TimingConfig,
    sink: S,
}

/// Wraps `func` so that each call reports its duration to stderr under `name`.
pub fn with_timing<F>(name: impl Into<String>, func: F) -> Timed<F> {
    Timed::new(TimingConfig::new(name), func)
}

impl<F> Timed<F> {
    pub fn new(config: TimingConfig, func: F) -> Self {
        Self {
            func,
            config,
            sink: StderrSink::default(),
        }
    }
}

impl<F, S: ReportSink> Timed<F, S> {
    pub fn with_sink<S2: ReportSink>(self, sink: S2) -> Timed<F, S2> {
        Timed {
            func: self.func,
            config: self.config,
            sink,
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &TimingConfig {
        &self.config
    }

    pub fn into_inner(self) -> F {
        self.func
    }

    pub fn call<R>(&mut self) -> R
    where
        F: FnMut() -> R,
    {
        let (result, report) = self.measure(|f| f());
        self.emit(&report);
        result
    }

    pub fn call_with<A, R>(&mut self, args: A) -> R
    where
        F: FnMut(A) -> R,
    {
        let (result, report) = self.measure(|f| f(args));
        self.emit(&report);
        result
    }

    pub fn try_call<T, E>(&mut self) -> Result<T, E>
    where
        F: FnMut() -> Result<T, E>,
    {
        let (result, report) = self.measure(|f| f());
        if result.is_ok() {
            self.emit(&report);
        }
        result
    }

    pub fn try_call_with<A, T, E>(&mut self, args: A) -> Result<T, E>
    where
        F: FnMut(A) -> Result<T, E>,
    {
        let (result, report) = self.measure(|f| f(args));
        if result.is_ok() {
            self.emit(&report);
        }
        result
    }

    fn measure<R>(&mut self, invoke: impl FnOnce(&mut F) -> R) -> (R, TimingReport) {
        let started_at = Utc::now();
        let start = Instant::now();
        let result = invoke(&mut self.func);
        let elapsed = start.elapsed();
        let finished_at = Utc::now();

        let report = TimingReport {
            name: self.config.name.clone(),
            started_at,
            finished_at,
            elapsed,
        };
        (result, report)
    }

    fn emit(&mut self, report: &TimingReport) {
        tracing::debug!(
            name = %report.name,
            elapsed_secs = report.elapsed.as_secs_f64(),
            "timed call finished"
        );
        if let Err(e) = self.sink.report(report) {
            tracing::warn!("Failed to write timing report for '{}': {}", report.name, e);
        }
    }
}
