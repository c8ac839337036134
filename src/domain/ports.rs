use crate::domain::model::TimingReport;
use std::io;

/// Destination for timing reports.
pub trait ReportSink {
    fn report(&mut self, report: &TimingReport) -> io::Result<()>;
}

impl ReportSink for Vec<TimingReport> {
    fn report(&mut self, report: &TimingReport) -> io::Result<()> {
        self.push(report.clone());
        Ok(())
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn report(&mut self, report: &TimingReport) -> io::Result<()> {
        (**self).report(report)
    }
}
