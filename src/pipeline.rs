//! Batch rendering of (workout, style) jobs.

use crate::data::WorkoutSummary;
use crate::error::{Error, Result};
use crate::export::{preview_file_name, write_atomic, Exporter};
use crate::style::StyleName;

use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Job {
    pub summary: WorkoutSummary,
    pub style: StyleName,
}

impl Job {
    pub fn new(summary: WorkoutSummary, style: StyleName) -> Self {
        Self { summary, style }
    }

    /// One job per style, all for the same workout.
    pub fn for_styles(summary: &WorkoutSummary, styles: &[StyleName]) -> Vec<Self> {
        styles
            .iter()
            .map(|s| Self::new(summary.clone(), *s))
            .collect()
    }

    pub fn label(&self) -> String {
        format!("{} ({})", self.summary.name, self.style)
    }
}

/// Where the images of a batch go.
#[derive(Debug, Clone)]
pub enum Output {
    /// Full resolution PNGs.
    Download(PathBuf),
    /// Preview PNGs.
    Preview(PathBuf),
}

/// Receives progress notifications of a batch.
pub trait Visitor {
    fn on_start(&mut self, _total: usize) {}
    fn on_job_start(&mut self, _index: usize, _job: &Job) {}
    fn on_job_ok(&mut self, _index: usize, _job: &Job, _path: &Path) {}
    fn on_job_err(&mut self, _index: usize, _job: &Job, _error: &Error) {}
    fn on_finish(&mut self, _ok: usize, _failed: usize) {}
}

impl Visitor for () {}

#[derive(Debug, Default)]
pub struct Report {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(Job, Error)>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

pub struct Pipeline<V: Visitor> {
    exporter: Exporter,
    visitor: V,
}

impl<V: Visitor> Pipeline<V> {
    pub fn new(exporter: Exporter, visitor: V) -> Self {
        Self { exporter, visitor }
    }

    pub fn into_visitor(self) -> V {
        self.visitor
    }

    /// Renders every job in order. A failing job is reported and skipped.
    pub fn run(&mut self, jobs: Vec<Job>, output: &Output) -> Report {
        let mut report = Report::default();
        self.visitor.on_start(jobs.len());
        for (index, job) in jobs.into_iter().enumerate() {
            self.visitor.on_job_start(index, &job);
            match self.process(&job, output) {
                Ok(path) => {
                    self.visitor.on_job_ok(index, &job, &path);
                    report.written.push(path);
                }
                Err(e) => {
                    self.visitor.on_job_err(index, &job, &e);
                    report.failed.push((job, e));
                }
            }
        }
        self.visitor
            .on_finish(report.written.len(), report.failed.len());
        report
    }

    fn process(&self, job: &Job, output: &Output) -> Result<PathBuf> {
        match output {
            Output::Download(dir) => self.exporter.download(&job.summary, job.style, dir),
            Output::Preview(dir) => {
                let preview = self.exporter.preview(&job.summary, job.style)?;
                let name = preview_file_name(&job.summary.name, job.style);
                write_atomic(dir, &name, &preview.png()?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    #[derive(Default)]
    struct Counter {
        total: usize,
        started: usize,
        ok: usize,
        err: usize,
        finished: Option<(usize, usize)>,
    }

    impl Visitor for Counter {
        fn on_start(&mut self, total: usize) {
            self.total = total;
        }
        fn on_job_start(&mut self, _index: usize, _job: &Job) {
            self.started += 1;
        }
        fn on_job_ok(&mut self, _index: usize, _job: &Job, _path: &Path) {
            self.ok += 1;
        }
        fn on_job_err(&mut self, _index: usize, _job: &Job, _error: &Error) {
            self.err += 1;
        }
        fn on_finish(&mut self, ok: usize, failed: usize) {
            self.finished = Some((ok, failed));
        }
    }

    fn push_day() -> WorkoutSummary {
        WorkoutSummary::new("Push Day", NaiveDate::from_ymd_opt(2024, 3, 2).unwrap())
            .with_exercise("Bench Press", 5)
    }

    #[test]
    fn failing_jobs_do_not_abort_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let missing = Output::Download(dir.path().join("missing"));
        let jobs = Job::for_styles(&push_day(), &[StyleName::Bold, StyleName::Fire]);
        let mut pipeline = Pipeline::new(Exporter::default(), Counter::default());
        let report = pipeline.run(jobs, &missing);
        let counter = pipeline.into_visitor();
        assert_eq!(counter.total, 2);
        assert_eq!(counter.started, 2);
        assert_eq!(counter.ok, 0);
        assert_eq!(counter.err, 2);
        assert_eq!(counter.finished, Some((0, 2)));
        assert!(!report.is_success());
    }

    #[test]
    fn job_labels() {
        let job = Job::new(push_day(), StyleName::Story);
        assert_eq!(job.label(), "Push Day (story)");
    }
}
