//! Terminal progress output for batch renders.

use crate::error::Error;
use crate::pipeline::{Job, Visitor};

use std::io::{stderr, Error as IoError, Stderr, Write};
use std::path::Path;

#[derive(Debug, Clone)]
pub enum LogEvent {
    Total(usize),
    Count,
    Info(String),
    Warn(String),
    Error(String),
    Status(String),
    Done(String),
}

#[derive(Debug, Clone)]
enum Status {
    Running(String),
    Failed(String),
    Done(String),
}

impl Default for Status {
    fn default() -> Self {
        Self::Running(String::new())
    }
}

/// A single status line at the bottom of the output, with log messages
/// scrolling above it.
#[derive(Debug, Clone)]
pub struct ProgressBar<T: Write> {
    tty: T,
    status: Status,
    count: usize,
    failed: usize,
    total: usize,
}

impl ProgressBar<Stderr> {
    pub fn new_stderr() -> Result<Self, IoError> {
        Self::new(stderr())
    }
}

impl<T: Write> ProgressBar<T> {
    const BAR_WIDTH: usize = 16;

    pub fn new(tty: T) -> Result<Self, IoError> {
        let mut pbar = Self {
            tty,
            status: Status::default(),
            count: 0,
            failed: 0,
            total: 0,
        };
        pbar.show()?;
        Ok(pbar)
    }

    pub fn into_inner(self) -> T {
        self.tty
    }

    pub fn log(&mut self, event: LogEvent) -> Result<(), IoError> {
        match event {
            LogEvent::Info(msg) => self.log_message("INFO", msg, termion::color::LightBlack)?,
            LogEvent::Warn(msg) => self.log_message("WARN", msg, termion::color::LightYellow)?,
            LogEvent::Error(msg) => {
                self.failed += 1;
                self.log_message("FAIL", msg, termion::color::LightRed)?
            }
            LogEvent::Status(msg) => self.status = Status::Running(msg),
            LogEvent::Done(msg) if self.failed > 0 => self.status = Status::Failed(msg),
            LogEvent::Done(msg) => self.status = Status::Done(msg),
            LogEvent::Count => self.count += 1,
            LogEvent::Total(n) => self.total = n,
        };
        self.show()?;
        if matches!(self.status, Status::Done(_) | Status::Failed(_)) {
            writeln!(self.tty)?;
        }
        self.tty.flush()
    }

    fn log_message(
        &mut self,
        label: &'static str,
        msg: String,
        color: impl termion::color::Color,
    ) -> Result<(), IoError> {
        let msg = msg.replace('\t', "    ");
        let color = termion::color::Fg(color);
        let reset = termion::style::Reset;
        let clear = termion::clear::CurrentLine;
        writeln!(self.tty, "\r{clear}{color}[{label}] {reset}{msg}")
    }

    fn show(&mut self) -> Result<(), IoError> {
        let (w, _h) = termion::terminal_size().unwrap_or((80, 24));
        let (n, total) = (self.count, self.total);
        let (label, color, msg) = match &self.status {
            Status::Running(msg) => (
                Self::arrows(n, total),
                termion::color::LightBlue.fg_str(),
                msg,
            ),
            Status::Failed(msg) => (
                "!".repeat(Self::BAR_WIDTH),
                termion::color::LightRed.fg_str(),
                msg,
            ),
            Status::Done(msg) => (
                "=".repeat(Self::BAR_WIDTH),
                termion::color::LightGreen.fg_str(),
                msg,
            ),
        };
        let msg = Self::ellipsize(msg, w, 27);
        let reset = termion::style::Reset;
        let clear = termion::clear::CurrentLine;
        if total > 0 {
            write!(
                self.tty,
                "\r{clear}{color}[{label} {n:3}/{total:3}] {reset}{msg}"
            )
        } else {
            write!(self.tty, "\r{clear}{color}[{label} {n:3}] {reset}{msg}")
        }
    }

    fn arrows(n: usize, total: usize) -> String {
        let done = if total > 0 {
            let frac = n.min(total) as f64 / total as f64;
            (frac * Self::BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        format!(
            "{}{}",
            "▶".repeat(done),
            "▷".repeat(Self::BAR_WIDTH - done)
        )
    }

    fn ellipsize(s: &str, w: u16, used: u16) -> String {
        let w = w.saturating_sub(used) as usize;
        if s.chars().count() > w {
            let head: String = s.chars().take(w.saturating_sub(3)).collect();
            format!("{head}...")
        } else {
            s.to_string()
        }
    }
}

/// Reports pipeline progress on a [`ProgressBar`]. Write errors on the
/// terminal are ignored.
#[derive(Debug)]
pub struct LogVisitor<T: Write> {
    pbar: ProgressBar<T>,
}

impl<T: Write> LogVisitor<T> {
    pub fn new(pbar: ProgressBar<T>) -> Self {
        Self { pbar }
    }

    pub fn into_inner(self) -> ProgressBar<T> {
        self.pbar
    }

    fn log(&mut self, event: LogEvent) {
        let _ = self.pbar.log(event);
    }
}

impl<T: Write> Visitor for LogVisitor<T> {
    fn on_start(&mut self, total: usize) {
        self.log(LogEvent::Total(total));
    }

    fn on_job_start(&mut self, _index: usize, job: &Job) {
        self.log(LogEvent::Status(format!("rendering {}...", job.label())));
    }

    fn on_job_ok(&mut self, _index: usize, _job: &Job, path: &Path) {
        self.log(LogEvent::Count);
        self.log(LogEvent::Info(format!("wrote {}", path.display())));
    }

    fn on_job_err(&mut self, _index: usize, job: &Job, error: &Error) {
        self.log(LogEvent::Error(format!("{}: {error}", job.label())));
    }

    fn on_finish(&mut self, ok: usize, failed: usize) {
        let msg = match failed {
            0 => format!("done! {ok} written"),
            _ => format!("done! {ok} written, {failed} failed"),
        };
        self.log(LogEvent::Done(msg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(pbar: ProgressBar<Vec<u8>>) -> String {
        String::from_utf8(pbar.into_inner()).unwrap()
    }

    #[test]
    fn counts_against_total() {
        let mut pbar = ProgressBar::new(Vec::new()).unwrap();
        pbar.log(LogEvent::Total(4)).unwrap();
        pbar.log(LogEvent::Count).unwrap();
        pbar.log(LogEvent::Count).unwrap();
        let out = output(pbar);
        assert!(out.contains("▶▶▶▶▶▶▶▶▷▷▷▷▷▷▷▷   2/  4"));
    }

    #[test]
    fn messages_are_labelled() {
        let mut pbar = ProgressBar::new(Vec::new()).unwrap();
        pbar.log(LogEvent::Warn("low disk".into())).unwrap();
        pbar.log(LogEvent::Error("bad card".into())).unwrap();
        pbar.log(LogEvent::Done("done!".into())).unwrap();
        let out = output(pbar);
        assert!(out.contains("[WARN] "));
        assert!(out.contains("low disk"));
        assert!(out.contains("[FAIL] "));
        assert!(out.contains(&"!".repeat(16)));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn long_messages_are_ellipsized() {
        let s = "x".repeat(100);
        let short = ProgressBar::<Vec<u8>>::ellipsize(&s, 40, 27);
        assert_eq!(short, format!("{}...", "x".repeat(10)));
        assert_eq!(ProgressBar::<Vec<u8>>::ellipsize("ok", 40, 27), "ok");
    }
}
