//! CLI implementation.
mod config;
mod input;

pub use crate::cli::config::Config;
pub use crate::cli::input::read_workout;
use crate::error::Result;
use crate::logs::{LogVisitor, ProgressBar};
use crate::pipeline::{Job, Output, Pipeline};
use crate::style::StyleName;
use crate::text::FontCatalog;

use clap::Parser;
use std::path::PathBuf;

/// Render shareable workout summary cards
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Workout summary files (TOML)
    #[arg(required = true)]
    pub workouts: Vec<PathBuf>,

    /// Card style, may be repeated
    #[arg(short, long, value_enum)]
    pub style: Vec<StyleName>,

    /// Render every style
    #[arg(short, long, conflicts_with = "style")]
    pub all_styles: bool,

    /// Write small previews instead of full resolution cards
    #[arg(short, long)]
    pub preview: bool,

    /// Output folder
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file, instead of ./linkly.toml or ~/.linkly/config.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

macro_rules! error {
    ($res:expr) => {
        $res.unwrap_or_else(|e| panic!("{e}"))
    };
}

impl Cli {
    pub fn run() {
        std::panic::set_hook(Box::new(|panic_info| {
            if let Some(s) = panic_info.payload().downcast_ref::<String>() {
                eprintln!("{s}");
            } else {
                eprintln!("{panic_info}");
            }
        }));

        let cli = Self::parse();
        let config = error!(Config::find(cli.config.as_deref()));
        let fonts = config.font.as_ref().map(|_| FontCatalog::load());
        let exporter = error!(config.exporter(fonts.as_ref()));
        let jobs = error!(cli.jobs(&config));
        let output = cli.output(&config);

        let pbar = error!(ProgressBar::new_stderr());
        let mut pipeline = Pipeline::new(exporter, LogVisitor::new(pbar));
        let report = pipeline.run(jobs, &output);
        if !report.is_success() {
            std::process::exit(1);
        }
    }

    /// Styles from the command line, else from the config, else `bold`.
    pub fn styles(&self, config: &Config) -> Vec<StyleName> {
        if self.all_styles {
            StyleName::ALL.to_vec()
        } else if !self.style.is_empty() {
            self.style.clone()
        } else if !config.output.styles.is_empty() {
            config.output.styles.clone()
        } else {
            vec![StyleName::Bold]
        }
    }

    fn jobs(&self, config: &Config) -> Result<Vec<Job>> {
        let styles = self.styles(config);
        let mut jobs = Vec::with_capacity(self.workouts.len() * styles.len());
        for path in self.workouts.iter() {
            let summary = read_workout(path)?;
            jobs.extend(Job::for_styles(&summary, &styles));
        }
        Ok(jobs)
    }

    fn output(&self, config: &Config) -> Output {
        let dir = self
            .output
            .clone()
            .or_else(|| config.output.dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));
        if self.preview {
            Output::Preview(dir)
        } else {
            Output::Download(dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("linkly-card").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn style_precedence() {
        let mut config = Config::default();
        config.output.styles = vec![StyleName::Fire];
        assert_eq!(cli(&["a.toml"]).styles(&Config::default()), [StyleName::Bold]);
        assert_eq!(cli(&["a.toml"]).styles(&config), [StyleName::Fire]);
        assert_eq!(
            cli(&["a.toml", "-s", "story", "--style", "minimal"]).styles(&config),
            [StyleName::Story, StyleName::Minimal]
        );
        assert_eq!(cli(&["a.toml", "--all-styles"]).styles(&config).len(), 7);
    }

    #[test]
    fn output_kind_follows_preview_flag() {
        let config = Config::default();
        assert!(matches!(
            cli(&["a.toml", "-o", "out"]).output(&config),
            Output::Download(dir) if dir == PathBuf::from("out")
        ));
        assert!(matches!(
            cli(&["a.toml", "--preview"]).output(&config),
            Output::Preview(dir) if dir == PathBuf::from(".")
        ));
    }

    #[test]
    fn rejects_unknown_styles() {
        let args = ["linkly-card", "a.toml", "--style", "neon"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
