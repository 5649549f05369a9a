//! Hand-off of exported cards to a platform share target.

use super::naming::share_file_name;
use crate::data::WorkoutSummary;
use crate::error::Error;
use crate::style::StyleName;

use std::fmt;
use std::path::PathBuf;

pub const SHARE_MIME: &str = "image/png";
pub const SHARE_TEXT: &str = "Track. Share. Inspire. 🔥 Check out my workout!";

#[derive(Debug, Clone, PartialEq)]
pub struct SharePayload {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
    pub title: String,
    pub text: String,
}

impl SharePayload {
    pub fn new(summary: &WorkoutSummary, style: StyleName, bytes: Vec<u8>) -> Self {
        Self {
            file_name: share_file_name(&summary.name, style),
            mime: SHARE_MIME,
            bytes,
            title: format!("My {} Workout - Linkly", summary.name),
            text: SHARE_TEXT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// The user dismissed the share sheet.
    Cancelled,
    Failed(String),
}

impl fmt::Display for ShareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled => f.write_str("share cancelled"),
            Self::Failed(e) => f.write_str(e),
        }
    }
}

/// A platform facility able to receive a shared file.
pub trait ShareTarget {
    fn is_available(&self) -> bool {
        true
    }

    /// Whether this payload, a file attachment, can be shared.
    fn can_share(&self, _payload: &SharePayload) -> bool {
        true
    }

    fn share(&mut self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// Target of platforms without any share facility.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShare;

impl ShareTarget for NoShare {
    fn is_available(&self) -> bool {
        false
    }

    fn share(&mut self, _payload: &SharePayload) -> Result<(), ShareError> {
        Err(ShareError::Failed("sharing is not available".into()))
    }
}

/// Why a share ended as a download.
#[derive(Debug)]
pub enum FallbackReason {
    Unavailable,
    Unsupported,
    Failed(Error),
}

#[derive(Debug)]
pub enum ShareOutcome {
    Shared,
    Cancelled,
    Downloaded { path: PathBuf, reason: FallbackReason },
}

impl ShareOutcome {
    pub fn downloaded(&self) -> Option<&PathBuf> {
        match self {
            Self::Downloaded { path, .. } => Some(path),
            _ => None,
        }
    }
}
