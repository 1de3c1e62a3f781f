use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Airing or publication status of a catalog item. Covers both the anime
/// and the manga vocabulary of the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseStatus {
    Airing,
    Finished,
    NotYetReleased,
    Publishing,
    OnHiatus,
    Discontinued,
    Unknown,
}

impl ReleaseStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            ReleaseStatus::Airing => "Currently Airing",
            ReleaseStatus::Finished => "Finished",
            ReleaseStatus::NotYetReleased => "Not Yet Released",
            ReleaseStatus::Publishing => "Publishing",
            ReleaseStatus::OnHiatus => "On Hiatus",
            ReleaseStatus::Discontinued => "Discontinued",
            ReleaseStatus::Unknown => "Unknown",
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ReleaseStatus::Unknown)
    }
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl From<&str> for ReleaseStatus {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "currently airing" | "airing" => ReleaseStatus::Airing,
            "finished airing" | "finished" | "complete" => ReleaseStatus::Finished,
            "not yet aired" | "not yet published" | "upcoming" => ReleaseStatus::NotYetReleased,
            "publishing" | "currently publishing" => ReleaseStatus::Publishing,
            "on hiatus" | "hiatus" => ReleaseStatus::OnHiatus,
            "discontinued" | "cancelled" => ReleaseStatus::Discontinued,
            _ => ReleaseStatus::Unknown,
        }
    }
}

impl From<String> for ReleaseStatus {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl FromStr for ReleaseStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}
