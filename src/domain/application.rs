// src/domain/application.rs

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Stage of an application. The order here is the order used by the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Applied,
        Status::Interviewing,
        Status::Offer,
        Status::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Applied => "Applied",
            Status::Interviewing => "Interviewing",
            Status::Offer => "Offer",
            Status::Rejected => "Rejected",
        }
    }

    /// Exact label match, as stored.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == label)
    }

    pub fn from_label_ignore_case(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(label))
    }

    /// Interviewing and Offer are the statuses still "in play".
    pub fn is_active(self) -> bool {
        matches!(self, Status::Interviewing | Status::Offer)
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Applied
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-Time")]
    FullTime,
    #[serde(rename = "Part-Time")]
    PartTime,
    Internship,
    Contract,
    Temporary,
    Volunteer,
    Other,
}

impl JobType {
    pub const ALL: [JobType; 7] = [
        JobType::FullTime,
        JobType::PartTime,
        JobType::Internship,
        JobType::Contract,
        JobType::Temporary,
        JobType::Volunteer,
        JobType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            JobType::FullTime => "Full-Time",
            JobType::PartTime => "Part-Time",
            JobType::Internship => "Internship",
            JobType::Contract => "Contract",
            JobType::Temporary => "Temporary",
            JobType::Volunteer => "Volunteer",
            JobType::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == label)
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque row identifier handed out by the store.
///
/// The hosted table may use integer or UUID keys, so both JSON numbers and
/// strings deserialize into it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => RecordId(n.to_string()),
            RawId::Text(s) => RecordId(s),
        })
    }
}

/// A row as the store returns it.
///
/// `status` and `application_date` stay raw so that whatever the table holds
/// can still be displayed; interpretation happens at render time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApplicationRecord {
    pub id: RecordId,
    pub company_name: String,
    pub position: String,
    pub application_date: Option<String>,
    pub status: String,
    pub job_type: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub created_at: String,
}

impl ApplicationRecord {
    pub fn status(&self) -> Option<Status> {
        Status::from_label(&self.status)
    }

    pub fn is_active(&self) -> bool {
        self.status().map(Status::is_active).unwrap_or(false)
    }
}

/// Validated, writable columns. `id` and `created_at` are never written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationFields {
    pub company_name: String,
    pub position: String,
    pub application_date: Option<NaiveDate>,
    pub status: Status,
    pub job_type: Option<JobType>,
    pub url: Option<String>,
    pub notes: Option<String>,
}
