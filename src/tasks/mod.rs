//! Care tasks and the status filter used on the tasks page.
use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use crate::store::decode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    EnCours,
    Terminee,
    // Unknown values are treated as not started
    #[default]
    #[serde(other)]
    AFaire,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::AFaire => "a-faire",
            TaskStatus::EnCours => "en-cours",
            TaskStatus::Terminee => "terminee",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a-faire" => Ok(TaskStatus::AFaire),
            "en-cours" => Ok(TaskStatus::EnCours),
            "terminee" => Ok(TaskStatus::Terminee),
            _ => Err(anyhow!("Unknown task status {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default, deserialize_with = "decode::id")]
    pub id: i64,
    #[serde(default, deserialize_with = "decode::text")]
    pub titre: String,
    #[serde(default, deserialize_with = "decode::or_default")]
    pub statut: TaskStatus,
    #[serde(
        default,
        deserialize_with = "decode::optional_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub echeance: Option<String>,
    #[serde(
        default,
        deserialize_with = "decode::optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub beneficiary_ref: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub a_faire: usize,
    pub en_cours: usize,
    pub terminee: usize,
    pub total: usize,
}

/// Tasks with the given status, in stored order. `None` keeps them all.
pub fn filter_by_status(tasks: &[Task], status: Option<TaskStatus>) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| status.is_none_or(|s| t.statut == s))
        .cloned()
        .collect()
}

pub fn count_by_status(tasks: &[Task]) -> StatusCounts {
    tasks.iter().fold(StatusCounts::default(), |mut counts, task| {
        match task.statut {
            TaskStatus::AFaire => counts.a_faire += 1,
            TaskStatus::EnCours => counts.en_cours += 1,
            TaskStatus::Terminee => counts.terminee += 1,
        }
        counts.total += 1;
        counts
    })
}
