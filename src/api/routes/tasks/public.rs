//! Public types for the tasks API
use serde::{Deserialize, Serialize};

use crate::tasks::{StatusCounts, Task};

#[derive(Deserialize)]
pub struct TasksQuery {
    /// One of `a-faire`, `en-cours` or `terminee`
    pub statut: Option<String>,
}

#[derive(Serialize)]
pub struct TasksResponse {
    pub tasks: Vec<Task>,
    pub counts: StatusCounts,
}
