//! Project board endpoints.

use std::sync::Arc;

use serde_json::{json, Value};

use crate::domain::envelope::Envelope;
use crate::domain::models::projects::{NewProject, ProjectList, ProjectUpdate, TaskList};
use crate::infrastructure::http::{Dispatcher, RequestOptions};

/// Client surface for the project board.
#[derive(Clone)]
pub struct ProjectsApi {
    dispatcher: Arc<Dispatcher>,
}

impl ProjectsApi {
    pub(crate) fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    /// List the caller's projects (cached).
    pub async fn projects(&self) -> Envelope<ProjectList> {
        self.dispatcher
            .dispatch("/projects", RequestOptions::get().cached())
            .await
    }

    /// Create a project.
    pub async fn create_project(&self, project: &NewProject) -> Envelope<Value> {
        self.dispatcher
            .dispatch("/projects", RequestOptions::post(json!(project)))
            .await
    }

    /// Apply a partial update to a project. Only the fields set on
    /// `update` are sent.
    pub async fn update_project(&self, project_id: &str, update: &ProjectUpdate) -> Envelope<Value> {
        let path = format!("/projects/{project_id}");

        self.dispatcher
            .dispatch(&path, RequestOptions::patch(json!(update)))
            .await
    }

    /// List a project's tasks in board order (cached).
    pub async fn project_tasks(&self, project_id: &str) -> Envelope<TaskList> {
        let path = format!("/projects/{project_id}/tasks");

        self.dispatcher
            .dispatch(&path, RequestOptions::get().cached())
            .await
    }
}
