//! Project board wire models.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Work in progress.
    Active,
    /// Delivered.
    Completed,
    /// On hold.
    Paused,
}

/// A member assigned to a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    /// Member identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL.
    pub avatar: String,
    /// Role within the project.
    pub role: String,
}

/// Task counters rolled up per project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCounts {
    /// All tasks.
    pub total: u64,
    /// Done tasks.
    pub completed: u64,
    /// Tasks currently being worked.
    pub in_progress: u64,
}

/// A project on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Project identifier.
    pub id: String,
    /// Project name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Lifecycle state.
    pub status: ProjectStatus,
    /// Completion percentage, 0-100.
    pub progress: f64,
    /// ISO 8601 due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Assigned members.
    pub team_members: Vec<TeamMember>,
    /// Rolled-up task counters.
    pub tasks: TaskCounts,
}

/// Payload of the project-listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectList {
    /// Projects visible to the caller.
    pub projects: Vec<Project>,
}

/// Request payload for creating a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    /// Project name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// ISO 8601 due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Member identifiers to assign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_members: Option<Vec<String>>,
}

/// Partial update applied with PATCH; absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New lifecycle state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    /// New completion percentage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

/// Board column a task sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started.
    Todo,
    /// Being worked.
    InProgress,
    /// Awaiting review.
    Review,
    /// Finished.
    Done,
}

/// Urgency of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// Normal.
    Medium,
    /// Soon.
    High,
    /// Now.
    Urgent,
}

/// The member a task is assigned to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignee {
    /// Member identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL.
    pub avatar: String,
}

/// A task on a project board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTask {
    /// Task identifier.
    pub id: String,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Board column.
    pub status: TaskStatus,
    /// Urgency.
    pub priority: TaskPriority,
    /// Assigned member, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Assignee>,
    /// ISO 8601 due date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// ISO 8601 creation time.
    pub created_at: String,
}

/// Payload of the project-tasks endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskList {
    /// Tasks in board order.
    pub tasks: Vec<ProjectTask>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_deserialization() {
        let json = r#"{
            "id": "proj-7",
            "name": "Site refresh",
            "description": "New landing pages",
            "status": "active",
            "progress": 62.5,
            "dueDate": "2025-07-01",
            "teamMembers": [
                { "id": "u1", "name": "Kim", "avatar": "https://cdn/a.png", "role": "design" }
            ],
            "tasks": { "total": 20, "completed": 12, "inProgress": 5 }
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.status, ProjectStatus::Active);
        assert_eq!(project.tasks.in_progress, 5);
    }

    #[test]
    fn test_task_status_wire_names() {
        assert_eq!(
            serde_json::to_value(TaskStatus::InProgress).unwrap(),
            "in_progress"
        );
        let status: TaskStatus = serde_json::from_str("\"review\"").unwrap();
        assert_eq!(status, TaskStatus::Review);
    }

    #[test]
    fn test_update_serializes_only_set_fields() {
        let update = ProjectUpdate {
            progress: Some(80.0),
            ..Default::default()
        };
        let wire = serde_json::to_value(&update).unwrap();
        assert_eq!(wire.as_object().unwrap().len(), 1);
        assert_eq!(wire["progress"], 80.0);
    }
}
