use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    pub id: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    WaitingOnOthers,
    Deferred,
    /// Any status value this crate does not know yet.
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// A toggle only sets or clears completion, so this yields `Completed` or `NotStarted`.
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            TaskStatus::Completed
        } else {
            TaskStatus::NotStarted
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "notStarted",
            TaskStatus::InProgress => "inProgress",
            TaskStatus::Completed => "completed",
            TaskStatus::WaitingOnOthers => "waitingOnOthers",
            TaskStatus::Deferred => "deferred",
            TaskStatus::Unknown => "unknown",
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    #[serde(rename = "displayName", default)]
    pub display_name: String,
    #[serde(rename = "isChecked", default)]
    pub is_checked: bool,
}

/// A task denormalized with its owning list so grouping needs no join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub list_id: String,
    pub list_name: String,
    /// `None` until the checklist fetch has been attempted; empty after a failed fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checklist_items: Option<Vec<ChecklistItem>>,
}

/// Task shape as returned by `GET .../tasks`.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteTask {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
}

impl Task {
    pub fn from_remote(remote: RemoteTask, list: &TaskList) -> Self {
        Self {
            id: remote.id,
            title: remote.title,
            status: remote.status,
            list_id: list.id.clone(),
            list_name: list.display_name.clone(),
            checklist_items: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_completed_never_yields_in_progress() {
        assert_eq!(TaskStatus::from_completed(true), TaskStatus::Completed);
        assert_eq!(TaskStatus::from_completed(false), TaskStatus::NotStarted);
    }

    #[test]
    fn remote_task_defaults_missing_status() {
        let task: RemoteTask = serde_json::from_str(r#"{"id":"t1","title":"Milk"}"#).expect("task");
        assert_eq!(task.status, TaskStatus::NotStarted);

        let task: RemoteTask =
            serde_json::from_str(r#"{"id":"t2","status":"inProgress"}"#).expect("task");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.title, "");
    }

    #[test]
    fn other_statuses_decode_without_failing() {
        let tasks: Vec<RemoteTask> = serde_json::from_str(
            r#"[{"id":"t1","status":"deferred"},{"id":"t2","status":"waitingOnOthers"},{"id":"t3","status":"someFutureValue"}]"#,
        )
        .expect("tasks");
        let statuses: Vec<TaskStatus> = tasks.iter().map(|task| task.status).collect();
        assert_eq!(
            statuses,
            vec![
                TaskStatus::Deferred,
                TaskStatus::WaitingOnOthers,
                TaskStatus::Unknown
            ]
        );
    }

    #[test]
    fn task_serializes_camel_case() {
        let list = TaskList {
            id: "l1".to_string(),
            display_name: "Groceries".to_string(),
        };
        let remote = RemoteTask {
            id: "t1".to_string(),
            title: "Milk".to_string(),
            status: TaskStatus::Completed,
        };
        let mut task = Task::from_remote(remote, &list);
        task.checklist_items = Some(Vec::new());
        let value = serde_json::to_value(&task).expect("json");
        assert_eq!(value["listName"], "Groceries");
        assert_eq!(value["status"], "completed");
        assert_eq!(value["checklistItems"], serde_json::json!([]));
    }
}
