use crate::models::{Task, TaskStatus};
use crate::sync::{SkipScope, Skipped, TaskGroup};
use chrono::{DateTime, Local};

pub const EMPTY_MESSAGE: &str = "No tasks found. Check your access token configuration.";

fn status_marker(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Completed => "[x]",
        TaskStatus::InProgress => "[~]",
        TaskStatus::NotStarted => "[ ]",
        TaskStatus::WaitingOnOthers => "[w]",
        TaskStatus::Deferred => "[-]",
        TaskStatus::Unknown => "[?]",
    }
}

fn render_task(out: &mut String, task: &Task) {
    out.push_str(&format!(
        "{} {}  ({})\n",
        status_marker(task.status),
        task.title,
        task.id
    ));
    for item in task.checklist_items.iter().flatten() {
        let mark = if item.is_checked { "x" } else { " " };
        out.push_str(&format!(
            "    - [{mark}] {}  ({})\n",
            item.display_name, item.id
        ));
    }
}

pub fn render_groups(groups: &[TaskGroup], fetched_at: DateTime<Local>) -> String {
    if groups.is_empty() {
        return format!("{EMPTY_MESSAGE}\n");
    }

    let mut out = String::new();
    for (idx, group) in groups.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        let mut list_ids: Vec<&str> = Vec::new();
        for task in &group.tasks {
            if !list_ids.contains(&task.list_id.as_str()) {
                list_ids.push(task.list_id.as_str());
            }
        }
        out.push_str(&format!(
            "# {}  ({})\n",
            group.list_name,
            list_ids.join(", ")
        ));
        for task in &group.tasks {
            render_task(&mut out, task);
        }
    }
    out.push_str(&format!(
        "\nFetched {}\n",
        fetched_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out
}

pub fn describe_skip(skip: &Skipped) -> String {
    match &skip.scope {
        SkipScope::List { list_id, list_name } => {
            format!("skipped list \"{list_name}\" ({list_id}): {}", skip.reason)
        }
        SkipScope::Checklist { list_id, task_id } => format!(
            "checklist unavailable for task {task_id} in list {list_id}: {}",
            skip.reason
        ),
    }
}
