use crate::models::Task;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskGroup {
    pub list_name: String,
    pub tasks: Vec<Task>,
}

/// Groups by `list_name` in first-seen order; tasks keep their input order.
pub fn group_by_list(tasks: &[Task]) -> Vec<TaskGroup> {
    let mut groups: Vec<TaskGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for task in tasks {
        let slot = *index.entry(task.list_name.as_str()).or_insert_with(|| {
            groups.push(TaskGroup {
                list_name: task.list_name.clone(),
                tasks: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].tasks.push(task.clone());
    }

    groups
}
