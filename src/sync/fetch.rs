use crate::error::TodoError;
use crate::integrations::TodoApi;
use crate::models::{Task, TaskList};
use crate::sync::grouping::{TaskGroup, group_by_list};
use chrono::{DateTime, Local};
use std::collections::HashSet;
use tracing::{debug, info, instrument, warn};

/// Where a tolerated failure happened and what was dropped because of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipScope {
    /// Task fetch failed; none of the list's tasks are in the report.
    List { list_id: String, list_name: String },
    /// Checklist fetch failed; the task is kept with an empty checklist.
    Checklist { list_id: String, task_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub scope: SkipScope,
    pub reason: TodoError,
}

#[derive(Debug, Clone)]
pub struct FetchReport {
    pub tasks: Vec<Task>,
    pub skipped: Vec<Skipped>,
    pub fetched_at: DateTime<Local>,
}

impl FetchReport {
    pub fn grouped(&self) -> Vec<TaskGroup> {
        group_by_list(&self.tasks)
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Walks lists -> tasks -> checklist items one call at a time.
///
/// Only a missing credential or a failed list enumeration is returned as an error.
/// A failed task fetch drops that list; a failed checklist fetch keeps the task with
/// an empty checklist. Both are recorded in [`FetchReport::skipped`].
#[instrument(skip_all)]
pub fn fetch_hierarchy(api: &dyn TodoApi) -> Result<FetchReport, TodoError> {
    if !api.has_credential() {
        return Err(TodoError::Unauthenticated);
    }

    let lists = api.list_lists()?;
    let mut tasks = Vec::new();
    let mut skipped = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for list in &lists {
        match fetch_list_tasks(api, list, &mut skipped) {
            Ok(list_tasks) => {
                for task in list_tasks {
                    if seen.insert((task.list_id.clone(), task.id.clone())) {
                        tasks.push(task);
                    } else {
                        debug!(list_id = %task.list_id, task_id = %task.id, "dropping duplicate task");
                    }
                }
            }
            Err(err) => {
                warn!(list_id = %list.id, list_name = %list.display_name, error = %err, "failed to fetch tasks, skipping list");
                skipped.push(Skipped {
                    scope: SkipScope::List {
                        list_id: list.id.clone(),
                        list_name: list.display_name.clone(),
                    },
                    reason: err,
                });
            }
        }
    }

    info!(
        lists = lists.len(),
        tasks = tasks.len(),
        skipped = skipped.len(),
        "fetched task hierarchy"
    );

    Ok(FetchReport {
        tasks,
        skipped,
        fetched_at: Local::now(),
    })
}

fn fetch_list_tasks(
    api: &dyn TodoApi,
    list: &TaskList,
    skipped: &mut Vec<Skipped>,
) -> Result<Vec<Task>, TodoError> {
    let remote_tasks = api.list_tasks(&list.id)?;
    let mut tasks = Vec::with_capacity(remote_tasks.len());

    for remote in remote_tasks {
        let mut task = Task::from_remote(remote, list);
        let items = match api.list_checklist_items(&list.id, &task.id) {
            Ok(items) => items,
            Err(err) => {
                warn!(list_id = %list.id, task_id = %task.id, error = %err, "failed to fetch checklist items");
                skipped.push(Skipped {
                    scope: SkipScope::Checklist {
                        list_id: list.id.clone(),
                        task_id: task.id.clone(),
                    },
                    reason: err,
                });
                Vec::new()
            }
        };
        task.checklist_items = Some(items);
        tasks.push(task);
    }

    Ok(tasks)
}
