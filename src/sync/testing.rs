use crate::error::TodoError;
use crate::integrations::TodoApi;
use crate::models::{ChecklistItem, RemoteTask, TaskList, TaskStatus};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory `TodoApi` with scripted failures and a call log.
pub struct StubApi {
    pub credential: bool,
    pub lists: Vec<TaskList>,
    pub tasks: HashMap<String, Vec<RemoteTask>>,
    pub items: HashMap<(String, String), Vec<ChecklistItem>>,
    pub fail_lists: Option<TodoError>,
    pub fail_tasks: HashMap<String, TodoError>,
    pub fail_items: HashMap<(String, String), TodoError>,
    pub fail_patches: Option<TodoError>,
    calls: RefCell<Vec<String>>,
    pub task_patches: RefCell<Vec<(String, String, TaskStatus)>>,
    pub item_patches: RefCell<Vec<(String, String, String, bool)>>,
}

impl Default for StubApi {
    fn default() -> Self {
        Self {
            credential: true,
            lists: Vec::new(),
            tasks: HashMap::new(),
            items: HashMap::new(),
            fail_lists: None,
            fail_tasks: HashMap::new(),
            fail_items: HashMap::new(),
            fail_patches: None,
            calls: RefCell::new(Vec::new()),
            task_patches: RefCell::new(Vec::new()),
            item_patches: RefCell::new(Vec::new()),
        }
    }
}

impl StubApi {
    pub fn without_credential() -> Self {
        Self {
            credential: false,
            ..Self::default()
        }
    }

    pub fn add_list(&mut self, id: &str, name: &str) {
        self.lists.push(TaskList {
            id: id.to_string(),
            display_name: name.to_string(),
        });
    }

    pub fn add_task(&mut self, list_id: &str, id: &str, title: &str) {
        self.tasks
            .entry(list_id.to_string())
            .or_default()
            .push(RemoteTask {
                id: id.to_string(),
                title: title.to_string(),
                status: TaskStatus::NotStarted,
            });
    }

    pub fn add_item(&mut self, list_id: &str, task_id: &str, id: &str, name: &str, checked: bool) {
        self.items
            .entry((list_id.to_string(), task_id.to_string()))
            .or_default()
            .push(ChecklistItem {
                id: id.to_string(),
                display_name: name.to_string(),
                is_checked: checked,
            });
    }

    pub fn fail_tasks_for(&mut self, list_id: &str, err: TodoError) {
        self.fail_tasks.insert(list_id.to_string(), err);
    }

    pub fn fail_items_for(&mut self, list_id: &str, task_id: &str, err: TodoError) {
        self.fail_items
            .insert((list_id.to_string(), task_id.to_string()), err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl TodoApi for StubApi {
    fn has_credential(&self) -> bool {
        self.credential
    }

    fn list_lists(&self) -> Result<Vec<TaskList>, TodoError> {
        self.record("lists".to_string());
        match &self.fail_lists {
            Some(err) => Err(err.clone()),
            None => Ok(self.lists.clone()),
        }
    }

    fn list_tasks(&self, list_id: &str) -> Result<Vec<RemoteTask>, TodoError> {
        self.record(format!("tasks {list_id}"));
        if let Some(err) = self.fail_tasks.get(list_id) {
            return Err(err.clone());
        }
        Ok(self.tasks.get(list_id).cloned().unwrap_or_default())
    }

    fn list_checklist_items(
        &self,
        list_id: &str,
        task_id: &str,
    ) -> Result<Vec<ChecklistItem>, TodoError> {
        self.record(format!("items {list_id}/{task_id}"));
        let key = (list_id.to_string(), task_id.to_string());
        if let Some(err) = self.fail_items.get(&key) {
            return Err(err.clone());
        }
        Ok(self.items.get(&key).cloned().unwrap_or_default())
    }

    fn patch_task_status(
        &self,
        list_id: &str,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<(), TodoError> {
        self.record(format!("patch task {list_id}/{task_id}"));
        if let Some(err) = &self.fail_patches {
            return Err(err.clone());
        }
        self.task_patches
            .borrow_mut()
            .push((list_id.to_string(), task_id.to_string(), status));
        Ok(())
    }

    fn patch_checklist_item(
        &self,
        list_id: &str,
        task_id: &str,
        item_id: &str,
        checked: bool,
    ) -> Result<(), TodoError> {
        self.record(format!("patch item {list_id}/{task_id}/{item_id}"));
        if let Some(err) = &self.fail_patches {
            return Err(err.clone());
        }
        self.item_patches.borrow_mut().push((
            list_id.to_string(),
            task_id.to_string(),
            item_id.to_string(),
            checked,
        ));
        Ok(())
    }
}
