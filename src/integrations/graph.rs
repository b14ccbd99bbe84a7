use crate::config::ClientSettings;
use crate::error::TodoError;
use crate::models::{ChecklistItem, RemoteTask, TaskList, TaskStatus};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::debug;

/// The remote operations the fetcher and write-back need.
pub trait TodoApi {
    fn has_credential(&self) -> bool;

    fn list_lists(&self) -> Result<Vec<TaskList>, TodoError>;

    fn list_tasks(&self, list_id: &str) -> Result<Vec<RemoteTask>, TodoError>;

    fn list_checklist_items(
        &self,
        list_id: &str,
        task_id: &str,
    ) -> Result<Vec<ChecklistItem>, TodoError>;

    fn patch_task_status(
        &self,
        list_id: &str,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<(), TodoError>;

    fn patch_checklist_item(
        &self,
        list_id: &str,
        task_id: &str,
        item_id: &str,
        checked: bool,
    ) -> Result<(), TodoError>;
}

#[derive(Deserialize)]
struct Collection<T> {
    value: Option<Vec<T>>,
}

/// Microsoft Graph `me/todo` client.
pub struct GraphClient {
    client: Client,
    api_base: String,
    token: Option<String>,
}

impl GraphClient {
    pub fn new(settings: ClientSettings) -> Result<Self, TodoError> {
        let client = Client::builder()
            .build()
            .map_err(|err| TodoError::Unexpected(format!("Failed to create HTTP client: {err}")))?;
        Ok(Self {
            client,
            api_base: settings.api_base,
            token: settings.token,
        })
    }

    fn token(&self) -> Result<&str, TodoError> {
        self.token.as_deref().ok_or(TodoError::Unauthenticated)
    }

    fn lists_url(&self, segments: &[&str]) -> Result<Url, TodoError> {
        let mut url = Url::parse(&self.api_base)
            .map_err(|err| TodoError::Unexpected(format!("Invalid API base URL: {err}")))?;
        url.path_segments_mut()
            .map_err(|_| TodoError::Unexpected("Invalid API base URL".to_string()))?
            .pop_if_empty()
            .extend(["me", "todo", "lists"])
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url, token: &str) -> RequestBuilder {
        debug!(method = %method, path = url.path(), "graph request");
        self.client
            .request(method, url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, "application/json")
    }

    fn send(request: RequestBuilder) -> Result<Response, TodoError> {
        let resp = request.send()?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().unwrap_or_default();
        debug!(status = %status, "graph request rejected");
        Err(TodoError::rejected_from_body(&body))
    }

    fn get_collection<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<Vec<T>, TodoError> {
        let token = self.token()?;
        let url = self.lists_url(segments)?;
        let resp = Self::send(self.request(Method::GET, url, token))?;
        let body: Collection<T> = resp.json()?;
        Ok(body.value.unwrap_or_default())
    }

    fn patch(&self, segments: &[&str], body: serde_json::Value) -> Result<(), TodoError> {
        let token = self.token()?;
        let url = self.lists_url(segments)?;
        Self::send(self.request(Method::PATCH, url, token).json(&body))?;
        Ok(())
    }
}

impl TodoApi for GraphClient {
    fn has_credential(&self) -> bool {
        self.token.is_some()
    }

    fn list_lists(&self) -> Result<Vec<TaskList>, TodoError> {
        self.get_collection(&[])
    }

    fn list_tasks(&self, list_id: &str) -> Result<Vec<RemoteTask>, TodoError> {
        self.get_collection(&[list_id, "tasks"])
    }

    fn list_checklist_items(
        &self,
        list_id: &str,
        task_id: &str,
    ) -> Result<Vec<ChecklistItem>, TodoError> {
        self.get_collection(&[list_id, "tasks", task_id, "checklistItems"])
    }

    fn patch_task_status(
        &self,
        list_id: &str,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<(), TodoError> {
        self.patch(
            &[list_id, "tasks", task_id],
            json!({ "status": status.as_str() }),
        )
    }

    fn patch_checklist_item(
        &self,
        list_id: &str,
        task_id: &str,
        item_id: &str,
        checked: bool,
    ) -> Result<(), TodoError> {
        self.patch(
            &[list_id, "tasks", task_id, "checklistItems", item_id],
            json!({ "isChecked": checked }),
        )
    }
}
