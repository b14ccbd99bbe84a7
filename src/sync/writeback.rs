//! Single-field writes back to the remote service.
//!
//! These never touch previously fetched `Task` values. A caller that reflects a toggle
//! locally before the write finishes can end up out of sync with the remote if the write
//! fails; nothing here rolls that back.

use crate::error::TodoError;
use crate::integrations::TodoApi;
use crate::models::TaskStatus;
use tracing::{info, instrument, warn};

#[instrument(skip(api))]
pub fn set_task_completion(
    api: &dyn TodoApi,
    task_id: &str,
    list_id: &str,
    completed: bool,
) -> Result<(), TodoError> {
    if !api.has_credential() {
        return Err(TodoError::Unauthenticated);
    }
    let status = TaskStatus::from_completed(completed);
    api.patch_task_status(list_id, task_id, status)
        .inspect_err(|err| warn!(error = %err, "task status update failed"))?;
    info!(status = status.as_str(), "task status updated");
    Ok(())
}

#[instrument(skip(api))]
pub fn set_checklist_item_checked(
    api: &dyn TodoApi,
    task_id: &str,
    list_id: &str,
    item_id: &str,
    checked: bool,
) -> Result<(), TodoError> {
    if !api.has_credential() {
        return Err(TodoError::Unauthenticated);
    }
    api.patch_checklist_item(list_id, task_id, item_id, checked)
        .inspect_err(|err| warn!(error = %err, "checklist item update failed"))?;
    info!("checklist item updated");
    Ok(())
}
