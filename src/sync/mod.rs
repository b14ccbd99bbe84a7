pub mod fetch;
pub mod grouping;
pub mod writeback;

#[cfg(test)]
pub(crate) mod testing;

pub use fetch::{FetchReport, SkipScope, Skipped, fetch_hierarchy};
pub use grouping::{TaskGroup, group_by_list};
pub use writeback::{set_checklist_item_checked, set_task_completion};
