//! Derived-view projections over a snapshot of the task collection.
//!
//! # Responsibility
//! - Compute the three display-ready views and the summary counters.
//!
//! # Invariants
//! - Projections never mutate their input; results are owned snapshots.
//! - Views are re-derived from raw state on every change; nothing here is
//!   cached or incremental.

use crate::model::task::{Priority, Task};
use std::collections::BTreeMap;

/// Summary counters for the stats bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    /// All tasks, regardless of completion.
    pub total: usize,
    /// Completed tasks only.
    pub completed: usize,
}

/// Returns all tasks in list display order.
///
/// Sort keys, in order: incomplete before completed, then priority
/// ascending (`A` < `B` < `C` < `D`), then due date ascending. The sort is
/// stable, so tasks tied on all three keys keep their input order.
pub fn sorted_view(tasks: &[Task]) -> Vec<Task> {
    let mut view = tasks.to_vec();
    view.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then(a.priority.cmp(&b.priority))
            .then_with(|| a.due_date.cmp(&b.due_date))
    });
    view
}

/// Groups incomplete tasks by priority tier.
///
/// All four tiers are always present so the shell can render an explicit
/// empty-state marker per empty group. Input relative order is preserved
/// within each group; no secondary sort.
pub fn priority_groups(tasks: &[Task]) -> BTreeMap<Priority, Vec<Task>> {
    let mut groups: BTreeMap<Priority, Vec<Task>> = Priority::ALL
        .iter()
        .map(|tier| (*tier, Vec::new()))
        .collect();

    for task in tasks.iter().filter(|task| !task.completed) {
        groups
            .entry(task.priority)
            .or_default()
            .push(task.clone());
    }
    groups
}

/// Groups incomplete tasks by due date, dates ascending.
///
/// Keys are the distinct due dates appearing among incomplete tasks;
/// lexicographic order on the ISO strings is chronological order. Input
/// relative order is preserved within each date group.
pub fn due_date_groups(tasks: &[Task]) -> Vec<(String, Vec<Task>)> {
    let mut dates: Vec<&str> = tasks
        .iter()
        .filter(|task| !task.completed)
        .map(|task| task.due_date.as_str())
        .collect();
    dates.sort_unstable();
    dates.dedup();

    dates
        .into_iter()
        .map(|date| {
            let group = tasks
                .iter()
                .filter(|task| !task.completed && task.due_date == date)
                .cloned()
                .collect();
            (date.to_string(), group)
        })
        .collect()
}

/// Counts total and completed tasks.
pub fn stats(tasks: &[Task]) -> TaskStats {
    TaskStats {
        total: tasks.len(),
        completed: tasks.iter().filter(|task| task.completed).count(),
    }
}
