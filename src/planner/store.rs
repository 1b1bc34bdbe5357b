//! Pure operations over the task sequence
//!
//! Every function here takes the sequence explicitly and returns before any
//! persistence happens; callers re-save through [`super::Storage`] after each
//! mutation. Sorting and due queries never modify the stored order.

use chrono::NaiveDate;

use super::error::{PlannerError, Result};
use super::task::{Priority, Task};

/// Raw, not-yet-validated input for a new task
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub due_date: String,
    pub priority: String,
}

/// Validate `draft` and append it as an unfinished task.
///
/// The sequence is left untouched when validation fails.
pub fn add(tasks: &mut Vec<Task>, draft: NewTask) -> Result<&Task> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(PlannerError::EmptyTitle);
    }

    let due_date = NaiveDate::parse_from_str(draft.due_date.trim(), "%Y-%m-%d")
        .map_err(|_| PlannerError::InvalidDueDate(draft.due_date.clone()))?;

    let priority = Priority::parse(&draft.priority)
        .ok_or_else(|| PlannerError::InvalidPriority(draft.priority.clone()))?;

    tasks.push(Task::new(title, due_date, priority));
    Ok(tasks.last().expect("just pushed task"))
}

/// Mark the task with the given id as completed
pub fn mark_complete<'a>(tasks: &'a mut [Task], id: &str) -> Result<&'a Task> {
    let task = tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| PlannerError::TaskNotFound(id.to_string()))?;

    task.complete();
    Ok(task)
}

/// Remove the task with the given id. Only completed tasks can be removed.
pub fn remove_completed(tasks: &mut Vec<Task>, id: &str) -> Result<Task> {
    let idx = tasks
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| PlannerError::TaskNotFound(id.to_string()))?;

    if !tasks[idx].completed {
        return Err(PlannerError::NotCompleted(tasks[idx].title.clone()));
    }

    Ok(tasks.remove(idx))
}

/// Return a copy of the sequence ordered by ascending due date.
///
/// The sort is stable: tasks sharing a due date keep their relative order.
pub fn sorted_by_due_date(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by_key(|t| t.due_date);
    sorted
}

/// Unfinished tasks due on or before `today`
pub fn due_or_overdue<'a>(tasks: &'a [Task], today: NaiveDate) -> Vec<&'a Task> {
    tasks.iter().filter(|t| t.is_due_or_overdue(today)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn draft(title: &str, due: &str, priority: &str) -> NewTask {
        NewTask {
            title: title.to_string(),
            due_date: due.to_string(),
            priority: priority.to_string(),
        }
    }

    #[test]
    fn test_add_appends_unfinished_task() {
        let mut tasks = Vec::new();
        let task = add(&mut tasks, draft("Essay", "2025-05-01", "high")).unwrap();
        assert_eq!(task.title, "Essay");
        assert_eq!(task.due_date, date("2025-05-01"));
        assert_eq!(task.priority, Priority::High);
        assert!(!task.completed);
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_add_trims_title() {
        let mut tasks = Vec::new();
        let task = add(&mut tasks, draft("  Essay  ", "2025-05-01", "high")).unwrap();
        assert_eq!(task.title, "Essay");
    }

    #[test]
    fn test_add_rejects_empty_title() {
        let mut tasks = Vec::new();
        let err = add(&mut tasks, draft("   ", "2025-05-01", "high")).unwrap_err();
        assert!(matches!(err, PlannerError::EmptyTitle));
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_add_rejects_bad_date() {
        let mut tasks = Vec::new();
        for due in ["", "tomorrow", "2025-13-01", "01/05/2025"] {
            let err = add(&mut tasks, draft("Essay", due, "high")).unwrap_err();
            assert!(matches!(err, PlannerError::InvalidDueDate(_)), "due={due:?}");
        }
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_add_rejects_unknown_priority() {
        let mut tasks = Vec::new();
        let err = add(&mut tasks, draft("Essay", "2025-05-01", "urgent")).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidPriority(_)));
        let err = add(&mut tasks, draft("Essay", "2025-05-01", "")).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidPriority(_)));
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_mark_complete() {
        let mut tasks = Vec::new();
        let id = add(&mut tasks, draft("Essay", "2025-05-01", "high"))
            .unwrap()
            .id
            .clone();

        let task = mark_complete(&mut tasks, &id).unwrap();
        assert!(task.completed);
        assert!(task.completed_at.is_some());
    }

    #[test]
    fn test_mark_complete_unknown_id() {
        let mut tasks = Vec::new();
        add(&mut tasks, draft("Essay", "2025-05-01", "high")).unwrap();

        let err = mark_complete(&mut tasks, "nope").unwrap_err();
        assert!(matches!(err, PlannerError::TaskNotFound(_)));
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_remove_completed() {
        let mut tasks = Vec::new();
        let id = add(&mut tasks, draft("Essay", "2025-05-01", "high"))
            .unwrap()
            .id
            .clone();
        mark_complete(&mut tasks, &id).unwrap();

        let removed = remove_completed(&mut tasks, &id).unwrap();
        assert_eq!(removed.title, "Essay");
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_remove_rejects_unfinished_task() {
        let mut tasks = Vec::new();
        let id = add(&mut tasks, draft("Essay", "2025-05-01", "high"))
            .unwrap()
            .id
            .clone();

        let err = remove_completed(&mut tasks, &id).unwrap_err();
        assert!(matches!(err, PlannerError::NotCompleted(_)));
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_remove_unknown_id() {
        let mut tasks = Vec::new();
        let err = remove_completed(&mut tasks, "nope").unwrap_err();
        assert!(matches!(err, PlannerError::TaskNotFound(_)));
    }

    #[test]
    fn test_sort_orders_by_due_date() {
        let mut tasks = Vec::new();
        add(&mut tasks, draft("Essay", "2025-05-01", "high")).unwrap();
        add(&mut tasks, draft("Quiz", "2025-04-20", "low")).unwrap();

        let sorted = sorted_by_due_date(&tasks);
        assert_eq!(sorted[0].title, "Quiz");
        assert_eq!(sorted[1].title, "Essay");

        // the stored sequence keeps insertion order
        assert_eq!(tasks[0].title, "Essay");
    }

    #[test]
    fn test_sort_is_stable_and_idempotent() {
        let mut tasks = Vec::new();
        add(&mut tasks, draft("First", "2025-05-01", "high")).unwrap();
        add(&mut tasks, draft("Second", "2025-05-01", "low")).unwrap();
        add(&mut tasks, draft("Earlier", "2025-04-01", "medium")).unwrap();

        let sorted = sorted_by_due_date(&tasks);
        assert_eq!(sorted[0].title, "Earlier");
        assert_eq!(sorted[1].title, "First");
        assert_eq!(sorted[2].title, "Second");

        let resorted = sorted_by_due_date(&sorted);
        assert_eq!(resorted, sorted);
    }

    #[test]
    fn test_due_or_overdue_filters_completed_and_future() {
        let mut tasks = Vec::new();
        add(&mut tasks, draft("Overdue", "2025-01-05", "high")).unwrap();
        add(&mut tasks, draft("Future", "2025-01-15", "medium")).unwrap();
        let done_id = add(&mut tasks, draft("Done", "2025-01-01", "low"))
            .unwrap()
            .id
            .clone();
        mark_complete(&mut tasks, &done_id).unwrap();

        let due = due_or_overdue(&tasks, date("2025-01-10"));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].title, "Overdue");
    }

    #[test]
    fn test_full_scenario() {
        let mut tasks = Vec::new();
        add(&mut tasks, draft("Essay", "2025-05-01", "high")).unwrap();
        add(&mut tasks, draft("Quiz", "2025-04-20", "low")).unwrap();

        let sorted = sorted_by_due_date(&tasks);
        assert_eq!(sorted[0].title, "Quiz");
        assert_eq!(sorted[1].title, "Essay");

        let essay_id = sorted[1].id.clone();
        mark_complete(&mut tasks, &essay_id).unwrap();
        remove_completed(&mut tasks, &essay_id).unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Quiz");
    }
}
