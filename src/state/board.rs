//! Task board: tasks partitioned into status columns.
//!
//! Grouping is total. Every task lands in exactly one bucket, and statuses the
//! board has no column for (`CANCELLED`, anything unknown) fall into `TODO`.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use crate::net::types::{Task, TaskStatus};

pub const NO_TASKS: &str = "No tasks";

/// One column of the task board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskBucket {
    Todo,
    InProgress,
    Completed,
}

impl TaskBucket {
    /// Column order.
    pub const ALL: [TaskBucket; 3] = [TaskBucket::Todo, TaskBucket::InProgress, TaskBucket::Completed];

    pub fn for_status(status: &TaskStatus) -> Self {
        match status {
            TaskStatus::InProgress => Self::InProgress,
            TaskStatus::Completed => Self::Completed,
            TaskStatus::Todo | TaskStatus::Cancelled | TaskStatus::Other(_) => Self::Todo,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    /// CSS modifier for the column container.
    pub fn class(self) -> &'static str {
        match self {
            Self::Todo => "task-column--todo",
            Self::InProgress => "task-column--in-progress",
            Self::Completed => "task-column--completed",
        }
    }
}

/// Tasks grouped by bucket, each bucket in the source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskBoard {
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub completed: Vec<Task>,
}

impl TaskBoard {
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut board = Self::default();
        for task in tasks {
            board.bucket_mut(TaskBucket::for_status(&task.status)).push(task);
        }
        board
    }

    pub fn bucket(&self, bucket: TaskBucket) -> &[Task] {
        match bucket {
            TaskBucket::Todo => &self.todo,
            TaskBucket::InProgress => &self.in_progress,
            TaskBucket::Completed => &self.completed,
        }
    }

    fn bucket_mut(&mut self, bucket: TaskBucket) -> &mut Vec<Task> {
        match bucket {
            TaskBucket::Todo => &mut self.todo,
            TaskBucket::InProgress => &mut self.in_progress,
            TaskBucket::Completed => &mut self.completed,
        }
    }

    pub fn count(&self, bucket: TaskBucket) -> usize {
        self.bucket(bucket).len()
    }

    pub fn total(&self) -> usize {
        TaskBucket::ALL.iter().map(|b| self.count(*b)).sum()
    }
}
