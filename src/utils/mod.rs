//! Some utility functions

pub mod comparison;

use crate::task::Task;

/// Renders a task on a single line
pub fn task_line(task: &Task) -> String {
    let completion = if task.is_done() { "✓" } else { " " };
    format!("{} {:<14} {:<5} {}\t{}", completion, task.date(), task.time(), task.text(), task.id())
}

/// A debug utility that pretty-prints a task
pub fn print_task(task: &Task) {
    println!("    {}", task_line(task));
}

/// A debug utility that pretty-prints a task list
pub fn print_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("    (no tasks)");
    }
    for task in tasks {
        print_task(task);
    }
}
