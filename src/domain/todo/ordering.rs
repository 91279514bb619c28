//! Display ordering: incomplete entries first, completed entries last.
//!
//! Both functions are stable partitions and pair every entry with its
//! original position. Callers act on entries by id, never by display slot.

use super::list::{Todo, TodoList};

fn partition_by<T, F>(items: &[T], is_done: F) -> Vec<(&T, usize)>
where
    F: Fn(&T) -> bool,
{
    let (done, open): (Vec<_>, Vec<_>) = items
        .iter()
        .enumerate()
        .map(|(index, item)| (item, index))
        .partition(|&(item, _)| is_done(item));

    open.into_iter().chain(done).collect()
}

/// Orders lists for display, complete lists last.
pub fn sort_lists(lists: &[TodoList]) -> Vec<(&TodoList, usize)> {
    partition_by(lists, TodoList::is_complete)
}

/// Orders todos for display, completed todos last.
pub fn sort_todos(todos: &[Todo]) -> Vec<(&Todo, usize)> {
    partition_by(todos, Todo::is_completed)
}
