//! Copy-and-replace helpers for id-keyed lists.

use crate::api::models::HasId;

/// New list without the entries whose id is `id`.
pub fn remove_by_id<T: HasId + Clone>(items: &[T], id: &str) -> Vec<T> {
    items.iter().filter(|item| item.id() != id).cloned().collect()
}

/// New list with every entry sharing `replacement`'s id swapped for it.
pub fn replace_by_id<T: HasId + Clone>(items: &[T], replacement: &T) -> Vec<T> {
    items
        .iter()
        .map(|item| {
            if item.id() == replacement.id() {
                replacement.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}

/// New list with `item` appended.
pub fn append<T: Clone>(items: &[T], item: &T) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(item.clone());
    next
}

/// New list with `item` in front.
pub fn prepend<T: Clone>(items: &[T], item: &T) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.push(item.clone());
    next.extend_from_slice(items);
    next
}
