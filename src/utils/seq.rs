//! Slice and vector helpers
//!
//! Index helpers return `Option` instead of panicking, including on empty
//! input.

/// Element at `index`, or `None` when out of bounds (negative included)
pub fn safe_get<T>(items: &[T], index: i64) -> Option<&T> {
    usize::try_from(index).ok().and_then(|index| items.get(index))
}

/// Element at `index` wrapped around the length; `None` only for an empty slice.
///
/// Negative indexes count back from the end.
pub fn wrap_get<T>(items: &[T], index: i64) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    let len = i64::try_from(items.len()).ok()?;
    items.get(index.rem_euclid(len) as usize)
}

/// Pick an element that rotates with the day of month.
pub fn day_element<T>(items: &[T], day_of_month: u32) -> Option<&T> {
    wrap_get(items, i64::from(day_of_month))
}

/// Append `item` unless already present or the vector has reached `limit`.
pub fn append_uniquely<T: PartialEq>(items: &mut Vec<T>, item: T, limit: Option<usize>) {
    if items.contains(&item) {
        return;
    }
    match limit {
        Some(limit) if items.len() >= limit => {}
        _ => items.push(item),
    }
}

/// Append each item of `new_items` accepted by `condition`, skipping duplicates
pub fn append_uniquely_where<T, I, F>(items: &mut Vec<T>, new_items: I, mut condition: F)
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    for item in new_items {
        if condition(&item) {
            append_uniquely(items, item, None);
        }
    }
}

/// Move `item` to the front, inserting it if missing.
///
/// With a `limit`, the vector is truncated from the back afterwards. Without
/// one, an item that is already present stays where it is.
pub fn push_uniquely<T: PartialEq>(items: &mut Vec<T>, item: T, limit: Option<usize>) {
    if !items.contains(&item) {
        items.insert(0, item);
    } else if limit.is_some() {
        items.retain(|existing| existing != &item);
        items.insert(0, item);
    }
    if let Some(limit) = limit {
        items.truncate(limit);
    }
}

pub fn remove_all_of<T: PartialEq>(items: &mut Vec<T>, item: &T) {
    items.retain(|existing| existing != item);
}

/// Items of `lhs` that do not appear in `rhs`, in order
pub fn difference<T: PartialEq + Clone>(lhs: &[T], rhs: &[T]) -> Vec<T> {
    lhs.iter().filter(|item| !rhs.contains(item)).cloned().collect()
}
