//! Helpers for optional values.

/// Overwrite `target` only when `value` is present
pub fn assign_if_present<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

/// `true` only when both sides are present and equal
pub fn equal_if_both_present<T: PartialEq>(lhs: &Option<T>, rhs: &Option<T>) -> bool {
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => lhs == rhs,
        _ => false,
    }
}

/// `true` when either side is absent, otherwise whether the values differ
pub fn differ_if_either_absent<T: PartialEq>(lhs: &Option<T>, rhs: &Option<T>) -> bool {
    match (lhs, rhs) {
        (Some(lhs), Some(rhs)) => lhs != rhs,
        _ => true,
    }
}
