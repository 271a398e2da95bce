//! Purpose: Length validators for decoded arrays and lists.
//! Exports: `not_empty`, `length`, `min_length`, `max_length` on
//! `Decoder<Vec<T>>` and `Decoder<LinkedList<T>>`.
//! Role: Collection constraints applied after element decoding succeeded.

use crate::core::decoder::Decoder;
use crate::validate::message_or;
use std::collections::LinkedList;

impl<T: 'static> Decoder<Vec<T>> {
    /// Requires at least one element.
    pub fn not_empty(self, message: Option<String>) -> Decoder<Vec<T>> {
        let message = message_or(message, || "Array must not be empty".to_string());
        self.check(|v| !v.is_empty(), message)
    }

    /// Requires exactly `n` elements.
    pub fn length(self, n: usize, message: Option<String>) -> Decoder<Vec<T>> {
        let message = message_or(message, || {
            format!("Array must contain exactly {n} elements")
        });
        self.check(move |v| v.len() == n, message)
    }

    /// Requires at least `n` elements.
    pub fn min_length(self, n: usize, message: Option<String>) -> Decoder<Vec<T>> {
        let message = message_or(message, || {
            format!("Array must contain at least {n} elements")
        });
        self.check(move |v| v.len() >= n, message)
    }

    /// Requires at most `n` elements.
    pub fn max_length(self, n: usize, message: Option<String>) -> Decoder<Vec<T>> {
        let message = message_or(message, || {
            format!("Array must contain at most {n} elements")
        });
        self.check(move |v| v.len() <= n, message)
    }
}

impl<T: 'static> Decoder<LinkedList<T>> {
    /// Requires at least one element.
    pub fn not_empty(self, message: Option<String>) -> Decoder<LinkedList<T>> {
        let message = message_or(message, || "List must not be empty".to_string());
        self.check(|v| !v.is_empty(), message)
    }

    /// Requires exactly `n` elements.
    pub fn length(self, n: usize, message: Option<String>) -> Decoder<LinkedList<T>> {
        let message = message_or(message, || format!("List must contain exactly {n} elements"));
        self.check(move |v| v.len() == n, message)
    }

    /// Requires at least `n` elements.
    pub fn min_length(self, n: usize, message: Option<String>) -> Decoder<LinkedList<T>> {
        let message = message_or(message, || {
            format!("List must contain at least {n} elements")
        });
        self.check(move |v| v.len() >= n, message)
    }

    /// Requires at most `n` elements.
    pub fn max_length(self, n: usize, message: Option<String>) -> Decoder<LinkedList<T>> {
        let message = message_or(message, || {
            format!("List must contain at most {n} elements")
        });
        self.check(move |v| v.len() <= n, message)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::decoder::{array, integer, list};
    use serde_json::json;

    #[test]
    fn array_length_bounds() {
        assert_eq!(
            array(integer()).not_empty(None).decode(&json!([])),
            Err("Array must not be empty".to_string())
        );
        assert_eq!(
            array(integer()).length(2, None).decode(&json!([1, 2])),
            Ok(vec![1, 2])
        );
        assert_eq!(
            array(integer()).min_length(3, None).decode(&json!([1])),
            Err("Array must contain at least 3 elements".to_string())
        );
        assert_eq!(
            array(integer()).max_length(1, None).decode(&json!([1, 2])),
            Err("Array must contain at most 1 elements".to_string())
        );
    }

    #[test]
    fn list_length_bounds() {
        assert_eq!(
            list(integer()).not_empty(None).decode(&json!([])),
            Err("List must not be empty".to_string())
        );
        let two = list(integer()).length(2, None).decode(&json!([1, 2]));
        assert_eq!(two.map(|l| l.len()), Ok(2));
    }

    #[test]
    fn element_failure_preempts_length_check() {
        assert_eq!(
            array(integer()).length(2, None).decode(&json!(["x", 2])),
            Err("Integer expected, got \"x\"".to_string())
        );
    }
}
