//! Frontend Models
//!
//! Data structures matching the backend's wire format.

use serde::{Deserialize, Serialize};

/// Todo record as the backend serves it (camelCase on the wire)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub title: String,
    #[serde(rename = "isCompleted")]
    pub is_completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_wire_format() {
        let todo: Todo = serde_json::from_str(
            r#"{"id": 3, "title": "buy milk", "isCompleted": true}"#,
        )
        .unwrap();
        assert_eq!(todo.id, 3);
        assert_eq!(todo.title, "buy milk");
        assert!(todo.is_completed);

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["isCompleted"], true);
        assert!(json.get("is_completed").is_none());
    }

    #[test]
    fn test_flipped_update_keeps_other_fields() {
        let todo = Todo {
            id: 7,
            title: "water plants".to_string(),
            is_completed: false,
        };

        let mut updated = todo.clone();
        updated.is_completed = !todo.is_completed;

        let json = serde_json::to_value(&updated).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "water plants");
        assert_eq!(json["isCompleted"], true);
    }
}
