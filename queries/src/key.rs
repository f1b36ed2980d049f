//! Cache key space for the todo resource.
//!
//! Two kinds of cached reads exist: the full list and one detail entry per
//! entity id. Keys are hierarchical (`todos` → kind → id) so the whole
//! namespace can be dropped at once.

use mocktodo_core::TodoId;

/// Key identifying one cached read
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The full todo list
    TodoList,
    /// A single todo detail, by id
    TodoDetail(TodoId),
}

impl QueryKey {
    /// Builds the detail key for the given id
    #[must_use]
    pub fn detail(id: &TodoId) -> Self {
        Self::TodoDetail(id.clone())
    }

    /// Returns the hierarchical path of this key
    #[must_use]
    pub fn segments(&self) -> Vec<String> {
        match self {
            Self::TodoList => vec!["todos".to_string(), "list".to_string()],
            Self::TodoDetail(id) => {
                vec!["todos".to_string(), "detail".to_string(), id.to_string()]
            }
        }
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments().join(":"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_key_segments() {
        assert_eq!(QueryKey::TodoList.segments(), vec!["todos", "list"]);
    }

    #[test]
    fn detail_key_segments_include_the_id() {
        let id = TodoId::new();
        let segments = QueryKey::detail(&id).segments();
        assert_eq!(segments[0], "todos");
        assert_eq!(segments[1], "detail");
        assert_eq!(segments[2], id.to_string());
    }

    #[test]
    fn display_joins_segments() {
        assert_eq!(QueryKey::TodoList.to_string(), "todos:list");
    }

    #[test]
    fn detail_keys_for_different_ids_differ() {
        assert_ne!(
            QueryKey::detail(&TodoId::new()),
            QueryKey::detail(&TodoId::new())
        );
    }
}
