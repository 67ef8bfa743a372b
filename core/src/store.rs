//! Immutable in-memory record set.
//!
//! # Design
//! A `RecordStore` is built exactly once, before the server binds, and never
//! changes afterwards. Readers share it through an `Arc` without locking.
//! Records keep their load order in a `Vec`; a side index maps each id to its
//! position so lookups do not scan.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::error::{LoadError, QueryError};
use crate::pipeline;
use crate::query::QueryParams;
use crate::types::Todo;

/// Data file compiled into the crate.
const BUNDLED_TODOS: &str = include_str!("../data/todos.json");

/// The full set of todo records, in load order.
#[derive(Debug, Clone)]
pub struct RecordStore {
    todos: Vec<Todo>,
    index: HashMap<String, usize>,
}

impl RecordStore {
    /// Build a store from records, rejecting duplicate ids.
    pub fn from_todos(todos: Vec<Todo>) -> Result<Self, LoadError> {
        let mut index = HashMap::with_capacity(todos.len());
        for (position, todo) in todos.iter().enumerate() {
            if index.insert(todo.id.clone(), position).is_some() {
                return Err(LoadError::DuplicateId(todo.id.clone()));
            }
        }
        Ok(Self { todos, index })
    }

    /// Parse a JSON array of todo objects.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let todos: Vec<Todo> = serde_json::from_str(json)?;
        Self::from_todos(todos)
    }

    /// Read and parse a data file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&json)?;
        info!(path = %path.display(), todos = store.len(), "loaded todo data");
        Ok(store)
    }

    /// Load the data file packaged with the crate.
    pub fn bundled() -> Result<Self, LoadError> {
        let store = Self::from_json(BUNDLED_TODOS)?;
        info!(todos = store.len(), "loaded bundled todo data");
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Every record, in load order.
    pub fn all(&self) -> &[Todo] {
        &self.todos
    }

    /// Look up a record by id. Absence is a normal outcome.
    pub fn find_by_id(&self, id: &str) -> Option<&Todo> {
        self.index.get(id).map(|&position| &self.todos[position])
    }

    /// Like [`find_by_id`](Self::find_by_id), but absence becomes
    /// `QueryError::NotFound`.
    pub fn get(&self, id: &str) -> Result<&Todo, QueryError> {
        self.find_by_id(id)
            .ok_or_else(|| QueryError::NotFound(id.to_string()))
    }

    /// Validate `params` and run the query pipeline over every record.
    pub fn list(&self, params: &QueryParams) -> Result<Vec<&Todo>, QueryError> {
        let query = params.resolve()?;
        Ok(pipeline::run(&self.todos, &query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_TODOS: &str = r#"[
        {"_id":"a1","owner":"Fry","status":true,"body":"Sit amet","category":"video games"},
        {"_id":"b2","owner":"Dawn","status":false,"body":"Lorem","category":"homework"}
    ]"#;

    #[test]
    fn from_json_keeps_load_order() {
        let store = RecordStore::from_json(TWO_TODOS).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].id, "a1");
        assert_eq!(store.all()[1].id, "b2");
    }

    #[test]
    fn find_by_id_hits_and_misses() {
        let store = RecordStore::from_json(TWO_TODOS).unwrap();
        assert_eq!(store.find_by_id("b2").map(|t| t.owner.as_str()), Some("Dawn"));
        assert!(store.find_by_id("zz").is_none());
    }

    #[test]
    fn get_reports_not_found() {
        let store = RecordStore::from_json(TWO_TODOS).unwrap();
        assert_eq!(store.get("a1").unwrap().owner, "Fry");
        let err = store.get("zz").unwrap_err();
        assert_eq!(err.to_string(), "No todo with id zz was found.");
    }

    #[test]
    fn duplicate_ids_fail_to_load() {
        let json = r#"[
            {"_id":"a1","owner":"Fry","status":true,"body":"x","category":"c"},
            {"_id":"a1","owner":"Dawn","status":false,"body":"y","category":"c"}
        ]"#;
        let err = RecordStore::from_json(json).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateId(id) if id == "a1"));
    }

    #[test]
    fn malformed_json_fails_to_load() {
        assert!(matches!(
            RecordStore::from_json("not json").unwrap_err(),
            LoadError::Parse(_)
        ));
        assert!(matches!(
            RecordStore::from_json(r#"{"_id":"a1"}"#).unwrap_err(),
            LoadError::Parse(_)
        ));
        assert!(matches!(
            RecordStore::from_json(r#"[{"_id":"a1","owner":null,"status":true,"body":"x","category":"c"}]"#)
                .unwrap_err(),
            LoadError::Parse(_)
        ));
    }

    #[test]
    fn missing_file_fails_to_load() {
        let err = RecordStore::load("this is not a legal file name").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn empty_array_is_a_valid_store() {
        let store = RecordStore::from_json("[]").unwrap();
        assert!(store.is_empty());
        assert!(store.list(&QueryParams::default()).unwrap().is_empty());
    }

    #[test]
    fn bundled_data_loads() {
        let store = RecordStore::bundled().unwrap();
        assert!(store.len() >= 20);
    }

    #[test]
    fn list_surfaces_validation_errors() {
        let store = RecordStore::from_json(TWO_TODOS).unwrap();
        let err = store
            .list(&QueryParams::default().with_limit("abc"))
            .unwrap_err();
        assert_eq!(err, QueryError::InvalidLimit("abc".to_string()));
    }
}
