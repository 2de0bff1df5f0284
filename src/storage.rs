//! Local Record Repository
//!
//! Locally created records (negative ids) live in browser localStorage, one
//! key per entity kind, each holding a JSON array. Screens go through
//! [`LocalRepo`] instead of touching storage keys directly; the backend is a
//! trait so tests can run against an in-memory map.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{Todo, User};

/// Key/value string storage. Implemented by browser localStorage in the app
/// and by [`MemoryStorage`] in tests.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// localStorage-backed storage. Reads and writes silently no-op when the
/// storage area is unavailable (e.g. blocked by browser settings).
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl StorageBackend for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            if storage.set_item(key, value).is_err() {
                web_sys::console::error_1(
                    &format!("localStorage write failed for key {}", key).into(),
                );
            }
        }
    }
}

impl<B: StorageBackend + ?Sized> StorageBackend for &B {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) {
        (**self).write(key, value)
    }
}

/// In-memory backend for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

/// A record kind that can be persisted locally.
pub trait LocalRecord: Serialize + DeserializeOwned + Clone {
    const STORAGE_KEY: &'static str;

    fn id(&self) -> i64;

    /// Owning id used to scope reads, `None` for unowned kinds. Storage is
    /// not scoped by owner; filtering happens at read time.
    fn owner_id(&self) -> Option<i64>;
}

impl LocalRecord for User {
    const STORAGE_KEY: &'static str = "local_users";

    fn id(&self) -> i64 {
        self.id
    }

    fn owner_id(&self) -> Option<i64> {
        None
    }
}

impl LocalRecord for Todo {
    const STORAGE_KEY: &'static str = "local_todos";

    fn id(&self) -> i64 {
        self.id
    }

    fn owner_id(&self) -> Option<i64> {
        Some(self.user_id)
    }
}

/// Repository for one locally persisted record kind.
#[derive(Clone)]
pub struct LocalRepo<T, B = BrowserStorage> {
    backend: B,
    _record: PhantomData<T>,
}

impl<T: LocalRecord> Default for LocalRepo<T, BrowserStorage> {
    fn default() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<T: LocalRecord, B: StorageBackend> LocalRepo<T, B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            _record: PhantomData,
        }
    }

    /// Stored records, scoped to `owner` when given. Missing or corrupt
    /// payloads read as empty.
    pub fn list(&self, owner: Option<i64>) -> Vec<T> {
        let raw = self.backend.read(T::STORAGE_KEY).unwrap_or_default();
        let records: Vec<T> = serde_json::from_str(&raw).unwrap_or_default();
        match owner {
            Some(owner) => records
                .into_iter()
                .filter(|r| r.owner_id() == Some(owner))
                .collect(),
            None => records,
        }
    }

    /// Append a record and rewrite storage. Only negative-id records are
    /// kept on the write path; remote records never end up persisted.
    pub fn add(&self, record: &T) {
        let mut records = self.list(None);
        records.push(record.clone());
        self.persist(&records);
    }

    /// Remove a record by id and rewrite storage with the remaining subset.
    pub fn remove(&self, id: i64) {
        let mut records = self.list(None);
        records.retain(|r| r.id() != id);
        self.persist(&records);
    }

    fn persist(&self, records: &[T]) {
        let local: Vec<&T> = records.iter().filter(|r| r.id() < 0).collect();
        match serde_json::to_string(&local) {
            Ok(payload) => self.backend.write(T::STORAGE_KEY, &payload),
            Err(err) => web_sys::console::error_1(
                &format!("failed to serialize {}: {}", T::STORAGE_KEY, err).into(),
            ),
        }
    }
}

/// Allocate an id for a locally created record: the negated creation
/// timestamp, decremented until it collides with nothing in `existing`.
pub fn allocate_local_id(now_ms: f64, existing: &[i64]) -> i64 {
    let mut id = -((now_ms as i64).max(1));
    while existing.contains(&id) {
        id -= 1;
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: i64, user_id: i64, title: &str) -> Todo {
        Todo {
            id,
            user_id,
            title: title.to_string(),
            completed: false,
        }
    }

    fn todo_repo() -> LocalRepo<Todo, MemoryStorage> {
        LocalRepo::new(MemoryStorage::default())
    }

    #[test]
    fn test_list_empty_storage() {
        assert!(todo_repo().list(None).is_empty());
    }

    #[test]
    fn test_list_corrupt_payload_reads_as_empty() {
        let backend = MemoryStorage::default();
        backend.write(Todo::STORAGE_KEY, "not json");
        let repo: LocalRepo<Todo, MemoryStorage> = LocalRepo::new(backend);
        assert!(repo.list(None).is_empty());
    }

    #[test]
    fn test_add_then_list_scoped_by_owner() {
        let repo = todo_repo();
        repo.add(&make_todo(-5, 3, "B"));
        repo.add(&make_todo(-6, 9, "C"));

        let for_user_3 = repo.list(Some(3));
        assert_eq!(for_user_3.len(), 1);
        assert_eq!(for_user_3[0].title, "B");
        assert_eq!(repo.list(None).len(), 2);
    }

    #[test]
    fn test_remove_rewrites_remaining_subset() {
        let repo = todo_repo();
        repo.add(&make_todo(-5, 3, "B"));
        repo.add(&make_todo(-6, 3, "C"));

        repo.remove(-5);

        let remaining = repo.list(Some(3));
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, -6);
    }

    #[test]
    fn test_positive_ids_never_persisted() {
        let repo = todo_repo();
        repo.add(&make_todo(1, 3, "remote"));
        repo.add(&make_todo(-2, 3, "local"));

        let stored = repo.list(None);
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, -2);
    }

    #[test]
    fn test_users_are_unowned() {
        let repo: LocalRepo<User, MemoryStorage> = LocalRepo::new(MemoryStorage::default());
        repo.add(&User {
            id: -1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        });

        assert_eq!(repo.list(None).len(), 1);
        // Scoping by an owner id matches nothing for unowned kinds.
        assert!(repo.list(Some(1)).is_empty());
    }

    #[test]
    fn test_allocate_local_id_is_negative_and_distinct() {
        let existing = vec![1, 2, -1_000, -1_001];
        let id = allocate_local_id(1_000.0, &existing);
        assert!(id < 0);
        assert!(!existing.contains(&id));
        assert_eq!(id, -1_002);
    }

    #[test]
    fn test_allocate_local_id_stays_negative_near_zero() {
        assert!(allocate_local_id(0.0, &[]) < 0);
    }

    #[test]
    fn test_merged_remote_and_local_todos_for_one_user() {
        let repo = todo_repo();
        repo.add(&make_todo(-5, 3, "B"));
        repo.add(&make_todo(-6, 9, "C"));

        // Same composition the todos screen performs after its fetch.
        let mut merged = vec![make_todo(1, 3, "A")];
        merged.extend(repo.list(Some(3)));

        let titles: Vec<&str> = merged.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_persisted_records_survive_a_fresh_repo() {
        let backend = MemoryStorage::default();
        {
            let repo: LocalRepo<Todo, &MemoryStorage> = LocalRepo::new(&backend);
            repo.add(&make_todo(-5, 3, "B"));
        }
        let reloaded: LocalRepo<Todo, &MemoryStorage> = LocalRepo::new(&backend);
        assert_eq!(reloaded.list(Some(3)).len(), 1);
    }
}
