// src/tests/support/stubs.rs
//
// In-memory stand-in for the table API, behaving like the real backend:
// server-assigned ids on create, page/limit slicing with a total count,
// PATCH merging fields into the stored record.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::records::{Message, Profile, Project, Resource, Skill, Testimonial};
use crate::modules::table::application::ports::outgoing::{
    ListQuery, Page, TableStore, TableStoreError,
};

struct Inner<T> {
    records: Mutex<Vec<T>>,
    failure: Mutex<Option<TableStoreError>>,
    next_id: AtomicUsize,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    patch_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

pub struct InMemoryStore<T: Resource> {
    inner: Arc<Inner<T>>,
}

impl<T: Resource> Clone for InMemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Resource> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                records: Mutex::new(Vec::new()),
                failure: Mutex::new(None),
                next_id: AtomicUsize::new(1),
                list_calls: AtomicUsize::new(0),
                create_calls: AtomicUsize::new(0),
                update_calls: AtomicUsize::new(0),
                patch_calls: AtomicUsize::new(0),
                delete_calls: AtomicUsize::new(0),
            }),
        }
    }

    pub fn with_records(records: Vec<T>) -> Self {
        let store = Self::new();
        *store.inner.records.lock().unwrap() = records;
        store
    }

    pub fn seed(&self, records: Vec<T>) {
        *self.inner.records.lock().unwrap() = records;
    }

    pub fn records(&self) -> Vec<T> {
        self.inner.records.lock().unwrap().clone()
    }

    /// Every operation fails with this error until `heal` is called.
    pub fn fail_with(&self, error: TableStoreError) {
        *self.inner.failure.lock().unwrap() = Some(error);
    }

    pub fn heal(&self) {
        *self.inner.failure.lock().unwrap() = None;
    }

    pub fn list_calls(&self) -> usize {
        self.inner.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.inner.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.inner.update_calls.load(Ordering::SeqCst)
    }

    pub fn patch_calls(&self) -> usize {
        self.inner.patch_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.inner.delete_calls.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> Result<(), TableStoreError> {
        match &*self.inner.failure.lock().unwrap() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn assign_id(&self, record: &T) -> T {
        let n = self.inner.next_id.fetch_add(1, Ordering::SeqCst);
        let mut value = serde_json::to_value(record).expect("record serializes");
        value["id"] = Value::String(format!("gen-{}", n));
        serde_json::from_value(value).expect("record deserializes")
    }

    fn merge_fields(record: &T, fields: &Value) -> T {
        let mut value = serde_json::to_value(record).expect("record serializes");
        if let (Some(target), Some(patch)) = (value.as_object_mut(), fields.as_object()) {
            for (key, field) in patch {
                target.insert(key.clone(), field.clone());
            }
        }
        serde_json::from_value(value).expect("patched record deserializes")
    }
}

#[async_trait]
impl<T: Resource> TableStore<T> for InMemoryStore<T> {
    async fn list(&self, query: ListQuery) -> Result<Page<T>, TableStoreError> {
        self.inner.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        let records = self.inner.records.lock().unwrap();
        let total = records.len() as u64;

        let limit = query.limit.unwrap_or(records.len() as u32) as usize;
        let page = query.page.unwrap_or(1).max(1) as usize;
        let start = (page - 1) * limit;

        let data: Vec<T> = records.iter().skip(start).take(limit).cloned().collect();
        Ok(Page {
            data,
            total: Some(total),
        })
    }

    async fn create(&self, record: &T) -> Result<T, TableStoreError> {
        self.inner.create_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        let created = self.assign_id(record);
        self.inner.records.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: &str, record: &T) -> Result<T, TableStoreError> {
        self.inner.update_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        let mut records = self.inner.records.lock().unwrap();
        match records.iter_mut().find(|r| r.id() == Some(id)) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record.clone())
            }
            None => Err(TableStoreError::Server(404)),
        }
    }

    async fn patch(&self, id: &str, fields: Value) -> Result<T, TableStoreError> {
        self.inner.patch_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        let mut records = self.inner.records.lock().unwrap();
        match records.iter_mut().find(|r| r.id() == Some(id)) {
            Some(slot) => {
                let patched = Self::merge_fields(slot, &fields);
                *slot = patched.clone();
                Ok(patched)
            }
            None => Err(TableStoreError::Server(404)),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), TableStoreError> {
        self.inner.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        let mut records = self.inner.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id() != Some(id));
        if records.len() == before {
            return Err(TableStoreError::Server(404));
        }
        Ok(())
    }
}

/// All five tables behind one handle, for wiring whole pages in tests.
/// Clones share state, so a test keeps one handle to inspect the backend
/// after handing the other to the page.
#[derive(Clone, Default)]
pub struct StubBackend {
    pub profiles: InMemoryStore<Profile>,
    pub skills: InMemoryStore<Skill>,
    pub projects: InMemoryStore<Project>,
    pub testimonials: InMemoryStore<Testimonial>,
    pub messages: InMemoryStore<Message>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

macro_rules! delegate_store {
    ($record:ty, $field:ident) => {
        #[async_trait]
        impl TableStore<$record> for StubBackend {
            async fn list(&self, query: ListQuery) -> Result<Page<$record>, TableStoreError> {
                self.$field.list(query).await
            }

            async fn create(&self, record: &$record) -> Result<$record, TableStoreError> {
                self.$field.create(record).await
            }

            async fn update(
                &self,
                id: &str,
                record: &$record,
            ) -> Result<$record, TableStoreError> {
                self.$field.update(id, record).await
            }

            async fn patch(&self, id: &str, fields: Value) -> Result<$record, TableStoreError> {
                self.$field.patch(id, fields).await
            }

            async fn delete(&self, id: &str) -> Result<(), TableStoreError> {
                self.$field.delete(id).await
            }
        }
    };
}

delegate_store!(Profile, profiles);
delegate_store!(Skill, skills);
delegate_store!(Project, projects);
delegate_store!(Testimonial, testimonials);
delegate_store!(Message, messages);
