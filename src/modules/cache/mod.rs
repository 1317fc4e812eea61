// src/modules/cache/mod.rs
//
// Latest-fetched collection per resource kind. Writes never go through the
// cache; they go through the table store first, then a forced re-fetch
// replaces the slot as a whole.

/// Distinguishes "never fetched", "fetched (possibly empty)" and
/// "last fetch failed". Rendering treats Failed like an empty collection;
/// tests and logging can tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    Unloaded,
    Loaded,
    Failed,
}

#[derive(Debug)]
pub struct CacheSlot<T> {
    records: Vec<T>,
    state: SlotState,
}

impl<T> Default for CacheSlot<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            state: SlotState::Unloaded,
        }
    }
}

impl<T> CacheSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly fetched collection. The slot is replaced as a unit;
    /// callers never observe a half-updated collection.
    pub fn replace(&mut self, records: Vec<T>) {
        self.records = records;
        self.state = SlotState::Loaded;
    }

    /// Append a further page. Only project "load more" uses this; every other
    /// path replaces.
    pub fn append(&mut self, mut records: Vec<T>) {
        self.records.append(&mut records);
        self.state = SlotState::Loaded;
    }

    /// Record a failed fetch. Records are dropped so the view degrades to the
    /// empty state, but the failure stays observable through `state()`.
    pub fn mark_failed(&mut self) {
        self.records.clear();
        self.state = SlotState::Failed;
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn state(&self) -> SlotState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record, for singleton resources (profile).
    pub fn first(&self) -> Option<&T> {
        self.records.first()
    }
}
