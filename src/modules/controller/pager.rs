// src/modules/controller/pager.rs

use crate::modules::cache::CacheSlot;
use crate::modules::records::Resource;
use crate::modules::table::application::ports::outgoing::{
    ListQuery, Page, TableStore, TableStoreError,
};

/// Page-cursor bookkeeping for a "load more" grid (projects on the public
/// page). The first page replaces the slot; every further page appends.
/// The control is visible exactly while fewer records are held than the
/// last-seen total.
#[derive(Debug)]
pub struct Pager {
    page: u32,
    limit: u32,
    total: u64,
}

impl Pager {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit,
            total: 0,
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Query for the first page; resets the cursor.
    pub fn first_query(&mut self) -> ListQuery {
        self.page = 1;
        ListQuery::paged(1, self.limit)
    }

    /// Apply the result of the first-page fetch.
    pub fn apply_first<T: Resource>(
        &mut self,
        slot: &mut CacheSlot<T>,
        result: Result<Page<T>, TableStoreError>,
    ) {
        match result {
            Ok(page) => {
                self.total = page.total.unwrap_or(page.data.len() as u64);
                slot.replace(page.data);
            }
            Err(error) => {
                tracing::warn!(table = T::TABLE, %error, "initial page fetch failed");
                self.total = 0;
                slot.mark_failed();
            }
        }
    }

    /// Fetch the next page and append it. On failure the cursor rolls back
    /// and the held records stay untouched.
    pub async fn load_more<T, S>(&mut self, slot: &mut CacheSlot<T>, store: &S)
    where
        T: Resource,
        S: TableStore<T>,
    {
        let next = self.page + 1;
        match store.list(ListQuery::paged(next, self.limit)).await {
            Ok(page) => {
                self.page = next;
                if let Some(total) = page.total {
                    self.total = total;
                }
                slot.append(page.data);
            }
            Err(error) => {
                tracing::warn!(table = T::TABLE, %error, "load more failed, cursor unchanged");
            }
        }
    }

    /// Visibility of the "load more" control.
    pub fn has_more(&self, held: usize) -> bool {
        (held as u64) < self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::cache::SlotState;
    use crate::modules::records::Project;
    use crate::tests::support::fixtures::sample_project;
    use crate::tests::support::stubs::InMemoryStore;

    fn seeded_store(count: usize) -> InMemoryStore<Project> {
        let records = (0..count)
            .map(|i| sample_project(&format!("p{}", i), &format!("Project {}", i), "web"))
            .collect();
        InMemoryStore::with_records(records)
    }

    async fn load_first(pager: &mut Pager, slot: &mut CacheSlot<Project>, store: &InMemoryStore<Project>) {
        let query = pager.first_query();
        let result = store.list(query).await;
        pager.apply_first(slot, result);
    }

    #[tokio::test]
    async fn first_page_replaces_and_records_total() {
        let store = seeded_store(14);
        let mut pager = Pager::new(6);
        let mut slot = CacheSlot::new();

        load_first(&mut pager, &mut slot, &store).await;

        assert_eq!(slot.len(), 6);
        assert_eq!(pager.total(), 14);
        assert!(pager.has_more(slot.len()));
    }

    #[tokio::test]
    async fn load_more_appends_until_total_reached() {
        let store = seeded_store(14);
        let mut pager = Pager::new(6);
        let mut slot = CacheSlot::new();

        load_first(&mut pager, &mut slot, &store).await;
        pager.load_more(&mut slot, &store).await;
        assert_eq!(slot.len(), 12);
        assert!(pager.has_more(slot.len()));

        pager.load_more(&mut slot, &store).await;
        assert_eq!(slot.len(), 14);
        assert!(!pager.has_more(slot.len()));
    }

    #[tokio::test]
    async fn appended_pages_preserve_order() {
        let store = seeded_store(8);
        let mut pager = Pager::new(6);
        let mut slot = CacheSlot::new();

        load_first(&mut pager, &mut slot, &store).await;
        pager.load_more(&mut slot, &store).await;

        let ids: Vec<&str> = slot.records().iter().filter_map(|p| p.id.as_deref()).collect();
        assert_eq!(ids, vec!["p0", "p1", "p2", "p3", "p4", "p5", "p6", "p7"]);
    }

    #[tokio::test]
    async fn failed_load_more_rolls_the_cursor_back() {
        let store = seeded_store(14);
        let mut pager = Pager::new(6);
        let mut slot = CacheSlot::new();

        load_first(&mut pager, &mut slot, &store).await;
        store.fail_with(crate::modules::table::application::ports::outgoing::TableStoreError::Server(
            502,
        ));
        pager.load_more(&mut slot, &store).await;

        assert_eq!(pager.page(), 1);
        assert_eq!(slot.len(), 6);
        assert_eq!(pager.total(), 14);

        store.heal();
        pager.load_more(&mut slot, &store).await;
        assert_eq!(pager.page(), 2);
        assert_eq!(slot.len(), 12);
    }

    #[tokio::test]
    async fn failed_first_page_degrades_to_empty() {
        let store = seeded_store(3);
        store.fail_with(crate::modules::table::application::ports::outgoing::TableStoreError::Network(
            "down".to_string(),
        ));
        let mut pager = Pager::new(6);
        let mut slot = CacheSlot::new();

        load_first(&mut pager, &mut slot, &store).await;

        assert_eq!(slot.state(), SlotState::Failed);
        assert_eq!(pager.total(), 0);
        assert!(!pager.has_more(slot.len()));
    }
}
