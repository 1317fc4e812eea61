// src/modules/table/adapter/outgoing/http_table_store.rs

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};

use crate::modules::records::Resource;
use crate::modules::table::application::ports::outgoing::{
    ListQuery, Page, TableStore, TableStoreError,
};

/// reqwest adapter for the `tables/{resource}` REST API.
///
/// Every call is a fresh round trip; failures surface as
/// `TableStoreError::Network` (transport or body decode) or
/// `TableStoreError::Server` (non-2xx status).
pub struct HttpTableStore {
    client: Client,
    base_url: String,
}

impl HttpTableStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/tables/{}", self.base_url, table)
    }

    fn record_url(&self, table: &str, id: &str) -> String {
        format!("{}/tables/{}/{}", self.base_url, table, id)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, TableStoreError> {
        let response = request
            .send()
            .await
            .map_err(|e| TableStoreError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TableStoreError::Server(status.as_u16()));
        }
        Ok(response)
    }

    async fn send_json<T: Resource>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, TableStoreError> {
        self.send(request)
            .await?
            .json::<T>()
            .await
            .map_err(|e| TableStoreError::Network(e.to_string()))
    }
}

#[async_trait]
impl<T: Resource> TableStore<T> for HttpTableStore {
    async fn list(&self, query: ListQuery) -> Result<Page<T>, TableStoreError> {
        let mut request = self.client.get(self.table_url(T::TABLE));
        if let Some(limit) = query.limit {
            request = request.query(&[("limit", limit)]);
        }
        if let Some(page) = query.page {
            request = request.query(&[("page", page)]);
        }
        if let Some(sort) = query.sort {
            request = request.query(&[("sort", sort)]);
        }

        self.send(request)
            .await?
            .json::<Page<T>>()
            .await
            .map_err(|e| TableStoreError::Network(e.to_string()))
    }

    async fn create(&self, record: &T) -> Result<T, TableStoreError> {
        let request = self.client.post(self.table_url(T::TABLE)).json(record);
        self.send_json(request).await
    }

    async fn update(&self, id: &str, record: &T) -> Result<T, TableStoreError> {
        let request = self
            .client
            .put(self.record_url(T::TABLE, id))
            .json(record);
        self.send_json(request).await
    }

    async fn patch(
        &self,
        id: &str,
        fields: serde_json::Value,
    ) -> Result<T, TableStoreError> {
        let request = self
            .client
            .patch(self.record_url(T::TABLE, id))
            .json(&fields);
        self.send_json(request).await
    }

    async fn delete(&self, id: &str) -> Result<(), TableStoreError> {
        let request = self.client.delete(self.record_url(T::TABLE, id));
        self.send(request).await?;
        Ok(())
    }
}
