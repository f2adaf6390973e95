use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;

use crate::domain::entities::{Circle, Game, LocationPage};
use crate::domain::errors::StoreError;
use crate::domain::ports::RecordStore;

// Connection settings for the external record store, built at the edge
// and injected here; this client never reads process environment.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    pub base_url: String,
    pub timeout: Duration,
}

// List envelope returned by the store's collection endpoints.
#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    items: Vec<T>,
}

// Thin reqwest client for the record store's collection API. Every call
// is bounded by the configured timeout so a hung store cannot wedge a
// request handler.
#[derive(Clone)]
pub struct RecordStoreClient {
    http: Client,
    base_url: String,
}

impl RecordStoreClient {
    pub fn new(config: StoreConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/api/collections/{}/records", self.base_url, collection)
    }

    fn record_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}", self.collection_url(collection), id)
    }

    async fn send(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<Response, StoreError> {
        let response = request.send().await.map_err(|err| StoreError::Failed {
            operation,
            message: err.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Failed {
                operation,
                message: format!("unexpected status {status}"),
            });
        }
        Ok(response)
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        operation: &'static str,
        response: Response,
    ) -> Result<T, StoreError> {
        response.json::<T>().await.map_err(|err| StoreError::Failed {
            operation,
            message: format!("response decode failed: {err}"),
        })
    }
}

#[async_trait]
impl RecordStore for RecordStoreClient {
    async fn list_circles(&self) -> Result<Vec<Circle>, StoreError> {
        // A game holds a handful of circles; the first page covers them.
        let request = self.http.get(self.collection_url("circles"));
        let response = self.send("list_circles", request).await?;
        let list: ListResponse<Circle> = Self::decode("list_circles", response).await?;
        Ok(list.items)
    }

    async fn update_circle(&self, circle: &Circle, token: &str) -> Result<(), StoreError> {
        let request = self
            .http
            .patch(self.record_url("circles", &circle.id))
            .bearer_auth(token)
            .json(circle);
        self.send("update_circle", request).await?;
        Ok(())
    }

    async fn get_game(&self, id: &str) -> Result<Game, StoreError> {
        let request = self.http.get(self.record_url("games", id));
        let response = request.send().await.map_err(|err| StoreError::Failed {
            operation: "get_game",
            message: err.to_string(),
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound {
                operation: "get_game",
                id: id.to_string(),
            });
        }
        if !status.is_success() {
            return Err(StoreError::Failed {
                operation: "get_game",
                message: format!("unexpected status {status}"),
            });
        }

        Self::decode("get_game", response).await
    }

    async fn update_game(
        &self,
        id: &str,
        start: &str,
        end: &str,
        token: &str,
    ) -> Result<(), StoreError> {
        let request = self
            .http
            .patch(self.record_url("games", id))
            .bearer_auth(token)
            .json(&json!({ "Start": start, "End": end }));
        self.send("update_game", request).await?;
        Ok(())
    }

    async fn list_player_locations(
        &self,
        page: u32,
        token: &str,
    ) -> Result<LocationPage, StoreError> {
        let request = self
            .http
            .get(self.collection_url("player_locations"))
            .query(&[("page", page)])
            .bearer_auth(token);
        let response = self.send("list_player_locations", request).await?;
        Self::decode("list_player_locations", response).await
    }

    async fn insert_player_location(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<(), StoreError> {
        let request = self
            .http
            .post(self.collection_url("player_locations"))
            .json(&json!({ "latitude": latitude, "longitude": longitude }));
        self.send("insert_player_location", request).await?;
        Ok(())
    }
}
