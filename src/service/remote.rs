use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    Error, Res,
    config::Settings,
    error::ServiceError,
    service::CatalogService,
    types::{
        Device, DevicesResponse, LoginRequest, LoginResponse, RawAlbum, RawArtist, SearchResponse,
        StreamUrlResponse,
    },
};

pub struct RemoteCatalog {
    client: Client,
    api_url: String,
    token: Option<String>,
}

impl RemoteCatalog {
    pub fn new(settings: &Settings) -> Res<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(|e| Error::Config(format!("Cannot build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_url: settings.api_url.clone(),
            token: None,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{uri}/{path}", uri = self.api_url, path = path)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        identifier: &str,
    ) -> Result<T, ServiceError> {
        let response = self.authorized(request).send().await?;
        let response = check_status(response, identifier)?;
        Ok(response.json::<T>().await?)
    }
}

fn check_status(response: Response, identifier: &str) -> Result<Response, ServiceError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => Err(ServiceError::NotFound(identifier.to_string())),
        status => Err(ServiceError::Rejected(status.as_u16())),
    }
}

impl CatalogService for RemoteCatalog {
    async fn login(
        &mut self,
        email: &str,
        password: &str,
        device_id: &str,
    ) -> Result<bool, ServiceError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            device_id: device_id.to_string(),
        };

        let response = self
            .client
            .post(self.url("login"))
            .json(&body)
            .send()
            .await?;

        // a refused login is an answer, not a transport failure
        if matches!(
            response.status(),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            return Ok(false);
        }

        let response = check_status(response, "login")?;
        let login = response.json::<LoginResponse>().await?;
        if !login.success {
            return Ok(false);
        }

        self.token = login.token;
        Ok(true)
    }

    async fn registered_devices(&self) -> Result<Vec<Device>, ServiceError> {
        let request = self.client.get(self.url("devices"));
        let devices = self.fetch::<DevicesResponse>(request, "devices").await?;
        Ok(devices.items)
    }

    async fn search(
        &self,
        query: &str,
        max_per_category: u32,
    ) -> Result<SearchResponse, ServiceError> {
        let request = self.client.get(self.url("search")).query(&[
            ("q", query.to_string()),
            ("max-results", max_per_category.to_string()),
        ]);
        self.fetch(request, query).await
    }

    async fn artist_info(
        &self,
        artist_id: &str,
        include_albums: bool,
        top_track_limit: u32,
        album_limit: u32,
    ) -> Result<RawArtist, ServiceError> {
        let request = self
            .client
            .get(self.url(&format!("artists/{}", artist_id)))
            .query(&[
                ("include-albums", include_albums.to_string()),
                ("num-top-tracks", top_track_limit.to_string()),
                ("num-albums", album_limit.to_string()),
            ]);
        self.fetch(request, artist_id).await
    }

    async fn album_info(&self, album_id: &str) -> Result<RawAlbum, ServiceError> {
        let request = self.client.get(self.url(&format!("albums/{}", album_id)));
        self.fetch(request, album_id).await
    }

    async fn stream_url(&self, track_id: &str, device_id: &str) -> Result<String, ServiceError> {
        let request = self
            .client
            .get(self.url(&format!("tracks/{}/stream", track_id)))
            .query(&[("device-id", device_id)]);
        let stream = self.fetch::<StreamUrlResponse>(request, track_id).await?;
        Ok(stream.url)
    }

    async fn logout(&mut self) -> Result<(), ServiceError> {
        if self.token.is_none() {
            return Ok(());
        }

        let request = self.authorized(self.client.post(self.url("logout")));
        let response = request.send().await?;
        check_status(response, "logout")?;
        self.token = None;
        Ok(())
    }
}
