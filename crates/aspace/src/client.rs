//! Blocking HTTP client for the ArchivesSpace REST API.

use crate::config::ClientConfig;
use crate::models::{ArchivalObject, DigitalObject};
use crate::{AspaceError, AspaceResult};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{Method, Url};
use serde::Deserialize;
use std::time::Duration;

/// Header carrying the session token on every authenticated request.
pub const SESSION_HEADER: &str = "X-ArchivesSpace-Session";

#[derive(Deserialize)]
struct LoginResponse {
    session: String,
}

/// Authenticated ArchivesSpace session.
///
/// Requests are issued one at a time on the calling thread. There is no retry layer; the
/// configured timeout applies to each request individually.
pub struct AspaceClient {
    root_url: String,
    session: String,
    http: Client,
}

impl AspaceClient {
    /// Logs in to the configured environment and returns a client bound to the new session.
    ///
    /// # Errors
    ///
    /// Returns an `AspaceError` if the HTTP client cannot be built, the login request fails or
    /// the server rejects the credentials.
    pub fn connect(config: &ClientConfig, timeout_secs: u64) -> AspaceResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        let login_url = Self::login_url(config)?;
        let response = http
            .post(login_url.clone())
            .form(&[("password", config.password.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(AspaceError::Login(format!(
                "{} returned {}: {}",
                login_url,
                status.as_u16(),
                body.trim()
            )));
        }

        let login: LoginResponse = response.json()?;
        if login.session.trim().is_empty() {
            return Err(AspaceError::Login("server returned an empty session".into()));
        }

        tracing::debug!("logged in to {} as {}", config.url, config.username);

        Ok(Self {
            root_url: config.url.clone(),
            session: login.session,
            http,
        })
    }

    /// `{url}/users/{username}/login` with the username encoded as a single path segment.
    fn login_url(config: &ClientConfig) -> AspaceResult<Url> {
        let mut url = Url::parse(&config.url)
            .map_err(|e| AspaceError::Config(format!("invalid url '{}': {}", config.url, e)))?;
        url.path_segments_mut()
            .map_err(|_| AspaceError::Config(format!("url '{}' cannot be a base", config.url)))?
            .pop_if_empty()
            .extend(["users", config.username.as_str(), "login"]);
        Ok(url)
    }

    /// Base URL of the API this client talks to.
    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    /// Fetches the full descendant tree of a resource as untyped JSON.
    pub fn get_resource_tree(
        &self,
        repository_id: i64,
        resource_id: i64,
    ) -> AspaceResult<serde_json::Value> {
        let path = format!(
            "/repositories/{}/resources/{}/tree",
            repository_id, resource_id
        );
        let response = Self::check(self.request(Method::GET, &path).send()?)?;
        Ok(response.json()?)
    }

    pub fn get_archival_object(
        &self,
        repository_id: i64,
        archival_object_id: i64,
    ) -> AspaceResult<ArchivalObject> {
        let path = format!(
            "/repositories/{}/archival_objects/{}",
            repository_id, archival_object_id
        );
        let response = Self::check(self.request(Method::GET, &path).send()?)?;
        Ok(response.json()?)
    }

    /// Replaces an archival object with `archival_object` and returns the server's message.
    pub fn update_archival_object(
        &self,
        repository_id: i64,
        archival_object_id: i64,
        archival_object: &ArchivalObject,
    ) -> AspaceResult<String> {
        let path = format!(
            "/repositories/{}/archival_objects/{}",
            repository_id, archival_object_id
        );
        let response = Self::check(
            self.request(Method::POST, &path)
                .json(archival_object)
                .send()?,
        )?;
        Self::message(response)
    }

    pub fn get_digital_object(
        &self,
        repository_id: i64,
        digital_object_id: i64,
    ) -> AspaceResult<DigitalObject> {
        let path = format!(
            "/repositories/{}/digital_objects/{}",
            repository_id, digital_object_id
        );
        let response = Self::check(self.request(Method::GET, &path).send()?)?;
        Ok(response.json()?)
    }

    /// Deletes a digital object and returns the server's message.
    pub fn delete_digital_object(
        &self,
        repository_id: i64,
        digital_object_id: i64,
    ) -> AspaceResult<String> {
        let path = format!(
            "/repositories/{}/digital_objects/{}",
            repository_id, digital_object_id
        );
        let response = Self::check(self.request(Method::DELETE, &path).send()?)?;
        Self::message(response)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.root_url, path))
            .header(SESSION_HEADER, &self.session)
    }

    fn check(response: Response) -> AspaceResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(AspaceError::Status {
            status: status.as_u16(),
            body: body.trim().to_string(),
        })
    }

    fn message(response: Response) -> AspaceResult<String> {
        Ok(response.text()?.replace('\n', ""))
    }
}
