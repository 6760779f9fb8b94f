//! HTTP client for the remote user API

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::user::{genres_from_column, NewUser, PersistedUser, UserId};
use crate::domain::DomainError;

/// User record as carried by the remote API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "clave", default)]
    pub password: String,
    #[serde(rename = "telefono", default)]
    pub phone: String,
    /// Comma-delimited genre tokens
    #[serde(rename = "generosFavoritos", default)]
    pub favorite_genres: String,
    #[serde(rename = "fotoPerfilUri", default)]
    pub profile_photo: Option<String>,
    /// Milliseconds since the Unix epoch
    #[serde(rename = "fechaRegistro", default, skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<i64>,
}

impl From<&NewUser> for RemoteUser {
    fn from(user: &NewUser) -> Self {
        Self {
            id: None,
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            phone: user.phone.clone(),
            favorite_genres: user.favorite_genres_column(),
            profile_photo: user.profile_photo.clone(),
            registered_at: None,
        }
    }
}

impl RemoteUser {
    /// Convert into the local record shape; a missing id becomes 0 and a
    /// missing timestamp becomes the epoch
    pub fn into_persisted(self) -> PersistedUser {
        let registered_at: DateTime<Utc> = self
            .registered_at
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
            .unwrap_or_default();

        let id = UserId::new(self.id.unwrap_or(0));
        let favorite_genres = genres_from_column(&self.favorite_genres);

        PersistedUser::restore(
            id,
            NewUser {
                name: self.name,
                email: self.email,
                password: self.password,
                phone: self.phone,
                favorite_genres,
                profile_photo: self.profile_photo,
            },
            registered_at,
        )
    }
}

/// Only the id of a registration reply is read
#[derive(Debug, Deserialize)]
struct CreatedUser {
    #[serde(default)]
    id: Option<i64>,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    #[serde(rename = "correo")]
    email: &'a str,
    #[serde(rename = "clave")]
    password: &'a str,
}

/// Client for `/api/usuarios`
#[derive(Debug, Clone)]
pub struct RemoteUserClient {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteUserClient {
    /// Create a client for the API rooted at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/usuarios{}", self.base_url, path)
    }

    /// Fetch every user known to the remote API
    pub async fn list(&self) -> Result<Vec<RemoteUser>, DomainError> {
        let response = self
            .client
            .get(self.url(""))
            .send()
            .await
            .map_err(|e| DomainError::network(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::network(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| DomainError::network(format!("Failed to parse response: {}", e)))
    }

    /// Register a user remotely and return the id the API assigned.
    ///
    /// A success response whose body carries no id yields id 1; a body that
    /// cannot be read is an error.
    pub async fn register(&self, user: &NewUser) -> Result<UserId, DomainError> {
        let response = self
            .client
            .post(self.url("/registro"))
            .json(&RemoteUser::from(user))
            .send()
            .await
            .map_err(|e| DomainError::network(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Remote registration rejected");
            return Err(DomainError::network(format!("HTTP {}: {}", status, body)));
        }

        let created: CreatedUser = response
            .json()
            .await
            .map_err(|e| DomainError::network(format!("Failed to parse response: {}", e)))?;
        let id = created.id.unwrap_or(1);

        debug!(user_id = id, "Registered user remotely");

        Ok(UserId::new(id))
    }

    /// Log in remotely; any non-success status means no user
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<RemoteUser>, DomainError> {
        let response = self
            .client
            .post(self.url("/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|e| DomainError::network(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "Remote login rejected");
            return Ok(None);
        }

        response
            .json()
            .await
            .map(Some)
            .map_err(|e| DomainError::network(format!("Failed to parse response: {}", e)))
    }
}
