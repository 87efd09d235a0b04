//! OAuth client-secret and cached-token handling.
//!
//! The generator never drives an interactive consent flow. It expects a
//! previously authorised `token.json` next to the client-secret file and
//! refreshes the access token in place via the standard
//! `refresh_token` grant when the cached token has expired. Unknown
//! fields in the token file (scopes, account hints) are preserved across
//! rewrites.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FormgenError, Result};

/// Clock-skew margin applied when judging token expiry.
const EXPIRY_SKEW: Duration = Duration::seconds(60);

/// OAuth client configuration from the Google Cloud console download.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientSecrets {
    /// OAuth client id.
    pub client_id: String,
    /// OAuth client secret.
    pub client_secret: String,
    /// Token endpoint URL.
    pub token_uri: String,
}

/// File wrapper around [`ClientSecrets`]; console downloads nest the
/// secrets under an `installed` key.
#[derive(Debug, Deserialize)]
struct ClientSecretsFile {
    installed: ClientSecrets,
}

/// A cached OAuth token as written by prior authorisations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredToken {
    /// The access token. The field is named `token` on disk.
    pub token: Option<String>,
    /// Long-lived refresh token used to mint new access tokens.
    pub refresh_token: Option<String>,
    /// RFC 3339 expiry timestamp of the access token.
    pub expiry: Option<String>,
    /// Fields this tool does not interpret, preserved across rewrites.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl StoredToken {
    /// Whether the access token is missing, unparseable, or past its
    /// expiry (with a skew margin).
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        if self.token.is_none() {
            return true;
        }
        let Some(expiry) = self.expiry.as_deref() else {
            return true;
        };
        match DateTime::parse_from_rfc3339(expiry) {
            Ok(parsed) => parsed.with_timezone(&Utc) <= now + EXPIRY_SKEW,
            Err(_) => true,
        }
    }
}

/// Successful response of a `refresh_token` grant.
#[derive(Debug, Deserialize)]
struct RefreshResponse {
    access_token: String,
    expires_in: Option<i64>,
}

/// Loads secrets and tokens from disk and keeps the access token fresh.
pub struct Authenticator {
    secrets_path: Utf8PathBuf,
    token_path: Utf8PathBuf,
}

impl Authenticator {
    /// Build an authenticator over the given secret and token files.
    #[must_use]
    pub fn new(secrets_path: Utf8PathBuf, token_path: Utf8PathBuf) -> Self {
        Self {
            secrets_path,
            token_path,
        }
    }

    /// Return a fresh access token, refreshing and persisting the cached
    /// token when it has expired.
    ///
    /// # Errors
    ///
    /// Returns an error if either file is missing or malformed, if the
    /// cached token carries no refresh token, or if the refresh grant
    /// fails.
    pub fn access_token(&self) -> Result<String> {
        let secrets = load_client_secrets(&self.secrets_path)?;
        let mut stored = load_stored_token(&self.token_path)?;
        let now = Utc::now();
        if !stored.is_expired(now)
            && let Some(token) = stored.token.clone()
        {
            return Ok(token);
        }
        log::debug!("cached access token expired, running refresh grant");
        let response = refresh_grant(&secrets, &stored)?;
        apply_refresh(&mut stored, &response, now);
        persist_token(&self.token_path, &stored)?;
        stored.token.ok_or_else(|| FormgenError::Auth {
            reason: "refresh grant returned no access token".to_owned(),
        })
    }
}

/// Read and parse the client-secret file.
fn load_client_secrets(path: &Utf8Path) -> Result<ClientSecrets> {
    if !path.exists() {
        return Err(FormgenError::CredentialsNotFound {
            path: path.to_owned(),
        });
    }
    let text = fs::read_to_string(path)?;
    parse_client_secrets(&text)
}

/// Parse the client-secret JSON body.
fn parse_client_secrets(text: &str) -> Result<ClientSecrets> {
    let file: ClientSecretsFile =
        serde_json::from_str(text).map_err(|e| FormgenError::Auth {
            reason: format!("malformed client-secret file: {e}"),
        })?;
    Ok(file.installed)
}

/// Read and parse the cached-token file.
fn load_stored_token(path: &Utf8Path) -> Result<StoredToken> {
    if !path.exists() {
        return Err(FormgenError::TokenMissing {
            path: path.to_owned(),
        });
    }
    let text = fs::read_to_string(path)?;
    serde_json::from_str(&text).map_err(|e| FormgenError::Auth {
        reason: format!("malformed token file: {e}"),
    })
}

/// Run the `refresh_token` grant against the token endpoint.
fn refresh_grant(secrets: &ClientSecrets, stored: &StoredToken) -> Result<RefreshResponse> {
    let refresh_token = stored.refresh_token.as_deref().ok_or_else(|| {
        FormgenError::Auth {
            reason: "cached token has no refresh token; re-authorise the application"
                .to_owned(),
        }
    })?;
    let response = ureq::post(&secrets.token_uri)
        .send_form([
            ("grant_type", "refresh_token"),
            ("client_id", secrets.client_id.as_str()),
            ("client_secret", secrets.client_secret.as_str()),
            ("refresh_token", refresh_token),
        ])
        .map_err(|e| FormgenError::Auth {
            reason: format!("token refresh failed: {e}"),
        })?;
    response
        .into_body()
        .read_json::<RefreshResponse>()
        .map_err(|e| FormgenError::Auth {
            reason: format!("malformed token refresh response: {e}"),
        })
}

/// Fold a refresh response into the stored token.
fn apply_refresh(stored: &mut StoredToken, response: &RefreshResponse, now: DateTime<Utc>) {
    stored.token = Some(response.access_token.clone());
    let lifetime = Duration::seconds(response.expires_in.unwrap_or(3600));
    stored.expiry = Some((now + lifetime).to_rfc3339());
}

/// Write the stored token back to disk.
fn persist_token(path: &Utf8Path, stored: &StoredToken) -> Result<()> {
    let text = serde_json::to_string_pretty(stored)?;
    fs::write(path, text)?;
    Ok(())
}
