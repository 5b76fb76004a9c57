//! Client layer: authenticated HTTP calls and mapping between transport and domain.

mod assignments;
mod auth;
mod brands;
mod campaigns;
mod http;
mod session;

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{AccountId, Password, Username, ValidationError};
use crate::transport::DecodeError;

pub use assignments::CampaignAssignments;
pub use auth::{AuthError, TOKEN_SAFETY_MARGIN_SECS};
pub use brands::Brands;
pub use campaigns::Campaigns;
pub use session::ResponseBody;

use auth::TokenCache;
use http::{HttpTransport, ReqwestTransport};
use session::Session;

pub const DEFAULT_BASE_URL: &str = "https://dashboard.bandwidth.com/api/v1";
pub const DEFAULT_AUTH_URL: &str = "https://id.bandwidth.com/api/v1/oauth2/token";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const ACCOUNT_ID_VAR: &str = "BANDWIDTH_ACCOUNT_ID";
const USERNAME_VAR: &str = "BANDWIDTH_API_USERNAME";
const PASSWORD_VAR: &str = "BANDWIDTH_API_PASSWORD";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Account and API user the client acts as.
///
/// The username/password pair is only ever sent to the token endpoint.
pub struct Credentials {
    account_id: AccountId,
    username: Username,
    password: Password,
}

impl Credentials {
    pub fn new(
        account_id: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            account_id: AccountId::new(account_id)?,
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    /// Read `BANDWIDTH_ACCOUNT_ID`, `BANDWIDTH_API_USERNAME` and `BANDWIDTH_API_PASSWORD`.
    pub fn from_env() -> Result<Self, ValidationError> {
        Self::new(
            env_var(ACCOUNT_ID_VAR)?,
            env_var(USERNAME_VAR)?,
            env_var(PASSWORD_VAR)?,
        )
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }
}

fn env_var(name: &'static str) -> Result<String, ValidationError> {
    std::env::var(name).map_err(|_| ValidationError::MissingEnvVar { name })
}

/// Code attached to an [`TenDlcError::Api`] failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Structured code from the error body.
    Code(String),
    /// HTTP status, used when the body carries no code.
    Status(u16),
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => f.write_str(code),
            Self::Status(status) => write!(f, "HTTP {status}"),
        }
    }
}

/// The request that produced an [`TenDlcError::Api`] failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub method: &'static str,
    pub url: String,
    pub body: Option<String>,
}

/// The response behind an [`TenDlcError::Api`] failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseContext {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`TenDlcClient`] and its resource handles.
pub enum TenDlcError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// No access token could be obtained.
    #[error("authentication failed: {0}")]
    Authentication(#[from] AuthError),

    /// The API answered with a non-2xx status.
    #[error("API error ({code}): {message}")]
    Api {
        message: String,
        code: ApiErrorCode,
        request: Box<RequestContext>,
        response: Box<ResponseContext>,
    },

    /// A lookup succeeded but the response held no entity.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// A write succeeded but the response held no entity.
    #[error("failed to {action} {entity}")]
    Failed {
        action: &'static str,
        entity: &'static str,
    },

    /// The response body could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// A parsed record held a value outside its field's type.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl TenDlcError {
    pub(crate) fn failed(action: &'static str, entity: &'static str) -> Self {
        Self::Failed { action, entity }
    }

    /// HTTP status of an [`TenDlcError::Api`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { response, .. } => Some(response.status),
            Self::Authentication(AuthError::Rejected { status, .. }) => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`TenDlcClient`].
///
/// Use this when you need to customize endpoints, the timeout, or the user-agent.
pub struct TenDlcClientBuilder {
    credentials: Credentials,
    base_url: String,
    auth_url: String,
    timeout: Duration,
    user_agent: Option<String>,
}

impl TenDlcClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_owned(),
            auth_url: DEFAULT_AUTH_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Override the API root that `/accounts/{id}/...` paths are joined to.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the OAuth2 token endpoint.
    pub fn auth_url(mut self, auth_url: impl Into<String>) -> Self {
        self.auth_url = auth_url.into();
        self
    }

    /// Per-request timeout, applied to token and resource calls alike.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<TenDlcClient, TenDlcError> {
        let mut builder = reqwest::Client::builder().timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|err| TenDlcError::Transport(Box::new(err)))?;

        Ok(TenDlcClient::from_parts(
            self.credentials,
            self.base_url,
            self.auth_url,
            Arc::new(ReqwestTransport { client }),
        ))
    }
}

#[derive(Clone)]
/// 10DLC campaign-registry client.
///
/// Cheap to clone; clones share one access token. Every resource call is
/// scoped to the credentials' account.
pub struct TenDlcClient {
    session: Arc<Session>,
}

impl TenDlcClient {
    /// Client with default endpoints and a 30 second timeout.
    pub fn new(credentials: Credentials) -> Result<Self, TenDlcError> {
        Self::builder(credentials).build()
    }

    pub fn builder(credentials: Credentials) -> TenDlcClientBuilder {
        TenDlcClientBuilder::new(credentials)
    }

    fn from_parts(
        credentials: Credentials,
        base_url: String,
        auth_url: String,
        http: Arc<dyn HttpTransport>,
    ) -> Self {
        let Credentials {
            account_id,
            username,
            password,
        } = credentials;
        let tokens = TokenCache::new(Arc::clone(&http), auth_url, username, password);
        Self {
            session: Arc::new(Session::new(http, tokens, base_url, account_id)),
        }
    }

    pub fn brands(&self) -> Brands<'_> {
        Brands {
            session: &self.session,
        }
    }

    pub fn campaigns(&self) -> Campaigns<'_> {
        Campaigns {
            session: &self.session,
        }
    }

    pub fn assignments(&self) -> CampaignAssignments<'_> {
        CampaignAssignments {
            session: &self.session,
        }
    }
}
