//! Access-token lifecycle: `NoToken -> Fetching -> Valid`, with one shared fetch.
//!
//! Every caller that finds no usable token while a fetch is running awaits
//! that same fetch and observes the same outcome. Failure leaves no token
//! behind, so the next call starts a fresh fetch.

use std::error::Error as StdError;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use parking_lot::Mutex;
use tracing::{debug, warn};

use super::http::{Authorization, HttpRequest, HttpTransport, Method, Payload};
use crate::domain::{Password, Username};
use crate::transport::{TokenError, decode_token_response, encode_token_form};

/// Tokens are treated as expired this long before the server says they are.
pub const TOKEN_SAFETY_MARGIN_SECS: i64 = 60;

/// Failure to obtain an access token. Cloned to every caller waiting on the fetch.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthError {
    #[error("token request failed: {0}")]
    Transport(#[source] Arc<dyn StdError + Send + Sync>),

    #[error("token endpoint rejected the credentials: HTTP {status}")]
    Rejected { status: u16, body: String },

    #[error("invalid token response: {0}")]
    Parse(#[source] Arc<TokenError>),
}

#[derive(Debug, Clone)]
struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    fn from_grant(value: String, expires_in: i64, now: DateTime<Utc>) -> Self {
        let lifetime = TimeDelta::try_seconds(expires_in.saturating_sub(TOKEN_SAFETY_MARGIN_SECS))
            .unwrap_or(TimeDelta::zero());
        Self {
            value,
            expires_at: now.checked_add_signed(lifetime).unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

type TokenFetch = Shared<BoxFuture<'static, Result<AccessToken, AuthError>>>;

#[derive(Default)]
struct TokenState {
    token: Option<AccessToken>,
    in_flight: Option<(u64, TokenFetch)>,
    generation: u64,
}

pub(crate) struct TokenCache {
    http: Arc<dyn HttpTransport>,
    auth_url: String,
    username: Username,
    password: Password,
    state: Mutex<TokenState>,
}

impl TokenCache {
    pub(crate) fn new(
        http: Arc<dyn HttpTransport>,
        auth_url: String,
        username: Username,
        password: Password,
    ) -> Self {
        Self {
            http,
            auth_url,
            username,
            password,
            state: Mutex::new(TokenState::default()),
        }
    }

    /// A token valid right now, fetching one if none is held.
    pub(crate) async fn access_token(&self) -> Result<String, AuthError> {
        let (generation, fetch) = {
            let mut state = self.state.lock();
            if let Some(token) = state.token.as_ref().filter(|token| token.is_valid_at(Utc::now())) {
                return Ok(token.value.clone());
            }
            if let Some(in_flight) = state.in_flight.clone() {
                in_flight
            } else {
                state.generation += 1;
                let generation = state.generation;
                let fetch = self.fetch().shared();
                state.in_flight = Some((generation, fetch.clone()));
                (generation, fetch)
            }
        };

        let result = fetch.await;

        let mut state = self.state.lock();
        if state
            .in_flight
            .as_ref()
            .is_some_and(|(current, _)| *current == generation)
        {
            state.in_flight = None;
            state.token = result.as_ref().ok().cloned();
        }
        result.map(|token| token.value)
    }

    /// Drop the held token if it is the one the server just rejected.
    ///
    /// A token installed by a concurrent refresh is left alone.
    pub(crate) fn invalidate(&self, rejected: &str) {
        let mut state = self.state.lock();
        if state
            .token
            .as_ref()
            .is_some_and(|token| token.value == rejected)
        {
            state.token = None;
        }
    }

    fn fetch(&self) -> BoxFuture<'static, Result<AccessToken, AuthError>> {
        let http = Arc::clone(&self.http);
        let request = HttpRequest {
            method: Method::Post,
            url: self.auth_url.clone(),
            authorization: Authorization::Basic {
                username: self.username.clone(),
                password: self.password.clone(),
            },
            accept: super::http::JSON,
            payload: Payload::Form(encode_token_form()),
        };

        async move {
            debug!(url = %request.url, "requesting access token");
            let response = match http.send(request).await {
                Ok(response) => response,
                Err(err) => {
                    warn!(error = %err, "token request failed");
                    return Err(AuthError::Transport(Arc::from(err)));
                }
            };
            if !response.is_success() {
                warn!(status = response.status, "token endpoint rejected the credentials");
                return Err(AuthError::Rejected {
                    status: response.status,
                    body: response.body,
                });
            }
            let grant = decode_token_response(&response.body)
                .map_err(|err| AuthError::Parse(Arc::new(err)))?;
            let token = AccessToken::from_grant(grant.access_token, grant.expires_in, Utc::now());
            debug!(expires_at = %token.expires_at, "access token refreshed");
            Ok(token)
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_shortened_by_the_safety_margin() {
        let now = Utc::now();
        let token = AccessToken::from_grant("t".to_owned(), 3600, now);
        assert_eq!(token.expires_at, now + TimeDelta::seconds(3540));
        assert!(token.is_valid_at(now + TimeDelta::seconds(3539)));
        assert!(!token.is_valid_at(now + TimeDelta::seconds(3540)));
    }

    #[test]
    fn short_lived_grant_is_never_reused() {
        let now = Utc::now();
        let token = AccessToken::from_grant("t".to_owned(), 30, now);
        assert!(!token.is_valid_at(now));
    }
}
