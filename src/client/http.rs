use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::domain::{Password, Username};

pub(crate) type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
pub(crate) type TransportResult = Result<HttpResponse, Box<dyn StdError + Send + Sync>>;

pub(crate) const XML: &str = "application/xml";
pub(crate) const JSON: &str = "application/json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Clone)]
pub(crate) enum Authorization {
    Basic { username: Username, password: Password },
    Bearer(String),
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { username, .. } => write!(f, "Basic({})", username.as_str()),
            Self::Bearer(_) => f.write_str("Bearer(***)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Payload {
    /// No body, but the content type is still declared.
    Empty { content_type: &'static str },
    Form(Vec<(String, String)>),
    Text {
        content_type: &'static str,
        body: String,
    },
}

impl Payload {
    pub(crate) fn text(&self) -> Option<&str> {
        match self {
            Self::Text { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct HttpRequest {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) authorization: Authorization,
    pub(crate) accept: &'static str,
    pub(crate) payload: Payload,
}

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) content_type: Option<String>,
    pub(crate) body: String,
}

impl HttpResponse {
    pub(crate) fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub(crate) trait HttpTransport: Send + Sync {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, TransportResult>;
}

#[derive(Debug, Clone)]
pub(crate) struct ReqwestTransport {
    pub(crate) client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: HttpRequest) -> BoxFuture<'_, TransportResult> {
        Box::pin(async move {
            let method = match request.method {
                Method::Get => reqwest::Method::GET,
                Method::Post => reqwest::Method::POST,
                Method::Put => reqwest::Method::PUT,
                Method::Delete => reqwest::Method::DELETE,
            };
            let mut builder = self
                .client
                .request(method, request.url.as_str())
                .header(ACCEPT, request.accept);
            builder = match &request.authorization {
                Authorization::Basic { username, password } => {
                    builder.basic_auth(username.as_str(), Some(password.as_str()))
                }
                Authorization::Bearer(token) => builder.bearer_auth(token),
            };
            builder = match request.payload {
                Payload::Empty { content_type } => builder.header(CONTENT_TYPE, content_type),
                Payload::Form(params) => builder.form(&params),
                Payload::Text { content_type, body } => {
                    builder.header(CONTENT_TYPE, content_type).body(body)
                }
            };

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let body = response.text().await?;
            Ok(HttpResponse {
                status,
                content_type,
                body,
            })
        })
    }
}
