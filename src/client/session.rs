//! Authenticated request pipeline shared by every resource handle.
//!
//! One call runs, in order: token resolution, account path scoping, body
//! serialization, the HTTP exchange, content sniffing with XML parsing, error
//! normalization, and at most one retry after the token is rejected.

use std::sync::Arc;

use tracing::{debug, warn};

use super::auth::TokenCache;
use super::http::{
    Authorization, HttpRequest, HttpResponse, HttpTransport, JSON, Method, Payload, XML,
};
use super::{ApiErrorCode, RequestContext, ResponseContext, TenDlcError};
use crate::domain::{AccountId, AssignTns, BrandUpdate, BrandVetting, CampaignUpdate, UnassignTns};
use crate::transport::{
    DecodeError, XmlValue, encode_assign_xml, encode_brand_vetting_xml, encode_brand_xml,
    encode_campaign_xml, encode_unassign_xml, error_fields_from_json, error_fields_from_xml,
    find_collection, find_entity, looks_like_xml, parse_xml,
};

const UNAUTHORIZED: u16 = 401;

/// Typed request bodies; the variant decides the wire encoding.
#[derive(Debug, Clone)]
pub(crate) enum RequestBody {
    Brand(BrandUpdate),
    BrandVetting(BrandVetting),
    Campaign(CampaignUpdate),
    Assign(AssignTns),
    Unassign(UnassignTns),
    Json(serde_json::Value),
}

impl RequestBody {
    fn into_payload(self) -> Payload {
        let xml = |body: String| Payload::Text {
            content_type: XML,
            body,
        };
        match self {
            Self::Brand(brand) => xml(encode_brand_xml(&brand)),
            Self::BrandVetting(vetting) => xml(encode_brand_vetting_xml(&vetting)),
            Self::Campaign(campaign) => xml(encode_campaign_xml(&campaign)),
            Self::Assign(request) => xml(encode_assign_xml(&request)),
            Self::Unassign(request) => xml(encode_unassign_xml(&request)),
            Self::Json(value) => Payload::Text {
                content_type: JSON,
                body: value.to_string(),
            },
        }
    }
}

/// A successful response body after content sniffing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    /// No content (typical for deletes and assignment changes).
    Empty,
    /// XML parsed into a lower-cased tree with the root element unwrapped.
    Xml(XmlValue),
    /// Anything that was not XML, as received.
    Text(String),
}

impl ResponseBody {
    pub fn xml(&self) -> Option<&XmlValue> {
        match self {
            Self::Xml(tree) => Some(tree),
            _ => None,
        }
    }

    /// Decode the first entity found along `paths`, or fail with `missing`.
    pub(crate) fn entity<T>(
        &self,
        paths: &[&[&str]],
        decode: impl Fn(&XmlValue) -> Result<T, DecodeError>,
        missing: TenDlcError,
    ) -> Result<T, TenDlcError> {
        match self.xml().and_then(|tree| find_entity(tree, paths)) {
            Some(node) => Ok(decode(node)?),
            None => Err(missing),
        }
    }

    /// Decode every item of the first collection found along `paths`, keeping server order.
    pub(crate) fn collection<T>(
        &self,
        paths: &[&[&str]],
        decode: impl Fn(&XmlValue) -> Result<T, DecodeError>,
    ) -> Result<Vec<T>, TenDlcError> {
        let Some(tree) = self.xml() else {
            return Ok(Vec::new());
        };
        find_collection(tree, paths)
            .into_iter()
            .map(|item| decode(item).map_err(TenDlcError::from))
            .collect()
    }
}

pub(crate) struct Session {
    http: Arc<dyn HttpTransport>,
    tokens: TokenCache,
    base_url: String,
    account_id: AccountId,
}

impl Session {
    pub(crate) fn new(
        http: Arc<dyn HttpTransport>,
        tokens: TokenCache,
        base_url: String,
        account_id: AccountId,
    ) -> Self {
        Self {
            http,
            tokens,
            base_url: base_url.trim_end_matches('/').to_owned(),
            account_id,
        }
    }

    pub(crate) async fn get(&self, path: &str) -> Result<ResponseBody, TenDlcError> {
        self.call(Method::Get, path, None).await
    }

    pub(crate) async fn post(
        &self,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<ResponseBody, TenDlcError> {
        self.call(Method::Post, path, body).await
    }

    pub(crate) async fn put(
        &self,
        path: &str,
        body: RequestBody,
    ) -> Result<ResponseBody, TenDlcError> {
        self.call(Method::Put, path, Some(body)).await
    }

    pub(crate) async fn delete(
        &self,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<ResponseBody, TenDlcError> {
        self.call(Method::Delete, path, body).await
    }

    /// Paths already naming an account are left as given.
    fn scoped_url(&self, path: &str) -> String {
        if path.contains("accounts/") {
            format!("{}{path}", self.base_url)
        } else {
            format!(
                "{}/accounts/{}{path}",
                self.base_url,
                self.account_id.as_str()
            )
        }
    }

    async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
    ) -> Result<ResponseBody, TenDlcError> {
        let url = self.scoped_url(path);
        let payload = body.map_or(Payload::Empty { content_type: XML }, RequestBody::into_payload);

        let token = self.tokens.access_token().await?;
        let mut response = self.exchange(method, &url, token.clone(), &payload, 1).await?;

        if response.status == UNAUTHORIZED {
            warn!(method = method.as_str(), %url, "access token rejected, retrying once");
            self.tokens.invalidate(&token);
            let token = self.tokens.access_token().await?;
            response = self.exchange(method, &url, token, &payload, 2).await?;
        }

        if !response.is_success() {
            return Err(api_error(method, url, &payload, response));
        }
        read_body(response)
    }

    async fn exchange(
        &self,
        method: Method,
        url: &str,
        token: String,
        payload: &Payload,
        attempt: u8,
    ) -> Result<HttpResponse, TenDlcError> {
        debug!(method = method.as_str(), %url, attempt, "sending request");
        let request = HttpRequest {
            method,
            url: url.to_owned(),
            authorization: Authorization::Bearer(token),
            accept: XML,
            payload: payload.clone(),
        };
        let response = self
            .http
            .send(request)
            .await
            .map_err(TenDlcError::Transport)?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}

fn read_body(response: HttpResponse) -> Result<ResponseBody, TenDlcError> {
    if response.body.trim().is_empty() {
        return Ok(ResponseBody::Empty);
    }
    if looks_like_xml(response.content_type.as_deref(), &response.body) {
        return parse_xml(&response.body)
            .map(ResponseBody::Xml)
            .map_err(|err| TenDlcError::Parse(Box::new(err)));
    }
    Ok(ResponseBody::Text(response.body))
}

fn api_error(method: Method, url: String, payload: &Payload, response: HttpResponse) -> TenDlcError {
    let fields = if looks_like_xml(response.content_type.as_deref(), &response.body) {
        parse_xml(&response.body)
            .map(|tree| error_fields_from_xml(&tree))
            .unwrap_or_default()
    } else {
        error_fields_from_json(&response.body)
    };

    let message = fields
        .message
        .or_else(|| {
            reqwest::StatusCode::from_u16(response.status)
                .ok()
                .and_then(|status| status.canonical_reason())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| format!("request failed with status code {}", response.status));
    let code = fields
        .code
        .map_or(ApiErrorCode::Status(response.status), ApiErrorCode::Code);

    TenDlcError::Api {
        message,
        code,
        request: Box::new(RequestContext {
            method: method.as_str(),
            url,
            body: payload.text().map(str::to_owned),
        }),
        response: Box::new(ResponseContext {
            status: response.status,
            content_type: response.content_type,
            body: response.body,
        }),
    }
}
