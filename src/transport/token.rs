use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid token response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("token response has an empty access_token")]
    EmptyToken,
}

/// Body of a successful client-credentials grant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub expires_in: i64,
    #[serde(default)]
    pub scope: Option<String>,
}

pub fn encode_token_form() -> Vec<(String, String)> {
    vec![("grant_type".to_owned(), "client_credentials".to_owned())]
}

pub fn decode_token_response(body: &str) -> Result<TokenResponse, TokenError> {
    let response: TokenResponse = serde_json::from_str(body)?;
    if response.access_token.trim().is_empty() {
        return Err(TokenError::EmptyToken);
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_requests_client_credentials() {
        assert_eq!(
            encode_token_form(),
            vec![("grant_type".to_owned(), "client_credentials".to_owned())]
        );
    }

    #[test]
    fn decodes_grant_with_optional_scope() {
        let response = decode_token_response(
            r#"{"access_token":"abc","token_type":"Bearer","expires_in":3600}"#,
        )
        .unwrap();
        assert_eq!(response.access_token, "abc");
        assert_eq!(response.token_type.as_deref(), Some("Bearer"));
        assert_eq!(response.expires_in, 3600);
        assert_eq!(response.scope, None);
    }

    #[test]
    fn rejects_missing_or_empty_token() {
        assert!(matches!(
            decode_token_response(r#"{"expires_in":3600}"#),
            Err(TokenError::Json(_))
        ));
        assert!(matches!(
            decode_token_response(r#"{"access_token":" ","expires_in":3600}"#),
            Err(TokenError::EmptyToken)
        ));
        assert!(matches!(
            decode_token_response("<html>nope</html>"),
            Err(TokenError::Json(_))
        ));
    }
}
