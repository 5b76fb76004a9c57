//! Message and code extraction from failed responses.
//!
//! The carrier answers errors either as XML (`<Resp><Error><Code/><Message/>`)
//! or, from some gateways, as JSON (`{"error": {"code", "message"}}`).

use serde_json::Value;

use super::tree::XmlValue;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorFields {
    pub message: Option<String>,
    pub code: Option<String>,
}

impl ErrorFields {
    fn or(self, other: Self) -> Self {
        Self {
            message: self.message.or(other.message),
            code: self.code.or(other.code),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

/// `error.message` wins over a top-level `message`; the code only comes from `error.code`.
pub fn error_fields_from_xml(tree: &XmlValue) -> ErrorFields {
    let text = |keys: &[&str]| tree.path(keys).and_then(XmlValue::text).and_then(non_blank);
    ErrorFields {
        message: text(&["error", "message"]),
        code: text(&["error", "code"]),
    }
    .or(ErrorFields {
        message: text(&["message"]),
        code: None,
    })
}

/// Same priority as [`error_fields_from_xml`]; anything that is not JSON yields no fields.
pub fn error_fields_from_json(body: &str) -> ErrorFields {
    let Ok(json) = serde_json::from_str::<Value>(body) else {
        return ErrorFields::default();
    };
    let scalar = |value: Option<&Value>| match value? {
        Value::String(text) => non_blank(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    };
    ErrorFields {
        message: scalar(json.pointer("/error/message")).or_else(|| scalar(json.get("message"))),
        code: scalar(json.pointer("/error/code")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::tree::parse_xml;

    #[test]
    fn xml_structured_error_wins() {
        let tree = parse_xml(
            "<ErrorResponse><Error><Code>12055</Code><Message>Brand is locked</Message></Error>\
             <Message>generic</Message></ErrorResponse>",
        )
        .unwrap();
        assert_eq!(
            error_fields_from_xml(&tree),
            ErrorFields {
                message: Some("Brand is locked".to_owned()),
                code: Some("12055".to_owned()),
            }
        );
    }

    #[test]
    fn xml_falls_back_to_generic_message() {
        let tree = parse_xml("<Resp><Message>Bad request</Message></Resp>").unwrap();
        assert_eq!(
            error_fields_from_xml(&tree),
            ErrorFields {
                message: Some("Bad request".to_owned()),
                code: None,
            }
        );
    }

    #[test]
    fn json_error_fields_follow_priority() {
        assert_eq!(
            error_fields_from_json(r#"{"error":{"code":403,"message":"denied"},"message":"x"}"#),
            ErrorFields {
                message: Some("denied".to_owned()),
                code: Some("403".to_owned()),
            }
        );
        assert_eq!(
            error_fields_from_json(r#"{"message":"generic"}"#).message.as_deref(),
            Some("generic")
        );
        assert_eq!(error_fields_from_json("plain text"), ErrorFields::default());
    }
}
