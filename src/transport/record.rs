//! Typed field readers over one [`XmlValue`] record.
//!
//! Missing or blank elements read as `None`. Values that are present but do not
//! fit the field's type are reported instead of being silently dropped.

use std::collections::BTreeMap;
use std::str::FromStr;

use super::tree::XmlValue;
use crate::domain::ValidationError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected a <{entity}> record")]
    NotARecord { entity: &'static str },

    #[error("invalid boolean in <{field}>: {value:?}")]
    Boolean { field: &'static str, value: String },

    #[error("invalid integer in <{field}>: {value:?}")]
    Integer { field: &'static str, value: String },

    #[error(transparent)]
    Value(#[from] ValidationError),
}

/// Borrowed view of one entity's child elements.
pub struct Record<'a> {
    children: &'a BTreeMap<String, XmlValue>,
}

impl<'a> Record<'a> {
    pub fn new(value: &'a XmlValue, entity: &'static str) -> Result<Self, DecodeError> {
        value
            .as_map()
            .map(|children| Self { children })
            .ok_or(DecodeError::NotARecord { entity })
    }

    fn raw(&self, field: &'static str) -> Option<&'a str> {
        self.children.get(field).and_then(XmlValue::text)
    }

    fn present(&self, field: &'static str) -> Option<&'a str> {
        self.raw(field).map(str::trim).filter(|value| !value.is_empty())
    }

    /// Text content as sent, including an explicitly empty element.
    pub fn string(&self, field: &'static str) -> Option<String> {
        self.raw(field).map(str::to_owned)
    }

    pub fn boolean(&self, field: &'static str) -> Result<Option<bool>, DecodeError> {
        let Some(value) = self.present(field) else {
            return Ok(None);
        };
        if value.eq_ignore_ascii_case("true") {
            Ok(Some(true))
        } else if value.eq_ignore_ascii_case("false") {
            Ok(Some(false))
        } else {
            Err(DecodeError::Boolean {
                field,
                value: value.to_owned(),
            })
        }
    }

    pub fn integer(&self, field: &'static str) -> Result<Option<i64>, DecodeError> {
        let Some(value) = self.present(field) else {
            return Ok(None);
        };
        value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| DecodeError::Integer {
                field,
                value: value.to_owned(),
            })
    }

    /// Closed enumeration; unknown values are an error.
    pub fn parsed<T>(&self, field: &'static str) -> Result<Option<T>, DecodeError>
    where
        T: FromStr<Err = ValidationError>,
    {
        self.present(field)
            .map(str::parse::<T>)
            .transpose()
            .map_err(DecodeError::from)
    }

    /// Identifier newtype built from its validating constructor.
    pub fn id<T>(
        &self,
        field: &'static str,
        new: impl FnOnce(String) -> Result<T, ValidationError>,
    ) -> Result<Option<T>, DecodeError> {
        self.present(field)
            .map(|value| new(value.to_owned()))
            .transpose()
            .map_err(DecodeError::from)
    }

    /// Wrapper-then-items collection such as `<MnoStatusList><MnoStatus>..`.
    ///
    /// A wrapper holding one item or many is normalized to a list. Blank items
    /// are skipped; a missing wrapper, or one with no non-blank item, is `None`.
    pub fn collection(&self, wrapper: &'static str, item: &'static str) -> Option<Vec<&'a XmlValue>> {
        let items: Vec<&'a XmlValue> = self
            .children
            .get(wrapper)?
            .get(item)?
            .items()
            .into_iter()
            .filter(|node| !node.is_empty())
            .collect();
        (!items.is_empty()).then_some(items)
    }

    /// Wrapper-then-items collection of plain strings.
    pub fn strings(&self, wrapper: &'static str, item: &'static str) -> Option<Vec<String>> {
        self.collection(wrapper, item).map(|items| {
            items
                .into_iter()
                .filter_map(XmlValue::text)
                .map(str::to_owned)
                .collect()
        })
    }
}
