//! Transport layer: XML wire format and token grant details.

mod assignment;
mod brand;
mod campaign;
mod envelope;
mod error_body;
mod record;
mod token;
mod tree;
mod writer;

pub use assignment::{decode_assignment, encode_assign_xml, encode_unassign_xml};
pub use brand::{decode_brand, encode_brand_vetting_xml, encode_brand_xml};
pub use campaign::{decode_campaign, encode_campaign_xml};
pub use envelope::{find_collection, find_entity};
pub use error_body::{error_fields_from_json, error_fields_from_xml};
pub use record::DecodeError;
pub use token::{TokenError, decode_token_response, encode_token_form};
pub use tree::{XmlError, XmlValue, looks_like_xml, parse_xml};
