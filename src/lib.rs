//! Typed Rust client for the Bandwidth 10DLC campaign-registry API.
//!
//! The crate keeps three layers apart: a domain layer of strong types, a
//! transport layer for the XML wire format and its quirks, and a small client
//! layer that authenticates and orchestrates requests.
//!
//! ```rust,no_run
//! use tendlc::{CampaignListQuery, Credentials, TenDlcClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), tendlc::TenDlcError> {
//!     let client = TenDlcClient::new(Credentials::from_env()?)?;
//!     for brand in client.brands().list().await? {
//!         let Some(brand_id) = brand.brand_id else { continue };
//!         let query = CampaignListQuery::for_brand(brand_id);
//!         let _campaigns = client.campaigns().list(&query).await?;
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ApiErrorCode, AuthError, Brands, CampaignAssignments, Campaigns, Credentials, RequestContext,
    ResponseBody, ResponseContext, TenDlcClient, TenDlcClientBuilder, TenDlcError,
};
pub use domain::{
    AccountId, AltBusinessIdType, AssignTns, AssignmentFilter, Brand, BrandId, BrandRelationship,
    BrandUpdate, BrandVetting, Campaign, CampaignAssignment, CampaignId, CampaignListQuery,
    CampaignStatus, CampaignUpdate, EntityType, IdentityStatus, MnoMetadata, MnoStatus, NewBrand,
    NewCampaign, Password, PhoneNumber, TcpStatus, Tn, UnassignTns, Username, ValidationError,
};
pub use transport::{DecodeError, TokenError, XmlError, XmlValue, looks_like_xml, parse_xml};
