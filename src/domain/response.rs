use crate::domain::kind::{
    AltBusinessIdType, BrandRelationship, CampaignStatus, EntityType, IdentityStatus, TcpStatus,
};
use crate::domain::value::{BrandId, CampaignId, Tn};

/// Brand record as returned by the registry.
///
/// Every field is optional: the server decides what it returns, and a key
/// missing from the response is kept as `None` rather than guessed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Brand {
    pub brand_id: Option<BrandId>,
    pub account_id: Option<String>,
    pub entity_type: Option<EntityType>,
    pub display_name: Option<String>,
    pub company_name: Option<String>,
    pub ein: Option<String>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub stock_symbol: Option<String>,
    pub stock_exchange: Option<String>,
    pub ip_address: Option<String>,
    pub website: Option<String>,
    pub brand_relationship: Option<BrandRelationship>,
    pub vertical: Option<String>,
    pub alt_business_id: Option<String>,
    pub alt_business_id_type: Option<AltBusinessIdType>,
    pub identity_status: Option<IdentityStatus>,
    pub tcp_status: Option<TcpStatus>,
    pub vetting_score: Option<i64>,
    pub vetting_provider: Option<String>,
    pub vetting_date: Option<String>,
    pub create_date: Option<String>,
    pub csp_id: Option<String>,
    pub universal_ein: Option<String>,
    pub is_main: Option<bool>,
    pub business_contact_email: Option<String>,
}

/// Campaign record as returned by the registry.
///
/// `mno_metadata` and `mno_statuses` distinguish "not returned" (`None`)
/// from "returned empty" (`Some(vec![])`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Campaign {
    pub campaign_id: Option<CampaignId>,
    pub account_id: Option<String>,
    pub brand_id: Option<BrandId>,
    pub usecase: Option<String>,
    pub sub_usecases: Option<Vec<String>>,
    pub description: Option<String>,
    pub embedded_link: Option<bool>,
    pub embedded_phone: Option<bool>,
    pub affiliate_marketing: Option<bool>,
    pub number_pool: Option<bool>,
    pub age_gated: Option<bool>,
    pub direct_lending: Option<bool>,
    pub subscriber_optin: Option<bool>,
    pub subscriber_optout: Option<bool>,
    pub subscriber_help: Option<bool>,
    pub sample1: Option<String>,
    pub sample2: Option<String>,
    pub sample3: Option<String>,
    pub sample4: Option<String>,
    pub sample5: Option<String>,
    pub message_flow: Option<String>,
    pub help_message: Option<String>,
    pub help_keywords: Option<String>,
    pub optin_keywords: Option<String>,
    pub optin_message: Option<String>,
    pub optout_keywords: Option<String>,
    pub optout_message: Option<String>,
    pub privacy_policy_link: Option<String>,
    pub terms_and_conditions_link: Option<String>,
    pub embedded_link_sample: Option<String>,
    pub reference_id: Option<String>,
    pub auto_renewal: Option<bool>,
    pub status: Option<CampaignStatus>,
    pub create_date: Option<String>,
    pub billed_date: Option<String>,
    pub mno_metadata: Option<Vec<MnoMetadata>>,
    pub mno_statuses: Option<Vec<MnoStatus>>,
}

/// Per-operator qualification rules attached to a campaign. Response only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MnoMetadata {
    pub mno: Option<String>,
    pub mno_id: Option<String>,
    pub qualify: Option<bool>,
    pub tpm: Option<i64>,
    pub tpm_scope: Option<String>,
    pub daily_cap: Option<i64>,
    pub brand_tier: Option<String>,
    pub msg_class: Option<String>,
    pub min_msg_samples: Option<i64>,
    pub mno_review: Option<bool>,
    pub mno_support: Option<bool>,
    pub req_subscriber_help: Option<bool>,
    pub req_subscriber_optin: Option<bool>,
    pub req_subscriber_optout: Option<bool>,
    pub no_embedded_link: Option<bool>,
    pub no_embedded_phone: Option<bool>,
}

/// Per-operator approval status of a campaign. Response only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MnoStatus {
    pub mno_name: Option<String>,
    pub mno_id: Option<String>,
    pub status: Option<String>,
}

/// Link between a campaign and one telephone number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignAssignment {
    pub campaign_id: Option<CampaignId>,
    pub tn: Option<Tn>,
}
