use crate::domain::kind::{AltBusinessIdType, BrandRelationship, EntityType};
use crate::domain::response::{Brand, Campaign};
use crate::domain::validation::ValidationError;
use crate::domain::value::{BrandId, CampaignId, Tn};

/// Default vetting provider (`EvpId`) used by [`BrandVetting::default`].
pub const DEFAULT_VETTING_PROVIDER: &str = "AEGIS";
/// Default vetting class used by [`BrandVetting::default`].
pub const DEFAULT_VETTING_CLASS: &str = "STANDARD";

/// Brand registration payload.
///
/// Server-assigned fields (id, status, vetting data) cannot be set here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBrand {
    pub entity_type: EntityType,
    pub display_name: String,
    pub company_name: String,
    pub ein: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub email: String,
    pub brand_relationship: BrandRelationship,
    pub vertical: String,
    pub alt_business_id: Option<String>,
    pub alt_business_id_type: Option<AltBusinessIdType>,
    pub stock_symbol: Option<String>,
    pub stock_exchange: Option<String>,
    pub website: Option<String>,
    pub business_contact_email: Option<String>,
    pub is_main: Option<bool>,
}

/// Partial brand payload: only the fields that are `Some` are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandUpdate {
    pub entity_type: Option<EntityType>,
    pub alt_business_id: Option<String>,
    pub alt_business_id_type: Option<AltBusinessIdType>,
    pub brand_relationship: Option<BrandRelationship>,
    pub city: Option<String>,
    pub company_name: Option<String>,
    pub country: Option<String>,
    pub display_name: Option<String>,
    pub ein: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub street: Option<String>,
    pub stock_exchange: Option<String>,
    pub stock_symbol: Option<String>,
    pub vertical: Option<String>,
    pub website: Option<String>,
    pub business_contact_email: Option<String>,
    pub is_main: Option<bool>,
}

impl From<NewBrand> for BrandUpdate {
    fn from(value: NewBrand) -> Self {
        Self {
            entity_type: Some(value.entity_type),
            alt_business_id: value.alt_business_id,
            alt_business_id_type: value.alt_business_id_type,
            brand_relationship: Some(value.brand_relationship),
            city: Some(value.city),
            company_name: Some(value.company_name),
            country: Some(value.country),
            display_name: Some(value.display_name),
            ein: Some(value.ein),
            email: Some(value.email),
            phone: Some(value.phone),
            postal_code: Some(value.postal_code),
            state: Some(value.state),
            street: Some(value.street),
            stock_exchange: value.stock_exchange,
            stock_symbol: value.stock_symbol,
            vertical: Some(value.vertical),
            website: value.website,
            business_contact_email: value.business_contact_email,
            is_main: value.is_main,
        }
    }
}

impl From<&Brand> for BrandUpdate {
    /// Keep the client-writable fields of a fetched brand.
    fn from(value: &Brand) -> Self {
        Self {
            entity_type: value.entity_type,
            alt_business_id: value.alt_business_id.clone(),
            alt_business_id_type: value.alt_business_id_type,
            brand_relationship: value.brand_relationship,
            city: value.city.clone(),
            company_name: value.company_name.clone(),
            country: value.country.clone(),
            display_name: value.display_name.clone(),
            ein: value.ein.clone(),
            email: value.email.clone(),
            phone: value.phone.clone(),
            postal_code: value.postal_code.clone(),
            state: value.state.clone(),
            street: value.street.clone(),
            stock_exchange: value.stock_exchange.clone(),
            stock_symbol: value.stock_symbol.clone(),
            vertical: value.vertical.clone(),
            website: value.website.clone(),
            business_contact_email: value.business_contact_email.clone(),
            is_main: value.is_main,
        }
    }
}

/// Campaign registration payload.
///
/// Build it with [`NewCampaign::new`], then set the flags and optional
/// compliance fields directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCampaign {
    pub brand_id: BrandId,
    pub usecase: String,
    pub sub_usecases: Option<Vec<String>>,
    pub description: String,
    pub embedded_link: bool,
    pub embedded_phone: bool,
    pub affiliate_marketing: Option<bool>,
    pub number_pool: Option<bool>,
    pub age_gated: Option<bool>,
    pub direct_lending: Option<bool>,
    pub subscriber_optin: bool,
    pub subscriber_optout: bool,
    pub subscriber_help: bool,
    pub sample1: String,
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
}

impl NewCampaign {
    /// Element name of the mandatory first message sample.
    pub const SAMPLE_FIELD: &'static str = "Sample1";

    /// Create a campaign payload with every flag `false` and no optional fields.
    ///
    /// `usecase`, `description` and `sample1` must be non-empty after trimming.
    pub fn new(
        brand_id: BrandId,
        usecase: impl Into<String>,
        description: impl Into<String>,
        sample1: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let usecase = non_empty(usecase.into(), "Usecase")?;
        let description = non_empty(description.into(), "Description")?;
        let sample1 = non_empty(sample1.into(), Self::SAMPLE_FIELD)?;

        Ok(Self {
            brand_id,
            usecase,
            sub_usecases: None,
            description,
            embedded_link: false,
            embedded_phone: false,
            affiliate_marketing: None,
            number_pool: None,
            age_gated: None,
            direct_lending: None,
            subscriber_optin: false,
            subscriber_optout: false,
            subscriber_help: false,
            sample1,
            sample2: None,
            sample3: None,
            sample4: None,
            sample5: None,
            message_flow: None,
            help_message: None,
            help_keywords: None,
            optin_keywords: None,
            optin_message: None,
            optout_keywords: None,
            optout_message: None,
            privacy_policy_link: None,
            terms_and_conditions_link: None,
            embedded_link_sample: None,
            reference_id: None,
            auto_renewal: None,
        })
    }
}

fn non_empty(value: String, field: &'static str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }
    Ok(value)
}

/// Partial campaign payload: only the fields that are `Some` are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignUpdate {
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
}

impl From<NewCampaign> for CampaignUpdate {
    fn from(value: NewCampaign) -> Self {
        Self {
            brand_id: Some(value.brand_id),
            usecase: Some(value.usecase),
            sub_usecases: value.sub_usecases,
            description: Some(value.description),
            embedded_link: Some(value.embedded_link),
            embedded_phone: Some(value.embedded_phone),
            affiliate_marketing: value.affiliate_marketing,
            number_pool: value.number_pool,
            age_gated: value.age_gated,
            direct_lending: value.direct_lending,
            subscriber_optin: Some(value.subscriber_optin),
            subscriber_optout: Some(value.subscriber_optout),
            subscriber_help: Some(value.subscriber_help),
            sample1: Some(value.sample1),
            sample2: value.sample2,
            sample3: value.sample3,
            sample4: value.sample4,
            sample5: value.sample5,
            message_flow: value.message_flow,
            help_message: value.help_message,
            help_keywords: value.help_keywords,
            optin_keywords: value.optin_keywords,
            optin_message: value.optin_message,
            optout_keywords: value.optout_keywords,
            optout_message: value.optout_message,
            privacy_policy_link: value.privacy_policy_link,
            terms_and_conditions_link: value.terms_and_conditions_link,
            embedded_link_sample: value.embedded_link_sample,
            reference_id: value.reference_id,
            auto_renewal: value.auto_renewal,
        }
    }
}

impl From<&Campaign> for CampaignUpdate {
    /// Keep the client-writable fields of a fetched campaign.
    fn from(value: &Campaign) -> Self {
        Self {
            brand_id: value.brand_id.clone(),
            usecase: value.usecase.clone(),
            sub_usecases: value.sub_usecases.clone(),
            description: value.description.clone(),
            embedded_link: value.embedded_link,
            embedded_phone: value.embedded_phone,
            affiliate_marketing: value.affiliate_marketing,
            number_pool: value.number_pool,
            age_gated: value.age_gated,
            direct_lending: value.direct_lending,
            subscriber_optin: value.subscriber_optin,
            subscriber_optout: value.subscriber_optout,
            subscriber_help: value.subscriber_help,
            sample1: value.sample1.clone(),
            sample2: value.sample2.clone(),
            sample3: value.sample3.clone(),
            sample4: value.sample4.clone(),
            sample5: value.sample5.clone(),
            message_flow: value.message_flow.clone(),
            help_message: value.help_message.clone(),
            help_keywords: value.help_keywords.clone(),
            optin_keywords: value.optin_keywords.clone(),
            optin_message: value.optin_message.clone(),
            optout_keywords: value.optout_keywords.clone(),
            optout_message: value.optout_message.clone(),
            privacy_policy_link: value.privacy_policy_link.clone(),
            terms_and_conditions_link: value.terms_and_conditions_link.clone(),
            embedded_link_sample: value.embedded_link_sample.clone(),
            reference_id: value.reference_id.clone(),
            auto_renewal: value.auto_renewal,
        }
    }
}

/// Bulk assignment of telephone numbers to one campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignTns {
    campaign_id: CampaignId,
    tns: Vec<Tn>,
}

impl AssignTns {
    /// Create an assignment request; at least one number is required.
    pub fn new(campaign_id: CampaignId, tns: Vec<Tn>) -> Result<Self, ValidationError> {
        if tns.is_empty() {
            return Err(ValidationError::Empty { field: Tn::FIELD });
        }
        Ok(Self { campaign_id, tns })
    }

    pub fn campaign_id(&self) -> &CampaignId {
        &self.campaign_id
    }

    pub fn tns(&self) -> &[Tn] {
        &self.tns
    }
}

/// Bulk removal of telephone numbers from whatever campaign holds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnassignTns {
    tns: Vec<Tn>,
}

impl UnassignTns {
    /// Create an unassignment request; at least one number is required.
    pub fn new(tns: Vec<Tn>) -> Result<Self, ValidationError> {
        if tns.is_empty() {
            return Err(ValidationError::Empty { field: Tn::FIELD });
        }
        Ok(Self { tns })
    }

    pub fn tns(&self) -> &[Tn] {
        &self.tns
    }
}

/// Vetting request sent for an existing brand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandVetting {
    pub evp_id: String,
    pub vetting_class: String,
}

impl Default for BrandVetting {
    fn default() -> Self {
        Self {
            evp_id: DEFAULT_VETTING_PROVIDER.to_owned(),
            vetting_class: DEFAULT_VETTING_CLASS.to_owned(),
        }
    }
}

/// Filters for listing campaigns.
///
/// `page` and `size` are only sent when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignListQuery {
    pub brand_id: Option<BrandId>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl CampaignListQuery {
    /// List the campaigns registered under one brand.
    pub fn for_brand(brand_id: BrandId) -> Self {
        Self {
            brand_id: Some(brand_id),
            ..Default::default()
        }
    }

    /// Request one page of results.
    pub fn page(mut self, page: u32, size: u32) -> Self {
        self.page = Some(page);
        self.size = Some(size);
        self
    }
}

/// Which assignments to list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AssignmentFilter {
    #[default]
    All,
    Campaign(CampaignId),
    Tn(Tn),
}
