use serde_json::json;
use url::form_urlencoded;

use super::TenDlcError;
use super::session::{RequestBody, Session};
use crate::domain::{Campaign, CampaignId, CampaignListQuery, CampaignUpdate, NewCampaign};
use crate::transport::decode_campaign;

const CAMPAIGNS: &str = "/campaignManagement/10dlc/campaigns";
const ENTITY: &str = "campaign";

const CAMPAIGN: &[&[&str]] = &[&["campaign"], &["campaignresponse", "campaign"]];
const CAMPAIGN_LIST: &[&[&str]] = &[&["campaigns", "campaign"]];

/// Campaign registration endpoints. Obtained from [`TenDlcClient::campaigns`](super::TenDlcClient::campaigns).
#[derive(Clone, Copy)]
pub struct Campaigns<'a> {
    pub(crate) session: &'a Session,
}

fn campaign_path(campaign_id: &CampaignId) -> String {
    format!("{CAMPAIGNS}/{}", campaign_id.as_str())
}

fn list_path(query: &CampaignListQuery) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    if let Some(brand_id) = &query.brand_id {
        params.append_pair("brandId", brand_id.as_str());
    }
    if let (Some(page), Some(size)) = (query.page, query.size) {
        params.append_pair("page", &page.to_string());
        params.append_pair("size", &size.to_string());
    }
    let params = params.finish();
    if params.is_empty() {
        CAMPAIGNS.to_owned()
    } else {
        format!("{CAMPAIGNS}?{params}")
    }
}

impl Campaigns<'_> {
    /// List campaigns, optionally for one brand and one page.
    pub async fn list(self, query: &CampaignListQuery) -> Result<Vec<Campaign>, TenDlcError> {
        self.session
            .get(&list_path(query))
            .await?
            .collection(CAMPAIGN_LIST, decode_campaign)
    }

    pub async fn get(self, campaign_id: &CampaignId) -> Result<Campaign, TenDlcError> {
        self.session
            .get(&campaign_path(campaign_id))
            .await?
            .entity(CAMPAIGN, decode_campaign, TenDlcError::NotFound { entity: ENTITY })
    }

    pub async fn create(self, campaign: NewCampaign) -> Result<Campaign, TenDlcError> {
        self.session
            .post(CAMPAIGNS, Some(RequestBody::Campaign(campaign.into())))
            .await?
            .entity(CAMPAIGN, decode_campaign, TenDlcError::failed("create", ENTITY))
    }

    pub async fn update(
        self,
        campaign_id: &CampaignId,
        update: CampaignUpdate,
    ) -> Result<Campaign, TenDlcError> {
        self.session
            .put(&campaign_path(campaign_id), RequestBody::Campaign(update))
            .await?
            .entity(CAMPAIGN, decode_campaign, TenDlcError::failed("update", ENTITY))
    }

    pub async fn delete(self, campaign_id: &CampaignId) -> Result<(), TenDlcError> {
        self.session.delete(&campaign_path(campaign_id), None).await?;
        Ok(())
    }

    /// Link a campaign to its record in The Campaign Registry.
    ///
    /// This endpoint takes JSON rather than XML.
    pub async fn import_tcr(
        self,
        campaign_id: &CampaignId,
        tcr_campaign_id: &str,
    ) -> Result<Campaign, TenDlcError> {
        let body = RequestBody::Json(json!({ "tcrCampaignId": tcr_campaign_id }));
        self.session
            .post(&format!("{}/tcr", campaign_path(campaign_id)), Some(body))
            .await?
            .entity(CAMPAIGN, decode_campaign, TenDlcError::failed("import", ENTITY))
    }
}
