//! Domain layer: strong types with validation and invariants (no I/O).

mod kind;
mod request;
mod response;
mod validation;
mod value;

pub use kind::{
    AltBusinessIdType, BrandRelationship, CampaignStatus, EntityType, IdentityStatus, TcpStatus,
};
pub use request::{
    AssignTns, AssignmentFilter, BrandUpdate, BrandVetting, CampaignListQuery, CampaignUpdate,
    DEFAULT_VETTING_CLASS, DEFAULT_VETTING_PROVIDER, NewBrand, NewCampaign, UnassignTns,
};
pub use response::{Brand, Campaign, CampaignAssignment, MnoMetadata, MnoStatus};
pub use validation::ValidationError;
pub use value::{AccountId, BrandId, CampaignId, Password, PhoneNumber, Tn, Username};

#[cfg(test)]
mod tests {
    use super::*;

    fn brand_id() -> BrandId {
        BrandId::new("B1GZ2X").unwrap()
    }

    #[test]
    fn new_campaign_requires_a_sample() {
        assert!(matches!(
            NewCampaign::new(brand_id(), "MARKETING", "Promotions", "   "),
            Err(ValidationError::Empty { field: "Sample1" })
        ));
        assert!(matches!(
            NewCampaign::new(brand_id(), "", "Promotions", "Hi"),
            Err(ValidationError::Empty { field: "Usecase" })
        ));
    }

    #[test]
    fn new_campaign_defaults_flags_to_false() {
        let campaign = NewCampaign::new(brand_id(), "MARKETING", "Promotions", "Hi").unwrap();
        assert!(!campaign.embedded_link);
        assert!(!campaign.subscriber_optin);
        assert_eq!(campaign.sample2, None);
    }

    #[test]
    fn assign_tns_requires_numbers() {
        let campaign_id = CampaignId::new("CA3XKE1").unwrap();
        assert!(matches!(
            AssignTns::new(campaign_id, Vec::new()),
            Err(ValidationError::Empty { field: "Tn" })
        ));
        assert!(UnassignTns::new(Vec::new()).is_err());
    }

    #[test]
    fn brand_vetting_defaults() {
        let vetting = BrandVetting::default();
        assert_eq!(vetting.evp_id, "AEGIS");
        assert_eq!(vetting.vetting_class, "STANDARD");
    }

    #[test]
    fn campaign_list_query_builders() {
        let query = CampaignListQuery::for_brand(brand_id()).page(1, 5);
        assert_eq!(query.brand_id, Some(brand_id()));
        assert_eq!(query.page, Some(1));
        assert_eq!(query.size, Some(5));
    }

    #[test]
    fn brand_update_from_fetched_brand_drops_server_fields() {
        let brand = Brand {
            brand_id: Some(brand_id()),
            account_id: Some("9900001".to_owned()),
            display_name: Some("Acme".to_owned()),
            identity_status: Some(IdentityStatus::Verified),
            is_main: Some(true),
            ..Default::default()
        };
        let update = BrandUpdate::from(&brand);
        assert_eq!(update.display_name.as_deref(), Some("Acme"));
        assert_eq!(update.is_main, Some(true));
        assert_eq!(update.entity_type, None);
    }

    #[test]
    fn campaign_update_from_new_campaign_marks_required_fields_present() {
        let mut campaign = NewCampaign::new(brand_id(), "MARKETING", "Promotions", "Hi").unwrap();
        campaign.subscriber_optout = true;
        let update = CampaignUpdate::from(campaign);
        assert_eq!(update.brand_id, Some(brand_id()));
        assert_eq!(update.embedded_link, Some(false));
        assert_eq!(update.subscriber_optout, Some(true));
        assert_eq!(update.auto_renewal, None);
    }
}
