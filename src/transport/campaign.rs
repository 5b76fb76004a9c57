use super::record::{DecodeError, Record};
use super::tree::XmlValue;
use super::writer::XmlWriter;
use crate::domain::{BrandId, Campaign, CampaignId, CampaignUpdate, MnoMetadata, MnoStatus};

/// Serialize a (possibly partial) campaign into a `<Campaign>` document.
///
/// Element order is part of the wire contract and must not be changed.
pub fn encode_campaign_xml(campaign: &CampaignUpdate) -> String {
    XmlWriter::new("Campaign")
        .text("BrandId", campaign.brand_id.as_ref().map(BrandId::as_str))
        .text("Usecase", campaign.usecase.as_deref())
        .list(
            "SubUsecases",
            "SubUsecase",
            campaign
                .sub_usecases
                .as_ref()
                .map(|items| items.iter().map(String::as_str)),
        )
        .text("Description", campaign.description.as_deref())
        .boolean("EmbeddedLink", campaign.embedded_link)
        .boolean("EmbeddedPhone", campaign.embedded_phone)
        .boolean("AffiliateMarketing", campaign.affiliate_marketing)
        .boolean("NumberPool", campaign.number_pool)
        .boolean("AgeGated", campaign.age_gated)
        .boolean("DirectLending", campaign.direct_lending)
        .boolean("SubscriberOptin", campaign.subscriber_optin)
        .boolean("SubscriberOptout", campaign.subscriber_optout)
        .boolean("SubscriberHelp", campaign.subscriber_help)
        .text("Sample1", campaign.sample1.as_deref())
        .text("Sample2", campaign.sample2.as_deref())
        .text("Sample3", campaign.sample3.as_deref())
        .text("Sample4", campaign.sample4.as_deref())
        .text("Sample5", campaign.sample5.as_deref())
        .text("MessageFlow", campaign.message_flow.as_deref())
        .text("HelpMessage", campaign.help_message.as_deref())
        .text("HelpKeywords", campaign.help_keywords.as_deref())
        .text("OptinKeywords", campaign.optin_keywords.as_deref())
        .text("OptinMessage", campaign.optin_message.as_deref())
        .text("OptoutKeywords", campaign.optout_keywords.as_deref())
        .text("OptoutMessage", campaign.optout_message.as_deref())
        .text("PrivacyPolicyLink", campaign.privacy_policy_link.as_deref())
        .text(
            "TermsAndConditionsLink",
            campaign.terms_and_conditions_link.as_deref(),
        )
        .text("EmbeddedLinkSample", campaign.embedded_link_sample.as_deref())
        .text("ReferenceId", campaign.reference_id.as_deref())
        .boolean("AutoRenewal", campaign.auto_renewal)
        .finish()
}

/// Map one parsed `<Campaign>` record to a [`Campaign`].
pub fn decode_campaign(value: &XmlValue) -> Result<Campaign, DecodeError> {
    let record = Record::new(value, "Campaign")?;

    let mno_metadata = record
        .collection("mnometadatalist", "mnometadata")
        .map(|items| items.into_iter().map(decode_mno_metadata).collect::<Result<Vec<_>, _>>())
        .transpose()?;
    let mno_statuses = record
        .collection("mnostatuslist", "mnostatus")
        .map(|items| items.into_iter().map(decode_mno_status).collect::<Result<Vec<_>, _>>())
        .transpose()?;

    Ok(Campaign {
        campaign_id: record.id("campaignid", CampaignId::new)?,
        account_id: record.string("accountid"),
        brand_id: record.id("brandid", BrandId::new)?,
        usecase: record.string("usecase"),
        sub_usecases: record.strings("subusecases", "subusecase"),
        description: record.string("description"),
        embedded_link: record.boolean("embeddedlink")?,
        embedded_phone: record.boolean("embeddedphone")?,
        affiliate_marketing: record.boolean("affiliatemarketing")?,
        number_pool: record.boolean("numberpool")?,
        age_gated: record.boolean("agegated")?,
        direct_lending: record.boolean("directlending")?,
        subscriber_optin: record.boolean("subscriberoptin")?,
        subscriber_optout: record.boolean("subscriberoptout")?,
        subscriber_help: record.boolean("subscriberhelp")?,
        sample1: record.string("sample1"),
        sample2: record.string("sample2"),
        sample3: record.string("sample3"),
        sample4: record.string("sample4"),
        sample5: record.string("sample5"),
        message_flow: record.string("messageflow"),
        help_message: record.string("helpmessage"),
        help_keywords: record.string("helpkeywords"),
        optin_keywords: record.string("optinkeywords"),
        optin_message: record.string("optinmessage"),
        optout_keywords: record.string("optoutkeywords"),
        optout_message: record.string("optoutmessage"),
        privacy_policy_link: record.string("privacypolicylink"),
        terms_and_conditions_link: record.string("termsandconditionslink"),
        embedded_link_sample: record.string("embeddedlinksample"),
        reference_id: record.string("referenceid"),
        auto_renewal: record.boolean("autorenewal")?,
        status: record.parsed("status")?,
        create_date: record.string("createdate"),
        billed_date: record.string("billeddate"),
        mno_metadata,
        mno_statuses,
    })
}

fn decode_mno_metadata(value: &XmlValue) -> Result<MnoMetadata, DecodeError> {
    let record = Record::new(value, "MnoMetadata")?;
    Ok(MnoMetadata {
        mno: record.string("mno"),
        mno_id: record.string("mnoid"),
        qualify: record.boolean("qualify")?,
        tpm: record.integer("tpm")?,
        tpm_scope: record.string("tpmscope"),
        daily_cap: record.integer("dailycap")?,
        brand_tier: record.string("brandtier"),
        msg_class: record.string("msgclass"),
        min_msg_samples: record.integer("minmsgsamples")?,
        mno_review: record.boolean("mnoreview")?,
        mno_support: record.boolean("mnosupport")?,
        req_subscriber_help: record.boolean("reqsubscriberhelp")?,
        req_subscriber_optin: record.boolean("reqsubscriberoptin")?,
        req_subscriber_optout: record.boolean("reqsubscriberoptout")?,
        no_embedded_link: record.boolean("noembeddedlink")?,
        no_embedded_phone: record.boolean("noembeddedphone")?,
    })
}

fn decode_mno_status(value: &XmlValue) -> Result<MnoStatus, DecodeError> {
    let record = Record::new(value, "MnoStatus")?;
    Ok(MnoStatus {
        mno_name: record.string("mnoname"),
        mno_id: record.string("mnoid"),
        status: record.string("status"),
    })
}
