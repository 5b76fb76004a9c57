use super::record::{DecodeError, Record};
use super::tree::XmlValue;
use super::writer::XmlWriter;
use crate::domain::{AssignTns, CampaignAssignment, CampaignId, Tn, UnassignTns};

pub fn encode_assign_xml(request: &AssignTns) -> String {
    encode_assignment_xml(Some(request.campaign_id()), request.tns())
}

pub fn encode_unassign_xml(request: &UnassignTns) -> String {
    encode_assignment_xml(None, request.tns())
}

fn encode_assignment_xml(campaign_id: Option<&CampaignId>, tns: &[Tn]) -> String {
    XmlWriter::new("CampaignAssignment")
        .text("CampaignId", campaign_id.map(CampaignId::as_str))
        .list("Tns", "Tn", Some(tns.iter().map(Tn::raw)))
        .finish()
}

pub fn decode_assignment(value: &XmlValue) -> Result<CampaignAssignment, DecodeError> {
    let record = Record::new(value, "AssignmentRequest")?;
    Ok(CampaignAssignment {
        campaign_id: record.id("campaignid", CampaignId::new)?,
        tn: record.id("tn", Tn::new)?,
    })
}
