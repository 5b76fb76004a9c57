use url::form_urlencoded;

use super::TenDlcError;
use super::session::{RequestBody, Session};
use crate::domain::{AssignTns, AssignmentFilter, CampaignAssignment, UnassignTns};
use crate::transport::decode_assignment;

const ASSIGNMENTS: &str = "/campaignManagement/10dlc/assignmentRequests";

const ASSIGNMENT_LIST: &[&[&str]] = &[
    &["assignmentrequestsresponse", "assignmentrequests", "assignmentrequest"],
    &["assignmentrequests", "assignmentrequest"],
];

/// Number-to-campaign assignment endpoints.
/// Obtained from [`TenDlcClient::assignments`](super::TenDlcClient::assignments).
#[derive(Clone, Copy)]
pub struct CampaignAssignments<'a> {
    pub(crate) session: &'a Session,
}

fn list_path(filter: &AssignmentFilter) -> String {
    let pair = match filter {
        AssignmentFilter::All => return ASSIGNMENTS.to_owned(),
        AssignmentFilter::Campaign(campaign_id) => ("campaignId", campaign_id.as_str()),
        AssignmentFilter::Tn(tn) => ("tn", tn.raw()),
    };
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(pair.0, pair.1)
        .finish();
    format!("{ASSIGNMENTS}?{query}")
}

impl CampaignAssignments<'_> {
    pub async fn list(self, filter: &AssignmentFilter) -> Result<Vec<CampaignAssignment>, TenDlcError> {
        self.session
            .get(&list_path(filter))
            .await?
            .collection(ASSIGNMENT_LIST, decode_assignment)
    }

    /// Assign every number in `request` to its campaign.
    pub async fn assign(self, request: AssignTns) -> Result<(), TenDlcError> {
        self.session
            .post(ASSIGNMENTS, Some(RequestBody::Assign(request)))
            .await?;
        Ok(())
    }

    /// Remove the numbers from whichever campaign holds them.
    pub async fn unassign(self, request: UnassignTns) -> Result<(), TenDlcError> {
        self.session
            .delete(ASSIGNMENTS, Some(RequestBody::Unassign(request)))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CampaignId, Tn};

    #[test]
    fn filters_become_query_parameters() {
        assert_eq!(list_path(&AssignmentFilter::All), ASSIGNMENTS);
        assert_eq!(
            list_path(&AssignmentFilter::Campaign(CampaignId::new("CA1").unwrap())),
            "/campaignManagement/10dlc/assignmentRequests?campaignId=CA1"
        );
        assert_eq!(
            list_path(&AssignmentFilter::Tn(Tn::new("+19195551234").unwrap())),
            "/campaignManagement/10dlc/assignmentRequests?tn=%2B19195551234"
        );
    }
}
