use std::io;

use tendlc::{AssignTns, AssignmentFilter, CampaignId, Credentials, TenDlcClient, Tn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let campaign_id = std::env::var("TENDLC_CAMPAIGN_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TENDLC_CAMPAIGN_ID environment variable is required",
        )
    })?;
    let numbers = std::env::var("TENDLC_NUMBERS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TENDLC_NUMBERS environment variable is required (comma separated)",
        )
    })?;

    let client = TenDlcClient::new(Credentials::from_env()?)?;
    let campaign_id = CampaignId::new(campaign_id)?;
    let tns = numbers
        .split(',')
        .map(Tn::parse)
        .collect::<Result<Vec<_>, _>>()?;

    client
        .assignments()
        .assign(AssignTns::new(campaign_id.clone(), tns)?)
        .await?;

    let assigned = client
        .assignments()
        .list(&AssignmentFilter::Campaign(campaign_id))
        .await?;
    for assignment in assigned {
        println!("{:?} -> {:?}", assignment.tn, assignment.campaign_id);
    }

    Ok(())
}
