use tendlc::{CampaignListQuery, Credentials, TenDlcClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = TenDlcClient::new(Credentials::from_env()?)?;

    for brand in client.brands().list().await? {
        println!(
            "brand {:?}: {:?} ({:?})",
            brand.brand_id, brand.display_name, brand.identity_status
        );
        let Some(brand_id) = brand.brand_id else {
            continue;
        };
        let campaigns = client
            .campaigns()
            .list(&CampaignListQuery::for_brand(brand_id))
            .await?;
        for campaign in campaigns {
            println!(
                "  campaign {:?}: {:?} status={:?}",
                campaign.campaign_id, campaign.usecase, campaign.status
            );
        }
    }

    Ok(())
}
