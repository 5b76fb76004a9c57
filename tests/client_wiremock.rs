use std::time::Duration;

use tendlc::{
    AssignTns, BrandId, CampaignId, Credentials, TenDlcClient, TenDlcError, Tn,
};
use wiremock::matchers::{basic_auth, bearer_token, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT: &str = "9900001";

fn client_for(server: &MockServer) -> TenDlcClient {
    TenDlcClient::builder(Credentials::new(ACCOUNT, "api-user", "s3cret").unwrap())
        .base_url(format!("{}/api/v1", server.uri()))
        .auth_url(format!("{}/oauth2/token", server.uri()))
        .timeout(Duration::from_secs(5))
        .user_agent("tendlc-tests")
        .build()
        .unwrap()
}

fn grant(token: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "access_token": token,
        "token_type": "Bearer",
        "expires_in": 3600,
    }))
}

fn xml(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_owned(), "application/xml")
}

#[tokio::test]
async fn lists_brands_through_the_real_transport() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(basic_auth("api-user", "s3cret"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("grant_type=client_credentials"))
        .respond_with(grant("tok-1"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!(
            "/api/v1/accounts/{ACCOUNT}/campaignManagement/10dlc/brands/details"
        )))
        .and(query_param("type", "none"))
        .and(bearer_token("tok-1"))
        .and(header("accept", "application/xml"))
        .and(header("content-type", "application/xml"))
        .respond_with(xml(
            "<?xml version=\"1.0\"?><BrandsResponse><Brands>\
               <Brand><BrandId>B1</BrandId><IsMain>true</IsMain></Brand>\
               <Brand><BrandId>B2</BrandId><VettingScore>71</VettingScore></Brand>\
             </Brands></BrandsResponse>",
        ))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let brands = client.brands().list().await.unwrap();
    client.brands().list().await.unwrap();

    assert_eq!(brands.len(), 2);
    assert_eq!(brands[0].brand_id, Some(BrandId::new("B1").unwrap()));
    assert_eq!(brands[0].is_main, Some(true));
    assert_eq!(brands[1].vetting_score, Some(71));
}

#[tokio::test]
async fn retries_once_with_a_fresh_token_after_401() {
    let server = MockServer::start().await;
    Mock::given(path("/oauth2/token"))
        .respond_with(grant("stale"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(path("/oauth2/token"))
        .respond_with(grant("fresh"))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(bearer_token("stale"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(bearer_token("fresh"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client
        .campaigns()
        .delete(&CampaignId::new("CA1").unwrap())
        .await
        .unwrap();
}

#[tokio::test]
async fn assignment_body_is_sent_as_xml() {
    let server = MockServer::start().await;
    Mock::given(path("/oauth2/token"))
        .respond_with(grant("tok"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!(
            "/api/v1/accounts/{ACCOUNT}/campaignManagement/10dlc/assignmentRequests"
        )))
        .and(header("content-type", "application/xml"))
        .and(body_string(
            "<CampaignAssignment>\n  <CampaignId>CA1</CampaignId>\n  <Tns>\n    <Tn>+19195551234</Tn>\n  </Tns>\n</CampaignAssignment>",
        ))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let request = AssignTns::new(
        CampaignId::new("CA1").unwrap(),
        vec![Tn::new("+19195551234").unwrap()],
    )
    .unwrap();
    client.assignments().assign(request).await.unwrap();
}

#[tokio::test]
async fn rejected_credentials_surface_as_authentication_error() {
    let server = MockServer::start().await;
    Mock::given(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid_client"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .brands()
        .get(&BrandId::new("B1").unwrap())
        .await
        .unwrap_err();

    assert!(matches!(err, TenDlcError::Authentication(_)));
    assert_eq!(err.status(), Some(401));
}
