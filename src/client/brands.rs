use super::TenDlcError;
use super::session::{RequestBody, ResponseBody, Session};
use crate::domain::{Brand, BrandId, BrandUpdate, BrandVetting, NewBrand};
use crate::transport::decode_brand;

const BRANDS: &str = "/campaignManagement/10dlc/brands";
const ENTITY: &str = "brand";

const BRAND: &[&[&str]] = &[&["brand"], &["brandresponse", "brand"]];
const BRAND_LIST: &[&[&str]] = &[&["brands", "brand"]];

/// Brand registration endpoints. Obtained from [`TenDlcClient::brands`](super::TenDlcClient::brands).
#[derive(Clone, Copy)]
pub struct Brands<'a> {
    pub(crate) session: &'a Session,
}

fn brand_path(brand_id: &BrandId) -> String {
    format!("{BRANDS}/{}", brand_id.as_str())
}

impl Brands<'_> {
    /// List every brand on the account, in server order.
    pub async fn list(self) -> Result<Vec<Brand>, TenDlcError> {
        self.session
            .get(&format!("{BRANDS}/details?type=none"))
            .await?
            .collection(BRAND_LIST, decode_brand)
    }

    pub async fn get(self, brand_id: &BrandId) -> Result<Brand, TenDlcError> {
        self.session
            .get(&brand_path(brand_id))
            .await?
            .entity(BRAND, decode_brand, TenDlcError::NotFound { entity: ENTITY })
    }

    /// Register a new brand and return the server's record of it.
    pub async fn create(self, brand: NewBrand) -> Result<Brand, TenDlcError> {
        self.session
            .post(BRANDS, Some(RequestBody::Brand(brand.into())))
            .await?
            .entity(BRAND, decode_brand, TenDlcError::failed("create", ENTITY))
    }

    /// Send only the fields present in `update`.
    pub async fn update(self, brand_id: &BrandId, update: BrandUpdate) -> Result<Brand, TenDlcError> {
        self.session
            .put(&brand_path(brand_id), RequestBody::Brand(update))
            .await?
            .entity(BRAND, decode_brand, TenDlcError::failed("update", ENTITY))
    }

    pub async fn delete(self, brand_id: &BrandId) -> Result<(), TenDlcError> {
        self.session.delete(&brand_path(brand_id), None).await?;
        Ok(())
    }

    /// Import the brand's record from The Campaign Registry.
    pub async fn import_tcr(self, brand_id: &BrandId) -> Result<Brand, TenDlcError> {
        self.session
            .post(&format!("{}/tcr", brand_path(brand_id)), None)
            .await?
            .entity(BRAND, decode_brand, TenDlcError::failed("import", ENTITY))
    }

    /// Trigger external vetting. The response shape varies by provider, so it is returned as parsed.
    pub async fn vet(
        self,
        brand_id: &BrandId,
        vetting: BrandVetting,
    ) -> Result<ResponseBody, TenDlcError> {
        self.session
            .post(
                &format!("{}/vetting", brand_path(brand_id)),
                Some(RequestBody::BrandVetting(vetting)),
            )
            .await
    }
}
