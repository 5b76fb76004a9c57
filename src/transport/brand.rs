use super::record::{DecodeError, Record};
use super::tree::XmlValue;
use super::writer::XmlWriter;
use crate::domain::{Brand, BrandId, BrandUpdate, BrandVetting};

/// Serialize a (possibly partial) brand into a `<Brand>` document.
///
/// Element order is part of the wire contract and must not be changed.
pub fn encode_brand_xml(brand: &BrandUpdate) -> String {
    XmlWriter::new("Brand")
        .text("EntityType", brand.entity_type.map(|it| it.as_str()))
        .text("AltBusinessId", brand.alt_business_id.as_deref())
        .text(
            "AltBusinessIdType",
            brand.alt_business_id_type.map(|it| it.as_str()),
        )
        .text(
            "BrandRelationship",
            brand.brand_relationship.map(|it| it.as_str()),
        )
        .text("City", brand.city.as_deref())
        .text("CompanyName", brand.company_name.as_deref())
        .text("Country", brand.country.as_deref())
        .text("DisplayName", brand.display_name.as_deref())
        .text("Ein", brand.ein.as_deref())
        .text("Email", brand.email.as_deref())
        .text("Phone", brand.phone.as_deref())
        .text("PostalCode", brand.postal_code.as_deref())
        .text("State", brand.state.as_deref())
        .text("Street", brand.street.as_deref())
        .text("StockExchange", brand.stock_exchange.as_deref())
        .text("StockSymbol", brand.stock_symbol.as_deref())
        .text("Vertical", brand.vertical.as_deref())
        .text("Website", brand.website.as_deref())
        .text(
            "BusinessContactEmail",
            brand.business_contact_email.as_deref(),
        )
        .boolean("IsMain", brand.is_main)
        .finish()
}

/// Serialize a vetting request. The endpoint expects this exact compact form.
pub fn encode_brand_vetting_xml(vetting: &BrandVetting) -> String {
    format!(
        "<BrandVetting><EvpId>{}</EvpId><VettingClass>{}</VettingClass></BrandVetting>",
        quick_xml::escape::escape(vetting.evp_id.as_str()),
        quick_xml::escape::escape(vetting.vetting_class.as_str()),
    )
}

/// Map one parsed `<Brand>` record to a [`Brand`].
pub fn decode_brand(value: &XmlValue) -> Result<Brand, DecodeError> {
    let record = Record::new(value, "Brand")?;
    Ok(Brand {
        brand_id: record.id("brandid", BrandId::new)?,
        account_id: record.string("accountid"),
        entity_type: record.parsed("entitytype")?,
        display_name: record.string("displayname"),
        company_name: record.string("companyname"),
        ein: record.string("ein"),
        phone: record.string("phone"),
        street: record.string("street"),
        city: record.string("city"),
        state: record.string("state"),
        postal_code: record.string("postalcode"),
        country: record.string("country"),
        email: record.string("email"),
        stock_symbol: record.string("stocksymbol"),
        stock_exchange: record.string("stockexchange"),
        ip_address: record.string("ipaddress"),
        website: record.string("website"),
        brand_relationship: record.parsed("brandrelationship")?,
        vertical: record.string("vertical"),
        alt_business_id: record.string("altbusinessid"),
        alt_business_id_type: record.parsed("altbusinessidtype")?,
        identity_status: record.parsed("identitystatus")?,
        tcp_status: record.parsed("tcpstatus")?,
        vetting_score: record.integer("vettingscore")?,
        vetting_provider: record.string("vettingprovider"),
        vetting_date: record.string("vettingdate"),
        create_date: record.string("createdate"),
        csp_id: record.string("cspid"),
        universal_ein: record.string("universalein"),
        is_main: record.boolean("ismain")?,
        business_contact_email: record.string("businesscontactemail"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AltBusinessIdType, BrandRelationship, EntityType, IdentityStatus, NewBrand,
    };
    use crate::transport::tree::parse_xml;

    fn new_brand() -> NewBrand {
        NewBrand {
            entity_type: EntityType::PrivateProfit,
            display_name: "Acme".to_owned(),
            company_name: "Acme Inc.".to_owned(),
            ein: "12-3456789".to_owned(),
            phone: "+19195551234".to_owned(),
            street: "1 Main St".to_owned(),
            city: "Raleigh".to_owned(),
            state: "NC".to_owned(),
            postal_code: "27606".to_owned(),
            country: "US".to_owned(),
            email: "ops@acme.test".to_owned(),
            brand_relationship: BrandRelationship::BasicAccount,
            vertical: "TECHNOLOGY".to_owned(),
            alt_business_id: None,
            alt_business_id_type: Some(AltBusinessIdType::None),
            stock_symbol: None,
            stock_exchange: None,
            website: Some("https://acme.test".to_owned()),
            business_contact_email: None,
            is_main: Some(false),
        }
    }

    #[test]
    fn encode_emits_fields_in_wire_order() {
        let xml = encode_brand_xml(&new_brand().into());
        assert_eq!(
            xml,
            "<Brand>\n\
             \x20 <EntityType>PRIVATE_PROFIT</EntityType>\n\
             \x20 <AltBusinessIdType>NONE</AltBusinessIdType>\n\
             \x20 <BrandRelationship>BASIC_ACCOUNT</BrandRelationship>\n\
             \x20 <City>Raleigh</City>\n\
             \x20 <CompanyName>Acme Inc.</CompanyName>\n\
             \x20 <Country>US</Country>\n\
             \x20 <DisplayName>Acme</DisplayName>\n\
             \x20 <Ein>12-3456789</Ein>\n\
             \x20 <Email>ops@acme.test</Email>\n\
             \x20 <Phone>+19195551234</Phone>\n\
             \x20 <PostalCode>27606</PostalCode>\n\
             \x20 <State>NC</State>\n\
             \x20 <Street>1 Main St</Street>\n\
             \x20 <Vertical>TECHNOLOGY</Vertical>\n\
             \x20 <Website>https://acme.test</Website>\n\
             \x20 <IsMain>false</IsMain>\n\
             </Brand>"
        );
    }

    #[test]
    fn encode_partial_update_only_emits_present_fields() {
        let update = BrandUpdate {
            display_name: Some("Acme & Sons".to_owned()),
            phone: Some("+19195559876".to_owned()),
            ..Default::default()
        };
        let xml = encode_brand_xml(&update);
        assert_eq!(
            xml,
            "<Brand>\n  <DisplayName>Acme &amp; Sons</DisplayName>\n  <Phone>+19195559876</Phone>\n</Brand>"
        );
    }

    #[test]
    fn encode_vetting_uses_compact_form() {
        assert_eq!(
            encode_brand_vetting_xml(&BrandVetting::default()),
            "<BrandVetting><EvpId>AEGIS</EvpId><VettingClass>STANDARD</VettingClass></BrandVetting>"
        );
        let custom = BrandVetting {
            evp_id: "WMC".to_owned(),
            vetting_class: "PREMIUM".to_owned(),
        };
        assert_eq!(
            encode_brand_vetting_xml(&custom),
            "<BrandVetting><EvpId>WMC</EvpId><VettingClass>PREMIUM</VettingClass></BrandVetting>"
        );
    }

    #[test]
    fn decode_maps_lowercase_keys_and_coerces_types() {
        let tree = parse_xml(
            "<BrandResponse><Brand>\
               <BrandId>B1GZ2X</BrandId><AccountId>9900001</AccountId>\
               <EntityType>PUBLIC_PROFIT</EntityType><DisplayName>Acme</DisplayName>\
               <BrandRelationship>KEY_ACCOUNT</BrandRelationship>\
               <IdentityStatus>VETTED_VERIFIED</IdentityStatus>\
               <VettingScore>87</VettingScore><IsMain>true</IsMain>\
             </Brand></BrandResponse>",
        )
        .unwrap();
        let brand = decode_brand(tree.get("brand").unwrap()).unwrap();
        assert_eq!(brand.brand_id, Some(BrandId::new("B1GZ2X").unwrap()));
        assert_eq!(brand.account_id.as_deref(), Some("9900001"));
        assert_eq!(brand.entity_type, Some(EntityType::PublicProfit));
        assert_eq!(brand.brand_relationship, Some(BrandRelationship::KeyAccount));
        assert_eq!(brand.identity_status, Some(IdentityStatus::VettedVerified));
        assert_eq!(brand.vetting_score, Some(87));
        assert_eq!(brand.is_main, Some(true));
        assert_eq!(brand.website, None);
    }

    #[test]
    fn decode_rejects_unknown_enumeration_values() {
        let tree = parse_xml("<Brand><EntityType>PIRATE</EntityType></Brand>").unwrap();
        assert!(matches!(decode_brand(&tree), Err(DecodeError::Value(_))));
    }

    #[test]
    fn fields_survive_a_wire_round_trip() {
        let xml = encode_brand_xml(&new_brand().into());
        let decoded = decode_brand(&parse_xml(&xml).unwrap()).unwrap();
        assert_eq!(encode_brand_xml(&BrandUpdate::from(&decoded)), xml);
    }
}
