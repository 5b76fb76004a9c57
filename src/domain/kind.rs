//! Closed enumerations carried as upper-case strings on the wire.
//!
//! Unrecognized values are rejected when parsed, so drift in the carrier's
//! vocabulary surfaces as an error instead of leaking through as a raw string.

use std::fmt;
use std::str::FromStr;

use crate::domain::validation::ValidationError;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// Element name used on the wire.
            pub const FIELD: &'static str = $field;

            /// Wire representation of this value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value.trim() {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(ValidationError::UnknownVariant {
                        field: Self::FIELD,
                        value: other.to_owned(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    /// Legal form of the business behind a brand.
    EntityType, "EntityType" {
        PrivateProfit => "PRIVATE_PROFIT",
        PublicProfit => "PUBLIC_PROFIT",
        NonProfit => "NON_PROFIT",
        Government => "GOVERNMENT",
        SoleProprietor => "SOLE_PROPRIETOR",
    }
}

wire_enum! {
    /// Relationship tier between the brand and the registering account.
    BrandRelationship, "BrandRelationship" {
        BasicAccount => "BASIC_ACCOUNT",
        SmallAccount => "SMALL_ACCOUNT",
        MediumAccount => "MEDIUM_ACCOUNT",
        LargeAccount => "LARGE_ACCOUNT",
        KeyAccount => "KEY_ACCOUNT",
    }
}

wire_enum! {
    /// Kind of the alternative business identifier.
    AltBusinessIdType, "AltBusinessIdType" {
        None => "NONE",
        Duns => "DUNS",
        Giin => "GIIN",
        Lei => "LEI",
    }
}

wire_enum! {
    /// Identity verification state assigned by the registry.
    IdentityStatus, "IdentityStatus" {
        SelfDeclared => "SELF_DECLARED",
        Unverified => "UNVERIFIED",
        Verified => "VERIFIED",
        VettedVerified => "VETTED_VERIFIED",
    }
}

wire_enum! {
    /// Review state of the campaign service provider.
    TcpStatus, "TcpStatus" {
        Pending => "PENDING",
        Approved => "APPROVED",
        Rejected => "REJECTED",
    }
}

wire_enum! {
    /// Lifecycle status of a registered campaign.
    CampaignStatus, "Status" {
        Active => "ACTIVE",
        Expired => "EXPIRED",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_values_and_trims() {
        assert_eq!(
            "PRIVATE_PROFIT".parse::<EntityType>(),
            Ok(EntityType::PrivateProfit)
        );
        assert_eq!(
            " KEY_ACCOUNT ".parse::<BrandRelationship>(),
            Ok(BrandRelationship::KeyAccount)
        );
        assert_eq!("EXPIRED".parse::<CampaignStatus>(), Ok(CampaignStatus::Expired));
    }

    #[test]
    fn rejects_unknown_values() {
        let err = "active".parse::<CampaignStatus>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownVariant {
                field: "Status",
                value: "active".to_owned(),
            }
        );
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(IdentityStatus::VettedVerified.to_string(), "VETTED_VERIFIED");
        assert_eq!(AltBusinessIdType::None.as_str(), "NONE");
        assert_eq!(TcpStatus::Approved.as_str(), "APPROVED");
    }
}
