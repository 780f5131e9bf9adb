//! # Enumerated Field Values
//!
//! Closed sum types for every enumerated field in the content model. Each
//! enum serializes to exactly the spelling content authors write, and
//! parsing is case-sensitive: `"Offplan"` is not `"offplan"`.
//!
//! The JSON Schemas embedded in `dubai-schema` repeat these spellings in
//! their `enum` arrays; a test in that crate asserts both lists agree.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::error::DubaiError;

/// Declares a closed enum with its wire spellings, `as_str`/`all`,
/// `Display`, `FromStr` and string-based serde. The `default = Variant`
/// form also implements `Default`.
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal, default = $default:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        closed_enum! {
            $(#[$meta])*
            $name, $field {
                $( $(#[$vmeta])* $variant => $wire ),+
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Returns every allowed value in declaration order.
            pub fn all() -> &'static [$name] {
                &[ $( Self::$variant ),+ ]
            }

            /// Returns the wire spelling of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire ),+
                }
            }

            /// Returns every allowed wire spelling in declaration order.
            pub fn allowed() -> &'static [&'static str] {
                &[ $( $wire ),+ ]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DubaiError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok(Self::$variant), )+
                    other => Err(DubaiError::unknown_variant($field, other, Self::allowed())),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

closed_enum! {
    /// Sales stage of a project.
    ProjectStatus, "project status", default = Offplan {
        /// Sold before completion.
        Offplan => "offplan",
        /// Completed and ready to move in.
        Ready => "ready",
    }
}

closed_enum! {
    /// Publication state shared by reports, developer reports, guides and policies.
    PublicationStatus, "publication status", default = ComingSoon {
        /// Announced, content not yet published.
        ComingSoon => "coming_soon",
        /// Published.
        Available => "available",
    }
}

closed_enum! {
    /// Cadence of a market report.
    ReportType, "report type", default = Quarterly {
        Quarterly => "quarterly",
        Annual => "annual",
        Special => "special",
    }
}

closed_enum! {
    /// Calendar quarter of a quarterly report. Optional and without a
    /// default, so there is no `Default` impl:
    ///
    /// ```compile_fail
    /// let _ = dubai_core::Quarter::default();
    /// ```
    Quarter, "quarter" {
        Q1 => "Q1",
        Q2 => "Q2",
        Q3 => "Q3",
        Q4 => "Q4",
    }
}

closed_enum! {
    /// Topic of a buyer guide.
    GuideCategory, "guide category", default = Legal {
        Tax => "tax",
        Legal => "legal",
        Visa => "visa",
        Finance => "finance",
    }
}

closed_enum! {
    /// Issuing body of a policy.
    PolicyAuthority, "policy authority", default = Other {
        /// Dubai Land Department.
        Dld => "DLD",
        /// Real Estate Regulatory Agency.
        Rera => "RERA",
        DubaiMunicipality => "Dubai Municipality",
        UaeCentralBank => "UAE Central Bank",
        Other => "Other",
    }
}
