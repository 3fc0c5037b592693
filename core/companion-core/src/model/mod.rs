//! Serialized record types shared by the stores.
//!
//! Field names serialize in camelCase so the persisted layout stays readable by
//! any other client of the same storage keys.

/// Declares a fieldless enum that round-trips through a fixed lowercase token
/// in serde, `Display` and `FromStr`.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($kind:literal) {
            $($variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(#[serde(rename = $token)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_lowercase();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == normalized)
                    .ok_or_else(|| crate::error::ModelError::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

pub mod experience;
pub mod identity;
pub mod notification;
pub mod reference;

pub use experience::{
    Category, Coordinates, Experience, ExperienceDraft, ExperienceUpdate, PriceLevel,
};
pub use identity::{
    AgeRange, BudgetBand, Identity, JoinRequest, JoinStatus, ProfileUpdate, TravelDates,
    VerificationStatus, Vibe,
};
pub use notification::{NewToast, Toast, ToastVariant};
pub use reference::{Companion, CompanionView, Destination, UpcomingDestination};
