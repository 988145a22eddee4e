use strum::{AsRefStr, Display, EnumString};

/// Qualitative tier of weekly exercise volume.
#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumString, Eq, Hash, PartialEq)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ActivityRating {
    Bad,
    Average,
    Good,
}
