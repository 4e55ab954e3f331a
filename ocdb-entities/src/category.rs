use strum::{Display, EnumCount, EnumIter, EnumString};

/// The fixed set of issue categories.
///
/// The string representation is the kebab-case form that is also
/// used in persisted documents, e.g. `garbage-dump`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumCount, EnumIter,
    EnumString,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Category {
    Pothole,
    GarbageDump,
    BrokenStreetlight,
    WaterLeakage,
    DrainageFailure,
    IllegalConstruction,
    Other,
}

impl Category {
    /// Catch-all bucket for unrecognized category values.
    pub const fn fallback() -> Self {
        Self::Other
    }

    /// Human-readable label for display purposes.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pothole => "Pothole",
            Self::GarbageDump => "Garbage Dump",
            Self::BrokenStreetlight => "Broken Streetlight",
            Self::WaterLeakage => "Water Leakage",
            Self::DrainageFailure => "Drainage Failure",
            Self::IllegalConstruction => "Illegal Construction",
            Self::Other => "Other",
        }
    }
}
