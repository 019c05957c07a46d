//! Fixed choice catalogs for lawyer profile fields.
//!
//! Specializations and experience bands are stored as plain text and
//! validated at the application layer against these catalogs.

/// Accepted specialization values.
pub const SPECIALIZATIONS: &[&str] = &[
    "criminal",
    "civil",
    "corporate",
    "family",
    "intellectual_property",
    "general",
];

/// Accepted experience-band values.
pub const EXPERIENCE_BANDS: &[&str] = &["0-2", "3-5", "6-10", "11-15", "16+"];

/// Default specialization assigned when none is supplied.
pub const DEFAULT_SPECIALIZATION: &str = "general";

/// Check a specialization value against the catalog.
pub fn is_valid_specialization(value: &str) -> bool {
    SPECIALIZATIONS.contains(&value)
}

/// Check an experience-band value against the catalog.
pub fn is_valid_experience_band(value: &str) -> bool {
    EXPERIENCE_BANDS.contains(&value)
}
