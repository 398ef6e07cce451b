//! Artisan specializations.

use serde::{Deserialize, Serialize};

/// The trade an artisan offers.
///
/// This is a closed set; the serialized form is the display name exactly as
/// shown in the directory (e.g. `"Fashion Designer"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialization {
    Plumber,
    #[serde(rename = "Fashion Designer")]
    FashionDesigner,
    Carpenter,
    Electrician,
    Painter,
    Mason,
    Tailor,
    Caterer,
    Other,
}

impl Specialization {
    /// Every specialization, in the order the registration form lists them.
    pub const ALL: [Self; 9] = [
        Self::Plumber,
        Self::FashionDesigner,
        Self::Carpenter,
        Self::Electrician,
        Self::Painter,
        Self::Mason,
        Self::Tailor,
        Self::Caterer,
        Self::Other,
    ];

    /// Display name of the specialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plumber => "Plumber",
            Self::FashionDesigner => "Fashion Designer",
            Self::Carpenter => "Carpenter",
            Self::Electrician => "Electrician",
            Self::Painter => "Painter",
            Self::Mason => "Mason",
            Self::Tailor => "Tailor",
            Self::Caterer => "Caterer",
            Self::Other => "Other",
        }
    }
}

impl std::fmt::Display for Specialization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Specialization {
    type Err = String;

    /// Parses a display name, ignoring case and surrounding whitespace.
    ///
    /// `fashion-designer` and `fashion_designer` are accepted as well so the
    /// value can be typed on a command line without quoting.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|spec| spec.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| format!("invalid specialization: {s}"))
    }
}
