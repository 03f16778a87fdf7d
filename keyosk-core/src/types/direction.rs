use serde::{Deserialize, Serialize};

/// Text flow direction of the active layout's language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Locales whose text flows right-to-left.
pub const RTL_LOCALES: [&str; 4] = ["ar-SA", "fa-IR", "he-IL", "ur-PK"];

/// Derives the flow direction from an IETF locale tag. Anything not in the
/// RTL set defaults to LTR.
pub fn direction_for_locale(locale_name: &str) -> TextDirection {
    if RTL_LOCALES.contains(&locale_name) {
        TextDirection::Rtl
    } else {
        TextDirection::Ltr
    }
}
