//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#true() -> bool {
    true
}

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn author() -> String {
        "<YOUR_NAME>".into()
    }

    pub fn language() -> String {
        "id".into()
    }

    pub fn locale() -> String {
        "id_ID".into()
    }

    pub fn favicon() -> String {
        "/favicon.svg".into()
    }

    pub fn home_title() -> String {
        "Beranda".into()
    }
}

// ============================================================================
// [social] Section Defaults
// ============================================================================

pub mod social {
    pub fn email() -> String {
        "user@noreply.sitemeta".into()
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "content/blog".into()
    }

    pub fn output() -> PathBuf {
        "dist".into()
    }
}

// ============================================================================
// [rss] Section Defaults
// ============================================================================

pub mod rss {
    use std::path::PathBuf;

    pub fn path() -> PathBuf {
        "rss.xml".into()
    }

    pub fn language() -> String {
        "id-id".into()
    }
}

// ============================================================================
// [ads] Section Defaults
// ============================================================================

pub mod ads {
    use super::super::ads::SlotMap;

    pub fn adsense_slots() -> SlotMap<String> {
        SlotMap::filled("auto".into())
    }
}
