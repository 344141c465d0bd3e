//! License text catalog interface
//!
//! The core only needs a lookup from SPDX identifier to human-readable text;
//! where that text comes from is the collaborator's concern. An absent
//! identifier yields no text, not an error.

/// Collaborator supplying human-readable license text by SPDX identifier
pub trait LicenseCatalog: Send + Sync {
    /// Text to include for the identifier, if the catalog knows it
    fn text(&self, identifier: &str) -> Option<String>;
}

/// Built-in catalog with a short notice line per known identifier
pub struct BuiltinCatalog;

impl LicenseCatalog for BuiltinCatalog {
    fn text(&self, identifier: &str) -> Option<String> {
        let notice = match identifier {
            "MIT" => "A short and permissive license with conditions only requiring preservation of copyright and license notices.",
            "Apache-2.0" => "A permissive license that also provides an express grant of patent rights from contributors.",
            "GPL-3.0-only" => "A strong copyleft license: derivative works must be distributed under the same terms.",
            "BSD-3-Clause" => "A permissive license with a non-endorsement clause.",
            "MPL-2.0" => "A weak copyleft license applying file-by-file.",
            "ISC" => "A permissive license functionally equivalent to the simplified BSD and MIT licenses.",
            "Unlicense" => "A public-domain dedication.",
            _ => return None,
        };
        Some(notice.to_string())
    }
}

/// Catalog that never supplies text, for callers that want the identifier only
pub struct EmptyCatalog;

impl LicenseCatalog for EmptyCatalog {
    fn text(&self, _identifier: &str) -> Option<String> {
        None
    }
}
