//! Names of the backend procedures and the shape of their parameters.

use std::fmt;

/// Parameter mapping passed to a remote procedure, keyed by parameter name.
pub type Params = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Procedure {
    GetActiveTerms,
    ListTermsVersions,
    LogTermsAccept,
    LogTermsView,
    LogPrivacyAccept,
    LogPrivacyView,
}

impl Procedure {
    pub const ALL: [Procedure; 6] = [
        Procedure::GetActiveTerms,
        Procedure::ListTermsVersions,
        Procedure::LogTermsAccept,
        Procedure::LogTermsView,
        Procedure::LogPrivacyAccept,
        Procedure::LogPrivacyView,
    ];

    /// Name of the procedure as exposed by the backend.
    pub fn name(self) -> &'static str {
        match self {
            Procedure::GetActiveTerms => "get_active_terms",
            Procedure::ListTermsVersions => "list_terms_versions",
            Procedure::LogTermsAccept => "log_terms_acceptance",
            Procedure::LogTermsView => "log_terms_view",
            Procedure::LogPrivacyAccept => "log_privacy_acceptance",
            Procedure::LogPrivacyView => "log_privacy_view",
        }
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters for `list_terms_versions`.
pub fn versions_params(limit: u32, offset: u32) -> Params {
    let mut params = Params::new();
    params.insert("p_limit".into(), limit.into());
    params.insert("p_offset".into(), offset.into());
    params
}
