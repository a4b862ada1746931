//! Acceptance and view events submitted to the backend.
//!
//! Events are write-once: every submission inserts a new log row. Nothing
//! here is returned by the backend, so these types only serialize into the
//! parameter mapping of the matching log procedure.

use crate::procedure::{Params, Procedure};
use crate::{DocumentId, UserId};

/// Which kind of versioned document an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Terms,
    Privacy,
}

impl DocumentKind {
    /// Parameter name carrying the document id.
    pub fn document_param(self) -> &'static str {
        match self {
            DocumentKind::Terms => "p_terms_id",
            DocumentKind::Privacy => "p_policy_id",
        }
    }

    pub fn accept_procedure(self) -> Procedure {
        match self {
            DocumentKind::Terms => Procedure::LogTermsAccept,
            DocumentKind::Privacy => Procedure::LogPrivacyAccept,
        }
    }

    pub fn view_procedure(self) -> Procedure {
        match self {
            DocumentKind::Terms => Procedure::LogTermsView,
            DocumentKind::Privacy => Procedure::LogPrivacyView,
        }
    }
}

/// How the user expressed acceptance. This client only ever records checkbox
/// acceptance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AcceptanceMethod {
    #[default]
    Checkbox,
}

impl AcceptanceMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            AcceptanceMethod::Checkbox => "checkbox",
        }
    }
}

/// A user affirmatively accepted a specific document version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptanceEvent {
    pub kind: DocumentKind,
    pub document_id: DocumentId,
    pub user_id: UserId,
    pub user_agent: String,
    pub acceptance_method: AcceptanceMethod,
}

impl AcceptanceEvent {
    pub fn new(
        kind: DocumentKind,
        document_id: DocumentId,
        user_id: UserId,
        user_agent: String,
    ) -> Self {
        Self {
            kind,
            document_id,
            user_id,
            user_agent,
            acceptance_method: AcceptanceMethod::Checkbox,
        }
    }

    pub fn procedure(&self) -> Procedure {
        self.kind.accept_procedure()
    }

    pub fn params(&self) -> Params {
        let mut params = Params::new();
        params.insert(
            self.kind.document_param().into(),
            self.document_id.as_str().into(),
        );
        params.insert("p_user_id".into(), self.user_id.as_str().into());
        params.insert("p_user_agent".into(), self.user_agent.as_str().into());
        params.insert(
            "p_acceptance_method".into(),
            self.acceptance_method.as_str().into(),
        );
        params
    }
}

/// A document was displayed, without implying acceptance.
///
/// `viewer_user_id` is `None` for anonymous visitors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEvent {
    pub kind: DocumentKind,
    pub document_id: DocumentId,
    pub viewer_user_id: Option<UserId>,
    pub user_agent: String,
}

impl ViewEvent {
    pub fn new(
        kind: DocumentKind,
        document_id: DocumentId,
        viewer_user_id: Option<UserId>,
        user_agent: String,
    ) -> Self {
        Self {
            kind,
            document_id,
            viewer_user_id,
            user_agent,
        }
    }

    pub fn procedure(&self) -> Procedure {
        self.kind.view_procedure()
    }

    pub fn params(&self) -> Params {
        let mut params = Params::new();
        params.insert(
            self.kind.document_param().into(),
            self.document_id.as_str().into(),
        );
        params.insert(
            "p_viewer_user_id".into(),
            self.viewer_user_id
                .as_ref()
                .map(|id| id.as_str().into())
                .unwrap_or(serde_json::Value::Null),
        );
        params.insert("p_user_agent".into(), self.user_agent.as_str().into());
        params
    }
}
