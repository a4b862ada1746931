//! Terms and privacy-policy acceptance logging over an [`RpcGateway`].
//!
//! Reads go through a [`QueryCache`] with per-procedure staleness windows.
//! Writes always reach the gateway exactly once and are never cached,
//! deduplicated, or retried: calling a log operation twice logs two events.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use accord_core::procedure::versions_params;
use accord_core::{
    AcceptanceEvent, DocumentId, DocumentKind, Params, Procedure, TermsDocument,
    TermsVersionSummary, UserId, ViewEvent,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

use crate::cache::{CacheKey, QueryCache};
use crate::{ClientConfig, RemoteCallError, RpcGateway, UserAgentSource, default_user_agent};

pub const DEFAULT_VERSIONS_LIMIT: u32 = 10;

/// A window into the terms version history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u32,
    pub offset: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_VERSIONS_LIMIT,
            offset: 0,
        }
    }
}

pub struct AcceptanceLogClient {
    gateway: Arc<dyn RpcGateway>,
    user_agent: Arc<dyn UserAgentSource>,
    config: ClientConfig,
    cache: Mutex<QueryCache>,
}

impl AcceptanceLogClient {
    pub fn new(gateway: Arc<dyn RpcGateway>, user_agent: Arc<dyn UserAgentSource>) -> Self {
        Self::with_config(gateway, user_agent, ClientConfig::default())
    }

    pub fn with_config(
        gateway: Arc<dyn RpcGateway>,
        user_agent: Arc<dyn UserAgentSource>,
        config: ClientConfig,
    ) -> Self {
        Self {
            gateway,
            user_agent,
            config,
            cache: Mutex::new(QueryCache::new()),
        }
    }

    /// Fetch the terms-of-use document currently in force.
    ///
    /// Returns `Ok(None)` when the backend reports no active document.
    pub async fn fetch_active_terms(&self) -> Result<Option<TermsDocument>, RemoteCallError> {
        let procedure = Procedure::GetActiveTerms;
        self.read(
            procedure,
            Params::new(),
            self.config.active_terms_ttl(),
            |value| {
                // Set-returning functions come back as an array of rows.
                let row = match value {
                    Value::Array(rows) => rows.into_iter().next().unwrap_or(Value::Null),
                    other => other,
                };
                decode_optional(procedure, row)
            },
        )
        .await
    }

    /// Fetch one page of the terms version history, in backend order.
    pub async fn fetch_terms_versions(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Option<Vec<TermsVersionSummary>>, RemoteCallError> {
        let procedure = Procedure::ListTermsVersions;
        let versions: Option<Vec<TermsVersionSummary>> = self
            .read(
                procedure,
                versions_params(limit, offset),
                self.config.versions_ttl(),
                |value| decode_optional(procedure, value),
            )
            .await?;
        if let Some(versions) = &versions {
            info!(limit, offset, count = versions.len(), "fetched terms versions");
        }
        Ok(versions)
    }

    pub async fn fetch_terms_versions_page(
        &self,
        page: Page,
    ) -> Result<Option<Vec<TermsVersionSummary>>, RemoteCallError> {
        self.fetch_terms_versions(page.limit, page.offset).await
    }

    pub async fn log_terms_accept(
        &self,
        terms_id: &DocumentId,
        user_id: &UserId,
    ) -> Result<(), RemoteCallError> {
        self.log_accept(DocumentKind::Terms, terms_id, user_id).await
    }

    pub async fn log_privacy_accept(
        &self,
        policy_id: &DocumentId,
        user_id: &UserId,
    ) -> Result<(), RemoteCallError> {
        self.log_accept(DocumentKind::Privacy, policy_id, user_id)
            .await
    }

    /// Record that the terms were displayed. `user_id` is `None` for
    /// anonymous visitors.
    pub async fn log_terms_view(
        &self,
        terms_id: &DocumentId,
        user_id: Option<&UserId>,
    ) -> Result<(), RemoteCallError> {
        self.log_view(DocumentKind::Terms, terms_id, user_id).await
    }

    pub async fn log_privacy_view(
        &self,
        policy_id: &DocumentId,
        user_id: Option<&UserId>,
    ) -> Result<(), RemoteCallError> {
        self.log_view(DocumentKind::Privacy, policy_id, user_id)
            .await
    }

    /// Drop every cached read.
    pub fn clear_cache(&self) {
        self.cache().clear();
    }

    async fn log_accept(
        &self,
        kind: DocumentKind,
        document_id: &DocumentId,
        user_id: &UserId,
    ) -> Result<(), RemoteCallError> {
        let event = AcceptanceEvent::new(
            kind,
            document_id.clone(),
            user_id.clone(),
            self.current_user_agent(),
        );
        self.gateway.call(event.procedure(), event.params()).await?;
        info!(
            procedure = %event.procedure(),
            document_id = %event.document_id,
            user_id = %event.user_id,
            "acceptance logged"
        );
        Ok(())
    }

    async fn log_view(
        &self,
        kind: DocumentKind,
        document_id: &DocumentId,
        user_id: Option<&UserId>,
    ) -> Result<(), RemoteCallError> {
        let event = ViewEvent::new(
            kind,
            document_id.clone(),
            user_id.cloned(),
            self.current_user_agent(),
        );
        self.gateway.call(event.procedure(), event.params()).await?;
        info!(
            procedure = %event.procedure(),
            document_id = %event.document_id,
            anonymous = event.viewer_user_id.is_none(),
            "view logged"
        );
        Ok(())
    }

    /// Serve a read from the cache or the gateway. Only responses that
    /// `decode` accepts are cached.
    async fn read<T, D>(
        &self,
        procedure: Procedure,
        params: Params,
        ttl: Duration,
        decode: D,
    ) -> Result<T, RemoteCallError>
    where
        D: FnOnce(Value) -> Result<T, RemoteCallError>,
    {
        let key = CacheKey::new(procedure, &params);
        let cached = self.cache().get(&key);
        if let Some(value) = cached {
            debug!(%procedure, "cache hit");
            return decode(value);
        }

        debug!(%procedure, "cache miss");
        let value = self.gateway.call(procedure, params).await?;
        let decoded = decode(value.clone())?;
        self.cache().insert(key, value, ttl);
        Ok(decoded)
    }

    /// The source's current user agent, or the client default when blank.
    fn current_user_agent(&self) -> String {
        let user_agent = self.user_agent.user_agent();
        if user_agent.trim().is_empty() {
            return default_user_agent();
        }
        user_agent
    }

    fn cache(&self) -> MutexGuard<'_, QueryCache> {
        // The cache holds no invariants a panic could break mid-update.
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn decode_optional<T: DeserializeOwned>(
    procedure: Procedure,
    value: Value,
) -> Result<Option<T>, RemoteCallError> {
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(|source| RemoteCallError::Decode { procedure, source })
}
