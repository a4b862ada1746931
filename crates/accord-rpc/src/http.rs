//! HTTP gateway for PostgREST-style `rpc/<procedure>` endpoints.

use accord_core::{Params, Procedure};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{RemoteCallError, RpcGateway};

#[derive(Debug, Clone)]
pub struct HttpGatewayConfig {
    /// Project URL like `https://example.supabase.co` (trailing slash optional).
    pub base_url: String,
    /// Public API key, sent as `apikey`.
    pub api_key: String,
    /// Signed-in user's access token. Falls back to the API key when absent.
    pub access_token: Option<String>,
}

/// Calls backend procedures over HTTP, one POST per call.
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    bearer: String,
}

/// Error payload returned by the backend on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    code: Option<String>,
    details: Option<String>,
}

impl HttpGateway {
    pub fn new(config: HttpGatewayConfig) -> Self {
        let bearer = config
            .access_token
            .unwrap_or_else(|| config.api_key.clone());
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            bearer,
        }
    }

    fn procedure_url(&self, procedure: Procedure) -> String {
        format!("{}/rest/v1/rpc/{}", self.base_url, procedure.name())
    }
}

#[async_trait]
impl RpcGateway for HttpGateway {
    async fn call(&self, procedure: Procedure, params: Params) -> Result<Value, RemoteCallError> {
        let url = self.procedure_url(procedure);
        debug!(url = %url, "calling procedure");

        let resp = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.bearer)
            .json(&params)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            let err = backend_error(procedure, status.as_u16(), &body);
            warn!(%procedure, status = status.as_u16(), error = %err, "procedure failed");
            return Err(err);
        }

        let body = resp.text().await?;
        parse_body(procedure, &body)
    }
}

/// Void procedures answer with an empty body (usually 204).
fn parse_body(procedure: Procedure, body: &str) -> Result<Value, RemoteCallError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|source| RemoteCallError::Decode { procedure, source })
}

fn backend_error(procedure: Procedure, status: u16, body: &str) -> RemoteCallError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(message),
            code,
            details,
        }) => {
            let message = match details {
                Some(details) if !details.is_empty() => format!("{message} ({details})"),
                _ => message,
            };
            RemoteCallError::backend(procedure, status, code, message)
        }
        _ => RemoteCallError::backend(procedure, status, None, body.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(base_url: &str, access_token: Option<&str>) -> HttpGateway {
        HttpGateway::new(HttpGatewayConfig {
            base_url: base_url.into(),
            api_key: "anon-key".into(),
            access_token: access_token.map(Into::into),
        })
    }

    #[test]
    fn trims_trailing_slash() {
        let gateway = gateway("http://localhost:54321/", None);
        assert_eq!(gateway.base_url, "http://localhost:54321");
        assert_eq!(
            gateway.procedure_url(Procedure::LogPrivacyView),
            "http://localhost:54321/rest/v1/rpc/log_privacy_view"
        );
    }

    #[test]
    fn bearer_prefers_access_token() {
        assert_eq!(gateway("http://x", None).bearer, "anon-key");
        assert_eq!(gateway("http://x", Some("jwt")).bearer, "jwt");
    }

    #[test]
    fn empty_body_is_null() {
        assert_eq!(
            parse_body(Procedure::LogTermsAccept, "").unwrap(),
            Value::Null
        );
        assert_eq!(
            parse_body(Procedure::GetActiveTerms, "null").unwrap(),
            Value::Null
        );
    }

    #[test]
    fn invalid_json_is_decode_error() {
        let err = parse_body(Procedure::ListTermsVersions, "<html>").unwrap_err();
        assert!(matches!(err, RemoteCallError::Decode { .. }));
    }

    #[test]
    fn structured_backend_error() {
        let body = r#"{
            "code": "23503",
            "details": "Key (terms_id)=(t9) is not present in table \"terms\".",
            "hint": null,
            "message": "insert or update on table \"terms_acceptance_log\" violates foreign key constraint"
        }"#;
        let err = backend_error(Procedure::LogTermsAccept, 409, body);
        assert_eq!(err.code(), Some("23503"));
        match err {
            RemoteCallError::Backend {
                status, message, ..
            } => {
                assert_eq!(status, 409);
                assert!(message.contains("violates foreign key constraint"));
                assert!(message.contains("(t9)"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unstructured_backend_error_keeps_body() {
        let err = backend_error(Procedure::GetActiveTerms, 502, "Bad Gateway\n");
        assert_eq!(err.code(), None);
        assert_eq!(err.to_string(), "get_active_terms failed (502): Bad Gateway");
    }
}
