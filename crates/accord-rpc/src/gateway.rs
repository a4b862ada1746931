//! Transport seam between the client and the backend.

use accord_core::{Params, Procedure};
use async_trait::async_trait;
use serde_json::Value;

use crate::RemoteCallError;

/// Calls a named backend procedure with a parameter mapping.
///
/// Returns the procedure's data, with [`Value::Null`] meaning "no data".
/// Implementations make exactly one attempt per call.
#[async_trait]
pub trait RpcGateway: Send + Sync {
    async fn call(&self, procedure: Procedure, params: Params) -> Result<Value, RemoteCallError>;
}
