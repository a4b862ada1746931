//! Acceptance-log client: remote procedure gateway, query cache, and the
//! terms/privacy read and logging operations built on top of them.

pub mod cache;
pub mod client;
pub mod config;
mod error;
pub mod gateway;
pub mod user_agent;

#[cfg(feature = "http")]
pub mod http;

pub use cache::QueryCache;
pub use client::{AcceptanceLogClient, DEFAULT_VERSIONS_LIMIT, Page};
pub use config::ClientConfig;
pub use error::RemoteCallError;
pub use gateway::RpcGateway;
pub use user_agent::{StaticUserAgent, UserAgentSource, default_user_agent};

#[cfg(feature = "http")]
pub use http::{HttpGateway, HttpGatewayConfig};
