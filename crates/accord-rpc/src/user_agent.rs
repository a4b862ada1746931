//! Source of the user-agent string attached to every logged event.

/// Supplies the current user-agent string.
///
/// The client asks for it once per logging call and never keeps the result.
pub trait UserAgentSource: Send + Sync {
    fn user_agent(&self) -> String;
}

impl<F> UserAgentSource for F
where
    F: Fn() -> String + Send + Sync,
{
    fn user_agent(&self) -> String {
        self()
    }
}

/// A fixed user agent, e.g. one forwarded from an incoming request.
#[derive(Debug, Clone)]
pub struct StaticUserAgent(pub String);

impl UserAgentSource for StaticUserAgent {
    fn user_agent(&self) -> String {
        self.0.clone()
    }
}

/// `accord/<version> (<os>; <arch>)`
pub fn default_user_agent() -> String {
    format!(
        "accord/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}
