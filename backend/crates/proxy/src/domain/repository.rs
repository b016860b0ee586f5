//! Upstream Trait
//!
//! Interface to the upstream API. Implementation is in infrastructure layer.

use crate::domain::entities::{ProxyRequest, UpstreamReply};
use crate::error::ProxyResult;

#[trait_variant::make(UpstreamApi: Send)]
pub trait LocalUpstreamApi {
    /// Send a request and return whatever the upstream answered
    ///
    /// Only transport failures are errors; non-2xx replies are returned as-is.
    async fn send(&self, request: ProxyRequest) -> ProxyResult<UpstreamReply>;
}
