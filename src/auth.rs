//! Static auth-token collaborator.
//!
//! Token acquisition and refresh live in a separate auth subsystem; this crate
//! only carries the current JWT and stamps it onto outbound requests. The slot
//! is cloneable and thread-safe so the auth layer, the asynchronous client, and
//! the blocking credentials path all observe the same token.

// self
use crate::_prelude::*;

/// Header carrying the bearer token on every authenticated request.
pub const AUTH_HEADER: &str = "X-Authorization";

/// Shared slot holding the JWT issued by the auth subsystem.
///
/// Cloning the slot shares the underlying storage; updating the token through
/// any clone is immediately visible to all of them.
#[derive(Clone, Debug, Default)]
pub struct JwtTokenSlot(Arc<RwLock<Option<String>>>);
impl JwtTokenSlot {
	/// Creates a slot pre-populated with `token`.
	pub fn with_token(token: impl Into<String>) -> Self {
		let slot = Self::default();

		slot.set(token);

		slot
	}

	/// Stores a freshly issued JWT.
	pub fn set(&self, token: impl Into<String>) {
		*self.0.write() = Some(token.into());
	}

	/// Drops the stored token; subsequent requests go out unauthenticated.
	pub fn clear(&self) {
		*self.0.write() = None;
	}

	/// Returns the raw JWT, if one is present.
	pub fn get(&self) -> Option<String> {
		self.0.read().clone()
	}

	/// Returns the token formatted as an `X-Authorization` header value.
	pub fn bearer(&self) -> Option<String> {
		self.0.read().as_deref().map(|token| format!("Bearer {token}"))
	}
}
