pub mod email;
pub mod protocol;
pub mod request;

pub use email::{hash_email, normalize_email, EmailHash, NormalizedEmail};
pub use protocol::Protocol;
pub use request::{AvatarRequest, DEFAULT_ALT, DEFAULT_SIZE};
