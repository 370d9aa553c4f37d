pub mod claims;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod policy;

pub use claims::Claims;
pub use jwt::JwtService;
pub use middleware::{AdminOnly, AuthMiddleware, AuthenticatedUser};
pub use password::{hash_password, verify_password};
pub use policy::{caller_id, owned_admission_filter, parse_object_id, require_admin};
