pub mod authorization;
pub mod bearer;
pub mod claims;
pub mod error;
pub mod jwt_validator;

pub use authorization::can_delete;
pub use bearer::bearer_token;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
