pub mod jwt;
pub mod password;
pub mod validate;

pub use jwt::{Claims, JwtManager};
pub use password::PasswordHasher;
pub use validate::ValidatedJson;
