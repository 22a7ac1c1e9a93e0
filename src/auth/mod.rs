pub mod jwt;
pub mod password;

pub use jwt::{create_jwt, verify_jwt, Claims};
pub use password::{hash_password, verify_password};
