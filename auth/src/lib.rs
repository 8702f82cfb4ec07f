//! Authentication utilities library
//!
//! Building blocks for the dictionary service session manager:
//! - Password hashing (Argon2id)
//! - JWT session claims and HS256 token encoding/validation
//!
//! The service owns the business rules (registration, blacklist, error
//! taxonomy); this crate only wraps the cryptographic primitives.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("other_password", &hash).unwrap());
//! ```
//!
//! ## JWT Tokens
//! ```
//! use std::time::Duration;
//!
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_user("adam", Duration::from_secs(3600));
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.sub, "adam");
//! ```

pub mod jwt;
pub mod password;

pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
