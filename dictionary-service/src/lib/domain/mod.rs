pub mod session;
pub mod translation;
