pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::session;
pub use domain::translation;
pub use outbound::clients;
pub use outbound::repositories;
