pub mod handlers;
pub mod routes;
pub mod team_client;

pub use team_client::TeamClient;
