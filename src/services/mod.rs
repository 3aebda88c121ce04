pub mod render;
pub mod roster;
pub mod server;
