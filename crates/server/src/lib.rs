pub mod routes;
pub mod startup;
pub mod errors;

pub use routes::ServerState;
pub use startup::{build_app, run_with_config, serve};
