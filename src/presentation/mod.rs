pub mod config;
pub mod handlers;
mod router;
pub mod state;

pub use config::{Environment, Settings, SettingsError};
pub use router::create_router;
pub use state::AppState;
