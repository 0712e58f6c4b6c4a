pub mod app;
pub mod cache;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod resolver;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{FileCatalogSource, resolve_config_path};
