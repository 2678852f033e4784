pub mod config;
#[cfg(feature = "server")]
pub mod server;
pub mod vocabulary;

pub use config::AppConfig;
pub use vocabulary::Vocabulary;
