pub mod add;
pub mod delete;
pub mod due;
pub mod edit;
pub mod export;
pub mod list;
pub mod review;
#[cfg(feature = "server")]
pub mod serve;
pub mod show;
pub mod stats;
