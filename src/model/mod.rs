pub mod catalogue;
pub mod config;
pub mod file_record;
pub mod user;

pub use catalogue::*;
pub use config::*;
pub use file_record::*;
pub use user::*;
