pub mod add_file;
pub mod check;
pub mod navigation;
pub mod session;
