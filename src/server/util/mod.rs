//! Small pure helpers shared by services.

pub mod file;
pub mod page;
pub mod text;
pub mod time;
pub mod validate;
