pub mod config;
pub mod encode;
pub mod input;
pub mod link;
pub mod logging;

pub use link::{format, format_link, LinkDefaults, LinkRequest};
