pub mod config;
pub mod consts;
pub mod coords;
pub mod error;
pub mod label;
pub mod template;
pub mod viewport;
