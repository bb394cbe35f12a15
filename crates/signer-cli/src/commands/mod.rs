pub mod config;
pub mod coords;
pub mod info;
pub mod label;
pub mod preview;
