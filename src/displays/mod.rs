//! Supported modules

pub mod ssd1305;
