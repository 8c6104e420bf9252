//! Command module structure for skillcheck CLI

pub mod init;
pub mod validate;
