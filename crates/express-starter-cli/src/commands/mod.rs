//! CLI command implementations for create-express-api.

pub mod init;
