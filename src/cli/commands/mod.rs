//! CLI command implementations

pub mod check;
pub mod init;
pub mod replay;
pub mod role;
pub mod suggest;
pub mod transitions;
