//! External service clients

pub mod webstatus_client;

pub use webstatus_client::{WebStatusClient, WebStatusError};
