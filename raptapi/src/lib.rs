#![allow(clippy::redundant_field_names)]

pub use call::Call;
pub use config::{Config, Credentials};
pub use connection::{Connection, Context};
pub use error::Error;
pub use user::UserApi;

pub mod call;
pub mod config;
pub mod connection;
pub mod error;
pub mod user;

mod serde;

#[cfg(test)]
mod test;
