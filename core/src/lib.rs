pub mod display;
pub mod error;
pub mod filter;
pub mod models;
pub mod thumbnail;
pub mod view;

pub use error::{ErrorKind, Result, SharkDealError};
