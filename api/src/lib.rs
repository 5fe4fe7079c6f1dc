pub mod client;
pub mod endpoints;
pub mod types;

#[cfg(test)]
mod test_server;

pub use client::CheapSharkClient;
pub use endpoints::DealsFetch;
