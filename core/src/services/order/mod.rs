//! Order placement and visibility

mod service;

#[cfg(test)]
mod tests;

pub use service::OrderService;
