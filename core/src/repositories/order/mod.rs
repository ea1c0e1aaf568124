#[path = "trait.rs"]
mod trait_;
mod memory;


pub use memory::InMemoryOrderRepository;
pub use trait_::{OrderFilter, OrderRepository};
