#[path = "trait.rs"]
mod trait_;
mod memory;


pub use memory::InMemoryProductRepository;
pub use trait_::ProductRepository;
