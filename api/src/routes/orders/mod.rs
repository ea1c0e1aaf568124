//! Order handlers

pub mod create;
pub mod detail;
pub mod list;

pub use create::create_order;
pub use detail::get_order;
pub use list::list_orders;
