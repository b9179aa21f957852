pub mod aggregate;
pub mod dto;

pub use aggregate::{Order, OrderStatus, RowRef};
pub use dto::{ListOrdersResponse, TokenQuery, UpdateStatusRequest, UpdateStatusResponse};
