pub mod price;
pub mod ticket;
