pub mod addresses;
pub mod cart;
pub mod orders;
pub mod products;
pub mod sellers;
pub mod users;
