//! Customer accounts: registration, login, identity echo, logout.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
