//! Orders: cash-on-delivery creation, listings, and the payment webhook.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
