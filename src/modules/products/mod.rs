//! Product catalog and stock management.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
