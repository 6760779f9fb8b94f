//! Login infrastructure module

mod controller;

pub use controller::LoginController;
