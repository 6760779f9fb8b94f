//! Registration infrastructure module
//!
//! `RegistrationController` is the synchronous state machine; the
//! `RegistrationHandle` runs one controller as an actor task that receives
//! screen events over a channel and publishes every new state.

mod controller;
mod handle;

pub use controller::{register_form, RegistrationController};
pub use handle::{RegistrationCommand, RegistrationHandle};
