//! Registration domain
//!
//! Form snapshot, per-field errors, and the values of the registration
//! screen's state machine.

mod form;
mod state;

pub use form::{FieldErrors, FormEvent, FormField, FormState};
pub use state::{RegistrationPhase, RegistrationState, SubmitOutcome};
