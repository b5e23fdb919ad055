//! Demo form
//!
//! Two fields, an app name and a category, plus the validation that gates
//! the simulated build.

mod form_render;
mod form_state;

pub use form_render::{render_form, FormRegions};
pub use form_state::{Category, FormState, ValidatedForm, ValidationError};
