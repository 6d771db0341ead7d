//! The field validator.
//!
//! Each rule inspects one record and either abstains or returns a verdict on
//! one measurement field. `FieldValidator` runs them all and folds their
//! output into a `ValidationResult`, keyed by field.

pub use self::result::ValidationResult;
pub use self::validator::FieldValidator;
pub use self::verdict::{FieldVerdict, Verdict, VerdictKind};

// --- MODULE DECLARATIONS ---
mod readings;
mod result;
mod validator;
mod verdict;
mod rules {
    pub mod continuity;
    pub mod insulation;
    pub mod numeric;
    pub mod outcome;
    pub mod rcd;
    pub mod ring;
    pub mod zs;
}
