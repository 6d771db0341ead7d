//! The regulation compliance checker.
//!
//! A fixed, ordered list of named regulation rules. Each rule looks at a
//! circuit's configuration and either abstains or reports one warning with
//! a severity. Only `critical` warnings make a circuit non-compliant.

pub use self::checker::RegulationComplianceChecker;
pub use self::result::{ComplianceResult, ComplianceStatus, Warnings};
pub use self::warning::{ComplianceWarning, Severity};

// --- MODULE DECLARATIONS ---
mod checker;
mod result;
mod rule;
mod warning;
mod rules {
    pub mod afdd;
    pub mod cable;
    pub mod rcd;
}
