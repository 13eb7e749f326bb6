use crate::domain::model::{CellSpec, FormFactor};
use crate::utils::error::Result;

/// Source of candidate cells. The sizing service only depends on this
/// trait, so tests can inject a fixed cell without building a catalog.
pub trait CellSource: Send + Sync {
    /// Exact-name lookup. A miss is an error, never a silent substitution.
    fn lookup(&self, name: &str) -> Result<CellSpec>;

    /// The documented default record, optionally restricted to a form factor.
    fn suggest_default(&self, preference: Option<FormFactor>) -> Result<CellSpec>;
}
