// ============================================================================
// Interfaces Module
// Contains all trait definitions and collaborator contracts
// ============================================================================

mod format;
mod tax;

pub use format::{CurrencyFormatter, LoggingFormatter, SimpleFormatter};
pub use tax::{FlatTax, Tax};

pub(crate) use format::group_thousands;
