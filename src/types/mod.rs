//! Type definitions for Safe transactions

mod confirmation;
mod operation;
mod transaction;
mod version;

pub use confirmation::Confirmation;
pub use operation::Operation;
pub use transaction::SafeTransaction;
pub use version::SafeVersion;
