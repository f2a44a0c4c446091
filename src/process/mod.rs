/*!
 * Process Module
 * Process records and the table that owns them
 */

pub mod table;
pub mod types;

pub use table::ProcessTable;
pub use types::{Admission, Process};
