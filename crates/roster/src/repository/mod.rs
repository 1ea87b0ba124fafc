//! Collection repositories on top of the tabular store.
//!
//! One generic [`SheetRepository`] covers every id-keyed collection; the
//! id-less attendance sheet has its own [`AttendanceRepository`].

mod attendance;
mod sheet;

pub use attendance::AttendanceRepository;
pub use sheet::{AddReceipt, DeleteOutcome, SheetRepository};
