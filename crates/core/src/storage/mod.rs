mod error;
mod traits;
mod types;

pub use error::{Result, StoreError};
pub use traits::TabularStore;
pub use types::{cell_text, cell_text_or, cell_to_string, is_blank, Row, SheetSpec};
