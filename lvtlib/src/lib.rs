mod consts;
pub mod error;
pub mod read;
pub mod schema;
pub mod types;

pub use consts::{FIELD_COUNT_OFFSET, FIELD_TABLE_OFFSET, LVTMAGIC, RECORD_COUNT_OFFSET};
