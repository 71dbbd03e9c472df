mod decoders;
mod field_table;
mod header;
#[cfg(feature = "inspect")]
pub mod inspect;
mod record_table;
pub mod table;
