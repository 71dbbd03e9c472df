use super::field_table::parse_field_table;
use super::header::parse_header;
use super::record_table::parse_record_table;
use crate::error::Result;
use crate::schema::Schema;
use crate::types::FieldValue;

/// Fully decoded contents of an LVT file: the field schema plus every
/// record, in file order. Decoding is all-or-nothing; any malformed input
/// yields an error and no records.
#[cfg_attr(test, derive(Debug))]
pub struct TableReader {
    schema: Schema,
    records: Vec<Vec<FieldValue>>,
}

impl TableReader {
    pub fn new(data: &[u8]) -> Result<Self> {
        let (input, header) = parse_header(data)?;
        let (input, schema) = parse_field_table(input, header.field_count())?;
        let (_, records) = parse_record_table(input, &schema, header.record_count())?;

        Ok(Self { schema, records })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn records(&self) -> &[Vec<FieldValue>] {
        self.records.as_slice()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}
