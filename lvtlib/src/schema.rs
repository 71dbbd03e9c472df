#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Schema {
    fields: Vec<FieldDefinition>,
}

impl Schema {
    pub fn with_fields(fields: Vec<FieldDefinition>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// On-disk size of one record: a one-byte type tag plus
    /// `declared_length` payload bytes per field.
    pub fn bytes_per_record(&self) -> usize {
        self.fields
            .iter()
            .map(|field| usize::from(field.declared_length()) + 1)
            .sum()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    name: String,
    declared_length: u8,
}

impl FieldDefinition {
    pub fn new<S: Into<String>>(name: S, declared_length: u8) -> Self {
        Self {
            name: name.into(),
            declared_length,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Payload bytes this field is declared to occupy in every record. Only
    /// used for bookkeeping: the type tag read at decode time determines the
    /// actual payload size.
    pub fn declared_length(&self) -> u8 {
        self.declared_length
    }
}
