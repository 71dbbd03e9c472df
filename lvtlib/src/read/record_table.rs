use super::decoders::parse_value;
use crate::error::LvtError;
use crate::schema::Schema;
use crate::types::FieldValue;
use nom::IResult;

fn parse_record<'a>(
    input: &'a [u8],
    schema: &Schema,
) -> IResult<&'a [u8], Vec<FieldValue>, LvtError> {
    let mut values = Vec::with_capacity(schema.fields().len());
    let mut input = input;
    for _field in schema.fields() {
        let (rest, value) = parse_value(input)?;
        input = rest;
        values.push(value);
    }
    Ok((input, values))
}

pub(crate) fn parse_record_table<'a>(
    input: &'a [u8],
    schema: &Schema,
    record_count: u32,
) -> IResult<&'a [u8], Vec<Vec<FieldValue>>, LvtError> {
    // Bound the allocation by the input size so a bogus record count fails
    // with EOF instead of exhausting memory.
    let mut records = Vec::with_capacity(
        usize::try_from(record_count)
            .unwrap_or(usize::MAX)
            .min(input.len()),
    );
    let mut input = input;
    for _ in 0..record_count {
        let (rest, record) = parse_record(input, schema)?;
        input = rest;
        records.push(record);
    }
    Ok((input, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDefinition;
    use assert_matches::assert_matches;

    fn two_field_schema() -> Schema {
        Schema::with_fields(vec![
            FieldDefinition::new("id", 4),
            FieldDefinition::new("score", 4),
        ])
    }

    #[test]
    fn test_parse_record_table() {
        #[rustfmt::skip]
        let buf = &[// Record 1
                    0x01, // tag: integer
                    0x2A, // 42
                    0x00,
                    0x00,
                    0x00,
                    0x03, // tag: float
                    0x00, // 1.5f32
                    0x00,
                    0xC0,
                    0x3F,

                    // Record 2
                    0x02, // tag: integer, alternate encoding
                    0x00, // 0x80000000: unsigned magnitude
                    0x00,
                    0x00,
                    0x80,
                    0x03, // tag: float
                    0x00, // 0.0f32
                    0x00,
                    0x00,
                    0x00];
        assert_matches!(parse_record_table(buf, &two_field_schema(), 2), Ok((&[], records)) => {
            assert_eq!(records, vec![
                vec![FieldValue::I32(42), FieldValue::F32(1.5)],
                vec![FieldValue::U32Hex(0x80000000), FieldValue::F32(0.0)],
            ]);
        });
    }

    #[test]
    fn test_parse_record_table_zero_records() {
        let buf = &[];
        assert_matches!(parse_record_table(buf, &two_field_schema(), 0), Ok((&[], records)) => {
            assert!(records.is_empty());
        });
    }

    #[test]
    fn test_parse_record_table_unknown_tag_in_last_field() {
        #[rustfmt::skip]
        let buf = &[// Record 1
                    0x01, // tag: integer
                    0x2A, // 42
                    0x00,
                    0x00,
                    0x00,
                    0x05, // tag: unknown, in the last field of the last record
                    0x00,
                    0x00,
                    0x00,
                    0x00];
        assert_matches!(
            parse_record_table(buf, &two_field_schema(), 1),
            Err(nom::Err::Error(LvtError::UnknownTag(0x05)))
        );
    }

    #[test]
    fn test_parse_record_table_truncated() {
        #[rustfmt::skip]
        let buf = &[0x01, // tag: integer
                    0x2A, // 42
                    0x00,
                    0x00,
                    0x00,
                    0x03]; // tag: float, payload missing
        assert_matches!(
            parse_record_table(buf, &two_field_schema(), 1),
            Err(nom::Err::Error(LvtError::UnexpectedEof))
        );
    }

    #[test]
    fn test_parse_record_table_absurd_count() {
        #[rustfmt::skip]
        let buf = &[0x01, // tag: integer
                    0x2A, // 42
                    0x00,
                    0x00,
                    0x00,
                    0x03, // tag: float
                    0x00, // 1.5f32
                    0x00,
                    0xC0,
                    0x3F];
        assert_matches!(
            parse_record_table(buf, &two_field_schema(), u32::MAX),
            Err(nom::Err::Error(LvtError::UnexpectedEof))
        );
    }

    #[test]
    fn test_parse_record_table_count_exceeds_input() {
        #[rustfmt::skip]
        let buf = &[0x01, // tag: integer
                    0x2A, // 42
                    0x00,
                    0x00,
                    0x00,
                    0x03, // tag: float
                    0x00, // 1.5f32
                    0x00,
                    0xC0,
                    0x3F];
        assert_matches!(
            parse_record_table(buf, &two_field_schema(), 2),
            Err(nom::Err::Error(LvtError::UnexpectedEof))
        );
    }
}
