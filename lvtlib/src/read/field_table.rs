use crate::error::LvtError;
use crate::schema::{FieldDefinition, Schema};
use nom::{
    bytes::complete::{tag, take_until},
    number::complete::le_u8,
    IResult,
};

fn parse_field_definition(input: &[u8]) -> IResult<&[u8], FieldDefinition, LvtError> {
    let (input, declared_length) = le_u8(input)?;
    let (input, name_bytes) = take_until(&b"\x00"[..])(input)?;
    let (input, _terminator) = tag([0x00])(input)?;

    let name =
        std::str::from_utf8(name_bytes).map_err(|e| nom::Err::Error(LvtError::from(e)))?;

    Ok((input, FieldDefinition::new(name, declared_length)))
}

pub(crate) fn parse_field_table(
    input: &[u8],
    field_count: u32,
) -> IResult<&[u8], Schema, LvtError> {
    // A descriptor occupies at least two bytes, so the declared count alone
    // is never allowed to size the allocation.
    let mut fields = Vec::with_capacity(
        usize::try_from(field_count)
            .unwrap_or(usize::MAX)
            .min(input.len() / 2),
    );
    let mut input = input;
    for _ in 0..field_count {
        let (rest, field) = parse_field_definition(input)?;
        input = rest;
        fields.push(field);
    }
    Ok((input, Schema::with_fields(fields)))
}
