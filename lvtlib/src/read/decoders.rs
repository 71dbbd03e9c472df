use crate::error::LvtError;
use crate::types::FieldValue;
use nom::{
    bytes::complete::take,
    number::complete::{le_f32, le_u8},
    IResult,
};

/// MSB-range rule inherited from the format's producers: one tag family is
/// overloaded for both plain signed counters and opaque ID/flag values, and
/// a payload whose most significant byte (the last byte, little-endian)
/// falls in `[0x80, 0xF0)` is treated as an unsigned magnitude. MSB `0x7F`
/// and `0xF0` both take the signed path. No authoritative schema exists to
/// replace this heuristic; keep it verbatim.
pub(crate) fn is_unsigned_magnitude(payload: [u8; 4]) -> bool {
    (0x80..0xF0).contains(&payload[3])
}

/// Reads one type tag and its 4-byte little-endian payload.
pub(crate) fn parse_value(input: &[u8]) -> IResult<&[u8], FieldValue, LvtError> {
    let (input, type_tag) = le_u8(input)?;
    match type_tag {
        0x01 | 0x02 => {
            let (input, raw) = take(4_usize)(input)?;
            let payload: [u8; 4] = raw.try_into().expect("take(4) yields 4 bytes");
            let value = if is_unsigned_magnitude(payload) {
                FieldValue::U32Hex(u32::from_le_bytes(payload))
            } else {
                FieldValue::I32(i32::from_le_bytes(payload))
            };
            Ok((input, value))
        }
        0x03 => {
            let (input, value) = le_f32(input)?;
            Ok((input, FieldValue::F32(value)))
        }
        _ => Err(nom::Err::Error(LvtError::UnknownTag(type_tag))),
    }
}
