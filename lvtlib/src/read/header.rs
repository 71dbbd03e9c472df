use crate::consts::{FIELD_COUNT_OFFSET, LVTMAGIC};
use crate::error::LvtError;
use nom::{bytes::complete::take, number::complete::le_u32, IResult};

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub(crate) struct Header {
    field_count: u32,
    record_count: u32,
}

impl Header {
    pub(crate) fn field_count(&self) -> u32 {
        self.field_count
    }

    pub(crate) fn record_count(&self) -> u32 {
        self.record_count
    }
}

/// Consumes the fixed-layout header and leaves the input positioned at the
/// first field descriptor. Neither count is bounds-checked here: absurd
/// values surface later as stream exhaustion.
pub(crate) fn parse_header(input: &[u8]) -> IResult<&[u8], Header, LvtError> {
    let (input, magic) = take(LVTMAGIC.len())(input)?;
    if magic != LVTMAGIC {
        return Err(nom::Err::Error(LvtError::BadMagic));
    }
    let (input, _reserved) = take(FIELD_COUNT_OFFSET - LVTMAGIC.len())(input)?;
    let (input, field_count) = le_u32(input)?;
    let (input, record_count) = le_u32(input)?;

    Ok((
        input,
        Header {
            field_count,
            record_count,
        },
    ))
}
