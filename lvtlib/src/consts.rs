#[rustfmt::skip]
pub const LVTMAGIC: [u8; 4] = [0x6C,  // l
                               0x76,  // v
                               0x74,  // t
                               0x31]; // 1

/// Absolute offset of the little-endian u32 field count. The bytes between
/// the magic number and this offset are reserved and never validated; it is
/// unverified whether they carry version or checksum information.
pub const FIELD_COUNT_OFFSET: usize = 0x0C;

/// Absolute offset of the little-endian u32 record count.
pub const RECORD_COUNT_OFFSET: usize = 0x10;

/// Absolute offset of the first field descriptor.
pub const FIELD_TABLE_OFFSET: usize = 0x14;
