//! CRC16-XModem: poly 0x1021, init 0x0000, no reflection, no final XOR.

const POLY: u16 = 0x1021;

const TABLE: [u16; 256] = build_table();

const fn build_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = (i as u16) << 8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLY
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Compute the CRC16-XModem checksum of `data`.
pub fn checksum(data: &[u8]) -> u16 {
    data.iter().fold(0u16, |crc, &byte| {
        let index = ((crc >> 8) ^ byte as u16) & 0xff;
        (crc << 8) ^ TABLE[index as usize]
    })
}

/// Checksum as the two bytes appended to a StrKey, low byte first.
pub fn checksum_bytes(data: &[u8]) -> [u8; 2] {
    checksum(data).to_le_bytes()
}
