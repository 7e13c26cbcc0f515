const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Encodes `buf` as uppercase hex, high nibble first, without separators.
pub fn base16_encode(buf: &[u8]) -> String {
    let mut hex = String::with_capacity(buf.len() * 2);
    for &b in buf {
        hex.push(HEX_DIGITS[(b >> 4) as usize] as char);
        hex.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
    }
    hex
}
