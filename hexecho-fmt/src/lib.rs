//! Text rendering for bytes echoed from the serial line
#![cfg_attr(not(feature = "std"), no_std)]
use heapless::String;

pub const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";
/// two digits and the line terminator
pub const LINE_LEN: usize = 3;

/// A byte rendered as its two lowercase hex digits
pub type HexByte = String<2>;

/// ASCII digits of `byte`, high nibble first
pub fn hex_digits(byte: u8) -> [u8; 2] {
    [
        HEX_DIGITS[(byte >> 4) as usize],
        HEX_DIGITS[(byte & 0x0f) as usize],
    ]
}

pub fn hex_byte(byte: u8) -> HexByte {
    let mut text = HexByte::new();
    for digit in hex_digits(byte) {
        // capacity is exactly two digits
        let _ = text.push(digit as char);
    }
    text
}

pub fn hex_line(byte: u8) -> [u8; LINE_LEN] {
    let [hi, lo] = hex_digits(byte);
    [hi, lo, b'\n']
}

/// Writes one line for `byte` and flushes it before returning.
#[cfg(feature = "std")]
pub fn write_line<T: std::io::Write>(out: &mut T, byte: u8) -> std::io::Result<()> {
    out.write_all(&hex_line(byte))?;
    out.flush()
}
