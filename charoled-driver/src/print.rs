//! Text and number printing
//!
//! The display only knows how to take one character code at a time
//! ([`ByteSink`]). Everything else here is layered on top as free functions,
//! plus [`Printer`] for `write!` formatting.
//!
//! ```ignore
//! print_str(&mut oled, "T=");
//! print_signed(&mut oled, -12);
//! write!(Printer::new(&mut oled), "{:>4}", 42).ok();
//! ```

use core::fmt;

use heapless::Vec;

/// Anything that accepts character codes one at a time
pub trait ByteSink {
    /// Accept one byte, returning how many bytes were taken
    fn write_byte(&mut self, byte: u8) -> usize;
}

impl<T: ByteSink + ?Sized> ByteSink for &mut T {
    fn write_byte(&mut self, byte: u8) -> usize {
        (**self).write_byte(byte)
    }
}

/// Number base for [`print_number`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    const fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }
}

/// Write raw bytes in order
pub fn print_bytes<S: ByteSink + ?Sized>(sink: &mut S, bytes: &[u8]) -> usize {
    bytes.iter().map(|&b| sink.write_byte(b)).sum()
}

/// Write a string's bytes in order
///
/// Non-ASCII text is sent as its UTF-8 bytes; the display maps each byte
/// through its character table.
pub fn print_str<S: ByteSink + ?Sized>(sink: &mut S, text: &str) -> usize {
    print_bytes(sink, text.as_bytes())
}

/// Write an unsigned number, uppercase digits, no prefix
pub fn print_number<S: ByteSink + ?Sized>(sink: &mut S, value: u32, radix: Radix) -> usize {
    let base = radix.base();
    let mut digits: Vec<u8, 32> = Vec::new();
    let mut rest = value;

    loop {
        let digit = (rest % base) as u8;
        let ascii = if digit < 10 {
            b'0' + digit
        } else {
            b'A' + digit - 10
        };
        // 32 binary digits is the most a u32 can need
        let _ = digits.push(ascii);
        rest /= base;
        if rest == 0 {
            break;
        }
    }

    digits.iter().rev().map(|&d| sink.write_byte(d)).sum()
}

/// Write a signed decimal number
pub fn print_signed<S: ByteSink + ?Sized>(sink: &mut S, value: i32) -> usize {
    let mut written = 0;
    if value < 0 {
        written += sink.write_byte(b'-');
    }
    written + print_number(sink, value.unsigned_abs(), Radix::Decimal)
}

/// `core::fmt::Write` over a [`ByteSink`]
pub struct Printer<S> {
    sink: S,
    written: usize,
}

impl<S: ByteSink> Printer<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, written: 0 }
    }

    /// Bytes written so far
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}

impl<S: ByteSink> fmt::Write for Printer<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.written += print_str(&mut self.sink, s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    struct Capture {
        bytes: Vec<u8, 64>,
    }

    impl Capture {
        fn new() -> Self {
            Self { bytes: Vec::new() }
        }
    }

    impl ByteSink for Capture {
        fn write_byte(&mut self, byte: u8) -> usize {
            self.bytes.push(byte).unwrap();
            1
        }
    }

    #[test]
    fn test_print_str() {
        let mut out = Capture::new();
        assert_eq!(print_str(&mut out, "Hi!"), 3);
        assert_eq!(out.bytes.as_slice(), b"Hi!");
    }

    #[test]
    fn test_print_number_radixes() {
        let mut out = Capture::new();
        print_number(&mut out, 0, Radix::Decimal);
        out.bytes.push(b' ').unwrap();
        print_number(&mut out, 1234, Radix::Decimal);
        out.bytes.push(b' ').unwrap();
        print_number(&mut out, 0xBEEF, Radix::Hexadecimal);
        out.bytes.push(b' ').unwrap();
        print_number(&mut out, 5, Radix::Binary);
        out.bytes.push(b' ').unwrap();
        print_number(&mut out, 8, Radix::Octal);
        assert_eq!(out.bytes.as_slice(), b"0 1234 BEEF 101 10");
    }

    #[test]
    fn test_print_number_max() {
        let mut out = Capture::new();
        assert_eq!(print_number(&mut out, u32::MAX, Radix::Binary), 32);
        assert!(out.bytes.iter().all(|&b| b == b'1'));
    }

    #[test]
    fn test_print_signed() {
        let mut out = Capture::new();
        assert_eq!(print_signed(&mut out, -42), 3);
        assert_eq!(print_signed(&mut out, i32::MIN), 11);
        assert_eq!(out.bytes.as_slice(), b"-42-2147483648");
    }

    #[test]
    fn test_printer_formats() {
        let mut out = Capture::new();
        let mut printer = Printer::new(&mut out);
        write!(printer, "{:>4}|{:02X}", 7, 10).unwrap();
        assert_eq!(printer.written(), 7);
        assert_eq!(out.bytes.as_slice(), b"   7|0A");
    }
}
