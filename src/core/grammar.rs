//! # Textual Grammar
//!
//! Parsing and canonical formatting for both address families.
//!
//! Parsing is lenient in the ways the address grammars allow (leading zeros in
//! IPv4 octets, upper-case hex, fully expanded or compressed IPv6 groups) while
//! formatting always yields one canonical string per binary value.
//!
//! ## Canonical IPv6 output
//! - `::a.b.c.d` for IPv4-compatible addresses (except `::` and `::1`)
//! - `::ffff:a.b.c.d` for IPv4-mapped addresses
//! - otherwise lowercase hex groups, the leftmost longest run of two or more
//!   zero groups replaced by `::` (RFC 5952)

use crate::core::v4::AddressV4;
use crate::core::v6::{AddressV6, V4Embedding};
use crate::error::ParseError;
use std::fmt::{self, Write};

/// Number of 16-bit groups in an IPv6 address
const V6_GROUPS: usize = 8;

/// Parse dotted-decimal IPv4 text.
///
/// # Errors
/// Returns `ParseError::InvalidV4Format` for anything other than four
/// `.`-separated groups of 1-3 digits, each at most 255.
pub fn parse_v4(text: &str) -> Result<AddressV4, ParseError> {
    parse_dotted(text)
        .map(AddressV4::from_octets)
        .ok_or(ParseError::InvalidV4Format)
}

/// Format an IPv4 address as dotted decimal.
pub fn format_v4(addr: &AddressV4) -> String {
    let mut out = String::with_capacity(15);
    // Writing into a String cannot fail
    let _ = write_v4(&mut out, &addr.octets());
    out
}

/// Parse colon-separated IPv6 text, with optional `::` and dotted IPv4 tail.
///
/// # Errors
/// Returns `ParseError::InvalidV6Format` on a wrong group count, more than one
/// `::`, an empty or over-long group, or a malformed dotted tail.
pub fn parse_v6(text: &str) -> Result<AddressV6, ParseError> {
    parse_colon_hex(text)
        .map(AddressV6::from_segments)
        .ok_or(ParseError::InvalidV6Format)
}

/// Format an IPv6 address in its canonical form.
pub fn format_v6(addr: &AddressV6) -> String {
    let mut out = String::with_capacity(39);
    let _ = write_v6(&mut out, &addr.octets());
    out
}

/// Write four octets as dotted decimal.
pub fn write_v4<W: Write>(out: &mut W, octets: &[u8; 4]) -> fmt::Result {
    let [a, b, c, d] = *octets;
    write!(out, "{a}.{b}.{c}.{d}")
}

/// Write sixteen bytes in canonical IPv6 form.
pub fn write_v6<W: Write>(out: &mut W, octets: &[u8; 16]) -> fmt::Result {
    let tail = [octets[12], octets[13], octets[14], octets[15]];
    match V4Embedding::classify(octets) {
        Some(V4Embedding::Mapped) => {
            out.write_str("::ffff:")?;
            write_v4(out, &tail)
        }
        // :: and ::1 keep their usual spelling
        Some(V4Embedding::Compatible) if u32::from_be_bytes(tail) > 1 => {
            out.write_str("::")?;
            write_v4(out, &tail)
        }
        _ => write_hex_groups(out, &segments_of(octets)),
    }
}

fn write_hex_groups<W: Write>(out: &mut W, segments: &[u16; V6_GROUPS]) -> fmt::Result {
    match longest_zero_run(segments) {
        Some((start, len)) => {
            write_hex_run(out, &segments[..start])?;
            out.write_str("::")?;
            write_hex_run(out, &segments[start + len..])
        }
        None => write_hex_run(out, segments),
    }
}

fn write_hex_run<W: Write>(out: &mut W, run: &[u16]) -> fmt::Result {
    for (i, segment) in run.iter().enumerate() {
        if i > 0 {
            out.write_char(':')?;
        }
        write!(out, "{segment:x}")?;
    }
    Ok(())
}

/// Leftmost longest run of at least two zero groups, as `(start, len)`.
fn longest_zero_run(segments: &[u16; V6_GROUPS]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut run_start: Option<usize> = None;

    for i in 0..=V6_GROUPS {
        let is_zero = i < V6_GROUPS && segments[i] == 0;
        match (is_zero, run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                let len = i - start;
                if len >= 2 && best.map_or(true, |(_, best_len)| len > best_len) {
                    best = Some((start, len));
                }
                run_start = None;
            }
            _ => {}
        }
    }

    best
}

fn segments_of(octets: &[u8; 16]) -> [u16; V6_GROUPS] {
    let mut segments = [0u16; V6_GROUPS];
    for (segment, pair) in segments.iter_mut().zip(octets.chunks_exact(2)) {
        *segment = u16::from_be_bytes([pair[0], pair[1]]);
    }
    segments
}

fn parse_dotted(text: &str) -> Option<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut groups = text.split('.');

    for slot in octets.iter_mut() {
        let group = groups.next()?.as_bytes();
        if group.is_empty() || group.len() > 3 || !group.iter().all(u8::is_ascii_digit) {
            return None;
        }
        let value = group
            .iter()
            .fold(0u16, |acc, digit| acc * 10 + u16::from(digit - b'0'));
        *slot = u8::try_from(value).ok()?;
    }

    match groups.next() {
        Some(_) => None,
        None => Some(octets),
    }
}

fn parse_colon_hex(text: &str) -> Option<[u16; V6_GROUPS]> {
    match text.split_once("::") {
        None => {
            let (segments, len) = parse_groups(text, true)?;
            (len == V6_GROUPS).then_some(segments)
        }
        Some((head, tail)) => {
            if tail.contains("::") {
                return None;
            }
            let (head_segments, head_len) = parse_groups(head, false)?;
            let (tail_segments, tail_len) = parse_groups(tail, true)?;
            // "::" must stand for at least one zero group
            if head_len + tail_len >= V6_GROUPS {
                return None;
            }

            let mut segments = [0u16; V6_GROUPS];
            segments[..head_len].copy_from_slice(&head_segments[..head_len]);
            segments[V6_GROUPS - tail_len..].copy_from_slice(&tail_segments[..tail_len]);
            Some(segments)
        }
    }
}

/// Parse `:`-separated groups; the last one may be a dotted quad when
/// `allow_dotted_tail` is set. Returns the groups and how many were filled.
fn parse_groups(part: &str, allow_dotted_tail: bool) -> Option<([u16; V6_GROUPS], usize)> {
    let mut segments = [0u16; V6_GROUPS];
    let mut len = 0;
    if part.is_empty() {
        return Some((segments, len));
    }

    let mut groups = part.split(':').peekable();
    while let Some(group) = groups.next() {
        let is_last = groups.peek().is_none();
        if is_last && allow_dotted_tail && group.contains('.') {
            let [a, b, c, d] = parse_dotted(group)?;
            if len + 2 > V6_GROUPS {
                return None;
            }
            segments[len] = u16::from_be_bytes([a, b]);
            segments[len + 1] = u16::from_be_bytes([c, d]);
            len += 2;
        } else {
            if len == V6_GROUPS
                || group.is_empty()
                || group.len() > 4
                || !group.bytes().all(|b| b.is_ascii_hexdigit())
            {
                return None;
            }
            segments[len] = u16::from_str_radix(group, 16).ok()?;
            len += 1;
        }
    }

    Some((segments, len))
}
