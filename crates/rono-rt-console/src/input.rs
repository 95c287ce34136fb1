use std::io::{self, BufRead};

/// Size of the line buffer, terminator slot included: a line yields at most
/// `LINE_BUFFER_BYTES - 1` bytes and the remainder stays buffered.
pub const LINE_BUFFER_BYTES: usize = 1024;

/// Reads one line of at most `buffer_bytes - 1` bytes, newline included in
/// the count, and strips a single trailing `\n`. A NUL byte ends the line
/// early; what follows it up to the newline is consumed and dropped.
///
/// Returns `None` at end of stream when nothing was read, or on a read error.
pub fn read_line_from<R: BufRead>(input: &mut R, buffer_bytes: usize) -> Option<Vec<u8>> {
    let max = buffer_bytes.saturating_sub(1);
    let mut out: Vec<u8> = Vec::new();

    while out.len() < max {
        let consume_n: usize;
        let saw_newline: bool;
        {
            let buf = match input.fill_buf() {
                Ok(buf) => buf,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(_) => return None,
            };
            if buf.is_empty() {
                break;
            }

            let window = &buf[..buf.len().min(max - out.len())];
            match window.iter().position(|&b| b == b'\n') {
                Some(pos) => {
                    out.extend_from_slice(&window[..=pos]);
                    consume_n = pos + 1;
                    saw_newline = true;
                }
                None => {
                    out.extend_from_slice(window);
                    consume_n = window.len();
                    saw_newline = false;
                }
            }
        }

        input.consume(consume_n);
        if saw_newline {
            break;
        }
    }

    if out.is_empty() {
        return None;
    }
    if let Some(nul) = out.iter().position(|&b| b == 0) {
        out.truncate(nul);
    } else if out.last() == Some(&b'\n') {
        out.pop();
    }
    Some(out)
}

fn skip_space(text: &[u8]) -> &[u8] {
    let start = text
        .iter()
        .position(|b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c))
        .unwrap_or(text.len());
    &text[start..]
}

/// Longest decimal prefix after leading whitespace; 0 when there is none.
/// Out-of-range values clamp to `i64::MAX` / `i64::MIN`.
pub fn parse_int(text: &[u8]) -> i64 {
    match lexical_core::parse_partial::<i64>(skip_space(text)) {
        Ok((value, _)) => value,
        Err(lexical_core::Error::Overflow(_)) => i64::MAX,
        Err(lexical_core::Error::Underflow(_)) => i64::MIN,
        Err(_) => 0,
    }
}

/// Longest floating-point prefix after leading whitespace; 0.0 when there
/// is none. An exponent marker without digits (`1e`, `2.5E+`) is not part
/// of the prefix.
pub fn parse_float(text: &[u8]) -> f64 {
    let text = skip_space(text);
    match lexical_core::parse_partial::<f64>(text) {
        Ok((value, _)) => value,
        Err(_) => {
            let Some(cut) = text.iter().position(|b| matches!(b, b'e' | b'E')) else {
                return 0.0;
            };
            match lexical_core::parse_partial::<f64>(&text[..cut]) {
                Ok((value, used)) if used == cut => value,
                _ => 0.0,
            }
        }
    }
}

/// Only the exact tokens `true` and `1` are true.
pub fn parse_bool(text: &[u8]) -> bool {
    matches!(text, b"true" | b"1")
}

pub fn read_int_from<R: BufRead>(input: &mut R) -> i64 {
    read_line_from(input, LINE_BUFFER_BYTES).map_or(0, |line| parse_int(&line))
}

pub fn read_float_from<R: BufRead>(input: &mut R) -> f64 {
    read_line_from(input, LINE_BUFFER_BYTES).map_or(0.0, |line| parse_float(&line))
}

pub fn read_bool_from<R: BufRead>(input: &mut R) -> bool {
    read_line_from(input, LINE_BUFFER_BYTES).is_some_and(|line| parse_bool(&line))
}

pub fn read_line() -> Option<Vec<u8>> {
    read_line_from(&mut io::stdin().lock(), LINE_BUFFER_BYTES)
}

pub fn read_int() -> i64 {
    read_int_from(&mut io::stdin().lock())
}

pub fn read_float() -> f64 {
    read_float_from(&mut io::stdin().lock())
}

pub fn read_bool() -> bool {
    read_bool_from(&mut io::stdin().lock())
}
