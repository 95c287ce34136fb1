use std::io;

/// Printed in place of an absent string.
pub const NULL_TEXT: &[u8] = b"(null)";

const MARKER: &[u8] = b"{}";

fn write_line<W: io::Write>(out: &mut W, text: &[u8]) -> io::Result<()> {
    let mut line = Vec::with_capacity(text.len() + 1);
    line.extend_from_slice(text);
    line.push(b'\n');
    out.write_all(&line)
}

/// Fixed notation with six fractional digits, like C's `%f`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    format!("{value:.6}")
}

/// Replaces every `{}` in `template` with the decimal text of `value`.
pub fn interpolate(template: &[u8], value: i64) -> Vec<u8> {
    let mut digits = itoa::Buffer::new();
    let digits = digits.format(value).as_bytes();

    let mut out = Vec::with_capacity(template.len() + digits.len());
    let mut rest = template;
    while let Some(&b) = rest.first() {
        if rest.starts_with(MARKER) {
            out.extend_from_slice(digits);
            rest = &rest[MARKER.len()..];
        } else {
            out.push(b);
            rest = &rest[1..];
        }
    }
    out
}

pub fn write_int<W: io::Write>(out: &mut W, value: i64) -> io::Result<()> {
    let mut buf = itoa::Buffer::new();
    write_line(out, buf.format(value).as_bytes())
}

pub fn write_float<W: io::Write>(out: &mut W, value: f64) -> io::Result<()> {
    write_line(out, format_float(value).as_bytes())
}

pub fn write_bool<W: io::Write>(out: &mut W, value: bool) -> io::Result<()> {
    let text: &[u8] = if value { b"true" } else { b"false" };
    write_line(out, text)
}

pub fn write_str<W: io::Write>(out: &mut W, text: Option<&[u8]>) -> io::Result<()> {
    write_line(out, text.unwrap_or(NULL_TEXT))
}

pub fn write_interpolated<W: io::Write>(out: &mut W, template: &[u8], value: i64) -> io::Result<()> {
    write_line(out, &interpolate(template, value))
}

/// With no template this is [`write_int`]; otherwise [`write_interpolated`].
pub fn write_format_int<W: io::Write>(
    out: &mut W,
    template: Option<&[u8]>,
    value: i64,
) -> io::Result<()> {
    match template {
        Some(template) => write_interpolated(out, template, value),
        None => write_int(out, value),
    }
}

// Stdout wrappers. Write failures (closed pipe and the like) are dropped.

pub fn print_int(value: i64) {
    let _ = write_int(&mut io::stdout().lock(), value);
}

pub fn print_float(value: f64) {
    let _ = write_float(&mut io::stdout().lock(), value);
}

pub fn print_bool(value: bool) {
    let _ = write_bool(&mut io::stdout().lock(), value);
}

pub fn print_str(text: Option<&[u8]>) {
    let _ = write_str(&mut io::stdout().lock(), text);
}

pub fn print_interpolated(template: &[u8], value: i64) {
    let _ = write_interpolated(&mut io::stdout().lock(), template, value);
}

pub fn print_format_int(template: Option<&[u8]>, value: i64) {
    let _ = write_format_int(&mut io::stdout().lock(), template, value);
}
