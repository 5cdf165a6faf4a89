//! src/headers/decode.rs
//!
//! Header decoding utilities.
//!
//! Design notes:
//! - Parses text produced by `encode_header` back into bytes and names.
//! - Validation runs after parsing: guards, names and length must agree.
//! - Byte tokens are accepted in either hex case; `check_layout` is the strict
//!   check for line wrapping.

use crate::constants::{ARRAY_CTYPE, BYTES_PER_LINE, LEN_CTYPE};
use crate::headers::types::{DecodedHeader, HeaderError, Identifier};

type Line<'a> = (usize, &'a str);

/// Array name plus the numbered payload lines between `{` and `};`.
struct ArrayBody<'a> {
    name: &'a str,
    lines: Vec<Line<'a>>,
    close_idx: usize,
}

fn numbered(text: &str) -> Vec<Line<'_>> {
    text.lines().enumerate().map(|(i, l)| (i + 1, l)).collect()
}

fn directive<'a>(lines: &[Line<'a>], prefix: &'static str) -> Result<&'a str, HeaderError> {
    lines
        .iter()
        .find_map(|&(_, l)| l.trim_start().strip_prefix(prefix))
        .map(str::trim)
        .ok_or(HeaderError::MissingGuard { directive: prefix.trim_end() })
}

fn endif_token<'a>(lines: &[Line<'a>]) -> Result<&'a str, HeaderError> {
    let rest = directive(lines, "#endif")?;
    Ok(rest.strip_prefix("//").unwrap_or(rest).trim())
}

fn array_body<'a>(lines: &[Line<'a>]) -> Result<ArrayBody<'a>, HeaderError> {
    let decl_prefix = format!("{} ", ARRAY_CTYPE);

    let (decl_idx, name) = lines
        .iter()
        .enumerate()
        .find_map(|(idx, &(_, l))| {
            l.trim()
                .strip_prefix(decl_prefix.as_str())
                .and_then(|rest| rest.strip_suffix("[] = {"))
                .map(|name| (idx, name.trim()))
        })
        .ok_or(HeaderError::MissingDeclaration)?;

    let close_off = lines[decl_idx + 1..]
        .iter()
        .position(|(_, l)| l.trim() == "};")
        .ok_or(HeaderError::Unterminated)?;
    let close_idx = decl_idx + 1 + close_off;

    Ok(ArrayBody {
        name,
        lines: lines[decl_idx + 1..close_idx].to_vec(),
        close_idx,
    })
}

fn parse_token(line: usize, token: &str) -> Result<u8, HeaderError> {
    let bad = || HeaderError::BadByteToken { line, token: token.to_string() };

    let digits = token
        .strip_suffix(',')
        .and_then(|t| t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")))
        .filter(|d| d.len() == 2)
        .ok_or_else(bad)?;

    match hex::decode(digits) {
        Ok(v) if v.len() == 1 => Ok(v[0]),
        _ => Err(bad()),
    }
}

fn length_constant(lines: &[Line<'_>], after: usize) -> Result<(String, usize), HeaderError> {
    let prefix = format!("{} ", LEN_CTYPE);

    let rest = lines[after..]
        .iter()
        .find_map(|&(_, l)| l.trim().strip_prefix(prefix.as_str()))
        .ok_or(HeaderError::MissingLength)?;

    let (name, value) = rest
        .strip_suffix(';')
        .and_then(|r| r.rsplit_once('='))
        .ok_or(HeaderError::MissingLength)?;

    let declared = value.trim().parse::<usize>().map_err(|_| HeaderError::MissingLength)?;
    Ok((name.trim().to_string(), declared))
}

/// Parse and validate a header produced by `encode_header`.
///
/// # Returns
/// - `Ok(DecodedHeader)` when guards, names and length are consistent.
/// - `Err(HeaderError)` naming the first inconsistency found.
pub fn decode_header(text: &str) -> Result<DecodedHeader, HeaderError> {
    let lines = numbered(text);

    let ifndef = directive(&lines, "#ifndef ")?;
    let define = directive(&lines, "#define ")?;
    let endif = endif_token(&lines)?;

    for found in [define, endif] {
        if found != ifndef {
            return Err(HeaderError::GuardMismatch {
                expected: ifndef.to_string(),
                found: found.to_string(),
            });
        }
    }

    let body = array_body(&lines)?;
    let identifier = Identifier::new(body.name);

    let mut bytes = Vec::new();
    for (line, content) in &body.lines {
        for token in content.split_whitespace() {
            bytes.push(parse_token(*line, token)?);
        }
    }

    let (len_name, declared_len) = length_constant(&lines, body.close_idx)?;
    if len_name != identifier.len_name() {
        return Err(HeaderError::NameMismatch {
            expected: identifier.len_name(),
            found: len_name,
        });
    }
    if declared_len != bytes.len() {
        return Err(HeaderError::LengthMismatch {
            declared: declared_len,
            actual: bytes.len(),
        });
    }

    let expected_guard = identifier.guard_token();
    if ifndef != expected_guard {
        return Err(HeaderError::GuardMismatch {
            expected: expected_guard,
            found: ifndef.to_string(),
        });
    }

    Ok(DecodedHeader {
        guard: ifndef.to_string(),
        identifier,
        bytes,
        declared_len,
    })
}

/// Check the payload wrapping: at most `BYTES_PER_LINE` tokens per line and
/// exactly that many on every line but the last.
pub fn check_layout(text: &str) -> Result<(), HeaderError> {
    let lines = numbered(text);
    let body = array_body(&lines)?;

    let counts: Vec<(usize, usize)> = body
        .lines
        .iter()
        .map(|(line, l)| (*line, l.split_whitespace().count()))
        .filter(|(_, n)| *n > 0)
        .collect();

    let last = counts.len().saturating_sub(1);
    for (idx, (line, tokens)) in counts.into_iter().enumerate() {
        let short_inner = idx < last && tokens != BYTES_PER_LINE;
        if tokens > BYTES_PER_LINE || short_inner {
            return Err(HeaderError::LayoutViolation {
                line,
                tokens,
                expected: BYTES_PER_LINE,
            });
        }
    }
    Ok(())
}
