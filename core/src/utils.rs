use crate::constants::PREVIEW_LEN;

/// Short printable form of a byte buffer for logs.
/// Short ASCII-only buffers print as `b"..."`, anything else as a hex prefix.
pub fn fmt_bytes(b: &[u8]) -> String {
    if !b.is_empty() && b.len() <= PREVIEW_LEN && b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        return format!("b\"{}\"", String::from_utf8_lossy(b));
    }
    let shown = &b[..b.len().min(PREVIEW_LEN)];
    if shown.len() < b.len() {
        format!("0x{}.. ({} bytes)", hex::encode(shown), b.len())
    } else {
        format!("0x{}", hex::encode(shown))
    }
}

/// Human readable byte count.
pub fn fmt_size(n: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;
    match n {
        n if n >= MIB => format!("{:.2} MiB", n as f64 / MIB as f64),
        n if n >= KIB => format!("{:.2} KiB", n as f64 / KIB as f64),
        n => format!("{} B", n),
    }
}
