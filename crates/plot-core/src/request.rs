// File: crates/plot-core/src/request.rs
// Summary: Curve parameters carried by a plot request, parsed leniently from a URL query string.

/// The six integer parameters of the piecewise curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlotRequest {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub va: i64,
    pub vb: i64,
    pub vc: i64,
}

impl Default for PlotRequest {
    fn default() -> Self {
        Self { a: -2, b: 0, c: 2, va: 3, vb: -2, vc: 4 }
    }
}

impl PlotRequest {
    /// Parse `a=..&b=..` (a leading `?` is allowed). Never fails: missing, empty or non-numeric
    /// values keep their default, unknown keys are ignored and the first occurrence of a key
    /// wins. Values are read like `parseInt`: `"3.9"` is 3 and `"4px"` is 4.
    pub fn from_query(query: &str) -> Self {
        let mut req = Self::default();
        let mut seen = [false; 6];
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let (slot, field) = match percent_decode(key).as_str() {
                "a" => (0, &mut req.a),
                "b" => (1, &mut req.b),
                "c" => (2, &mut req.c),
                "va" => (3, &mut req.va),
                "vb" => (4, &mut req.vb),
                "vc" => (5, &mut req.vc),
                _ => continue,
            };
            if seen[slot] {
                continue;
            }
            seen[slot] = true;
            if let Some(v) = parse_int_prefix(&percent_decode(raw)) {
                *field = v;
            }
        }
        req
    }
}

/// Leading whitespace, optional sign, then at least one decimal digit; the rest is ignored.
fn parse_int_prefix(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// `+` to space and `%XX` escapes; malformed escapes are kept verbatim.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                match (hex(bytes[i + 1]), hex(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 2;
                    }
                    _ => out.push(b'%'),
                }
            }
            other => out.push(other),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex(b: u8) -> Option<u8> {
    (b as char).to_digit(16).map(|d| d as u8)
}
