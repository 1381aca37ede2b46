use crate::Error;
use crate::Result;

/// Scalar multiplier between the high and low halves of a packed pair.
const RADIX: u32 = 1 << 8;

/// Halve a URL by packing each pair of adjacent code points into one.
///
/// The pair `(a, b)` becomes the single char `a * 256 + b`, with `b = 0`
/// standing in for the missing half of an odd-length input. A pair is
/// rejected when its packed value is no valid scalar, when the low half
/// does not fit in a byte, or when the low half is a genuine NUL that
/// decoding would mistake for padding.
pub fn encode(url: &str) -> Result<String> {
    let mut chars = url.chars();
    let mut code = String::new();
    while let Some(hi) = chars.next() {
        code.push(pack(hi, chars.next())?);
    }
    Ok(code)
}

/// Undo [`encode`]. Total on any input, since both halves of a char land
/// below the surrogate range.
pub fn decode(code: &str) -> String {
    code.chars()
        .flat_map(|c| {
            let c = c as u32;
            let hi = char::from_u32(c / RADIX).expect("below the surrogate range");
            let lo = char::from_u32(c % RADIX).expect("below the surrogate range");
            std::iter::once(hi).chain((lo != '\0').then_some(lo))
        })
        .collect()
}

/// one packed char per pair, or the reason there cannot be one
fn pack(hi: char, lo: Option<char>) -> Result<char> {
    let err = || Error::UnshortenablePair {
        hi,
        lo: lo.unwrap_or('\0'),
    };
    let low = match lo {
        None => 0,
        Some('\0') => return Err(err()),
        Some(c) if c as u32 >= RADIX => return Err(err()),
        Some(c) => c as u32,
    };
    char::from_u32(hi as u32 * RADIX + low).ok_or_else(err)
}
