//! Workaround for the Arduino Mega bootloader "!!!" bug.
//!
//! Three consecutive `!` bytes in a flashed image drop the bootloader into
//! its monitor mode and the upload hangs. Font and bitmap data are rewritten
//! so that no such run survives; style and document data are only scanned.

const BANG: u8 = b'!';
const SPACE: u8 = b' ';

/// Result of [`fix_triple_bang`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixed {
    pub bytes: Vec<u8>,
    /// At least one byte was replaced.
    pub replaced: bool,
}

/// Replace the third byte of every `!!!` run in the input with a space.
///
/// The test looks at the input bytes, so `!!!!` becomes `!!  `.
pub fn fix_triple_bang(data: &[u8]) -> Fixed {
    let mut replaced = false;
    let bytes = data
        .iter()
        .enumerate()
        .map(|(i, &b)| {
            if i >= 2 && data[i - 2] == BANG && data[i - 1] == BANG && b == BANG {
                replaced = true;
                SPACE
            } else {
                b
            }
        })
        .collect();

    Fixed { bytes, replaced }
}

pub fn contains_triple_bang(data: &[u8]) -> bool {
    data.windows(3).any(|w| w == [BANG; 3])
}
