//! Hexdump text normalization.
//!
//! Accepts two line dialects, detected per line:
//! - **offset-annotated** (`00000000: 89 50 4e 47 0d 0a 1a 0a  .PNG....`), as written by `xxd`
//!   or by [`encode`](crate::encode) in [`Style::Xxd`](crate::Style);
//! - **plain** hex, where anything outside `0-9a-fA-F` is dropped.

mod line;
mod stream;

pub use line::{split_lines, Dialect, HexLine, HEX_FIELD_WIDTH};
pub use stream::{parse_hexdump, HexDigitStream};
