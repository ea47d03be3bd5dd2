//! Conflict file rendering
//!
//! A conflicted path is replaced by a file framing both versions:
//!
//! ```text
//! <<<<<<< HEAD
//! <current version>
//! =======
//! <given version>
//! >>>>>>>
//! ```
//!
//! A side that does not track the path contributes nothing between its markers.

use bytes::{BufMut, Bytes, BytesMut};

pub const CURRENT_MARKER: &[u8] = b"<<<<<<< HEAD\n";
pub const SEPARATOR_MARKER: &[u8] = b"=======\n";
pub const GIVEN_MARKER: &[u8] = b">>>>>>>\n";

/// Content of the conflict file for the two versions of a path
pub fn render(current: Option<&[u8]>, given: Option<&[u8]>) -> Bytes {
    let mut content = BytesMut::new();

    content.put_slice(CURRENT_MARKER);
    put_version(&mut content, current);
    content.put_slice(SEPARATOR_MARKER);
    put_version(&mut content, given);
    content.put_slice(GIVEN_MARKER);

    content.freeze()
}

// markers always start on their own line
fn put_version(content: &mut BytesMut, version: Option<&[u8]>) {
    if let Some(version) = version
        && !version.is_empty()
    {
        content.put_slice(version);
        if !version.ends_with(b"\n") {
            content.put_u8(b'\n');
        }
    }
}
