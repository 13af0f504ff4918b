//! This is a collection of useful utilities.

use std::fs::{self, File};
use std::io::{Error, Write};
use std::path::Path;

pub fn save_to_file<P: AsRef<Path>>(
    filename: P,
    content: &[u8],
) -> Result<(), Error> {
    let mut f = File::create(filename.as_ref())?;
    f.write_all(content)?;
    #[cfg(feature = "log")]
    log::info!("Wrote {}", filename.as_ref().display());
    Result::Ok(())
}

/// Reads a text file. Files that are not valid UTF-8 are decoded as Latin-1,
/// which maps every byte to the code point of the same value.
pub fn read_text_file<P: AsRef<Path>>(filename: P) -> Result<String, Error> {
    let bytes = fs::read(filename.as_ref())?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            #[cfg(feature = "log")]
            log::warn!(
                "{} is not valid UTF-8, decoding it as Latin-1",
                filename.as_ref().display()
            );
            Ok(decode_latin1(err.as_bytes()))
        }
    }
}

pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|b| *b as char).collect()
}

#[test]
fn test_decode_latin1() {
    assert_eq!(decode_latin1(b"caf\xe9"), "café");
    assert_eq!(decode_latin1(b"plain"), "plain");
}
