use std::fs;
use std::io::{self, Read};

use fconv::error::Result;
use fconv::types::InputSource;

pub fn read_input(source: &InputSource) -> Result<Vec<u8>> {
    match source {
        InputSource::Stdin => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
        InputSource::File(path) => Ok(fs::read(path)?),
        InputSource::Literal(data) => Ok(data.clone()),
    }
}
