use std::io::{self, Read};

/// Reads `reader` to the end and returns how many bytes it produced.
///
/// The content is streamed into a sink rather than buffered, so large inputs
/// do not need to fit in memory.
pub fn measure_bytes<R: Read + ?Sized>(reader: &mut R) -> io::Result<u64> {
    io::copy(reader, &mut io::sink())
}
