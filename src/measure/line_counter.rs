use std::io::{self, ErrorKind, Read};

const BUFFER_SIZE: usize = 64 * 1024;

/// Counts lines the way a text-mode line iterator sees them.
///
/// `\n`, `\r\n` and a lone `\r` each end one line. Trailing bytes after the
/// last terminator form one more line. The content is never decoded, so the
/// count is defined for any byte sequence.
pub fn count_lines<R: Read + ?Sized>(reader: &mut R) -> io::Result<u64> {
    let mut counter = LineCounter::default();
    let mut buffer = vec![0u8; BUFFER_SIZE];

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        counter.feed(&buffer[..read]);
    }

    Ok(counter.finish())
}

#[derive(Debug, Default)]
struct LineCounter {
    lines: u64,
    // bytes seen since the last terminator
    open_line: bool,
    after_cr: bool,
}

impl LineCounter {
    fn feed(&mut self, chunk: &[u8]) {
        for &byte in chunk {
            match byte {
                b'\n' => {
                    // second half of \r\n, already counted
                    if !self.after_cr {
                        self.lines += 1;
                    }
                    self.after_cr = false;
                    self.open_line = false;
                }
                b'\r' => {
                    self.lines += 1;
                    self.after_cr = true;
                    self.open_line = false;
                }
                _ => {
                    self.after_cr = false;
                    self.open_line = true;
                }
            }
        }
    }

    fn finish(self) -> u64 {
        self.lines + u64::from(self.open_line)
    }
}
