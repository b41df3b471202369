//! Test oracle run from the mounted volume.
//!
//! Prints a start marker the moment its image executes, then opens the
//! fixed data file: exit 0 if the contents streamed to stdout, exit 1 on a
//! denied open or any other error. The controller classifies runs purely on
//! this exit status; the markers exist for the serial-log reader.

use std::fs::File;
use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;
use std::process::ExitCode;

use imatest_core::protocol::{
    FILE_DENIED_MARKER, FILE_ERROR_PREFIX, PROBE_DATA_PATH, PROBE_START_MARKER,
};

/// Read chunk size; the file is streamed, never slurped.
const CHUNK: usize = 256;

fn main() -> ExitCode {
    let mut stdout = io::stdout().lock();
    ExitCode::from(run(Path::new(PROBE_DATA_PATH), &mut stdout))
}

/// Probe body: writes markers and file contents to `out`, returns the exit
/// code. Every failure folds into the status; there are no crash paths.
fn run(data_path: &Path, out: &mut dyn Write) -> u8 {
    // Reaching stdout at all proves the image was allowed to execute.
    let _ = writeln!(out, "{}", PROBE_START_MARKER);

    let mut file = match File::open(data_path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            let _ = writeln!(out, "{}", FILE_DENIED_MARKER);
            return 1;
        }
        Err(e) => {
            let _ = writeln!(out, "{}{}", FILE_ERROR_PREFIX, e);
            return 1;
        }
    };

    let mut buf = [0u8; CHUNK];
    loop {
        match file.read(&mut buf) {
            Ok(0) => return 0,
            Ok(n) => {
                if out.write_all(&buf[..n]).is_err() {
                    return 1;
                }
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                let _ = writeln!(out, "{}{}", FILE_ERROR_PREFIX, e);
                return 1;
            }
        }
    }
}
