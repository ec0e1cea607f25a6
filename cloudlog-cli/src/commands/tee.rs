//! Implementation of the 'tee' subcommand.
//!
//! Every input line goes through `CloudLog::log`, so it reaches stdout and the
//! log file. The log is synced every `--sync-every` lines and once more at
//! end of input, when the optional Telegram notification is sent.
//!
//! Input is read as raw bytes; invalid UTF-8 is replaced, never fatal.

use crate::cli::TeeArgs;

use cloudlog_core::{CloudLog, CoreResult};

use log::debug;
use std::io::BufRead;

/// Logs each line read from `input`. Returns the number of lines logged.
pub fn run_tee<R: BufRead>(log: &CloudLog, input: R, args: &TeeArgs) -> CoreResult<usize> {
    let mut input = input;
    let mut count = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = trim_line_ending(&buf);
        log.log(&String::from_utf8_lossy(line))?;
        count += 1;

        if args.sync_every > 0 && count % args.sync_every == 0 {
            debug!("Periodic sync after {} lines", count);
            log.sync(false, None)?;
        }
    }

    debug!("End of input after {} lines", count);
    log.sync(args.notify, args.message.as_deref())?;
    Ok(count)
}

/// Strips a trailing "\n" or "\r\n".
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
