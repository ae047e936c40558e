use std::{cell::RefCell, io::Write};

#[derive(Copy, Clone, Debug)]
pub(crate) enum ErrorCode {
    Write,
    Flush,
    LogFile,
}

// Reports problems of the logger itself; they must not go through the logger.
pub(crate) fn eprint_err(error_code: ErrorCode, msg: &str, err: &dyn std::error::Error) {
    eprintln!("[pkg_logger][ERRCODE::{error_code:?}] {msg}, caused by {err}");
}

pub(crate) fn io_err(s: &'static str) -> std::io::Error {
    std::io::Error::other(s)
}

// Thread-local buffer
pub(crate) fn buffer_with<F>(f: F)
where
    F: FnOnce(&RefCell<Vec<u8>>),
{
    thread_local! {
        static BUFFER: RefCell<Vec<u8>> = RefCell::new(Vec::with_capacity(200));
    }
    BUFFER.with(f);
}

// Formats a line into the thread-local buffer and writes it with a single call,
// so that concurrent lines on the same stream do not interleave.
pub(crate) fn write_buffered<F>(format: F, w: &mut dyn Write) -> std::io::Result<()>
where
    F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
{
    let mut result: std::io::Result<()> = Ok(());
    buffer_with(|tl_buf| match tl_buf.try_borrow_mut() {
        Ok(mut buffer) => {
            result = write_line(format, &mut buffer, w);
            buffer.clear();
        }
        Err(_e) => {
            // We arrive here in the rare cases of recursive logging,
            // e.g. from a custom format function that logs
            let mut tmp_buf = Vec::<u8>::with_capacity(200);
            result = write_line(format, &mut tmp_buf, w);
        }
    });
    result
}

fn write_line<F>(format: F, buffer: &mut Vec<u8>, w: &mut dyn Write) -> std::io::Result<()>
where
    F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
{
    format(&mut *buffer as &mut dyn Write)?;
    buffer.push(b'\n');
    w.write_all(buffer)
}
