use crate::util::{io_err, write_buffered};
use std::{
    fs::File,
    io::{BufWriter, Stderr, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

// Where a `StandardWriter` writes to.
//
// Each variant serializes its writes, so that lines from different threads don't interleave.
pub(crate) enum Destination {
    Stderr(Stderr),
    File {
        path: PathBuf,
        // None after close; further lines are dropped silently
        o_file: Mutex<Option<BufWriter<File>>>,
    },
    Stream(Mutex<Box<dyn Write + Send>>),
}

impl Destination {
    pub(crate) fn stderr() -> Self {
        Self::Stderr(std::io::stderr())
    }

    pub(crate) fn append_to_file(path: &Path) -> std::io::Result<Self> {
        let file = File::options().create(true).append(true).open(path)?;
        Ok(Self::File {
            path: path.to_path_buf(),
            o_file: Mutex::new(Some(BufWriter::new(file))),
        })
    }

    pub(crate) fn stream(w: Box<dyn Write + Send>) -> Self {
        Self::Stream(Mutex::new(w))
    }

    pub(crate) fn path(&self) -> Option<&Path> {
        match self {
            Self::File { path, .. } => Some(path),
            Self::Stderr(_) | Self::Stream(_) => None,
        }
    }

    pub(crate) fn write_line<F>(&self, format: F) -> std::io::Result<()>
    where
        F: FnOnce(&mut dyn Write) -> std::io::Result<()>,
    {
        match self {
            Self::Stderr(stderr) => write_buffered(format, &mut stderr.lock()),
            Self::File { o_file, .. } => {
                let mut guard = o_file.lock().map_err(|_e| io_err("Poison"))?;
                match guard.as_mut() {
                    Some(w) => write_buffered(format, w),
                    None => Ok(()),
                }
            }
            Self::Stream(m_w) => {
                let mut w = m_w.lock().map_err(|_e| io_err("Poison"))?;
                write_buffered(format, &mut **w)
            }
        }
    }

    pub(crate) fn flush(&self) -> std::io::Result<()> {
        match self {
            Self::Stderr(stderr) => stderr.lock().flush(),
            Self::File { o_file, .. } => {
                let mut guard = o_file.lock().map_err(|_e| io_err("Poison"))?;
                guard.as_mut().map_or(Ok(()), Write::flush)
            }
            Self::Stream(m_w) => m_w.lock().map_err(|_e| io_err("Poison"))?.flush(),
        }
    }

    // Flushes and, for files, closes the handle.
    pub(crate) fn close(&self) -> std::io::Result<()> {
        match self {
            Self::File { o_file, .. } => {
                let mut guard = o_file.lock().map_err(|_e| io_err("Poison"))?;
                match guard.take() {
                    Some(mut bw) => bw.flush(),
                    None => Ok(()),
                }
            }
            Self::Stderr(_) | Self::Stream(_) => self.flush(),
        }
    }
}
