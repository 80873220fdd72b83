use crate::areas::git::Git;
use crate::areas::log_file::LogFile;
use crate::commands::push::PushOptions;
use std::cell::{RefCell, RefMut};
use tokio::io::AsyncBufRead;

/// Everything one run talks to: the terminal (prompts in, status lines out),
/// the git executable and the run log.
pub struct Session {
    writer: RefCell<Box<dyn std::io::Write>>,
    reader: Box<dyn AsyncBufRead + Unpin>,
    git: Git,
    log_file: LogFile,
    options: PushOptions,
}

impl Session {
    pub fn new(
        writer: Box<dyn std::io::Write>,
        reader: Box<dyn AsyncBufRead + Unpin>,
        git: Git,
        log_file: LogFile,
        options: PushOptions,
    ) -> Self {
        Session {
            writer: RefCell::new(writer),
            reader,
            git,
            log_file,
            options,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn reader(&mut self) -> &mut (dyn AsyncBufRead + Unpin) {
        self.reader.as_mut()
    }

    pub fn git(&self) -> &Git {
        &self.git
    }

    pub fn log_file(&self) -> &LogFile {
        &self.log_file
    }

    pub fn options(&self) -> &PushOptions {
        &self.options
    }
}
