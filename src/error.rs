use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Failed to write report line: {0}")]
    Write(#[from] io::Error),
}
