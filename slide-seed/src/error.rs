use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("CSV Error")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error")]
    IoError(#[from] io::Error),
}
