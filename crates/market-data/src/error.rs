use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("input table is missing required columns: {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("input contains no data rows")]
    EmptyInput,

    #[error("unparseable Date values: {}", values.join(", "))]
    DateParse { values: Vec<String> },

    #[error("not enough rows for the configured windows: need {required}, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("row {row}: could not parse {column} value '{value}'")]
    Parse {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
