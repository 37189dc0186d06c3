use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid axis domain: {0}")]
    InvalidDomain(String),

    #[error("unparseable metric value: {0}")]
    ValueParse(String),

    #[error("invalid layout input: {0}")]
    InvalidInput(String),
}
