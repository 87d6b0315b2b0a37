use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathwayError {
    #[error("adding {days} day(s) to {from} leaves the supported date range: {source}")]
    DateOutOfRange {
        days: u32,
        from: jiff::civil::DateTime,
        #[source]
        source: jiff::Error,
    },
}
