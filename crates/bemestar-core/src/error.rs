use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid checkup interval for {field}: {value} (must be at least 1 day)")]
    InvalidInterval { field: &'static str, value: u32 },
}
