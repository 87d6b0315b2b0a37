use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Per-company checkup cadence, owned by the settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompanyCheckupSettings {
    pub normal_interval_days: u32,
    pub severe_interval_days: u32,
}

impl CompanyCheckupSettings {
    pub fn new(normal_interval_days: u32, severe_interval_days: u32) -> Result<Self, CoreError> {
        let settings = Self {
            normal_interval_days,
            severe_interval_days,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.normal_interval_days == 0 {
            return Err(CoreError::InvalidInterval {
                field: "normal_interval_days",
                value: self.normal_interval_days,
            });
        }
        if self.severe_interval_days == 0 {
            return Err(CoreError::InvalidInterval {
                field: "severe_interval_days",
                value: self.severe_interval_days,
            });
        }
        Ok(())
    }
}
