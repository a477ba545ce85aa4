use shared_types::AppError;

use crate::aggregate::AggregateError;
use crate::dataset::LoadError;

/// Convert a dataset load failure into an AppError.
pub fn load_to_app_error(err: LoadError) -> AppError {
    match &err {
        LoadError::NotConfigured => AppError::internal(err.to_string()),
        _ => AppError::data_unavailable(format!("Dataset unavailable: {err}")),
    }
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        load_to_app_error(err)
    }
}

impl From<AggregateError> for AppError {
    fn from(err: AggregateError) -> Self {
        match err {
            AggregateError::EmptyAggregation => {
                AppError::empty_aggregation("No non-missing values to aggregate")
            }
        }
    }
}

/// Trait for validating request DTOs before processing.
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
