use kernel::KernelError;

#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error(transparent)]
    Http(reqwest::Error),
    #[error(transparent)]
    Env(dotenvy::Error),
    #[error(transparent)]
    Conversion(anyhow::Error),
    #[error(transparent)]
    Serde(serde_json::Error),
}

impl From<reqwest::Error> for DriverError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl From<dotenvy::Error> for DriverError {
    fn from(value: dotenvy::Error) -> Self {
        Self::Env(value)
    }
}

impl From<serde_json::Error> for DriverError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

impl From<time::error::Parse> for DriverError {
    fn from(value: time::error::Parse) -> Self {
        Self::Conversion(anyhow::Error::new(value))
    }
}

impl From<time::error::Format> for DriverError {
    fn from(value: time::error::Format) -> Self {
        Self::Conversion(anyhow::Error::new(value))
    }
}

pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, DriverError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| error_stack::Report::from(error).change_context(KernelError::Internal))
    }
}
