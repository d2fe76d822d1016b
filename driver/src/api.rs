use error_stack::Report;
use reqwest::Client;

use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

mod customer;
mod dashboard;
mod equipment;
mod rental;

static RENTAL_API_URL: &str = "RENTAL_API_URL";

/// Connection to the remote persistence api.
///
/// Cheap to clone: the underlying client is reference counted.
#[derive(Clone)]
pub struct RemoteApi {
    client: Client,
    base: String,
}

impl RemoteApi {
    pub fn new() -> error_stack::Result<Self, KernelError> {
        let base = env(RENTAL_API_URL).convert_error()?;
        let client = Client::builder().build().convert_error()?;
        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base)
    }

    pub(crate) fn client(&self) -> &Client {
        &self.client
    }
}

impl<T> ConvertError for Result<T, reqwest::Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            if error.is_timeout() {
                Report::from(error).change_context(KernelError::Timeout)
            } else if error.is_decode() {
                Report::from(error).change_context(KernelError::Internal)
            } else if let Some(status) = error.status() {
                if status.is_client_error() {
                    Report::from(error).change_context(KernelError::Rejected)
                } else {
                    Report::from(error).change_context(KernelError::Transport)
                }
            } else {
                Report::from(error).change_context(KernelError::Transport)
            }
        })
    }
}
