// crates/explorer-core/src/loader/fetch.rs
#![cfg(feature = "fetch")]

use crate::error::{LoadError, Result};
use crate::model::Dataset;
use tracing::debug;

/// Issues one blocking GET for the whole dataset.
///
/// Any transport failure, non-2xx status or malformed body is a
/// [`LoadError`]; there is no retry and no timeout beyond reqwest's default.
pub fn fetch(url: &str) -> Result<Dataset> {
    debug!(%url, "GET");
    let response = reqwest::blocking::get(url)?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            status: status.as_u16(),
            url: url.to_owned(),
        });
    }
    let body = response.bytes()?;
    super::from_slice(&body)
}
