//! Blocking HTTP GET that buffers the full response body in memory.
//!
//! Cancellation is checked both in the write callback (aborts mid-body) and in
//! the progress callback (aborts while waiting on a slow server with no bytes
//! flowing). Callers drive this from async code via `spawn_blocking`.

use crate::cancel::CancelToken;
use crate::error::FetchError;
use std::time::Duration;

/// Per-request transport knobs; defaults match the config file defaults.
#[derive(Debug, Clone)]
pub struct TransportOptions {
    pub connect_timeout: Duration,
    pub max_redirections: u32,
    pub user_agent: Option<String>,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            max_redirections: 10,
            user_agent: None,
        }
    }
}

/// Issues a GET for `url` and returns the full response body.
///
/// Fails with `FetchError::Cancelled` when `token` trips while the transfer is
/// in flight, `FetchError::Http` on a non-2xx status, and
/// `FetchError::Transport` for everything curl reports.
pub fn fetch_bytes(
    url: &str,
    token: &CancelToken,
    opts: &TransportOptions,
) -> Result<Vec<u8>, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(FetchError::Transport)?;
    easy.follow_location(true).map_err(FetchError::Transport)?;
    easy.max_redirections(opts.max_redirections)
        .map_err(FetchError::Transport)?;
    easy.connect_timeout(opts.connect_timeout)
        .map_err(FetchError::Transport)?;
    if let Some(ref ua) = opts.user_agent {
        easy.useragent(ua).map_err(FetchError::Transport)?;
    }
    // Enable progress callbacks so cancellation is noticed on idle connections.
    easy.progress(true).map_err(FetchError::Transport)?;

    let mut body: Vec<u8> = Vec::new();
    {
        let write_token = token.clone();
        let progress_token = token.clone();
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                if write_token.is_cancelled() {
                    return Ok(0); // abort transfer
                }
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(FetchError::Transport)?;
        transfer
            .progress_function(move |_dltotal, _dlnow, _ultotal, _ulnow| {
                !progress_token.is_cancelled()
            })
            .map_err(FetchError::Transport)?;
        if let Err(e) = transfer.perform() {
            if token.is_cancelled() {
                tracing::debug!(url, "transfer aborted by cancellation token");
                return Err(FetchError::Cancelled);
            }
            return Err(FetchError::Transport(e));
        }
    }

    let code = easy.response_code().map_err(FetchError::Transport)?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }

    Ok(body)
}
