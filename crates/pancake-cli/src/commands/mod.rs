//! Subcommand implementations and shared I/O helpers.

use std::io::{Read, Write};

use pancake_client::{ApiRequest, PosClient, Transport};

pub mod employees;
pub mod skills;
pub mod suppliers;

/// Write a response body to stdout exactly as received, no reformatting and
/// no added newline.
pub fn emit_body(body: &str) {
    let mut out = std::io::stdout();
    let _ = out.write_all(body.as_bytes());
    let _ = out.flush();
}

/// Read an opaque JSON payload from stdin, forwarded to the API unchanged.
pub fn read_stdin_body() -> anyhow::Result<String> {
    let mut body = String::new();
    std::io::stdin().read_to_string(&mut body)?;
    Ok(body)
}

/// Send one request and emit the raw response body.
pub async fn dispatch<T: Transport>(
    client: &PosClient<T>,
    request: ApiRequest,
) -> anyhow::Result<()> {
    let response = client.send(request).await?;
    emit_body(&response.body);
    Ok(())
}

// ---------------------------------------------------------------------------
// Test support
// ---------------------------------------------------------------------------
