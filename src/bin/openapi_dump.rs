//! Prints the OpenAPI document for the HTTP API as pretty JSON.

use roster::api::openapi::ApiDoc;
use std::io::Write;
use utoipa::OpenApi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let document = ApiDoc::openapi().to_pretty_json()?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", document)?;
    Ok(())
}
