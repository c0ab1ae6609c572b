//! Print the OpenAPI document as JSON for external tooling.

use lofty_backend::ApiDoc;
use utoipa::OpenApi;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let json = ApiDoc::openapi().to_pretty_json()?;
    // The document goes to stdout so callers can redirect it into a file.
    println!("{json}");
    Ok(())
}
