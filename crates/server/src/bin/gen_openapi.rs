use server::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() {
    match ApiDoc::openapi().to_pretty_json() {
        Ok(doc) => println!("{doc}"),
        Err(e) => {
            eprintln!("Failed to serialize the OpenAPI document: {e}");
            std::process::exit(1);
        }
    }
}
