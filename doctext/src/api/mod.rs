mod extractors;
mod handlers;
mod openapi;
mod routes;
mod state;

pub use extractors::{is_accepted_content_type, read_document, ACCEPTED_CONTENT_TYPES, DOCUMENT_FIELD};
pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
