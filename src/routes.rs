pub use document_created::document_created;
pub use health_check::health_check;

mod document_created;
mod health_check;
