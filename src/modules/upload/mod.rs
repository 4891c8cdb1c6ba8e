pub mod handle;
pub mod model;
pub mod schema;
pub mod service;

pub use handle::{describe_field, next_file};
pub use model::{NameStrategy, UploadConfig};
pub use schema::{AcceptedUpload, IncomingFile};
pub use service::{Decision, UploadValidator};
