pub mod contact_email;
pub mod contact_fields;
pub mod contact_message;
pub mod contact_name;
pub mod contact_request;
pub mod submission;

pub use contact_email::ContactEmail;
pub use contact_fields::{ContactFields, Field};
pub use contact_message::ContactMessage;
pub use contact_name::ContactName;
pub use contact_request::{ContactRequest, SUBMISSION_SOURCE};
pub use submission::{SubmissionId, SubmissionOutcome};
