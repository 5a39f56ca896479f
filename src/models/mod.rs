pub mod bundle;
pub mod job;

pub use bundle::{Exports, Flashcard, LocalizedBundle, Mcq, ResultBundle};
pub use job::{ErrorDetail, JobSnapshot, JobStatus, SubmitResponse};
