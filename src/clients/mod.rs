pub mod repurpose_client;

pub use repurpose_client::{RepurposeClient, SubmitInput, DEFAULT_TITLE};
