pub mod session;

pub use session::{SessionPhase, StudySession};
