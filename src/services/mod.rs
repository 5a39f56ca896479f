pub mod assessment;
pub mod export_writer;
pub mod localizer;
pub mod validator;

pub use assessment::{FlashcardState, QuizReport, QuizState};
pub use export_writer::{DownloadHandle, ExportWriter};
pub use localizer::{LocalizationResolver, LocalizedView};
pub use validator::{FileCategory, InputValidator, MAX_FILE_SIZE_BYTES, YOUTUBE_DEFAULT_TITLE};
