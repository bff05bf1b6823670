mod upload;

pub use self::upload::{StoredUpload, StudentForm, StudentUploadForm, UploadedFile};
