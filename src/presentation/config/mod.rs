mod settings;

pub use settings::{
    Environment, LlmSettings, PresentationSettings, ServerSettings, Settings, SettingsError,
    UploadSettings, MAX_UPLOAD_BYTES,
};
