use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind: String,
    pub asset_root: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".into(),
            asset_root: ".".into(),
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(v) = std::env::var("INKVIEW_BIND") {
        settings.bind = v;
    }
    if let Ok(v) = std::env::var("INKVIEW_ASSET_ROOT") {
        settings.asset_root = v.into();
    }

    settings
}
