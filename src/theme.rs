use crate::types::ThemeMode;

#[cfg(not(target_arch = "wasm32"))]
use std::{fs, path::PathBuf};

pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_ATTRIBUTE: &str = "data-theme";

pub struct ThemeDefinition {
    pub css: &'static str,
    pub toggle_label: &'static str,
}

pub fn theme_definition(mode: ThemeMode) -> ThemeDefinition {
    match mode {
        ThemeMode::Light => ThemeDefinition {
            css: LIGHT_THEME,
            toggle_label: "Light",
        },
        ThemeMode::Dark => ThemeDefinition {
            css: DARK_THEME,
            toggle_label: "Dark",
        },
    }
}

const LIGHT_THEME: &str = r#"
:root {
    --color-bg-primary: #ffffff;
    --color-bg-secondary: #f5f7fb;
    --color-bg-overlay: rgba(15, 23, 42, 0.45);
    --color-text-primary: #0f172a;
    --color-text-muted: #64748b;
    --color-border: #e2e8f0;
    --color-surface: #ffffff;
    --color-surface-muted: #f1f5f9;
    --color-input-bg: #ffffff;
    --color-input-border: #cbd5e1;
    --color-chat-user-bg: #4f46e5;
    --color-chat-user-text: #ffffff;
    --color-chat-bot-bg: #f1f5f9;
    --color-chat-bot-text: #0f172a;
    --color-accent: #4f46e5;
    --color-danger: #dc2626;
}
"#;

const DARK_THEME: &str = r#"
:root {
    --color-bg-primary: #0b1120;
    --color-bg-secondary: #111827;
    --color-bg-overlay: rgba(0, 0, 0, 0.65);
    --color-text-primary: #f8fafc;
    --color-text-muted: #94a3b8;
    --color-border: #1f2937;
    --color-surface: #111827;
    --color-surface-muted: #1f2937;
    --color-input-bg: #0f172a;
    --color-input-border: #334155;
    --color-chat-user-bg: #6366f1;
    --color-chat-user-text: #ffffff;
    --color-chat-bot-bg: #1e293b;
    --color-chat-bot-text: #e2e8f0;
    --color-accent: #818cf8;
    --color-danger: #f87171;
}
"#;

// ============================================
// Persistence
// ============================================

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write theme preference: {0}")]
    Io(#[from] std::io::Error),
}

/// Somewhere a single theme value survives a reload.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str) -> Result<(), StorageError>;
}

/// Reads the stored preference. Unknown values are ignored.
pub fn load_theme(store: &dyn ThemeStore) -> Option<ThemeMode> {
    let raw = store.load()?;
    match raw.parse() {
        Ok(mode) => Some(mode),
        Err(err) => {
            tracing::warn!("ignoring stored theme: {err}");
            None
        }
    }
}

pub fn persist_theme(store: &dyn ThemeStore, mode: ThemeMode) -> Result<(), StorageError> {
    store.save(mode.as_str())
}

#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    value: std::sync::Mutex<Option<String>>,
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.lock().ok()?.clone()
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        let mut slot = self
            .value
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        *slot = Some(value.to_string());
        Ok(())
    }
}

/// Native targets keep the preference in a small file.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileThemeStore {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Self {
        let base = dirs::data_local_dir()
            .map(|dir| dir.join("chatbot-web"))
            .unwrap_or_else(|| PathBuf::from("cache"));
        Self::new(base.join(THEME_STORAGE_KEY))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ThemeStore for FileThemeStore {
    fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path).ok()
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, value)?;
        Ok(())
    }
}

/// Browser `localStorage`.
#[cfg(target_arch = "wasm32")]
pub struct LocalThemeStore;

#[cfg(target_arch = "wasm32")]
impl LocalThemeStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("window is unavailable".into()))?
            .local_storage()
            .ok()
            .flatten()
            .ok_or_else(|| StorageError::Unavailable("localStorage is unavailable".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<String> {
        Self::storage().ok()?.get_item(THEME_STORAGE_KEY).ok().flatten()
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(THEME_STORAGE_KEY, value)
            .map_err(|_| StorageError::Unavailable("localStorage rejected the write".into()))
    }
}

pub fn default_store() -> Box<dyn ThemeStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(LocalThemeStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(FileThemeStore::default_location())
    }
}
