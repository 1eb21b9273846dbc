//! Interface-density preference ("desktop" / "mobile" / "auto") and the
//! controller that keeps the effective mode in sync with the viewport.
//!
//! Persistence goes through the `PreferenceStore` port. Storage failures are
//! logged and swallowed: a broken store degrades to an in-memory preference
//! for the rest of the session.

use std::{
    collections::HashMap,
    fmt,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex, PoisonError,
    },
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

pub const MOBILE_BREAKPOINT: u32 = 768;
pub const TABLET_BREAKPOINT: u32 = 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiMode {
    Desktop,
    Mobile,
}

impl UiMode {
    pub fn as_str(self) -> &'static str {
        match self {
            UiMode::Desktop => "desktop",
            UiMode::Mobile => "mobile",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            UiMode::Desktop => UiMode::Mobile,
            UiMode::Mobile => UiMode::Desktop,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserPreference {
    Desktop,
    Mobile,
    #[default]
    Auto,
}

impl UserPreference {
    pub fn as_str(self) -> &'static str {
        match self {
            UserPreference::Desktop => "desktop",
            UserPreference::Mobile => "mobile",
            UserPreference::Auto => "auto",
        }
    }
}

impl From<UiMode> for UserPreference {
    fn from(mode: UiMode) -> Self {
        match mode {
            UiMode::Desktop => UserPreference::Desktop,
            UiMode::Mobile => UserPreference::Mobile,
        }
    }
}

impl fmt::Display for UserPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognised UI mode preference: {0:?}")]
pub struct UnknownPreference(pub String);

impl FromStr for UserPreference {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "desktop" => Ok(UserPreference::Desktop),
            "mobile" => Ok(UserPreference::Mobile),
            "auto" => Ok(UserPreference::Auto),
            other => Err(UnknownPreference(other.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Desktop,
    Tablet,
    Mobile,
}

pub fn detect_device_type(viewport_width: u32) -> DeviceType {
    if viewport_width < MOBILE_BREAKPOINT {
        DeviceType::Mobile
    } else if viewport_width < TABLET_BREAKPOINT {
        DeviceType::Tablet
    } else {
        DeviceType::Desktop
    }
}

/// Effective mode for a preference at a given viewport width.
pub fn resolve_mode(preference: UserPreference, viewport_width: u32) -> UiMode {
    match preference {
        UserPreference::Desktop => UiMode::Desktop,
        UserPreference::Mobile => UiMode::Mobile,
        UserPreference::Auto if viewport_width < MOBILE_BREAKPOINT => UiMode::Mobile,
        UserPreference::Auto => UiMode::Desktop,
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("preference storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
}

/// One durable string slot.
pub trait PreferenceStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, StoreError>;
    fn save(&self, value: &str) -> Result<(), StoreError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Arc<T> {
    fn load(&self) -> Result<Option<String>, StoreError> {
        (**self).load()
    }
    fn save(&self, value: &str) -> Result<(), StoreError> {
        (**self).save(value)
    }
}

/// Slot backed by a single file holding the raw preference string.
///
/// Inside a tokio runtime `save` hands the write to the blocking pool and
/// returns at once; only the most recent value is written when saves pile up.
/// Background write failures are logged.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    latest: Arc<AtomicU64>,
    write_lock: Arc<Mutex<()>>,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            latest: Arc::new(AtomicU64::new(0)),
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}

fn write_preference(path: &Path, value: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, value)?;
    Ok(())
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(s) => Ok(Some(s.trim().to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, value: &str) -> Result<(), StoreError> {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            return write_preference(&self.path, value);
        };
        let path = self.path.clone();
        let latest = Arc::clone(&self.latest);
        let write_lock = Arc::clone(&self.write_lock);
        let value = value.to_string();
        runtime.spawn_blocking(move || {
            let _guard = write_lock.lock().unwrap_or_else(PoisonError::into_inner);
            // superseded by a newer save
            if latest.load(Ordering::SeqCst) != generation {
                return;
            }
            if let Err(e) = write_preference(&path, &value) {
                warn!(target: "ui_mode", error = %e, path = %path.display(), "Background preference write failed");
            }
        });
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    slot: Mutex<Option<String>>,
}

impl MemoryPreferenceStore {
    pub fn with_value(value: &str) -> Self {
        Self { slot: Mutex::new(Some(value.to_string())) }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        self.slot
            .lock()
            .map(|slot| slot.clone())
            .map_err(|e| StoreError::Unavailable(e.to_string()))
    }

    fn save(&self, value: &str) -> Result<(), StoreError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        *slot = Some(value.to_string());
        Ok(())
    }
}

/// Hands out one preference slot per client.
pub trait PreferenceSlots: Send + Sync {
    fn slot(&self, client_id: &str) -> Box<dyn PreferenceStore>;
}

/// One file per client under `dir`. Client ids are validated before they get here.
#[derive(Debug, Clone)]
pub struct FilePreferenceSlots {
    dir: PathBuf,
    stores: Arc<Mutex<HashMap<String, FilePreferenceStore>>>,
}

impl FilePreferenceSlots {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into(), stores: Arc::default() }
    }
}

impl PreferenceSlots for FilePreferenceSlots {
    fn slot(&self, client_id: &str) -> Box<dyn PreferenceStore> {
        let mut stores = self.stores.lock().unwrap_or_else(PoisonError::into_inner);
        // Only kept while a controller or a pending write still holds the store.
        stores.retain(|_, store| Arc::strong_count(&store.latest) > 1);
        // Shared per client so the HTTP and WS controllers serialize their writes.
        let store = stores
            .entry(client_id.to_string())
            .or_insert_with(|| FilePreferenceStore::new(self.dir.join(client_id)));
        Box::new(store.clone())
    }
}

/// In-memory slots, shared between every controller of the same client.
#[derive(Debug, Default)]
pub struct MemoryPreferenceSlots {
    slots: Mutex<HashMap<String, Arc<MemoryPreferenceStore>>>,
}

impl MemoryPreferenceSlots {
    pub fn stored(&self, client_id: &str) -> Option<String> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.get(client_id).and_then(|s| s.load().ok().flatten())
    }
}

impl PreferenceSlots for MemoryPreferenceSlots {
    fn slot(&self, client_id: &str) -> Box<dyn PreferenceStore> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Box::new(Arc::clone(slots.entry(client_id.to_string()).or_default()))
    }
}

/// Snapshot of the controller, as reported to clients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiModeSnapshot {
    pub current_mode: UiMode,
    pub user_preference: UserPreference,
    pub device_type: DeviceType,
    pub screen_width: u32,
}

pub struct UiModeController {
    store: Box<dyn PreferenceStore>,
    preference: UserPreference,
    current_mode: UiMode,
    screen_width: u32,
}

impl fmt::Debug for UiModeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiModeController")
            .field("preference", &self.preference)
            .field("current_mode", &self.current_mode)
            .field("screen_width", &self.screen_width)
            .finish()
    }
}

impl UiModeController {
    /// Read the persisted preference (falling back to auto) and resolve the
    /// initial mode against `viewport_width`.
    #[instrument(level = "info", skip(store))]
    pub fn new(store: Box<dyn PreferenceStore>, viewport_width: u32) -> Self {
        let preference = load_preference(store.as_ref());
        let current_mode = resolve_mode(preference, viewport_width);
        info!(target: "ui_mode", %preference, mode = current_mode.as_str(), viewport_width, "UI mode initialised");
        Self {
            store,
            preference,
            current_mode,
            screen_width: viewport_width,
        }
    }

    pub fn current_mode(&self) -> UiMode {
        self.current_mode
    }

    pub fn preference(&self) -> UserPreference {
        self.preference
    }

    pub fn screen_width(&self) -> u32 {
        self.screen_width
    }

    pub fn device_type(&self) -> DeviceType {
        detect_device_type(self.screen_width)
    }

    pub fn snapshot(&self) -> UiModeSnapshot {
        UiModeSnapshot {
            current_mode: self.current_mode,
            user_preference: self.preference,
            device_type: self.device_type(),
            screen_width: self.screen_width,
        }
    }

    /// Viewport changed. Only observable while the preference is auto.
    pub fn on_resize(&mut self, viewport_width: u32) -> UiMode {
        self.screen_width = viewport_width;
        self.current_mode = resolve_mode(self.preference, viewport_width);
        debug!(target: "ui_mode", viewport_width, mode = self.current_mode.as_str(), "Viewport resized");
        self.current_mode
    }

    /// Explicit choice: persisted, and applied regardless of the viewport.
    pub fn set_mode(&mut self, mode: UiMode) -> UiMode {
        let preference = UserPreference::from(mode);
        self.persist(preference);
        self.preference = preference;
        self.current_mode = mode;
        info!(target: "ui_mode", mode = mode.as_str(), "UI mode set explicitly");
        mode
    }

    pub fn toggle_mode(&mut self) -> UiMode {
        self.set_mode(self.current_mode.flipped())
    }

    pub fn set_auto_mode(&mut self) -> UiMode {
        self.persist(UserPreference::Auto);
        self.preference = UserPreference::Auto;
        self.current_mode = resolve_mode(UserPreference::Auto, self.screen_width);
        info!(target: "ui_mode", mode = self.current_mode.as_str(), "UI mode set to auto");
        self.current_mode
    }

    /// Apply a preference as a client would pick it from a menu.
    pub fn apply_preference(&mut self, preference: UserPreference) -> UiMode {
        match preference {
            UserPreference::Desktop => self.set_mode(UiMode::Desktop),
            UserPreference::Mobile => self.set_mode(UiMode::Mobile),
            UserPreference::Auto => self.set_auto_mode(),
        }
    }

    fn persist(&self, preference: UserPreference) {
        if let Err(e) = self.store.save(preference.as_str()) {
            warn!(target: "ui_mode", error = %e, %preference, "Failed to save UI mode preference");
        }
    }
}

fn load_preference(store: &dyn PreferenceStore) -> UserPreference {
    match store.load() {
        Ok(Some(raw)) => raw.parse().unwrap_or_else(|e: UnknownPreference| {
            warn!(target: "ui_mode", error = %e, "Ignoring stored UI mode preference");
            UserPreference::Auto
        }),
        Ok(None) => UserPreference::Auto,
        Err(e) => {
            warn!(target: "ui_mode", error = %e, "Failed to load UI mode preference");
            UserPreference::Auto
        }
    }
}
