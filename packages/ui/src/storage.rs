//! Platform storage and configuration for the identity context.
//!
//! Returns the [`identity::KeyValueStorage`] the session lives in:
//! - **Web** (WASM + `web` feature): `window.localStorage`
//! - **Server-side rendering** (`server` feature): an empty in-memory map, so the
//!   server never renders someone's session
//! - **Desktop** (native): files under `<data_dir>/smis/`

use identity::SmisConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStorage = identity::LocalStorage;

#[cfg(all(not(all(target_arch = "wasm32", feature = "web")), feature = "server"))]
pub type PlatformStorage = identity::MemoryStorage;

#[cfg(all(not(all(target_arch = "wasm32", feature = "web")), not(feature = "server")))]
pub type PlatformStorage = identity::FileStorage;

/// Create the platform-appropriate session storage.
pub fn make_storage() -> PlatformStorage {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        identity::LocalStorage::new()
    }
    #[cfg(all(not(all(target_arch = "wasm32", feature = "web")), feature = "server"))]
    {
        identity::MemoryStorage::new()
    }
    #[cfg(all(not(all(target_arch = "wasm32", feature = "web")), not(feature = "server")))]
    {
        identity::FileStorage::new(data_dir())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn data_dir() -> std::path::PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("smis")
}

/// Load `smis.toml` from the data directory, falling back to defaults.
pub fn load_config() -> SmisConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = data_dir().join(SmisConfig::filename());
        let Ok(text) = std::fs::read_to_string(&path) else {
            return SmisConfig::default();
        };
        match SmisConfig::from_toml(&text) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), "Ignoring malformed config: {}", e);
                SmisConfig::default()
            }
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        SmisConfig::default()
    }
}
