use crate::error::PageError;

/// Storage backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// localStorage - persists across browser sessions
    Local,
    /// sessionStorage - cleared when tab/window closes
    Session,
    /// No-op mode - for when storage is disabled or unavailable
    None,
}

/// Browser storage wrapper over localStorage, sessionStorage, or nothing at all.
///
/// Outside the `web` feature every read misses and every write succeeds
/// without effect.
pub struct BrowserStorage {
    storage_type: StorageType,
}

impl BrowserStorage {
    pub fn new(storage_type: StorageType) -> Self {
        Self { storage_type }
    }

    pub fn storage_type(&self) -> StorageType {
        self.storage_type
    }

    #[cfg(feature = "web")]
    fn backend(&self) -> Result<Option<web_sys::Storage>, PageError> {
        let window = web_sys::window().ok_or(PageError::NoWindow)?;
        let storage = match self.storage_type {
            StorageType::Local => window.local_storage(),
            StorageType::Session => window.session_storage(),
            StorageType::None => return Ok(None),
        };
        storage.map_err(|e| PageError::Storage(format!("{:?}", e)))
    }

    /// Get a value from storage by key
    pub fn get(&self, key: &str) -> Option<String> {
        match self.storage_type {
            StorageType::None => None,
            #[cfg(feature = "web")]
            StorageType::Local | StorageType::Session => {
                let storage = match self.backend() {
                    Ok(Some(storage)) => storage,
                    Ok(None) => return None,
                    Err(e) => {
                        tracing::warn!(key, error = %e, "storage unavailable");
                        return None;
                    }
                };

                match storage.get_item(key) {
                    Ok(value) => value,
                    Err(e) => {
                        tracing::warn!(key, error = ?e, "failed to read storage item");
                        None
                    }
                }
            }
            #[cfg(not(feature = "web"))]
            StorageType::Local | StorageType::Session => {
                let _ = key;
                None
            }
        }
    }

    /// Set a value in storage
    pub fn set(&self, key: &str, value: &str) -> Result<(), PageError> {
        match self.storage_type {
            StorageType::None => Ok(()),
            #[cfg(feature = "web")]
            StorageType::Local | StorageType::Session => {
                let storage = self
                    .backend()?
                    .ok_or_else(|| PageError::Storage("storage disabled".to_string()))?;

                storage.set_item(key, value).map_err(|e| {
                    let err = PageError::Storage(format!("failed to set '{}': {:?}", key, e));
                    tracing::warn!(error = %err, "storage write failed");
                    err
                })
            }
            #[cfg(not(feature = "web"))]
            StorageType::Local | StorageType::Session => {
                let _ = (key, value);
                Ok(())
            }
        }
    }
}
