//! Cart store persisted as a JSON file.

use std::path::{Path, PathBuf};

use sprout_commerce::cart::{CartItem, CartStore, InMemoryCartStore};
use sprout_commerce::{CommerceError, ProductId, UserId};

/// Carts kept in memory and written back to disk after every change.
pub struct JsonFileCartStore {
    path: PathBuf,
    inner: InMemoryCartStore,
}

impl JsonFileCartStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CommerceError> {
        let path = path.into();

        let inner = if path.exists() {
            let text = std::fs::read_to_string(&path).map_err(|e| storage_error(&path, e))?;
            InMemoryCartStore::from_json_str(&text)?
        } else {
            InMemoryCartStore::new()
        };

        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<(), CommerceError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| storage_error(parent, e))?;
            }
        }

        let text = self.inner.to_json_string()?;
        std::fs::write(&self.path, text).map_err(|e| storage_error(&self.path, e))
    }
}

fn storage_error(path: &Path, err: std::io::Error) -> CommerceError {
    CommerceError::Storage(format!("{}: {}", path.display(), err))
}

impl CartStore for JsonFileCartStore {
    fn find(&self, user: UserId, product: ProductId) -> Result<Option<CartItem>, CommerceError> {
        self.inner.find(user, product)
    }

    fn insert(&mut self, item: CartItem) -> Result<CartItem, CommerceError> {
        let stored = self.inner.insert(item)?;
        self.save()?;
        Ok(stored)
    }

    fn remove(&mut self, user: UserId, product: ProductId) -> Result<bool, CommerceError> {
        let removed = self.inner.remove(user, product)?;
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    fn items_for(&self, user: UserId) -> Result<Vec<CartItem>, CommerceError> {
        self.inner.items_for(user)
    }

    fn clear(&mut self, user: UserId) -> Result<usize, CommerceError> {
        let cleared = self.inner.clear(user)?;
        if cleared > 0 {
            self.save()?;
        }
        Ok(cleared)
    }
}
