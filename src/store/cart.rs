//! Persisted cart store.
//!
//! The cart file carries an explicit schema version so future format changes
//! can migrate on read instead of guessing at shape. Version 1 is
//! `{ "version": 1, "lines": [...] }`; a legacy bare array of lines (the
//! original client's local-storage format) is still accepted and upgraded on
//! the next save. Every mutation loads the whole file, edits in memory, and
//! writes the whole file back.

use crate::config::AppConfig;
use crate::core::{cart, pricing};
use crate::errors::Result;
use crate::models::{CartLine, Product};
use crate::store::{read_json, write_json};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const CART_FILE: &str = "cart.json";
const CART_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct CartFile {
    version: u32,
    lines: Vec<CartLine>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredCart {
    Versioned(CartFile),
    Legacy(Vec<CartLine>),
}

/// Handle to the on-disk cart.
#[derive(Debug, Clone)]
pub struct CartStore {
    path: PathBuf,
}

impl CartStore {
    /// Creates a store rooted in the configured data directory.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            path: config.data_dir.join(CART_FILE),
        }
    }

    /// Creates a store at an explicit file path.
    #[must_use]
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads all cart lines. A missing file is an empty cart; a legacy
    /// bare-array file is read as-is and upgraded on the next save.
    pub fn load(&self) -> Result<Vec<CartLine>> {
        match read_json::<StoredCart>(&self.path)? {
            None => Ok(Vec::new()),
            Some(StoredCart::Versioned(file)) => Ok(file.lines),
            Some(StoredCart::Legacy(lines)) => {
                debug!("Migrating legacy cart file at {}.", self.path.display());
                Ok(lines)
            }
        }
    }

    /// Writes the whole cart back in the current schema version.
    pub fn save(&self, lines: &[CartLine]) -> Result<()> {
        write_json(
            &self.path,
            &CartFile {
                version: CART_SCHEMA_VERSION,
                lines: lines.to_vec(),
            },
        )
    }

    /// Empties the cart, e.g. after a successful order submission.
    pub fn clear(&self) -> Result<()> {
        self.save(&[])
    }

    /// Adds a product at the given size and persists, returning the updated
    /// lines. Merging follows [`cart::add_product`].
    pub fn add_product(&self, product: &Product, size: f64) -> Result<Vec<CartLine>> {
        let mut lines = self.load()?;
        cart::add_product(&mut lines, product, size);
        self.save(&lines)?;
        Ok(lines)
    }

    /// Removes the line at `index` and persists, returning the updated lines.
    pub fn remove_at(&self, index: usize) -> Result<Vec<CartLine>> {
        let mut lines = self.load()?;
        cart::remove_line(&mut lines, index);
        self.save(&lines)?;
        Ok(lines)
    }

    /// Total of the persisted cart under the pricing formula.
    pub fn total(&self) -> Result<f64> {
        Ok(pricing::cart_total(&self.load()?))
    }
}
