use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;

use crate::error::{Error, Result};

/// In-memory inventory backed by a flat JSON file.
///
/// Maps product names to quantities on hand. Quantities are never negative:
/// any operation that would drive a product to zero or below removes the
/// entry instead, so an absent name always reads as zero stock.
pub struct Inventory {
    items: BTreeMap<String, u64>,
}

impl Inventory {
    pub const DEFAULT_FILE: &'static str = "inventory.json";

    /// Create an empty inventory.
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }

    /// Open an inventory backed by `path`.
    ///
    /// A missing file is treated as a fresh start; any other load failure
    /// is propagated.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut inventory = Self::new();

        match inventory.load(&path) {
            Ok(()) | Err(Error::NotFound) => Ok(inventory),
            Err(e) => Err(e),
        }
    }

    /// Add `qty` of `name` to the inventory.
    ///
    /// A zero quantity is accepted but does nothing. A negative quantity acts
    /// as a decrement; note the asymmetry with [`remove`](Self::remove),
    /// which rejects non-positive quantities outright. If a decrement drives
    /// the stock to zero or below, the entry is deleted.
    ///
    /// When `logs` is supplied, a timestamped record of the operation is
    /// appended to it. The store never reads the log back.
    pub fn add(&mut self, name: &str, qty: i64, logs: Option<&mut Vec<String>>) -> Result<()> {
        if name.is_empty() {
            log::error!("add: invalid empty name");
            return Err(Error::InvalidName);
        }

        if qty == 0 {
            log::warn!("add: zero qty for {}", name);
            return Ok(());
        }

        // Arithmetic in i128 so a large stock plus a large delta cannot wrap
        let current = self.items.get(name).map(|&q| q as i128).unwrap_or(0);
        let total = current + qty as i128;

        if total <= 0 {
            // Clamp at zero by dropping the entry entirely
            self.items.remove(name);
            log::info!("add: {} decremented to zero, entry removed", name);
        } else {
            self.items
                .insert(name.to_owned(), total.min(u64::MAX as i128) as u64);
        }

        let entry = format!("{}: Added {} of {}", chrono::Local::now(), qty, name);
        log::info!("{}", entry);

        if let Some(logs) = logs {
            logs.push(entry);
        }

        Ok(())
    }

    /// Remove `qty` of `name` from the inventory.
    ///
    /// Removing at least the current stock deletes the entry. Unlike
    /// [`add`](Self::add), a zero quantity is rejected.
    pub fn remove(&mut self, name: &str, qty: u64) -> Result<()> {
        if name.is_empty() {
            log::error!("remove: invalid empty name");
            return Err(Error::InvalidName);
        }

        if qty == 0 {
            log::error!("remove: qty must be positive for {}", name);
            return Err(Error::InvalidQuantity);
        }

        let current = match self.items.get(name) {
            Some(&q) => q,
            None => {
                log::warn!("remove: {} not found", name);
                return Err(Error::NotFound);
            }
        };

        if qty >= current {
            self.items.remove(name);
            log::info!("remove: removed all of {} (was {})", name, current);
        } else {
            self.items.insert(name.to_owned(), current - qty);
            log::info!("remove: decreased {} by {} (now {})", name, qty, current - qty);
        }

        Ok(())
    }

    /// Current stock for `name`.
    ///
    /// Returns 0 both for a name that was never added and for an empty name;
    /// the two cases are indistinguishable to the caller.
    pub fn get_stock(&self, name: &str) -> u64 {
        if name.is_empty() {
            log::error!("get_stock: invalid empty name");
            return 0;
        }
        self.items.get(name).copied().unwrap_or(0)
    }

    /// Replace the in-memory inventory with the contents of a JSON file.
    ///
    /// The file must hold a top-level JSON object. Entries whose values
    /// cannot be read as a non-negative integer are skipped with a warning;
    /// the rest of the load still succeeds.
    ///
    /// Failure modes differ in what they do to in-memory state: a missing
    /// file clears the inventory ([`Error::NotFound`]), while a parse, format
    /// or I/O error leaves it untouched.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::warn!("load: {} not found, starting empty", path.display());
                self.items.clear();
                return Err(Error::NotFound);
            }
            Err(e) => {
                log::error!("load: I/O error opening {}: {}", path.display(), e);
                return Err(Error::IOError(e));
            }
        };

        let data: Value = match serde_json::from_reader(BufReader::new(file)) {
            Ok(v) => v,
            Err(e) if e.is_io() => {
                log::error!("load: I/O error reading {}: {}", path.display(), e);
                return Err(Error::IOError(e.into()));
            }
            Err(e) => {
                log::error!("load: JSON parse error in {}: {}", path.display(), e);
                return Err(Error::ParseError(e.to_string()));
            }
        };

        let object = match data {
            Value::Object(map) => map,
            _ => {
                log::error!("load: bad format in {}", path.display());
                return Err(Error::BadFormat);
            }
        };

        let mut cleaned = BTreeMap::new();

        for (name, value) in object {
            match Self::coerce_qty(&value) {
                Some(qty) => {
                    cleaned.insert(name, qty);
                }
                None => log::warn!("load: invalid qty for {}: {}", name, value),
            }
        }

        // Full overwrite, not a merge
        self.items = cleaned;
        log::info!("load: loaded {} items from {}", self.items.len(), path.display());

        Ok(())
    }

    // Lenient per-entry coercion: integers that fit u64, or decimal strings.
    // Anything else (negatives, floats, arrays, ...) is skipped by the caller.
    fn coerce_qty(value: &Value) -> Option<u64> {
        match value {
            Value::Number(n) => n.as_u64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Write the full inventory to `path` as a single JSON document,
    /// overwriting any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let json = serde_json::to_string_pretty(&self.items)?;
        std::fs::write(path, json)?;

        log::info!("save: saved {} items to {}", self.items.len(), path.display());

        Ok(())
    }

    /// Names with stock strictly below `threshold`, in iteration order.
    ///
    /// The one query that signals a usage error instead of defaulting:
    /// a zero threshold is rejected.
    pub fn low_stock(&self, threshold: u64) -> Result<Vec<String>> {
        if threshold == 0 {
            log::error!("low_stock: threshold must be positive");
            return Err(Error::InvalidThreshold);
        }

        Ok(self
            .items
            .iter()
            .filter(|(_, &qty)| qty < threshold)
            .map(|(name, _)| name.clone())
            .collect())
    }

    /// Log the current inventory at info level.
    pub fn report(&self) {
        log::info!("Inventory Report");

        if self.items.is_empty() {
            log::info!("(empty inventory)");
            return;
        }

        for (name, qty) in &self.items {
            log::info!("{} -> {}", name, qty);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.items.iter().map(|(name, &qty)| (name.as_str(), qty))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}
