//! Unit templates and the catalog that owns them
//!
//! Unit kinds are data rows, not types. The catalog is read-only once
//! built; new kinds come from extending it with a TOML file.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::core::error::{Result, TacticalError};

/// Immutable stat definition for one kind of unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitTemplate {
    /// Unique kind name, e.g. "Abrams"
    pub name: String,
    /// Classification label, e.g. "tank"
    pub category: String,
    pub attack_power: i32,
    pub defense_power: i32,
    pub speed: i32,
    /// Ammunition per member at full strength
    pub ammo_capacity: u32,
    /// 0.0 to 1.0
    pub accuracy: f32,
    /// 0.0 to 1.0
    pub survivability: f32,
    /// Kind-specific modifier carried through unchanged; nothing in this
    /// crate assigns it a meaning.
    pub engagement_factor: f32,
}

impl UnitTemplate {
    /// Check factor bounds
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| TacticalError::InvalidTemplate {
            name: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name is empty".into()));
        }
        if !(0.0..=1.0).contains(&self.accuracy) {
            return Err(invalid(format!("accuracy {} outside [0, 1]", self.accuracy)));
        }
        if !(0.0..=1.0).contains(&self.survivability) {
            return Err(invalid(format!(
                "survivability {} outside [0, 1]",
                self.survivability
            )));
        }
        if !self.engagement_factor.is_finite() {
            return Err(invalid("engagement_factor is not finite".into()));
        }
        Ok(())
    }
}

/// Registry of unit templates indexed by name
#[derive(Debug, Clone, Default)]
pub struct UnitCatalog {
    templates: AHashMap<String, Arc<UnitTemplate>>,
}

impl UnitCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the built-in kinds
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        for template in default_templates() {
            // Built-ins are distinct and in range
            let name = template.name.clone();
            catalog.templates.insert(name, Arc::new(template));
        }
        catalog
    }

    /// Add a kind. Fails if the name is taken or the stats are out of range.
    pub fn register(&mut self, template: UnitTemplate) -> Result<()> {
        template.validate()?;
        if self.templates.contains_key(&template.name) {
            return Err(TacticalError::DuplicateKind(template.name));
        }
        tracing::debug!("Registered unit kind '{}' ({})", template.name, template.category);
        self.templates
            .insert(template.name.clone(), Arc::new(template));
        Ok(())
    }

    /// Shared template for a kind
    pub fn lookup(&self, kind: &str) -> Result<Arc<UnitTemplate>> {
        self.templates
            .get(kind)
            .cloned()
            .ok_or_else(|| TacticalError::UnknownKind(kind.to_string()))
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.templates.contains_key(kind)
    }

    /// Registered kind names, sorted
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Parse a catalog containing only the kinds in a TOML string
    pub fn parse_toml(content: &str) -> Result<Self> {
        let mut catalog = Self::new();
        catalog.extend_from_toml(content)?;
        Ok(catalog)
    }

    /// Register every `[[units]]` entry of a TOML string.
    ///
    /// Returns the names added. Nothing is registered if any entry fails.
    pub fn extend_from_toml(&mut self, content: &str) -> Result<Vec<String>> {
        let file: TomlCatalog = toml::from_str(content)?;

        let mut staged = self.clone();
        let mut added = Vec::with_capacity(file.units.len());
        for template in file.units {
            added.push(template.name.clone());
            staged.register(template)?;
        }

        *self = staged;
        Ok(added)
    }

    /// Built-in kinds plus the kinds in a TOML file
    pub fn load_from_toml(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut catalog = Self::with_defaults();
        let added = catalog.extend_from_toml(&content)?;
        tracing::info!(
            "Loaded {} unit kinds from {}",
            added.len(),
            path.display()
        );
        Ok(catalog)
    }
}

/// TOML representation of a catalog file
#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    units: Vec<UnitTemplate>,
}

fn default_templates() -> Vec<UnitTemplate> {
    vec![
        UnitTemplate {
            name: "Abrams".into(),
            category: "tank".into(),
            attack_power: 10,
            defense_power: 5,
            speed: 3,
            ammo_capacity: 500,
            accuracy: 0.9,
            survivability: 0.2,
            engagement_factor: 3.0,
        },
        UnitTemplate {
            name: "BWP".into(),
            category: "combat vehicle".into(),
            attack_power: 8,
            defense_power: 4,
            speed: 4,
            ammo_capacity: 300,
            accuracy: 0.8,
            survivability: 0.4,
            engagement_factor: 0.1,
        },
        UnitTemplate {
            name: "Soldier".into(),
            category: "soldier".into(),
            attack_power: 5,
            defense_power: 2,
            speed: 6,
            ammo_capacity: 100,
            accuracy: 0.6,
            survivability: 0.8,
            engagement_factor: 0.1,
        },
        UnitTemplate {
            name: "Krab".into(),
            category: "artillery".into(),
            attack_power: 12,
            defense_power: 8,
            speed: 2,
            ammo_capacity: 40,
            accuracy: 0.7,
            survivability: 0.5,
            engagement_factor: 1.2,
        },
    ]
}

// === GLOBAL CATALOG ACCESS ===

static CATALOG: OnceLock<UnitCatalog> = OnceLock::new();

/// Process-wide catalog (built-in kinds unless `set_catalog` ran first)
pub fn catalog() -> &'static UnitCatalog {
    CATALOG.get_or_init(UnitCatalog::with_defaults)
}

/// Install the process-wide catalog (can only be called once)
///
/// Returns Err if a catalog was already installed or read.
pub fn set_catalog(catalog: UnitCatalog) -> std::result::Result<(), UnitCatalog> {
    CATALOG.set(catalog)
}
