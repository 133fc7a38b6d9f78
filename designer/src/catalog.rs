//! Option lists the editor chooses from, and the active choice set.
//!
//! The catalog is read-only input supplied by the host at session start;
//! the engine never edits it. Every list is single-select and the session
//! opens with the first entry of each list active.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// A product that can be designed on, like a t-shirt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductType {
    pub id: String,
    pub name: String,
    /// Asset reference for the product mockup.
    pub image: String,
}

/// A fabric the product can be made of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FabricType {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// A named aesthetic direction for the design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignStyle {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// An application technique with a per-unit surcharge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchType {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// The four option lists a design session draws from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub product_types: Vec<ProductType>,
    pub fabric_types: Vec<FabricType>,
    pub design_styles: Vec<DesignStyle>,
    pub patch_types: Vec<PatchType>,
}

impl Catalog {
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&ProductType> {
        self.product_types.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn fabric(&self, id: &str) -> Option<&FabricType> {
        self.fabric_types.iter().find(|f| f.id == id)
    }

    #[must_use]
    pub fn style(&self, id: &str) -> Option<&DesignStyle> {
        self.design_styles.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn patch(&self, id: &str) -> Option<&PatchType> {
        self.patch_types.iter().find(|p| p.id == id)
    }

    /// Whether every list has at least one entry. A session cannot open
    /// against a catalog that fails this.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.product_types.is_empty()
            && !self.fabric_types.is_empty()
            && !self.design_styles.is_empty()
            && !self.patch_types.is_empty()
    }
}

/// The active selection, exactly one entry per list.
#[derive(Debug, Clone, PartialEq)]
pub struct Choices {
    pub product: ProductType,
    pub fabric: FabricType,
    pub style: DesignStyle,
    pub patch: PatchType,
}

impl Choices {
    /// The opening selection: the first entry of each list. `None` when any
    /// list is empty.
    #[must_use]
    pub fn first_of(catalog: &Catalog) -> Option<Self> {
        Some(Self {
            product: catalog.product_types.first()?.clone(),
            fabric: catalog.fabric_types.first()?.clone(),
            style: catalog.design_styles.first()?.clone(),
            patch: catalog.patch_types.first()?.clone(),
        })
    }
}
