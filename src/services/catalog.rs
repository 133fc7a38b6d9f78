//! Launch catalog and pricing data.
//!
//! Option ids are stable strings referenced by saved designs, so entries
//! here are append-only once shipped. The catalog feeds design sessions;
//! the pricing tables feed the admin console and stay editable at runtime.

use designer::catalog::{Catalog, DesignStyle, FabricType, PatchType, ProductType};

use crate::state::{FabricPricing, PatchPricing, PricingTables, ProductPricing};

/// The catalog served to every design session.
#[must_use]
pub fn launch_catalog() -> Catalog {
    Catalog {
        product_types: vec![
            ProductType {
                id: "tshirt".to_owned(),
                name: "T-Shirt".to_owned(),
                image: "/images/tshirt.png".to_owned(),
            },
            ProductType {
                id: "polo".to_owned(),
                name: "Polo Shirt".to_owned(),
                image: "/images/polo.png".to_owned(),
            },
            ProductType {
                id: "socks".to_owned(),
                name: "Socks".to_owned(),
                image: "/images/socks.png".to_owned(),
            },
        ],
        fabric_types: vec![
            FabricType {
                id: "cotton".to_owned(),
                name: "Cotton".to_owned(),
                description: "100% cotton, soft and breathable".to_owned(),
            },
            FabricType {
                id: "polyester".to_owned(),
                name: "Polyester".to_owned(),
                description: "Durable and quick-drying".to_owned(),
            },
            FabricType {
                id: "blend".to_owned(),
                name: "Cotton Blend".to_owned(),
                description: "60% cotton, 40% polyester".to_owned(),
            },
        ],
        design_styles: vec![
            DesignStyle {
                id: "minimal".to_owned(),
                name: "Minimal".to_owned(),
                description: "Clean and simple designs".to_owned(),
            },
            DesignStyle {
                id: "vintage".to_owned(),
                name: "Vintage".to_owned(),
                description: "Retro-inspired designs".to_owned(),
            },
            DesignStyle {
                id: "modern".to_owned(),
                name: "Modern".to_owned(),
                description: "Contemporary and bold designs".to_owned(),
            },
        ],
        patch_types: vec![
            PatchType {
                id: "embroidered".to_owned(),
                name: "Embroidered".to_owned(),
                price: 5.99,
            },
            PatchType {
                id: "printed".to_owned(),
                name: "Printed".to_owned(),
                price: 3.99,
            },
            PatchType {
                id: "heat-pressed".to_owned(),
                name: "Heat Pressed".to_owned(),
                price: 4.99,
            },
        ],
    }
}

/// The admin pricing tables at launch. Fabric descriptions here are the
/// terse wholesale blurbs, not the storefront copy in [`launch_catalog`].
#[must_use]
pub fn launch_pricing() -> PricingTables {
    PricingTables {
        products: vec![
            ProductPricing {
                id: "tshirt".to_owned(),
                name: "T-Shirt".to_owned(),
                base_price: 19.99,
                bulk_discount: 0.1,
            },
            ProductPricing {
                id: "polo".to_owned(),
                name: "Polo Shirt".to_owned(),
                base_price: 29.99,
                bulk_discount: 0.15,
            },
            ProductPricing {
                id: "socks".to_owned(),
                name: "Socks".to_owned(),
                base_price: 9.99,
                bulk_discount: 0.2,
            },
        ],
        patches: vec![
            PatchPricing {
                id: "embroidered".to_owned(),
                name: "Embroidered".to_owned(),
                price: 5.99,
            },
            PatchPricing {
                id: "printed".to_owned(),
                name: "Printed".to_owned(),
                price: 3.99,
            },
            PatchPricing {
                id: "heat-pressed".to_owned(),
                name: "Heat Pressed".to_owned(),
                price: 4.99,
            },
        ],
        fabrics: vec![
            FabricPricing {
                id: "cotton".to_owned(),
                name: "Cotton".to_owned(),
                price: 0.0,
                description: "100% cotton".to_owned(),
            },
            FabricPricing {
                id: "polyester".to_owned(),
                name: "Polyester".to_owned(),
                price: 0.0,
                description: "100% polyester".to_owned(),
            },
            FabricPricing {
                id: "blend".to_owned(),
                name: "Cotton Blend".to_owned(),
                price: 0.0,
                description: "60% cotton, 40% polyester".to_owned(),
            },
        ],
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
