//! Themed YAML Core Types
//!
//! This crate provides the foundational value types shared by the themed
//! YAML analyzer and its front ends. It includes:
//!
//! - **Colors**: `AARRGGBB` colors with opacity and contrast helpers ([`color::Color`])
//! - **Item types**: The `.type` markers an item can declare ([`item_type::ItemType`])
//! - **Values**: Typed literal values held by items ([`value::Value`])
//! - **Paths**: Dotted item paths used as import keys ([`path::ItemPath`])

pub mod color;
pub mod item_type;
pub mod path;
pub mod value;
