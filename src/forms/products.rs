use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use validator::Validate;

use crate::domain::product::{NewProduct, UpdateProduct};
use crate::forms::{FormResult, optional, required};

/// Payload accepted when creating a product, also used for catalogue imports.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddProductForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    #[serde(alias = "imageUrl")]
    pub image_url: Option<String>,
}

impl AddProductForm {
    /// Validates and sanitizes the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> FormResult<NewProduct> {
        self.validate()?;

        let mut product = NewProduct::new(required(self.name, "name")?, self.price);
        if let Some(description) = optional(self.description) {
            product = product.with_description(description);
        }
        if let Some(image_url) = optional(self.image_url) {
            product = product.with_image_url(image_url);
        }

        Ok(product)
    }
}

/// Payload accepted when updating a product.
#[derive(Debug, Deserialize, Validate)]
pub struct EditProductForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "id is required"))]
    pub id: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
    #[serde(alias = "imageUrl")]
    pub image_url: Option<String>,
}

impl EditProductForm {
    /// Validates the payload and returns the target product id with its changes.
    pub fn into_update_product(self) -> FormResult<(String, UpdateProduct)> {
        self.validate()?;

        let id = required(self.id, "id")?;
        let mut update = UpdateProduct::new(required(self.name, "name")?, self.price);
        if let Some(description) = optional(self.description) {
            update = update.description(description);
        }
        if let Some(image_url) = optional(self.image_url) {
            update = update.image_url(image_url);
        }

        Ok((id, update))
    }
}

/// Errors raised while reading a product catalogue file.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to read catalogue: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON catalogue: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid CSV catalogue: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported catalogue format `{0}`, expected .json or .csv")]
    UnsupportedFormat(String),
}

/// Parse a JSON array of products.
pub fn parse_products_json<R: Read>(reader: R) -> Result<Vec<AddProductForm>, CatalogueError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse CSV rows with a `name,price,description,image_url` header.
pub fn parse_products_csv<R: Read>(reader: R) -> Result<Vec<AddProductForm>, CatalogueError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut records = Vec::new();
    for record in rdr.deserialize() {
        records.push(record?);
    }

    Ok(records)
}

/// Read a catalogue file, picking the format from its extension.
pub fn read_products_file(path: &Path) -> Result<Vec<AddProductForm>, CatalogueError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "json" => parse_products_json(File::open(path)?),
        "csv" => parse_products_csv(File::open(path)?),
        _ => Err(CatalogueError::UnsupportedFormat(
            path.display().to_string(),
        )),
    }
}
