use serde::Deserialize;

use crate::domain::product::Product;
use crate::forms::products::{AddProductForm, EditProductForm};
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted when deleting a product.
#[derive(Debug, Default, Deserialize)]
pub struct ProductIdQuery {
    pub id: Option<String>,
}

/// Outcome of a catalogue import.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub failed: usize,
}

/// Lists every product in the catalogue.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader + ?Sized,
{
    repo.list_products().map_err(ServiceError::from)
}

/// Creates a new product.
pub fn create_product<R>(repo: &R, form: AddProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let new_product = form.into_new_product()?;

    repo.create_product(&new_product).map_err(ServiceError::from)
}

/// Updates an existing product.
pub fn update_product<R>(repo: &R, form: EditProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let (product_id, update) = form.into_update_product()?;

    repo.update_product(&product_id, &update)
        .map_err(ServiceError::from)
}

/// Deletes a product by id.
pub fn delete_product<R>(repo: &R, query: ProductIdQuery) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    let product_id = query
        .id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ServiceError::Validation("id is required".to_string()))?;

    repo.delete_product(&product_id).map_err(ServiceError::from)
}

/// Inserts catalogue records one by one; a failing record is logged and skipped.
pub fn import_products<R>(repo: &R, records: Vec<AddProductForm>) -> ImportSummary
where
    R: ProductWriter + ?Sized,
{
    let mut summary = ImportSummary::default();

    for record in records {
        let name = record.name.clone();
        let result = record
            .into_new_product()
            .map_err(ServiceError::from)
            .and_then(|new_product| {
                repo.create_product(&new_product)
                    .map_err(ServiceError::from)
            });

        match result {
            Ok(product) => {
                log::info!("Imported product {} with id {}", product.name, product.id);
                summary.imported += 1;
            }
            Err(err) => {
                log::error!("Failed to import product {name:?}: {err}");
                summary.failed += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    use crate::repository::RepositoryError;
    use crate::repository::mock::{MockProductReader, MockProductWriter};

    fn sample_product(id: &str, name: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            image_url: None,
            description: None,
            price,
            created_at: NaiveDateTime::default(),
        }
    }

    fn add_form(name: &str, price: f64) -> AddProductForm {
        AddProductForm {
            name: name.to_string(),
            price,
            description: None,
            image_url: None,
        }
    }

    #[test]
    fn list_products_returns_catalogue() {
        let mut repo = MockProductReader::new();

        repo.expect_list_products()
            .times(1)
            .returning(|| Ok(vec![sample_product("p1", "Mug", 12.5)]));

        let products = list_products(&repo).expect("expected success");

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Mug");
    }

    #[test]
    fn create_product_validates_and_persists() {
        let mut repo = MockProductWriter::new();

        repo.expect_create_product()
            .times(1)
            .withf(|new_product| {
                assert_eq!(new_product.name, "Mug");
                assert_eq!(new_product.price, 12.5);
                true
            })
            .returning(|new_product| Ok(sample_product("p1", &new_product.name, new_product.price)));

        let created = create_product(&repo, add_form(" Mug ", 12.5)).expect("expected success");

        assert_eq!(created.id, "p1");
    }

    #[test]
    fn create_product_rejects_missing_name() {
        let repo = MockProductWriter::new();

        let result = create_product(&repo, add_form("", 1.0));

        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[test]
    fn update_product_maps_missing_row_to_not_found() {
        let mut repo = MockProductWriter::new();

        repo.expect_update_product()
            .times(1)
            .withf(|product_id, updates| {
                assert_eq!(product_id, "missing");
                assert_eq!(updates.name, "Tea");
                true
            })
            .returning(|_, _| Err(RepositoryError::NotFound));

        let form = EditProductForm {
            id: "missing".to_string(),
            name: "Tea".to_string(),
            price: 3.0,
            description: None,
            image_url: None,
        };

        let result = update_product(&repo, form);

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[test]
    fn delete_product_requires_id() {
        let repo = MockProductWriter::new();

        let result = delete_product(&repo, ProductIdQuery { id: Some("  ".into()) });

        match result {
            Err(ServiceError::Validation(message)) => assert_eq!(message, "id is required"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn delete_product_removes_record() {
        let mut repo = MockProductWriter::new();

        repo.expect_delete_product()
            .times(1)
            .withf(|product_id| product_id == "p4")
            .returning(|_| Ok(()));

        let result = delete_product(&repo, ProductIdQuery { id: Some("p4".into()) });

        assert!(matches!(result, Ok(())));
    }

    #[test]
    fn import_skips_failing_records() {
        let mut repo = MockProductWriter::new();

        repo.expect_create_product()
            .times(2)
            .returning(|new_product| {
                if new_product.name == "Broken" {
                    Err(RepositoryError::ConstraintViolation("CHECK".into()))
                } else {
                    Ok(sample_product("p1", &new_product.name, new_product.price))
                }
            });

        let summary = import_products(
            &repo,
            vec![add_form("Mug", 12.5), add_form("Broken", 1.0), add_form("", 2.0)],
        );

        assert_eq!(
            summary,
            ImportSummary {
                imported: 1,
                failed: 2,
            }
        );
    }
}
