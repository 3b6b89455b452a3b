use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::category::CategoryDto;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub quantity_in_stock: i32,
    pub price: f64,
    pub supplier_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithCategoriesDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub quantity_in_stock: i32,
    pub price: f64,
    pub supplier_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub categories: Vec<CategoryDto>,
}

/// Fields for a new product; `name`, `price` and `supplierId` are required
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewProductDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity_in_stock: Option<i32>,
    pub price: Option<f64>,
    pub supplier_id: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[serde(default)]
    pub new_product: NewProductDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductResponse {
    pub new_product: ProductDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AssignCategoryResponse {
    pub message: String,
    pub product: ProductWithCategoriesDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProductsResponse {
    pub products: Vec<ProductDto>,
}
