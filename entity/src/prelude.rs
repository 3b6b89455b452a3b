pub use super::category::Entity as Category;
pub use super::product::Entity as Product;
pub use super::product_category::Entity as ProductCategory;
pub use super::supplier::Entity as Supplier;
