use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

/// Validated fields for inserting a supplier
#[derive(Clone, Debug, Default)]
pub struct NewSupplier {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
}

/// Fields to replace on an existing supplier, `None` leaves the column untouched
#[derive(Clone, Debug, Default)]
pub struct SupplierPatch {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

pub struct SupplierRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SupplierRepository<'a, C> {
    /// Creates a new instance of [`SupplierRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn active_model(supplier: NewSupplier) -> entity::supplier::ActiveModel {
        let now = Utc::now().naive_utc();

        entity::supplier::ActiveModel {
            name: ActiveValue::Set(supplier.name),
            contact: ActiveValue::Set(supplier.contact),
            email: ActiveValue::Set(supplier.email),
            phone: ActiveValue::Set(supplier.phone),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
    }

    /// Creates a new supplier
    pub async fn create(&self, supplier: NewSupplier) -> Result<entity::supplier::Model, DbErr> {
        Self::active_model(supplier).insert(self.db).await
    }

    /// Inserts many suppliers with a single statement
    pub async fn create_many(&self, suppliers: Vec<NewSupplier>) -> Result<(), DbErr> {
        if suppliers.is_empty() {
            return Ok(());
        }

        entity::prelude::Supplier::insert_many(suppliers.into_iter().map(Self::active_model))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_by_id(&self, supplier_id: i32) -> Result<Option<entity::supplier::Model>, DbErr> {
        entity::prelude::Supplier::find_by_id(supplier_id)
            .one(self.db)
            .await
    }

    /// Get every supplier ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::supplier::Model>, DbErr> {
        entity::prelude::Supplier::find()
            .order_by_asc(entity::supplier::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the provided patch to a supplier
    ///
    /// Returns `Ok(None)` if the supplier does not exist or disappears before the write.
    /// `updated_at` is refreshed on every call, even when the patch is empty.
    pub async fn update(
        &self,
        supplier_id: i32,
        patch: SupplierPatch,
    ) -> Result<Option<entity::supplier::Model>, DbErr> {
        let Some(supplier) = self.get_by_id(supplier_id).await? else {
            return Ok(None);
        };

        let mut supplier_am = supplier.into_active_model();

        if let Some(name) = patch.name {
            supplier_am.name = ActiveValue::Set(name);
        }
        if let Some(contact) = patch.contact {
            supplier_am.contact = ActiveValue::Set(contact);
        }
        if let Some(email) = patch.email {
            supplier_am.email = ActiveValue::Set(email);
        }
        if let Some(phone) = patch.phone {
            supplier_am.phone = ActiveValue::Set(phone);
        }
        supplier_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        match supplier_am.update(self.db).await {
            Ok(supplier) => Ok(Some(supplier)),
            // Deleted by another writer between the read and the update
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Deletes a supplier
    ///
    /// Returns OK regardless of supplier existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, supplier_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Supplier::delete_by_id(supplier_id)
            .exec(self.db)
            .await
    }
}
