use sqlx::PgPool;
use tracing::{info, instrument};

use tickets_core::{AppError, spawn_hash_password};
use tickets_models::{Customer, CustomerRegistered, RegisterCustomerDto};

use crate::metrics;
use crate::modules::auth::service::AuthService;

pub struct CustomerService;

impl CustomerService {
    /// Creates the user and customer rows in one transaction.
    #[instrument(skip(db, dto), fields(db.operation = "INSERT", db.table = "customers"))]
    pub async fn register(
        db: &PgPool,
        dto: RegisterCustomerDto,
    ) -> Result<CustomerRegistered, AppError> {
        let password_hash = spawn_hash_password(dto.password).await?;

        let mut tx = db.begin().await?;

        let user = AuthService::create_user(&mut *tx, &dto.name, &dto.email, &password_hash).await?;

        let customer = sqlx::query_as::<_, Customer>(
            "INSERT INTO customers (user_id, address, phone, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, user_id, address, phone, created_at",
        )
        .bind(user.id)
        .bind(&dto.address)
        .bind(&dto.phone)
        .bind(user.created_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        metrics::track_user_registered("customer");
        info!(customer.id = customer.id, user.id = user.id, "Customer registered");

        Ok(CustomerRegistered {
            id: customer.id,
            name: user.name,
            user_id: user.id,
            address: customer.address,
            phone: customer.phone,
            created_at: customer.created_at,
        })
    }
}
