use sqlx::PgPool;
use tracing::{debug, info, instrument};

use tickets_core::{AppError, spawn_hash_password};
use tickets_models::{Partner, PartnerRegistered, RegisterPartnerDto};

use crate::metrics;
use crate::modules::auth::service::AuthService;

pub struct PartnerService;

impl PartnerService {
    /// Creates the user and partner rows in one transaction.
    #[instrument(skip(db, dto), fields(db.operation = "INSERT", db.table = "partners"))]
    pub async fn register(
        db: &PgPool,
        dto: RegisterPartnerDto,
    ) -> Result<PartnerRegistered, AppError> {
        let password_hash = spawn_hash_password(dto.password).await?;

        let mut tx = db.begin().await?;

        let user = AuthService::create_user(&mut *tx, &dto.name, &dto.email, &password_hash).await?;

        let partner = sqlx::query_as::<_, Partner>(
            "INSERT INTO partners (user_id, company_name, created_at)
             VALUES ($1, $2, $3)
             RETURNING id, user_id, company_name, created_at",
        )
        .bind(user.id)
        .bind(&dto.company_name)
        .bind(user.created_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        metrics::track_user_registered("partner");
        info!(partner.id = partner.id, user.id = user.id, "Partner registered");

        Ok(PartnerRegistered {
            id: partner.id,
            name: user.name,
            user_id: user.id,
            company_name: partner.company_name,
            created_at: partner.created_at,
        })
    }

    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "partners"))]
    pub async fn find_by_user_id(db: &PgPool, user_id: i64) -> Result<Option<Partner>, AppError> {
        debug!("Resolving partner profile");

        let partner = sqlx::query_as::<_, Partner>(
            "SELECT id, user_id, company_name, created_at FROM partners WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?;

        Ok(partner)
    }
}
