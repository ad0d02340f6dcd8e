use anyhow::anyhow;
use sqlx::{PgConnection, PgPool};
use tracing::{debug, error, info, instrument, warn};

use tickets_auth::issue_token;
use tickets_config::JwtConfig;
use tickets_core::{AppError, AuthError, spawn_verify_dummy, spawn_verify_password};
use tickets_models::{LoginRequest, LoginResponse, User, UserIdentity};

use crate::metrics;

pub struct AuthService;

impl AuthService {
    #[instrument(skip(db, dto, jwt_config), fields(db.operation = "SELECT", db.table = "users"))]
    pub async fn login(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<LoginResponse, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(&dto.email)
        .fetch_optional(db)
        .await?;

        let Some(user) = user else {
            spawn_verify_dummy(dto.password).await?;
            warn!(user.email = %dto.email, "Login attempt for unknown email");
            metrics::track_login_failure("unknown_email");
            return Err(AuthError::InvalidCredentials.into());
        };

        if !spawn_verify_password(dto.password, user.password_hash).await? {
            warn!(user.id = user.id, "Login attempt with wrong password");
            metrics::track_login_failure("wrong_password");
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = issue_token(user.id, &user.email, jwt_config)?;

        metrics::track_token_issued();
        metrics::track_login_success();
        info!(user.id = user.id, "User logged in");

        Ok(LoginResponse { token })
    }

    /// Looks up the `{id, email}` of a user by id.
    #[instrument(skip(db), fields(db.operation = "SELECT", db.table = "users"))]
    pub async fn find_identity(db: &PgPool, user_id: i64) -> Result<Option<UserIdentity>, AppError> {
        debug!("Resolving token identity");

        let identity =
            sqlx::query_as::<_, UserIdentity>("SELECT id, email FROM users WHERE id = $1")
                .bind(user_id)
                .fetch_optional(db)
                .await
                .map_err(|e| {
                    error!(error = %e, "Database error resolving identity");
                    AppError::internal(e)
                })?;

        Ok(identity)
    }

    /// Inserts a user row inside the caller's transaction.
    ///
    /// A taken email is a 409.
    #[instrument(skip(conn, name, password_hash), fields(db.operation = "INSERT", db.table = "users"))]
    pub async fn create_user(
        conn: &mut PgConnection,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING id, name, email, password_hash, created_at",
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                warn!(user.email = %email, "Attempted to register an existing email");
                return AppError::conflict(anyhow!("Email already exists"));
            }
            error!(error = %e, "Database error creating user");
            AppError::internal(e)
        })
    }
}
