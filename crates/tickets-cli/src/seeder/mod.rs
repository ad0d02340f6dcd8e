//! Database seeding module.
//!
//! Generates fake data in parallel using Rayon and inserts it in batches with
//! multi-value INSERT statements. Everything is written inside a single
//! transaction, so a failed seed leaves no partial data behind.

pub mod events;
pub mod models;
pub mod users;

use std::time::Instant;

use sqlx::PgPool;
use tickets_core::hash_password;
use uuid::Uuid;

pub use models::SeedConfig;

pub(crate) const BATCH_SIZE: usize = 500;

pub type SeedResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Row counts written by [`seed_all`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub partners: usize,
    pub events: u64,
    pub customers: usize,
}

/// Seeds partners, their events, and customers.
pub async fn seed_all(db: &PgPool, config: SeedConfig) -> SeedResult<SeedSummary> {
    let total_start = Instant::now();
    println!("🌱 Starting database seeding...");
    println!(
        "   {} partners × {} events, {} customers",
        config.num_partners, config.events_per_partner, config.num_customers
    );

    let password_hash = hash_password(&config.password).map_err(|e| e.error.to_string())?;
    // Keeps emails unique across repeated seed runs.
    let run_tag = Uuid::new_v4().simple().to_string()[..8].to_string();

    let mut tx = db.begin().await?;

    let step = Instant::now();
    let partners = users::generate_partners(config.num_partners, &run_tag, &password_hash);
    let partner_ids = users::insert_partners(&mut tx, &partners).await?;
    println!("   ✓ Inserted {} partners in {:?}", partner_ids.len(), step.elapsed());

    let step = Instant::now();
    let events = events::generate_events(&partner_ids, config.events_per_partner);
    let event_count = events::insert_events(&mut tx, &events).await?;
    println!("   ✓ Inserted {} events in {:?}", event_count, step.elapsed());

    let step = Instant::now();
    let customers = users::generate_customers(config.num_customers, &run_tag, &password_hash);
    let customer_ids = users::insert_customers(&mut tx, &customers).await?;
    println!("   ✓ Inserted {} customers in {:?}", customer_ids.len(), step.elapsed());

    tx.commit().await?;

    println!("✅ Seeding completed in {:?}", total_start.elapsed());
    println!("   All seeded users share the password: {}", config.password);

    Ok(SeedSummary {
        partners: partner_ids.len(),
        events: event_count,
        customers: customer_ids.len(),
    })
}
