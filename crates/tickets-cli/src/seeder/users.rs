//! Partner and customer seeding.
//!
//! Each profile needs its user row first, so users are inserted in a batch,
//! their ids collected in insertion order, then the profile rows are inserted
//! against those ids.

use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StreetName};
use fake::faker::company::en::CompanyName;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use rayon::prelude::*;
use sqlx::{Postgres, QueryBuilder, Transaction};

use super::models::{CustomerSeed, PartnerSeed, UserSeed};
use super::{BATCH_SIZE, SeedResult};

fn generate_user(kind: &str, idx: usize, run_tag: &str, password_hash: &str) -> UserSeed {
    let name: String = Name().fake();
    UserSeed {
        name,
        email: format!("{}{}.{}@tickets.test", kind, idx, run_tag),
        password_hash: password_hash.to_string(),
    }
}

/// Generates partner data in parallel using Rayon.
pub fn generate_partners(count: usize, run_tag: &str, password_hash: &str) -> Vec<PartnerSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| PartnerSeed {
            user: generate_user("partner", idx, run_tag, password_hash),
            company_name: CompanyName().fake(),
        })
        .collect()
}

/// Generates customer data in parallel using Rayon.
pub fn generate_customers(count: usize, run_tag: &str, password_hash: &str) -> Vec<CustomerSeed> {
    (0..count)
        .into_par_iter()
        .map(|idx| {
            let building: String = BuildingNumber().fake();
            let street: String = StreetName().fake();
            let city: String = CityName().fake();

            CustomerSeed {
                user: generate_user("customer", idx, run_tag, password_hash),
                address: format!("{} {}, {}", building, street, city),
                phone: PhoneNumber().fake(),
            }
        })
        .collect()
}

async fn insert_users_chunk(
    tx: &mut Transaction<'_, Postgres>,
    users: &[&UserSeed],
) -> SeedResult<Vec<i64>> {
    let mut builder = QueryBuilder::<Postgres>::new("INSERT INTO users (name, email, password_hash) ");
    builder.push_values(users, |mut row, user| {
        row.push_bind(&user.name)
            .push_bind(&user.email)
            .push_bind(&user.password_hash);
    });
    builder.push(" RETURNING id");

    let ids = builder
        .build_query_scalar::<i64>()
        .fetch_all(&mut **tx)
        .await?;
    Ok(ids)
}

/// Inserts partners with their users. Returns the partner ids.
pub async fn insert_partners(
    tx: &mut Transaction<'_, Postgres>,
    partners: &[PartnerSeed],
) -> SeedResult<Vec<i64>> {
    let mut partner_ids = Vec::with_capacity(partners.len());

    for chunk in partners.chunks(BATCH_SIZE) {
        let users: Vec<&UserSeed> = chunk.iter().map(|p| &p.user).collect();
        let user_ids = insert_users_chunk(tx, &users).await?;

        let mut builder = QueryBuilder::<Postgres>::new("INSERT INTO partners (user_id, company_name) ");
        builder.push_values(chunk.iter().zip(user_ids), |mut row, (partner, user_id)| {
            row.push_bind(user_id).push_bind(&partner.company_name);
        });
        builder.push(" RETURNING id");

        let ids = builder
            .build_query_scalar::<i64>()
            .fetch_all(&mut **tx)
            .await?;
        partner_ids.extend(ids);
    }

    Ok(partner_ids)
}

/// Inserts customers with their users. Returns the customer ids.
pub async fn insert_customers(
    tx: &mut Transaction<'_, Postgres>,
    customers: &[CustomerSeed],
) -> SeedResult<Vec<i64>> {
    let mut customer_ids = Vec::with_capacity(customers.len());

    for chunk in customers.chunks(BATCH_SIZE) {
        let users: Vec<&UserSeed> = chunk.iter().map(|c| &c.user).collect();
        let user_ids = insert_users_chunk(tx, &users).await?;

        let mut builder =
            QueryBuilder::<Postgres>::new("INSERT INTO customers (user_id, address, phone) ");
        builder.push_values(chunk.iter().zip(user_ids), |mut row, (customer, user_id)| {
            row.push_bind(user_id)
                .push_bind(&customer.address)
                .push_bind(&customer.phone);
        });
        builder.push(" RETURNING id");

        let ids = builder
            .build_query_scalar::<i64>()
            .fetch_all(&mut **tx)
            .await?;
        customer_ids.extend(ids);
    }

    Ok(customer_ids)
}
