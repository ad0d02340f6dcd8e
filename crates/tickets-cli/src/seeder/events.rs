//! Event seeding functionality.

use chrono::{Duration, Utc};
use fake::Fake;
use fake::faker::address::en::CityName;
use fake::faker::lorem::en::{Sentence, Words};
use rayon::prelude::*;
use sqlx::{Postgres, QueryBuilder, Transaction};

use super::models::EventSeed;
use super::{BATCH_SIZE, SeedResult};

/// Generates `per_partner` upcoming events for every partner.
pub fn generate_events(partner_ids: &[i64], per_partner: usize) -> Vec<EventSeed> {
    let now = Utc::now();

    partner_ids
        .par_iter()
        .flat_map(|&partner_id| {
            (0..per_partner)
                .map(|_| {
                    let words: Vec<String> = Words(2..4).fake();
                    let days_ahead: i64 = (1..365).fake();
                    let venue: String = CityName().fake();

                    EventSeed {
                        name: words.join(" "),
                        description: Sentence(6..14).fake(),
                        date: now + Duration::days(days_ahead),
                        location: format!("{} Arena", venue),
                        partner_id,
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

pub async fn insert_events(
    tx: &mut Transaction<'_, Postgres>,
    events: &[EventSeed],
) -> SeedResult<u64> {
    let mut inserted = 0;

    for chunk in events.chunks(BATCH_SIZE) {
        let mut builder = QueryBuilder::<Postgres>::new(
            "INSERT INTO events (name, description, date, location, partner_id) ",
        );
        builder.push_values(chunk, |mut row, event| {
            row.push_bind(&event.name)
                .push_bind(&event.description)
                .push_bind(event.date)
                .push_bind(&event.location)
                .push_bind(event.partner_id);
        });

        inserted += builder.build().execute(&mut **tx).await?.rows_affected();
    }

    Ok(inserted)
}
