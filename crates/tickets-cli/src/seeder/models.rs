//! Data models for database seeding configuration.

use chrono::{DateTime, Utc};

/// Seed data for a login identity.
pub struct UserSeed {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Seed data for a partner profile; `user` is inserted first.
pub struct PartnerSeed {
    pub user: UserSeed,
    pub company_name: String,
}

/// Seed data for a customer profile; `user` is inserted first.
pub struct CustomerSeed {
    pub user: UserSeed,
    pub address: String,
    pub phone: String,
}

pub struct EventSeed {
    pub name: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub partner_id: i64,
}

/// Complete configuration for database seeding.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub num_partners: usize,
    pub events_per_partner: usize,
    pub num_customers: usize,
    /// Plaintext password shared by every seeded user.
    pub password: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            num_partners: 5,
            events_per_partner: 3,
            num_customers: 20,
            password: "password123".to_string(),
        }
    }
}

impl SeedConfig {
    /// Creates a new seed configuration with the specified number of partners.
    pub fn new(num_partners: usize) -> Self {
        Self {
            num_partners,
            ..Default::default()
        }
    }

    pub fn with_events_per_partner(mut self, events: usize) -> Self {
        self.events_per_partner = events;
        self
    }

    pub fn with_customers(mut self, customers: usize) -> Self {
        self.num_customers = customers;
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn total_events(&self) -> usize {
        self.num_partners * self.events_per_partner
    }

    pub fn total_users(&self) -> usize {
        self.num_partners + self.num_customers
    }
}
