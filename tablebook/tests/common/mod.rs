//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the tablebook library.

pub mod database;

use tablebook::Reservation;

/// Builder for creating test reservations with sensible defaults.
#[allow(dead_code)]
pub struct ReservationFixture {
    date: String,
    time: String,
    party: u32,
    name: String,
    email: String,
    phone: Option<String>,
    message: Option<String>,
}

#[allow(dead_code)]
impl ReservationFixture {
    /// Creates a new fixture builder with default values.
    ///
    /// Defaults describe a valid booking: a party of four on 2017/06/10 at
    /// 06:02 AM, with no phone or message.
    pub fn new() -> Self {
        Self {
            date: "2017/06/10".to_string(),
            time: "06:02 AM".to_string(),
            party: 4,
            name: "Family".to_string(),
            email: "usename@example.com".to_string(),
            phone: None,
            message: None,
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn with_party(mut self, party: u32) -> Self {
        self.party = party;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn build(self) -> Reservation {
        Reservation::builder(self.date, self.time, self.party, self.name, self.email)
            .phone(self.phone)
            .message(self.message)
            .build()
    }
}

impl Default for ReservationFixture {
    fn default() -> Self {
        Self::new()
    }
}
