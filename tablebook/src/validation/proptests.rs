//! Property-based tests for `SchemaValidator`.

use super::{ReservationValidator, SchemaValidator};
use crate::Reservation;
use proptest::prelude::*;

fn date_strategy() -> impl Strategy<Value = String> {
    (2000u32..2100, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| format!("{y:04}/{m:02}/{d:02}"))
}

fn time_strategy() -> impl Strategy<Value = String> {
    (1u32..=12, 0u32..60, prop::bool::ANY).prop_map(|(h, m, pm)| {
        format!("{h:02}:{m:02} {}", if pm { "PM" } else { "AM" })
    })
}

fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-z][a-z0-9._]{0,10}", "[a-z]{1,10}", "(com|org|net|io)")
        .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
}

prop_compose! {
    fn valid_reservation()(
        date in date_strategy(),
        time in time_strategy(),
        party in 1u32..40,
        name in "[A-Za-z][A-Za-z ]{0,20}",
        email in email_strategy(),
        phone in prop::option::of("[0-9-]{0,12}"),
        message in prop::option::of(".{0,40}"),
    ) -> Reservation {
        Reservation::builder(date, time, party, name, email)
            .phone(phone)
            .message(message)
            .build()
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Accepted reservations come back exactly as submitted
    #[test]
    fn valid_reservation_returned_unchanged(reservation in valid_reservation()) {
        let validated = SchemaValidator::new().validate(Some(reservation.clone())).unwrap();
        prop_assert_eq!(validated, reservation);
    }

    #[test]
    fn email_without_at_sign_rejected(
        reservation in valid_reservation(),
        email in "[a-z0-9.]{1,20}",
    ) {
        let reservation = Reservation::builder(
            reservation.date(),
            reservation.time(),
            reservation.party(),
            reservation.name(),
            email,
        )
        .build();

        let err = SchemaValidator::new().validate(Some(reservation)).unwrap_err();
        prop_assert_eq!(err.field(), Some("email"));
    }

    #[test]
    fn blank_name_rejected(reservation in valid_reservation(), name in "[ \t]{0,5}") {
        let reservation = Reservation::builder(
            reservation.date(),
            reservation.time(),
            reservation.party(),
            name,
            reservation.email(),
        )
        .build();

        let err = SchemaValidator::new().validate(Some(reservation)).unwrap_err();
        prop_assert_eq!(err.field(), Some("name"));
    }

    // validate reports the first entry of violations, whatever the input
    #[test]
    fn validate_reports_first_violation(
        date in ".{0,12}",
        time in ".{0,10}",
        party in 0u32..3,
        name in ".{0,8}",
        email in ".{0,16}",
    ) {
        let reservation = Reservation::builder(date, time, party, name, email).build();
        let validator = SchemaValidator::new();
        let violations = validator.violations(&reservation);

        match validator.validate(Some(reservation.clone())) {
            Ok(validated) => {
                prop_assert!(violations.is_empty());
                prop_assert_eq!(validated, reservation);
            }
            Err(err) => {
                prop_assert_eq!(err.field(), Some(violations[0].field.as_str()));
            }
        }
    }
}
