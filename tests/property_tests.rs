/// Property-based tests using proptest
/// Tests decode invariants that should hold for all response payloads
use clearbit_client::errors::decode_error_body;
use clearbit_client::models::{Employment, Geo, HandleProfile, Metrics, Name, Site};
use clearbit_client::{Company, EnrichmentResult, Person};
use proptest::option;
use proptest::prelude::*;

fn opt_string() -> impl Strategy<Value = Option<String>> {
    option::of("\\PC{0,20}")
}

// Quarter steps are exact in binary, so text round trips cannot drift
fn opt_float() -> impl Strategy<Value = Option<f64>> {
    option::of((-4_000_000i32..4_000_000).prop_map(|v| f64::from(v) / 4.0))
}

fn name_strategy() -> impl Strategy<Value = Name> {
    (opt_string(), opt_string(), opt_string()).prop_map(|(full_name, given_name, family_name)| {
        Name {
            full_name,
            given_name,
            family_name,
        }
    })
}

fn geo_strategy() -> impl Strategy<Value = Geo> {
    (
        opt_string(),
        opt_string(),
        opt_string(),
        opt_string(),
        opt_float(),
        opt_float(),
    )
        .prop_map(|(street_name, city, state_code, country_code, lat, lng)| Geo {
            street_name,
            city,
            state_code,
            country_code,
            lat,
            lng,
            ..Geo::default()
        })
}

fn employment_strategy() -> impl Strategy<Value = Employment> {
    (opt_string(), opt_string(), opt_string()).prop_map(|(domain, name, title)| Employment {
        domain,
        name,
        title,
        ..Employment::default()
    })
}

fn person_strategy() -> impl Strategy<Value = Person> {
    (
        opt_string(),
        option::of(name_strategy()),
        opt_string(),
        option::of(-12i32..=14),
        option::of(geo_strategy()),
        option::of(employment_strategy()),
        option::of(opt_string().prop_map(|handle| HandleProfile { handle })),
        option::of(any::<bool>()),
    )
        .prop_map(
            |(id, name, email, utc_offset, geo, employment, linkedin, fuzzy)| Person {
                id,
                name,
                email,
                utc_offset,
                geo,
                employment,
                linkedin,
                fuzzy,
                ..Person::default()
            },
        )
}

fn company_strategy() -> impl Strategy<Value = Company> {
    (
        opt_string(),
        opt_string(),
        option::of(prop::collection::vec("[a-z]{1,10}\\.com", 0..4)),
        option::of(prop::collection::vec("\\PC{1,8}", 0..4)),
        option::of(any::<bool>()),
        option::of((option::of(0i64..1_000_000), opt_float()).prop_map(
            |(employees, raised)| Metrics {
                employees,
                raised,
                ..Metrics::default()
            },
        )),
        option::of(
            option::of(prop::collection::vec("\\+?[0-9 ]{5,15}", 0..3)).prop_map(
                |phone_numbers| Site {
                    phone_numbers,
                    ..Site::default()
                },
            ),
        ),
    )
        .prop_map(
            |(id, kind, domain_aliases, tech, email_provider, metrics, site)| Company {
                id,
                kind,
                domain_aliases,
                tech,
                email_provider,
                metrics,
                site,
                ..Company::default()
            },
        )
}

// Property: decoding what was encoded gives back the same record,
// with absent fields still absent
proptest! {
    #[test]
    fn person_round_trip_preserves_presence(person in person_strategy()) {
        let encoded = serde_json::to_string(&person).unwrap();
        let decoded: Person = serde_json::from_str(&encoded).unwrap();
        prop_assert_eq!(decoded, person);
    }

    #[test]
    fn combined_round_trip_preserves_presence(
        person in option::of(person_strategy()),
        company in option::of(company_strategy())
    ) {
        let result = EnrichmentResult { person, company };
        let encoded = serde_json::to_vec(&result).unwrap();
        let decoded: EnrichmentResult = serde_json::from_slice(&encoded).unwrap();
        prop_assert_eq!(decoded, result);
    }

    #[test]
    fn omitted_fields_decode_as_absent(id in "[a-f0-9]{8}") {
        let body = format!(r#"{{"id": "{}"}}"#, id);
        let person: Person = serde_json::from_str(&body).unwrap();
        prop_assert_eq!(person.id.as_deref(), Some(id.as_str()));
        prop_assert_eq!(person, Person { id: Some(id.clone()), ..Person::default() });
    }
}

// Property: the error envelope yields its type and message verbatim
proptest! {
    #[test]
    fn error_envelope_type_and_message_exact(kind in "\\PC*", message in "\\PC*") {
        let body = serde_json::json!({"error": {"type": kind, "message": message}});
        let detail = decode_error_body(body.to_string().as_bytes());
        prop_assert_eq!(detail.kind, kind);
        prop_assert_eq!(detail.message, message);
    }

    #[test]
    fn error_body_decoding_never_panics(body in prop::collection::vec(any::<u8>(), 0..256)) {
        let _ = decode_error_body(&body);
    }
}
