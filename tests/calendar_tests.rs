use chrono::NaiveDate;
use ivent::calendar::feed::calendar_feed_url;
use ivent::calendar::ics::{download_filename, event_to_ics};
use ivent::catalog::model::{Category, Coordinates, DateRange, Event, FilterState};
use ivent::newsletter::{filter_description, Signup, SubscribeError};
use url::Url;

fn sample_event() -> Event {
    Event {
        id: "stuttgart-1".to_string(),
        title: "Jazz im Schlossgarten".to_string(),
        category: Category::Konzert,
        date: NaiveDate::from_ymd_opt(2025, 6, 14)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap(),
        location: "Schlossgarten".to_string(),
        description: "Open-Air mit Bigband und Gästen.".to_string(),
        image: Category::Konzert.placeholder_image().to_string(),
        link: "https://www.stuttgart.de/events/jazz-im-schlossgarten".to_string(),
        ics_link: "https://www.stuttgart.de/events/jazz-im-schlossgarten.ics".to_string(),
        coordinates: Coordinates {
            lat: 48.7816,
            lng: 9.1857,
        },
    }
}

#[test_log::test]
fn should_render_a_vevent_carrying_the_event_fields() {
    let ics = event_to_ics(&sample_event());

    assert!(ics.contains("BEGIN:VCALENDAR"), "{ics}");
    assert!(ics.contains("BEGIN:VEVENT"), "{ics}");
    assert!(ics.contains("UID:stuttgart-1@ivent.app"), "{ics}");
    assert!(ics.contains("SUMMARY:Jazz im Schlossgarten"), "{ics}");
    assert!(ics.contains("DTSTART:20250614T200000Z"), "{ics}");
    assert!(ics.contains("LOCATION:Schlossgarten"), "{ics}");
}

#[test_log::test]
fn should_dash_the_title_for_the_download_name() {
    let filename = download_filename(&sample_event());

    assert_eq!(filename, "Jazz-im-Schlossgarten.ics");
}

#[test_log::test]
fn should_mirror_active_filters_in_the_feed_url() {
    let origin = Url::parse("https://ivent.app").unwrap();
    let filters = FilterState {
        categories: vec![Category::Konzert, Category::Party],
        city: "Stuttgart".to_string(),
        date_range: DateRange {
            start: Some(
                NaiveDate::from_ymd_opt(2025, 6, 1)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap(),
            ),
            end: None,
        },
    };

    let feed = calendar_feed_url(&origin, &filters);

    assert_eq!(feed.path(), "/api/calendar-feed");

    let params: Vec<(String, String)> = feed
        .query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    assert!(params.contains(&("city".to_string(), "Stuttgart".to_string())));
    assert!(params.contains(&("categories".to_string(), "Konzert,Party".to_string())));
    assert!(params.contains(&("start".to_string(), "2025-06-01T00:00:00+00:00".to_string())));
    assert!(!params.iter().any(|(key, _)| key == "end"));
}

#[test_log::test]
fn should_only_carry_the_city_when_nothing_is_filtered() {
    let origin = Url::parse("https://ivent.app").unwrap();
    let filters = FilterState {
        city: "Stuttgart".to_string(),
        ..FilterState::default()
    };

    let feed = calendar_feed_url(&origin, &filters);

    assert_eq!(feed.query_pairs().count(), 1);
}

#[test_log::test]
fn should_reject_an_empty_newsletter_address() {
    let mut signup = Signup::default();

    let result = signup.subscribe("   ");

    assert!(matches!(result, Err(SubscribeError::EmptyEmail)));
    assert!(!signup.is_subscribed());
}

#[test_log::test]
fn should_flip_the_subscribed_flag_locally() {
    let mut signup = Signup::default();

    signup.subscribe("besucher@example.de").unwrap();

    assert!(signup.is_subscribed());
    assert_eq!(
        signup.subscription().unwrap().email,
        "besucher@example.de"
    );

    signup.unsubscribe();

    assert!(!signup.is_subscribed());
}

#[test_log::test]
fn should_describe_the_subscription_scope_in_german() {
    let unfiltered = FilterState {
        city: "Stuttgart".to_string(),
        ..FilterState::default()
    };

    assert_eq!(filter_description(&unfiltered), "alle Events in Stuttgart");

    let filtered = FilterState {
        categories: vec![Category::Konzert, Category::Party],
        ..unfiltered
    };

    assert_eq!(
        filter_description(&filtered),
        "Konzert, Party in Stuttgart"
    );
}
