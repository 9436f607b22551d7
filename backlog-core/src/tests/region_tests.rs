use super::*;

#[test]
fn codes_round_trip() {
    for &region in Region::all() {
        assert_eq!(Region::from_code(region.code()), Some(region));
    }
}

#[test]
fn codes_cover_one_through_eleven() {
    let mut codes: Vec<u32> = Region::all().iter().map(|r| r.code()).collect();
    codes.sort_unstable();
    assert_eq!(codes, (1..=11).collect::<Vec<_>>());
}

#[test]
fn labels_match_catalog_names() {
    let cases = [
        (1, "Europe"),
        (2, "North America"),
        (3, "Australia"),
        (4, "New Zealand"),
        (5, "Japan"),
        (6, "China"),
        (7, "Asia"),
        (8, "Worldwide"),
        (9, "Korea"),
        (10, "Brazil"),
        (11, "Other"),
    ];
    for (code, label) in cases {
        assert_eq!(Region::label_for_code(Some(code)), label, "code {}", code);
    }
}

#[test]
fn unrecognized_code_is_unknown() {
    assert_eq!(Region::from_code(0), None);
    assert_eq!(Region::from_code(12), None);
    assert_eq!(Region::label_for_code(Some(42)), "Unknown");
    assert_eq!(Region::label_for_code(None), "Unknown");
}

#[test]
fn preference_order_starts_worldwide_and_ends_other() {
    assert_eq!(REGION_PREFERENCE[0], Region::Worldwide);
    assert_eq!(REGION_PREFERENCE[1], Region::NorthAmerica);
    assert_eq!(REGION_PREFERENCE[2], Region::Europe);
    assert_eq!(REGION_PREFERENCE[10], Region::Other);
}

#[test]
fn preference_order_lists_every_region_once() {
    let mut seen = std::collections::HashSet::new();
    for region in REGION_PREFERENCE.iter() {
        assert!(seen.insert(*region), "{:?} listed twice", region);
    }
    assert_eq!(seen.len(), Region::all().len());
}

#[test]
fn parse_accepts_code_or_label() {
    assert_eq!("2".parse::<Region>(), Ok(Region::NorthAmerica));
    assert_eq!(" 8 ".parse::<Region>(), Ok(Region::Worldwide));
    assert_eq!("north america".parse::<Region>(), Ok(Region::NorthAmerica));
    assert_eq!("Japan".parse::<Region>(), Ok(Region::Japan));
}

#[test]
fn parse_rejects_unknown_values() {
    assert!("0".parse::<Region>().is_err());
    assert!("Atlantis".parse::<Region>().is_err());
    assert!("".parse::<Region>().is_err());
}
