use super::*;
use crate::state::registry::Registry;

fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn hrefs_encode_names() {
    assert_eq!(vessel_href("MV Coral Bay"), "/vessels/MV%20Coral%20Bay");
    assert_eq!(materials_href(None), "/materials");
    assert_eq!(materials_href(Some("MT Ocean Pearl")), "/materials?vessel=MT%20Ocean%20Pearl");
}

#[test]
fn decode_param_handles_encoded_and_plain_values() {
    assert_eq!(decode_param("MV%20Coral%20Bay"), "MV Coral Bay");
    assert_eq!(decode_param("MV Coral Bay"), "MV Coral Bay");
    assert_eq!(decode_param("%FF"), "%FF");
}

#[test]
fn full_parameter_set_decodes() {
    let params = DeckPlanParams::from_lookup(lookup(&[
        ("plan", "/assets/plans/a.png"),
        ("section", "Engine Room"),
        ("crop", "0,450,1066,450"),
        ("vessel", "MV Northern Star"),
        ("material", "abc"),
        ("mode", "add"),
    ]));
    assert_eq!(params.plan, "/assets/plans/a.png");
    assert_eq!(params.crop, Some(Rect::new(0.0, 450.0, 1066.0, 450.0)));
    assert_eq!(params.material.as_deref(), Some("abc"));
    assert!(params.add_mode);
    assert_eq!(params.section_key(), SectionKey::new("MV Northern Star", "Engine Room"));
}

#[test]
fn missing_parameters_default() {
    let params = DeckPlanParams::from_lookup(|_| None);
    assert_eq!(params, DeckPlanParams::default());
}

#[test]
fn malformed_crop_and_other_modes_are_ignored() {
    let params = DeckPlanParams::from_lookup(lookup(&[("crop", "1,2,three,4"), ("mode", "view"), ("material", "")]));
    assert!(params.crop.is_none());
    assert!(!params.add_mode);
    assert!(params.material.is_none());
}

#[test]
fn crop_falls_back_to_section_then_full_plan() {
    let registry = Registry::mock();
    let vessel = registry.vessel("MV Northern Star");
    let sections = registry.default_sections("MV Northern Star");
    let engine_room = sections.iter().find(|s| s.name == "Engine Room").map(|s| s.crop);

    let mut params = DeckPlanParams { section: "Engine Room".to_owned(), ..DeckPlanParams::default() };
    assert_eq!(params.resolve_crop(&sections, vessel), engine_room);

    params.section = "Nowhere".to_owned();
    assert_eq!(params.resolve_crop(&sections, vessel), Some(Rect::new(0.0, 0.0, 3200.0, 900.0)));
    assert_eq!(params.resolve_crop(&sections, None), None);
}

#[test]
fn explicit_crop_wins() {
    let params = DeckPlanParams { crop: Some(Rect::new(1.0, 2.0, 3.0, 4.0)), section: "Main Deck".to_owned(), ..DeckPlanParams::default() };
    let sections = Registry::mock().default_sections("MV Northern Star");
    assert_eq!(params.resolve_crop(&sections, None), Some(Rect::new(1.0, 2.0, 3.0, 4.0)));
}

#[test]
fn plan_falls_back_to_vessel_image() {
    let registry = Registry::mock();
    let vessel = registry.vessel("MV Coral Bay");
    assert_eq!(DeckPlanParams::default().resolve_plan(vessel), "/assets/plans/coral-bay.png");
    let params = DeckPlanParams { plan: "/x.png".to_owned(), ..DeckPlanParams::default() };
    assert_eq!(params.resolve_plan(vessel), "/x.png");
}

#[test]
fn href_carries_all_set_parameters() {
    let registry = Registry::mock();
    let vessel = registry.vessel("MV Coral Bay").cloned().unwrap_or_else(|| panic!("mock vessel"));
    let section = DeckSection { name: "Main Deck".to_owned(), crop: Rect::new(0.0, 0.0, 2400.0, 350.0) };
    let href = DeckPlanParams::for_section(&vessel, &section).with_material("m-1").with_add_mode().href();
    assert_eq!(
        href,
        "/deck-plan?plan=%2Fassets%2Fplans%2Fcoral-bay.png&section=Main%20Deck&crop=0%2C0%2C2400%2C350\
         &vessel=MV%20Coral%20Bay&material=m-1&mode=add"
    );
}

#[test]
fn href_omits_unset_optionals() {
    let params = DeckPlanParams { section: "A".to_owned(), vessel: "B".to_owned(), ..DeckPlanParams::default() };
    assert_eq!(params.href(), "/deck-plan?plan=&section=A&vessel=B");
}

/// Splits an href's query the way the router does: one percent-decode per value.
fn router_query(href: &str) -> Vec<(String, String)> {
    let query = href.split_once('?').map_or("", |(_, q)| q);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| (k.to_owned(), urlencoding::decode(v).unwrap().into_owned()))
        .collect()
}

#[test]
fn names_with_percent_signs_survive_navigation() {
    let original = DeckPlanParams {
        plan: "/assets/plans/a.png".to_owned(),
        section: "Tank %41".to_owned(),
        crop: None,
        vessel: "MV 100%".to_owned(),
        material: None,
        add_mode: false,
    };
    let pairs = router_query(&original.href());
    let params = DeckPlanParams::from_lookup(|key| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone()));
    assert_eq!(params.section, "Tank %41");
    assert_eq!(params.vessel, "MV 100%");
    assert_eq!(params.section_key().storage_key(), "inventory_MV 100%_Tank %41");
}
