use super::*;

fn row_json() -> serde_json::Value {
    serde_json::json!({
        "id": "8c1f7c9e-0000-4000-8000-000000000001",
        "x_username": "alice",
        "logo_colors": {
            "background": "#fe11c5",
            "letterI": "#000000",
            "letterN": "#111111",
            "letterC": "#222222",
            "letterO": "#333333",
            "line1": "#fff",
            "line2": "#eeeeee",
            "line3": "#dddddd"
        },
        "created_at": "2025-03-04T10:11:12.345678+00:00",
        "updated_at": "2025-03-04T10:11:12.345678+00:00"
    })
}

#[test]
fn user_logo_record_decodes_postgrest_row() {
    let record: UserLogoRecord = serde_json::from_value(row_json()).unwrap();
    assert_eq!(record.x_username, "alice");
    assert_eq!(record.logo_colors.background.as_str(), "#FE11C5");
    assert_eq!(record.logo_colors.line1.as_str(), "#FFFFFF");
    assert_eq!(record.created_label(), "Mar 4, 2025");
    assert_eq!(record.profile_url(), "https://x.com/alice");
}

#[test]
fn user_logo_record_rejects_missing_region() {
    let mut row = row_json();
    row["logo_colors"].as_object_mut().unwrap().remove("letterO");
    assert!(serde_json::from_value::<UserLogoRecord>(row).is_err());
}

#[test]
fn user_logo_record_rejects_invalid_color() {
    let mut row = row_json();
    row["logo_colors"]["line2"] = serde_json::json!("tomato");
    assert!(serde_json::from_value::<UserLogoRecord>(row).is_err());
}

#[test]
fn logo_color_set_uses_camel_case_region_keys() {
    let value = serde_json::to_value(LogoColorSet::default()).unwrap();
    let keys: Vec<&str> = LogoRegion::ALL.iter().map(|r| r.key()).collect();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), keys.len());
    for key in keys {
        assert!(object.contains_key(key), "missing {key}");
    }
}

#[test]
fn logo_color_set_get_and_set_address_the_same_region() {
    let mut colors = LogoColorSet::default();
    let red = HexColor::parse("#ff0000").unwrap();
    for region in LogoRegion::ALL {
        colors.set(region, red.clone());
        assert_eq!(colors.get(region), &red);
    }
}

#[test]
fn new_user_logo_serializes_insert_payload() {
    let payload = NewUserLogo { x_username: "bob".to_owned(), logo_colors: LogoColorSet::default() };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["x_username"], "bob");
    assert_eq!(value["logo_colors"]["line1"], "#FFFFFF");
}
