//! Dataset loading from JSON and scraper CSV.

use herowars_lib::data;
use herowars_lib::error::LoadError;
use herowars_lib::model::Value;

const SCRAPER_CSV: &str = "\
name;image;role;attackType;power;intelligence;agility;health;armor;strength;magic_attack;physical_attack;magic_defense;armor_penetration;dodge;critical_hit_chance
Astaroth;astaroth.png;Tank;Physical;28611;608;2017;401277;4064;1093;1681;23559;4584;5991;9548;950
Celeste;celeste.png;Healer;Magic;31,204;3920;877;120455;2048;650;30112;1200;8800;;120;3400
";

#[test]
fn test_scraper_csv() {
    let records = data::from_scraper_csv(SCRAPER_CSV).unwrap();
    assert_eq!(records.len(), 2);

    let celeste = &records[1];
    assert_eq!(celeste.get_string("Hero").unwrap(), Some("Celeste"));
    assert_eq!(celeste.get_string("Image").unwrap(), Some("celeste.png"));
    assert_eq!(celeste.get_int("Power").unwrap(), Some(31_204));
    assert_eq!(celeste.value("ArmorPenetration"), &Value::Null);
    assert_eq!(celeste.get_int("CriticalHitChance").unwrap(), Some(3400));
}

#[test]
fn test_scraper_csv_without_header() {
    let body = SCRAPER_CSV.lines().skip(1).collect::<Vec<_>>().join("\n");
    let records = data::from_scraper_csv(&body).unwrap();
    assert_eq!(records.len(), 2);
}

#[test]
fn test_scraper_csv_with_byte_order_mark() {
    let input = format!("\u{feff}{}", SCRAPER_CSV);
    let records = data::from_scraper_csv(&input).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].get_string("Hero").unwrap(), Some("Astaroth"));
}

#[test]
fn test_scraper_csv_field_count() {
    let err = data::from_scraper_csv("Jet;jet.png;Mage\n").unwrap_err();
    assert!(matches!(
        err,
        LoadError::FieldCount {
            line: 1,
            expected: 16,
            found: 3
        }
    ));
}

#[test]
fn test_scraper_csv_invalid_number() {
    let line = "Jet;jet.png;Mage;Magic;lots;1;1;1;1;1;1;1;1;1;1;1\n";
    let err = data::from_scraper_csv(line).unwrap_err();
    assert_eq!(
        err.to_string(),
        "line 1: column 'Power' is not a number: 'lots'"
    );
}

#[test]
fn test_json_reader() {
    let json = br#"[{"Hero": "Lian", "Power": 22000, "Dodge": ""}]"#;
    let records = data::from_json_reader(&json[..]).unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].value("Dodge").is_null());
}

#[test]
fn test_json_rejects_non_array() {
    let err = data::from_json_str(r#"{"Hero": "Lian"}"#).unwrap_err();
    assert!(matches!(err, LoadError::Json(_)));
}
