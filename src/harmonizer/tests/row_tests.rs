//! Row-level derivation tests: names, types, numerics, age, country and
//! string normalization flowing through a whole file.

use super::{default_harmonizer, write_fixture};
use crate::config::{CountryRule, IntegrationConfig, TypeRule};
use crate::harmonizer::Harmonizer;
use crate::models::ShipType;
use tempfile::TempDir;

#[test]
fn test_owner_name_fallback() {
    let temp_dir = TempDir::new().unwrap();
    let content = "\
IMO#,NAME,BENEFICIAL OWNER
9000001,,ABC Shipping
9000002,Unknown,XYZ Maritime
9000003,nan,
9000004,Delta,Ignored Owner
";
    let path = write_fixture(&temp_dir, "list_2019.csv", content);

    let records = default_harmonizer().harmonize_file(&path).unwrap().records;

    assert_eq!(records[0].name, "ABC Shipping");
    assert_eq!(records[1].name, "XYZ Maritime");
    assert_eq!(records[2].name, "Unknown");
    assert_eq!(records[3].name, "Delta");
}

#[test]
fn test_types_classified_in_rule_order() {
    let temp_dir = TempDir::new().unwrap();
    let content = "\
IMO#,TYPE
9000001,Crude Oil Tanker
9000002,Tanker / Supply
9000003,General Cargo
9000004,
";
    let path = write_fixture(&temp_dir, "list_2019.csv", content);

    let types: Vec<ShipType> = default_harmonizer()
        .harmonize_file(&path)
        .unwrap()
        .records
        .iter()
        .map(|r| r.ship_type)
        .collect();

    assert_eq!(
        types,
        vec![ShipType::Tanker, ShipType::Tanker, ShipType::Other, ShipType::Other]
    );
}

#[test]
fn test_numeric_coercion_and_age() {
    let temp_dir = TempDir::new().unwrap();
    let content = "\
IMO#,GT,LDT,BUILT,AGE
9000001,15000,5200.5,1990,3
IMO-123,n/a,heavy,unknown,40
9000003.0, 800 ,,1985.0,
";
    let path = write_fixture(&temp_dir, "list_2020.csv", content);

    let records = default_harmonizer().harmonize_file(&path).unwrap().records;

    assert_eq!(records[0].imo, Some(9000001));
    assert_eq!(records[0].gt, Some(15000.0));
    assert_eq!(records[0].ldt, Some(5200.5));
    assert_eq!(records[0].built, Some(1990));
    // Source AGE is ignored
    assert_eq!(records[0].age, Some(30));

    assert_eq!(records[1].imo, None);
    assert_eq!(records[1].gt, None);
    assert_eq!(records[1].ldt, None);
    assert_eq!(records[1].built, None);
    assert_eq!(records[1].age, None);

    assert_eq!(records[2].imo, Some(9000003));
    assert_eq!(records[2].gt, Some(800.0));
    assert_eq!(records[2].built, Some(1985));
    assert_eq!(records[2].age, Some(35));
}

#[test]
fn test_country_imputed_only_when_missing() {
    let temp_dir = TempDir::new().unwrap();
    let content = "\
IMO#,PLACE,COUNTRY
9000001,\"Alang, India\",
9000002,Alang,China
9000003,Gadani Beach,
9000004,,
9000005,Ghent,
";
    let path = write_fixture(&temp_dir, "list_2020.csv", content);

    let records = default_harmonizer().harmonize_file(&path).unwrap().records;

    assert_eq!(records[0].country, "India");
    assert_eq!(records[1].country, "China");
    assert_eq!(records[2].country, "Pakistan");
    assert_eq!(records[3].country, "Unknown");
    assert_eq!(records[3].place, "Unknown");
    assert_eq!(records[4].country, "Unknown");
}

#[test]
fn test_string_fields_trimmed_and_never_empty() {
    let temp_dir = TempDir::new().unwrap();
    let content = "IMO#,NAME,FLAG,PLACE,COUNTRY\n9000001,  Alpha  , Panama ,  ,  Bangladesh \n";
    let path = write_fixture(&temp_dir, "list_2020.csv", content);

    let record = default_harmonizer()
        .harmonize_file(&path)
        .unwrap()
        .records
        .remove(0);

    assert_eq!(record.name, "Alpha");
    assert_eq!(record.last_flag, "Panama");
    assert_eq!(record.place, "Unknown");
    assert_eq!(record.country, "Bangladesh");
}

#[test]
fn test_substituted_country_table() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "list_2020.csv", "IMO#,PLACE\n9000001,Jiangyin\n");

    let config = IntegrationConfig::default().with_country_rules(vec![CountryRule {
        country: "China".to_string(),
        keywords: vec!["Jiangyin".to_string()],
    }]);
    let harmonizer = Harmonizer::new(&config).unwrap();

    let records = harmonizer.harmonize_file(&path).unwrap().records;
    assert_eq!(records[0].country, "China");
}

#[test]
fn test_substituted_synonym_table() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_fixture(&temp_dir, "list_2020.csv", "Ship ID,Ship\n9000001,Alpha\n");

    let config = IntegrationConfig::default()
        .with_synonym("Ship ID", "IMO")
        .with_synonym("Ship", "NAME");
    let harmonizer = Harmonizer::new(&config).unwrap();

    let records = harmonizer.harmonize_file(&path).unwrap().records;
    assert_eq!(records[0].imo, Some(9000001));
    assert_eq!(records[0].name, "Alpha");
}

#[test]
fn test_extreme_built_year_does_not_abort_file() {
    let temp_dir = TempDir::new().unwrap();
    let content = "IMO#,BUILT\n9000001,-2147483000\n9000002,1990\n";
    let path = write_fixture(&temp_dir, "list_2019.csv", content);

    let records = default_harmonizer().harmonize_file(&path).unwrap().records;

    assert_eq!(records[0].built, Some(-2147483000));
    assert_eq!(records[0].age, None);
    assert_eq!(records[1].age, Some(29));
}

#[test]
fn test_substituted_type_rules() {
    let temp_dir = TempDir::new().unwrap();
    let content = "IMO#,TYPE\n9000001,Tanker / Supply\n9000002,Crude Oil Tanker\n";
    let path = write_fixture(&temp_dir, "list_2019.csv", content);

    let config = IntegrationConfig::default().with_type_rules(vec![TypeRule {
        label: ShipType::OffshoreSupplyVessel,
        keywords: vec!["supply".to_string()],
    }]);
    let harmonizer = Harmonizer::new(&config).unwrap();

    let records = harmonizer.harmonize_file(&path).unwrap().records;
    assert_eq!(records[0].ship_type, ShipType::OffshoreSupplyVessel);
    assert_eq!(records[1].ship_type, ShipType::Other);
}

#[test]
fn test_substituted_header_keywords() {
    let temp_dir = TempDir::new().unwrap();
    let content = "Scrapped vessels\nShip ref,NAME\n9000001,Alpha\n";
    let path = write_fixture(&temp_dir, "list_2019.csv", content);

    let config = IntegrationConfig::default()
        .with_header_keywords(vec!["Ship ref".to_string()])
        .with_synonym("Ship ref", "IMO");
    let harmonizer = Harmonizer::new(&config).unwrap();

    let records = harmonizer.harmonize_file(&path).unwrap().records;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].imo, Some(9000001));
    assert_eq!(records[0].name, "Alpha");
}
