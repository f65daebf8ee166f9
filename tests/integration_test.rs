//! Integration tests for zone-subnet-plan
//!
//! These tests verify the complete workflow from reading a config to the
//! verified zone layout.

use zone_subnet_plan::{
    build_plan,
    config::{read_config_file, OutputFormat},
    models::Network,
    output::{format_row, plan_to_json},
    processing::{partition, partition_cidr, verify_plan},
    NetworkError,
};

#[test]
fn test_full_workflow_from_config_file() {
    let config = read_config_file("src/tests/test_data/plan_config_01.json")
        .expect("Failed to read config");
    assert_eq!(config.output, OutputFormat::Csv);

    let (base, layout) = build_plan(&config).expect("Failed to build plan");
    assert_eq!(base.to_string(), "10.0.0.0/16");

    let zones: Vec<&str> = layout.iter().map(|z| z.zone.as_str()).collect();
    assert_eq!(zones, vec!["eu-west-1a", "eu-west-1b", "eu-west-1c"]);

    let blocks: Vec<String> = layout.iter().map(|z| z.zone_block.to_string()).collect();
    assert_eq!(blocks, vec!["10.0.0.0/18", "10.0.64.0/18", "10.0.128.0/18"]);

    for zone in &layout {
        assert_eq!(zone.private.mask, 19);
        assert_eq!(zone.public.mask, 21);
    }

    let row = format_row(2, &layout[2]);
    assert!(row.contains("\"eu-west-1c\""));
    assert!(row.contains("\"10.0.160.0/21\""));

    let json = plan_to_json(&base, &layout).expect("Failed to render JSON");
    assert!(json.contains("\"base_cidr\": \"10.0.0.0/16\""));
}

#[test]
fn test_config_too_small_for_public_split() {
    let config = read_config_file("src/tests/test_data/plan_config_02.json")
        .expect("Failed to read config");
    assert_eq!(config.output, OutputFormat::Csv);

    let err = build_plan(&config).unwrap_err();
    assert_eq!(
        err.downcast_ref::<NetworkError>(),
        Some(&NetworkError::InsufficientAddressSpace {
            requested: 2,
            available: 1
        })
    );
}

#[test]
fn test_config_duplicate_zone_rejected() {
    let config = read_config_file("src/tests/test_data/plan_config_03.json")
        .expect("Failed to read config");
    assert_eq!(config.output, OutputFormat::Json);

    let err = build_plan(&config).unwrap_err();
    assert_eq!(err.to_string(), "Duplicate zone: us-east-1a");
}

#[test]
fn test_missing_config_file() {
    let err = read_config_file("src/tests/test_data/does_not_exist.json").unwrap_err();
    assert!(err.to_string().starts_with("Error reading config file"));
}

#[test]
fn test_invalid_base_fails_before_splitting() {
    assert_eq!(
        partition_cidr("not-an-ip/16", 3),
        Err(NetworkError::InvalidNetwork {
            cidr: "not-an-ip/16".to_string()
        })
    );
}

#[test]
fn test_plans_are_disjoint_and_contained() {
    for (base, max_zones) in [("10.0.0.0/16", 40), ("192.168.10.0/24", 32), ("0.0.0.0/0", 20)] {
        let base = Network::new(base).unwrap();
        for zone_count in 0..=max_zones {
            let plan = partition(&base, zone_count).expect("Failed to partition");
            assert_eq!(plan.len(), zone_count as usize);
            verify_plan(&base, &plan).expect("Plan failed verification");
            assert_eq!(plan, partition(&base, zone_count).unwrap());
        }
    }
}
