use wf_project::schema::*;
use wf_project::{ProjectError, load_well, save_well, validate_well};

fn well() -> WellDef {
    WellDef {
        inclinometry: InclinometryDef {
            md: vec![0.0, 1000.0, 1500.0],
            tvd: vec![0.0, 1000.0, 1100.0],
        },
        casing: CasingDef { d: 0.1 },
        tubing: TubingDef {
            d: 0.062,
            h_mes: 1000.0,
        },
        pvt: PvtDef {
            wct: 50.0,
            rp: 100.0,
            gamma_oil: 0.8,
            gamma_gas: 0.7,
            gamma_wat: 1.0,
            t_res: 90.0,
        },
        p_wh: 10.0,
        geo_grad: 3.0,
        h_res: 1500.0,
    }
}

#[test]
fn roundtrip_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("well.yaml");

    save_well(&path, &well()).unwrap();
    let loaded = load_well(&path).unwrap();

    assert_eq!(well(), loaded);
}

#[test]
fn roundtrip_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("well.json");

    save_well(&path, &well()).unwrap();
    let loaded = load_well(&path).unwrap();

    assert_eq!(well(), loaded);
}

#[test]
fn json_uses_exchange_field_names() {
    let text = serde_json::to_string(&well()).unwrap();
    assert!(text.contains("\"MD\""));
    assert!(text.contains("\"TVD\""));
    assert!(text.contains("\"h_mes\""));
    assert!(text.contains("\"gamma_wat\""));
}

#[test]
fn invalid_well_is_not_saved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    let mut bad = well();
    bad.inclinometry.md = vec![0.0, 0.0, 1.0];

    let err = save_well(&path, &bad).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
    assert!(!path.exists());
    assert!(validate_well(&bad).is_err());
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("well.toml");
    let err = save_well(&path, &well()).unwrap_err();
    assert!(matches!(err, ProjectError::UnsupportedFormat { .. }));
}

#[test]
fn missing_field_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.json");
    std::fs::write(&path, r#"{"casing": {"d": 0.1}}"#).unwrap();
    assert!(matches!(load_well(&path), Err(ProjectError::Json(_))));
}
