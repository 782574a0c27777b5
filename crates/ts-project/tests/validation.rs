use ts_project::*;

const BASE: &str = r#"
version: 1
name: base
rotor:
  radius_m: 2.0
  rated_power_w: 100000.0
  performance:
    type: Parabolic
    cp_max: 0.45
    tsr_opt: 4.0
    ct_max: 0.9
mooring:
  attachment: cable
  cable_depth_m: 10.0
  mooring_depth_m: 40.0
control:
  strategy: optimal
  cut_in_speed_m_s: 0.5
inflow:
  type: Samples
  time_s: [0.0, 1.0, 2.0]
  speed_m_s: [2.0, 2.0, 2.0]
"#;

fn base() -> Scenario {
    from_yaml_str(BASE).expect("base scenario should validate")
}

fn invalid_field(result: Result<(), ValidationError>) -> String {
    match result {
        Err(ValidationError::InvalidValue { field, .. }) => field,
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn base_scenario_validates() {
    validate_scenario(&base()).unwrap();
}

#[test]
fn future_version_is_rejected() {
    let mut s = base();
    s.version = LATEST_VERSION + 1;
    assert_eq!(
        validate_scenario(&s),
        Err(ValidationError::UnsupportedVersion {
            version: LATEST_VERSION + 1
        })
    );
}

#[test]
fn cable_deeper_than_mooring_is_rejected() {
    let mut s = base();
    s.mooring.cable_depth_m = 41.0;
    assert_eq!(invalid_field(validate_scenario(&s)), "mooring.cable_depth_m");
}

#[test]
fn efficiency_above_one_is_rejected() {
    let mut s = base();
    s.rotor.efficiency = 1.2;
    assert_eq!(invalid_field(validate_scenario(&s)), "rotor.efficiency");
}

#[test]
fn cp_above_betz_is_rejected() {
    let mut s = base();
    s.rotor.performance = PerformanceDef::Parabolic {
        cp_max: 0.7,
        tsr_opt: 4.0,
        ct_max: 0.9,
        tsr_max: None,
    };
    assert_eq!(invalid_field(validate_scenario(&s)), "rotor.performance.cp_max");
}

#[test]
fn mismatched_samples_are_rejected() {
    let mut s = base();
    s.inflow = InflowDef::Samples {
        time_s: vec![0.0, 1.0, 2.0],
        speed_m_s: vec![2.0, 2.0],
    };
    assert_eq!(invalid_field(validate_scenario(&s)), "inflow.speed_m_s");
}

#[test]
fn non_monotonic_time_is_rejected() {
    let mut s = base();
    s.inflow = InflowDef::Samples {
        time_s: vec![0.0, 2.0, 1.0],
        speed_m_s: vec![2.0, 2.0, 2.0],
    };
    assert_eq!(invalid_field(validate_scenario(&s)), "inflow.time_s");
}

#[test]
fn negative_sample_names_its_index() {
    let mut s = base();
    s.inflow = InflowDef::Samples {
        time_s: vec![0.0, 1.0, 2.0],
        speed_m_s: vec![2.0, -1.0, 2.0],
    };
    assert_eq!(invalid_field(validate_scenario(&s)), "inflow.speed_m_s[1]");
}

#[test]
fn zero_time_step_is_rejected() {
    let mut s = base();
    s.inflow = InflowDef::Constant {
        speed_m_s: 2.0,
        duration_s: 10.0,
        time_step_s: 0.0,
    };
    assert_eq!(invalid_field(validate_scenario(&s)), "inflow.time_step_s");
}

#[test]
fn unknown_strategy_fails_to_parse() {
    let text = BASE.replace("strategy: optimal", "strategy: pitch_regulated");
    assert!(matches!(from_yaml_str(&text), Err(ProjectError::Yaml(_))));
}

#[test]
fn invalid_scenario_is_not_saved() {
    let mut s = base();
    s.rotor.radius_m = -1.0;
    let path = std::env::temp_dir().join("ts_project_invalid.yaml");
    let err = save_yaml(&path, &s).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
}
