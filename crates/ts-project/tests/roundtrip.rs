use ts_core::numeric::{Tolerances, nearly_equal};
use ts_project::*;
use ts_sim::{AttachmentMethod, ControlStrategy, simulate};

fn scenario_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../scenarios")
        .join(name)
}

fn sample_scenario() -> Scenario {
    Scenario {
        version: LATEST_VERSION,
        name: "Sampled flow".to_string(),
        environment: EnvironmentDef::default(),
        rotor: RotorDef {
            radius_m: 3.0,
            rated_power_w: 50_000.0,
            efficiency: 0.9,
            inertia_kg_m2: 2.0e5,
            performance: PerformanceDef::Parabolic {
                cp_max: 0.42,
                tsr_opt: 4.5,
                ct_max: 0.85,
                tsr_max: Some(8.0),
            },
        },
        mooring: MooringDef {
            attachment: AttachmentMethod::Cable,
            cable_depth_m: 12.0,
            mooring_depth_m: 45.0,
        },
        control: ControlDef {
            strategy: ControlStrategy::Optimal,
            cut_in_speed_m_s: 0.5,
            brake: true,
        },
        inflow: InflowDef::Samples {
            time_s: vec![0.0, 1.0, 2.0, 3.0, 4.0],
            speed_m_s: vec![1.8, 2.0, 2.2, 2.0, 1.8],
        },
    }
}

#[test]
fn yaml_roundtrip() {
    let scenario = sample_scenario();
    let path = std::env::temp_dir().join("ts_project_roundtrip.yaml");
    save_yaml(&path, &scenario).expect("save failed");
    let loaded = load_yaml(&path).expect("load failed");
    assert_eq!(scenario, loaded);
}

#[test]
fn json_roundtrip() {
    let scenario = sample_scenario();
    let path = std::env::temp_dir().join("ts_project_roundtrip.json");
    save_json(&path, &scenario).expect("save failed");
    let loaded = load_scenario(&path).expect("load failed");
    assert_eq!(scenario, loaded);
}

#[test]
fn bundled_scenarios_load_and_compile() {
    for name in ["steady_optimal.yaml", "tidal_cable_constant_speed.yaml"] {
        let scenario = load_scenario(&scenario_path(name)).expect("bundled scenario invalid");
        let config = compile_scenario(&scenario).expect("compile failed");
        assert!(config.len() >= 2);
        config.validate().expect("compiled config rejected");
    }
}

#[test]
fn defaults_fill_optional_fields() {
    let scenario = load_yaml(&scenario_path("steady_optimal.yaml")).unwrap();
    assert_eq!(scenario.environment, EnvironmentDef::default());
    assert_eq!(scenario.rotor.inertia_kg_m2, ts_sim::DEFAULT_INERTIA);
    assert!(!scenario.control.brake);
}

#[test]
fn compiled_scenario_runs() {
    let scenario = load_yaml(&scenario_path("steady_optimal.yaml")).unwrap();
    let config = compile_scenario(&scenario).unwrap();
    assert_eq!(config.len(), 601);
    assert_eq!(config.optimum.tsr_max, 8.0);
    let results = simulate(config).expect("run failed");
    let tsr = results.state.tsr();
    assert!(nearly_equal(tsr[tsr.len() - 1], 4.0, Tolerances { abs: 0.05, rel: 0.0 }));
}

#[test]
fn tsr_cap_override_is_applied() {
    let config = compile_scenario(&sample_scenario()).unwrap();
    assert_eq!(config.optimum.tsr_max, 8.0);
    assert_eq!(config.optimum.tsr_opt, 4.5);
    assert!(nearly_equal(config.optimum.cp_opt, 0.42, Tolerances::default()));
}
