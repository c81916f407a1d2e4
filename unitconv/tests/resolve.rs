/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use approx::assert_relative_eq;
use unitconv::{Conversion, Preset, Registry};

const AREA_UNITS: [&str; 7] = ["skm", "smi", "sm", "sy", "sf", "h", "a"];

fn convert(from: &str, to: &str, value: f64) -> f64 {
    Preset::Area
        .registry()
        .convert(value, from, to)
        .unwrap_or_else(|| panic!("missing conversion {} -> {}", from, to))
}

#[test]
fn identity_for_every_unit() {
    for preset in Preset::LIST {
        let registry = preset.registry();
        for (code, _) in registry.units() {
            assert_eq!(registry.resolve(code, code), Some(Conversion::Identity));
            for v in [0.0, 1.0, -40.0, 98.6, 1e12] {
                assert_eq!(registry.convert(v, code, code), Some(v));
            }
        }
    }
}

#[test]
fn temperature() {
    assert_relative_eq!(convert("f", "c", 98.6), 37.0, max_relative = 1e-6);
    assert_relative_eq!(convert("f", "c", -40.0), -40.0, max_relative = 1e-6);
    assert_relative_eq!(
        convert("f", "k", 212.0),
        100.0 - 273.15,
        max_relative = 1e-6
    );
    assert_relative_eq!(convert("c", "f", 100.0), 212.0, max_relative = 1e-6);
    assert_relative_eq!(convert("c", "k", 0.0), 273.15, max_relative = 1e-6);
}

#[test]
fn length() {
    assert_relative_eq!(convert("km", "mi", 100.0), 62.1371, max_relative = 1e-6);
    assert_relative_eq!(convert("km", "m", 2.5), 2500.0, max_relative = 1e-6);
    assert_relative_eq!(
        convert("mi", "km", 1.0),
        1.609343502101154,
        max_relative = 1e-6
    );
    assert_relative_eq!(
        convert("mi", "m", 2.0),
        3218.687004202308,
        max_relative = 1e-6
    );
}

#[test]
fn area_table_is_complete() {
    let registry = Preset::Area.registry();
    for from in AREA_UNITS {
        for to in AREA_UNITS {
            assert!(
                registry.resolve(from, to).is_some(),
                "missing {} -> {}",
                from,
                to
            );
        }
    }
}

#[test]
fn area_constants_are_authored_per_pair() {
    assert_relative_eq!(convert("skm", "a", 1.0), 247.105, max_relative = 1e-6);
    assert_relative_eq!(convert("a", "skm", 1.0), 0.00404686, max_relative = 1e-6);
    assert_relative_eq!(convert("smi", "a", 2.0), 1280.0, max_relative = 1e-6);
    assert_relative_eq!(convert("sy", "sf", 3.0), 27.0, max_relative = 1e-6);
    // Not the exact inverse of sy -> sf.
    assert_eq!(convert("sf", "sy", 1.0), 0.111111);
    assert_relative_eq!(
        convert("smi", "sm", 1.0),
        2589990.001027,
        max_relative = 1e-6
    );
    assert_relative_eq!(convert("h", "sf", 1.0), 107639.0, max_relative = 1e-6);
}

#[test]
fn demo_units() {
    let registry = Preset::Demo.registry();
    let j = registry.convert(10.0, "Z", "J").unwrap();
    assert_relative_eq!(j, 6.4197530864, max_relative = 1e-6);
    let z = registry.convert(j, "J", "Z").unwrap();
    assert_relative_eq!(z, 10.0, max_relative = 1e-9);
    assert_eq!(registry.resolve("skm", "sm"), None);
    assert!(!registry.contains_unit("a"));
}

#[test]
fn missing_pairs() {
    let registry = Preset::Area.registry();
    assert_eq!(registry.resolve("f", "skm"), None);
    assert_eq!(registry.resolve("nope", "c"), None);
    assert_eq!(registry.resolve("c", "nope"), None);
    // "k" is only a target.
    assert!(registry.resolve("f", "k").is_some());
    assert_eq!(registry.resolve("k", "f"), None);
    assert_eq!(registry.resolve("k", "k"), None);
    // No transitive resolution: m -> km does not exist.
    assert!(registry.resolve("km", "m").is_some());
    assert_eq!(registry.resolve("m", "km"), None);
    assert_eq!(registry.resolve("m", "mi"), None);
}

#[test]
fn exact_match_only() {
    let registry = Preset::Area.registry();
    assert_eq!(registry.resolve("F", "C"), None);
    assert_eq!(registry.resolve("km ", "mi"), None);
    assert_eq!(Preset::Demo.registry().resolve("z", "j"), None);
}

#[test]
fn pathological_inputs() {
    let registry = Preset::Area.registry();
    assert!(registry.convert(f64::NAN, "f", "c").unwrap().is_nan());
    assert_eq!(
        registry.convert(f64::INFINITY, "km", "mi"),
        Some(f64::INFINITY)
    );
}

#[test]
fn builder_extends_table() {
    let registry = Registry::builder()
        .unit("in", "Inches")
        .unit("cm", "Centimeters")
        .conversion("in", "cm", Conversion::scale(2.54))
        .conversion("cm", "in", Conversion::divide(2.54))
        .conversion("in", "mm", Conversion::scale(25.4))
        .build();

    assert_relative_eq!(
        registry.convert(10.0, "in", "cm").unwrap(),
        25.4,
        max_relative = 1e-9
    );
    assert_relative_eq!(
        registry.convert(5.08, "cm", "in").unwrap(),
        2.0,
        max_relative = 1e-9
    );
    assert_eq!(registry.convert(3.0, "cm", "cm"), Some(3.0));
    assert!(registry.resolve("in", "mm").is_some());
    assert_eq!(registry.unit_name("mm"), "");
    assert!(!registry.contains_unit("mm"));
}

#[test]
fn conversion_apply() {
    assert_eq!(Conversion::Identity.apply(4.2), 4.2);
    assert_eq!(Conversion::scale(3.0).apply(2.0), 6.0);
    assert_eq!(Conversion::divide(4.0).apply(2.0), 0.5);
    assert_eq!(Conversion::offset(1.5).apply(2.0), 3.5);
    assert_eq!(Conversion::affine(-1.0, 2.0, 3.0).apply(4.0), 9.0);
}
