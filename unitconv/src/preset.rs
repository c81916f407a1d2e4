/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{Conversion, Registry, RegistryBuilder};

const MILE_KM: f64 = 1.609343502101154;
const Z_TO_J: f64 = 0.64197530864;

lazy_static::lazy_static! {
    static ref AREA: Registry = area_registry();
    static ref DEMO: Registry = demo_registry();
}

/// Compiled-in variants of the conversion table.
#[derive(
    Serialize,
    Deserialize,
    clap::ValueEnum,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
    Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Temperature, length and area units.
    #[default]
    Area,
    /// Temperature and length units plus the "Z" and "J" demo units.
    Demo,
}

impl Preset {
    pub const LIST: &'static [Self] = &[Preset::Area, Preset::Demo];

    pub fn registry(&self) -> &'static Registry {
        match self {
            Preset::Area => &AREA,
            Preset::Demo => &DEMO,
        }
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Preset::Area => write!(f, "area"),
            Preset::Demo => write!(f, "demo"),
        }
    }
}

fn common_units() -> RegistryBuilder {
    Registry::builder()
        .unit("f", "Fahrenheit")
        .unit("c", "Celsius")
        .unit("km", "Kilometers")
        .unit("mi", "Miles")
        .unit("m", "Meters")
        .conversion("f", "c", Conversion::affine(-32.0, 5.0 / 9.0, 0.0))
        .conversion("f", "k", Conversion::affine(-32.0, 5.0 / 9.0, -273.15))
        .conversion("c", "f", Conversion::affine(0.0, 9.0 / 5.0, 32.0))
        .conversion("c", "k", Conversion::offset(273.15))
        .scales("km", &[("mi", 0.621371), ("m", 1000.0)])
        .scales("mi", &[("km", MILE_KM), ("m", MILE_KM * 1000.0)])
}

fn area_registry() -> Registry {
    common_units()
        .unit("skm", "Square Kilometers")
        .unit("smi", "Square Miles")
        .unit("sm", "Square Meters")
        .unit("sy", "Square Yards")
        .unit("sf", "Square Feet")
        .unit("h", "Hectares")
        .unit("a", "Acres")
        .scales(
            "skm",
            &[
                ("smi", 0.386102),
                ("sm", 1e6),
                ("sy", 1.196e6),
                ("sf", 1.076e7),
                ("h", 100.0),
                ("a", 247.105),
            ],
        )
        .scales(
            "smi",
            &[
                ("skm", 2.58999),
                ("sm", 2589990.001027),
                ("sy", 3.098e6),
                ("sf", 2.788e7),
                ("h", 259.0),
                ("a", 640.0),
            ],
        )
        .scales(
            "sm",
            &[
                ("skm", 1e-6),
                ("smi", 3.861e-7),
                ("sy", 1.196),
                ("sf", 10.7639),
                ("h", 1e-4),
                ("a", 0.000247105),
            ],
        )
        .scales(
            "sy",
            &[
                ("skm", 8.3613e-7),
                ("smi", 3.2283e-7),
                ("sm", 0.8361300021625),
                ("sf", 9.0),
                ("h", 8.3613e-5),
                ("a", 0.000206612),
            ],
        )
        .scales(
            "sf",
            &[
                ("skm", 9.2903e-8),
                ("smi", 3.587e-8),
                ("sm", 0.092903),
                ("sy", 0.111111),
                ("h", 9.2903e-6),
                ("a", 2.2957e-5),
            ],
        )
        .scales(
            "h",
            &[
                ("skm", 0.01),
                ("smi", 0.00386102),
                ("sm", 10000.0),
                ("sy", 11959.9),
                ("sf", 107639.0),
                ("a", 2.47105),
            ],
        )
        .scales(
            "a",
            &[
                ("skm", 0.00404686),
                ("smi", 0.0015625),
                ("sm", 4046.86),
                ("sy", 4840.0),
                ("sf", 43560.0),
                ("h", 0.404686),
            ],
        )
        .build()
}

fn demo_registry() -> Registry {
    common_units()
        .unit("Z", "Zeds")
        .unit("J", "Jays")
        .conversion("Z", "J", Conversion::scale(Z_TO_J))
        .conversion("J", "Z", Conversion::divide(Z_TO_J))
        .build()
}
