use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ServiceRequestId);

/// Appliance categories offered by the intake form.
///
/// The service stores the appliance as free text, so this enumeration is a
/// presentation-side choice list rather than a backend constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Appliance {
    Refrigerator,
    WashingMachine,
    Microwave,
    AirConditioner,
    Other,
}

impl Appliance {
    pub const ALL: [Appliance; 5] = [
        Appliance::Refrigerator,
        Appliance::WashingMachine,
        Appliance::Microwave,
        Appliance::AirConditioner,
        Appliance::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Appliance::Refrigerator => "Refrigerator",
            Appliance::WashingMachine => "Washing Machine",
            Appliance::Microwave => "Microwave",
            Appliance::AirConditioner => "Air Conditioner",
            Appliance::Other => "Other",
        }
    }
}

impl fmt::Display for Appliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown appliance '{0}'")]
pub struct UnknownAppliance(pub String);

impl FromStr for Appliance {
    type Err = UnknownAppliance;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let compact: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match compact.as_str() {
            "refrigerator" | "fridge" => Ok(Appliance::Refrigerator),
            "washingmachine" | "washer" => Ok(Appliance::WashingMachine),
            "microwave" => Ok(Appliance::Microwave),
            "airconditioner" | "ac" => Ok(Appliance::AirConditioner),
            "other" => Ok(Appliance::Other),
            _ => Err(UnknownAppliance(raw.to_string())),
        }
    }
}
