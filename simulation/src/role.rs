use crate::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Role {
    Duelist,
    Initiator,
    Controller,
    Sentinel,
    Flex,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Duelist => "Duelist",
            Self::Initiator => "Initiator",
            Self::Controller => "Controller",
            Self::Sentinel => "Sentinel",
            Self::Flex => "Flex",
        }
    }

    pub fn profile(&self) -> &'static RoleProfile {
        ROLE_PROFILES
            .get(self.as_str())
            .unwrap_or(&FALLBACK_PROFILE)
    }
}

impl std::str::FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Duelist" => Ok(Self::Duelist),
            "Initiator" => Ok(Self::Initiator),
            "Controller" => Ok(Self::Controller),
            "Sentinel" => Ok(Self::Sentinel),
            "Flex" => Ok(Self::Flex),
            other => Err(ValidationError::UnknownRole(other.to_owned())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for &'static str {
    fn from(value: Role) -> Self {
        value.as_str()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-role data consulted by the duel initiator draw and by ability pricing.
#[derive(Debug, PartialEq)]
pub struct RoleProfile {
    pub attack_weight: u32,
    pub defense_weight: u32,
    pub ability_cost: u32,
}

impl RoleProfile {
    pub fn duel_weight(&self, side: crate::Side) -> u32 {
        match side {
            crate::Side::Attack => self.attack_weight,
            crate::Side::Defense => self.defense_weight,
        }
    }
}

pub static FALLBACK_PROFILE: RoleProfile = RoleProfile {
    attack_weight: 10,
    defense_weight: 10,
    ability_cost: 500,
};

pub static ROLE_PROFILES: phf::Map<&'static str, RoleProfile> = phf::phf_map! {
    "Duelist" => RoleProfile { attack_weight: 35, defense_weight: 20, ability_cost: 600 },
    "Initiator" => RoleProfile { attack_weight: 25, defense_weight: 22, ability_cost: 700 },
    "Flex" => RoleProfile { attack_weight: 20, defense_weight: 20, ability_cost: 500 },
    "Controller" => RoleProfile { attack_weight: 12, defense_weight: 18, ability_cost: 500 },
    "Sentinel" => RoleProfile { attack_weight: 8, defense_weight: 20, ability_cost: 400 },
};
