use std::fmt;

use serde::{Deserialize, Serialize};

/// Who a registered user acts as inside a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserRole {
    #[serde(rename = "cliente")]
    Client,
    #[serde(rename = "repartidor")]
    Courier,
}

impl UserRole {
    pub const ALL: [UserRole; 2] = [UserRole::Client, UserRole::Courier];

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Client => "cliente",
            UserRole::Courier => "repartidor",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of neighborhoods served. Serialized as the display name.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Neighborhood {
    #[serde(rename = "El Raval")]
    ElRaval,
    #[serde(rename = "Gràcia")]
    Gracia,
    #[serde(rename = "Sants")]
    Sants,
    #[serde(rename = "Poble Sec")]
    PobleSec,
    #[serde(rename = "Eixample")]
    Eixample,
    #[serde(rename = "Sant Andreu")]
    SantAndreu,
}

impl Neighborhood {
    pub const ALL: [Neighborhood; 6] = [
        Neighborhood::ElRaval,
        Neighborhood::Gracia,
        Neighborhood::Sants,
        Neighborhood::PobleSec,
        Neighborhood::Eixample,
        Neighborhood::SantAndreu,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Neighborhood::ElRaval => "El Raval",
            Neighborhood::Gracia => "Gràcia",
            Neighborhood::Sants => "Sants",
            Neighborhood::PobleSec => "Poble Sec",
            Neighborhood::Eixample => "Eixample",
            Neighborhood::SantAndreu => "Sant Andreu",
        }
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Registered user. Never updated once created.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct User {
    pub id: String,                  // U-XXXX, not guaranteed unique
    pub name: String,                // display name, also the ownership key
    pub phone: String,               // 9 digits
    pub neighborhood: Neighborhood,
    pub role: UserRole,
}

/// Registration form contents before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub phone: String,
    pub neighborhood: Neighborhood,
    pub role: UserRole,
}
