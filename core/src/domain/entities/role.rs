//! Platform roles attached to a user.

use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde::ser::{Serialize, Serializer};

/// Role held by a platform user.
///
/// Roles are persisted and transmitted by their numeric id; the id values
/// are part of the wire format of signed tokens and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Grower = 1,
    HeadGrower = 2,
    Director = 3,
    Owner = 4,
    Maintenance = 5,
    Manager = 6,
    Admin = 7,
    FacilityManager = 8,
    FarmManager = 9,
    Integrator = 10,
    SoftwareDev = 11,
    Greenhouse = 12,
    MaintenanceSupervisor = 13,
}

impl Role {
    /// All defined roles, in id order.
    pub const ALL: [Role; 13] = [
        Role::Grower,
        Role::HeadGrower,
        Role::Director,
        Role::Owner,
        Role::Maintenance,
        Role::Manager,
        Role::Admin,
        Role::FacilityManager,
        Role::FarmManager,
        Role::Integrator,
        Role::SoftwareDev,
        Role::Greenhouse,
        Role::MaintenanceSupervisor,
    ];

    /// Numeric id of the role as stored in the database and token claims
    pub fn id(self) -> i64 {
        self as i64
    }

    /// Resolve a numeric id back to a role, if defined
    pub fn from_id(id: i64) -> Option<Role> {
        match id {
            1 => Some(Role::Grower),
            2 => Some(Role::HeadGrower),
            3 => Some(Role::Director),
            4 => Some(Role::Owner),
            5 => Some(Role::Maintenance),
            6 => Some(Role::Manager),
            7 => Some(Role::Admin),
            8 => Some(Role::FacilityManager),
            9 => Some(Role::FarmManager),
            10 => Some(Role::Integrator),
            11 => Some(Role::SoftwareDev),
            12 => Some(Role::Greenhouse),
            13 => Some(Role::MaintenanceSupervisor),
            _ => None,
        }
    }

    /// Canonical role name
    pub fn name(self) -> &'static str {
        match self {
            Role::Grower => "GROWER",
            Role::HeadGrower => "HEAD_GROWER",
            Role::Director => "DIRECTOR",
            Role::Owner => "OWNER",
            Role::Maintenance => "MAINTENANCE",
            Role::Manager => "MANAGER",
            Role::Admin => "ADMIN",
            Role::FacilityManager => "FACILITY_MANAGER",
            Role::FarmManager => "FARM_MANAGER",
            Role::Integrator => "INTEGRATOR",
            Role::SoftwareDev => "SOFTWARE_DEV",
            Role::Greenhouse => "GREENHOUSE",
            Role::MaintenanceSupervisor => "MAINTENANCE_SUPERVISOR",
        }
    }
}

// Roles travel as bare numeric ids inside token claims
impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.id())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = i64::deserialize(deserializer)?;
        Role::from_id(id).ok_or_else(|| D::Error::custom(format!("unknown role id: {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_id_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_id(role.id()), Some(role));
        }
    }

    #[test]
    fn test_known_ids() {
        assert_eq!(Role::Admin.id(), 7);
        assert_eq!(Role::SoftwareDev.id(), 11);
        assert_eq!(Role::from_id(13), Some(Role::MaintenanceSupervisor));
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(Role::from_id(0), None);
        assert_eq!(Role::from_id(14), None);
        assert_eq!(Role::from_id(-1), None);
    }

    #[test]
    fn test_role_serializes_as_number() {
        let json = serde_json::to_string(&vec![Role::Admin, Role::Grower]).unwrap();
        assert_eq!(json, "[7,1]");

        let roles: Vec<Role> = serde_json::from_str("[11,12]").unwrap();
        assert_eq!(roles, vec![Role::SoftwareDev, Role::Greenhouse]);
    }

    #[test]
    fn test_unknown_role_id_fails_deserialization() {
        let result: Result<Vec<Role>, _> = serde_json::from_str("[99]");
        assert!(result.is_err());
    }
}
