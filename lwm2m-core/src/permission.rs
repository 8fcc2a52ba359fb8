//! Resource permission set
//!
//! Permissions are written in the compact letter form used by emulator
//! object definitions: `"R"`, `"RW"`, `"RWD"` and so on. The empty string
//! grants nothing.

use crate::error::{Lwm2mError, Lwm2mResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single operation a resource may permit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    Read,
    Write,
    Delete,
}

impl Permission {
    fn bit(self) -> u8 {
        match self {
            Permission::Read => 0b001,
            Permission::Write => 0b010,
            Permission::Delete => 0b100,
        }
    }

    /// Letter used in the compact string form
    pub fn letter(self) -> char {
        match self {
            Permission::Read => 'R',
            Permission::Write => 'W',
            Permission::Delete => 'D',
        }
    }

    /// Parse a single permission letter
    pub fn from_letter(letter: char) -> Lwm2mResult<Self> {
        match letter {
            'R' => Ok(Permission::Read),
            'W' => Ok(Permission::Write),
            'D' => Ok(Permission::Delete),
            _ => Err(Lwm2mError::InvalidData(format!(
                "Unknown permission letter: {:?}",
                letter
            ))),
        }
    }
}

/// Set of permissions granted to a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Permissions {
    bits: u8,
}

impl Permissions {
    pub const READ: Permissions = Permissions { bits: 0b001 };
    pub const WRITE: Permissions = Permissions { bits: 0b010 };
    pub const DELETE: Permissions = Permissions { bits: 0b100 };
    pub const READ_WRITE: Permissions = Permissions { bits: 0b011 };

    const ORDER: [Permission; 3] = [Permission::Read, Permission::Write, Permission::Delete];

    /// No permissions
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Read, write and delete
    pub const fn all() -> Self {
        Self { bits: 0b111 }
    }

    pub fn contains(&self, permission: Permission) -> bool {
        self.bits & permission.bit() != 0
    }

    pub fn insert(&mut self, permission: Permission) {
        self.bits |= permission.bit();
    }

    pub fn remove(&mut self, permission: Permission) {
        self.bits &= !permission.bit();
    }

    /// Builder-style variant of [`Permissions::insert`]
    pub fn with(mut self, permission: Permission) -> Self {
        self.insert(permission);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over the granted permissions in R, W, D order
    pub fn iter(&self) -> impl Iterator<Item = Permission> + '_ {
        Self::ORDER.into_iter().filter(|p| self.contains(*p))
    }
}

impl FromStr for Permissions {
    type Err = Lwm2mError;

    fn from_str(s: &str) -> Lwm2mResult<Self> {
        let mut permissions = Permissions::empty();
        for letter in s.chars() {
            let permission = Permission::from_letter(letter)?;
            if permissions.contains(permission) {
                return Err(Lwm2mError::InvalidData(format!(
                    "Duplicate permission letter {:?} in {:?}",
                    letter, s
                )));
            }
            permissions.insert(permission);
        }
        Ok(permissions)
    }
}

impl TryFrom<String> for Permissions {
    type Error = Lwm2mError;

    fn try_from(value: String) -> Lwm2mResult<Self> {
        value.parse()
    }
}

impl From<Permissions> for String {
    fn from(value: Permissions) -> Self {
        value.to_string()
    }
}

impl From<Permission> for Permissions {
    fn from(value: Permission) -> Self {
        Permissions::empty().with(value)
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for permission in self.iter() {
            write!(f, "{}", permission.letter())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_letters() {
        let perms: Permissions = "WR".parse().unwrap();
        assert!(perms.contains(Permission::Read));
        assert!(perms.contains(Permission::Write));
        assert!(!perms.contains(Permission::Delete));
        assert_eq!(perms, Permissions::READ_WRITE);
        assert_eq!(perms.to_string(), "RW");
    }

    #[test]
    fn test_empty_string_grants_nothing() {
        let perms: Permissions = "".parse().unwrap();
        assert!(perms.is_empty());
        assert_eq!(perms, Permissions::empty());
    }

    #[test]
    fn test_invalid_letters() {
        assert!("RX".parse::<Permissions>().is_err());
        assert!("RR".parse::<Permissions>().is_err());
        assert!("r".parse::<Permissions>().is_err());
    }

    #[test]
    fn test_insert_remove() {
        let mut perms = Permissions::all();
        perms.remove(Permission::Write);
        assert_eq!(perms.to_string(), "RD");
        perms.insert(Permission::Write);
        assert_eq!(perms, Permissions::all());
    }

    #[test]
    fn test_serde_string_form() {
        let json = serde_json::to_string(&Permissions::all()).unwrap();
        assert_eq!(json, "\"RWD\"");
        let perms: Permissions = serde_json::from_str("\"D\"").unwrap();
        assert_eq!(perms, Permissions::DELETE);
        assert!(serde_json::from_str::<Permissions>("\"Q\"").is_err());
    }
}
