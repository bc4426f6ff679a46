//! Authorization modules and the access decision.
//!
//! Every user is assigned exactly one [`Module`]. Route groups declare the
//! modules allowed to use them; [`authorize`] compares the two. The slugs
//! must match the seed rows of `seguridad.modules`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An authorization scope assigned to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Module {
    #[serde(rename = "gestion-maritima")]
    MaritimeManagement,
    #[serde(rename = "gestion-reserva")]
    ReservationManagement,
    #[serde(rename = "monitoreo")]
    Monitoring,
    #[serde(rename = "operaciones-portuarias")]
    PortOperations,
    #[serde(rename = "administracion")]
    Administration,
}

impl Module {
    pub const ALL: [Module; 5] = [
        Module::MaritimeManagement,
        Module::ReservationManagement,
        Module::Monitoring,
        Module::PortOperations,
        Module::Administration,
    ];

    /// Stable slug used in tokens, database rows and error messages.
    pub fn slug(self) -> &'static str {
        match self {
            Module::MaritimeManagement => "gestion-maritima",
            Module::ReservationManagement => "gestion-reserva",
            Module::Monitoring => "monitoreo",
            Module::PortOperations => "operaciones-portuarias",
            Module::Administration => "administracion",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown module: {0}")]
pub struct UnknownModule(pub String);

impl FromStr for Module {
    type Err = UnknownModule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Module::ALL
            .into_iter()
            .find(|m| m.slug() == s)
            .ok_or_else(|| UnknownModule(s.to_string()))
    }
}

impl TryFrom<String> for Module {
    type Error = UnknownModule;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Outcome of an access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Allowed,
    Denied { required: Vec<Module> },
}

impl Access {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Access::Allowed)
    }
}

/// Decide whether a user holding `granted` may use a route restricted to
/// `required`.
///
/// An empty `required` list means the route carries no module restriction.
pub fn authorize(granted: Option<Module>, required: &[Module]) -> Access {
    if required.is_empty() {
        return Access::Allowed;
    }
    match granted {
        Some(module) if required.contains(&module) => Access::Allowed,
        _ => Access::Denied {
            required: required.to_vec(),
        },
    }
}

/// Human-readable explanation for a denied request.
pub fn denial_message(required: &[Module]) -> String {
    let names: Vec<&str> = required.iter().map(|m| m.slug()).collect();
    format!("Access restricted to modules: {}", names.join(", "))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn no_restriction_always_allows() {
        assert_eq!(authorize(None, &[]), Access::Allowed);
        for module in Module::ALL {
            assert_eq!(authorize(Some(module), &[]), Access::Allowed);
        }
    }

    #[test]
    fn allows_member_of_required_list() {
        let required = [Module::MaritimeManagement, Module::Administration];
        assert!(authorize(Some(Module::Administration), &required).is_allowed());
        assert!(authorize(Some(Module::MaritimeManagement), &required).is_allowed());
    }

    #[test]
    fn denies_non_member_and_reports_required_modules() {
        let required = [Module::Monitoring];
        let access = authorize(Some(Module::ReservationManagement), &required);
        assert_matches!(access, Access::Denied { required } if required == vec![Module::Monitoring]);
    }

    #[test]
    fn denies_missing_module_on_restricted_route() {
        assert!(!authorize(None, &[Module::PortOperations]).is_allowed());
    }

    #[test]
    fn grant_iff_member_for_every_combination() {
        let lists: [&[Module]; 3] = [
            &[Module::Monitoring],
            &[Module::PortOperations, Module::MaritimeManagement],
            &Module::ALL,
        ];
        for required in lists {
            for module in Module::ALL {
                assert_eq!(
                    authorize(Some(module), required).is_allowed(),
                    required.contains(&module)
                );
            }
        }
    }

    #[test]
    fn slug_round_trips() {
        for module in Module::ALL {
            assert_eq!(module.slug().parse::<Module>().unwrap(), module);
            let json = serde_json::to_string(&module).unwrap();
            assert_eq!(json, format!("\"{}\"", module.slug()));
        }
        assert!("logistica".parse::<Module>().is_err());
    }

    #[test]
    fn denial_message_names_modules() {
        let msg = denial_message(&[Module::MaritimeManagement, Module::Administration]);
        assert_eq!(
            msg,
            "Access restricted to modules: gestion-maritima, administracion"
        );
    }
}
