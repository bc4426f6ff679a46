//! Status vocabularies stored as `TEXT` columns and their transition rules.
//!
//! The string forms must match the `CHECK` constraints in the migrations.
//! `TryFrom<String>` lets row structs decode them with `#[sqlx(try_from)]`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

macro_rules! text_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl TryFrom<String> for $name {
            type Error = CoreError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(CoreError::Validation(format!(
                        "'{other}' is not a valid {}",
                        stringify!($name)
                    ))),
                }
            }
        }
    };
}

text_enum!(
    /// Lifecycle of a maritime operation.
    OperationStatus {
        Registered => "registered",
        Navigating => "navigating",
        InTransit => "in_transit",
        InPort => "in_port",
        Completed => "completed",
        Cancelled => "cancelled",
    }
);

text_enum!(
    /// Approval state of a certification attached to an operation.
    ApprovalStatus {
        Pending => "pending",
        Approved => "approved",
        Rejected => "rejected",
    }
);

text_enum!(
    ReservationStatus {
        Pending => "pending",
        Confirmed => "confirmed",
        Cancelled => "cancelled",
    }
);

text_enum!(
    PortOperationKind {
        Loading => "loading",
        Unloading => "unloading",
        Transshipment => "transshipment",
    }
);

text_enum!(
    PortOperationStatus {
        Scheduled => "scheduled",
        InProgress => "in_progress",
        Completed => "completed",
        Cancelled => "cancelled",
    }
);

impl OperationStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OperationStatus::Completed | OperationStatus::Cancelled)
    }

    pub fn can_transition_to(self, next: OperationStatus) -> bool {
        use OperationStatus::*;
        matches!(
            (self, next),
            (Registered, Navigating | Cancelled)
                | (Navigating, InPort | InTransit | Cancelled)
                | (InTransit, InPort | Navigating | Cancelled)
                | (InPort, Navigating | InTransit | Completed)
        )
    }

    /// Validate a transition, returning the new status on success.
    pub fn transition(self, next: OperationStatus) -> Result<OperationStatus, CoreError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CoreError::Validation(format!(
                "Operation cannot move from {self} to {next}"
            )))
        }
    }
}

impl ApprovalStatus {
    pub fn can_transition_to(self, next: ApprovalStatus) -> bool {
        matches!(
            (self, next),
            (ApprovalStatus::Pending, ApprovalStatus::Approved | ApprovalStatus::Rejected)
        )
    }
}
