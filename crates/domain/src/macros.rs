//! Macro for string conversions on domain enums
//!
//! Interview statuses and calendar granularities travel as lowercase strings
//! between the persistence layer, configuration files and the UI. This macro
//! generates the `Display`/`FromStr` pair plus an `as_str` accessor and an
//! `ALL` table from a single mapping, with optional parse-only aliases.
//!
//! # Example
//!
//! ```rust
//! use talentdesk_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum RoomState {
//!     Free,
//!     Held,
//!     OutOfService,
//! }
//!
//! impl_domain_status_conversions!(RoomState {
//!     Free => "free",
//!     Held => "held",
//!     OutOfService => "out_of_service" | "out-of-service",
//! });
//!
//! assert_eq!(RoomState::OutOfService.as_str(), "out_of_service");
//! assert_eq!("Out-Of-Service".parse::<RoomState>(), Ok(RoomState::OutOfService));
//! assert_eq!(RoomState::ALL.len(), 3);
//! ```

/// Implements `Display`, `FromStr`, `as_str` and `ALL` for a fieldless enum
///
/// Parsing is case-insensitive and ignores surrounding whitespace. The first
/// string of each arm is canonical (used by `Display`); any `| "alias"`
/// strings are accepted by `FromStr` only.
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$enum_name] = &[$($enum_name::$variant),+];

            /// Canonical lowercase representation.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($str $(| $alias)* => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum PanelSeat {
        Lead,
        Shadow,
        Observer,
    }

    impl_domain_status_conversions!(PanelSeat {
        Lead => "lead",
        Shadow => "shadow" | "trainee",
        Observer => "observer",
    });

    #[test]
    fn test_display_uses_canonical_string() {
        assert_eq!(PanelSeat::Lead.to_string(), "lead");
        assert_eq!(PanelSeat::Shadow.to_string(), "shadow");
        assert_eq!(PanelSeat::Observer.as_str(), "observer");
    }

    #[test]
    fn test_fromstr_is_case_insensitive_and_trims() {
        assert_eq!(PanelSeat::from_str("LEAD").unwrap(), PanelSeat::Lead);
        assert_eq!(PanelSeat::from_str("  Observer ").unwrap(), PanelSeat::Observer);
    }

    #[test]
    fn test_fromstr_accepts_aliases() {
        assert_eq!(PanelSeat::from_str("trainee").unwrap(), PanelSeat::Shadow);
        // aliases never leak into Display
        assert_eq!(PanelSeat::from_str("Trainee").unwrap().to_string(), "shadow");
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = PanelSeat::from_str("interviewer");
        assert!(result.unwrap_err().contains("Invalid PanelSeat: interviewer"));
        assert!(PanelSeat::from_str("").is_err());
    }

    #[test]
    fn test_all_lists_every_variant_in_order() {
        assert_eq!(PanelSeat::ALL, &[PanelSeat::Lead, PanelSeat::Shadow, PanelSeat::Observer]);
        for seat in PanelSeat::ALL {
            assert_eq!(PanelSeat::from_str(seat.as_str()).unwrap(), *seat);
        }
    }
}
