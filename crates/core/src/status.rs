//! Status helper enums mapping to SMALLSERIAL/SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding lookup table. Storing ids instead of free-text labels
//! means "Closed" has exactly one representation in the database.

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }

            /// Map a database status ID back to the enum, if it is known.
            pub fn from_id(id: StatusId) -> Option<Self> {
                match id {
                    $( x if x == $val => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Intern lifecycle status (`intern_statuses`).
    InternStatus {
        Active = 1,
        Inactive = 2,
    }
}

define_status_enum! {
    /// Contract status (`contract_statuses`).
    ContractStatus {
        Active = 1,
        Closed = 2,
        Suspended = 3,
    }
}

define_status_enum! {
    /// Contract type (`contract_types`): the first contract or a renewal.
    ContractType {
        Initial = 1,
        Renewal = 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_status_ids_match_seed_data() {
        assert_eq!(InternStatus::Active.id(), 1);
        assert_eq!(InternStatus::Inactive.id(), 2);
    }

    #[test]
    fn contract_status_ids_match_seed_data() {
        assert_eq!(ContractStatus::Active.id(), 1);
        assert_eq!(ContractStatus::Closed.id(), 2);
        assert_eq!(ContractStatus::Suspended.id(), 3);
    }

    #[test]
    fn contract_type_ids_match_seed_data() {
        assert_eq!(ContractType::Initial.id(), 1);
        assert_eq!(ContractType::Renewal.id(), 2);
    }

    #[test]
    fn from_id_round_trips_and_rejects_unknown() {
        assert_eq!(ContractStatus::from_id(2), Some(ContractStatus::Closed));
        assert_eq!(ContractStatus::from_id(9), None);
        let id: StatusId = InternStatus::Inactive.into();
        assert_eq!(InternStatus::from_id(id), Some(InternStatus::Inactive));
    }
}
