//! Status helper enums mapping to SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data in the
//! corresponding `*_statuses` database table.

/// Status ID type matching SMALLINT in the database.
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

            /// Look up a variant by its database status ID.
            pub fn from_id(id: StatusId) -> Option<Self> {
                $(
                    if id == $val {
                        return Some(Self::$variant);
                    }
                )+
                None
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
    /// Completion state of a todo item (`todo_item_statuses`).
    TodoItemStatus {
        NotCompleted = 1,
        Completed = 2,
    }
}

impl TodoItemStatus {
    /// Map the `complete` flag of an item update to a status.
    pub fn from_completed(complete: bool) -> Self {
        if complete {
            Self::Completed
        } else {
            Self::NotCompleted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_seed_data() {
        assert_eq!(TodoItemStatus::NotCompleted.id(), 1);
        assert_eq!(TodoItemStatus::Completed.id(), 2);
    }

    #[test]
    fn complete_flag_maps_to_status() {
        assert_eq!(TodoItemStatus::from_completed(true), TodoItemStatus::Completed);
        assert_eq!(TodoItemStatus::from_completed(false), TodoItemStatus::NotCompleted);
    }

    #[test]
    fn from_id_rejects_unknown() {
        assert_eq!(TodoItemStatus::from_id(2), Some(TodoItemStatus::Completed));
        assert_eq!(TodoItemStatus::from_id(0), None);
    }
}
