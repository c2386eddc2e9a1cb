/// A failed conversion into an enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnumError {
    /// No enumerator has this name.
    UnknownName {
        /// The enum type
        type_name: &'static str,
    },

    /// No enumerator holds this value.
    UnknownValue {
        /// The enum type
        type_name: &'static str,
        /// The value that was looked up
        value: i128,
    },

    /// The candidate value lies outside the range any enumerator can hold.
    Unrepresentable {
        /// The enum type
        type_name: &'static str,
    },
}

impl EnumError {
    /// The enum type the conversion targeted.
    pub fn type_name(&self) -> &'static str {
        match self {
            EnumError::UnknownName { type_name }
            | EnumError::UnknownValue { type_name, .. }
            | EnumError::Unrepresentable { type_name } => type_name,
        }
    }
}

impl core::fmt::Display for EnumError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EnumError::UnknownName { type_name } => {
                write!(f, "no variant of {type_name} has that name")
            }
            EnumError::UnknownValue { type_name, value } => {
                write!(f, "no variant of {type_name} has value {value}")
            }
            EnumError::Unrepresentable { type_name } => {
                write!(f, "value out of range for {type_name}")
            }
        }
    }
}

impl core::error::Error for EnumError {}
