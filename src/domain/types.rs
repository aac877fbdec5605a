//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers, text values and numeric constraints are enforced at the
//! boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Maximum accepted length of a center name.
pub const MAX_CENTER_NAME_LENGTH: usize = 20;
/// Maximum accepted length of an address.
pub const MAX_ADDRESS_LENGTH: usize = 100;
/// Maximum accepted length of a manager name.
pub const MAX_MANAGER_NAME_LENGTH: usize = 40;
/// Maximum accepted length of the notes field.
pub const MAX_NOTES_LENGTH: usize = 200;

/// Characters rejected in user-supplied names to keep them out of queries
/// and rendered pages.
pub const FORBIDDEN_INPUT_CHARACTERS: [char; 8] = ['<', '>', '&', '"', '\'', '%', ';', '\\'];

/// Returns true when the input contains a character from the denylist.
pub fn contains_forbidden_character(input: &str) -> bool {
    input.chars().any(|c| FORBIDDEN_INPUT_CHARACTERS.contains(&c))
}

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be non-negative was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// A string exceeded its maximum length.
    #[error("{0} must be at most {1} characters")]
    TooLong(&'static str, usize),
    /// A string contained a denylisted character.
    #[error("{0} contains a forbidden character")]
    ForbiddenCharacter(&'static str),
    /// A formatted value (postal code, phone number) failed its format check.
    #[error("{0} has an invalid format")]
    InvalidFormat(&'static str),
    /// A region value did not match any known prefecture.
    #[error("unknown region: {0}")]
    UnknownRegion(String),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for i32 {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

/// Macro to generate trimmed, non-empty, length-bounded string newtypes.
macro_rules! bounded_string_newtype {
    ($name:ident, $doc:expr, $field:expr, $max:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value of bounded length.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = trim_and_require_non_empty(value, $field)?;
                if trimmed.chars().count() > $max {
                    return Err(TypeConstraintError::TooLong($field, $max));
                }
                Ok(Self(trimmed))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

id_newtype!(
    CenterId,
    "Unique identifier for an inventory center.",
    "center_id"
);
id_newtype!(StockId, "Unique identifier for a stock record.", "stock_id");
id_newtype!(
    CategoryId,
    "Unique identifier for a stock category.",
    "category_id"
);

bounded_string_newtype!(
    Address,
    "Center street address enforcing non-empty, bounded values.",
    "address",
    MAX_ADDRESS_LENGTH
);
bounded_string_newtype!(
    ManagerName,
    "Name of the manager responsible for a center.",
    "manager name",
    MAX_MANAGER_NAME_LENGTH
);
bounded_string_newtype!(
    Notes,
    "Free-form notes attached to a center.",
    "notes",
    MAX_NOTES_LENGTH
);
bounded_string_newtype!(
    StockName,
    "Stock item display name enforcing non-empty values.",
    "stock name",
    100
);

/// Center display name.
///
/// Bounded length and free of denylisted characters.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CenterName(String);

impl CenterName {
    /// Constructs a trimmed, non-empty, denylist-checked name.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trim_and_require_non_empty(value, "center name")?;
        if trimmed.chars().count() > MAX_CENTER_NAME_LENGTH {
            return Err(TypeConstraintError::TooLong(
                "center name",
                MAX_CENTER_NAME_LENGTH,
            ));
        }
        if contains_forbidden_character(&trimmed) {
            return Err(TypeConstraintError::ForbiddenCharacter("center name"));
        }
        Ok(Self(trimmed))
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for CenterName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CenterName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for CenterName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CenterName {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CenterName> for String {
    fn from(value: CenterName) -> Self {
        value.0
    }
}

/// Postal code in `NNN-NNNN` or `NNNNNNN` form.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PostalCode(String);

impl PostalCode {
    /// Constructs a validated postal code.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trim_and_require_non_empty(value, "postal code")?;
        if !Self::is_valid(&trimmed) {
            return Err(TypeConstraintError::InvalidFormat("postal code"));
        }
        Ok(Self(trimmed))
    }

    fn is_valid(value: &str) -> bool {
        let bytes = value.as_bytes();
        match bytes.len() {
            7 => bytes.iter().all(u8::is_ascii_digit),
            8 => {
                bytes[3] == b'-'
                    && bytes[..3].iter().all(u8::is_ascii_digit)
                    && bytes[4..].iter().all(u8::is_ascii_digit)
            }
            _ => false,
        }
    }

    /// Borrow the postal code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for PostalCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PostalCode {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PostalCode> for String {
    fn from(value: PostalCode) -> Self {
        value.0
    }
}

/// Phone number made of digits and hyphens, 10 to 13 characters long.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Constructs a validated phone number.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trim_and_require_non_empty(value, "phone number")?;
        if !Self::is_valid(&trimmed) {
            return Err(TypeConstraintError::InvalidFormat("phone number"));
        }
        Ok(Self(trimmed))
    }

    fn is_valid(value: &str) -> bool {
        (10..=13).contains(&value.len()) && value.bytes().all(|b| b.is_ascii_digit() || b == b'-')
    }

    /// Borrow the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for PhoneNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

/// Non-negative storage capacity measured in stock units.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct StorageCapacity(i32);

impl StorageCapacity {
    /// Constructs a capacity that must be zero or greater.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value >= 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NegativeNumber("storage capacity"))
        }
    }

    /// Returns the raw `i32` value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for StorageCapacity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for StorageCapacity {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StorageCapacity> for i32 {
    fn from(value: StorageCapacity) -> Self {
        value.0
    }
}

impl PartialEq<i32> for StorageCapacity {
    fn eq(&self, other: &i32) -> bool {
        self.0 == *other
    }
}

impl PartialEq<StorageCapacity> for i32 {
    fn eq(&self, other: &StorageCapacity) -> bool {
        *self == other.0
    }
}

/// Record version counter used for optimistic concurrency control.
///
/// Starts at zero on insert and is incremented by every successful
/// mutation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Version(i64);

impl Version {
    /// Constructs a version that must be zero or greater.
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        if value >= 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NegativeNumber("version"))
        }
    }

    /// Version stamped onto freshly inserted records.
    pub const fn initial() -> Self {
        Self(0)
    }

    /// Returns the raw `i64` value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Version {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Version> for i64 {
    fn from(value: Version) -> Self {
        value.0
    }
}

impl PartialEq<i64> for Version {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Version> for i64 {
    fn eq(&self, other: &Version) -> bool {
        *self == other.0
    }
}

/// Operational state of an inventory center.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OperationalStatus {
    Active,
    Suspended,
}

impl OperationalStatus {
    /// Integer representation used in persistence.
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::Active => 0,
            Self::Suspended => 1,
        }
    }
}

impl Display for OperationalStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Suspended => write!(f, "suspended"),
        }
    }
}

impl TryFrom<i32> for OperationalStatus {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Active),
            1 => Ok(Self::Suspended),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "operational status: {other}"
            ))),
        }
    }
}

impl From<OperationalStatus> for i32 {
    fn from(value: OperationalStatus) -> Self {
        value.as_i32()
    }
}

/// Prefectures recognised by the region search filter.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Region {
    Hokkaido,
    Aomori,
    Iwate,
    Miyagi,
    Akita,
    Yamagata,
    Fukushima,
    Ibaraki,
    Tochigi,
    Gunma,
    Saitama,
    Chiba,
    Tokyo,
    Kanagawa,
    Niigata,
    Toyama,
    Ishikawa,
    Fukui,
    Yamanashi,
    Nagano,
    Gifu,
    Shizuoka,
    Aichi,
    Mie,
    Shiga,
    Kyoto,
    Osaka,
    Hyogo,
    Nara,
    Wakayama,
    Tottori,
    Shimane,
    Okayama,
    Hiroshima,
    Yamaguchi,
    Tokushima,
    Kagawa,
    Ehime,
    Kochi,
    Fukuoka,
    Saga,
    Nagasaki,
    Kumamoto,
    Oita,
    Miyazaki,
    Kagoshima,
    Okinawa,
}

impl Region {
    /// Every known region, in conventional prefecture order.
    pub const ALL: [Region; 47] = [
        Region::Hokkaido,
        Region::Aomori,
        Region::Iwate,
        Region::Miyagi,
        Region::Akita,
        Region::Yamagata,
        Region::Fukushima,
        Region::Ibaraki,
        Region::Tochigi,
        Region::Gunma,
        Region::Saitama,
        Region::Chiba,
        Region::Tokyo,
        Region::Kanagawa,
        Region::Niigata,
        Region::Toyama,
        Region::Ishikawa,
        Region::Fukui,
        Region::Yamanashi,
        Region::Nagano,
        Region::Gifu,
        Region::Shizuoka,
        Region::Aichi,
        Region::Mie,
        Region::Shiga,
        Region::Kyoto,
        Region::Osaka,
        Region::Hyogo,
        Region::Nara,
        Region::Wakayama,
        Region::Tottori,
        Region::Shimane,
        Region::Okayama,
        Region::Hiroshima,
        Region::Yamaguchi,
        Region::Tokushima,
        Region::Kagawa,
        Region::Ehime,
        Region::Kochi,
        Region::Fukuoka,
        Region::Saga,
        Region::Nagasaki,
        Region::Kumamoto,
        Region::Oita,
        Region::Miyazaki,
        Region::Kagoshima,
        Region::Okinawa,
    ];

    /// Canonical display name.
    pub const fn name(self) -> &'static str {
        match self {
            Region::Hokkaido => "Hokkaido",
            Region::Aomori => "Aomori",
            Region::Iwate => "Iwate",
            Region::Miyagi => "Miyagi",
            Region::Akita => "Akita",
            Region::Yamagata => "Yamagata",
            Region::Fukushima => "Fukushima",
            Region::Ibaraki => "Ibaraki",
            Region::Tochigi => "Tochigi",
            Region::Gunma => "Gunma",
            Region::Saitama => "Saitama",
            Region::Chiba => "Chiba",
            Region::Tokyo => "Tokyo",
            Region::Kanagawa => "Kanagawa",
            Region::Niigata => "Niigata",
            Region::Toyama => "Toyama",
            Region::Ishikawa => "Ishikawa",
            Region::Fukui => "Fukui",
            Region::Yamanashi => "Yamanashi",
            Region::Nagano => "Nagano",
            Region::Gifu => "Gifu",
            Region::Shizuoka => "Shizuoka",
            Region::Aichi => "Aichi",
            Region::Mie => "Mie",
            Region::Shiga => "Shiga",
            Region::Kyoto => "Kyoto",
            Region::Osaka => "Osaka",
            Region::Hyogo => "Hyogo",
            Region::Nara => "Nara",
            Region::Wakayama => "Wakayama",
            Region::Tottori => "Tottori",
            Region::Shimane => "Shimane",
            Region::Okayama => "Okayama",
            Region::Hiroshima => "Hiroshima",
            Region::Yamaguchi => "Yamaguchi",
            Region::Tokushima => "Tokushima",
            Region::Kagawa => "Kagawa",
            Region::Ehime => "Ehime",
            Region::Kochi => "Kochi",
            Region::Fukuoka => "Fukuoka",
            Region::Saga => "Saga",
            Region::Nagasaki => "Nagasaki",
            Region::Kumamoto => "Kumamoto",
            Region::Oita => "Oita",
            Region::Miyazaki => "Miyazaki",
            Region::Kagoshima => "Kagoshima",
            Region::Okinawa => "Okinawa",
        }
    }

    /// Returns true when some canonical region name contains the input,
    /// compared ASCII case-insensitively.
    pub fn is_known(value: &str) -> bool {
        let needle = value.trim().to_ascii_lowercase();
        if needle.is_empty() {
            return false;
        }
        Region::ALL
            .iter()
            .any(|region| region.name().to_ascii_lowercase().contains(&needle))
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
