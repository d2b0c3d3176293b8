//! Type lattice for field inference.
//!
//! One evaluator per candidate data type, each validating sample strings
//! against its own configurable format rules. The catalog is a closed
//! tagged union dispatched by `match`, so adding a member is a compile
//! error everywhere it matters, and the most-restrictive-first ranking is
//! pinned by the declaration order of [`DataTypeKind`].

pub mod boolean;
pub mod date_time;
pub mod enumeration;
pub mod float;
pub mod guid;
pub mod integer;
pub mod network;
pub mod serial;
pub mod text;
pub mod time_span;
pub mod version;

pub use boolean::BooleanType;
pub use date_time::{Culture, DateTimeType, default_cultures};
pub use enumeration::EnumType;
pub use float::FloatType;
pub use guid::GuidType;
pub use integer::IntegerType;
pub use network::{IpAddressType, MacAddressType};
pub use serial::SerialEnumType;
pub use text::TextType;
pub use time_span::TimeSpanType;
pub use version::VersionType;

use serde::{Deserialize, Serialize};

/// Catalog member identifiers, declared most-restrictive first.
///
/// Default type selection walks this order and picks the first member
/// that accepts every observed value; the derived `Ord` therefore ranks
/// "narrower" before "wider". Do not reorder.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum DataTypeKind {
    SerialStopBits,
    SerialParity,
    Guid,
    MacAddress,
    IpAddress,
    Version,
    TimeSpan,
    DateTime,
    Float,
    Double,
    Boolean,
    Int32,
    UInt32,
    Int8,
    UInt8,
    Int16,
    UInt16,
    UInt64,
    Int64,
    Text,
    Enum,
}

impl DataTypeKind {
    /// Every member, in canonical most-restrictive-first order.
    pub const RANKED: [DataTypeKind; 21] = [
        DataTypeKind::SerialStopBits,
        DataTypeKind::SerialParity,
        DataTypeKind::Guid,
        DataTypeKind::MacAddress,
        DataTypeKind::IpAddress,
        DataTypeKind::Version,
        DataTypeKind::TimeSpan,
        DataTypeKind::DateTime,
        DataTypeKind::Float,
        DataTypeKind::Double,
        DataTypeKind::Boolean,
        DataTypeKind::Int32,
        DataTypeKind::UInt32,
        DataTypeKind::Int8,
        DataTypeKind::UInt8,
        DataTypeKind::Int16,
        DataTypeKind::UInt16,
        DataTypeKind::UInt64,
        DataTypeKind::Int64,
        DataTypeKind::Text,
        DataTypeKind::Enum,
    ];

    /// Position in the canonical ranking, 0 = most restrictive.
    pub fn rank(self) -> usize {
        self as usize
    }
}

/// One configured evaluator instance for each catalog member.
#[derive(Debug, Clone, PartialEq)]
pub enum DataType {
    SerialStopBits(SerialEnumType),
    SerialParity(SerialEnumType),
    Guid(GuidType),
    MacAddress(MacAddressType),
    IpAddress(IpAddressType),
    Version(VersionType),
    TimeSpan(TimeSpanType),
    DateTime(DateTimeType),
    Float(FloatType),
    Double(FloatType),
    Boolean(BooleanType),
    Int32(IntegerType),
    UInt32(IntegerType),
    Int8(IntegerType),
    UInt8(IntegerType),
    Int16(IntegerType),
    UInt16(IntegerType),
    UInt64(IntegerType),
    Int64(IntegerType),
    Text(TextType),
    Enum(EnumType),
}

impl DataType {
    /// The full catalog in canonical order, instantiated with default
    /// configuration; the free-form enum member is seeded from the
    /// observed samples.
    pub fn catalog(enum_type_name: &str, samples: &[String]) -> Vec<DataType> {
        vec![
            DataType::SerialStopBits(SerialEnumType::stop_bits()),
            DataType::SerialParity(SerialEnumType::parity()),
            DataType::Guid(GuidType::default()),
            DataType::MacAddress(MacAddressType::default()),
            DataType::IpAddress(IpAddressType::default()),
            DataType::Version(VersionType::default()),
            DataType::TimeSpan(TimeSpanType::default()),
            DataType::DateTime(DateTimeType::default()),
            DataType::Float(FloatType::single()),
            DataType::Double(FloatType::double()),
            DataType::Boolean(BooleanType::default()),
            DataType::Int32(IntegerType::new(i32::MIN.into(), i32::MAX.into())),
            DataType::UInt32(IntegerType::new(0, u32::MAX.into())),
            DataType::Int8(IntegerType::new(i8::MIN.into(), i8::MAX.into())),
            DataType::UInt8(IntegerType::new(0, u8::MAX.into())),
            DataType::Int16(IntegerType::new(i16::MIN.into(), i16::MAX.into())),
            DataType::UInt16(IntegerType::new(0, u16::MAX.into())),
            DataType::UInt64(IntegerType::new(0, u64::MAX.into())),
            DataType::Int64(IntegerType::new(i64::MIN.into(), i64::MAX.into())),
            DataType::Text(TextType::default()),
            DataType::Enum(EnumType::from_samples(enum_type_name, samples)),
        ]
    }

    pub fn kind(&self) -> DataTypeKind {
        match self {
            DataType::SerialStopBits(_) => DataTypeKind::SerialStopBits,
            DataType::SerialParity(_) => DataTypeKind::SerialParity,
            DataType::Guid(_) => DataTypeKind::Guid,
            DataType::MacAddress(_) => DataTypeKind::MacAddress,
            DataType::IpAddress(_) => DataTypeKind::IpAddress,
            DataType::Version(_) => DataTypeKind::Version,
            DataType::TimeSpan(_) => DataTypeKind::TimeSpan,
            DataType::DateTime(_) => DataTypeKind::DateTime,
            DataType::Float(_) => DataTypeKind::Float,
            DataType::Double(_) => DataTypeKind::Double,
            DataType::Boolean(_) => DataTypeKind::Boolean,
            DataType::Int32(_) => DataTypeKind::Int32,
            DataType::UInt32(_) => DataTypeKind::UInt32,
            DataType::Int8(_) => DataTypeKind::Int8,
            DataType::UInt8(_) => DataTypeKind::UInt8,
            DataType::Int16(_) => DataTypeKind::Int16,
            DataType::UInt16(_) => DataTypeKind::UInt16,
            DataType::UInt64(_) => DataTypeKind::UInt64,
            DataType::Int64(_) => DataTypeKind::Int64,
            DataType::Text(_) => DataTypeKind::Text,
            DataType::Enum(_) => DataTypeKind::Enum,
        }
    }

    /// Whether `value` parses losslessly as this type under the current
    /// configuration.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            DataType::SerialStopBits(t) | DataType::SerialParity(t) => t.accepts(value),
            DataType::Guid(t) => t.accepts(value),
            DataType::MacAddress(t) => t.accepts(value),
            DataType::IpAddress(t) => t.accepts(value),
            DataType::Version(t) => t.accepts(value),
            DataType::TimeSpan(t) => t.accepts(value),
            DataType::DateTime(t) => t.accepts(value),
            DataType::Float(t) | DataType::Double(t) => t.accepts(value),
            DataType::Boolean(t) => t.accepts(value),
            DataType::Int32(t)
            | DataType::UInt32(t)
            | DataType::Int8(t)
            | DataType::UInt8(t)
            | DataType::Int16(t)
            | DataType::UInt16(t)
            | DataType::UInt64(t)
            | DataType::Int64(t) => t.accepts(value),
            DataType::Text(t) => t.accepts(value),
            DataType::Enum(t) => t.accepts(value),
        }
    }

    /// True if any sample fails [`DataType::accepts`]; an empty sample
    /// set never invalidates.
    pub fn has_invalid_values(&self, samples: &[String]) -> bool {
        samples.iter().any(|s| !self.accepts(s))
    }

    /// Whether the generated form has a built-in null/absent
    /// representation, making an explicit optional wrapper unnecessary.
    pub fn has_native_null(&self) -> bool {
        matches!(self, DataType::Text(_))
    }

    /// Generated-language type string handed to the renderer.
    pub fn type_name(&self) -> String {
        match self {
            DataType::SerialStopBits(t) | DataType::SerialParity(t) => t.type_name.to_string(),
            DataType::Guid(_) => "Guid".to_string(),
            DataType::MacAddress(_) => "MacAddress".to_string(),
            DataType::IpAddress(_) => "IpAddr".to_string(),
            DataType::Version(_) => "Version".to_string(),
            DataType::TimeSpan(_) => "Duration".to_string(),
            DataType::DateTime(_) => "NaiveDateTime".to_string(),
            DataType::Float(_) => "f32".to_string(),
            DataType::Double(_) => "f64".to_string(),
            DataType::Boolean(_) => "bool".to_string(),
            DataType::Int32(_) => "i32".to_string(),
            DataType::UInt32(_) => "u32".to_string(),
            DataType::Int8(_) => "i8".to_string(),
            DataType::UInt8(_) => "u8".to_string(),
            DataType::Int16(_) => "i16".to_string(),
            DataType::UInt16(_) => "u16".to_string(),
            DataType::UInt64(_) => "u64".to_string(),
            DataType::Int64(_) => "i64".to_string(),
            DataType::Text(_) => "String".to_string(),
            DataType::Enum(t) => t.type_name.clone(),
        }
    }
}
