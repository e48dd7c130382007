//! Column type descriptors as reported in result metadata.
//!
//! A [`TypeInfo`] is the driver's description of a column type. Composite
//! descriptors own their nested descriptors, so a `map<varchar, list<bigint>>`
//! column is a small tree rather than a flat tag.

use std::fmt;
use std::str::FromStr;

use rowmap_result::{Error, Result};

use crate::native::NativeType;
use crate::resolve::resolve;

/// Protocol option id of a column type, without any nested parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TypeKind {
    Custom = 0x0000,
    Ascii = 0x0001,
    BigInt = 0x0002,
    Blob = 0x0003,
    Boolean = 0x0004,
    Counter = 0x0005,
    Decimal = 0x0006,
    Double = 0x0007,
    Float = 0x0008,
    Int = 0x0009,
    Timestamp = 0x000B,
    Uuid = 0x000C,
    Varchar = 0x000D,
    Varint = 0x000E,
    TimeUuid = 0x000F,
    Inet = 0x0010,
    List = 0x0020,
    Map = 0x0021,
    Set = 0x0022,
}

impl TypeKind {
    /// Look up the kind for a protocol option id.
    ///
    /// Returns `None` for ids this protocol version does not define
    /// (including `0x000A`, which older servers used as an alias of varchar
    /// and no longer send).
    pub fn from_code(code: u16) -> Option<TypeKind> {
        let kind = match code {
            0x0000 => TypeKind::Custom,
            0x0001 => TypeKind::Ascii,
            0x0002 => TypeKind::BigInt,
            0x0003 => TypeKind::Blob,
            0x0004 => TypeKind::Boolean,
            0x0005 => TypeKind::Counter,
            0x0006 => TypeKind::Decimal,
            0x0007 => TypeKind::Double,
            0x0008 => TypeKind::Float,
            0x0009 => TypeKind::Int,
            0x000B => TypeKind::Timestamp,
            0x000C => TypeKind::Uuid,
            0x000D => TypeKind::Varchar,
            0x000E => TypeKind::Varint,
            0x000F => TypeKind::TimeUuid,
            0x0010 => TypeKind::Inet,
            0x0020 => TypeKind::List,
            0x0021 => TypeKind::Map,
            0x0022 => TypeKind::Set,
            _ => return None,
        };
        Some(kind)
    }

    #[inline]
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Whether descriptors of this kind carry nested descriptors.
    #[inline]
    pub fn is_collection(self) -> bool {
        matches!(self, TypeKind::List | TypeKind::Map | TypeKind::Set)
    }
}

/// A column type descriptor.
///
/// Scalar variants map one-to-one onto the protocol's option ids. `List` and
/// `Set` carry their element descriptor, `Map` carries the key descriptor
/// followed by the element descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeInfo {
    /// Server-side custom type, identified by its marshal class name.
    Custom(String),
    Ascii,
    BigInt,
    Blob,
    Boolean,
    Counter,
    Decimal,
    Double,
    Float,
    Int,
    Timestamp,
    Uuid,
    Varchar,
    Varint,
    TimeUuid,
    Inet,
    List(Box<TypeInfo>),
    Map(Box<TypeInfo>, Box<TypeInfo>),
    Set(Box<TypeInfo>),
}

impl TypeInfo {
    pub fn list(elem: TypeInfo) -> Self {
        TypeInfo::List(Box::new(elem))
    }

    pub fn set(elem: TypeInfo) -> Self {
        TypeInfo::Set(Box::new(elem))
    }

    pub fn map(key: TypeInfo, elem: TypeInfo) -> Self {
        TypeInfo::Map(Box::new(key), Box::new(elem))
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            TypeInfo::Custom(_) => TypeKind::Custom,
            TypeInfo::Ascii => TypeKind::Ascii,
            TypeInfo::BigInt => TypeKind::BigInt,
            TypeInfo::Blob => TypeKind::Blob,
            TypeInfo::Boolean => TypeKind::Boolean,
            TypeInfo::Counter => TypeKind::Counter,
            TypeInfo::Decimal => TypeKind::Decimal,
            TypeInfo::Double => TypeKind::Double,
            TypeInfo::Float => TypeKind::Float,
            TypeInfo::Int => TypeKind::Int,
            TypeInfo::Timestamp => TypeKind::Timestamp,
            TypeInfo::Uuid => TypeKind::Uuid,
            TypeInfo::Varchar => TypeKind::Varchar,
            TypeInfo::Varint => TypeKind::Varint,
            TypeInfo::TimeUuid => TypeKind::TimeUuid,
            TypeInfo::Inet => TypeKind::Inet,
            TypeInfo::List(_) => TypeKind::List,
            TypeInfo::Map(_, _) => TypeKind::Map,
            TypeInfo::Set(_) => TypeKind::Set,
        }
    }

    /// Protocol option id of the outermost type.
    #[inline]
    pub fn code(&self) -> u16 {
        self.kind().code()
    }

    /// Key descriptor of a map, `None` for every other type.
    pub fn key(&self) -> Option<&TypeInfo> {
        match self {
            TypeInfo::Map(key, _) => Some(key),
            _ => None,
        }
    }

    /// Element descriptor of a list, set, or map.
    pub fn elem(&self) -> Option<&TypeInfo> {
        match self {
            TypeInfo::List(elem) | TypeInfo::Set(elem) | TypeInfo::Map(_, elem) => Some(elem),
            _ => None,
        }
    }

    /// Native type values of this column are materialized as.
    ///
    /// See [`resolve`](crate::resolve::resolve).
    #[inline]
    pub fn native_type(&self) -> Option<NativeType> {
        resolve(self)
    }

    /// Allocate a zero-valued scan destination for this type.
    #[inline]
    pub fn new_holder(&self) -> crate::holder::Holder {
        crate::holder::Holder::new(self)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeInfo::Custom(class) => write!(f, "'{}'", class),
            TypeInfo::Ascii => f.write_str("ascii"),
            TypeInfo::BigInt => f.write_str("bigint"),
            TypeInfo::Blob => f.write_str("blob"),
            TypeInfo::Boolean => f.write_str("boolean"),
            TypeInfo::Counter => f.write_str("counter"),
            TypeInfo::Decimal => f.write_str("decimal"),
            TypeInfo::Double => f.write_str("double"),
            TypeInfo::Float => f.write_str("float"),
            TypeInfo::Int => f.write_str("int"),
            TypeInfo::Timestamp => f.write_str("timestamp"),
            TypeInfo::Uuid => f.write_str("uuid"),
            TypeInfo::Varchar => f.write_str("varchar"),
            TypeInfo::Varint => f.write_str("varint"),
            TypeInfo::TimeUuid => f.write_str("timeuuid"),
            TypeInfo::Inet => f.write_str("inet"),
            TypeInfo::List(elem) => write!(f, "list<{}>", elem),
            TypeInfo::Map(key, elem) => write!(f, "map<{}, {}>", key, elem),
            TypeInfo::Set(elem) => write!(f, "set<{}>", elem),
        }
    }
}

impl FromStr for TypeInfo {
    type Err = Error;

    /// Parse a CQL type name such as `map<text, list<bigint>>`.
    ///
    /// Names are case-insensitive and `text` is accepted as an alias of
    /// `varchar`. A quoted name (`'com.example.MyType'`) or any unknown bare
    /// name becomes [`TypeInfo::Custom`].
    fn from_str(s: &str) -> Result<Self> {
        let mut parser = TypeNameParser {
            input: s,
            pos: 0,
            depth: 0,
        };
        let info = parser.parse_type()?;
        parser.skip_whitespace();
        if parser.pos != parser.input.len() {
            return Err(parser.error("unexpected trailing input"));
        }
        Ok(info)
    }
}

/// Deepest parameter nesting accepted when parsing a type name.
pub const MAX_TYPE_DEPTH: usize = 64;

struct TypeNameParser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> TypeNameParser<'a> {
    fn parse_type(&mut self) -> Result<TypeInfo> {
        self.skip_whitespace();
        if self.peek() == Some('\'') {
            return self.parse_quoted();
        }

        let name = self.parse_identifier()?;
        self.skip_whitespace();
        let params = if self.peek() == Some('<') {
            self.pos += 1;
            self.parse_params()?
        } else {
            Vec::new()
        };

        let lowered = name.to_ascii_lowercase();
        let info = match lowered.as_str() {
            "list" => TypeInfo::list(self.single_param(&lowered, params)?),
            "set" => TypeInfo::set(self.single_param(&lowered, params)?),
            // Frozen collections materialize exactly like their unfrozen form.
            "frozen" => self.single_param(&lowered, params)?,
            "map" => match <[TypeInfo; 2]>::try_from(params) {
                Ok([key, elem]) => TypeInfo::map(key, elem),
                Err(params) => {
                    return Err(self.error(&format!(
                        "map takes 2 type parameters, got {}",
                        params.len()
                    )));
                }
            },
            _ if !params.is_empty() => {
                return Err(self.error(&format!("type {name} does not take parameters")));
            }
            _ => scalar_from_name(&lowered)
                .unwrap_or_else(|| TypeInfo::Custom(name.to_string())),
        };
        Ok(info)
    }

    fn single_param(&self, name: &str, params: Vec<TypeInfo>) -> Result<TypeInfo> {
        match <[TypeInfo; 1]>::try_from(params) {
            Ok([elem]) => Ok(elem),
            Err(params) => Err(self.error(&format!(
                "{name} takes 1 type parameter, got {}",
                params.len()
            ))),
        }
    }

    fn parse_params(&mut self) -> Result<Vec<TypeInfo>> {
        if self.depth >= MAX_TYPE_DEPTH {
            return Err(self.error("type nesting too deep"));
        }
        self.depth += 1;
        let params = self.parse_param_list();
        self.depth -= 1;
        params
    }

    fn parse_param_list(&mut self) -> Result<Vec<TypeInfo>> {
        let mut params = Vec::new();
        loop {
            params.push(self.parse_type()?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.pos += 1,
                Some('>') => {
                    self.pos += 1;
                    return Ok(params);
                }
                Some(c) => return Err(self.error(&format!("unexpected character {c:?}"))),
                None => return Err(self.error("unterminated type parameter list")),
            }
        }
    }

    fn parse_quoted(&mut self) -> Result<TypeInfo> {
        let start = self.pos + 1;
        let Some(len) = self.input[start..].find('\'') else {
            return Err(self.error("unterminated quoted type name"));
        };
        let class = &self.input[start..start + len];
        if class.is_empty() {
            return Err(self.error("empty custom type name"));
        }
        self.pos = start + len + 1;
        Ok(TypeInfo::Custom(class.to_string()))
    }

    fn parse_identifier(&mut self) -> Result<&'a str> {
        let rest = &self.input[self.pos..];
        let len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '$'))
            .unwrap_or(rest.len());
        if len == 0 {
            return Err(self.error("expected a type name"));
        }
        self.pos += len;
        Ok(&rest[..len])
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn error(&self, msg: &str) -> Error {
        Error::InvalidArgumentError(format!(
            "invalid type name {:?} at offset {}: {}",
            self.input, self.pos, msg
        ))
    }
}

fn scalar_from_name(name: &str) -> Option<TypeInfo> {
    let info = match name {
        "ascii" => TypeInfo::Ascii,
        "bigint" => TypeInfo::BigInt,
        "blob" => TypeInfo::Blob,
        "boolean" => TypeInfo::Boolean,
        "counter" => TypeInfo::Counter,
        "decimal" => TypeInfo::Decimal,
        "double" => TypeInfo::Double,
        "float" => TypeInfo::Float,
        "int" => TypeInfo::Int,
        "timestamp" => TypeInfo::Timestamp,
        "uuid" => TypeInfo::Uuid,
        "varchar" | "text" => TypeInfo::Varchar,
        "varint" => TypeInfo::Varint,
        "timeuuid" => TypeInfo::TimeUuid,
        "inet" => TypeInfo::Inet,
        _ => return None,
    };
    Some(info)
}
