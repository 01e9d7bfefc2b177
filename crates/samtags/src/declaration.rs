//! Declarations of locally-defined SAM tags.
//!
//! A declaration is a named, ordered set of members, each pairing a member
//! name with a tag value, e.g. every tag emitted by one tool. Declarations are
//! built either in code with [`TagDeclarationBuilder`] or from JSON:
//!
//! ```json
//! {
//!   "name": "UmiTag",
//!   "members": { "RAW": "xr", "CONSENSUS": "xc" },
//!   "config": { "strict": true }
//! }
//! ```
//!
//! Building a declaration checks only its structure. Tag content is checked by
//! the [`validator`](crate::validator).

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Result, SamTagError};

/// One member of a tag declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagMember {
    /// Member name (the enumeration variant).
    pub name: String,
    /// Declared tag value.
    pub value: String,
}

/// Per-declaration overrides of the validator configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeclarationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permit_standard_collisions: Option<bool>,
}

/// A named, ordered group of locally-defined SAM tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagDeclaration {
    name: String,
    members: Vec<TagMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<DeclarationOptions>,
}

impl TagDeclaration {
    /// Start building a declaration with the given name.
    pub fn builder(name: impl Into<String>) -> TagDeclarationBuilder {
        TagDeclarationBuilder {
            name: name.into(),
            members: Vec::new(),
            options: None,
        }
    }

    /// Declaration name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in declaration order.
    pub fn members(&self) -> &[TagMember] {
        &self.members
    }

    /// Configuration overrides attached to this declaration, if any.
    pub fn options(&self) -> Option<&DeclarationOptions> {
        self.options.as_ref()
    }

    /// Look up a member by name.
    pub fn get(&self, member: &str) -> Option<&TagMember> {
        self.members.iter().find(|m| m.name == member)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True if the declaration has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Build a declaration from a loosely-typed JSON document.
    ///
    /// Fails with [`SamTagError::NotAnEnumeration`] unless the document is an
    /// object with a string `name` and an object `members`, and with
    /// [`SamTagError::NotStringValued`] if any member value is not a string.
    ///
    /// A [`Value`] cannot hold repeated object keys. Use [`parse_all`] on the
    /// raw text to have a member name given twice rejected.
    ///
    /// [`parse_all`]: TagDeclaration::parse_all
    pub fn from_json_value(value: &Value) -> Result<Self> {
        Self::from_node(&JsonNode::from(value))
    }

    /// Parse one declaration, or an array of them, from JSON text.
    ///
    /// Every entry of a `members` object is kept, so a member name that
    /// appears twice fails with [`SamTagError::NotAnEnumeration`] instead of
    /// the later entry silently replacing the earlier one.
    pub fn parse_all(json: &str) -> Result<Vec<Self>> {
        let node: JsonNode = serde_json::from_str(json)?;
        match node {
            JsonNode::Array(items) => items.iter().map(Self::from_node).collect(),
            other => Ok(vec![Self::from_node(&other)?]),
        }
    }

    fn from_node(node: &JsonNode) -> Result<Self> {
        let JsonNode::Object(_) = node else {
            return Err(not_an_enumeration(
                "<anonymous>",
                format!("expected an object, found {}", node.kind()),
            ));
        };

        let name = match node.get("name") {
            Some(JsonNode::Scalar(Value::String(name))) => name.clone(),
            Some(other) => {
                return Err(not_an_enumeration(
                    "<anonymous>",
                    format!("'name' must be a string, found {}", other.kind()),
                ));
            }
            None => return Err(not_an_enumeration("<anonymous>", "missing 'name'")),
        };

        let members = match node.get("members") {
            Some(JsonNode::Object(members)) => members,
            Some(other) => {
                return Err(not_an_enumeration(
                    &name,
                    format!(
                        "'members' must map member names to tag values, found {}",
                        other.kind()
                    ),
                ));
            }
            None => return Err(not_an_enumeration(&name, "missing 'members'")),
        };

        let mut builder = TagDeclaration::builder(name.clone());
        for (member, value) in members {
            match value {
                JsonNode::Scalar(Value::String(tag)) => {
                    builder = builder.member(member.clone(), tag.clone());
                }
                other => {
                    return Err(SamTagError::NotStringValued {
                        declaration: name,
                        member: member.clone(),
                        found: other.kind().to_string(),
                    });
                }
            }
        }

        if let Some(config) = node.get("config") {
            let options: DeclarationOptions = serde_json::from_value(config.to_value())?;
            builder = builder.options(options);
        }

        builder.build()
    }
}

/// Load every declaration in a JSON file.
pub fn load_declarations(path: impl AsRef<Path>) -> Result<Vec<TagDeclaration>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| SamTagError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    TagDeclaration::parse_all(&json)
}

/// Builder for [`TagDeclaration`].
#[derive(Debug, Clone)]
pub struct TagDeclarationBuilder {
    name: String,
    members: Vec<TagMember>,
    options: Option<DeclarationOptions>,
}

impl TagDeclarationBuilder {
    /// Append a member.
    pub fn member(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push(TagMember {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Attach configuration overrides.
    pub fn options(mut self, options: DeclarationOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Finish the declaration. Member names must be unique.
    pub fn build(self) -> Result<TagDeclaration> {
        let mut seen = HashSet::new();
        for member in &self.members {
            if !seen.insert(member.name.as_str()) {
                return Err(not_an_enumeration(
                    &self.name,
                    format!("member name '{}' is declared more than once", member.name),
                ));
            }
        }

        Ok(TagDeclaration {
            name: self.name,
            members: self.members,
            options: self.options,
        })
    }
}

fn not_an_enumeration(declaration: &str, reason: impl Into<String>) -> SamTagError {
    SamTagError::NotAnEnumeration {
        declaration: declaration.to_string(),
        reason: reason.into(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// JSON document that keeps every object entry, repeated keys included.
#[derive(Debug, Clone, PartialEq)]
enum JsonNode {
    Object(Vec<(String, JsonNode)>),
    Array(Vec<JsonNode>),
    Scalar(Value),
}

impl JsonNode {
    /// Value of `key`. The last entry wins, as in a [`serde_json::Map`].
    fn get(&self, key: &str) -> Option<&JsonNode> {
        match self {
            JsonNode::Object(entries) => entries
                .iter()
                .rev()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            JsonNode::Object(_) => "an object",
            JsonNode::Array(_) => "an array",
            JsonNode::Scalar(value) => json_kind(value),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            JsonNode::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_value()))
                    .collect(),
            ),
            JsonNode::Array(items) => Value::Array(items.iter().map(JsonNode::to_value).collect()),
            JsonNode::Scalar(value) => value.clone(),
        }
    }
}

impl From<&Value> for JsonNode {
    fn from(value: &Value) -> Self {
        match value {
            Value::Object(map) => JsonNode::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), JsonNode::from(v)))
                    .collect(),
            ),
            Value::Array(items) => JsonNode::Array(items.iter().map(JsonNode::from).collect()),
            scalar => JsonNode::Scalar(scalar.clone()),
        }
    }
}

impl<'de> Deserialize<'de> for JsonNode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(JsonNodeVisitor)
    }
}

struct JsonNodeVisitor;

impl<'de> Visitor<'de> for JsonNodeVisitor {
    type Value = JsonNode;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::Scalar(Value::Bool(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::Scalar(Value::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::Scalar(Value::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::Scalar(Value::from(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::Scalar(Value::String(v.to_owned())))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::Scalar(Value::String(v)))
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::Scalar(Value::Null))
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<JsonNode, E> {
        Ok(JsonNode::Scalar(Value::Null))
    }

    fn visit_some<D>(self, deserializer: D) -> std::result::Result<JsonNode, D::Error>
    where
        D: Deserializer<'de>,
    {
        JsonNode::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> std::result::Result<JsonNode, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(JsonNode::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<JsonNode, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::new();
        while let Some((key, value)) = map.next_entry::<String, JsonNode>()? {
            entries.push((key, value));
        }
        Ok(JsonNode::Object(entries))
    }
}
