use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::{Map, Value};

/// Property value inside a JSON-LD node.
///
/// `Undefined` marks a property whose source field was absent. It is kept in the node
/// (so nested nodes retain their full key set) but never written out.
#[derive(Debug, Clone, PartialEq)]
pub enum LdValue {
    Undefined,
    Json(Value),
    Node(LdObject),
}

impl LdValue {
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    pub fn as_node(&self) -> Option<&LdObject> {
        match self {
            Self::Node(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_json().and_then(Value::as_str)
    }

    fn to_json(&self) -> Option<Value> {
        match self {
            Self::Undefined => None,
            Self::Json(value) => Some(value.clone()),
            Self::Node(node) => Some(node.to_json()),
        }
    }
}

impl From<Value> for LdValue {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<&str> for LdValue {
    fn from(value: &str) -> Self {
        Self::Json(Value::String(value.to_string()))
    }
}

impl From<String> for LdValue {
    fn from(value: String) -> Self {
        Self::Json(Value::String(value))
    }
}

impl From<LdObject> for LdValue {
    fn from(node: LdObject) -> Self {
        Self::Node(node)
    }
}

impl<T> From<Option<T>> for LdValue
where
    T: Into<LdValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Undefined, Into::into)
    }
}

/// Ordered JSON-LD node; properties keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LdObject {
    properties: IndexMap<String, LdValue>,
}

impl LdObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Node with `@type` set as its first property.
    pub fn typed(ld_type: &str) -> Self {
        Self::new().with("@type", ld_type)
    }

    pub fn with(mut self, key: &str, value: impl Into<LdValue>) -> Self {
        self.properties.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&LdValue> {
        self.properties.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn ld_type(&self) -> Option<&str> {
        self.get("@type").and_then(LdValue::as_str)
    }

    /// Drops `Undefined` properties of this node only; nested nodes are left untouched.
    pub fn prune_undefined(&mut self) {
        self.properties.retain(|_, value| !value.is_undefined());
    }

    pub fn has_undefined(&self) -> bool {
        self.properties.values().any(LdValue::is_undefined)
    }

    /// Plain JSON rendering; `Undefined` properties are omitted at every depth.
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .properties
            .iter()
            .filter_map(|(key, value)| value.to_json().map(|json| (key.clone(), json)))
            .collect();
        Value::Object(map)
    }
}

impl Serialize for LdValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Undefined => serializer.serialize_unit(),
            Self::Json(value) => value.serialize(serializer),
            Self::Node(node) => node.serialize(serializer),
        }
    }
}

impl Serialize for LdObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let defined = self
            .properties
            .iter()
            .filter(|(_, value)| !value.is_undefined());
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in defined {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pruning_is_shallow() {
        let mut node = LdObject::typed("Organization")
            .with("name", Some("Acme"))
            .with("legalName", None::<&str>)
            .with(
                "contactPoint",
                LdObject::typed("ContactPoint")
                    .with("email", Some("hi@acme.com"))
                    .with("telephone", None::<&str>),
            );

        node.prune_undefined();

        assert!(!node.contains_key("legalName"));
        let contact = node
            .get("contactPoint")
            .and_then(LdValue::as_node)
            .expect("contact point kept");
        assert!(contact.contains_key("telephone"));
        assert!(contact.has_undefined());
    }

    #[test]
    fn serialization_skips_undefined_at_every_depth() {
        let node = LdObject::typed("Thing")
            .with("name", None::<String>)
            .with("child", LdObject::typed("Thing").with("url", None::<&str>));

        let json = serde_json::to_value(&node).expect("serializes");
        assert_eq!(json, json!({"@type": "Thing", "child": {"@type": "Thing"}}));
        assert_eq!(node.to_json(), json);
    }
}
