use serde_json::{Map, Value as JsonValue};

/// Read-only view over a markup node's `styles` object
///
/// Properties are looked up by their CSS name (`flex-direction`); the
/// camelCase spelling produced by DOM extraction (`flexDirection`) is found
/// too.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleBag<'a> {
    map: Option<&'a Map<String, JsonValue>>,
}

impl<'a> StyleBag<'a> {
    /// Style bag of an input node, empty when it has none
    pub fn of(node: &'a JsonValue) -> Self {
        Self {
            map: node.get("styles").and_then(|v| v.as_object()),
        }
    }

    pub fn is_present(&self) -> bool {
        self.map.is_some()
    }

    pub fn get(&self, property: &str) -> Option<&'a JsonValue> {
        let map = self.map?;
        map.get(property)
            .or_else(|| map.get(&kebab_to_camel(property)))
            .filter(|v| !v.is_null())
    }

    /// String value of a property, numbers are not converted
    pub fn get_str(&self, property: &str) -> Option<&'a str> {
        self.get(property).and_then(|v| v.as_str())
    }

    /// First property present among `properties`
    pub fn first_of(&self, properties: &[&str]) -> Option<&'a JsonValue> {
        properties.iter().find_map(|property| self.get(property))
    }
}

/// `background-color` -> `backgroundColor`
fn kebab_to_camel(property: &str) -> String {
    let mut camel = String::with_capacity(property.len());
    let mut upper_next = false;
    for c in property.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            camel.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            camel.push(c);
        }
    }
    camel
}
