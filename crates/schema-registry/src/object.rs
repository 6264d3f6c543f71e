/// A schema object (matching rule, attribute type, object class, …), uniquely named by `oid`
/// across both the overlay and bootstrap tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaObject {
    pub oid: String,
    pub names: Vec<String>,
    pub schema: String,
}

impl SchemaObject {
    pub fn new(oid: impl Into<String>, names: Vec<String>, schema: impl Into<String>) -> Self {
        Self {
            oid: oid.into(),
            names,
            schema: schema.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_with_owned_fields() {
        let obj = SchemaObject::new("2.5.4.3", vec!["cn".to_owned(), "commonName".to_owned()], "core");
        assert_eq!(obj.oid, "2.5.4.3");
        assert_eq!(obj.schema, "core");
        assert_eq!(obj.names.len(), 2);
    }
}
