use serde::{Deserialize, Serialize};

/// A customer record. `id` is chosen by the caller and doubles as the store key.
///
/// Wire shape is `{"id", "nome", "email"}`; absent fields decode as empty
/// strings and unknown fields are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "nome")]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), email: email.into() }
    }

    /// Overwrite the mutable fields; `id` never changes after creation.
    pub fn apply(&mut self, update: CustomerUpdate) {
        self.name = update.name;
        self.email = update.email;
    }
}

/// The part of a customer an update may replace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerUpdate {
    pub name: String,
    pub email: String,
}

/// Update bodies carry a full customer shape; only name and email are used.
impl From<Customer> for CustomerUpdate {
    fn from(c: Customer) -> Self {
        Self { name: c.name, email: c.email }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_uses_nome() -> Result<(), anyhow::Error> {
        let c = Customer::new("1", "Ana", "ana@example.com");
        let v = serde_json::to_value(&c)?;
        assert_eq!(v, serde_json::json!({"id": "1", "nome": "Ana", "email": "ana@example.com"}));
        Ok(())
    }

    #[test]
    fn missing_and_unknown_fields_tolerated() -> Result<(), anyhow::Error> {
        let c: Customer = serde_json::from_str(r#"{"id":"7","extra":true}"#)?;
        assert_eq!(c, Customer::new("7", "", ""));
        Ok(())
    }

    #[test]
    fn apply_keeps_id() {
        let mut c = Customer::new("1", "Ana", "a@x");
        c.apply(Customer::new("other", "Bia", "b@x").into());
        assert_eq!(c, Customer::new("1", "Bia", "b@x"));
    }
}
