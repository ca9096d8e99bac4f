use serde::{Deserialize, Serialize};

/// A single company record as returned by the directory endpoint.
///
/// Records are immutable once fetched — the client never mutates them,
/// it only derives filtered views over the full collection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Company {
    /// Unique, stable identifier assigned by the data source.
    pub id: u64,
    pub name: String,
    pub industry: String,
    pub location: String,
    pub employees: u32,
    /// Founding year.
    pub founded: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_deserializes_full_record() {
        let json = r#"{
            "id": 1,
            "name": "Acme",
            "industry": "Tech",
            "location": "NY",
            "employees": 120,
            "founded": 2001,
            "description": "Widgets at scale",
            "website": "https://acme.example"
        }"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert_eq!(company.name, "Acme");
        assert_eq!(company.founded, 2001);
        assert_eq!(company.website.as_deref(), Some("https://acme.example"));
    }

    #[test]
    fn test_company_optional_fields_default_to_none() {
        let json = r#"{
            "id": 2,
            "name": "Beta",
            "industry": "Retail",
            "location": "LA",
            "employees": 40,
            "founded": 1999
        }"#;
        let company: Company = serde_json::from_str(json).unwrap();
        assert!(company.description.is_none());
        assert!(company.website.is_none());
    }

    #[test]
    fn test_company_rejects_malformed_record() {
        // A record missing required fields is a contract violation, not a default
        let json = r#"{"id": 3, "name": "Gamma"}"#;
        assert!(serde_json::from_str::<Company>(json).is_err());
    }
}
