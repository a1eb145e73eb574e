// Request option types.
// Optional fields serialize only when set, so a PATCH body carries exactly
// the properties the caller supplied.

use serde::Serialize;

/// Properties that can be changed on a repository.
///
/// Every field is independently optional; unset fields are omitted from the
/// request body entirely, leaving the server-side value untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RepositoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_projects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_unset_fields_are_omitted() {
        let update = RepositoryUpdate {
            description: Some("new description".to_string()),
            has_wiki: Some(false),
            ..Default::default()
        };

        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(
            value,
            json!({"description": "new description", "has_wiki": false})
        );
    }

    #[test]
    fn test_default_serializes_to_empty_object() {
        let value = serde_json::to_value(RepositoryUpdate::default()).unwrap();
        assert_eq!(value, json!({}));
    }
}
