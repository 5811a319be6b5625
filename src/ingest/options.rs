//! Insertion options
//!
//! The immutable option set attached to every document a writer inserts:
//! quality, output collections, document format, and access permissions.
//! Built once per writer from configuration and shared read-only.

use serde::{Deserialize, Serialize};

use crate::config::LoaderConfig;
use crate::document::ContentType;
use crate::observability::Logger;

/// Access capability granted to a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Read,
    Insert,
    Update,
    Execute,
}

impl Capability {
    /// Parse a configuration keyword, case-insensitively
    pub fn parse(keyword: &str) -> Option<Capability> {
        match keyword.to_ascii_lowercase().as_str() {
            "read" => Some(Capability::Read),
            "insert" => Some(Capability::Insert),
            "update" => Some(Capability::Update),
            "execute" => Some(Capability::Execute),
            _ => None,
        }
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Read => "read",
            Capability::Insert => "insert",
            Capability::Update => "update",
            Capability::Execute => "execute",
        }
    }
}

/// One access-control entry attached to inserted documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub capability: Capability,
    pub role: String,
}

/// Document format the backend stores a document as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFormat {
    Xml,
    Text,
    Binary,
    None,
}

impl ContentFormat {
    /// Format implied by a configured content type
    pub fn from_content_type(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Xml => ContentFormat::Xml,
            ContentType::Text => ContentFormat::Text,
            ContentType::Binary => ContentFormat::Binary,
            ContentType::Unknown => ContentFormat::None,
        }
    }
}

/// Immutable per-writer insertion options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertOptions {
    pub quality: i32,
    pub collections: Vec<String>,
    pub format: ContentFormat,
    pub permissions: Vec<Permission>,
}

impl Default for InsertOptions {
    fn default() -> Self {
        Self {
            quality: 0,
            collections: Vec::new(),
            format: ContentFormat::Xml,
            permissions: Vec::new(),
        }
    }
}

impl InsertOptions {
    /// Build the option set a writer attaches to every insert.
    ///
    /// Collection names are trimmed; the permission token list is parsed
    /// pairwise. Malformed pairs are logged and skipped, never fatal.
    pub fn from_config(config: &LoaderConfig) -> Self {
        Self {
            quality: config.output_quality,
            collections: config
                .output_collections
                .iter()
                .map(|c| c.trim().to_string())
                .collect(),
            format: ContentFormat::from_content_type(config.content_type),
            permissions: parse_permission_tokens(&config.output_permissions),
        }
    }
}

/// Parse an alternating role/capability token list into permissions.
///
/// An odd trailing token has no capability and is ignored. A pair with an
/// empty role or an unrecognized capability keyword is logged at WARN and
/// skipped as a whole, so the remaining tokens stay aligned.
pub fn parse_permission_tokens(tokens: &[String]) -> Vec<Permission> {
    let mut permissions = Vec::new();

    for pair in tokens.chunks_exact(2) {
        let role = &pair[0];
        let keyword = pair[1].trim();

        if role.is_empty() {
            Logger::warn("PERMISSION_ROLE_EMPTY", &[("capability", keyword)]);
            continue;
        }

        match Capability::parse(keyword) {
            Some(capability) => permissions.push(Permission {
                capability,
                role: role.clone(),
            }),
            None => {
                Logger::warn(
                    "PERMISSION_UNKNOWN_CAPABILITY",
                    &[("role", role), ("capability", keyword)],
                );
            }
        }
    }

    permissions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_well_formed_pairs() {
        let permissions =
            parse_permission_tokens(&tokens(&["editor", "update", "reader", "read"]));

        assert_eq!(
            permissions,
            vec![
                Permission {
                    capability: Capability::Update,
                    role: "editor".to_string()
                },
                Permission {
                    capability: Capability::Read,
                    role: "reader".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_capability_keyword_is_case_insensitive() {
        let permissions = parse_permission_tokens(&tokens(&["admin", "EXECUTE"]));
        assert_eq!(permissions[0].capability, Capability::Execute);
    }

    #[test]
    fn test_odd_trailing_token_ignored() {
        let permissions = parse_permission_tokens(&tokens(&["reader", "read", "dangling"]));
        assert_eq!(permissions.len(), 1);
    }

    #[test]
    fn test_unknown_capability_skipped() {
        let permissions =
            parse_permission_tokens(&tokens(&["reader", "publish", "editor", "insert"]));

        assert_eq!(permissions.len(), 1);
        assert_eq!(permissions[0].role, "editor");
        assert_eq!(permissions[0].capability, Capability::Insert);
    }

    #[test]
    fn test_empty_role_skips_whole_pair() {
        let permissions = parse_permission_tokens(&tokens(&["", "read", "editor", "update"]));

        // The pair is consumed together, so "read" never becomes a role.
        assert_eq!(permissions.len(), 1);
        assert_eq!(permissions[0].role, "editor");
    }

    #[test]
    fn test_options_from_config() {
        use crate::config::LoaderConfig;
        use crate::document::ContentType;

        let config = LoaderConfig {
            output_collections: tokens(&[" alpha ", "beta"]),
            output_permissions: tokens(&["reader", "read"]),
            output_quality: 7,
            content_type: ContentType::Binary,
            ..LoaderConfig::default()
        };

        let options = InsertOptions::from_config(&config);
        assert_eq!(options.collections, vec!["alpha", "beta"]);
        assert_eq!(options.quality, 7);
        assert_eq!(options.format, ContentFormat::Binary);
        assert_eq!(options.permissions.len(), 1);
    }

    #[test]
    fn test_default_quality_is_zero() {
        assert_eq!(InsertOptions::default().quality, 0);
    }

    #[test]
    fn test_format_mapping() {
        use crate::document::ContentType;
        assert_eq!(
            ContentFormat::from_content_type(ContentType::Xml),
            ContentFormat::Xml
        );
        assert_eq!(
            ContentFormat::from_content_type(ContentType::Unknown),
            ContentFormat::None
        );
    }
}
