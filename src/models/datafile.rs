//! Declarative data file for the sync command
//!
//! The data file is the local source of truth that `dircli sync` reconciles
//! the remote directory against. Top-level shape:
//!
//! ```yaml
//! groups:
//!   - name: admin
//!     type: user
//! users:
//!   - username: dave
//!     email: dave@example.com
//!     firstname: Dave
//!     lastname: Smith
//! ```
//!
//! Both YAML and JSON are accepted; the `.json` extension selects the JSON
//! parser, everything else is parsed as YAML.

use crate::error::{CliError, CliResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Parsed sync data file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SyncFile {
    #[serde(default)]
    pub groups: Vec<GroupEntry>,
    #[serde(default)]
    pub users: Vec<UserEntry>,
}

/// A group definition in the data file. `name` is the sole key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GroupEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: GroupKind,
}

/// Group flavor, matching the two group endpoints of the directory API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    User,
    System,
}

impl GroupKind {
    /// Wire-format type string used by remote group listings
    pub fn api_type(&self) -> &'static str {
        match self {
            GroupKind::User => "user_group",
            GroupKind::System => "system_group",
        }
    }

    /// Parse the wire-format type string from a remote listing
    pub fn from_api_type(s: &str) -> Option<Self> {
        match s {
            "user_group" => Some(GroupKind::User),
            "system_group" => Some(GroupKind::System),
            _ => None,
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKind::User => write!(f, "user"),
            GroupKind::System => write!(f, "system"),
        }
    }
}

/// A user definition in the data file. The key is the `(username, email)`
/// pair; `firstname`/`lastname` default to empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserEntry {
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
}

/// Load and parse a sync data file.
///
/// A missing required field (`name`/`type` on a group, `username`/`email` on
/// a user) fails here, before any remote call is made.
pub fn load_sync_file(path: &Path) -> CliResult<SyncFile> {
    if !path.exists() {
        return Err(CliError::Validation(format!(
            "File not found: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("Failed to read file {}: {}", path.display(), e)))?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        serde_json::from_str(&content)
            .map_err(|e| CliError::Validation(format!("Invalid JSON in {}: {}", path.display(), e)))
    } else {
        serde_yaml::from_str(&content).map_err(|e| {
            let location = if let Some(loc) = e.location() {
                format!(" at line {}, column {}", loc.line(), loc.column())
            } else {
                String::new()
            };
            CliError::Validation(format!(
                "Invalid YAML in {}{}: {}",
                path.display(),
                location,
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "data.yaml",
            r#"
groups:
  - name: admin
    type: user
  - name: build-agents
    type: system
users:
  - username: dave
    email: dave@example.com
    firstname: Dave
    lastname: Smith
"#,
        );

        let file = load_sync_file(&path).unwrap();
        assert_eq!(file.groups.len(), 2);
        assert_eq!(file.groups[0].name, "admin");
        assert_eq!(file.groups[0].kind, GroupKind::User);
        assert_eq!(file.groups[1].kind, GroupKind::System);
        assert_eq!(file.users.len(), 1);
        assert_eq!(file.users[0].username, "dave");
        assert_eq!(file.users[0].lastname, "Smith");
    }

    #[test]
    fn test_parse_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "data.json",
            r#"{
  "groups": [{"name": "admin", "type": "user"}],
  "users": [{"username": "dave", "email": "d@x.com"}]
}"#,
        );

        let file = load_sync_file(&path).unwrap();
        assert_eq!(file.groups.len(), 1);
        assert_eq!(file.users[0].email, "d@x.com");
        // firstname/lastname default to empty
        assert_eq!(file.users[0].firstname, "");
    }

    #[test]
    fn test_group_missing_type_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "data.yaml",
            r#"
groups:
  - name: admin
"#,
        );

        let result = load_sync_file(&path);
        assert!(matches!(result, Err(CliError::Validation(_))));
    }

    #[test]
    fn test_group_missing_name_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "data.yaml",
            r#"
groups:
  - type: user
"#,
        );

        assert!(load_sync_file(&path).is_err());
    }

    #[test]
    fn test_user_missing_email_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "data.yaml",
            r#"
users:
  - username: dave
"#,
        );

        assert!(load_sync_file(&path).is_err());
    }

    #[test]
    fn test_invalid_group_type_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "data.yaml",
            r#"
groups:
  - name: admin
    type: super
"#,
        );

        assert!(load_sync_file(&path).is_err());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "data.yaml", "groups: []\n");

        let file = load_sync_file(&path).unwrap();
        assert!(file.groups.is_empty());
        assert!(file.users.is_empty());
    }

    #[test]
    fn test_file_not_found() {
        let result = load_sync_file(Path::new("/nonexistent/data.yaml"));
        assert!(matches!(result, Err(CliError::Validation(_))));
    }

    #[test]
    fn test_group_kind_api_type_round_trip() {
        assert_eq!(GroupKind::User.api_type(), "user_group");
        assert_eq!(GroupKind::System.api_type(), "system_group");
        assert_eq!(GroupKind::from_api_type("user_group"), Some(GroupKind::User));
        assert_eq!(
            GroupKind::from_api_type("system_group"),
            Some(GroupKind::System)
        );
        assert_eq!(GroupKind::from_api_type("ldap_group"), None);
    }
}
