//! app.json descriptor model
//!
//! The host reads an `app.json` next to the plugin library describing its
//! identity, the events it handles and the API permissions it wants granted.
//! The `cqcfg` binary generates that file from a `cqplug.yaml` manifest; the
//! model lives here so the tool and tests share one definition.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ManifestError;
use crate::ffi::{API_VERSION, ENABLE_EVENT_SYMBOL};

/// API permissions, with the host's numeric ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Auth {
    GetCookies,
    GetRecord,
    SendGroupMsg,
    SendDiscussMsg,
    SendPrivateMsg,
    SendLike,
    SetGroupKick,
    SetGroupBan,
    SetGroupAdmin,
    SetGroupWholeBan,
    SetGroupAnonymousBan,
    SetGroupAnonymous,
    SetGroupCard,
    SetGroupLeave,
    SetGroupSpecialTitle,
    GetGroupMemberInfo,
    GetStrangerInfo,
    SetDiscussLeave,
    SetFriendAddRequest,
    SetGroupAddRequest,
    GetGroupMemberList,
    GetGroupList,
    DeleteMsg,
}

impl Auth {
    /// Numeric id the host expects in the `auth` array.
    pub fn id(&self) -> i32 {
        match self {
            Auth::GetCookies => 20,
            Auth::GetRecord => 30,
            Auth::SendGroupMsg => 101,
            Auth::SendDiscussMsg => 103,
            Auth::SendPrivateMsg => 106,
            Auth::SendLike => 110,
            Auth::SetGroupKick => 120,
            Auth::SetGroupBan => 121,
            Auth::SetGroupAdmin => 122,
            Auth::SetGroupWholeBan => 123,
            Auth::SetGroupAnonymousBan => 124,
            Auth::SetGroupAnonymous => 125,
            Auth::SetGroupCard => 126,
            Auth::SetGroupLeave => 127,
            Auth::SetGroupSpecialTitle => 128,
            Auth::GetGroupMemberInfo => 130,
            Auth::GetStrangerInfo => 131,
            Auth::SetDiscussLeave => 140,
            Auth::SetFriendAddRequest => 150,
            Auth::SetGroupAddRequest => 151,
            Auth::GetGroupMemberList => 160,
            Auth::GetGroupList => 161,
            Auth::DeleteMsg => 180,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Auth::GetCookies => "get-cookies",
            Auth::GetRecord => "get-record",
            Auth::SendGroupMsg => "send-group-msg",
            Auth::SendDiscussMsg => "send-discuss-msg",
            Auth::SendPrivateMsg => "send-private-msg",
            Auth::SendLike => "send-like",
            Auth::SetGroupKick => "set-group-kick",
            Auth::SetGroupBan => "set-group-ban",
            Auth::SetGroupAdmin => "set-group-admin",
            Auth::SetGroupWholeBan => "set-group-whole-ban",
            Auth::SetGroupAnonymousBan => "set-group-anonymous-ban",
            Auth::SetGroupAnonymous => "set-group-anonymous",
            Auth::SetGroupCard => "set-group-card",
            Auth::SetGroupLeave => "set-group-leave",
            Auth::SetGroupSpecialTitle => "set-group-special-title",
            Auth::GetGroupMemberInfo => "get-group-member-info",
            Auth::GetStrangerInfo => "get-stranger-info",
            Auth::SetDiscussLeave => "set-discuss-leave",
            Auth::SetFriendAddRequest => "set-friend-add-request",
            Auth::SetGroupAddRequest => "set-group-add-request",
            Auth::GetGroupMemberList => "get-group-member-list",
            Auth::GetGroupList => "get-group-list",
            Auth::DeleteMsg => "delete-msg",
        }
    }

    /// Every permission, in id order.
    pub fn all() -> &'static [Auth] {
        &[
            Auth::GetCookies,
            Auth::GetRecord,
            Auth::SendGroupMsg,
            Auth::SendDiscussMsg,
            Auth::SendPrivateMsg,
            Auth::SendLike,
            Auth::SetGroupKick,
            Auth::SetGroupBan,
            Auth::SetGroupAdmin,
            Auth::SetGroupWholeBan,
            Auth::SetGroupAnonymousBan,
            Auth::SetGroupAnonymous,
            Auth::SetGroupCard,
            Auth::SetGroupLeave,
            Auth::SetGroupSpecialTitle,
            Auth::GetGroupMemberInfo,
            Auth::GetStrangerInfo,
            Auth::SetDiscussLeave,
            Auth::SetFriendAddRequest,
            Auth::SetGroupAddRequest,
            Auth::GetGroupMemberList,
            Auth::GetGroupList,
            Auth::DeleteMsg,
        ]
    }
}

impl FromStr for Auth {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Auth::all()
            .iter()
            .copied()
            .find(|auth| auth.as_str() == s)
            .ok_or_else(|| ManifestError::UnknownAuth(s.to_string()))
    }
}

/// A `major.minor.patch:sequence` plugin version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub version: String,
    pub version_id: i32,
}

impl FromStr for Version {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || ManifestError::InvalidVersion(s.to_string());
        let (version, seq) = s.split_once(':').ok_or_else(bad)?;
        let parts: Vec<&str> = version.split('.').collect();
        if parts.len() != 3 || parts.iter().any(|p| p.parse::<u32>().is_err()) {
            return Err(bad());
        }
        let version_id = seq.parse::<i32>().map_err(|_| bad())?;
        Ok(Version {
            version: version.to_string(),
            version_id,
        })
    }
}

/// One entry of the descriptor's event table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEntry {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: i32,
    pub name: String,
    pub function: String,
    pub priority: i32,
}

impl EventEntry {
    /// The enable notification, wired to the exported `EVENT_ON_ENABLE`.
    pub fn enable() -> Self {
        EventEntry {
            id: 1,
            kind: 1003,
            name: "enable".to_string(),
            function: ENABLE_EVENT_SYMBOL.to_string(),
            priority: 30000,
        }
    }
}

/// The `app.json` document the host consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppJson {
    pub ret: i32,
    pub apiver: i32,
    pub name: String,
    pub version: String,
    pub version_id: i32,
    pub author: String,
    pub description: String,
    pub event: Vec<EventEntry>,
    pub status: Vec<serde_json::Value>,
    pub auth: Vec<i32>,
}

/// Plugin manifest read by `cqcfg`.
///
/// Permissions are declared explicitly here rather than recovered by scanning
/// the plugin's sources.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Manifest {
    /// Application id, reverse-domain style.
    pub app_id: String,

    /// Human-readable plugin name.
    pub name: String,

    /// `major.minor.patch:sequence` version string.
    pub version: String,

    pub author: Option<String>,

    pub description: Option<String>,

    /// Permission names, see [`Auth::as_str`].
    #[serde(default)]
    pub auth: Vec<String>,
}

impl Manifest {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Build the descriptor. `extra_seq` is added to the sequence version
    /// (the `-c` commit-count mode of `cqcfg`).
    pub fn to_app_json(&self, extra_seq: i32) -> Result<AppJson, ManifestError> {
        let version: Version = self.version.parse()?;

        let mut auth = Vec::with_capacity(self.auth.len());
        for name in &self.auth {
            auth.push(name.parse::<Auth>()?.id());
        }
        auth.sort_unstable();
        auth.dedup();

        Ok(AppJson {
            ret: 1,
            apiver: API_VERSION,
            name: self.name.clone(),
            version: version.version,
            version_id: version.version_id + extra_seq,
            author: self.author.clone().unwrap_or_default(),
            description: self.description.clone().unwrap_or_default(),
            event: vec![EventEntry::enable()],
            status: Vec::new(),
            auth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> Manifest {
        Manifest {
            app_id: "rs.example.demo".into(),
            name: "Demo".into(),
            version: "1.2.3:4".into(),
            author: Some("someone".into()),
            description: Some("demo plugin".into()),
            auth: vec![
                "send-group-msg".into(),
                "send-private-msg".into(),
                "send-group-msg".into(),
            ],
        }
    }

    #[test]
    fn version_parses_both_halves() {
        let v: Version = "1.0.0:12".parse().unwrap();
        assert_eq!(v.version, "1.0.0");
        assert_eq!(v.version_id, 12);
    }

    #[test]
    fn version_rejects_malformed_input() {
        for bad in ["1.0.0", "1.0:1", "a.b.c:1", "1.0.0:x", ""] {
            assert!(
                bad.parse::<Version>().is_err(),
                "`{bad}` should not parse"
            );
        }
    }

    #[test]
    fn auth_names_round_trip() {
        for auth in Auth::all() {
            assert_eq!(auth.as_str().parse::<Auth>().unwrap(), *auth);
        }
    }

    #[test]
    fn auth_ids_are_unique() {
        let mut ids: Vec<i32> = Auth::all().iter().map(Auth::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Auth::all().len());
    }

    #[test]
    fn unknown_auth_name_is_an_error() {
        let err = "launch-missiles".parse::<Auth>().unwrap_err();
        assert!(err.to_string().contains("launch-missiles"));
    }

    #[test]
    fn app_json_carries_the_enable_event() {
        let app = manifest().to_app_json(0).unwrap();
        assert_eq!(app.ret, 1);
        assert_eq!(app.apiver, 9);
        assert_eq!(app.event.len(), 1);
        assert_eq!(app.event[0].function, "EVENT_ON_ENABLE");
        assert_eq!(app.event[0].kind, 1003);
        // sorted, deduplicated ids
        assert_eq!(app.auth, vec![101, 106]);
    }

    #[test]
    fn app_json_serializes_event_type_field() {
        let app = manifest().to_app_json(2).unwrap();
        assert_eq!(app.version_id, 6);
        let value = serde_json::to_value(&app).unwrap();
        assert_eq!(value["event"][0]["type"], 1003);
        assert_eq!(value["version"], "1.2.3");
    }

    #[test]
    fn manifest_parses_kebab_case_yaml() {
        let yaml = "\
app-id: rs.example.demo
name: Demo
version: \"0.1.0:1\"
auth:
  - delete-msg
";
        let m: Manifest = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(m.app_id, "rs.example.demo");
        assert!(m.author.is_none());
        assert_eq!(m.to_app_json(0).unwrap().auth, vec![180]);
    }
}
