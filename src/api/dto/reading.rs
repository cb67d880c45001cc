use serde::{Deserialize, Serialize};

use crate::domain::{Link, LinkGroup};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// `group_id: None` moves the link out of every group.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveLinkRequest {
    #[serde(default)]
    pub group_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupView {
    pub id: String,
    pub name: String,
    pub links: Vec<Link>,
}

impl GroupView {
    pub fn from_group(group: LinkGroup, links: &[Link]) -> Self {
        let member_links = group
            .link_ids
            .iter()
            .filter_map(|id| links.iter().find(|l| &l.id == id).cloned())
            .collect();
        Self {
            id: group.id,
            name: group.name,
            links: member_links,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingListResponse {
    pub groups: Vec<GroupView>,
    pub ungrouped: Vec<Link>,
}
