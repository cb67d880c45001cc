use url::Url;
use uuid::Uuid;

use crate::api::dto::{
    CreateGroupRequest, CreateLinkRequest, GroupView, MoveLinkRequest, ReadingListResponse,
    UpdateLinkRequest,
};
use crate::domain::{Link, LinkGroup, StudBudError};
use crate::storage::Store;

/// Reading-list mutations: links and their optional owning groups.
pub struct ReadingService;

impl ReadingService {
    fn validate_url(raw: &str) -> Result<(), StudBudError> {
        Url::parse(raw)
            .map(|_| ())
            .map_err(|e| StudBudError::BadRequest(format!("Invalid URL '{}': {}", raw, e)))
    }

    // ── Link CRUD ──────────────────────────────────────────────

    /// Rejects before any state change when the URL does not parse. A missing
    /// title falls back to the URL itself.
    pub fn create_link(store: &Store, req: CreateLinkRequest) -> Result<Link, StudBudError> {
        Self::validate_url(&req.url)?;

        let mut groups = store.link_groups()?;
        let link = Link {
            id: Uuid::new_v4().to_string(),
            title: match req.title {
                Some(t) if !t.trim().is_empty() => t,
                _ => req.url.clone(),
            },
            url: req.url,
            group_id: req.group_id,
        };

        if let Some(group_id) = &link.group_id {
            let group = groups
                .iter_mut()
                .find(|g| &g.id == group_id)
                .ok_or_else(|| StudBudError::NotFound(format!("Group not found: {}", group_id)))?;
            group.link_ids.push(link.id.clone());
        }

        let mut links = store.links()?;
        links.push(link.clone());

        store.save_links(&links)?;
        if link.group_id.is_some() {
            store.save_link_groups(&groups)?;
        }
        Ok(link)
    }

    pub fn update_link(
        store: &Store,
        id: &str,
        req: UpdateLinkRequest,
    ) -> Result<Link, StudBudError> {
        if let Some(url) = &req.url {
            Self::validate_url(url)?;
        }

        let mut links = store.links()?;
        let link = links
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| StudBudError::NotFound(format!("Link not found: {}", id)))?;

        if let Some(url) = req.url {
            link.url = url;
        }
        if let Some(title) = req.title {
            link.title = title;
        }
        let updated = link.clone();

        store.save_links(&links)?;
        Ok(updated)
    }

    /// Removes the link and strips its id from every group's ordered list.
    pub fn delete_link(store: &Store, id: &str) -> Result<(), StudBudError> {
        let mut links = store.links()?;
        let before = links.len();
        links.retain(|l| l.id != id);
        if links.len() == before {
            return Err(StudBudError::NotFound(format!("Link not found: {}", id)));
        }

        let mut groups = store.link_groups()?;
        for group in &mut groups {
            group.link_ids.retain(|link_id| link_id != id);
        }

        store.save_links(&links)?;
        store.save_link_groups(&groups)?;
        Ok(())
    }

    /// Reassigns a link's group and resynchronizes every group's ordered
    /// list: the id is removed wherever it no longer belongs and appended to
    /// the new owner if absent. `group_id: None` leaves the link ungrouped.
    pub fn move_link(
        store: &Store,
        id: &str,
        req: MoveLinkRequest,
    ) -> Result<Link, StudBudError> {
        let mut groups = store.link_groups()?;
        if let Some(group_id) = &req.group_id {
            if !groups.iter().any(|g| &g.id == group_id) {
                return Err(StudBudError::NotFound(format!(
                    "Group not found: {}",
                    group_id
                )));
            }
        }

        let mut links = store.links()?;
        let link = links
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| StudBudError::NotFound(format!("Link not found: {}", id)))?;
        link.group_id = req.group_id;
        let updated = link.clone();

        for group in &mut groups {
            let owns = updated.group_id.as_deref() == Some(group.id.as_str());
            if owns {
                if !group.link_ids.iter().any(|link_id| link_id == id) {
                    group.link_ids.push(id.to_string());
                }
            } else {
                group.link_ids.retain(|link_id| link_id != id);
            }
        }

        store.save_links(&links)?;
        store.save_link_groups(&groups)?;
        Ok(updated)
    }

    // ── Group operations ───────────────────────────────────────

    pub fn create_group(
        store: &Store,
        req: CreateGroupRequest,
    ) -> Result<LinkGroup, StudBudError> {
        if req.name.trim().is_empty() {
            return Err(StudBudError::BadRequest("Group name is required".into()));
        }

        let mut groups = store.link_groups()?;
        let group = LinkGroup {
            id: Uuid::new_v4().to_string(),
            name: req.name,
            link_ids: Vec::new(),
        };
        groups.push(group.clone());
        store.save_link_groups(&groups)?;
        Ok(group)
    }

    /// Ungroups every member link first, then removes the group, so no link
    /// is left referencing a group that no longer exists.
    pub fn delete_group(store: &Store, id: &str) -> Result<(), StudBudError> {
        let mut groups = store.link_groups()?;
        let before = groups.len();
        groups.retain(|g| g.id != id);
        if groups.len() == before {
            return Err(StudBudError::NotFound(format!("Group not found: {}", id)));
        }

        let mut links = store.links()?;
        for link in &mut links {
            if link.group_id.as_deref() == Some(id) {
                link.group_id = None;
            }
        }

        store.save_links(&links)?;
        store.save_link_groups(&groups)?;
        Ok(())
    }

    pub fn get_reading_list(store: &Store) -> Result<ReadingListResponse, StudBudError> {
        let links = store.links()?;
        let groups = store.link_groups()?;

        let ungrouped = links
            .iter()
            .filter(|l| l.group_id.is_none())
            .cloned()
            .collect();
        let groups = groups
            .into_iter()
            .map(|g| GroupView::from_group(g, &links))
            .collect();

        Ok(ReadingListResponse { groups, ungrouped })
    }
}
