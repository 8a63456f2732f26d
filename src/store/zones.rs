use crate::{
    composition::content::ZoneRole,
    composition::zone::{Zone, ZonePatch},
    foundation::ids::ZoneId,
};

#[derive(Clone, Debug, Default, PartialEq)]
/// Current zone set plus the single-selection pointer.
pub struct ZoneStore {
    zones: Vec<Zone>,
    selected: Option<ZoneId>,
}

impl ZoneStore {
    /// Zones in the order they were set.
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Zone with the given id.
    pub fn zone(&self, id: &ZoneId) -> Option<&Zone> {
        self.zones.iter().find(|z| &z.id == id)
    }

    /// Replace the whole zone set. A selection that no longer names a zone is cleared.
    pub fn set_zones(&mut self, zones: Vec<Zone>) {
        self.zones = zones;
        self.drop_stale_selection();
    }

    /// Shallow-merge `patch` into the zone with `id`. Returns `false` when no zone matches.
    pub fn update_zone(&mut self, id: &ZoneId, patch: &ZonePatch) -> bool {
        match self.zones.iter_mut().find(|z| &z.id == id) {
            Some(zone) => {
                patch.apply(zone);
                true
            }
            None => false,
        }
    }

    /// Set or clear the single selection. The id is stored as given.
    pub fn select_zone(&mut self, id: Option<ZoneId>) {
        self.selected = id;
    }

    /// Selected zone id, if any.
    pub fn selected_zone_id(&self) -> Option<&ZoneId> {
        self.selected.as_ref()
    }

    /// Selected zone, if the selection names an existing zone.
    pub fn selected_zone(&self) -> Option<&Zone> {
        self.selected.as_ref().and_then(|id| self.zone(id))
    }

    /// `true` when there is at least one zone and none is `empty`.
    pub fn all_assigned(&self) -> bool {
        !self.zones.is_empty() && self.zones.iter().all(|z| z.role != ZoneRole::Empty)
    }

    fn drop_stale_selection(&mut self) {
        if let Some(id) = &self.selected
            && self.zone(id).is_none()
        {
            tracing::debug!(zone = %id, "selection cleared, zone no longer exists");
            self.selected = None;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/store/zones.rs"]
mod tests;
