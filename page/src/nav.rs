//! The site navigation: a closed, fixed, ordered set of entries plus the
//! single-slot active selection.

/// Identifier of a navigation entry. The set is closed; adding an entry is
/// a source change, never a runtime event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavId {
    Home,
    Work,
    Projects,
    Contact,
}

impl NavId {
    /// Stable lowercase form, shared by anchors and DOM ids.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Work => "work",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }
}

/// One entry in the site navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: NavId,
    pub label: &'static str,
    /// Same-document fragment target, always `#` + the id's string form.
    pub anchor: &'static str,
}

/// The navigation list. Defined once, never mutated, rendered in this order.
pub static NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        id: NavId::Home,
        label: "Home",
        anchor: "#home",
    },
    NavItem {
        id: NavId::Work,
        label: "Work",
        anchor: "#work",
    },
    NavItem {
        id: NavId::Projects,
        label: "Projects",
        anchor: "#projects",
    },
    NavItem {
        id: NavId::Contact,
        label: "Contact",
        anchor: "#contact",
    },
];

/// Currently selected navigation entry.
///
/// A single-slot selector: a click overwrites the slot unconditionally,
/// last click wins. There is no validation against scroll position and no
/// way to have zero or two entries selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveNav(NavId);

impl ActiveNav {
    /// Selection before any interaction: the first entry.
    pub fn initial() -> Self {
        Self(NAV_ITEMS[0].id)
    }

    /// Overwrites the selection. Re-selecting the current entry is a no-op.
    pub fn select(&mut self, id: NavId) {
        self.0 = id;
    }

    pub fn id(self) -> NavId {
        self.0
    }

    pub fn is_selected(self, id: NavId) -> bool {
        self.0 == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected_count(active: ActiveNav) -> usize {
        NAV_ITEMS
            .iter()
            .filter(|item| active.is_selected(item.id))
            .count()
    }

    #[test]
    fn test_nav_list_order_is_fixed() {
        let labels: Vec<_> = NAV_ITEMS.iter().map(|item| item.label).collect();
        assert_eq!(labels, ["Home", "Work", "Projects", "Contact"]);
    }

    #[test]
    fn test_nav_ids_are_unique() {
        for (index, item) in NAV_ITEMS.iter().enumerate() {
            for other in &NAV_ITEMS[index + 1..] {
                assert_ne!(item.id, other.id);
            }
        }
    }

    #[test]
    fn test_anchors_derive_from_ids() {
        for item in &NAV_ITEMS {
            assert_eq!(item.anchor, format!("#{}", item.id.as_str()));
        }
    }

    #[test]
    fn test_initial_selection_is_home() {
        let active = ActiveNav::initial();
        assert_eq!(active.id(), NavId::Home);
        assert!(active.is_selected(NavId::Home));
        assert_eq!(selected_count(active), 1);
    }

    #[test]
    fn test_selecting_any_entry_selects_exactly_one() {
        for item in &NAV_ITEMS {
            let mut active = ActiveNav::initial();
            active.select(item.id);
            assert_eq!(active.id(), item.id);
            assert_eq!(selected_count(active), 1);
        }
    }

    #[test]
    fn test_last_click_wins() {
        let mut active = ActiveNav::initial();
        active.select(NavId::Work);
        active.select(NavId::Contact);
        assert_eq!(active.id(), NavId::Contact);
        assert!(!active.is_selected(NavId::Work));
    }

    #[test]
    fn test_reselection_is_idempotent() {
        // Initial state, then Projects clicked twice.
        let mut active = ActiveNav::initial();
        assert_eq!(active.id(), NavId::Home);

        active.select(NavId::Projects);
        let after_first_click = active;
        assert_eq!(active.id(), NavId::Projects);
        assert_eq!(selected_count(active), 1);

        active.select(NavId::Projects);
        assert_eq!(active, after_first_click);
    }
}
