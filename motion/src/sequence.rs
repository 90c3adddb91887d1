//! The mount schedule: which visual groups enter when. Built once at
//! startup, consulted by the view while it constructs elements.

use std::time::Duration;

use smallvec::SmallVec;

use crate::tween::EnterTween;

#[derive(Debug, Clone, Copy)]
struct Group {
    name: &'static str,
    tween: EnterTween,
    /// Extra delay per child index. Zero for single-element groups.
    stagger: Duration,
    /// How many children the group reveals. 1 for single-element groups.
    children: usize,
}

/// The enter schedule for a whole page.
///
/// Groups are identified by name. Asking for a name that was never added
/// is a programmer error and panics; group names are compile-time
/// constants, so a miss cannot come from user input.
#[derive(Debug, Clone, Default)]
pub struct MountSequence {
    groups: SmallVec<[Group; 5]>,
}

impl MountSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a single-element group.
    pub fn group(self, name: &'static str, tween: EnterTween) -> Self {
        self.staggered_group(name, tween, Duration::ZERO, 1)
    }

    /// Adds a group whose `children` elements reveal in list order, each
    /// starting `stagger` later than the previous one.
    pub fn staggered_group(
        mut self,
        name: &'static str,
        tween: EnterTween,
        stagger: Duration,
        children: usize,
    ) -> Self {
        if children == 0 {
            panic!("animation group {name:?} needs at least one child");
        }
        self.groups.push(Group {
            name,
            tween,
            stagger,
            children,
        });
        self
    }

    /// Tween of a group. For staggered groups this is the first child's
    /// tween.
    pub fn tween(&self, name: &str) -> EnterTween {
        self.find(name).tween
    }

    /// Tween of one child of a staggered group. The delay grows with the
    /// list index, so reveal order follows list order.
    pub fn child_tween(&self, name: &str, index: usize) -> EnterTween {
        let group = self.find(name);
        if index >= group.children {
            panic!(
                "animation group {name:?} has {} children, asked for index {index}",
                group.children,
            );
        }
        group.tween.delayed_by(group.stagger * index as u32)
    }

    /// Elapsed time from which every group, including the last staggered
    /// child, samples as settled.
    pub fn settle_duration(&self) -> Duration {
        self.groups
            .iter()
            .map(|group| group.tween.total() + group.stagger * (group.children - 1) as u32)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    pub fn is_settled_at(&self, elapsed: Duration) -> bool {
        self.groups.iter().all(|group| {
            (0..group.children).all(|index| {
                group
                    .tween
                    .delayed_by(group.stagger * index as u32)
                    .is_settled_at(elapsed)
            })
        })
    }

    fn find(&self, name: &str) -> &Group {
        self.groups
            .iter()
            .find(|group| group.name == name)
            .unwrap_or_else(|| panic!("unknown animation group: {name:?}"))
    }
}
