//! surf-plan: allocator
//!
//! One group per distinct (skill level, age band) pair. Groups appear in the
//! order their first guest appears; guests keep input order inside a group.
//! No size limit here; oversized groups are the slot splitter's job.
//!
//! Age bands are read from the classified field, which ledger writes have
//! already defaulted to adult when the label was blank.

use std::collections::HashMap;

use surf_schemas::{AgeBand, Group, Guest, SkillLevel};

pub fn allocate(guests: &[Guest]) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<(SkillLevel, AgeBand), usize> = HashMap::new();

    for g in guests {
        let key = (g.skill_level, g.age_band);
        let i = *index.entry(key).or_insert_with(|| {
            groups.push(Group::new(key.0, key.1));
            groups.len() - 1
        });
        groups[i].guests.push(g.clone());
    }
    groups
}
