use chrono::NaiveDateTime;
use surf_schemas::{Group, Slot, SlotKind};

/// Guests per group per slot (one instructor each).
pub const SLOT_CAPACITY: usize = 5;

/// Place every group in slot A; guests past [`SLOT_CAPACITY`] in a group
/// move, in order, to a new group of the same key in slot B.
///
/// Always returns `[A, B]`; B may be empty.
pub fn build_day_plan(
    groups: Vec<Group>,
    slot_a_start: NaiveDateTime,
    slot_b_start: NaiveDateTime,
) -> Vec<Slot> {
    let mut a = Slot::new(SlotKind::A, slot_a_start);
    let mut b = Slot::new(SlotKind::B, slot_b_start);

    for mut group in groups {
        if group.len() > SLOT_CAPACITY {
            let mut overflow = Group::new(group.skill_level, group.age_band);
            overflow.guests = group.guests.split_off(SLOT_CAPACITY);
            b.groups.push(overflow);
        }
        a.groups.push(group);
    }
    vec![a, b]
}
