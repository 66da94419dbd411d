//! Fixed vocabularies accepted by the kills endpoint, plus the numeric
//! code tables used during enrichment.
//!
//! All of these sets are closed. Filter values are checked against them
//! before a request is built; enrichment resolves codes through the
//! lookup functions and treats anything unlisted as unnamed (`None`).

/// Column names the kills endpoint can return, valid in a `fields` filter.
pub const QUERY_FIELDS: [&str; 15] = [
    "id",
    "timestamp",
    "killer_class",
    "killer_weapon",
    "killer_x",
    "killer_y",
    "killer_z",
    "victim_class",
    "victim_x",
    "victim_y",
    "victim_z",
    "customkill",
    "damagebits",
    "death_flags",
    "team",
];

/// Valid values for the killer-team filter.
pub const TEAMS: [&str; 4] = ["red", "blue", "spectator", "teamless"];

/// Valid values for the killer- and victim-class filters.
pub const CLASSES: [&str; 10] = [
    "scout",
    "sniper",
    "demoman",
    "medic",
    "pyro",
    "heavy",
    "spy",
    "engineer",
    "soldier",
    "unknown",
];

/// Number of meaningful low bits in the `death_flags` bitmask.
pub const DEATH_FLAG_BITS: u32 = 9;

/// Resolves a class index (killer or victim) to its name.
pub fn class_name(code: i64) -> Option<&'static str> {
    match code {
        0 => Some("Unknown"),
        1 => Some("Scout"),
        2 => Some("Sniper"),
        3 => Some("Soldier"),
        4 => Some("Demoman"),
        5 => Some("Medic"),
        6 => Some("Heavy"),
        7 => Some("Pyro"),
        8 => Some("Spy"),
        9 => Some("Engineer"),
        _ => None,
    }
}

// TODO: resolve non-negative weapon codes through the TF2 item schema.

/// Resolves the special negative weapon codes. Non-negative codes refer to
/// item definition indexes and have no local name.
pub fn special_weapon_name(code: i64) -> Option<&'static str> {
    match code {
        -1 => Some("Sentry"),
        -2 => Some("Mini-Sentry"),
        _ => None,
    }
}

/// Resolves a custom-kill code to its name.
pub fn custom_kill_name(code: i64) -> Option<&'static str> {
    match code {
        1 => Some("Headshot"),
        2 => Some("Backstab"),
        3 => Some("Burning"),
        4 => Some("Wrench Fix"),
        5 => Some("Minigun"),
        6 => Some("Suicide"),
        7 => Some("Hadouken Taunt (Pyro)"),
        8 => Some("Burning Flare"),
        9 => Some("High Noon Taunt (Heavy)"),
        10 => Some("Grand Slam Taunt (Scout)"),
        11 => Some("Penetrate My Team"),
        12 => Some("Penetrate All Players"),
        13 => Some("Fencing Taunt (Spy)"),
        14 => Some("Penetrate Headshot"),
        15 => Some("Arrow Stab Taunt (Sniper)"),
        16 => Some("Telefrag"),
        17 => Some("Burning Arrow"),
        18 => Some("Flyingburn"),
        19 => Some("Pumpkin Bomb"),
        20 => Some("Decapitation"),
        21 => Some("Grenade Taunt (Soldier)"),
        22 => Some("Baseball"),
        23 => Some("Charge Impact"),
        24 => Some("Barbarian Swing Taunt (Demoman)"),
        25 => Some("Air Sticky Burst"),
        26 => Some("Defensive Sticky (Scottish Resistance?)"),
        27 => Some("Pickaxe"),
        28 => Some("Direct Hit Rocket"),
        29 => Some("Decapitation Boss"),
        30 => Some("Stickbomb Explosion"),
        31 => Some("Aegis Round"),
        32 => Some("Flare Explosion"),
        33 => Some("Boots Stomp"),
        34 => Some("Plasma"),
        35 => Some("Plasma Charged"),
        36 => Some("Plasma Gib"),
        37 => Some("Practice Sticky"),
        38 => Some("Eyeball Rocket"),
        39 => Some("Headshot Decapitation"),
        40 => Some("Armageddon Taunt (Pyro)"),
        41 => Some("Flare Pellet"),
        42 => Some("Cleaver"),
        43 => Some("Cleaver Crit"),
        44 => Some("Sapper Recorder Death"),
        45 => Some("Merasmus Player Bomb"),
        46 => Some("Merasmus Grenade"),
        47 => Some("Merasmus Zap"),
        48 => Some("Merasmus Decapitation"),
        49 => Some("Cannonball Push"),
        50 => Some("Guitar Riff Taunt (UNUSED)"),
        _ => None,
    }
}

/// Resolves a single death-flag bit value to its name.
pub fn death_flag_name(bit: i64) -> Option<&'static str> {
    match bit {
        1 => Some("Killer Domination"),
        2 => Some("Assister Domination"),
        4 => Some("Killer Revenge"),
        8 => Some("Assister Revenge"),
        16 => Some("First Blood"),
        32 => Some("Dead Ringer"),
        64 => Some("Interrupted"),
        128 => Some("Gibbed"),
        256 => Some("Purgatory"),
        _ => None,
    }
}

/// Names of every death-flag bit set in `mask`, lowest bit first. Only the
/// lowest [`DEATH_FLAG_BITS`] bits are inspected.
pub fn death_flag_names(mask: i64) -> Vec<&'static str> {
    (0..DEATH_FLAG_BITS)
        .map(|i| 1i64 << i)
        .filter(|bit| mask & bit != 0)
        .filter_map(death_flag_name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_bounds() {
        assert_eq!(class_name(0), Some("Unknown"));
        assert_eq!(class_name(9), Some("Engineer"));
        assert_eq!(class_name(10), None);
        assert_eq!(class_name(-1), None);
    }

    #[test]
    fn test_special_weapon_names() {
        assert_eq!(special_weapon_name(-1), Some("Sentry"));
        assert_eq!(special_weapon_name(-2), Some("Mini-Sentry"));
        assert_eq!(special_weapon_name(0), None);
        assert_eq!(special_weapon_name(205), None);
    }

    #[test]
    fn test_custom_kill_table_bounds() {
        assert_eq!(custom_kill_name(1), Some("Headshot"));
        assert_eq!(custom_kill_name(2), Some("Backstab"));
        assert_eq!(custom_kill_name(50), Some("Guitar Riff Taunt (UNUSED)"));
        assert_eq!(custom_kill_name(0), None);
        assert_eq!(custom_kill_name(51), None);
    }

    #[test]
    fn test_death_flag_names_decodes_mask() {
        // Bits 1 and 4: domination plus revenge.
        assert_eq!(
            death_flag_names(5),
            vec!["Killer Domination", "Killer Revenge"]
        );
        assert_eq!(death_flag_names(0), Vec::<&str>::new());
        assert_eq!(death_flag_names(256), vec!["Purgatory"]);
    }

    #[test]
    fn test_death_flag_names_ignores_high_bits() {
        assert_eq!(death_flag_names(512), Vec::<&str>::new());
        assert_eq!(death_flag_names(512 | 16), vec!["First Blood"]);
    }
}
