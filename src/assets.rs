//! Level-tiered visual identifiers.
//!
//! The renderer resolves these to sprites; the simulation only needs the
//! lookup. Ship, bullet and asteroid switch to their alternate look from
//! level 2 onward, the boss from level 6 onward, and each switch persists
//! for every later level.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssetSet {
    pub ship: &'static str,
    pub bullet: &'static str,
    pub asteroid: &'static str,
    pub boss: &'static str,
}

const BASE: AssetSet = AssetSet {
    ship: "ship1",
    bullet: "bullet1",
    asteroid: "asteroid1",
    boss: "boss1",
};

const VETERAN: AssetSet = AssetSet {
    ship: "ship2",
    bullet: "bullet2",
    asteroid: "asteroid2",
    boss: "boss1",
};

const ELITE: AssetSet = AssetSet {
    ship: "ship2",
    bullet: "bullet2",
    asteroid: "asteroid2",
    boss: "boss2",
};

impl AssetSet {
    pub fn for_level(level: u32) -> AssetSet {
        match level {
            0..=1 => BASE,
            2..=5 => VETERAN,
            _ => ELITE,
        }
    }
}
