//! Built-in cards: the first-run deck and the sample pack offered from the
//! About dialog.

use chrono::{DateTime, Utc};

use super::card::{Card, CardColor, CardId};

type Entry = (&'static str, &'static str, &'static str, CardColor);

const DEFAULT_DECK: &[Entry] = &[
    (
        "Rage",
        "Advantage on Str checks, +2 damage",
        "You have advantage on Strength checks and Strength saving throws. When you make a melee weapon attack using Strength, you gain a +2 bonus to the damage roll. You have resistance to bludgeoning, piercing, and slashing damage.",
        CardColor::Red,
    ),
    (
        "Flurry of Blows",
        "2 unarmed strikes as bonus action",
        "Immediately after you take the Attack action on your turn, you can spend 1 ki point to make two unarmed strikes as a bonus action.",
        CardColor::Purple,
    ),
    (
        "Lucky",
        "Reroll dice 3 times per day",
        "You have 3 luck points. Whenever you make an attack roll, an ability check, or a saving throw, you can spend one luck point to roll an additional d20. You can choose to spend one of your luck points after you roll the die, but before the outcome is determined.",
        CardColor::Green,
    ),
    (
        "Grappled",
        "Speed = 0, cannot move",
        "A grappled creature's speed becomes 0, and it can't benefit from any bonus to its speed. The condition ends if the grappler is incapacitated or if an effect removes the grappled creature from the reach of the grappler or grappling effect.",
        CardColor::Yellow,
    ),
];

const SAMPLE_PACK: &[Entry] = &[
    (
        "Fireball",
        "8d6 fire damage, 20ft radius",
        "A bright streak flashes from your pointing finger to a point you choose within range and then blossoms with a low roar into an explosion of flame. Each creature in a 20-foot-radius sphere centered on that point must make a Dexterity saving throw. A target takes 8d6 fire damage on a failed save, or half as much damage on a successful one.",
        CardColor::Red,
    ),
    (
        "Great Weapon Master",
        "-5 attack, +10 damage",
        "Before you make a melee attack with a heavy weapon that you are proficient with, you can choose to take a -5 penalty to the attack roll. If the attack hits, you add +10 to the attack's damage.",
        CardColor::Purple,
    ),
    (
        "Poisoned",
        "Disadvantage on attacks and ability checks",
        "A poisoned creature has disadvantage on attack rolls and ability checks.",
        CardColor::Green,
    ),
    (
        "Healing Potion",
        "Regain 2d4+2 hit points",
        "You regain 2d4 + 2 hit points when you drink this potion. The potion's red liquid glimmers when agitated.",
        CardColor::Red,
    ),
    (
        "Shield Spell",
        "+5 AC until start of next turn",
        "An invisible barrier of magical force appears and protects you. Until the start of your next turn, you have a +5 bonus to AC, including against the triggering attack, and you take no damage from magic missile.",
        CardColor::Blue,
    ),
    (
        "Sneak Attack",
        "Extra damage with advantage",
        "Once per turn, you can deal an extra 1d6 damage to one creature you hit with an attack if you have advantage on the attack roll. The attack must use a finesse or a ranged weapon.",
        CardColor::Gray,
    ),
    (
        "Stunned",
        "Incapacitated, can't move, auto-fail Str/Dex saves",
        "A stunned creature is incapacitated, can't move, and can speak only falteringly. The creature automatically fails Strength and Dexterity saving throws. Attack rolls against the creature have advantage.",
        CardColor::Yellow,
    ),
    (
        "Hempen Rope",
        "50 feet, 2 hit points",
        "Rope, whether made of hemp or silk, has 2 hit points and can be burst with a DC 17 Strength check. This rope is 50 feet long.",
        CardColor::Gray,
    ),
    (
        "Action Surge",
        "Take one additional action",
        "On your turn, you can take one additional action. Once you use this feature, you must finish a short or long rest before you can use it again.",
        CardColor::Blue,
    ),
    (
        "Charmed",
        "Can't attack charmer, advantage on social checks",
        "A charmed creature can't attack the charmer or target the charmer with harmful abilities or magical effects. The charmer has advantage on any ability check to interact socially with the creature.",
        CardColor::Pink,
    ),
    (
        "Counterspell",
        "Stop a spell being cast",
        "You attempt to interrupt a creature in the process of casting a spell. If the creature is casting a spell of 3rd level or lower, its spell fails and has no effect. If it is casting a spell of 4th level or higher, make an ability check using your spellcasting ability.",
        CardColor::Purple,
    ),
    (
        "Sharpshooter",
        "Ignore cover, -5 attack +10 damage",
        "You can use a bonus action to mark a target. Attacking at long range doesn't impose disadvantage. Your ranged weapon attacks ignore half and three-quarters cover. Before you make an attack with a ranged weapon, you can choose to take a -5 penalty to the attack roll. If the attack hits, you add +10 to the attack's damage.",
        CardColor::Green,
    ),
    (
        "Exhaustion",
        "6 levels of increasing penalties",
        "Some special abilities and environmental hazards, such as starvation and the long-term effects of freezing or scorching temperatures, can lead to a special condition called exhaustion. Level 1: Disadvantage on ability checks. Level 6: Death.",
        CardColor::Red,
    ),
    (
        "Thieves' Tools",
        "Pick locks, disarm traps",
        "This set of tools includes a small file, a set of lock picks, a small mirror mounted on a metal handle, a set of narrow-bladed scissors, and a pair of pliers. Proficiency with these tools lets you add your proficiency bonus to any ability checks you make to disarm traps or open locks.",
        CardColor::Gray,
    ),
    (
        "Inspiration",
        "Reroll one d20",
        "If you have inspiration, you can expend it when you make an attack roll, saving throw, or ability check. Spending your inspiration gives you advantage on that roll.",
        CardColor::Yellow,
    ),
    (
        "Invisible",
        "Can't be seen, advantage on attacks",
        "An invisible creature is impossible to see without the aid of magic or a special sense. For the purpose of hiding, the creature is heavily obscured. The creature's location can be detected by any noise it makes or any tracks it leaves. Attack rolls against the creature have disadvantage, and the creature's attack rolls have advantage.",
        CardColor::Indigo,
    ),
    (
        "Healing Word",
        "Bonus action ranged heal",
        "A creature of your choice that you can see within range regains hit points equal to 1d4 + your spellcasting ability modifier. This spell has no effect on undead or constructs.",
        CardColor::Pink,
    ),
    (
        "Immovable Rod",
        "Becomes fixed in place",
        "This flat iron rod has a button on one end. You can use an action to press the button, which causes the rod to become magically fixed in place. Until you or another creature uses an action to push the button again, the rod doesn't move, even if it is defying gravity.",
        CardColor::Blue,
    ),
    (
        "Opportunity Attack",
        "Attack when enemy leaves reach",
        "You can make an opportunity attack when a hostile creature that you can see moves out of your reach. To make the opportunity attack, you use your reaction to make one melee attack against the provoking creature.",
        CardColor::Red,
    ),
    (
        "Bardic Inspiration",
        "Give ally extra d6 to roll",
        "You can inspire others through stirring words or music. To do so, you use a bonus action on your turn to choose one creature other than yourself within 60 feet of you who can hear you. That creature gains one Bardic Inspiration die, a d6.",
        CardColor::Purple,
    ),
];

fn build(entries: &[Entry], first_id: CardId, now: DateTime<Utc>) -> Vec<Card> {
    entries
        .iter()
        .enumerate()
        .map(|(offset, (title, summary, description, color))| {
            let id = first_id.saturating_add(offset as CardId);
            Card::new(id, title, summary, description, *color, now)
        })
        .collect()
}

/// The deck a first-run user sees (ids 1..=4)
pub fn default_cards(now: DateTime<Utc>) -> Vec<Card> {
    build(DEFAULT_DECK, 1, now)
}

/// Twenty example cards with ids `base + 1 ..= base + 20`
pub fn sample_pack(base: CardId, now: DateTime<Utc>) -> Vec<Card> {
    build(SAMPLE_PACK, base.saturating_add(1), now)
}
