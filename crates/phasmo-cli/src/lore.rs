//! Static ghost notes, Ouija board questions and program information.

use phasmo_domain::Suspect;

/// Behaviour notes for the reference ghosts.
const GHOST_NOTES: &[(&str, &str)] = &[
    ("banshee", "Will exclusively hunt one player until they die."),
    (
        "demon",
        "Attacks often. SUCCESSFUL questions on the Ouija board will not decrease sanity.",
    ),
    (
        "jinn",
        "Interacts with electronics (lights/cars/phones/radios/tvs) often. Moves very fast in \
         hunts if the fuse box is on. Low activity if players avoid the ghost room.",
    ),
    (
        "mare",
        "Will attack more often in dark and less often in light. Likes to turn off lights and \
         the fuse box.",
    ),
    (
        "oni",
        "Very active when people are nearby, and can throw objects at great speed.",
    ),
    (
        "phantom",
        "Can copy the appearance of a team member on hunts/manifestations (will never appear \
         holding an item). Drops sanity rapidly when seen. Likes manifesting to stand still or \
         walk for a moment. Photos cause the phantom to disappear (not stop a hunt).",
    ),
    (
        "poltergeist",
        "Interacts with objects often, especially doors, even very far from its room. \
         Interactions not directly seen will cause decrease in sanity. Can interact with \
         multiple objects at once (not focused on electronics like a jinn).",
    ),
    (
        "revenant",
        "Moves very fast during a hunt when it spots a player, and will switch to closer \
         targets freely. Smudge sticks will disorient the Revenant and buy time to hide.",
    ),
    (
        "shade",
        "Low activity when players are grouped. Try to use the Crucifix and Smudge Sticks to \
         provide a safe window for a lone player to provoke activity and get clues.",
    ),
    (
        "spirit",
        "No unique powers, making it slightly harder to identify. Smudge Sticks prevent \
         attacks for twice the duration of other ghosts.",
    ),
    (
        "wraith",
        "Touching salt immediately ends a hunt. Can hover over the ground, only occasionally \
         taking steps. Can see and pass through doors and walls. Can teleport on top of \
         players in the ghost room. Hiding is futile.",
    ),
    (
        "yurei",
        "Passively drains sanity slightly faster than baseline. Smudge Sticks will cause a \
         Yurei to stay in its room.",
    ),
];

/// Questions the Ouija board answers.
pub const OUIJA_QUESTIONS: &[&str] = &[
    "How old are you?",
    "Who did you kill?",
    "How long have you been dead?",
    "How many people are in this room?",
    "Where is your room?",
];

/// Program description shown by `about`.
pub const ABOUT: &str = "Phasmo Deduction Console automates deduction of remaining clues and \
possible ghosts. Find what clues are still possible, and what ghost behaviors you should look \
for.\n\nBased on v0.174 (10/25/2020)\n\nInformation sourced from phasmophobia.fandom.com";

/// Placeholder for ghosts without notes (custom relations).
pub const NO_NOTES: &str = "No notes recorded.";

/// Look up the behaviour notes for `ghost`.
pub fn ghost_notes(ghost: &Suspect) -> &'static str {
    GHOST_NOTES
        .iter()
        .find(|(name, _)| *name == ghost.as_str())
        .map(|(_, notes)| *notes)
        .unwrap_or(NO_NOTES)
}
