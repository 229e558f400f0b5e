//! Static learning material: topics, quiz question banks and the
//! schedule shown to users who have not planned anything yet.

use crate::models::{ScheduleEntry, Tier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
}

pub const TOPICS: [Topic; 4] = [
    Topic {
        id: 1,
        title: "Planets",
        description: "Learn about the planets of our solar system.",
    },
    Topic {
        id: 2,
        title: "Galaxies",
        description: "Explore the vast universe of galaxies beyond the Milky Way.",
    },
    Topic {
        id: 3,
        title: "Space Missions",
        description: "Discover NASA's greatest missions and achievements.",
    },
    Topic {
        id: 4,
        title: "Stars",
        description: "Understand how stars are born, live, and die.",
    },
];

pub fn find_topic(id: u32) -> Option<&'static Topic> {
    TOPICS.iter().find(|t| t.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub answer: &'static str,
}

const fn q(prompt: &'static str, options: [&'static str; 4], answer: &'static str) -> Question {
    Question {
        prompt,
        options,
        answer,
    }
}

const EASY: [Question; 10] = [
    q("Which planet is known as the Red Planet?", ["Earth", "Mars", "Venus", "Jupiter"], "Mars"),
    q("What is the name of our galaxy?", ["Andromeda", "Milky Way", "Whirlpool", "Sombrero"], "Milky Way"),
    q("Which star is at the center of our solar system?", ["Polaris", "Sirius", "Sun", "Alpha Centauri"], "Sun"),
    q("How many planets are in the Solar System?", ["7", "8", "9", "10"], "8"),
    q("Which planet is closest to the Sun?", ["Mercury", "Venus", "Earth", "Mars"], "Mercury"),
    q("Which planet has rings?", ["Venus", "Saturn", "Earth", "Mars"], "Saturn"),
    q("What is the Moon?", ["A planet", "A star", "A satellite", "An asteroid"], "A satellite"),
    q("Which planet is known as the Blue Planet?", ["Neptune", "Earth", "Uranus", "Venus"], "Earth"),
    q("What causes day and night?", ["Earth's rotation", "Earth's revolution", "Moonlight", "Clouds"], "Earth's rotation"),
    q("What do we call a group of stars forming a pattern?", ["Cluster", "Galaxy", "Constellation", "Nebula"], "Constellation"),
];

const MEDIUM: [Question; 10] = [
    q("Which planet has the most moons?", ["Earth", "Mars", "Saturn", "Jupiter"], "Jupiter"),
    q("Who was the first person to walk on the Moon?", ["Yuri Gagarin", "Neil Armstrong", "Buzz Aldrin", "Michael Collins"], "Neil Armstrong"),
    q("Which planet is famous for its Great Red Spot?", ["Mars", "Jupiter", "Neptune", "Saturn"], "Jupiter"),
    q("What galaxy is nearest to the Milky Way?", ["Andromeda", "Whirlpool", "Sombrero", "Pinwheel"], "Andromeda"),
    q("Which space telescope was launched in 1990?", ["Hubble", "Kepler", "James Webb", "Spitzer"], "Hubble"),
    q("How long does Earth take to orbit the Sun?", ["24 hours", "1 month", "1 year", "10 years"], "1 year"),
    q("Which planet spins on its side?", ["Venus", "Uranus", "Neptune", "Mars"], "Uranus"),
    q("What is a supernova?", ["A new galaxy", "A dying star explosion", "A black hole", "A comet"], "A dying star explosion"),
    q("Which planet is known as the Morning Star?", ["Venus", "Mars", "Mercury", "Saturn"], "Venus"),
    q("Which planet has the shortest day?", ["Earth", "Mars", "Jupiter", "Venus"], "Jupiter"),
];

const HARD: [Question; 10] = [
    q("What is the closest black hole to Earth called?", ["Cygnus X-1", "Sagittarius A*", "V616 Monocerotis", "M87*"], "V616 Monocerotis"),
    q("Which is the largest known star?", ["UY Scuti", "Betelgeuse", "Antares", "Sirius"], "UY Scuti"),
    q("What is the name of the first exoplanet discovered?", ["Kepler-22b", "51 Pegasi b", "Proxima b", "Gliese 581c"], "51 Pegasi b"),
    q("What kind of galaxy is the Milky Way?", ["Elliptical", "Spiral", "Irregular", "Lenticular"], "Spiral"),
    q("What element fuels stars?", ["Oxygen", "Hydrogen", "Carbon", "Helium"], "Hydrogen"),
    q("What is the event horizon?", ["Edge of a galaxy", "Boundary of a black hole", "Edge of universe", "Star explosion"], "Boundary of a black hole"),
    q("Which planet has the largest volcano?", ["Mars", "Earth", "Venus", "Jupiter"], "Mars"),
    q("Which NASA mission landed on Pluto?", ["Voyager 1", "Cassini", "New Horizons", "Juno"], "New Horizons"),
    q("How old is the universe approximately?", ["1 billion years", "5 billion years", "13.8 billion years", "100 million years"], "13.8 billion years"),
    q("What is the densest planet in the Solar System?", ["Earth", "Jupiter", "Mercury", "Neptune"], "Earth"),
];

pub fn question_bank(tier: Tier) -> &'static [Question] {
    match tier {
        Tier::Easy => &EASY,
        Tier::Medium => &MEDIUM,
        Tier::Hard => &HARD,
    }
}

const DEFAULT_SCHEDULE: [(&str, &str); 3] = [
    ("Evening (7 PM)", "Venus – The Evening Star"),
    ("Midnight (12 AM)", "Orion Nebula"),
    ("Dawn (4 AM)", "Jupiter and Saturn"),
];

/// Suggestions displayed (never stored) while a user has no schedule rows.
pub fn default_schedule() -> Vec<ScheduleEntry> {
    DEFAULT_SCHEDULE
        .iter()
        .map(|(time, object)| ScheduleEntry::new(*time, *object))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_bank_has_ten_questions() {
        for tier in [Tier::Easy, Tier::Medium, Tier::Hard] {
            assert_eq!(question_bank(tier).len(), 10, "{tier} bank");
        }
    }

    #[test]
    fn test_answer_is_always_one_of_the_options() {
        for tier in [Tier::Easy, Tier::Medium, Tier::Hard] {
            for question in question_bank(tier) {
                assert!(
                    question.options.contains(&question.answer),
                    "{} has no matching option",
                    question.prompt
                );
            }
        }
    }

    #[test]
    fn test_find_topic() {
        assert_eq!(find_topic(3).map(|t| t.title), Some("Space Missions"));
        assert!(find_topic(5).is_none());
    }

    #[test]
    fn test_default_schedule() {
        let entries = default_schedule();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].object, "Venus – The Evening Star");
    }
}
