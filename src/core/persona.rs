//! Persona roster: the fixed set of professional roles shown by the selector.
//!
//! The roster is built once at startup from [`PERSONAS`] and shared read-only
//! with the views. Validation runs in [`Roster::new`] so a malformed table is
//! caught by tests instead of surfacing as a rendering glitch.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

/// One professional role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Persona {
    /// Display title, also the unique key within a roster.
    pub name: &'static str,
    /// One-line tagline.
    pub role: &'static str,
    pub languages: &'static [&'static str],
    /// Free-form duration label, e.g. "5 Years".
    pub experience: &'static str,
    pub specializations: &'static [&'static str],
    pub key_skills: &'static [&'static str],
    /// Flagship example, if the persona has one.
    pub notable_project: Option<&'static str>,
    /// Trait summary.
    pub equipment: &'static str,
    /// Asset reference for the portrait, resolved by the host.
    pub image: &'static str,
}

impl Persona {
    /// Notable project, treating an empty or blank value as absent.
    pub fn notable_project(&self) -> Option<&'static str> {
        self.notable_project.filter(|p| !p.trim().is_empty())
    }

    /// Up to two initials used as the terminal stand-in for the portrait.
    pub fn monogram(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Languages joined for display.
    pub fn languages_line(&self) -> String {
        self.languages.join(", ")
    }

    /// Specializations joined for display.
    pub fn specializations_line(&self) -> String {
        self.specializations.join(", ")
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Built-in portfolio personas, in carousel order.
pub const PERSONAS: &[Persona] = &[
    Persona {
        name: "Technical Solutions",
        role: "Bridge between technical and non-technical experts.",
        languages: &["English", "French", "German", "Dutch"],
        experience: "2 Years",
        specializations: &[
            "API creation & debugging",
            "Strategic Technical Advisory",
            "Sales Consultation",
        ],
        key_skills: &["ELK Stack", "SQL-Based Analytics", "Python, JS, Node.js"],
        notable_project: Some("AddTech @Criteo"),
        equipment: "Grit, Tenacious, Technical Jargon",
        image: "/images/ts.png",
    },
    Persona {
        name: "Translator",
        role: "Enable you, your team and your customer to break the language barrier.",
        languages: &["English", "French", "German", "Dutch"],
        experience: "5 Years",
        specializations: &["Legal", "Technical", "Literary"],
        key_skills: &[
            "Research & Terminology Management",
            "Cultural Adaptation",
            "Tight Deadlines",
            "Event Accompaniment",
        ],
        notable_project: Some("SCC (Berlin Marathon)"),
        equipment: "Versatile Knowledge, Cultural Understanding, Human-Centric Approach",
        image: "/images/translator.png",
    },
    Persona {
        name: "Web Developer",
        role: "Build into reality what you see in your dreams.",
        languages: &[
            "JavaScript",
            "TypeScript",
            "React",
            "Node.js",
            "Express.js",
            "MongoDB",
            "Mongoose",
            "Docker",
            "Git",
            "HTML",
            "CSS",
            "Python",
        ],
        experience: "3 Years",
        specializations: &["Websites", "Web Applications"],
        key_skills: &["Technical Design", "User Research", "RESTful APIs"],
        notable_project: None,
        equipment: "Driven, Creative, Passionate",
        image: "/images/webdev.png",
    },
    Persona {
        name: "Customer Experience",
        role: "Enable your customers to make their experience uniquely good.",
        languages: &["English", "French", "German", "Dutch"],
        experience: "5 Years",
        specializations: &[
            "Customer Journey",
            "Complaint Management",
            "Feedback Gathering",
            "Team Lead",
        ],
        key_skills: &["Shopify", "Jira", "Zendesk"],
        notable_project: Some("Taxfix"),
        equipment: "Diplomacy, Patience, Empathy",
        image: "/images/cx.png",
    },
];

/// Data-authoring errors in a persona table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("persona roster is empty")]
    Empty,

    #[error("persona at position {position} has a blank name")]
    BlankName { position: usize },

    #[error("duplicate persona name '{name}' at position {position}")]
    DuplicateName { name: String, position: usize },
}

/// Validated, immutable persona list. Cheap to copy.
#[derive(Debug, Clone, Copy)]
pub struct Roster {
    personas: &'static [Persona],
}

impl Roster {
    /// Validate a persona table: non-empty, every name present and unique.
    pub fn new(personas: &'static [Persona]) -> Result<Self, RosterError> {
        if personas.is_empty() {
            return Err(RosterError::Empty);
        }

        let mut seen = HashSet::with_capacity(personas.len());
        for (position, persona) in personas.iter().enumerate() {
            if persona.name.trim().is_empty() {
                return Err(RosterError::BlankName { position });
            }
            if !seen.insert(persona.name) {
                return Err(RosterError::DuplicateName {
                    name: persona.name.to_string(),
                    position,
                });
            }
        }

        Ok(Self { personas })
    }

    /// The built-in [`PERSONAS`] table.
    pub fn builtin() -> Result<Self, RosterError> {
        Self::new(PERSONAS)
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    /// Always false for a validated roster; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static Persona> {
        self.personas.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Persona> {
        self.personas.iter()
    }

    /// Position of the persona with the given name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.personas.iter().position(|p| p.name == name)
    }
}
