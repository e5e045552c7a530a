use chrono::Weekday;
use std::fmt;

/// Anything that can be shown as a card and opened in the detail modal.
pub trait CatalogEntry {
    fn id(&self) -> &'static str;
    fn title(&self) -> &'static str;
    fn image(&self) -> &'static str;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Course {
    pub id: &'static str,
    pub title: &'static str,
    pub instructor: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub duration: &'static str,
    pub level: Level,
    pub description: &'static str,
    pub rating: f32,
}

impl Course {
    /// Number of filled stars on the card.
    pub fn full_stars(&self) -> usize {
        self.rating.floor().clamp(0.0, 5.0) as usize
    }
}

impl CatalogEntry for Course {
    fn id(&self) -> &'static str {
        self.id
    }

    fn title(&self) -> &'static str {
        self.title
    }

    fn image(&self) -> &'static str {
        self.image
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Artist {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub genre: &'static str,
    pub day: Weekday,
    pub stage: &'static str,
    pub blurb: &'static str,
}

impl Artist {
    pub fn day_label(&self) -> &'static str {
        match self.day {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

impl CatalogEntry for Artist {
    fn id(&self) -> &'static str {
        self.id
    }

    fn title(&self) -> &'static str {
        self.name
    }

    fn image(&self) -> &'static str {
        self.image
    }
}

pub const COURSES: &[Course] = &[
    Course {
        id: "1",
        title: "Full-Stack Neural Architect",
        instructor: "Dr. Aris Thorne",
        category: "Development",
        duration: "12 Weeks",
        level: Level::Advanced,
        rating: 4.9,
        image: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=1000&auto=format&fit=crop",
        description: "Master the convergence of Next.js 15, AI-integrated backends, and distributed systems. Build the next generation of scalable intelligent apps.",
    },
    Course {
        id: "2",
        title: "Generative Design Systems",
        instructor: "Elena Voids",
        category: "Design",
        duration: "8 Weeks",
        level: Level::Intermediate,
        rating: 4.8,
        image: "https://images.unsplash.com/photo-1614850523296-d8c1af93d400?q=80&w=1000&auto=format&fit=crop",
        description: "Deconstruct visual boundaries using algorithmic design. Learn to create UI that adapts in real-time to user behavior and data streams.",
    },
    Course {
        id: "3",
        title: "Quantum Computing 101",
        instructor: "Prof. Julian Q.",
        category: "Tech",
        duration: "10 Weeks",
        level: Level::Beginner,
        rating: 5.0,
        image: "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?q=80&w=1000&auto=format&fit=crop",
        description: "Enter the era of qubits. A foundational journey through quantum gates, entanglement, and the future of supercomputing.",
    },
    Course {
        id: "4",
        title: "Cyber-Security Sentinel",
        instructor: "Zero-Day Sam",
        category: "Security",
        duration: "14 Weeks",
        level: Level::Advanced,
        rating: 4.7,
        image: "https://images.unsplash.com/photo-1558494949-ef010cbdcc48?q=80&w=1000&auto=format&fit=crop",
        description: "Advanced offensive and defensive security strategies. Learn to protect decentralized infrastructures against sophisticated threats.",
    },
    Course {
        id: "5",
        title: "Creative Motion Physics",
        instructor: "Lara Flux",
        category: "Motion",
        duration: "6 Weeks",
        level: Level::Intermediate,
        rating: 4.9,
        image: "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?q=80&w=1000&auto=format&fit=crop",
        description: "Master Framer Motion and Three.js to create immersive web experiences that defy traditional 2D limitations.",
    },
    Course {
        id: "6",
        title: "AI Product Strategy",
        instructor: "Marcus Chen",
        category: "Business",
        duration: "5 Weeks",
        level: Level::Beginner,
        rating: 4.6,
        image: "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?q=80&w=1000&auto=format&fit=crop",
        description: "Bridge the gap between engineering and business. Learn to identify, validate, and launch AI-driven products in the modern market.",
    },
];

pub const LINEUP: &[Artist] = &[
    Artist {
        id: "1",
        name: "Neon Horizon",
        image: "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?q=80&w=1000&auto=format&fit=crop",
        genre: "Synthwave",
        day: Weekday::Fri,
        stage: "Main Stage",
        blurb: "Analog synth walls and a laser rig tuned to the sunset. The opening night headliner.",
    },
    Artist {
        id: "2",
        name: "The Glass Orchard",
        image: "https://images.unsplash.com/photo-1501386761578-eac5c94b800a?q=80&w=1000&auto=format&fit=crop",
        genre: "Dream Pop",
        day: Weekday::Fri,
        stage: "Lagoon Tent",
        blurb: "Reverb-drenched guitars and whispered hooks, best heard lying in the grass.",
    },
    Artist {
        id: "3",
        name: "Kairo Vex",
        image: "https://images.unsplash.com/photo-1516450360452-9312f5e86fc7?q=80&w=1000&auto=format&fit=crop",
        genre: "Techno",
        day: Weekday::Sat,
        stage: "Warehouse",
        blurb: "Four-hour closing set of relentless, hypnotic techno. Bring water.",
    },
    Artist {
        id: "4",
        name: "Sol Meridian",
        image: "https://images.unsplash.com/photo-1470229722913-7c0e2dbbafd3?q=80&w=1000&auto=format&fit=crop",
        genre: "Afrobeat",
        day: Weekday::Sat,
        stage: "Main Stage",
        blurb: "A twelve-piece band with a horn section that refuses to let anyone stand still.",
    },
    Artist {
        id: "5",
        name: "Lumen Drift",
        image: "https://images.unsplash.com/photo-1459749411175-04bf5292ceea?q=80&w=1000&auto=format&fit=crop",
        genre: "Ambient",
        day: Weekday::Sun,
        stage: "Sunrise Dome",
        blurb: "Slow-blooming soundscapes for the morning after, performed under a projection dome.",
    },
    Artist {
        id: "6",
        name: "Velvet Static",
        image: "https://images.unsplash.com/photo-1524368535928-5b5e00ddc76b?q=80&w=1000&auto=format&fit=crop",
        genre: "Indie Rock",
        day: Weekday::Sun,
        stage: "Main Stage",
        blurb: "Fuzzed-out choruses and a drummer who plays like the festival ends tonight. It does.",
    },
];

/// Index of the entry with `id`, if present.
pub fn position_of<T: CatalogEntry>(entries: &[T], id: &str) -> Option<usize> {
    entries.iter().position(|entry| entry.id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_ids<T: CatalogEntry>(entries: &[T]) {
        let ids: HashSet<&str> = entries.iter().map(CatalogEntry::id).collect();
        assert_eq!(ids.len(), entries.len());
    }

    #[test]
    fn catalog_ids_are_unique() {
        assert_unique_ids(COURSES);
        assert_unique_ids(LINEUP);
    }

    #[test]
    fn position_of_finds_by_id() {
        assert_eq!(position_of(COURSES, "3"), Some(2));
        assert_eq!(position_of(LINEUP, "6"), Some(5));
        assert_eq!(position_of(COURSES, "missing"), None);
    }

    #[test]
    fn stars_round_down() {
        let quantum = &COURSES[2];
        assert_eq!(quantum.full_stars(), 5);
        assert_eq!(COURSES[0].full_stars(), 4);
    }

    #[test]
    fn artists_expose_name_as_title() {
        let artist = &LINEUP[2];
        assert_eq!(artist.title(), "Kairo Vex");
        assert_eq!(artist.day_label(), "Saturday");
        assert_eq!(Level::Intermediate.to_string(), "Intermediate");
    }
}
