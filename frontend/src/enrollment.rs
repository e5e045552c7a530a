use crate::catalog::Course;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    White,
    Teal,
    Periwinkle,
}

impl Accent {
    pub fn class(&self) -> &'static str {
        match self {
            Accent::White => "accent-white",
            Accent::Teal => "accent-teal",
            Accent::Periwinkle => "accent-periwinkle",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub accent: Accent,
    pub perks: [&'static str; 3],
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Core Path",
        price: "$299",
        accent: Accent::White,
        perks: ["1 Full Course", "Project Templates", "Discord Access"],
    },
    Plan {
        name: "Full Access",
        price: "$899",
        accent: Accent::Teal,
        perks: ["Unlimited Courses", "Weekly Workshops", "Industry Certs"],
    },
    Plan {
        name: "Executive",
        price: "$2499",
        accent: Accent::Periwinkle,
        perks: ["1-on-1 Mentoring", "Direct Placements", "Lifetime Updates"],
    },
];

pub fn enrollment_message(plan_name: &str, intent: Option<&Course>) -> String {
    let course_context = intent
        .map(|course| format!("for the \"{}\" course ", course.title))
        .unwrap_or_default();
    format!(
        "Hi Lumina Academy! I'm interested in enrolling {}under the {}. Could you please share the admission details?",
        course_context, plan_name
    )
}

pub fn whatsapp_link(recipient: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", recipient, urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::COURSES;

    #[test]
    fn message_without_intent_skips_course_clause() {
        assert_eq!(
            enrollment_message("Core Path", None),
            "Hi Lumina Academy! I'm interested in enrolling under the Core Path. Could you please share the admission details?"
        );
    }

    #[test]
    fn message_names_the_intent_course() {
        let message = enrollment_message("Executive", Some(&COURSES[2]));
        assert!(message.contains("enrolling for the \"Quantum Computing 101\" course under the Executive."));
    }

    #[test]
    fn link_is_percent_encoded() {
        let link = whatsapp_link("7858926596", "Hi \"A\" & B?");
        assert_eq!(link, "https://wa.me/7858926596?text=Hi%20%22A%22%20%26%20B%3F");

        let text = link.split_once("?text=").map(|(_, text)| text).unwrap();
        assert_eq!(urlencoding::decode(text).unwrap(), "Hi \"A\" & B?");
    }

    #[test]
    fn plans_are_ordered_by_price() {
        let names: Vec<_> = PLANS.iter().map(|plan| plan.name).collect();
        assert_eq!(names, ["Core Path", "Full Access", "Executive"]);
    }
}
