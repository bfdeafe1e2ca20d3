//! Portfolio content model.
//!
//! The records shown by the UI are fixed literal data: project cards,
//! the technology stack, interests, and the footer's social links.
//! Nothing here is created or destroyed at runtime; the project list
//! is only ever permuted by the reorder gesture.

use ratatui::style::Color;

/// Display name shown in the header, home view and footer.
pub const OWNER_NAME: &str = "Mohammed Filali";
/// Professional title shown under the name on the home view.
pub const OWNER_TITLE: &str = "Full-Stack Developer";
/// Contact email shown on the contact view.
pub const OWNER_EMAIL: &str = "contact@example.com";
/// Location shown on the contact view.
pub const OWNER_LOCATION: &str = "Casablanca, Morocco";
/// Phone number shown on the contact view.
pub const OWNER_PHONE: &str = "+212 600-000000";

/// Accent token attached to each project card, standing in for the
/// original gradient classes. Resolved to a concrete color per theme
/// by the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Purple,
    Green,
    Orange,
}

impl Accent {
    /// Concrete color for this accent. The values read well on both
    /// light and dark backgrounds.
    pub fn color(self) -> Color {
        match self {
            Accent::Blue => Color::Rgb(59, 130, 246),
            Accent::Purple => Color::Rgb(168, 85, 247),
            Accent::Green => Color::Rgb(16, 185, 129),
            Accent::Orange => Color::Rgb(249, 115, 22),
        }
    }
}

/// One portfolio item: a static display entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Card title
    pub title: &'static str,
    /// One-line description shown on the card
    pub short_desc: &'static str,
    /// Longer description shown for the selected card
    pub description: &'static str,
    /// Ordered technology tags
    pub tags: &'static [&'static str],
    /// Screenshot reference (kept for parity with the site build)
    pub image: &'static str,
    /// Human-readable display date
    pub date: &'static str,
    /// Source repository link
    pub github: &'static str,
    /// Live demo link
    pub live: &'static str,
    /// Category badge
    pub category: &'static str,
    /// Accent token used for the card border and title
    pub accent: Accent,
}

impl Project {
    /// The fixed showcase list, in its original order.
    pub fn showcase() -> Vec<Project> {
        vec![
            Project {
                title: "E-Commerce Platform",
                short_desc: "E-commerce platform with the Stripe API",
                description: "Complete e-commerce platform with Stripe payments, stock \
                              management and an admin dashboard. Responsive, modern interface.",
                tags: &["React", "Node.js", "MongoDB", "Stripe"],
                image: "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d",
                date: "May 2023",
                github: "https://github.com",
                live: "https://demo-ecommerce.com",
                category: "Web App",
                accent: Accent::Blue,
            },
            Project {
                title: "AI Image Generator",
                short_desc: "Generate art with OpenAI DALL-E",
                description: "AI art generator built on OpenAI DALL-E with an intuitive React \
                              interface. Personal gallery and social sharing built in.",
                tags: &["React", "OpenAI", "Python", "FastAPI"],
                image: "https://images.unsplash.com/photo-1677442136019-21780ecad995",
                date: "Aug 2023",
                github: "https://github.com",
                live: "https://ai-art-gen.com",
                category: "AI/ML",
                accent: Accent::Purple,
            },
            Project {
                title: "Fitness Tracker",
                short_desc: "Mobile fitness app with full tracking",
                description: "Complete mobile application with personalized training plans, \
                              nutrition tracking and a social community.",
                tags: &["React Native", "Firebase", "Charts"],
                image: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b",
                date: "Jan 2023",
                github: "https://github.com",
                live: "https://fitness-app.com",
                category: "Mobile",
                accent: Accent::Green,
            },
            Project {
                title: "Portfolio Dashboard",
                short_desc: "Analytics dashboard for this portfolio",
                description: "Analytics dashboard with performance metrics, A/B testing and \
                              real-time visitor insights.",
                tags: &["Next.js", "Tailwind", "Analytics"],
                image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71",
                date: "Nov 2023",
                github: "https://github.com",
                live: "https://portfolio-dash.com",
                category: "Analytics",
                accent: Accent::Orange,
            },
        ]
    }
}

/// One entry of the "tech arsenal" card on the about view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub glyph: char,
    pub color: Color,
}

impl Technology {
    pub fn stack() -> &'static [Technology] {
        const STACK: &[Technology] = &[
            Technology { name: "React", glyph: '⚛', color: Color::Cyan },
            Technology { name: "Node.js", glyph: '⬢', color: Color::Green },
            Technology { name: "TypeScript", glyph: '◆', color: Color::Blue },
            Technology { name: "JavaScript", glyph: '◇', color: Color::Yellow },
            Technology { name: "Laravel", glyph: '✦', color: Color::Red },
            Technology { name: "PHP", glyph: '◉', color: Color::Magenta },
            Technology { name: "MySQL", glyph: '▤', color: Color::LightYellow },
            Technology { name: "MongoDB", glyph: '❧', color: Color::LightGreen },
            Technology { name: "Docker", glyph: '⚓', color: Color::LightBlue },
            Technology { name: "Git", glyph: '⎇', color: Color::LightRed },
        ];
        STACK
    }
}

/// One entry of the "passions" card on the about view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interest {
    pub name: &'static str,
    pub glyph: char,
    pub color: Color,
}

impl Interest {
    pub fn all() -> &'static [Interest] {
        const INTERESTS: &[Interest] = &[
            Interest { name: "Open Source", glyph: '♥', color: Color::Red },
            Interest { name: "AI/ML", glyph: '◈', color: Color::Magenta },
            Interest { name: "Cybersecurity", glyph: '⛨', color: Color::Blue },
            Interest { name: "UI/UX Design", glyph: '✎', color: Color::LightMagenta },
            Interest { name: "Technical Writing", glyph: '✍', color: Color::Yellow },
            Interest { name: "Mentoring", glyph: '✳', color: Color::Green },
        ];
        INTERESTS
    }
}

/// Development philosophy bullets on the about view.
pub fn philosophy() -> &'static [&'static str] {
    &[
        "Build scalable solutions, not just working code",
        "Prioritize maintainability and documentation",
        "Learn through teaching and open-source contribution",
        "Embrace challenges as growth opportunities",
        "User experience drives technical decisions",
    ]
}

/// Static social links rendered in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub url: &'static str,
}

impl SocialLink {
    pub fn footer() -> &'static [SocialLink] {
        const LINKS: &[SocialLink] = &[
            SocialLink { name: "Twitter", url: "https://twitter.com" },
            SocialLink { name: "GitHub", url: "https://github.com" },
            SocialLink { name: "LinkedIn", url: "https://linkedin.com" },
            SocialLink { name: "Dribbble", url: "https://dribbble.com" },
        ];
        LINKS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn showcase_has_four_projects_in_original_order() {
        let projects = Project::showcase();
        let titles: Vec<_> = projects.iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            vec![
                "E-Commerce Platform",
                "AI Image Generator",
                "Fitness Tracker",
                "Portfolio Dashboard",
            ]
        );
    }

    #[test]
    fn showcase_titles_are_unique() {
        let projects = Project::showcase();
        let mut titles: Vec<_> = projects.iter().map(|p| p.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), projects.len());
    }

    #[test]
    fn every_project_carries_links_and_tags() {
        for project in Project::showcase() {
            assert!(project.github.starts_with("https://"));
            assert!(project.live.starts_with("https://"));
            assert!(!project.tags.is_empty());
        }
    }

    #[test]
    fn tech_stack_matches_site_content() {
        let names: Vec<_> = Technology::stack().iter().map(|t| t.name).collect();
        assert_eq!(names.len(), 10);
        assert!(names.contains(&"Laravel"));
        assert!(names.contains(&"Docker"));
    }
}
