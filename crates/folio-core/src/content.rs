//! Static page content. Everything here lives for the whole program.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Code,
    Code2,
    FileText,
    Globe,
    Palette,
    Server,
    Database,
    GitBranch,
    Github,
    Linkedin,
    TestTube,
    Zap,
    Layers,
    Mail,
    Phone,
    MessageCircle,
    Send,
    Heart,
    Star,
    Coffee,
}

impl Icon {
    /// Text glyph rendered in place of a vector icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Code => "</>",
            Icon::Code2 => "{}",
            Icon::FileText => "\u{1F5CE}",
            Icon::Globe => "\u{1F310}",
            Icon::Palette => "\u{1F3A8}",
            Icon::Server => "\u{2630}",
            Icon::Database => "\u{26C1}",
            Icon::GitBranch => "\u{2387}",
            Icon::Github => "\u{2325}",
            Icon::Linkedin => "in",
            Icon::TestTube => "\u{2697}",
            Icon::Zap => "\u{26A1}",
            Icon::Layers => "\u{2261}",
            Icon::Mail => "\u{2709}",
            Icon::Phone => "\u{260E}",
            Icon::MessageCircle => "\u{1F4AC}",
            Icon::Send => "\u{27A4}",
            Icon::Heart => "\u{2665}",
            Icon::Star => "\u{2605}",
            Icon::Coffee => "\u{2615}",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Icon::Code => "code",
            Icon::Code2 => "code",
            Icon::FileText => "file",
            Icon::Globe => "globe",
            Icon::Palette => "palette",
            Icon::Server => "server",
            Icon::Database => "database",
            Icon::GitBranch => "git branch",
            Icon::Github => "github",
            Icon::Linkedin => "linkedin",
            Icon::TestTube => "test tube",
            Icon::Zap => "zap",
            Icon::Layers => "layers",
            Icon::Mail => "mail",
            Icon::Phone => "phone",
            Icon::MessageCircle => "message",
            Icon::Send => "send",
            Icon::Heart => "heart",
            Icon::Star => "star",
            Icon::Coffee => "coffee",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub brand: &'static str,
    pub about: [&'static str; 2],
    pub photo: &'static str,
    pub copyright: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub category: &'static str,
    pub color: &'static str,
    pub proficiency: u8,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub stack: &'static str,
    /// Host and path without a scheme.
    pub live_url: &'static str,
    pub code_url: &'static str,
    /// Asset registry key.
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    pub title: &'static str,
    pub value: &'static str,
    pub link: &'static str,
    pub color: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Social {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingIcon {
    pub icon: Icon,
    pub color: &'static str,
    /// Seconds before the drift loop starts.
    pub delay: f32,
}

/// Section ids in page order, also the nav anchors.
pub const SECTIONS: [&str; 6] = ["hero", "about", "skills", "projects", "experience", "contact"];

pub const NAV_ITEMS: [&str; 5] = ["About", "Skills", "Projects", "Experience", "Contact"];

pub const HEADINGS: [(&str, &str); 5] = [
    ("about", "About Me"),
    ("skills", "Technical Arsenal"),
    ("projects", "Featured Projects"),
    ("experience", "Experience"),
    ("contact", "Let's Connect"),
];

pub const CONTACT_BLURB: &str =
    "Ready to bring your ideas to life? Let's create something extraordinary together.";

pub const PROFILE: Profile = Profile {
    name: "Muddu Venkata Saketh",
    role: "MERN Stack Developer",
    tagline: "crafting immersive digital experiences with cutting-edge technology",
    brand: "MVS",
    about: [
        "MERN Stack Developer passionate about building full-stack web applications with React, Node.js, and cloud integrations. Proficient in creating modern UIs and RESTful APIs.",
        "Currently expanding expertise in cloud technologies and DevOps practices. Always eager to learn new technologies and tackle challenging problems with innovative solutions.",
    ],
    photo: "profile",
    copyright: "\u{a9} 2024 Muddu Venkata Saketh. All rights reserved.",
};

const fn skill(
    name: &'static str,
    category: &'static str,
    color: &'static str,
    icon: Icon,
) -> Skill {
    Skill {
        name,
        category,
        color,
        proficiency: 100,
        icon,
    }
}

pub const SKILLS: [Skill; 16] = [
    skill("JavaScript", "Languages", "#F7DF1E", Icon::Code2),
    skill("TypeScript", "Languages", "#3178C6", Icon::FileText),
    skill("Python", "Languages", "#3776AB", Icon::Code2),
    skill("React.js", "Frontend", "#61DAFB", Icon::Code2),
    skill("Next.js", "Frontend", "#000000", Icon::Globe),
    skill("Tailwind CSS", "Frontend", "#06B6D4", Icon::Palette),
    skill("Node.js", "Backend", "#339933", Icon::Server),
    skill("Express.js", "Backend", "#000000", Icon::Server),
    skill("MongoDB", "Databases", "#47A248", Icon::Database),
    skill("PostgreSQL", "Databases", "#336791", Icon::Database),
    skill("MySQL", "Databases", "#4479A1", Icon::Database),
    skill("Git", "Tools", "#CF0F47", Icon::GitBranch),
    skill("GitHub", "Tools", "#BB3E00", Icon::Github),
    skill("Jest", "Tools", "#C21325", Icon::TestTube),
    skill("Postman", "Tools", "#FF6C37", Icon::Zap),
    skill("Webflow", "Tools", "#4353FF", Icon::Layers),
];

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "HealthAxis",
        description: "Full-stack health tracking and doctor appointment app with comprehensive patient management system.",
        stack: "MERN, JWT, Recharts",
        live_url: "health-axis-frontend.vercel.app",
        code_url: "https://github.com",
        image: "project1",
    },
    Project {
        title: "Expense Tracker",
        description: "Track & manage personal expenses with intuitive dashboard and detailed analytics.",
        stack: "Next.js, ShadCN UI, Drizzle ORM",
        live_url: "expense-tracker-saketh.vercel.app",
        code_url: "https://github.com",
        image: "project2",
    },
    Project {
        title: "AI-Powered Story Generator",
        description: "Create unique kids' stories using AI with interactive storytelling features.",
        stack: "Next.js, Gemini AI, Drizzle ORM",
        live_url: "story-generator-black.vercel.app",
        code_url: "https://github.com",
        image: "project3",
    },
];

pub const EXPERIENCE: [Experience; 1] = [Experience {
    title: "Software Developer Intern",
    company: "Tachyonsec Systems Pvt.Ltd",
    period: "2024 - Present",
    description: "Developed full-stack applications using MERN stack, implemented RESTful APIs, and created responsive user interfaces with modern design principles.",
}];

pub const STATS: [Stat; 3] = [
    Stat {
        number: "5+",
        label: "Projects Completed",
    },
    Stat {
        number: "1+",
        label: "Years Experience",
    },
    Stat {
        number: "99%",
        label: "Client Satisfaction",
    },
];

pub const CONTACTS: [Contact; 4] = [
    Contact {
        title: "Email",
        value: "mvsaketh2020@gmail.com",
        link: "mailto:mvsaketh2020@gmail.com",
        color: "#00ffff",
        icon: Icon::Mail,
    },
    Contact {
        title: "Phone",
        value: "+91 7013230003",
        link: "tel:+917013230003",
        color: "#ff00ff",
        icon: Icon::Phone,
    },
    Contact {
        title: "GitHub",
        value: "github.com/mudduvenkata",
        link: "https://github.com/mudduvenkata",
        color: "#ffff00",
        icon: Icon::Github,
    },
    Contact {
        title: "LinkedIn",
        value: "linkedin.com/in/mudduvenkata",
        link: "https://linkedin.com/in/mudduvenkata",
        color: "#00ff00",
        icon: Icon::Linkedin,
    },
];

pub const SOCIALS: [Social; 4] = [
    Social {
        name: "GitHub",
        url: "https://github.com/mudduvenkata",
    },
    Social {
        name: "LinkedIn",
        url: "https://linkedin.com/in/mudduvenkata",
    },
    Social {
        name: "Twitter",
        url: "https://twitter.com/mudduvenkata",
    },
    Social {
        name: "Instagram",
        url: "https://instagram.com/mudduvenkata",
    },
];

const fn floating(icon: Icon, color: &'static str, delay: f32) -> FloatingIcon {
    FloatingIcon { icon, color, delay }
}

pub const FLOATING_ICONS: [FloatingIcon; 12] = [
    floating(Icon::Mail, "#00ffff", 0.0),
    floating(Icon::Phone, "#ff00ff", 0.5),
    floating(Icon::Github, "#ffff00", 1.0),
    floating(Icon::Linkedin, "#00ff00", 1.5),
    floating(Icon::MessageCircle, "#ff6b6b", 2.0),
    floating(Icon::Send, "#4ecdc4", 2.5),
    floating(Icon::Globe, "#45b7d1", 3.0),
    floating(Icon::Heart, "#f093fb", 3.5),
    floating(Icon::Star, "#feca57", 4.0),
    floating(Icon::Zap, "#ff9ff3", 4.5),
    floating(Icon::Coffee, "#54a0ff", 5.0),
    floating(Icon::Code, "#5f27cd", 5.5),
];

/// Labels of the decorative contact form.
pub const FORM_FIELDS: [(&str, &str); 3] = [
    ("name", "Name"),
    ("email", "Email"),
    ("message", "Message"),
];
pub const FORM_SUBMIT_LABEL: &str = "Send Message";

/// Hero call-to-action buttons as (label, href).
pub const HERO_ACTIONS: [(&str, &str); 2] = [
    ("View Projects", "#projects"),
    ("Get In Touch", "#contact"),
];
pub const SCROLL_HINT: &str = "Scroll";
pub const STACK_LABEL: &str = "Tech Stack:";
pub const LIVE_DEMO_LABEL: &str = "Live Demo";
pub const CODE_LABEL: &str = "GitHub";
