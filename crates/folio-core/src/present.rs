//! View models: one per content record, in input order.

use crate::assets::AssetRegistry;
use crate::content::{Contact, Experience, FloatingIcon, Project, Skill, Social, Stat};
use crate::motion::presets::ring_dash_offset;

#[derive(Clone, Debug, PartialEq)]
pub struct SkillBadge {
    pub name: &'static str,
    pub category: &'static str,
    pub color: &'static str,
    pub glyph: &'static str,
    pub proficiency: u8,
    /// Ring dash offset once the badge has animated in.
    pub dash_offset: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProjectCardView {
    pub title: &'static str,
    pub description: &'static str,
    pub stack: Vec<&'static str>,
    pub live_href: String,
    pub code_href: &'static str,
    /// `None` when the image key is not registered; the card shows alt text.
    pub image: Option<String>,
    pub image_alt: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactLinkView {
    pub title: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub color: &'static str,
    pub glyph: &'static str,
    pub opens_new_tab: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExperienceView {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StatTile {
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FloatingIconView {
    pub glyph: &'static str,
    pub color: &'static str,
    pub left_percent: f32,
    pub top_percent: f32,
    pub delay: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: String,
}

pub fn skill_badges(skills: &[Skill]) -> Vec<SkillBadge> {
    skills
        .iter()
        .map(|s| SkillBadge {
            name: s.name,
            category: s.category,
            color: s.color,
            glyph: s.icon.glyph(),
            proficiency: s.proficiency,
            dash_offset: ring_dash_offset(s.proficiency as f32),
        })
        .collect()
}

pub fn project_cards(projects: &[Project], assets: &AssetRegistry) -> Vec<ProjectCardView> {
    projects
        .iter()
        .map(|p| ProjectCardView {
            title: p.title,
            description: p.description,
            stack: p.stack.split(", ").collect(),
            live_href: format!("https://{}", p.live_url),
            code_href: p.code_url,
            image: assets.resolve(p.image),
            image_alt: p.title,
        })
        .collect()
}

pub fn contact_links(contacts: &[Contact]) -> Vec<ContactLinkView> {
    contacts
        .iter()
        .map(|c| ContactLinkView {
            title: c.title,
            value: c.value,
            href: c.link,
            color: c.color,
            glyph: c.icon.glyph(),
            opens_new_tab: c.link.starts_with("http"),
        })
        .collect()
}

pub fn experience_entries(entries: &[Experience]) -> Vec<ExperienceView> {
    entries
        .iter()
        .map(|e| ExperienceView {
            title: e.title,
            company: e.company,
            period: e.period,
            description: e.description,
        })
        .collect()
}

pub fn stat_tiles(stats: &[Stat]) -> Vec<StatTile> {
    stats
        .iter()
        .map(|s| StatTile {
            number: s.number,
            label: s.label,
        })
        .collect()
}

pub fn social_links(socials: &[Social]) -> Vec<SocialLink> {
    socials
        .iter()
        .map(|s| SocialLink {
            name: s.name,
            href: s.url,
        })
        .collect()
}

/// Icons laid out on a 4-column grid over the contact section.
pub fn floating_icons(icons: &[FloatingIcon]) -> Vec<FloatingIconView> {
    icons
        .iter()
        .enumerate()
        .map(|(i, f)| FloatingIconView {
            glyph: f.icon.glyph(),
            color: f.color,
            left_percent: 10.0 + (i % 4) as f32 * 20.0,
            top_percent: 15.0 + (i / 4) as f32 * 25.0,
            delay: f.delay,
        })
        .collect()
}

pub fn nav_links(items: &[&'static str]) -> Vec<NavLink> {
    items
        .iter()
        .map(|&label| NavLink {
            label,
            href: format!("#{}", label.to_lowercase()),
        })
        .collect()
}
