// Host-side tests for the static content and the view-model builders.

use folio_core::content::{
    Contact, Icon, Project, Skill, CONTACTS, EXPERIENCE, FLOATING_ICONS, HEADINGS, NAV_ITEMS,
    PROJECTS, SECTIONS, SKILLS, SOCIALS, STATS,
};
use folio_core::present::{
    contact_links, experience_entries, floating_icons, nav_links, project_cards, skill_badges,
    social_links, stat_tiles,
};
use folio_core::AssetRegistry;

fn skill(name: &'static str, proficiency: u8) -> Skill {
    Skill {
        name,
        category: "Tools",
        color: "#123456",
        proficiency,
        icon: Icon::Zap,
    }
}

#[test]
fn builders_accept_empty_lists() {
    assert!(skill_badges(&[]).is_empty());
    assert!(project_cards(&[], &AssetRegistry::default()).is_empty());
    assert!(contact_links(&[]).is_empty());
    assert!(experience_entries(&[]).is_empty());
    assert!(stat_tiles(&[]).is_empty());
    assert!(social_links(&[]).is_empty());
    assert!(floating_icons(&[]).is_empty());
    assert!(nav_links(&[]).is_empty());
}

#[test]
fn skill_badges_keep_order_and_ring_offset() {
    let one = skill_badges(&[skill("Rust", 100)]);
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].dash_offset, 0.0);
    assert_eq!(one[0].glyph, Icon::Zap.glyph());

    let half = skill_badges(&[skill("Zig", 50)]);
    assert!((half[0].dash_offset - 141.5).abs() < 1e-4);

    let all = skill_badges(&SKILLS);
    assert_eq!(all.len(), 16);
    let names: Vec<_> = all.iter().map(|b| b.name).collect();
    let expected: Vec<_> = SKILLS.iter().map(|s| s.name).collect();
    assert_eq!(names, expected);
    assert!(all.iter().all(|b| b.proficiency == 100));
}

#[test]
fn project_cards_match_content() {
    let cards = project_cards(&PROJECTS, &AssetRegistry::default());
    assert_eq!(cards.len(), 3);
    for (card, project) in cards.iter().zip(PROJECTS.iter()) {
        assert_eq!(card.title, project.title);
        assert_eq!(card.live_href, format!("https://{}", project.live_url));
        assert_eq!(card.code_href, "https://github.com");
        assert_eq!(card.image_alt, project.title);
    }
    assert_eq!(
        cards[0].live_href,
        "https://health-axis-frontend.vercel.app"
    );
    assert_eq!(cards[1].stack, vec!["Next.js", "ShadCN UI", "Drizzle ORM"]);
    assert_eq!(cards[2].image.as_deref(), Some("assets/project3.png"));
}

#[test]
fn unregistered_project_image_falls_back_to_alt_text() {
    let project = Project {
        title: "Untitled",
        description: "",
        stack: "Rust",
        live_url: "example.org",
        code_url: "https://github.com",
        image: "missing",
    };
    let cards = project_cards(&[project], &AssetRegistry::default());
    assert_eq!(cards[0].image, None);
    assert_eq!(cards[0].image_alt, "Untitled");
    assert_eq!(cards[0].stack, vec!["Rust"]);
}

#[test]
fn asset_registry_resolves_under_base() {
    let mut reg = AssetRegistry::new("/static/img/");
    assert!(reg.is_empty());
    reg.register("logo", "logo.svg");
    assert_eq!(reg.base(), "/static/img");
    assert_eq!(reg.resolve("logo").as_deref(), Some("/static/img/logo.svg"));
    assert_eq!(reg.resolve("profile"), None);

    let defaults = AssetRegistry::default();
    assert_eq!(defaults.len(), 4);
    assert_eq!(
        defaults.resolve("profile").as_deref(),
        Some("assets/profile.jpg")
    );

    let mut bare = AssetRegistry::new("");
    bare.register("a", "a.png");
    assert_eq!(bare.resolve("a").as_deref(), Some("a.png"));

    let cdn = AssetRegistry::with_defaults("https://cdn.example.com/");
    assert_eq!(
        cdn.resolve("project2").as_deref(),
        Some("https://cdn.example.com/project2.png")
    );
}

#[test]
fn contact_links_open_web_targets_in_new_tab() {
    let links = contact_links(&CONTACTS);
    assert_eq!(links.len(), 4);
    assert_eq!(links[0].href, "mailto:mvsaketh2020@gmail.com");
    assert!(!links[0].opens_new_tab);
    assert!(!links[1].opens_new_tab);
    assert!(links[2].opens_new_tab);
    assert!(links[3].opens_new_tab);

    let single = contact_links(&[Contact {
        title: "Site",
        value: "example.org",
        link: "https://example.org",
        color: "#fff",
        icon: Icon::Globe,
    }]);
    assert_eq!(single.len(), 1);
    assert_eq!(single[0].glyph, Icon::Globe.glyph());
}

#[test]
fn simple_lists_preserve_order() {
    let stats = stat_tiles(&STATS);
    assert_eq!(
        stats.iter().map(|s| s.number).collect::<Vec<_>>(),
        vec!["5+", "1+", "99%"]
    );
    let socials = social_links(&SOCIALS);
    assert_eq!(socials.len(), 4);
    assert_eq!(socials[2].name, "Twitter");
    let jobs = experience_entries(&EXPERIENCE);
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].period, "2024 - Present");
}

#[test]
fn floating_icons_fill_a_four_column_grid() {
    let icons = floating_icons(&FLOATING_ICONS);
    assert_eq!(icons.len(), 12);
    assert_eq!((icons[0].left_percent, icons[0].top_percent), (10.0, 15.0));
    assert_eq!((icons[3].left_percent, icons[3].top_percent), (70.0, 15.0));
    assert_eq!((icons[4].left_percent, icons[4].top_percent), (10.0, 40.0));
    assert_eq!(icons[11].top_percent, 65.0);
    assert_eq!(icons[11].delay, 5.5);
}

#[test]
fn nav_links_point_at_section_ids() {
    let links = nav_links(&NAV_ITEMS);
    assert_eq!(links.len(), 5);
    for link in &links {
        let id = link.href.trim_start_matches('#');
        assert!(SECTIONS.contains(&id), "{} has no section", link.href);
    }
    assert_eq!(links[0].href, "#about");
}

#[test]
fn every_heading_names_a_section() {
    for (id, title) in HEADINGS {
        assert!(SECTIONS.contains(&id));
        assert!(!title.is_empty());
    }
}
