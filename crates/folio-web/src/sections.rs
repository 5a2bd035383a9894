//! DOM construction for every page section, from the core view models.

use crate::chrome::ChromeElements;
use crate::dom::{self, append, el, set_attr, text};
use crate::events::TiltCard;
use crate::motion::Animator;
use crate::style;
use anyhow::anyhow;
use folio_core::constants::{
    PROJECT_TILT_DIVISOR, PROJECT_TILT_LIFT_PX, SKILL_RING_CIRCUMFERENCE, TILT_PERSPECTIVE_PX,
};
use folio_core::content::{
    CODE_LABEL, CONTACTS, CONTACT_BLURB, EXPERIENCE, FLOATING_ICONS, FORM_FIELDS,
    FORM_SUBMIT_LABEL, HEADINGS, HERO_ACTIONS, LIVE_DEMO_LABEL, NAV_ITEMS, PROFILE, PROJECTS,
    SCROLL_HINT, SKILLS, SOCIALS, STACK_LABEL, STATS,
};
use folio_core::motion::presets;
use folio_core::present;
use folio_core::{AssetRegistry, ScenePreset};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handles to the parts of the page that stay live after construction.
#[derive(Default)]
pub struct Page {
    pub chrome: ChromeElements,
    pub tilt_cards: Vec<TiltCard>,
    pub canvases: Vec<(web::HtmlCanvasElement, ScenePreset)>,
    pub form: Option<web::HtmlElement>,
}

struct Builder<'a> {
    doc: &'a web::Document,
    assets: &'a AssetRegistry,
    animator: &'a mut Animator,
    page: Page,
}

/// Build the whole page under `root`, registering animations with `animator`.
pub fn build(
    document: &web::Document,
    root: &web::Element,
    assets: &AssetRegistry,
    animator: &mut Animator,
) -> anyhow::Result<Page> {
    let mut b = Builder {
        doc: document,
        assets,
        animator,
        page: Page::default(),
    };
    b.overlays(root)?;
    b.nav(root)?;
    let main = el(document, "main", "")?;
    append(root, &main)?;
    b.hero(&main)?;
    b.about(&main)?;
    b.skills(&main)?;
    b.projects(&main)?;
    b.experience(&main)?;
    b.contact(&main)?;
    b.footer(root)?;
    log::info!(
        "[mount] page built: {} scene canvases, {} animated elements",
        b.page.canvases.len(),
        b.animator.len()
    );
    Ok(b.page)
}

impl<'a> Builder<'a> {
    fn animate(&mut self, target: &web::Element, spec: folio_core::motion::MotionSpec) {
        self.animator.add(target, spec);
    }

    fn section(&self, parent: &web::Element, id: &str) -> anyhow::Result<web::HtmlElement> {
        let s = el(self.doc, "section", &format!("section section--{}", id))?;
        s.set_id(id);
        append(parent, &s)?;
        Ok(s)
    }

    fn scene_canvas(&mut self, section: &web::Element, preset: ScenePreset) -> anyhow::Result<()> {
        let canvas = self
            .doc
            .create_element("canvas")
            .map_err(|e| anyhow!("create <canvas>: {:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| anyhow!("<canvas> is not an HtmlCanvasElement"))?;
        canvas.set_class_name("scene");
        set_attr(&canvas, "data-scene", preset.name());
        append(section, &canvas)?;
        self.page.canvases.push((canvas, preset));
        Ok(())
    }

    fn heading(&mut self, section: &web::Element, id: &str) -> anyhow::Result<()> {
        let title = HEADINGS
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, t)| *t)
            .ok_or_else(|| anyhow!("no heading for section {}", id))?;
        let wrap = el(self.doc, "div", "heading")?;
        let h2 = text(self.doc, "h2", "heading__title", title)?;
        let underline = el(self.doc, "div", "heading__underline")?;
        append(&wrap, &h2)?;
        append(&wrap, &underline)?;
        append(section, &wrap)?;
        self.animate(&h2, presets::fade_in_up(30.0, 0.8, 0.0));
        self.animate(&underline, presets::heading_underline());
        Ok(())
    }

    /// Image for an asset key, or its alt text when the key is unknown.
    fn picture(&self, url: Option<String>, alt: &str, class: &str) -> anyhow::Result<web::Element> {
        match url {
            Some(src) => {
                let img = el(self.doc, "img", class)?;
                set_attr(&img, "src", &src);
                set_attr(&img, "alt", alt);
                Ok(img.into())
            }
            None => {
                let class = format!("{} {}--missing", class, class);
                Ok(text(self.doc, "span", &class, alt)?.into())
            }
        }
    }

    fn link(
        &self,
        class: &str,
        label: &str,
        href: &str,
        new_tab: bool,
    ) -> anyhow::Result<web::HtmlElement> {
        let a = text(self.doc, "a", class, label)?;
        set_attr(&a, "href", href);
        if new_tab {
            set_attr(&a, "target", "_blank");
            set_attr(&a, "rel", "noopener noreferrer");
        }
        Ok(a)
    }

    fn overlays(&mut self, root: &web::Element) -> anyhow::Result<()> {
        let cursor = el(self.doc, "div", "cursor")?;
        append(root, &cursor)?;
        let track = el(self.doc, "div", "progress")?;
        let bar = el(self.doc, "div", "progress__bar")?;
        append(&track, &bar)?;
        append(root, &track)?;
        self.page.chrome.cursor = Some(cursor);
        self.page.chrome.progress = Some(bar);
        Ok(())
    }

    fn nav(&mut self, root: &web::Element) -> anyhow::Result<()> {
        let nav = el(self.doc, "nav", "nav")?;
        let brand = self.link("nav__brand interactive", PROFILE.brand, "#hero", false)?;
        append(&nav, &brand)?;
        let list = el(self.doc, "ul", "nav__links")?;
        for link in present::nav_links(&NAV_ITEMS) {
            let li = el(self.doc, "li", "")?;
            let a = self.link("nav__link", link.label, &link.href, false)?;
            append(&li, &a)?;
            append(&list, &li)?;
        }
        append(&nav, &list)?;
        append(root, &nav)?;
        self.page.chrome.nav = Some(nav);
        Ok(())
    }

    fn hero(&mut self, main: &web::Element) -> anyhow::Result<()> {
        let s = self.section(main, "hero")?;
        self.scene_canvas(&s, ScenePreset::Hero)?;
        append(&s, &el(self.doc, "div", "hero__grid")?)?;

        let content = el(self.doc, "div", "hero__content")?;
        append(&content, &text(self.doc, "h1", "hero__name", PROFILE.name)?)?;
        let tagline = el(self.doc, "p", "hero__tagline")?;
        append(&tagline, &text(self.doc, "span", "hero__role", PROFILE.role)?)?;
        append(&tagline, &text(self.doc, "span", "", &format!(" {}", PROFILE.tagline))?)?;
        append(&content, &tagline)?;

        let actions = el(self.doc, "div", "hero__actions")?;
        for (label, href) in HERO_ACTIONS {
            append(&actions, &self.link("button interactive", label, href, false)?)?;
        }
        append(&content, &actions)?;
        append(&s, &content)?;
        append(&s, &text(self.doc, "div", "hero__scroll", SCROLL_HINT)?)?;
        self.page.chrome.hero_content = Some(content);
        Ok(())
    }

    fn about(&mut self, main: &web::Element) -> anyhow::Result<()> {
        let s = self.section(main, "about")?;
        self.scene_canvas(&s, ScenePreset::About)?;
        self.heading(&s, "about")?;

        let grid = el(self.doc, "div", "about__grid")?;
        let frame = el(self.doc, "div", "about__photo")?;
        let url = self.assets.resolve(PROFILE.photo);
        let photo = self.picture(url, PROFILE.name, "about__img")?;
        append(&frame, &photo)?;
        append(&grid, &frame)?;
        self.animate(&frame, presets::fade_in(0.8, 0.2));

        let body = el(self.doc, "div", "about__body")?;
        for (i, paragraph) in PROFILE.about.iter().enumerate() {
            let p = text(self.doc, "p", "about__text", paragraph)?;
            append(&body, &p)?;
            self.animate(&p, presets::fade_in_up(30.0, 0.8, 0.2 * (i + 1) as f32));
        }
        let stats = el(self.doc, "div", "stats")?;
        for (i, tile) in present::stat_tiles(&STATS).iter().enumerate() {
            let t = el(self.doc, "div", "stat interactive")?;
            append(&t, &text(self.doc, "div", "stat__number", tile.number)?)?;
            append(&t, &text(self.doc, "div", "stat__label", tile.label)?)?;
            append(&stats, &t)?;
            self.animate(&t, presets::stat_tile(i));
        }
        append(&body, &stats)?;
        append(&grid, &body)?;
        append(&s, &grid)?;
        Ok(())
    }

    fn skills(&mut self, main: &web::Element) -> anyhow::Result<()> {
        let s = self.section(main, "skills")?;
        self.scene_canvas(&s, ScenePreset::Skills)?;
        self.heading(&s, "skills")?;

        let grid = el(self.doc, "div", "skills__grid")?;
        for (i, badge) in present::skill_badges(&SKILLS).iter().enumerate() {
            let wrap = el(self.doc, "div", "skill")?;
            let card = el(self.doc, "div", "skill__card interactive")?;
            set_attr(&card, "style", &format!("--skill-color: {}", badge.color));
            set_attr(&card, "title", &format!("{}: {}%", badge.name, badge.proficiency));

            let ring = dom::svg(self.doc, "svg")?;
            set_attr(&ring, "class", "skill__ring");
            set_attr(&ring, "viewBox", "0 0 100 100");
            let track = dom::svg(self.doc, "circle")?;
            let arc = dom::svg(self.doc, "circle")?;
            for c in [&track, &arc] {
                set_attr(c, "cx", "50");
                set_attr(c, "cy", "50");
                set_attr(c, "r", "45");
                set_attr(c, "fill", "none");
            }
            set_attr(&track, "class", "skill__ring-track");
            set_attr(&arc, "class", "skill__ring-arc");
            set_attr(&arc, "stroke", badge.color);
            set_attr(&arc, "stroke-dasharray", &SKILL_RING_CIRCUMFERENCE.to_string());
            append(&ring, &track)?;
            append(&ring, &arc)?;
            append(&card, &ring)?;

            append(&card, &text(self.doc, "span", "skill__glyph", badge.glyph)?)?;
            append(&card, &text(self.doc, "span", "skill__name", badge.name)?)?;
            append(&card, &text(self.doc, "span", "skill__category", badge.category)?)?;
            append(&wrap, &card)?;
            append(&grid, &wrap)?;

            self.animate(&wrap, presets::skill_badge(i));
            let ring_spec = presets::skill_ring(i, badge.proficiency as f32);
            self.animator.add_hovered_by(&arc, &wrap, ring_spec);
        }
        append(&s, &grid)?;
        Ok(())
    }

    fn projects(&mut self, main: &web::Element) -> anyhow::Result<()> {
        let s = self.section(main, "projects")?;
        self.scene_canvas(&s, ScenePreset::Projects)?;
        self.heading(&s, "projects")?;

        let grid = el(self.doc, "div", "projects__grid")?;
        for (i, view) in present::project_cards(&PROJECTS, self.assets)
            .into_iter()
            .enumerate()
        {
            let wrap = el(self.doc, "div", "project")?;
            dom::set_style(&wrap, "perspective", &style::px(TILT_PERSPECTIVE_PX));
            let card = el(self.doc, "div", "project__card interactive")?;

            let media = el(self.doc, "div", "project__media")?;
            let img = self.picture(view.image.clone(), view.image_alt, "project__img")?;
            append(&media, &img)?;
            append(&card, &media)?;

            let body = el(self.doc, "div", "project__body")?;
            append(&body, &text(self.doc, "h3", "project__title", view.title)?)?;
            append(&body, &text(self.doc, "p", "project__text", view.description)?)?;
            append(&body, &text(self.doc, "p", "project__stack-label", STACK_LABEL)?)?;
            let chips = el(self.doc, "div", "project__stack")?;
            for tech in &view.stack {
                append(&chips, &text(self.doc, "span", "chip", tech)?)?;
            }
            append(&body, &chips)?;
            let links = el(self.doc, "div", "project__links")?;
            let live = self.link("button", LIVE_DEMO_LABEL, &view.live_href, true)?;
            let code = self.link("button button--ghost", CODE_LABEL, view.code_href, true)?;
            append(&links, &live)?;
            append(&links, &code)?;
            append(&body, &links)?;
            append(&card, &body)?;
            append(&wrap, &card)?;
            append(&grid, &wrap)?;

            self.animate(&wrap, presets::project_card(i));
            self.page.tilt_cards.push(TiltCard {
                el: card,
                divisor: PROJECT_TILT_DIVISOR,
                lift_px: PROJECT_TILT_LIFT_PX,
            });
        }
        append(&s, &grid)?;
        Ok(())
    }

    fn experience(&mut self, main: &web::Element) -> anyhow::Result<()> {
        let s = self.section(main, "experience")?;
        self.heading(&s, "experience")?;
        for (i, job) in present::experience_entries(&EXPERIENCE).iter().enumerate() {
            let card = el(self.doc, "div", "job interactive")?;
            append(&card, &text(self.doc, "h3", "job__title", job.title)?)?;
            append(&card, &text(self.doc, "p", "job__company", job.company)?)?;
            append(&card, &text(self.doc, "p", "job__period", job.period)?)?;
            append(&card, &text(self.doc, "p", "job__text", job.description)?)?;
            append(&s, &card)?;
            self.animate(&card, presets::fade_in_up(50.0, 0.8, 0.2 * i as f32));
        }
        Ok(())
    }

    fn contact(&mut self, main: &web::Element) -> anyhow::Result<()> {
        let s = self.section(main, "contact")?;

        let backdrop = el(self.doc, "div", "contact__backdrop")?;
        for (i, icon) in present::floating_icons(&FLOATING_ICONS).iter().enumerate() {
            let span = text(self.doc, "span", "floating-icon interactive", icon.glyph)?;
            set_attr(
                &span,
                "style",
                &style::floating_icon_style(icon.left_percent, icon.top_percent, icon.color),
            );
            append(&backdrop, &span)?;
            self.animate(&span, presets::floating_icon(i, icon.delay));
        }
        let glow = el(self.doc, "div", "contact__glow")?;
        append(&backdrop, &glow)?;
        for (i, spec) in presets::ambient_orbs().into_iter().enumerate() {
            let orb = el(self.doc, "div", &format!("orb orb--{}", i))?;
            append(&backdrop, &orb)?;
            self.animate(&orb, spec);
        }
        append(&s, &backdrop)?;

        self.heading(&s, "contact")?;
        let blurb = text(self.doc, "p", "contact__blurb", CONTACT_BLURB)?;
        append(&s, &blurb)?;
        self.animate(&blurb, presets::fade_in(0.8, 0.3));

        let links = el(self.doc, "div", "contact__links")?;
        for (i, view) in present::contact_links(&CONTACTS).iter().enumerate() {
            let a = el(self.doc, "a", "contact-link interactive")?;
            set_attr(&a, "href", view.href);
            if view.opens_new_tab {
                set_attr(&a, "target", "_blank");
                set_attr(&a, "rel", "noopener noreferrer");
            }
            set_attr(
                &a,
                "style",
                &format!(
                    "--accent: {}; background: {}",
                    view.color,
                    style::tinted(view.color, "20")
                ),
            );
            append(&a, &text(self.doc, "span", "contact-link__glyph", view.glyph)?)?;
            append(&a, &text(self.doc, "span", "contact-link__title", view.title)?)?;
            append(&a, &text(self.doc, "span", "contact-link__value", view.value)?)?;
            append(&links, &a)?;
            self.animate(&a, presets::contact_link(i));
        }
        append(&s, &links)?;

        let form = el(self.doc, "form", "contact__form")?;
        for (name, label) in FORM_FIELDS {
            let tag = if name == "message" { "textarea" } else { "input" };
            let field = el(self.doc, tag, "contact__field")?;
            set_attr(&field, "name", name);
            set_attr(&field, "placeholder", label);
            if tag == "input" {
                set_attr(&field, "type", if name == "email" { "email" } else { "text" });
            }
            append(&form, &text(self.doc, "label", "contact__label", label)?)?;
            append(&form, &field)?;
        }
        let submit = text(self.doc, "button", "button interactive", FORM_SUBMIT_LABEL)?;
        set_attr(&submit, "type", "submit");
        append(&form, &submit)?;
        append(&s, &form)?;
        self.animate(&form, presets::fade_in_up(50.0, 0.8, 0.4));

        self.page.chrome.glow = Some((glow, s));
        self.page.form = Some(form);
        Ok(())
    }

    fn footer(&mut self, root: &web::Element) -> anyhow::Result<()> {
        let footer = el(self.doc, "footer", "footer")?;
        let socials = el(self.doc, "div", "footer__socials")?;
        for (i, social) in present::social_links(&SOCIALS).iter().enumerate() {
            let a = self.link("footer__social interactive", social.name, social.href, true)?;
            append(&socials, &a)?;
            self.animate(&a, presets::footer_social(i));
        }
        append(&footer, &socials)?;
        append(&footer, &text(self.doc, "p", "footer__copy", PROFILE.copyright)?)?;
        append(root, &footer)?;
        Ok(())
    }
}
