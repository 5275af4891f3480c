use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::menus::FooterSection;
use crate::core::{platform, timing};
use crate::i18n::Language;
use crate::t;

/// Delay before scrolling, so the closing dropdown does not jump with the page.
pub const SCROLL_DELAY_MS: u64 = 300;
/// How long a revealed section stays highlighted.
pub const HIGHLIGHT_MS: u64 = 2_000;

/// Mounted footer sections plus the one currently highlighted.
#[derive(Clone, Copy, PartialEq)]
pub struct FooterAnchors {
    help: Signal<Option<Rc<MountedData>>>,
    contact: Signal<Option<Rc<MountedData>>>,
    highlighted: Signal<Option<FooterSection>>,
}

impl FooterAnchors {
    pub fn new() -> Self {
        Self {
            help: Signal::new(None),
            contact: Signal::new(None),
            highlighted: Signal::new(None),
        }
    }

    fn slot(&self, section: FooterSection) -> Signal<Option<Rc<MountedData>>> {
        match section {
            FooterSection::Help => self.help,
            FooterSection::Contact => self.contact,
        }
    }

    pub fn register(&self, section: FooterSection, node: Rc<MountedData>) {
        let mut slot = self.slot(section);
        slot.set(Some(node));
    }

    pub fn is_highlighted(&self, section: FooterSection) -> bool {
        *self.highlighted.read() == Some(section)
    }

    /// Scrolls `section` into view after a short delay and highlights it.
    pub fn reveal(&self, section: FooterSection) {
        let anchors = *self;
        platform::spawn_future(async move {
            timing::sleep_ms(SCROLL_DELAY_MS).await;
            let node = anchors.slot(section).peek().as_ref().cloned();
            match node {
                Some(node) => {
                    if let Err(err) = node.scroll_to(ScrollBehavior::Smooth).await {
                        tracing::warn!("could not scroll to `{}`: {err:?}", section.id());
                    }
                }
                None => tracing::warn!("footer section `{}` is not mounted", section.id()),
            }

            let mut highlighted = anchors.highlighted;
            highlighted.set(Some(section));
            timing::sleep_ms(HIGHLIGHT_MS).await;
            if *highlighted.peek() == Some(section) {
                highlighted.set(None);
            }
        });
    }

    fn section_class(&self, section: FooterSection) -> &'static str {
        if self.is_highlighted(section) {
            "site-footer__section section-highlight"
        } else {
            "site-footer__section"
        }
    }
}

impl Default for FooterAnchors {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn SiteFooter() -> Element {
    let lang: Language = use_context::<Signal<Language>>()();
    let anchors = use_context::<FooterAnchors>();
    let year = timing::today().year();

    rsx! {
        footer { class: "site-footer",
            div { class: "site-footer__sections",
                section {
                    id: FooterSection::Help.id(),
                    class: anchors.section_class(FooterSection::Help),
                    onmounted: move |evt: MountedEvent| anchors.register(FooterSection::Help, evt.data()),
                    h3 { {t!(lang, "footer-help-title")} }
                    p { {t!(lang, "footer-help-body")} }
                }
                section {
                    id: FooterSection::Contact.id(),
                    class: anchors.section_class(FooterSection::Contact),
                    onmounted: move |evt: MountedEvent| anchors.register(FooterSection::Contact, evt.data()),
                    h3 { {t!(lang, "footer-contact-title")} }
                    p { {t!(lang, "footer-contact-body")} }
                }
            }
            p { class: "site-footer__rights",
                "© {year} Nos Fuimos de Finca. "
                {t!(lang, "footer-rights")}
            }
        }
    }
}
