use dioxus::prelude::*;

use crate::common::icons::Glyph;
use crate::common::motion::{Animated, Motion};
use crate::common::picture::{Fit, Picture};
use crate::config::{HERO, SERVICES, ServiceOffering};

/// One card per offering, in list order, each entering a little after the last.
pub fn cards(services: &'static [ServiceOffering]) -> Vec<(ServiceOffering, Motion)> {
    services
        .iter()
        .enumerate()
        .map(|(index, service)| {
            let motion = Motion::slide_in(0.0, 20.0, 0.3).staggered(index, 0.1);
            (*service, motion)
        })
        .collect()
}

#[component]
fn HeroBanner() -> Element {
    rsx! {
        section { class: "hero",
            Picture {
                class: "hero-image",
                src: HERO.image,
                alt: "Hero Image",
                fit: Fit::Cover,
                fill: true,
            }
            Animated {
                class: "hero-content",
                motion: Motion::slide_in(0.0, 20.0, 0.5),
                h2 { class: "hero-title", "{HERO.title}" }
                p { class: "hero-tagline", "{HERO.tagline}" }
                button { class: "btn btn-secondary btn-lg", "{HERO.call_to_action}" }
            }
        }
    }
}

#[component]
fn ServiceCard(service: ServiceOffering) -> Element {
    rsx! {
        div { class: "card",
            div { class: "card-header",
                h3 { class: "card-title",
                    Glyph { icon: service.icon, class: "icon-lg" }
                    "{service.title}"
                }
            }
            div { class: "card-content",
                Picture {
                    class: "service-image",
                    src: service.image,
                    alt: service.title,
                    width: 300,
                    height: 200,
                    fit: Fit::Cover,
                }
                p { class: "card-description", "{service.description}" }
                // No destination yet
                button { class: "btn btn-outline service-cta", "Learn More" }
            }
        }
    }
}

#[component]
pub fn ContentArea() -> Element {
    rsx! {
        main { class: "content",
            HeroBanner {}
            section { class: "services",
                Animated {
                    class: "services-grid",
                    motion: Motion::fade_in(0.5).delayed(0.2),
                    for (service, motion) in cards(SERVICES) {
                        Animated { key: "{service.title}", motion,
                            ServiceCard { service }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_card_per_service_in_order() {
        let titles: Vec<_> = cards(SERVICES).iter().map(|(service, _)| service.title).collect();
        assert_eq!(
            titles,
            ["Car Service", "AC Service", "Renting Service", "Lending Service"]
        );
    }

    #[test]
    fn cards_enter_one_after_another() {
        let delays: Vec<_> = cards(SERVICES).iter().map(|(_, motion)| motion.delay).collect();
        assert_eq!(delays.len(), 4);
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(delays[0], 0.0);
    }
}
