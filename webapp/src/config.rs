//! Static site content.
//!
//! Everything the landing page shows is declared here and never mutated at
//! runtime. The navigation list is the single source for the desktop bar,
//! the side menu and the footer quick links.

use serde::Serialize;

use crate::common::icons::Icon;

pub const BRAND: &str = "service2u";

/// Viewports at least this wide (in CSS pixels) get the desktop navigation.
pub const DESKTOP_MIN_WIDTH: f64 = 768.0;

/// Prefix applied to every local storage key the app writes.
pub const STORAGE_PREFIX: &str = "service2u";

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct NavigationItem {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ServiceOffering {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Hero {
    pub title: &'static str,
    pub tagline: &'static str,
    pub image: &'static str,
    pub call_to_action: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ContactDetails {
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
}

pub const MENU_ITEMS: &[NavigationItem] = &[
    NavigationItem {
        icon: Icon::Home,
        label: "Home",
        href: "/",
    },
    NavigationItem {
        icon: Icon::Users,
        label: "Users",
        href: "#",
    },
    NavigationItem {
        icon: Icon::Settings,
        label: "Settings",
        href: "#",
    },
    NavigationItem {
        icon: Icon::HelpCircle,
        label: "Help",
        href: "#",
    },
    NavigationItem {
        icon: Icon::Phone,
        label: "Contact",
        href: "/contact",
    },
];

const SERVICE_IMAGE: &str = "/placeholder.svg?height=200&width=300";

pub const SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        icon: Icon::Car,
        title: "Car Service",
        description: "Professional car maintenance and repair",
        image: SERVICE_IMAGE,
    },
    ServiceOffering {
        icon: Icon::Tv,
        title: "AC Service",
        description: "Expert air conditioning installation and repair",
        image: SERVICE_IMAGE,
    },
    ServiceOffering {
        icon: Icon::Home,
        title: "Renting Service",
        description: "Find your perfect rental property",
        image: SERVICE_IMAGE,
    },
    ServiceOffering {
        icon: Icon::DollarSign,
        title: "Lending Service",
        description: "Flexible lending options for your needs",
        image: SERVICE_IMAGE,
    },
];

pub const HERO: Hero = Hero {
    title: "Welcome to My App",
    tagline: "Discover amazing services and boost your productivity!",
    image: "/placeholder.svg?height=800&width=1200",
    call_to_action: "Get Started",
};

pub const SIDE_MENU_TITLE: &str = "Menu";
pub const SIDE_MENU_DESCRIPTION: &str = "we are here to help you";

pub const ABOUT_US: &str = "We provide top-notch services to make your life easier. \
    From car maintenance to home cleaning, we've got you covered.";

pub const CONTACT: ContactDetails = ContactDetails {
    address: "123 Service Street, City, Country",
    phone: "+1 234 567 890",
    email: "info@myapp.com",
};

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn menu_labels_are_unique() {
        let labels: HashSet<_> = MENU_ITEMS.iter().map(|item| item.label).collect();
        assert_eq!(labels.len(), MENU_ITEMS.len());
    }

    #[test]
    fn service_titles_are_unique() {
        let titles: HashSet<_> = SERVICES.iter().map(|service| service.title).collect();
        assert_eq!(titles.len(), SERVICES.len());
    }

    #[test]
    fn menu_items_keep_their_order() {
        let labels: Vec<_> = MENU_ITEMS.iter().map(|item| item.label).collect();
        assert_eq!(labels, ["Home", "Users", "Settings", "Help", "Contact"]);
        assert_eq!(MENU_ITEMS[0].href, "/");
        assert_eq!(MENU_ITEMS[4].href, "/contact");
    }

    #[test]
    fn four_services_are_offered() {
        assert_eq!(SERVICES.len(), 4);
        assert!(SERVICES.iter().all(|service| service.image == SERVICE_IMAGE));
    }

    #[test]
    fn navigation_items_serialize() {
        let json = serde_json::to_value(MENU_ITEMS[4]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "icon": "Phone", "label": "Contact", "href": "/contact" })
        );
    }
}
