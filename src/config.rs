//! Fixed site content: company identity, contact details, and the
//! externally hosted photography used by the hero, about, and project
//! sections.

pub const COMPANY_NAME: &str = "Zinat Al Ruh";
pub const STRAPLINE: &str = "Technical Services LLC";

pub const LOGO_ASSET: &str = "/assets/zinat-al-ruh-logo.jpg";

pub const ADDRESS: &str = "9 Deira, Dubai, UAE";
pub const PHONE: &str = "+971 58 525 8199";
pub const EMAIL: &str = "sales@zinatalruh.com";

pub const FACEBOOK_URL: &str = "https://facebook.com";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/zinat_alruh/";

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c?ixlib=rb-4.0.3&auto=format&fit=crop&w=2053&q=80";
pub const ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1631679706909-1844bbd07221?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub tag: &'static str,
    pub title: &'static str,
    pub image: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        tag: "Residential",
        title: "Luxury Bathroom Design",
        image: "https://images.unsplash.com/photo-1552321554-5fefe8c9ef14?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
    },
    Project {
        tag: "Commercial",
        title: "Flower Shop Kiosk",
        image: "https://images.unsplash.com/photo-1565538810643-b5bdb714032a?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
    },
    Project {
        tag: "Interior Fit-out",
        title: "Modern Living Space",
        image: "https://images.unsplash.com/photo-1618221195710-dd6b41faaea6?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
    },
    Project {
        tag: "Technical Services",
        title: "Office HVAC Installation",
        image: "https://images.unsplash.com/photo-1504328345606-18aff75f8732?ixlib=rb-4.0.3&auto=format&fit=crop&w=1000&q=80",
    },
];
