//! The fixed service catalog and the category filter over it.
//!
//! The catalog is declared once at build time and never mutated; filtering
//! only derives a view, preserving declaration order.

use crate::components::icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCategory {
    Construction,
    Technical,
    Specialized,
}

/// The currently selected tab above the service grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceFilter {
    #[default]
    All,
    Construction,
    Technical,
    Specialized,
}

impl ServiceFilter {
    /// Tab order as rendered.
    pub const TABS: [ServiceFilter; 4] = [
        ServiceFilter::All,
        ServiceFilter::Construction,
        ServiceFilter::Technical,
        ServiceFilter::Specialized,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceFilter::All => "All Services",
            ServiceFilter::Construction => "Construction",
            ServiceFilter::Technical => "Technical",
            ServiceFilter::Specialized => "Specialized",
        }
    }

    pub fn admits(self, category: ServiceCategory) -> bool {
        match self {
            ServiceFilter::All => true,
            ServiceFilter::Construction => category == ServiceCategory::Construction,
            ServiceFilter::Technical => category == ServiceCategory::Technical,
            ServiceFilter::Specialized => category == ServiceCategory::Specialized,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceEntry {
    pub category: ServiceCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const SERVICES: [ServiceEntry; 8] = [
    ServiceEntry {
        category: ServiceCategory::Construction,
        title: "Floor & Wall Tiling",
        description: "Premium ceramic, porcelain, and marble installation for elegant spaces.",
        icon: Icon::Grid,
    },
    ServiceEntry {
        category: ServiceCategory::Construction,
        title: "Plaster Works",
        description: "Flawless wall finishes and restorative plastering for smooth surfaces.",
        icon: Icon::Hammer,
    },
    ServiceEntry {
        category: ServiceCategory::Construction,
        title: "Wallpaper Fixing",
        description: "Expert installation of decorative wallpapers to enhance interior aesthetics.",
        icon: Icon::Brush,
    },
    ServiceEntry {
        category: ServiceCategory::Construction,
        title: "False Ceiling",
        description: "Modern gypsum and suspended ceiling designs with integrated lighting.",
        icon: Icon::Grid,
    },
    ServiceEntry {
        category: ServiceCategory::Technical,
        title: "Electrical Fittings",
        description: "Complete electrical wiring, fixture installation, and safety checks.",
        icon: Icon::Bolt,
    },
    ServiceEntry {
        category: ServiceCategory::Technical,
        title: "Plumbing & Sanitary",
        description: "Professional installation of sanitary ware, piping, and drainage systems.",
        icon: Icon::Droplet,
    },
    ServiceEntry {
        category: ServiceCategory::Specialized,
        title: "Air Conditioning",
        description: "Installation, maintenance, and repair of HVAC systems for optimal cooling.",
        icon: Icon::Fan,
    },
    ServiceEntry {
        category: ServiceCategory::Specialized,
        title: "Ventilation Systems",
        description: "Advanced air filtration and ventilation solutions for healthy environments.",
        icon: Icon::Fan,
    },
];

/// Plain labels rendered as a checklist under the catalog grid.
pub const ADDITIONAL_SERVICES: [&str; 6] = [
    "Building Cleaning",
    "Water Well Drilling",
    "Light Partitions",
    "Maintenance Contracts",
    "Gypsum Works",
    "Floor Polishing",
];

/// The subset of [`SERVICES`] the filter admits, in declaration order.
pub fn visible_services(filter: ServiceFilter) -> Vec<&'static ServiceEntry> {
    SERVICES
        .iter()
        .filter(|entry| filter.admits(entry.category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_returns_the_full_catalog_in_order() {
        let visible = visible_services(ServiceFilter::All);
        assert_eq!(visible.len(), 8);
        for (shown, declared) in visible.iter().zip(SERVICES.iter()) {
            assert_eq!(shown.title, declared.title);
        }
    }

    #[test]
    fn category_filters_return_exactly_their_entries() {
        let cases = [
            (ServiceFilter::Construction, ServiceCategory::Construction),
            (ServiceFilter::Technical, ServiceCategory::Technical),
            (ServiceFilter::Specialized, ServiceCategory::Specialized),
        ];
        for (filter, category) in cases {
            let visible = visible_services(filter);
            assert!(!visible.is_empty());
            assert!(visible.iter().all(|entry| entry.category == category));
            let expected: Vec<_> = SERVICES
                .iter()
                .filter(|entry| entry.category == category)
                .collect();
            assert_eq!(visible, expected);
        }
    }

    #[test]
    fn category_filters_preserve_declaration_order() {
        let visible = visible_services(ServiceFilter::Construction);
        let titles: Vec<_> = visible.iter().map(|entry| entry.title).collect();
        assert_eq!(
            titles,
            [
                "Floor & Wall Tiling",
                "Plaster Works",
                "Wallpaper Fixing",
                "False Ceiling"
            ]
        );
    }

    #[test]
    fn every_tab_admits_at_least_one_entry() {
        for tab in ServiceFilter::TABS {
            assert!(!visible_services(tab).is_empty());
        }
    }

    #[test]
    fn default_filter_is_all() {
        assert_eq!(ServiceFilter::default(), ServiceFilter::All);
    }
}
