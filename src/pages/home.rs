use chrono::{Datelike, Utc};
use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::catalog::{self, ServiceFilter};
use crate::components::button::{Button, ButtonVariant};
use crate::components::icons::Icon;
use crate::components::logo::BrandLogo;
use crate::components::section_title::SectionTitle;
use crate::config;
use crate::navigation::{scroll_to_section, Section};

struct CoreValue {
    icon: Icon,
    title: &'static str,
    blurb: &'static str,
}

const CORE_VALUES: [CoreValue; 4] = [
    CoreValue {
        icon: Icon::Award,
        title: "Quality",
        blurb: "Excellence in every detail",
    },
    CoreValue {
        icon: Icon::Heart,
        title: "Integrity",
        blurb: "Honesty & transparency",
    },
    CoreValue {
        icon: Icon::Clock,
        title: "Reliability",
        blurb: "Deadlines consistently met",
    },
    CoreValue {
        icon: Icon::Lightbulb,
        title: "Innovation",
        blurb: "New technologies & methods",
    },
];

const QUOTE_SERVICE_OPTIONS: [&str; 6] = [
    "Interior Design",
    "Construction / Tiling",
    "HVAC / AC Services",
    "Electrical / Plumbing",
    "Building Cleaning",
    "Other",
];

#[function_component(Home)]
pub fn home() -> Html {
    let active_filter = use_state(ServiceFilter::default);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // The form has no submission target; suppressing the default is the
    // whole behavior.
    let on_quote_submit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("quote form submit suppressed: no submission target configured");
    });

    let filter_tabs = ServiceFilter::TABS
        .iter()
        .map(|tab| {
            let tab = *tab;
            let active_filter = active_filter.clone();
            let class = if *active_filter == tab {
                "filter-tab active"
            } else {
                "filter-tab"
            };
            html! {
                <button
                    key={tab.label()}
                    class={class}
                    onclick={Callback::from(move |_: MouseEvent| active_filter.set(tab))}
                >
                    { tab.label() }
                </button>
            }
        })
        .collect::<Html>();

    let service_cards = catalog::visible_services(*active_filter)
        .iter()
        .map(|entry| {
            html! {
                <div key={entry.title} class="service-card">
                    <div class="service-icon">{ entry.icon.render() }</div>
                    <h3>{ entry.title }</h3>
                    <p>{ entry.description }</p>
                </div>
            }
        })
        .collect::<Html>();

    let extra_services = catalog::ADDITIONAL_SERVICES
        .iter()
        .map(|label| {
            html! {
                <div key={*label} class="extra-service">
                    { Icon::Check.render() }
                    <span>{ *label }</span>
                </div>
            }
        })
        .collect::<Html>();

    let value_cards = CORE_VALUES
        .iter()
        .map(|value| {
            html! {
                <div key={value.title} class="value-card">
                    <div class="value-icon">{ value.icon.render() }</div>
                    <h3>{ value.title }</h3>
                    <p>{ value.blurb }</p>
                </div>
            }
        })
        .collect::<Html>();

    let project_cards = config::PROJECTS
        .iter()
        .map(|project| {
            html! {
                <div key={project.title} class="project-card">
                    <img src={project.image} alt={project.title} />
                    <div class="project-overlay">
                        <span class="project-tag">{ project.tag }</span>
                        <h3>{ project.title }</h3>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    let quote_options = QUOTE_SERVICE_OPTIONS
        .iter()
        .map(|option| html! { <option key={*option}>{ *option }</option> })
        .collect::<Html>();

    let explore_services =
        Callback::from(|_: MouseEvent| scroll_to_section(Section::Services));
    let who_we_are = Callback::from(|_: MouseEvent| scroll_to_section(Section::About));

    let year = Utc::now().year();

    html! {
        <div class="home-page">
            // Hero
            <section id="hero" class="hero">
                <div class="hero-backdrop">
                    <img src={config::HERO_IMAGE} alt="Luxury interior" />
                    <div class="hero-shade"></div>
                </div>
                <div class="hero-content fade-in">
                    <div class="hero-badge">
                        <span>{"Established in Dubai"}</span>
                    </div>
                    <h1>
                        {"Complete Interior"}<br />
                        <span class="text-gold">{"Solutions"}</span>
                    </h1>
                    <p>
                        {"Premier interior and construction services for homes, offices, \
                          and commercial spaces in Dubai. Craftsmanship, Quality, and \
                          Innovation."}
                    </p>
                    <div class="hero-actions">
                        <Button variant={ButtonVariant::Gold} onclick={explore_services}>
                            {"Explore Services"}
                        </Button>
                        <Button
                            variant={ButtonVariant::Secondary}
                            class="btn-light"
                            onclick={who_we_are}
                        >
                            {"Who We Are"}
                        </Button>
                    </div>
                </div>
            </section>

            // About: mission & vision
            <section id="about" class="about-section">
                <div class="container about-grid">
                    <div class="about-photo">
                        <img
                            src={config::ABOUT_IMAGE}
                            alt="Modern interior design showcase by Zinat Al Ruh"
                        />
                        <div class="about-iso-card">
                            <div class="about-iso-head">
                                <div class="about-iso-icon">{ Icon::Shield.render() }</div>
                                <span>{"ISO Standards"}</span>
                            </div>
                            <p>{"Strict adherence to international safety protocols and regulations."}</p>
                        </div>
                    </div>

                    <div class="about-text">
                        <SectionTitle
                            subtitle="About Zinat Al Ruh"
                            title="Crafting Spaces That Inspire"
                            centered={false}
                        />
                        <p class="about-lead">
                            {"Zinat Al Ruh is a premier interior and technical services \
                              company based in Dubai. We provide complete interior and \
                              construction solutions tailored to meet the unique needs of \
                              homes, offices, and commercial establishments."}
                        </p>
                        <p>
                            {"Our commitment to craftsmanship, quality, and innovation \
                              drives us to deliver spaces that enhance everyday life."}
                        </p>
                        <div class="mission-vision">
                            <div class="info-card mission">
                                <h3>{"Our Mission"}</h3>
                                <p>{"To deliver exceptional interior solutions combining quality craftsmanship, creative innovation, and genuine commitment to excellence."}</p>
                            </div>
                            <div class="info-card vision">
                                <h3>{"Our Vision"}</h3>
                                <p>{"To be the leading provider of comprehensive interior solutions recognized for reliability and unwavering dedication."}</p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>

            // Core values
            <section class="values-band">
                <div class="container values-grid">
                    { value_cards }
                </div>
            </section>

            // Services
            <section id="services" class="services-section">
                <div class="container">
                    <SectionTitle subtitle="Our Expertise" title="Comprehensive Services" />

                    <div class="filter-tabs">
                        { filter_tabs }
                    </div>

                    <div class="service-grid">
                        { service_cards }
                    </div>

                    <div class="extra-services">
                        <h3>{"Additional Specialized Services"}</h3>
                        <div class="extra-services-grid">
                            { extra_services }
                        </div>
                    </div>
                </div>
            </section>

            // Projects
            <section id="projects" class="projects-section">
                <div class="container">
                    <SectionTitle subtitle="Our Work" title="Recent Projects" />
                    <div class="project-grid">
                        { project_cards }
                    </div>
                </div>
            </section>

            // Contact
            <section id="contact" class="contact-section">
                <div class="contact-topline"></div>
                <div class="container contact-grid">
                    <div class="contact-details">
                        <span class="section-subtitle">{"Get In Touch"}</span>
                        <h2>{"Ready to Transform Your Space?"}</h2>
                        <p class="contact-lead">
                            {"Contact us today for a quote! Our team is ready to provide \
                              quality craftsmanship and exceptional service for your next \
                              project."}
                        </p>

                        <div class="contact-items">
                            <div class="contact-item">
                                <div class="contact-item-icon">{ Icon::Pin.render() }</div>
                                <div>
                                    <h4>{"Location"}</h4>
                                    <p>{ config::ADDRESS }</p>
                                </div>
                            </div>
                            <div class="contact-item">
                                <div class="contact-item-icon">{ Icon::Phone.render() }</div>
                                <div>
                                    <h4>{"Phone"}</h4>
                                    <p>{ config::PHONE }</p>
                                </div>
                            </div>
                            <div class="contact-item">
                                <div class="contact-item-icon">{ Icon::Mail.render() }</div>
                                <div>
                                    <h4>{"Email"}</h4>
                                    <p>{ config::EMAIL }</p>
                                </div>
                            </div>
                        </div>

                        <div class="contact-socials">
                            <h4>{"Follow Us"}</h4>
                            <div class="social-links">
                                <a
                                    href={config::FACEBOOK_URL}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label="Facebook"
                                >
                                    { Icon::Facebook.render() }
                                </a>
                                <a
                                    href={config::INSTAGRAM_URL}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label="Instagram"
                                >
                                    { Icon::Instagram.render() }
                                </a>
                            </div>
                        </div>
                    </div>

                    <div class="quote-card">
                        <h3>{"Request a Quote"}</h3>
                        <form onsubmit={on_quote_submit}>
                            <div class="form-row">
                                <div class="form-field">
                                    <label for="quote-name">{"Name"}</label>
                                    <input id="quote-name" type="text" placeholder="Your Name" />
                                </div>
                                <div class="form-field">
                                    <label for="quote-phone">{"Phone"}</label>
                                    <input id="quote-phone" type="tel" placeholder="+971..." />
                                </div>
                            </div>
                            <div class="form-field">
                                <label for="quote-email">{"Email"}</label>
                                <input id="quote-email" type="email" placeholder="your@email.com" />
                            </div>
                            <div class="form-field">
                                <label for="quote-service">{"Service Interested"}</label>
                                <select id="quote-service">
                                    { quote_options }
                                </select>
                            </div>
                            <div class="form-field">
                                <label for="quote-message">{"Message"}</label>
                                <textarea
                                    id="quote-message"
                                    placeholder="Tell us about your project requirements..."
                                />
                            </div>
                            <Button variant={ButtonVariant::Primary} class="btn-full">
                                {"Send Message"}
                            </Button>
                        </form>
                    </div>
                </div>
            </section>

            // Footer
            <footer class="site-footer">
                <div class="container footer-content">
                    <BrandLogo class="footer-logo" />
                    <div class="footer-links">
                        <a href="#hero">{"Home"}</a>
                        <a href="#services">{"Services"}</a>
                        <a href="#projects">{"Projects"}</a>
                        <a href="#contact">{"Contact"}</a>
                    </div>
                    <p>{ format!("© {} Zinat Al Ruh. All rights reserved.", year) }</p>
                </div>
            </footer>

            <style>
                {r#"
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    font-family: 'Montserrat', sans-serif;
    color: #1e293b;
    background: #fff;
}

h1, h2, h3, h4 {
    font-family: 'Playfair Display', serif;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.icon {
    width: 24px;
    height: 24px;
}

@keyframes fadeIn {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}

.fade-in {
    animation: fadeIn 1s ease-in;
}

.text-gold {
    background: linear-gradient(135deg, #BF953F, #B38728, #AA771C);
    -webkit-background-clip: text;
    background-clip: text;
    -webkit-text-fill-color: transparent;
    color: transparent;
}

/* Buttons */

.btn {
    padding: 0.75rem 2rem;
    border-radius: 9999px;
    font-family: 'Montserrat', sans-serif;
    font-weight: 500;
    font-size: 1rem;
    cursor: pointer;
    transition: all 0.3s ease;
    border: 2px solid transparent;
}

.btn:hover {
    transform: translateY(-4px);
    box-shadow: 0 10px 20px rgba(15, 23, 42, 0.15);
}

.btn-primary {
    background: #1e3a8a;
    color: #fff;
}

.btn-primary:hover {
    background: #1e40af;
}

.btn-secondary {
    background: transparent;
    border-color: #1e3a8a;
    color: #1e3a8a;
}

.btn-secondary:hover {
    background: #1e3a8a;
    color: #fff;
}

.btn-gold {
    background: linear-gradient(to right, #fbbf24, #d97706);
    color: #fff;
    border: none;
    box-shadow: 0 4px 10px rgba(217, 119, 6, 0.3);
}

.btn-light {
    border-color: #fff;
    color: #fff;
}

.btn-light:hover {
    background: #fff;
    color: #0f172a;
}

.btn-full {
    width: 100%;
}

/* Navbar */

.top-nav {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    z-index: 50;
    padding: 1.5rem 0;
    background: transparent;
    transition: all 0.3s ease;
}

.top-nav.scrolled {
    background: #fff;
    box-shadow: 0 10px 25px rgba(15, 23, 42, 0.1);
    padding: 0.5rem 0;
}

.nav-content {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}

.nav-brand {
    cursor: pointer;
}

.nav-logo img {
    height: 64px;
    width: auto;
    object-fit: contain;
}

.brand-fallback {
    display: flex;
    flex-direction: column;
}

.brand-name {
    font-family: 'Playfair Display', serif;
    font-size: 1.25rem;
    font-weight: 700;
    letter-spacing: 0.15em;
    color: #1e3a8a;
}

.top-nav:not(.scrolled) .nav-logo .brand-name {
    color: #fff;
}

.brand-accent {
    color: #f59e0b;
}

.brand-strapline {
    font-size: 0.5rem;
    letter-spacing: 0.2em;
    text-transform: uppercase;
    color: #64748b;
}

.top-nav:not(.scrolled) .nav-logo .brand-strapline {
    color: #e2e8f0;
}

.nav-right {
    display: flex;
    align-items: center;
    gap: 2rem;
}

.nav-link {
    background: none;
    border: none;
    font-family: 'Montserrat', sans-serif;
    font-weight: 500;
    font-size: 0.875rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: #fff;
    cursor: pointer;
    transition: color 0.2s ease;
}

.top-nav.scrolled .nav-link {
    color: #334155;
}

.nav-link:hover {
    color: #f59e0b;
}

.burger-menu {
    display: none;
    flex-direction: column;
    gap: 5px;
    background: none;
    border: none;
    cursor: pointer;
    padding: 4px;
}

.burger-menu span {
    width: 26px;
    height: 3px;
    background: #f59e0b;
    border-radius: 2px;
}

/* Hero */

.hero {
    position: relative;
    height: 100vh;
    display: flex;
    align-items: center;
    justify-content: center;
    overflow: hidden;
}

.hero-backdrop {
    position: absolute;
    inset: 0;
    background: #0f172a;
}

.hero-backdrop img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    opacity: 0.5;
}

.hero-shade {
    position: absolute;
    inset: 0;
    background: linear-gradient(to bottom,
        rgba(15, 23, 42, 0.7),
        rgba(15, 23, 42, 0.5),
        rgba(15, 23, 42, 0.8));
}

.hero-content {
    position: relative;
    z-index: 10;
    text-align: center;
    color: #fff;
    padding: 4rem 1.5rem 0;
    max-width: 900px;
}

.hero-badge {
    display: inline-block;
    border: 1px solid rgba(245, 158, 11, 0.5);
    background: rgba(15, 23, 42, 0.3);
    backdrop-filter: blur(4px);
    padding: 0.5rem 1.5rem;
    border-radius: 9999px;
    margin-bottom: 1.5rem;
}

.hero-badge span {
    color: #fbbf24;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    font-size: 0.75rem;
    font-weight: 700;
}

.hero-content h1 {
    font-size: 4.5rem;
    font-weight: 700;
    line-height: 1.1;
    margin-bottom: 1.5rem;
}

.hero-content p {
    font-size: 1.375rem;
    font-weight: 300;
    color: #e2e8f0;
    margin-bottom: 2.5rem;
}

.hero-actions {
    display: flex;
    gap: 1rem;
    justify-content: center;
    flex-wrap: wrap;
}

/* About */

.about-section {
    padding: 5rem 0;
    background: #fff;
}

.about-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 4rem;
    align-items: center;
}

.about-photo {
    position: relative;
}

.about-photo img {
    width: 100%;
    height: 500px;
    object-fit: cover;
    border-radius: 1rem;
    box-shadow: 0 25px 50px rgba(15, 23, 42, 0.25);
}

.about-iso-card {
    position: absolute;
    bottom: 2rem;
    right: 2rem;
    background: #fff;
    padding: 1.5rem;
    border-radius: 0.75rem;
    box-shadow: 0 10px 25px rgba(15, 23, 42, 0.15);
    max-width: 18rem;
}

.about-iso-head {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    margin-bottom: 0.5rem;
    font-weight: 700;
    color: #0f172a;
}

.about-iso-icon {
    background: #f59e0b;
    color: #fff;
    border-radius: 9999px;
    padding: 0.5rem;
    display: flex;
}

.about-iso-icon .icon {
    width: 20px;
    height: 20px;
}

.about-iso-card p {
    font-size: 0.875rem;
    color: #475569;
}

.about-text > p {
    color: #475569;
    line-height: 1.7;
    margin-bottom: 1.5rem;
}

.about-lead {
    font-size: 1.125rem;
}

.mission-vision {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1.5rem;
    margin-top: 0.5rem;
}

.info-card {
    background: #f8fafc;
    padding: 1.5rem;
    border-radius: 0.75rem;
}

.info-card.mission {
    border-left: 4px solid #1e3a8a;
}

.info-card.vision {
    border-left: 4px solid #f59e0b;
}

.info-card.mission h3 {
    color: #1e3a8a;
}

.info-card.vision h3 {
    color: #d97706;
}

.info-card h3 {
    font-size: 1.25rem;
    margin-bottom: 0.75rem;
}

.info-card p {
    font-size: 0.875rem;
    color: #475569;
}

/* Core values */

.values-band {
    padding: 4rem 0;
    background: #0f172a;
    color: #fff;
}

.values-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
    text-align: center;
}

.value-card {
    padding: 1.5rem;
    border: 1px solid #334155;
    border-radius: 0.75rem;
    transition: background 0.3s ease;
}

.value-card:hover {
    background: #1e293b;
}

.value-icon {
    color: #f59e0b;
    display: flex;
    justify-content: center;
    margin-bottom: 1rem;
}

.value-icon .icon {
    width: 30px;
    height: 30px;
}

.value-card h3 {
    font-size: 1.25rem;
    margin-bottom: 0.5rem;
}

.value-card p {
    color: #94a3b8;
    font-size: 0.875rem;
}

/* Section titles */

.section-title {
    text-align: center;
    margin-bottom: 3rem;
}

.section-title.left-aligned {
    text-align: left;
}

.section-subtitle {
    display: block;
    color: #d97706;
    font-weight: 700;
    text-transform: uppercase;
    letter-spacing: 0.1em;
    font-size: 0.875rem;
    margin-bottom: 0.5rem;
}

.section-title h2 {
    display: inline-block;
    position: relative;
    font-size: 2.5rem;
    color: #0f172a;
    padding-bottom: 1rem;
}

.section-title h2::after {
    content: '';
    position: absolute;
    bottom: 0;
    left: 50%;
    transform: translateX(-50%);
    width: 6rem;
    height: 4px;
    background: #f59e0b;
    border-radius: 9999px;
}

.section-title.left-aligned h2::after {
    left: 0;
    transform: none;
}

/* Services */

.services-section {
    padding: 6rem 0;
    background: #f8fafc;
}

.filter-tabs {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 1rem;
    margin-bottom: 3rem;
}

.filter-tab {
    padding: 0.5rem 1.5rem;
    border-radius: 9999px;
    border: none;
    font-family: 'Montserrat', sans-serif;
    font-weight: 500;
    background: #fff;
    color: #475569;
    cursor: pointer;
    transition: all 0.2s ease;
}

.filter-tab:hover {
    background: #eff6ff;
}

.filter-tab.active {
    background: #1e3a8a;
    color: #fff;
    box-shadow: 0 10px 20px rgba(30, 58, 138, 0.25);
}

.service-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
}

.service-card {
    background: #fff;
    padding: 2rem;
    border-radius: 1rem;
    border: 1px solid #f1f5f9;
    box-shadow: 0 1px 3px rgba(15, 23, 42, 0.05);
    transition: box-shadow 0.3s ease;
}

.service-card:hover {
    box-shadow: 0 20px 40px rgba(15, 23, 42, 0.12);
}

.service-icon {
    width: 3.5rem;
    height: 3.5rem;
    background: #eff6ff;
    border-radius: 0.75rem;
    display: flex;
    align-items: center;
    justify-content: center;
    color: #1e3a8a;
    margin-bottom: 1.5rem;
    transition: all 0.3s ease;
}

.service-card:hover .service-icon {
    background: #1e3a8a;
    color: #fff;
}

.service-card h3 {
    font-size: 1.25rem;
    color: #0f172a;
    margin-bottom: 0.75rem;
    transition: color 0.3s ease;
}

.service-card:hover h3 {
    color: #d97706;
}

.service-card p {
    color: #64748b;
    font-size: 0.875rem;
    line-height: 1.6;
}

.extra-services {
    margin-top: 4rem;
    background: #fff;
    padding: 2rem;
    border-radius: 1rem;
    border: 1px solid #f1f5f9;
    box-shadow: 0 10px 25px rgba(15, 23, 42, 0.08);
}

.extra-services h3 {
    font-size: 1.5rem;
    text-align: center;
    margin-bottom: 2rem;
}

.extra-services-grid {
    display: grid;
    grid-template-columns: repeat(3, 1fr);
    gap: 1rem;
}

.extra-service {
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.5rem;
    background: #f8fafc;
    border-radius: 0.5rem;
    color: #334155;
    font-weight: 500;
}

.extra-service .icon {
    width: 16px;
    height: 16px;
    color: #f59e0b;
    flex-shrink: 0;
}

/* Projects */

.projects-section {
    padding: 5rem 0;
    background: #fff;
}

.project-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 2rem;
}

.project-card {
    position: relative;
    height: 20rem;
    border-radius: 1rem;
    overflow: hidden;
    cursor: pointer;
}

.project-card img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.5s ease;
}

.project-card:hover img {
    transform: scale(1.1);
}

.project-overlay {
    position: absolute;
    inset: 0;
    background: linear-gradient(to top, rgba(0, 0, 0, 0.8), transparent);
    opacity: 0;
    transition: opacity 0.3s ease;
    display: flex;
    flex-direction: column;
    justify-content: flex-end;
    padding: 2rem;
}

.project-card:hover .project-overlay {
    opacity: 1;
}

.project-tag {
    color: #fbbf24;
    font-size: 0.875rem;
    font-weight: 700;
    text-transform: uppercase;
    margin-bottom: 0.5rem;
}

.project-overlay h3 {
    color: #fff;
    font-size: 1.5rem;
}

/* Contact */

.contact-section {
    position: relative;
    padding: 6rem 0;
    background: #0f172a;
    color: #fff;
}

.contact-topline {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 2px;
    background: linear-gradient(to right, #1e3a8a, #f59e0b, #1e3a8a);
}

.contact-grid {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 4rem;
}

.contact-details h2 {
    font-size: 2.5rem;
    margin-bottom: 1.5rem;
}

.contact-lead {
    color: #94a3b8;
    font-size: 1.125rem;
    margin-bottom: 2.5rem;
}

.contact-items {
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

.contact-item {
    display: flex;
    align-items: flex-start;
    gap: 1rem;
}

.contact-item-icon {
    background: #1e40af;
    color: #fbbf24;
    padding: 0.75rem;
    border-radius: 0.5rem;
    display: flex;
}

.contact-item h4 {
    font-size: 1.125rem;
    margin-bottom: 0.25rem;
}

.contact-item p {
    color: #cbd5e1;
}

.contact-socials {
    margin-top: 2rem;
    padding-top: 2rem;
    border-top: 1px solid #1e293b;
}

.contact-socials h4 {
    font-size: 1.125rem;
    margin-bottom: 1rem;
}

.social-links {
    display: flex;
    gap: 1rem;
}

.social-links a {
    background: #1e40af;
    color: #fbbf24;
    padding: 0.75rem;
    border-radius: 0.5rem;
    display: flex;
    transition: all 0.2s ease;
}

.social-links a:hover {
    background: #f59e0b;
    color: #fff;
}

.quote-card {
    background: #fff;
    color: #0f172a;
    padding: 2rem;
    border-radius: 1rem;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
}

.quote-card h3 {
    font-size: 1.5rem;
    color: #1e3a8a;
    margin-bottom: 1.5rem;
}

.quote-card form {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.form-row {
    display: grid;
    grid-template-columns: 1fr 1fr;
    gap: 1rem;
}

.form-field label {
    display: block;
    font-size: 0.875rem;
    font-weight: 500;
    color: #334155;
    margin-bottom: 0.25rem;
}

.form-field input,
.form-field select,
.form-field textarea {
    width: 100%;
    padding: 0.5rem 1rem;
    border-radius: 0.5rem;
    border: 1px solid #cbd5e1;
    font-family: 'Montserrat', sans-serif;
    font-size: 1rem;
    outline: none;
    transition: border-color 0.2s ease, box-shadow 0.2s ease;
}

.form-field input:focus,
.form-field select:focus,
.form-field textarea:focus {
    border-color: #f59e0b;
    box-shadow: 0 0 0 1px #f59e0b;
}

.form-field textarea {
    height: 8rem;
    resize: vertical;
}

/* Footer */

.site-footer {
    background: #020617;
    color: #94a3b8;
    padding: 3rem 0;
    border-top: 1px solid #1e293b;
}

.footer-content {
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 1.5rem;
    flex-wrap: wrap;
}

.footer-logo img {
    height: 56px;
    width: auto;
    opacity: 0.8;
}

.footer-logo .brand-name {
    color: #fff;
}

.footer-logo .brand-strapline {
    color: #94a3b8;
}

.footer-links {
    display: flex;
    gap: 2rem;
    font-size: 0.875rem;
}

.footer-links a {
    color: #94a3b8;
    text-decoration: none;
    transition: color 0.2s ease;
}

.footer-links a:hover {
    color: #f59e0b;
}

.site-footer p {
    font-size: 0.875rem;
}

/* Responsive */

@media (max-width: 968px) {
    .about-grid,
    .contact-grid,
    .project-grid {
        grid-template-columns: 1fr;
    }

    .service-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .values-grid {
        grid-template-columns: repeat(2, 1fr);
    }

    .hero-content h1 {
        font-size: 3rem;
    }

    .hero-content p {
        font-size: 1.125rem;
    }
}

@media (max-width: 768px) {
    .burger-menu {
        display: flex;
    }

    .nav-right {
        display: none;
    }

    .nav-right.mobile-menu-open {
        display: flex;
        position: absolute;
        top: 100%;
        left: 0;
        width: 100%;
        flex-direction: column;
        align-items: flex-start;
        background: #fff;
        box-shadow: 0 20px 25px rgba(15, 23, 42, 0.15);
        padding: 1.5rem;
        gap: 1rem;
    }

    .nav-right.mobile-menu-open .nav-link {
        color: #1e293b;
        text-align: left;
    }

    .service-grid,
    .extra-services-grid,
    .mission-vision,
    .form-row {
        grid-template-columns: 1fr;
    }
}
"#}
            </style>
        </div>
    }
}
