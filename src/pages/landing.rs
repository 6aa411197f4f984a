use yew::prelude::*;

use crate::config::SiteConfig;
use crate::dom::page::PageBehavior;
use crate::pages::legal::{PrivacyModal, TermsModal};

const NAV_ITEMS: &[(&str, &str)] = &[
    ("#services", "Services"),
    ("#process", "Process"),
    ("#testimonials", "Stories"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

#[derive(Properties, PartialEq)]
struct SectionHeaderProps {
    title: AttrValue,
    subtitle: AttrValue,
}

#[function_component(SectionHeader)]
fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <h2>{ props.title.clone() }</h2>
            <p>{ props.subtitle.clone() }</p>
        </div>
    }
}

#[function_component(SiteHeader)]
fn site_header() -> Html {
    html! {
        <header class="header" id="header">
            <div class="header__inner">
                <a href="#" class="header__logo">{"ThriveIn"}</a>
                <button class="menu-toggle" id="menu-toggle" type="button" aria-label="Toggle navigation">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class="nav" id="nav">
                    { for NAV_ITEMS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav__link">{ *label }</a>
                    }) }
                </nav>
            </div>
        </header>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero" id="hero">
            <div class="hero__content">
                <h1>{"Build a career you actually want to show up for"}</h1>
                <p class="hero__subtitle">
                    {"One-on-one coaching for people who are done drifting and ready to grow on purpose."}
                </p>
                <div class="hero__cta-group">
                    <a href="#contact" class="btn btn--primary">{"Book a free call"}</a>
                    <a href="#services" class="btn btn--ghost">{"See how it works"}</a>
                </div>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    let cards = [
        ("Career Clarity", "Pin down what you want next and why, before you start applying."),
        ("Leadership Coaching", "Grow into a new role with a sparring partner who has been there."),
        ("Transition Support", "Change fields without starting from zero."),
    ];
    html! {
        <section class="services" id="services">
            <SectionHeader title="Services" subtitle="Pick the kind of support that fits where you are." />
            <div class="services__grid">
                { for cards.iter().map(|(title, text)| html! {
                    <div class="service-card">
                        <h3>{ *title }</h3>
                        <p>{ *text }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Process)]
fn process() -> Html {
    let steps = [
        ("Intro call", "A free 30 minute conversation about where you are."),
        ("Plan", "We agree on goals and a cadence that fits your calendar."),
        ("Sessions", "Focused sessions with homework that actually moves things."),
        ("Review", "We measure progress and decide what comes next."),
    ];
    html! {
        <section class="process" id="process">
            <SectionHeader title="How It Works" subtitle="Four steps, no surprises." />
            <ol class="steps">
                { for steps.iter().enumerate().map(|(i, (title, text))| html! {
                    <li class="step">
                        <span class="step__number">{ (i + 1).to_string() }</span>
                        <h3>{ *title }</h3>
                        <p>{ *text }</p>
                    </li>
                }) }
            </ol>
            <ul class="features">
                <li class="feature">{"🎯 Goal-based sessions"}</li>
                <li class="feature">{"🗓️ Flexible scheduling"}</li>
                <li class="feature">{"💬 Async check-ins between sessions"}</li>
            </ul>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    let quotes = [
        ("I finally stopped second-guessing every move and landed the role I had been circling for two years.", "Maria, Product Lead"),
        ("Practical, honest, and never generic. Every session ended with something I could do the next morning.", "Jonas, Engineer"),
    ];
    html! {
        <section class="testimonials" id="testimonials">
            <SectionHeader title="Stories" subtitle="What clients say after working together." />
            <div class="testimonials__grid">
                { for quotes.iter().map(|(quote, author)| html! {
                    <blockquote class="testimonial-card">
                        <p>{ *quote }</p>
                        <cite>{ *author }</cite>
                    </blockquote>
                }) }
            </div>
        </section>
    }
}

#[function_component(Faq)]
fn faq() -> Html {
    html! {
        <section class="faq" id="faq">
            <SectionHeader title="Frequently Asked Questions" subtitle="Jump straight to a topic:" />
            <div class="faq__links">
                <a href="#faq-general" class="faq__link" data-faq-link="true">{"General"}</a>
                <a href="#faq-pricing" class="faq__link" data-faq-link="true">{"Pricing"}</a>
            </div>

            <details class="faq-category" id="faq-general">
                <summary>{"General"}</summary>
                <p><b>{"Who is this for? "}</b>{"Professionals at any stage who want a structured way to grow."}</p>
                <p><b>{"Is it online? "}</b>{"Yes, all sessions run over video."}</p>
            </details>

            <details class="faq-category" id="faq-pricing">
                <summary>{"Pricing"}</summary>
                <p><b>{"How much does it cost? "}</b>{"Packages start at four sessions. The intro call is free."}</p>
                <p><b>{"Can I cancel? "}</b>{"Unused sessions are refunded in full."}</p>
            </details>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section class="contact" id="contact">
            <SectionHeader title="Get In Touch" subtitle="Tell us a little about where you are." />
            <form class="contact__form" id="contact-form" action="https://formspree.io/f/YOUR_FORM_ID" method="POST">
                <label>{"Name"}<input name="name" type="text" /></label>
                <label>{"Email"}<input name="email" type="email" /></label>
                <label>{"Message"}<textarea name="message" rows="5" /></label>
                <button type="submit" class="btn btn--primary"><span>{"Send message"}</span></button>
            </form>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <p>
                {"© "}<span id="current-year"></span>{" ThriveIn. All rights reserved."}
            </p>
            <div class="footer__links">
                <a href="#privacy">{"Privacy Policy"}</a>
                {" | "}
                <a href="#terms">{"Terms of Service"}</a>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Bind behaviors once the markup is in the document; unbind on unmount.
    use_effect_with_deps(
        move |_| {
            let behavior = PageBehavior::attach(SiteConfig::load());
            move || drop(behavior)
        },
        (),
    );

    html! {
        <>
            <SiteHeader />
            <main>
                <Hero />
                <Services />
                <Process />
                <Testimonials />
                <Faq />
                <Contact />
            </main>
            <Footer />
            <PrivacyModal />
            <TermsModal />
        </>
    }
}
