use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::countdown::CountdownTimer;
use crate::components::notification::{Notice, NoticeKind, Toast};
use crate::waitlist;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1663811397219-c572550dffc5?auto=format&fit=crop&w=2000&q=80";

const PROCESS_STEPS: &[&str] = &[
    "Upload your photo",
    "We craft it on luxury canvas",
    "Receive timeless beauty",
];

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "fas fa-image",
        "Professional-grade Canvas",
        "Premium quality cotton-poly blend canvas that brings your images to life with vivid colors and sharp details.",
    ),
    (
        "fas fa-palette",
        "Fade-resistant Archival Inks",
        "Museum-quality pigment inks that preserve your memories for generations without fading.",
    ),
    (
        "fas fa-vector-square",
        "Hand-stretched Wooden Frames",
        "Each canvas is carefully hand-stretched on kiln-dried, solid wood frames for lasting durability.",
    ),
    (
        "fas fa-star",
        "Gallery-level Finishing",
        "Professional finishing touches that give your canvas the refined look of gallery artwork.",
    ),
    (
        "fas fa-truck",
        "Delivered to Your Door",
        "Carefully packaged and shipped directly to you, ready to hang and admire.",
    ),
];

const BENEFITS: &[(&str, &str, &str)] = &[
    (
        "fas fa-star",
        "Premium Quality",
        "Every canvas is printed with precision and crafted to last for years.",
    ),
    (
        "fas fa-palette",
        "Fully Personalized",
        "Your photo. Your size. Your vibe.",
    ),
    (
        "fas fa-upload",
        "Effortless Ordering",
        "Upload → Customize → Relax. We handle the rest.",
    ),
    (
        "fas fa-gift",
        "Perfect for Gifting",
        "Birthdays, anniversaries, housewarmings — unforgettable gifts made easy.",
    ),
];

const TRUST_POINTS: &[&str] = &[
    "No spam, ever",
    "Exclusive early discounts",
    "First access to new features",
];

fn scroll_to_waitlist() {
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        if let Some(section) = document.get_element_by_id("waitlist") {
            let mut options = web_sys::ScrollIntoViewOptions::new();
            options.behavior(web_sys::ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component(WaitlistSection)]
fn waitlist_section() -> Html {
    let email = use_state(String::new);
    let is_submitting = use_state(|| false);
    let notice = use_state(|| None::<Notice>);

    let oninput = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_dismiss = {
        let notice = notice.clone();
        Callback::from(move |_: ()| notice.set(None))
    };

    let onsubmit = {
        let email = email.clone();
        let is_submitting = is_submitting.clone();
        let notice = notice.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let address = (*email).clone();
            if !waitlist::is_valid_email(&address) {
                notice.set(Some(Notice::new(
                    NoticeKind::Error,
                    "Please enter a valid email address",
                )));
                return;
            }
            let email = email.clone();
            let is_submitting = is_submitting.clone();
            let notice = notice.clone();
            is_submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = waitlist::join_waitlist(&address).await;
                if outcome.clears_input() {
                    email.set(String::new());
                }
                notice.set(Some(outcome.notice()));
                is_submitting.set(false);
            });
        })
    };

    let waitlist_css = r#"
        .waitlist-section {
            padding: 7rem 1.5rem;
            text-align: center;
        }
        .waitlist-inner {
            max-width: 640px;
            margin: 0 auto;
        }
        .live-badge {
            display: inline-flex;
            align-items: center;
            gap: 0.6rem;
            padding: 0.5rem 1.1rem;
            border-radius: 999px;
            background: #1a1713;
            border: 1px solid rgba(212, 168, 75, 0.3);
            font-size: 0.85rem;
            color: #d4a84b;
        }
        .live-dot {
            width: 8px;
            height: 8px;
            border-radius: 50%;
            background: #d4a84b;
            animation: live-pulse 1.5s ease-in-out infinite;
        }
        @keyframes live-pulse {
            0%, 100% { box-shadow: 0 0 0 0 rgba(212, 168, 75, 0.5); }
            50% { box-shadow: 0 0 0 6px rgba(212, 168, 75, 0); }
        }
        .waitlist-section h2 {
            margin: 1.5rem 0 1rem;
            font-family: 'Playfair Display', serif;
            font-size: 2.6rem;
            letter-spacing: -0.02em;
        }
        .waitlist-section h2 span {
            color: #d4a84b;
        }
        .waitlist-subtitle {
            color: #a89f8f;
            margin-bottom: 2.5rem;
        }
        .waitlist-form {
            display: flex;
            gap: 1rem;
            max-width: 520px;
            margin: 0 auto;
        }
        .input-wrap {
            position: relative;
            flex: 1;
        }
        .input-icon {
            position: absolute;
            left: 1.1rem;
            top: 50%;
            transform: translateY(-50%);
            color: #a89f8f;
        }
        .email-input {
            width: 100%;
            padding: 1.1rem 1rem 1.1rem 2.8rem;
            border-radius: 10px;
            border: 1px solid rgba(212, 168, 75, 0.2);
            background: #1a1713;
            color: #f2ede3;
            font-size: 1rem;
            transition: border-color 0.3s ease;
        }
        .email-input:focus {
            outline: none;
            border-color: rgba(212, 168, 75, 0.6);
            box-shadow: 0 0 0 3px rgba(212, 168, 75, 0.1);
        }
        .email-input::placeholder {
            color: #6f6759;
        }
        .submit-button {
            display: inline-flex;
            align-items: center;
            gap: 0.6rem;
            padding: 1.1rem 2rem;
            border: none;
            border-radius: 10px;
            background: #d4a84b;
            color: #141109;
            font-size: 1rem;
            font-weight: 600;
            cursor: pointer;
            box-shadow: 0 0 30px rgba(212, 168, 75, 0.25);
            transition: background 0.3s ease;
        }
        .submit-button:hover {
            background: #e0b85e;
        }
        .submit-button:disabled {
            opacity: 0.5;
            cursor: default;
        }
        .trust-points {
            display: flex;
            flex-wrap: wrap;
            justify-content: center;
            gap: 1.5rem;
            margin-top: 2rem;
            font-size: 0.9rem;
            color: #a89f8f;
        }
        .trust-points span i {
            color: #d4a84b;
            margin-right: 0.5rem;
        }
        @media (max-width: 640px) {
            .waitlist-form {
                flex-direction: column;
            }
            .waitlist-section h2 {
                font-size: 2rem;
            }
        }
    "#;

    html! {
        <section id="waitlist" class="waitlist-section">
            <div class="waitlist-inner">
                <div class="live-badge">
                    <span class="live-dot"></span>
                    {"We're Almost Live"}
                </div>
                <h2>{"Be the First to "}<span>{"Experience It"}</span></h2>
                <p class="waitlist-subtitle">
                    {"Early access. Exclusive launch offers. Limited-time discounts."}
                </p>
                <form class="waitlist-form" onsubmit={onsubmit}>
                    <div class="input-wrap">
                        <i class="fas fa-envelope input-icon"></i>
                        <input
                            type="email"
                            class="email-input"
                            placeholder="Enter your email"
                            value={(*email).clone()}
                            oninput={oninput}
                        />
                    </div>
                    <button type="submit" class="submit-button" disabled={*is_submitting}>
                        { if *is_submitting { "Joining..." } else { "Notify Me" } }
                        <i class="fas fa-arrow-right"></i>
                    </button>
                </form>
                <div class="trust-points">
                    { TRUST_POINTS.iter().map(|point| html! {
                        <span key={*point}><i class="fas fa-check"></i>{ *point }</span>
                    }).collect::<Html>() }
                </div>
            </div>
            <Toast notice={(*notice).clone()} on_dismiss={on_dismiss} />
            <style>{waitlist_css}</style>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let overlay_opacity = use_state(|| 0.55);

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

    // Deepen the hero overlay as the user scrolls away from it
    {
        let overlay_opacity = overlay_opacity.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let overlay_opacity = overlay_opacity.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    let factor = (scroll_y / 600.0).min(1.0);
                                    overlay_opacity.set(0.55 + factor * 0.3);
                                }
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let notify_click = Callback::from(move |_: MouseEvent| scroll_to_waitlist());
    let early_access_click = Callback::from(move |_: MouseEvent| scroll_to_waitlist());

    let current_year = js_sys::Date::new_0().get_full_year();

    let page_css = r#"
        .landing-page {
            min-height: 100vh;
            background: #0e0c0a;
        }
        .site-header {
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            z-index: 50;
            backdrop-filter: blur(16px);
            background: rgba(14, 12, 10, 0.8);
            border-bottom: 1px solid rgba(255, 255, 255, 0.05);
        }
        .site-header-inner {
            max-width: 1200px;
            margin: 0 auto;
            padding: 1rem 1.5rem;
            display: flex;
            align-items: center;
            justify-content: space-between;
        }
        .wordmark {
            display: flex;
            align-items: center;
            gap: 0.6rem;
            font-family: 'Playfair Display', serif;
            font-size: 1.3rem;
            font-weight: 600;
            letter-spacing: -0.01em;
        }
        .wordmark i,
        .wordmark span {
            color: #d4a84b;
        }
        .header-cta {
            font-size: 0.9rem;
            font-weight: 500;
            color: #d4a84b;
            text-decoration: none;
            transition: color 0.3s ease;
        }
        .header-cta:hover {
            color: #f2ede3;
        }
        .hero {
            position: relative;
            min-height: 100vh;
            display: flex;
            align-items: center;
            justify-content: center;
            overflow: hidden;
            text-align: center;
        }
        .hero-background {
            position: absolute;
            inset: 0;
            background-size: cover;
            background-position: center;
        }
        .hero-overlay {
            position: absolute;
            inset: 0;
            background: #0e0c0a;
            pointer-events: none;
        }
        .hero-content {
            position: relative;
            z-index: 2;
            max-width: 900px;
            padding: 7rem 1.5rem 4rem;
        }
        .hero-badge {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            padding: 0.5rem 1.1rem;
            border-radius: 999px;
            background: #1a1713;
            border: 1px solid rgba(212, 168, 75, 0.2);
            font-size: 0.85rem;
            color: #a89f8f;
        }
        .hero-badge i {
            color: #d4a84b;
        }
        .hero h1 {
            margin: 2rem 0 1.5rem;
            font-family: 'Playfair Display', serif;
            font-size: 4rem;
            line-height: 1.1;
            letter-spacing: -0.02em;
        }
        .hero h1 span {
            background: linear-gradient(45deg, #d4a84b, #f0d694);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .hero-subtitle {
            max-width: 560px;
            margin: 0 auto;
            color: #a89f8f;
            font-size: 1.1rem;
            line-height: 1.6;
        }
        .process-steps {
            display: flex;
            flex-wrap: wrap;
            justify-content: center;
            align-items: center;
            gap: 1.2rem;
            margin: 2.5rem 0;
            color: #a89f8f;
            font-size: 0.95rem;
        }
        .process-step {
            display: flex;
            align-items: center;
            gap: 0.6rem;
        }
        .step-number {
            width: 24px;
            height: 24px;
            display: inline-flex;
            align-items: center;
            justify-content: center;
            border-radius: 50%;
            background: rgba(212, 168, 75, 0.15);
            color: #d4a84b;
            font-size: 0.75rem;
        }
        .step-arrow {
            color: rgba(212, 168, 75, 0.4);
        }
        .launching-in {
            margin-bottom: 1.2rem;
            font-size: 0.85rem;
            letter-spacing: 0.15em;
            text-transform: uppercase;
            color: #a89f8f;
        }
        .hero-cta-group {
            display: flex;
            flex-wrap: wrap;
            justify-content: center;
            gap: 1rem;
            margin-top: 2.5rem;
        }
        .hero-cta,
        .hero-cta-secondary {
            display: inline-flex;
            align-items: center;
            gap: 0.6rem;
            padding: 1.1rem 2rem;
            border-radius: 10px;
            font-size: 1rem;
            font-weight: 500;
            cursor: pointer;
            transition: all 0.3s ease;
        }
        .hero-cta {
            border: none;
            background: #d4a84b;
            color: #141109;
            box-shadow: 0 0 30px rgba(212, 168, 75, 0.25);
        }
        .hero-cta:hover {
            background: #e0b85e;
        }
        .hero-cta-secondary {
            background: transparent;
            border: 1px solid rgba(212, 168, 75, 0.25);
            color: #f2ede3;
        }
        .hero-cta-secondary:hover {
            background: #1a1713;
            border-color: #d4a84b;
        }
        .scroll-indicator {
            position: absolute;
            bottom: 2rem;
            left: 50%;
            transform: translateX(-50%);
            z-index: 2;
            width: 24px;
            height: 40px;
            border: 2px solid rgba(212, 168, 75, 0.3);
            border-radius: 999px;
            display: flex;
            justify-content: center;
            padding-top: 8px;
        }
        .scroll-indicator span {
            width: 4px;
            height: 8px;
            border-radius: 999px;
            background: #d4a84b;
            animation: scroll-bounce 1.5s ease-in-out infinite;
        }
        @keyframes scroll-bounce {
            0%, 100% { transform: translateY(0); }
            50% { transform: translateY(8px); }
        }
        .section {
            padding: 7rem 1.5rem;
        }
        .section-inner {
            max-width: 1200px;
            margin: 0 auto;
        }
        .section-header {
            text-align: center;
            margin-bottom: 4rem;
        }
        .section-header h2 {
            font-family: 'Playfair Display', serif;
            font-size: 2.6rem;
            letter-spacing: -0.02em;
        }
        .section-header h2 span {
            color: #d4a84b;
        }
        .section-header p {
            max-width: 560px;
            margin: 1rem auto 0;
            color: #a89f8f;
            line-height: 1.6;
        }
        .gold-line {
            width: 96px;
            height: 2px;
            margin: 1.5rem auto 0;
            background: linear-gradient(90deg, transparent, #d4a84b, transparent);
        }
        .features-grid {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 1.5rem;
        }
        .feature-card {
            padding: 2rem;
            border-radius: 14px;
            background: #1a1713;
            border: 1px solid rgba(212, 168, 75, 0.1);
            transition: border-color 0.3s ease, transform 0.3s ease;
        }
        .feature-card:hover {
            border-color: rgba(212, 168, 75, 0.4);
            transform: translateY(-4px);
        }
        .feature-card-wide {
            grid-column: span 2;
        }
        .feature-icon {
            width: 48px;
            height: 48px;
            display: flex;
            align-items: center;
            justify-content: center;
            margin-bottom: 1.5rem;
            border-radius: 10px;
            background: rgba(212, 168, 75, 0.1);
            color: #d4a84b;
            font-size: 1.2rem;
        }
        .feature-card h3 {
            font-family: 'Playfair Display', serif;
            font-size: 1.25rem;
            margin-bottom: 0.75rem;
        }
        .feature-card p {
            color: #a89f8f;
            line-height: 1.6;
        }
        .story-line {
            max-width: 720px;
            margin: 4rem auto 0;
            text-align: center;
            font-size: 1.15rem;
            font-style: italic;
            color: #a89f8f;
        }
        .story-line span {
            color: #f2ede3;
        }
        .why-love {
            background: #1a1713;
        }
        .benefits-grid {
            display: grid;
            grid-template-columns: repeat(2, 1fr);
            gap: 1.5rem;
        }
        .benefit-card {
            display: flex;
            gap: 1.5rem;
            align-items: flex-start;
            padding: 1.5rem;
            border-radius: 14px;
            background: #0e0c0a;
            border: 1px solid rgba(212, 168, 75, 0.1);
            transition: border-color 0.3s ease;
        }
        .benefit-card:hover {
            border-color: #d4a84b;
        }
        .benefit-icon {
            flex-shrink: 0;
            width: 56px;
            height: 56px;
            display: flex;
            align-items: center;
            justify-content: center;
            border-radius: 12px;
            background: rgba(212, 168, 75, 0.1);
            color: #d4a84b;
            font-size: 1.4rem;
        }
        .benefit-card h3 {
            font-family: 'Playfair Display', serif;
            font-size: 1.2rem;
            margin-bottom: 0.5rem;
        }
        .benefit-card p {
            color: #a89f8f;
            line-height: 1.5;
        }
        .site-footer {
            padding: 4rem 1.5rem 2rem;
            border-top: 1px solid rgba(212, 168, 75, 0.1);
        }
        .footer-inner {
            max-width: 1200px;
            margin: 0 auto;
            display: flex;
            flex-wrap: wrap;
            justify-content: space-between;
            align-items: center;
            gap: 2rem;
        }
        .footer-tagline {
            margin-top: 0.75rem;
            font-size: 0.9rem;
            color: #a89f8f;
        }
        .footer-contact {
            display: flex;
            flex-wrap: wrap;
            gap: 1.5rem;
            font-size: 0.9rem;
            color: #a89f8f;
        }
        .footer-contact a {
            color: inherit;
            text-decoration: none;
            transition: color 0.3s ease;
        }
        .footer-contact a:hover {
            color: #d4a84b;
        }
        .footer-contact i {
            margin-right: 0.5rem;
        }
        .footer-bottom {
            max-width: 1200px;
            margin: 3rem auto 0;
            padding-top: 2rem;
            border-top: 1px solid rgba(212, 168, 75, 0.1);
            text-align: center;
            font-size: 0.8rem;
            color: #a89f8f;
        }
        .footer-credit {
            margin-top: 0.5rem;
            color: #6f6759;
        }
        @media (max-width: 968px) {
            .features-grid {
                grid-template-columns: repeat(2, 1fr);
            }
            .feature-card-wide {
                grid-column: span 2;
            }
        }
        @media (max-width: 768px) {
            .hero h1 {
                font-size: 2.5rem;
            }
            .features-grid,
            .benefits-grid {
                grid-template-columns: 1fr;
            }
            .feature-card-wide {
                grid-column: span 1;
            }
            .section {
                padding: 5rem 1.5rem;
            }
            .section-header h2 {
                font-size: 2rem;
            }
            .step-arrow {
                display: none;
            }
        }
    "#;

    html! {
        <div class="landing-page">
            <header class="site-header">
                <div class="site-header-inner">
                    <div class="wordmark">
                        <i class="fas fa-vector-square"></i>
                        {"Canvas"}<span>{"Haus"}</span>
                    </div>
                    <a href="#waitlist" class="header-cta">{"Get Early Access"}</a>
                </div>
            </header>

            <section class="hero">
                <div
                    class="hero-background"
                    style={format!("background-image: url('{}');", HERO_IMAGE)}
                ></div>
                <div
                    class="hero-overlay"
                    style={format!("opacity: {};", *overlay_opacity)}
                ></div>
                <div class="hero-content">
                    <div class="hero-badge">
                        <i class="fas fa-wand-magic-sparkles"></i>
                        {"Launching Soon"}
                    </div>
                    <h1>{"Your Memories, "}<span>{"Framed Forever"}</span></h1>
                    <p class="hero-subtitle">
                        {"We're launching a premium custom canvas printing experience — where your favorite moments become stunning wall art."}
                    </p>
                    <div class="process-steps">
                        { PROCESS_STEPS.iter().enumerate().map(|(index, step)| html! {
                            <>
                                { if index > 0 {
                                    html! { <span class="step-arrow">{"→"}</span> }
                                } else {
                                    html! {}
                                } }
                                <span class="process-step" key={*step}>
                                    <span class="step-number">{ index + 1 }</span>
                                    { *step }
                                </span>
                            </>
                        }).collect::<Html>() }
                    </div>
                    <p class="launching-in">{"Launching In"}</p>
                    <CountdownTimer />
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={notify_click}>
                            {"Notify Me When You Launch"}
                            <i class="fas fa-arrow-right"></i>
                        </button>
                        <button class="hero-cta-secondary" onclick={early_access_click}>
                            <i class="fas fa-wand-magic-sparkles"></i>
                            {"Get Early Access"}
                        </button>
                    </div>
                </div>
                <div class="scroll-indicator"><span></span></div>
            </section>

            <section class="section">
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"What We "}<span>{"Do"}</span></h2>
                        <p>{"We transform your personal images into high-end canvas prints using premium materials and expert craftsmanship."}</p>
                        <div class="gold-line"></div>
                    </div>
                    <div class="features-grid">
                        { FEATURES.iter().enumerate().map(|(index, (icon, title, description))| html! {
                            <div
                                class={classes!("feature-card", (index == 0).then_some("feature-card-wide"))}
                                key={*title}
                            >
                                <div class="feature-icon"><i class={*icon}></i></div>
                                <h3>{ *title }</h3>
                                <p>{ *description }</p>
                            </div>
                        }).collect::<Html>() }
                    </div>
                    <p class="story-line">
                        {"Whether it's family, travel, love, or legacy — "}
                        <span>{"your story deserves to be displayed beautifully."}</span>
                    </p>
                </div>
            </section>

            <section class="section why-love">
                <div class="section-inner">
                    <div class="section-header">
                        <h2>{"Why You'll "}<span>{"Love It"}</span></h2>
                        <div class="gold-line"></div>
                    </div>
                    <div class="benefits-grid">
                        { BENEFITS.iter().map(|(icon, title, description)| html! {
                            <div class="benefit-card" key={*title}>
                                <div class="benefit-icon"><i class={*icon}></i></div>
                                <div>
                                    <h3>{ *title }</h3>
                                    <p>{ *description }</p>
                                </div>
                            </div>
                        }).collect::<Html>() }
                    </div>
                </div>
            </section>

            <WaitlistSection />

            <footer class="site-footer">
                <div class="footer-inner">
                    <div>
                        <div class="wordmark">
                            <i class="fas fa-vector-square"></i>
                            {"Canvas"}<span>{"Haus"}</span>
                        </div>
                        <p class="footer-tagline">{"Crafted with care, printed with purpose."}</p>
                    </div>
                    <div class="footer-contact">
                        <a href="mailto:Support@canvashaus.in">
                            <i class="fas fa-envelope"></i>
                            {"Support@canvashaus.in"}
                        </a>
                        <span>
                            <i class="fas fa-location-dot"></i>
                            {"Bengaluru, India"}
                        </span>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{ format!("© {} CanvasHaus. All rights reserved.", current_year) }</p>
                    <p class="footer-credit">{"Designed by TJ Williams"}</p>
                </div>
            </footer>
            <style>{page_css}</style>
        </div>
    }
}
