use chrono::Datelike;
use yew::prelude::*;

use crate::components::cards::{DifferentialsSection, ModelGrid};
use crate::components::counter::StatsSection;
use crate::components::floating_ball::{Ball, FloatingBall, Tone};
use crate::components::icons::{Icon, IconSvg};

/// In-page anchors shared by the nav bar and the footer.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("O Modelo", "#modelo"),
    ("Números", "#numeros"),
    ("Diferenciais", "#diferenciais"),
];

pub const CONTACT_ANCHOR: &str = "#contato";

const HERO_BALLS: &[Ball] = &[
    // top left
    Ball::new(180, Tone::Red, 6.0, 0.0, 2).top("10%").left("5%"),
    Ball::new(60, Tone::Black, 4.0, 1.5, 1).top("25%").left("15%"),
    // top right
    Ball::new(120, Tone::Black, 7.0, 1.0, 3).top("15%").right("8%"),
    Ball::new(40, Tone::Red, 5.0, 2.0, 1).top("10%").right("20%"),
    // bottom left
    Ball::new(80, Tone::Black, 5.5, 0.5, 2).bottom("20%").left("10%"),
    Ball::new(250, Tone::Red, 8.0, 2.0, 4).bottom("-50px").left("-50px"),
    // bottom right
    Ball::new(200, Tone::Black, 6.5, 1.0, 1).bottom("10%").right("-20px"),
    Ball::new(70, Tone::Red, 4.5, 3.0, 2).bottom("30%").right("15%"),
];

const ACCENT_BALLS: &[(&str, Ball)] = &[
    ("hero-accent hero-accent-left", Ball::new(30, Tone::Red, 3.0, 0.0, 0).top("0").left("0")),
    ("hero-accent hero-accent-right", Ball::new(40, Tone::Black, 4.0, 1.0, 1).top("0").left("0")),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <header class="hero">
            <div class="hero-balls">
                { HERO_BALLS.iter().map(|ball| html! { <FloatingBall ball={*ball} /> }).collect::<Html>() }
            </div>

            <div class="container hero-content">
                <div class="hero-copy">
                    {
                        ACCENT_BALLS.iter().map(|(class, ball)| html! {
                            <div class={*class}><FloatingBall ball={*ball} /></div>
                        }).collect::<Html>()
                    }

                    <div class="hero-badge">{"Franchising"}</div>

                    <h1 class="hero-title">
                        {"A maior rede de "}
                        <span class="hero-highlight">
                            {"Pilates"}
                            <svg class="hero-underline" viewBox="0 0 100 10" preserveAspectRatio="none">
                                <path d="M0 5 Q 50 10 100 5" stroke="currentColor" stroke-width="8" fill="none" />
                            </svg>
                        </span>
                        {" "}<br class="desktop-only" />
                        {"da América Latina."}
                    </h1>

                    <p class="hero-lead">
                        {"Agora, sua próxima franquia. Conheça o modelo de negócios da Pure Pilates e faça parte de um ecossistema de bem-estar, tecnologia e escala."}
                    </p>

                    <div class="hero-actions">
                        <a href={CONTACT_ANCHOR} class="button button-primary button-large">
                            {"Quero ser franqueado"}
                        </a>
                        <a href="#numeros" class="button button-outline button-large">
                            {"Conheça os números"}
                        </a>
                    </div>
                </div>
            </div>

            <div class="hero-scroll-hint">
                <IconSvg icon={Icon::ChevronDown} size={32} />
            </div>
        </header>
    }
}

#[function_component(ModelSection)]
pub fn model_section() -> Html {
    html! {
        <section id="modelo" class="section section-muted">
            <div class="container">
                <div class="section-heading">
                    <h2 class="eyebrow">{"Nossa Estrutura"}</h2>
                    <h3 class="section-title">
                        {"Um modelo validado para "}<span class="text-brand">{"alta performance"}</span>
                    </h3>
                    <p class="section-lead">
                        {"Não somos apenas estúdios de Pilates. Somos uma plataforma completa de gestão, educação e tecnologia desenhada para maximizar resultados e simplificar a operação do franqueado."}
                    </p>
                </div>
                <ModelGrid />
            </div>
        </section>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    // The CTA is presentational; lead capture lives outside this page.
    html! {
        <section id="contato" class="section">
            <div class="container">
                <div class="contact-panel">
                    <div class="contact-glow contact-glow-left"></div>
                    <div class="contact-glow contact-glow-right"></div>
                    <div class="contact-body">
                        <h2 class="contact-title">
                            {"Pronto para liderar o mercado de bem-estar na sua região?"}
                        </h2>
                        <p class="section-lead">
                            {"Converse com nosso time de expansão e descubra as regiões disponíveis para abertura imediata."}
                        </p>
                        <button type="button" class="button button-primary button-xl">
                            {"Quero conversar sobre a franquia"}
                        </button>
                        <p class="contact-note">
                            {"Sem compromisso. Receba nossa apresentação comercial."}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

const CONTACT_LINES: &[&str] = &[
    "expansao@purepilates.com.br",
    "(11) 99999-9999",
    "São Paulo, SP",
];

pub fn copyright_line(year: i32) -> String {
    format!("© {} Pure Pilates Franchising. Todos os direitos reservados.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <span class="footer-logo-name">{"Pure"}</span>
                            <span class="footer-logo-tag">{"FRANCHISING"}</span>
                        </div>
                        <p>
                            {"Transformando vidas através do movimento. O maior ecossistema de Pilates da América Latina, unindo tecnologia, educação e gestão eficiente."}
                        </p>
                    </div>
                    <div>
                        <h3 class="footer-heading">{"Navegação"}</h3>
                        <ul class="footer-list">
                            {
                                NAV_LINKS.iter().map(|(name, href)| html! {
                                    <li key={*href}><a href={*href}>{ *name }</a></li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>
                    <div>
                        <h3 class="footer-heading">{"Contato"}</h3>
                        <ul class="footer-list">
                            {
                                CONTACT_LINES.iter().map(|line| html! {
                                    <li key={*line} class="footer-contact"><span class="dot"></span>{ *line }</li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <div>{ copyright_line(year) }</div>
                    <div class="footer-legal">
                        <span>{"Política de Privacidade"}</span>
                        <span>{"Termos de Uso"}</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <>
            <style>{ LANDING_CSS }</style>
            <Hero />
            <main>
                <section id="numeros" class="section section-stats">
                    <StatsSection />
                </section>

                <ModelSection />

                <section id="diferenciais" class="section section-dark">
                    <div class="dark-glow"></div>
                    <div class="section-dark-body">
                        <div class="container section-heading section-heading-left">
                            <h2 class="eyebrow">{"Diferenciais Competitivos"}</h2>
                            <h3 class="section-title section-title-light">
                                {"Tecnologia e suporte para você escalar"}
                            </h3>
                        </div>
                        <DifferentialsSection />
                    </div>
                </section>

                <ContactSection />
            </main>
            <Footer />
        </>
    }
}

const LANDING_CSS: &str = r#"
    :root {
        --pure: #D6001C;
        --pure-accent: #B00017;
        --pure-light: #FFF0F2;
        --pure-dark: #111111;
    }
    * { box-sizing: border-box; }
    body {
        margin: 0;
        font-family: 'Montserrat', sans-serif;
        color: var(--pure-dark);
        background: #fff;
    }
    ::selection { background: var(--pure); color: #fff; }
    a { color: inherit; text-decoration: none; }
    .container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
    .desktop-only { display: none; }
    @media (min-width: 768px) { .desktop-only { display: inline; } }

    /* Nav */
    .top-nav {
        position: fixed; top: 0; left: 0; right: 0; z-index: 50;
        padding: 1.5rem 0; background: transparent;
        transition: all 0.3s ease;
    }
    .top-nav.scrolled {
        padding: 1rem 0; background: #fff;
        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
    }
    .nav-content { display: flex; justify-content: space-between; align-items: center; }
    .nav-logo { cursor: pointer; user-select: none; z-index: 50; background: none; border: 0; padding: 0; }
    .nav-logo svg { height: 3rem; width: auto; }
    .nav-links { display: none; align-items: center; gap: 2rem; }
    .nav-link {
        font-size: 0.875rem; font-weight: 600; text-transform: uppercase;
        letter-spacing: 0.025em; color: rgba(17, 17, 17, 0.8); transition: color 0.2s;
    }
    .top-nav.scrolled .nav-link { color: var(--pure-dark); }
    .nav-link:hover { color: var(--pure); }
    .burger-menu { background: none; border: 0; padding: 0.5rem; z-index: 50; color: var(--pure-dark); cursor: pointer; }
    .mobile-menu {
        position: fixed; inset: 0; z-index: 40; background: #fff;
        display: flex; flex-direction: column; align-items: center; justify-content: center;
        gap: 2rem; padding-top: 5rem; animation: menu-in 0.25s ease-out;
    }
    .mobile-menu .nav-link { font-size: 1.25rem; font-family: 'Playfair Display', serif; }
    @keyframes menu-in { from { opacity: 0; transform: translateY(-20px); } to { opacity: 1; transform: none; } }
    @media (min-width: 768px) {
        .nav-logo svg { height: 4rem; }
        .nav-links { display: flex; }
        .burger-menu, .mobile-menu { display: none; }
    }

    /* Buttons */
    .button {
        display: inline-block; border-radius: 9999px; font-weight: 700; border: 0; cursor: pointer;
        font-family: inherit; transition: all 0.2s ease;
    }
    .button:hover { transform: translateY(-2px); }
    .button-primary { background: var(--pure); color: #fff; box-shadow: 0 10px 15px -3px rgba(214, 0, 28, 0.3); }
    .button-primary:hover { background: var(--pure-accent); }
    .button-outline { background: #fff; color: var(--pure-dark); border: 2px solid #f3f4f6; }
    .button-outline:hover { border-color: var(--pure); color: var(--pure); }
    .button-small { padding: 0.625rem 1.5rem; font-size: 0.875rem; }
    .button-large { padding: 1.25rem 2.5rem; font-size: 1.125rem; }
    .button-xl { padding: 1.25rem 3rem; font-size: 1.25rem; width: 100%; }
    @media (min-width: 768px) { .button-xl { width: auto; } }

    /* Hero */
    .hero {
        position: relative; min-height: 100vh; display: flex; align-items: center; justify-content: center;
        overflow: hidden; background: #fff; padding-top: 5rem;
    }
    .hero-balls { position: absolute; inset: 0; overflow: hidden; pointer-events: none; }
    .floating-ball {
        position: absolute; border-radius: 9999px; pointer-events: none;
        box-shadow: inset -10px -10px 30px rgba(0, 0, 0, 0.3), 0 20px 40px rgba(0, 0, 0, 0.15);
        animation-name: ball-drift; animation-timing-function: ease-in-out; animation-iteration-count: infinite;
    }
    @keyframes ball-drift {
        0% { transform: translate(0, 0) rotate(0deg); }
        33% { transform: translate(5px, -10px) rotate(5deg); }
        50% { transform: translate(10px, -20px) rotate(0deg); }
        66% { transform: translate(5px, -10px) rotate(-5deg); }
        100% { transform: translate(0, 0) rotate(0deg); }
    }
    .hero-content { position: relative; z-index: 10; display: flex; flex-direction: column; align-items: center; text-align: center; }
    .hero-copy { position: relative; max-width: 56rem; margin: 0 auto; animation: hero-in 0.8s ease-out both; }
    @keyframes hero-in { from { opacity: 0; transform: scale(0.95); } to { opacity: 1; transform: scale(1); } }
    .hero-accent { position: absolute; display: none; }
    .hero-accent-left { top: -2.5rem; left: -2.5rem; }
    .hero-accent-right { top: 50%; right: -5rem; }
    @media (min-width: 768px) { .hero-accent { display: block; } }
    .hero-badge {
        display: inline-block; padding: 0.25rem 1rem; margin-bottom: 2rem; border-radius: 9999px;
        background: var(--pure-light); color: var(--pure); border: 1px solid rgba(214, 0, 28, 0.1);
        font-weight: 700; font-size: 0.75rem; letter-spacing: 0.2em; text-transform: uppercase;
    }
    .hero-title {
        font-family: 'Playfair Display', serif; font-weight: 800; line-height: 1.15;
        font-size: 3rem; margin: 0 0 2rem;
    }
    @media (min-width: 768px) { .hero-title { font-size: 3.75rem; } }
    @media (min-width: 1024px) { .hero-title { font-size: 4.5rem; } }
    .hero-highlight { position: relative; display: inline-block; color: var(--pure); }
    .hero-underline { position: absolute; left: 0; bottom: -0.25rem; width: 100%; height: 0.75rem; opacity: 0.3; }
    .hero-lead { font-size: 1.25rem; color: #4b5563; max-width: 42rem; margin: 0 auto 2.5rem; font-weight: 500; line-height: 1.6; }
    .hero-actions { display: flex; flex-direction: column; gap: 1rem; justify-content: center; }
    @media (min-width: 640px) { .hero-actions { flex-direction: row; } }
    .hero-scroll-hint { position: absolute; bottom: 2.5rem; left: 50%; transform: translateX(-50%); color: var(--pure); animation: bounce 1s infinite; }
    @keyframes bounce {
        0%, 100% { transform: translate(-50%, -25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
        50% { transform: translate(-50%, 0); animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
    }

    /* Sections */
    .section { padding: 6rem 0; position: relative; overflow: hidden; }
    .section-stats { z-index: 20; overflow: visible; }
    .section-muted { background: #f9fafb; }
    .section-dark { background: var(--pure-dark); }
    .section-dark-body { position: relative; z-index: 10; }
    .dark-glow {
        position: absolute; top: 0; right: 0; width: 500px; height: 500px; border-radius: 9999px;
        background: var(--pure); opacity: 0.1; filter: blur(64px); transform: translate(50%, -50%);
    }
    .section-heading { text-align: center; max-width: 48rem; margin: 0 auto 4rem; }
    .section-heading-left { max-width: 1200px; }
    @media (min-width: 768px) { .section-heading-left { text-align: left; } }
    .eyebrow { color: var(--pure); font-weight: 700; letter-spacing: 0.2em; font-size: 0.875rem; text-transform: uppercase; margin: 0 0 0.75rem; }
    .section-title { font-family: 'Playfair Display', serif; font-weight: 700; font-size: 1.875rem; margin: 0 0 1.5rem; }
    .section-title-light { color: #fff; }
    @media (min-width: 768px) { .section-title { font-size: 2.25rem; } }
    .section-lead { font-size: 1.125rem; color: #4b5563; line-height: 1.6; font-weight: 500; }
    .text-brand { color: var(--pure); }

    /* Stats */
    .stats-panel { background: #fff; border-radius: 1rem; padding: 1rem; }
    .stats-grid { display: grid; grid-template-columns: 1fr; gap: 2rem; }
    @media (min-width: 768px) { .stats-grid { grid-template-columns: repeat(2, 1fr); } }
    @media (min-width: 1024px) { .stats-grid { grid-template-columns: repeat(4, 1fr); } }
    .counter { display: flex; flex-direction: column; align-items: center; padding: 1.5rem; text-align: center; }
    .counter-value {
        font-family: 'Playfair Display', serif; font-weight: 700; font-size: 2.25rem; color: var(--pure);
        margin-bottom: 0.5rem; font-variant-numeric: tabular-nums; transition: transform 0.3s;
    }
    .counter:hover .counter-value { transform: scale(1.1); }
    @media (min-width: 768px) { .counter-value { font-size: 3.75rem; } }
    .counter-label {
        font-size: 0.875rem; font-weight: 700; letter-spacing: 0.1em; text-transform: uppercase; color: #1f2937;
        border-bottom: 2px solid transparent; padding-bottom: 0.25rem; transition: border-color 0.3s;
    }
    .counter:hover .counter-label { border-color: var(--pure); }

    /* Model cards */
    .model-grid { display: grid; grid-template-columns: 1fr; gap: 2rem; }
    @media (min-width: 768px) { .model-grid { grid-template-columns: repeat(2, 1fr); } }
    @media (min-width: 1024px) { .model-grid { grid-template-columns: repeat(3, 1fr); } }
    .model-card {
        background: #fff; padding: 2rem; border-radius: 1rem; border: 1px solid #e5e7eb;
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05); transition: all 0.3s ease;
    }
    .model-card:hover { transform: translateY(-5px); border-color: var(--pure); box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1); }
    .model-card-icon {
        width: 3.5rem; height: 3.5rem; border-radius: 0.75rem; margin-bottom: 1.5rem;
        display: flex; align-items: center; justify-content: center;
        background: var(--pure-light); color: var(--pure); transition: all 0.3s;
    }
    .model-card:hover .model-card-icon { background: var(--pure); color: #fff; }
    .model-card h4 { font-size: 1.25rem; font-weight: 700; margin: 0 0 0.75rem; }
    .model-card p { color: #6b7280; line-height: 1.6; font-weight: 500; margin: 0; }

    /* Differentials */
    .differentials-grid { display: grid; grid-template-columns: 1fr; gap: 1.5rem; }
    @media (min-width: 768px) { .differentials-grid { grid-template-columns: repeat(2, 1fr); } }
    @media (min-width: 1024px) { .differentials-grid { grid-template-columns: repeat(3, 1fr); } }
    .differential-card {
        display: flex; flex-direction: column; align-items: flex-start; padding: 1.5rem;
        background: rgba(17, 17, 17, 0.4); backdrop-filter: blur(4px);
        border-radius: 0.75rem; border: 1px solid rgba(255, 255, 255, 0.1);
        opacity: 0; transform: translateY(20px);
        transition: opacity 0.5s ease-out, transform 0.5s ease-out, border-color 0.3s, background 0.3s;
    }
    .differential-card.visible { opacity: 1; transform: translateY(0); }
    .differential-card:hover { border-color: rgba(214, 0, 28, 0.5); background: rgba(17, 17, 17, 0.6); }
    .differential-card-icon {
        padding: 0.75rem; margin-bottom: 1rem; border-radius: 0.5rem; background: var(--pure); color: #fff;
        box-shadow: 0 10px 15px -3px rgba(214, 0, 28, 0.3); transition: transform 0.3s;
    }
    .differential-card:hover .differential-card-icon { transform: scale(1.1); }
    .differential-card h3 { font-size: 1.125rem; font-weight: 700; color: #fff; margin: 0 0 0.75rem; }
    .differential-card p { color: #d1d5db; font-size: 0.875rem; line-height: 1.6; font-weight: 500; margin: 0; }

    /* Contact */
    .contact-panel {
        position: relative; overflow: hidden; text-align: center; padding: 2rem;
        background: #f3f4f6; border-radius: 2rem; border: 1px solid #e5e7eb;
        box-shadow: inset 0 2px 4px rgba(0, 0, 0, 0.05);
    }
    @media (min-width: 768px) { .contact-panel { padding: 5rem; } }
    .contact-glow { position: absolute; width: 20rem; height: 20rem; border-radius: 9999px; opacity: 0.5; filter: blur(40px); }
    .contact-glow-left { left: -5rem; bottom: -5rem; background: #fff; }
    .contact-glow-right { right: -5rem; top: -5rem; background: var(--pure-light); }
    .contact-body { position: relative; z-index: 10; max-width: 56rem; margin: 0 auto; }
    .contact-title { font-family: 'Playfair Display', serif; font-weight: 700; font-size: 1.875rem; margin: 0 0 1.5rem; }
    @media (min-width: 768px) { .contact-title { font-size: 3rem; } }
    .contact-note { margin-top: 2rem; font-size: 0.875rem; color: #9ca3af; font-weight: 600; letter-spacing: 0.025em; text-transform: uppercase; }

    /* Footer */
    .footer { background: var(--pure-dark); color: #fff; padding: 4rem 0; border-top: 1px solid rgba(255, 255, 255, 0.1); }
    .footer-grid { display: grid; grid-template-columns: 1fr; gap: 3rem; margin-bottom: 3rem; }
    @media (min-width: 768px) {
        .footer-grid { grid-template-columns: repeat(4, 1fr); }
        .footer-brand { grid-column: span 2; }
    }
    .footer-brand p { color: #9ca3af; max-width: 24rem; line-height: 1.6; }
    .footer-logo { display: flex; flex-direction: column; margin-bottom: 1.5rem; }
    .footer-logo-name { font-weight: 800; font-size: 1.875rem; line-height: 1; letter-spacing: -0.05em; }
    .footer-logo-tag { font-size: 0.6rem; font-weight: 700; letter-spacing: 0.25em; color: rgba(255, 255, 255, 0.8); margin-top: 0.25rem; padding-left: 0.125rem; }
    .footer-heading { font-weight: 700; margin: 0 0 1.5rem; letter-spacing: 0.1em; font-size: 0.875rem; text-transform: uppercase; }
    .footer-list { list-style: none; padding: 0; margin: 0; color: #9ca3af; display: grid; gap: 0.75rem; }
    .footer-list a:hover { color: var(--pure); }
    .footer-contact { display: flex; align-items: center; gap: 0.5rem; }
    .footer-contact .dot { width: 0.375rem; height: 0.375rem; border-radius: 9999px; background: var(--pure); }
    .footer-bottom {
        border-top: 1px solid rgba(255, 255, 255, 0.1); padding-top: 2rem;
        display: flex; flex-direction: column; justify-content: space-between; align-items: center;
        font-size: 0.875rem; color: #6b7280; gap: 1rem;
    }
    @media (min-width: 768px) { .footer-bottom { flex-direction: row; } }
    .footer-legal { display: flex; gap: 1.5rem; }
    .footer-legal span { cursor: pointer; transition: color 0.2s; }
    .footer-legal span:hover { color: #fff; }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_point_at_page_sections() {
        let anchors: Vec<&str> = NAV_LINKS.iter().map(|(_, href)| *href).collect();
        assert_eq!(anchors, vec!["#modelo", "#numeros", "#diferenciais"]);
        assert_eq!(CONTACT_ANCHOR, "#contato");
    }

    #[test]
    fn copyright_carries_year() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 Pure Pilates Franchising. Todos os direitos reservados."
        );
    }

    #[test]
    fn hero_balls_are_placed_vertically_and_horizontally() {
        for ball in HERO_BALLS {
            assert!(ball.top.is_some() || ball.bottom.is_some());
            assert!(ball.left.is_some() || ball.right.is_some());
            assert!(ball.duration > 0.0);
        }
    }
}
