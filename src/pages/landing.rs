use yew::prelude::*;

use crate::pages::sections::{Community, Download, Features, Footer, Header, Hero};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <Header />
            <Hero />
            <Features />
            <Community />
            <Download />
            <Footer />
            <style>
                {r#"
                * { box-sizing: border-box; }
                html { scroll-behavior: smooth; }
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    color: #111827;
                }
                .landing-page {
                    min-height: 100vh;
                    background: linear-gradient(135deg, #faf5ff 0%, #ffffff 50%, #fff7ed 100%);
                }
                .container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .gradient-text {
                    background: linear-gradient(90deg, #9333ea, #ea580c);
                    -webkit-background-clip: text;
                    background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .badge {
                    display: inline-block;
                    font-size: 0.8rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                    margin-bottom: 1rem;
                }
                .badge--purple { background: #f3e8ff; color: #7e22ce; }
                .badge--orange { background: #ffedd5; color: #c2410c; }
                .lead {
                    font-size: 1.25rem;
                    color: #4b5563;
                }

                .site-header {
                    position: sticky;
                    top: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid #e5e7eb;
                }
                .site-header__inner {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    height: 4rem;
                }
                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .brand__logo {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.75rem;
                    object-fit: cover;
                }
                .brand__name { font-size: 1.5rem; }
                .site-nav {
                    display: flex;
                    gap: 2rem;
                }
                .site-nav a {
                    color: #4b5563;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .site-nav a:hover { color: #9333ea; }

                .hero { padding: 5rem 0; overflow: hidden; }
                .hero__grid,
                .community__grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                .hero__title {
                    font-size: 3.75rem;
                    line-height: 1.1;
                    margin: 0 0 1.5rem;
                }
                .hero__actions { margin: 2rem 0; }
                .outline-button {
                    font-size: 1.1rem;
                    padding: 0.75rem 2rem;
                    border: 2px solid #e9d5ff;
                    border-radius: 10px;
                    background: transparent;
                    cursor: pointer;
                }
                .outline-button:hover { background: #faf5ff; }
                .hero__stats {
                    display: flex;
                    gap: 2rem;
                    color: #6b7280;
                    font-size: 0.875rem;
                }
                .hero__stat {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .framed-image { position: relative; }
                .framed-image__glow {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(90deg, #c084fc, #fb923c);
                    border-radius: 1.5rem;
                    filter: blur(64px);
                    opacity: 0.2;
                }
                .framed-image__frame {
                    position: relative;
                    border-radius: 1rem;
                    overflow: hidden;
                    border: 8px solid #ffffff;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .framed-image__frame img { width: 100%; height: auto; display: block; }
                .image-fallback {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #f3f4f6;
                    min-height: 12rem;
                }
                .image-fallback img { width: 88px; height: 88px; }

                .features { padding: 5rem 0; background: #ffffff; }
                .section-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .section-heading h2 { font-size: 3rem; margin: 0 0 1rem; }
                .feature-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .feature-card {
                    padding: 1.5rem;
                    border: 2px solid #f3f4f6;
                    border-radius: 12px;
                    transition: all 0.3s;
                }
                .feature-card:hover {
                    border-color: #e9d5ff;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .feature-card__icon {
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(135deg, #faf5ff, #fff7ed);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.75rem;
                    margin-bottom: 1rem;
                    transition: transform 0.3s;
                }
                .feature-card:hover .feature-card__icon { transform: scale(1.1); }
                .feature-card__icon img { width: 2rem; height: 2rem; object-fit: cover; }
                .feature-card h3 { font-size: 1.25rem; margin: 0 0 0.5rem; font-weight: 500; }
                .feature-card p { color: #4b5563; margin: 0; }

                .community {
                    padding: 5rem 0;
                    background: linear-gradient(135deg, #faf5ff, #fff7ed);
                }
                .community__copy h2 { font-size: 3rem; margin: 0 0 1rem; }
                .highlights { display: flex; flex-direction: column; gap: 1rem; }
                .highlight { display: flex; align-items: flex-start; gap: 1rem; }
                .highlight__icon {
                    width: 2.5rem;
                    height: 2.5rem;
                    flex-shrink: 0;
                    border-radius: 0.5rem;
                    background: linear-gradient(135deg, #ea580c, #9333ea);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .highlight h3 { font-size: 1.125rem; margin: 0 0 0.25rem; font-weight: 500; }
                .highlight p { color: #4b5563; margin: 0; }

                .download {
                    padding: 5rem 0;
                    color: #ffffff;
                    text-align: center;
                    background: linear-gradient(135deg, #9333ea, #ea580c, #9333ea);
                }
                .download__inner { max-width: 56rem; margin: 0 auto; padding: 0 1.5rem; }
                .download__icon {
                    width: 5rem;
                    height: 5rem;
                    margin: 0 auto 2rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .download__icon img { width: 2.5rem; height: 2.5rem; object-fit: cover; }
                .download h2 { font-size: 3rem; margin: 0 0 1.5rem; }
                .download__lead { font-size: 1.25rem; color: #f3e8ff; margin-bottom: 2rem; }
                .download__note { margin-top: 2rem; color: #f3e8ff; }
                .cta-button {
                    font-size: 1.1rem;
                    padding: 0.75rem 2rem;
                    border: none;
                    border-radius: 10px;
                    background: #ffffff;
                    color: #9333ea;
                    cursor: pointer;
                }
                .cta-button:hover { background: #faf5ff; }

                .site-footer {
                    background: #111827;
                    color: #9ca3af;
                    padding: 3rem 0;
                }
                .site-footer__grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }
                .site-footer__name { font-size: 1.25rem; color: #ffffff; }
                .site-footer__tagline { font-size: 0.875rem; }
                .site-footer h3 { color: #ffffff; font-size: 1rem; font-weight: 500; margin: 0 0 1rem; }
                .site-footer ul { list-style: none; padding: 0; margin: 0; font-size: 0.875rem; }
                .site-footer li { margin-bottom: 0.5rem; }
                .site-footer a { color: inherit; text-decoration: none; transition: color 0.2s; }
                .site-footer a:hover { color: #ffffff; }
                .site-footer__bottom {
                    border-top: 1px solid #1f2937;
                    margin-top: 3rem;
                    padding-top: 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    font-size: 0.875rem;
                }
                .site-footer__social { display: flex; gap: 1.5rem; }

                @media (max-width: 1024px) {
                    .hero__grid,
                    .community__grid { grid-template-columns: 1fr; }
                    .community__image { order: 2; }
                    .feature-grid { grid-template-columns: repeat(2, 1fr); }
                    .hero__title { font-size: 3rem; }
                }
                @media (max-width: 768px) {
                    .site-nav { display: none; }
                    .feature-grid { grid-template-columns: 1fr; }
                    .site-footer__grid { grid-template-columns: 1fr; }
                    .site-footer__bottom { flex-direction: column; gap: 1rem; }
                    .section-heading h2,
                    .community__copy h2,
                    .download h2 { font-size: 2.25rem; }
                }
                "#}
            </style>
        </div>
    }
}
