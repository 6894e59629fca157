use chrono::Datelike;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::image::ImageWithFallback;
use crate::components::pre_registration::PreRegistration;
use crate::pages::content::{
    FeatureIcon, BOOK_ICON, COMMUNITY_HIGHLIGHTS, COMMUNITY_IMAGE, FEATURES, FOOTER_LOGO,
    GITHUB_URL, HEADER_LOGO, HERO_IMAGE, HERO_STATS, INSTAGRAM_URL,
};

fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="site-header">
            <div class="container site-header__inner">
                <div class="brand">
                    <img src={HEADER_LOGO} alt="BemLidos" class="brand__logo" />
                    <span class="brand__name gradient-text">{"BemLidos"}</span>
                </div>
                <nav class="site-nav">
                    <a href="#features">{"Funcionalidades"}</a>
                    <a href="#download">{"Download"}</a>
                </nav>
            </div>
        </header>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let learn_more = Callback::from(|_: MouseEvent| scroll_to_section("features"));

    html! {
        <section class="hero">
            <div class="container hero__grid">
                <div class="hero__copy">
                    <span class="badge badge--purple">{"✨ Novidade: Sistema de Recomendações IA"}</span>
                    <h1 class="hero__title gradient-text">{"Sua biblioteca pessoal na palma da mão"}</h1>
                    <p class="lead">
                        {"Organize seus livros, conecte-se com leitores apaixonados e descubra sua próxima grande leitura com o BemLidos."}
                    </p>
                    <div class="hero__actions">
                        <button class="outline-button" onclick={learn_more}>{"Saiba Mais"}</button>
                    </div>
                    <div class="hero__stats">
                        { for HERO_STATS.iter().map(|(glyph, label)| html! {
                            <div class="hero__stat">
                                <span class="hero__stat-icon">{ *glyph }</span>
                                <p>{ *label }</p>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="framed-image">
                    <div class="framed-image__glow"></div>
                    <div class="framed-image__frame">
                        <ImageWithFallback src={HERO_IMAGE} alt="BemLidos App Preview" />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-heading">
                    <span class="badge badge--purple">{"Funcionalidades"}</span>
                    <h2 class="gradient-text">{"Tudo que você precisa em um só lugar"}</h2>
                    <p class="lead">{"Descubra todas as ferramentas que vão revolucionar sua experiência de leitura"}</p>
                </div>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card" key={feature.title}>
                            <div class="feature-card__icon">
                                {
                                    match feature.icon {
                                        FeatureIcon::Image(src) => html! { <img src={src} alt={feature.title} /> },
                                        FeatureIcon::Glyph(glyph, color) => html! {
                                            <span style={format!("color: {};", color)}>{ glyph }</span>
                                        },
                                    }
                                }
                            </div>
                            <h3>{ feature.title }</h3>
                            <p>{ feature.description }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Community)]
pub fn community() -> Html {
    html! {
        <section class="community">
            <div class="container community__grid">
                <div class="framed-image community__image">
                    <div class="framed-image__glow"></div>
                    <div class="framed-image__frame">
                        <ImageWithFallback src={COMMUNITY_IMAGE} alt="Community" />
                    </div>
                </div>
                <div class="community__copy">
                    <span class="badge badge--orange">{"Comunidade"}</span>
                    <h2 class="gradient-text">{"Conecte-se com leitores apaixonados"}</h2>
                    <p class="lead">
                        {"Participe de discussões enriquecedoras, compartilhe suas opiniões e descubra novas perspectivas sobre seus livros favoritos."}
                    </p>
                    <div class="highlights">
                        { for COMMUNITY_HIGHLIGHTS.iter().map(|item| html! {
                            <div class="highlight" key={item.title}>
                                <div class="highlight__icon">{ item.glyph }</div>
                                <div>
                                    <h3>{ item.title }</h3>
                                    <p>{ item.description }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Download)]
pub fn download() -> Html {
    html! {
        <section id="download" class="download">
            <div class="download__inner">
                <div class="download__icon">
                    <img src={BOOK_ICON} alt="BemLidos" />
                </div>
                <h2>{"Pronto para transformar sua experiência de leitura?"}</h2>
                <p class="download__lead">
                    {"Junte-se a milhares de leitores apaixonados e comece a organizar sua biblioteca hoje mesmo."}
                </p>
                <div class="download__actions">
                    <PreRegistration />
                </div>
                <p class="download__note">{"Disponível em breve para iOS e Android"}</p>
            </div>
        </section>
    }
}

fn copyright_notice(year: i32) -> String {
    format!("© {} BemLidos. Todos os direitos reservados.", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let notice = copyright_notice(chrono::Local::now().year());

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="site-footer__grid">
                    <div>
                        <div class="brand">
                            <img src={FOOTER_LOGO} alt="BemLidos" class="brand__logo" />
                            <span class="site-footer__name">{"BemLidos"}</span>
                        </div>
                        <p class="site-footer__tagline">
                            {"Sua biblioteca pessoal na palma da mão. Conecte-se, organize e descubra."}
                        </p>
                    </div>
                    <div>
                        <h3>{"Produto"}</h3>
                        <ul>
                            <li><a href="#features">{"Funcionalidades"}</a></li>
                            <li><a href="#download">{"Download"}</a></li>
                        </ul>
                    </div>
                    <div>
                        <h3>{"Empresa"}</h3>
                        <ul>
                            <li><a href="#">{"Sobre"}</a></li>
                            <li><a href="#">{"Contato"}</a></li>
                        </ul>
                    </div>
                </div>
                <div class="site-footer__bottom">
                    <p>{ notice }</p>
                    <div class="site-footer__social">
                        <a href={GITHUB_URL} aria-label="GitHub">
                            <svg width="24" height="24" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                                <path fill-rule="evenodd" clip-rule="evenodd" d="M12 2C6.477 2 2 6.484 2 12.017c0 4.425 2.865 8.18 6.839 9.504.5.092.682-.217.682-.483 0-.237-.008-.868-.013-1.703-2.782.605-3.369-1.343-3.369-1.343-.454-1.158-1.11-1.466-1.11-1.466-.908-.62.069-.608.069-.608 1.003.07 1.531 1.032 1.531 1.032.892 1.53 2.341 1.088 2.91.832.092-.647.35-1.088.636-1.338-2.22-.253-4.555-1.113-4.555-4.951 0-1.093.39-1.988 1.029-2.688-.103-.253-.446-1.272.098-2.65 0 0 .84-.27 2.75 1.026A9.564 9.564 0 0112 6.844c.85.004 1.705.115 2.504.337 1.909-1.296 2.747-1.027 2.747-1.027.546 1.379.202 2.398.1 2.651.64.7 1.028 1.595 1.028 2.688 0 3.848-2.339 4.695-4.566 4.943.359.309.678.92.678 1.855 0 1.338-.012 2.419-.012 2.747 0 .268.18.58.688.482A10.019 10.019 0 0022 12.017C22 6.484 17.522 2 12 2z" />
                            </svg>
                        </a>
                        <a href={INSTAGRAM_URL} aria-label="Instagram">
                            <svg width="24" height="24" fill="none" stroke="currentColor" stroke-width="2" viewBox="0 0 24 24" aria-hidden="true">
                                <rect x="3" y="3" width="18" height="18" rx="5" />
                                <circle cx="12" cy="12" r="4" />
                                <circle cx="17.5" cy="6.5" r="1" fill="currentColor" />
                            </svg>
                        </a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_notice_uses_given_year() {
        assert_eq!(
            copyright_notice(2025),
            "© 2025 BemLidos. Todos os direitos reservados."
        );
    }
}
