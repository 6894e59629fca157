pub const BOOK_ICON: &str = "/assets/book-icon.png";
pub const HEADER_LOGO: &str = "/assets/logo-header.png";
pub const FOOTER_LOGO: &str = "/assets/logo-footer.png";
pub const HERO_IMAGE: &str = "/assets/hero.png";
pub const COMMUNITY_IMAGE: &str = "/assets/community.png";

pub const GITHUB_URL: &str = "https://github.com/Bem-Lidos";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/bem.lidos/";

#[derive(Clone, Copy, PartialEq)]
pub enum FeatureIcon {
    Image(&'static str),
    Glyph(&'static str, &'static str),
}

pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: FeatureIcon::Image(BOOK_ICON),
        title: "Gestão de Livros",
        description: "Organize sua biblioteca pessoal com facilidade. Adicione, edite e gerencie todos os seus livros em um só lugar.",
    },
    Feature {
        icon: FeatureIcon::Glyph("★", "#eab308"),
        title: "Avaliações e Reviews",
        description: "Avalie livros de 1 a 5 estrelas e compartilhe suas opiniões com a comunidade literária.",
    },
    Feature {
        icon: FeatureIcon::Glyph("💬", "#2563eb"),
        title: "Fórum de Discussões",
        description: "Participe de discussões sobre seus livros favoritos e conecte-se com outros leitores.",
    },
    Feature {
        icon: FeatureIcon::Glyph("♥", "#ef4444"),
        title: "Lista de Favoritos",
        description: "Salve seus livros preferidos e acesse-os rapidamente quando precisar.",
    },
    Feature {
        icon: FeatureIcon::Glyph("✨", "#4f46e5"),
        title: "Recomendações Personalizadas",
        description: "Receba sugestões de leitura baseadas nas suas preferências e histórico.",
    },
    Feature {
        icon: FeatureIcon::Glyph("🛡", "#16a34a"),
        title: "Autenticação Segura",
        description: "Sistema robusto de autenticação com diferentes níveis de permissão.",
    },
];

pub struct Highlight {
    pub glyph: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const COMMUNITY_HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        glyph: "💬",
        title: "Discussões Profundas",
        description: "Crie e participe de tópicos sobre qualquer livro ou tema literário.",
    },
    Highlight {
        glyph: "👥",
        title: "Comunidade Ativa",
        description: "Faça parte de uma comunidade engajada de amantes da leitura.",
    },
    Highlight {
        glyph: "📈",
        title: "Descubra Tendências",
        description: "Fique por dentro dos livros mais comentados e tendências literárias.",
    },
];

pub const HERO_STATS: [(&str, &str); 3] = [
    ("👥", "Usuários ativos"),
    ("📚", "Livros cadastrados"),
    ("★", "Avaliação média"),
];
