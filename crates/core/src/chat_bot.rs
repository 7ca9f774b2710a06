//! Keyword-based intent classification and canned replies for the site chat.
//!
//! The classifier is deliberately shallow: the visitor's latest message is
//! lowercased and tested against ordered keyword sets, first match wins.
//! Replies are fixed strings, optionally with quick-reply options. The
//! catalog reply takes the live product category names so its options track
//! whatever is registered; when none are, a fixed list stands in.

// ---------------------------------------------------------------------------
// Intents
// ---------------------------------------------------------------------------

/// What the visitor's message appears to be about.
///
/// Variants are listed in match priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Catalog,
    Services,
    Pricing,
    Location,
    HumanHandoff,
    Thanks,
    Fallback,
}

/// Keyword sets in match priority order. The first set with any keyword
/// contained in the lowercased message decides the intent.
const KEYWORD_SETS: &[(Intent, &[&str])] = &[
    (
        Intent::Greeting,
        &["olá", "ola", "bom dia", "boa tarde", "boa noite", "hello"],
    ),
    (
        Intent::Catalog,
        &["produto", "catálogo", "catalogo", "equipamento", "product"],
    ),
    (
        Intent::Services,
        &[
            "serviço",
            "servico",
            "manutenção",
            "manutencao",
            "instalação",
            "instalacao",
            "reparação",
            "reparacao",
            "service",
        ],
    ),
    (
        Intent::Pricing,
        &[
            "preço", "preco", "orçamento", "orcamento", "cotação", "cotacao", "price", "quote",
        ],
    ),
    (
        Intent::Location,
        &[
            "onde",
            "endereço",
            "endereco",
            "localização",
            "localizacao",
            "morada",
            "location",
            "address",
        ],
    ),
    (
        Intent::HumanHandoff,
        &["humano", "atendente", "agente", "pessoa real", "human", "agent"],
    ),
    (
        Intent::Thanks,
        &["obrigado", "obrigada", "thanks", "thank you"],
    ),
];

/// Classify a visitor message. Never fails; unmatched text is [`Intent::Fallback`].
pub fn classify(text: &str) -> Intent {
    let normalized = text.to_lowercase();
    for (intent, keywords) in KEYWORD_SETS {
        if keywords.iter().any(|kw| normalized.contains(kw)) {
            return *intent;
        }
    }
    Intent::Fallback
}

// ---------------------------------------------------------------------------
// Replies
// ---------------------------------------------------------------------------

/// Quick-reply options offered on the catalog branch when no product
/// category is registered yet.
pub const DEFAULT_CATALOG_OPTIONS: &[&str] =
    &["Navegação", "Comunicação", "Segurança Marítima"];

/// Quick-reply options offered on the greeting and fallback branches.
const GENERAL_OPTIONS: &[&str] = &["Ver produtos", "Serviços", "Pedir orçamento", "Falar com um atendente"];

/// A canned bot reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotReply {
    /// Message text appended with the bot sender.
    pub body: String,
    /// Quick-reply options rendered as buttons by the widget.
    pub options: Option<Vec<String>>,
    /// Whether the session should be handed off to a human.
    pub hand_off: bool,
}

impl BotReply {
    fn plain(body: &str) -> Self {
        Self {
            body: body.to_string(),
            options: None,
            hand_off: false,
        }
    }

    fn with_options(body: &str, options: Vec<String>) -> Self {
        Self {
            body: body.to_string(),
            options: Some(options),
            hand_off: false,
        }
    }
}

/// Build the reply for a classified intent.
///
/// `product_categories` are the registered product category names; the
/// catalog branch uses them as quick-reply options, falling back to
/// [`DEFAULT_CATALOG_OPTIONS`] when the list is empty.
pub fn reply_for(intent: Intent, product_categories: &[String]) -> BotReply {
    match intent {
        Intent::Greeting => BotReply::with_options(
            "Olá! Bem-vindo à Maris. Como posso ajudar?",
            GENERAL_OPTIONS.iter().map(|s| s.to_string()).collect(),
        ),
        Intent::Catalog => {
            let options = if product_categories.is_empty() {
                DEFAULT_CATALOG_OPTIONS.iter().map(|s| s.to_string()).collect()
            } else {
                product_categories.to_vec()
            };
            BotReply::with_options(
                "Temos equipamentos nas seguintes categorias. Qual lhe interessa?",
                options,
            )
        }
        Intent::Services => BotReply::plain(
            "Prestamos serviços de instalação, manutenção e reparação de \
             equipamentos marítimos, com equipas técnicas em todo o litoral.",
        ),
        Intent::Pricing => BotReply::plain(
            "Para orçamentos, envie-nos os detalhes pelo formulário de contacto \
             ou marque uma visita técnica. Respondemos em 24 horas úteis.",
        ),
        Intent::Location => BotReply::plain(
            "Estamos na Avenida Marginal, zona portuária, com delegações em \
             Namibe e Luanda. Atendemos de segunda a sexta, das 8h às 17h.",
        ),
        Intent::HumanHandoff => BotReply {
            body: "Certo, vou passar a conversa para um atendente. Aguarde um momento, por favor."
                .to_string(),
            options: None,
            hand_off: true,
        },
        Intent::Thanks => BotReply::plain("De nada! Estamos sempre ao dispor."),
        Intent::Fallback => BotReply::with_options(
            "Desculpe, não percebi. Pode reformular, ou escolher uma das opções abaixo.",
            GENERAL_OPTIONS.iter().map(|s| s.to_string()).collect(),
        ),
    }
}
