//! Shared domain enums

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Genre
// ---------------------------------------------------------------------------

/// Book genre codes accepted by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Academico,
    LiteraturaFiccional,
    LiteraturaNaoFiccional,
    Referencia,
    Hq,
    Manga,
    Manual,
    Tecnico,
    LivroInfantil,
    JovemAdulto,
    Religioso,
    LivroDidatico,
    Dicionario,
    Enciclopedia,
    RevistaCientifica,
    Revista,
    Antologia,
    ColetaneaDeContos,
    Memorias,
    Biografia,
    Romance,
    Ficcao,
    NaoFiccao,
    Misterio,
    Fantasia,
    FiccaoCientifica,
    Autobiografia,
    Historia,
    Poesia,
    RomanceAmoroso,
    Suspense,
    Terror,
    AutoAjuda,
    Filosofia,
    Religiao,
    Viagem,
    Culinaria,
    Arte,
    Ciencia,
    Negocios,
    Infantil,
    Educacao,
    Drama,
    Aventura,
    Classico,
    RomanceGrafico,
    Ensaio,
}

impl Genre {
    pub const ALL: [Genre; 47] = [
        Genre::Academico,
        Genre::LiteraturaFiccional,
        Genre::LiteraturaNaoFiccional,
        Genre::Referencia,
        Genre::Hq,
        Genre::Manga,
        Genre::Manual,
        Genre::Tecnico,
        Genre::LivroInfantil,
        Genre::JovemAdulto,
        Genre::Religioso,
        Genre::LivroDidatico,
        Genre::Dicionario,
        Genre::Enciclopedia,
        Genre::RevistaCientifica,
        Genre::Revista,
        Genre::Antologia,
        Genre::ColetaneaDeContos,
        Genre::Memorias,
        Genre::Biografia,
        Genre::Romance,
        Genre::Ficcao,
        Genre::NaoFiccao,
        Genre::Misterio,
        Genre::Fantasia,
        Genre::FiccaoCientifica,
        Genre::Autobiografia,
        Genre::Historia,
        Genre::Poesia,
        Genre::RomanceAmoroso,
        Genre::Suspense,
        Genre::Terror,
        Genre::AutoAjuda,
        Genre::Filosofia,
        Genre::Religiao,
        Genre::Viagem,
        Genre::Culinaria,
        Genre::Arte,
        Genre::Ciencia,
        Genre::Negocios,
        Genre::Infantil,
        Genre::Educacao,
        Genre::Drama,
        Genre::Aventura,
        Genre::Classico,
        Genre::RomanceGrafico,
        Genre::Ensaio,
    ];

    /// Wire code, e.g. `LITERATURA_FICCIONAL`
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Academico => "ACADEMICO",
            Genre::LiteraturaFiccional => "LITERATURA_FICCIONAL",
            Genre::LiteraturaNaoFiccional => "LITERATURA_NAO_FICCIONAL",
            Genre::Referencia => "REFERENCIA",
            Genre::Hq => "HQ",
            Genre::Manga => "MANGA",
            Genre::Manual => "MANUAL",
            Genre::Tecnico => "TECNICO",
            Genre::LivroInfantil => "LIVRO_INFANTIL",
            Genre::JovemAdulto => "JOVEM_ADULTO",
            Genre::Religioso => "RELIGIOSO",
            Genre::LivroDidatico => "LIVRO_DIDATICO",
            Genre::Dicionario => "DICIONARIO",
            Genre::Enciclopedia => "ENCICLOPEDIA",
            Genre::RevistaCientifica => "REVISTA_CIENTIFICA",
            Genre::Revista => "REVISTA",
            Genre::Antologia => "ANTOLOGIA",
            Genre::ColetaneaDeContos => "COLETANEA_DE_CONTOS",
            Genre::Memorias => "MEMORIAS",
            Genre::Biografia => "BIOGRAFIA",
            Genre::Romance => "ROMANCE",
            Genre::Ficcao => "FICCAO",
            Genre::NaoFiccao => "NAO_FICCAO",
            Genre::Misterio => "MISTERIO",
            Genre::Fantasia => "FANTASIA",
            Genre::FiccaoCientifica => "FICCAO_CIENTIFICA",
            Genre::Autobiografia => "AUTOBIOGRAFIA",
            Genre::Historia => "HISTORIA",
            Genre::Poesia => "POESIA",
            Genre::RomanceAmoroso => "ROMANCE_AMOROSO",
            Genre::Suspense => "SUSPENSE",
            Genre::Terror => "TERROR",
            Genre::AutoAjuda => "AUTO_AJUDA",
            Genre::Filosofia => "FILOSOFIA",
            Genre::Religiao => "RELIGIAO",
            Genre::Viagem => "VIAGEM",
            Genre::Culinaria => "CULINARIA",
            Genre::Arte => "ARTE",
            Genre::Ciencia => "CIENCIA",
            Genre::Negocios => "NEGOCIOS",
            Genre::Infantil => "INFANTIL",
            Genre::Educacao => "EDUCACAO",
            Genre::Drama => "DRAMA",
            Genre::Aventura => "AVENTURA",
            Genre::Classico => "CLASSICO",
            Genre::RomanceGrafico => "ROMANCE_GRAFICO",
            Genre::Ensaio => "ENSAIO",
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Genre {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Genre::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == code)
            .ok_or_else(|| format!("Unknown genre: {}", s))
    }
}
