//! Listing content for the home page sliders.

use crate::i18n::Language;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finca {
    pub name: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub nightly_price_cop: u32,
    pub capacity: u32,
    /// Hue of the card artwork.
    pub hue: u16,
}

pub const FINCAS: &[Finca] = &[
    Finca {
        name: "Finca El Paraíso",
        location: "Anapoima, Cundinamarca",
        description: "Casa campestre con piscina, kiosco con BBQ y vista a las montañas. Ideal para familias grandes.",
        nightly_price_cop: 850_000,
        capacity: 16,
        hue: 140,
    },
    Finca {
        name: "Villa Los Guaduales",
        location: "Girardot, Cundinamarca",
        description: "Amplios jardines, piscina para niños y zona de juegos rodeada de guaduales.",
        nightly_price_cop: 620_000,
        capacity: 12,
        hue: 95,
    },
    Finca {
        name: "Hacienda La Esperanza",
        location: "La Mesa, Cundinamarca",
        description: "Hacienda tradicional con cancha de fútbol, caballos y senderos ecológicos.",
        nightly_price_cop: 1_200_000,
        capacity: 24,
        hue: 30,
    },
    Finca {
        name: "Cabañas Río Claro",
        location: "Villeta, Cundinamarca",
        description: "Cabañas junto al río con jacuzzi y desayuno campesino incluido.",
        nightly_price_cop: 480_000,
        capacity: 8,
        hue: 190,
    },
    Finca {
        name: "Finca Mirador del Sol",
        location: "Melgar, Tolima",
        description: "Terraza con vista al valle, piscina con tobogán y cocina equipada.",
        nightly_price_cop: 750_000,
        capacity: 14,
        hue: 45,
    },
    Finca {
        name: "Casa Colonial Santa Ana",
        location: "Villa de Leyva, Boyacá",
        description: "Casa colonial restaurada a pocos pasos de la plaza principal, con chimenea y patio interior.",
        nightly_price_cop: 560_000,
        capacity: 10,
        hue: 12,
    },
    Finca {
        name: "Finca Las Palmas",
        location: "Anapoima, Cundinamarca",
        description: "Palmeras, hamacas y piscina climatizada para descansar todo el fin de semana.",
        nightly_price_cop: 690_000,
        capacity: 12,
        hue: 160,
    },
    Finca {
        name: "Refugio Los Cafetales",
        location: "La Mesa, Cundinamarca",
        description: "Entre cultivos de café, con recorrido guiado y cata incluida.",
        nightly_price_cop: 530_000,
        capacity: 9,
        hue: 25,
    },
];

/// Reasons listed in the information slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoTopic {
    Verified,
    Nature,
    Pets,
    Support,
    Prices,
}

impl InfoTopic {
    pub const ALL: [InfoTopic; 5] = [
        InfoTopic::Verified,
        InfoTopic::Nature,
        InfoTopic::Pets,
        InfoTopic::Support,
        InfoTopic::Prices,
    ];

    pub fn title(self, lang: Language) -> String {
        match self {
            Self::Verified => t!(lang, "info-verified-title"),
            Self::Nature => t!(lang, "info-nature-title"),
            Self::Pets => t!(lang, "info-pets-title"),
            Self::Support => t!(lang, "info-support-title"),
            Self::Prices => t!(lang, "info-prices-title"),
        }
    }

    pub fn body(self, lang: Language) -> String {
        match self {
            Self::Verified => t!(lang, "info-verified-body"),
            Self::Nature => t!(lang, "info-nature-body"),
            Self::Pets => t!(lang, "info-pets-body"),
            Self::Support => t!(lang, "info-support-body"),
            Self::Prices => t!(lang, "info-prices-body"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Municipio {
    pub name: &'static str,
    pub department: &'static str,
    pub average_temp_c: u8,
    pub hue: u16,
}

pub const MUNICIPIOS: &[Municipio] = &[
    Municipio {
        name: "Anapoima",
        department: "Cundinamarca",
        average_temp_c: 28,
        hue: 150,
    },
    Municipio {
        name: "Girardot",
        department: "Cundinamarca",
        average_temp_c: 33,
        hue: 40,
    },
    Municipio {
        name: "Villeta",
        department: "Cundinamarca",
        average_temp_c: 26,
        hue: 110,
    },
    Municipio {
        name: "Melgar",
        department: "Tolima",
        average_temp_c: 30,
        hue: 20,
    },
    Municipio {
        name: "Villa de Leyva",
        department: "Boyacá",
        average_temp_c: 18,
        hue: 210,
    },
];

/// `$850.000` style peso amounts.
pub fn format_cop(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}
